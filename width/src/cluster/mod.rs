use crate::category::category_and_width;
use crate::category::Category;
use crate::Width;

mod hangul;

/// состояние кластерного автомата - битовая маска
pub(crate) type State = u32;

/// начальное состояние
pub(crate) const INITIAL: State = 0;
/// после prepend-кодпоинта
const AFTER_PREPEND: State = 1;
/// после ядра кластера
const AFTER_CORE: State = 1 << 1;
/// после регионального индикатора
const AFTER_RI: State = AFTER_CORE | (1 << 2);
/// после расширенной пиктограммы
const AFTER_XPIC: State = AFTER_CORE | (1 << 3);
/// после расширенной пиктограммы и ZWJ
const AFTER_XPIC_ZWJ: State = AFTER_CORE | (1 << 4);
/// общий бит состояний хангыль
const AFTER_HANGUL: State = AFTER_CORE | (1 << 5);
/// после ведущей согласной чамо
const AFTER_HANGUL_L: State = AFTER_HANGUL | (1 << 6);
/// после гласной чамо
const AFTER_HANGUL_V: State = AFTER_HANGUL | (1 << 7);
/// после завершающей согласной чамо
const AFTER_HANGUL_T: State = AFTER_HANGUL | (1 << 8);
/// после слога LV
const AFTER_HANGUL_LV: State = AFTER_HANGUL | (1 << 9);
/// после слога LVT
const AFTER_HANGUL_LVT: State = AFTER_HANGUL | (1 << 10);
/// после кодпоинта, продолжившего кластер за ядром
const AFTER_POSCORE: State = 1 << 11;
/// после CR
const AFTER_CR: State = 1 << 12;

/// результат прохода автомата по диапазону кодпоинтов
pub(crate) struct ClusterRun
{
    /// остаток лимита ширины
    pub width: Width,
    /// состояние автомата на выходе
    pub state: State,
    /// индекс первого кодпоинта, не поместившегося в лимит,
    /// или длина диапазона, если поместились все
    pub stop: usize,
}

/// прогнать кластерный автомат по диапазону кодпоинтов, списывая ширину
/// кластеров с остатка лимита. ширина кластера равна ширине его первого
/// кодпоинта, остальные кодпоинты кластера лимит не уменьшают.
///
/// состояние автомата переносится между вызовами: разбор буфера частями
/// эквивалентен разбору всей строки за один проход.
///
/// в режиме return_pos при точном исчерпании лимита автомат продолжает
/// работу - хвост текущего кластера ещё может поместиться - и
/// останавливается на первом кодпоинте, который в лимит уже не попадает
pub(crate) fn width_run(
    codepoints: &[u32],
    mut width: Width,
    mut state: State,
    return_pos: bool,
) -> ClusterRun
{
    let mut i = 0;

    while i < codepoints.len() {
        let code = codepoints[i];
        i += 1;

        let mut ch_width: Width = 1;

        let new_cluster = match code {
            0x000D => {
                state = AFTER_CR;
                true
            }
            0x000A => {
                // CRLF - один кластер
                let joins = state == AFTER_CR;
                state = INITIAL;
                !joins
            }
            0x20 ..= 0x7E => {
                let joins = state == AFTER_PREPEND;
                state = AFTER_CORE;
                !joins
            }
            0x00 ..= 0x1F => {
                state = INITIAL;
                true
            }
            _ => {
                let (category, w) = category_and_width(code);
                ch_width = w;

                match category {
                    Category::Other => {
                        let joins = state == AFTER_PREPEND;
                        state = AFTER_CORE;
                        !joins
                    }
                    Category::Extend | Category::ExtendAndControl => match state == AFTER_XPIC {
                        true => false,
                        false => spacing_mark(&mut state),
                    },
                    Category::Zwj => match state == AFTER_XPIC {
                        true => {
                            state = AFTER_XPIC_ZWJ;
                            false
                        }
                        false => spacing_mark(&mut state),
                    },
                    Category::SpacingMark => spacing_mark(&mut state),
                    Category::Prepend => match state == AFTER_PREPEND {
                        true => false,
                        false => {
                            state = AFTER_PREPEND;
                            true
                        }
                    },
                    Category::RegionalIndicator => match state == AFTER_RI {
                        // пара региональных индикаторов - один кластер (флаг)
                        true => {
                            state = AFTER_CORE;
                            false
                        }
                        false => {
                            let joins = state == AFTER_PREPEND;
                            state = AFTER_RI;
                            !joins
                        }
                    },
                    Category::ExtendedPicto => match state == AFTER_XPIC_ZWJ {
                        // ZWJ-последовательность продолжает пиктографический кластер
                        true => {
                            state = AFTER_XPIC;
                            false
                        }
                        false => {
                            let joins = state == AFTER_PREPEND;
                            state = AFTER_XPIC;
                            !joins
                        }
                    },
                    Category::HangulL => hangul_join(&mut state, AFTER_HANGUL_L, AFTER_HANGUL_L),
                    Category::HangulV => hangul_join(
                        &mut state,
                        AFTER_HANGUL_V,
                        AFTER_HANGUL_L | AFTER_HANGUL_V | AFTER_HANGUL_LV,
                    ),
                    Category::HangulT => hangul_join(
                        &mut state,
                        AFTER_HANGUL_T,
                        AFTER_HANGUL_V | AFTER_HANGUL_T | AFTER_HANGUL_LV | AFTER_HANGUL_LVT,
                    ),
                    Category::HangulLvOrLvt => {
                        let next = match hangul::is_lv(code) {
                            true => AFTER_HANGUL_LV,
                            false => AFTER_HANGUL_LVT,
                        };

                        hangul_join(&mut state, next, AFTER_HANGUL_L)
                    }
                    Category::Control => {
                        state = INITIAL;
                        true
                    }
                }
            }
        };

        if !new_cluster {
            continue;
        }

        // первый кодпоинт кластера - списываем его ширину с остатка лимита
        if ch_width >= width {
            if !return_pos {
                return ClusterRun {
                    width: 0,
                    state: INITIAL,
                    stop: 0,
                };
            }

            if ch_width > width {
                return ClusterRun {
                    width: 0,
                    state: INITIAL,
                    stop: i - 1,
                };
            }

            // лимит исчерпан ровно - текущий кластер ещё может продолжиться
            width = 0;
            continue;
        }

        width -= ch_width;
    }

    ClusterRun {
        width,
        state,
        stop: codepoints.len(),
    }
}

/// отметка после ядра кластера продолжает его, иначе - начинает новый кластер
#[inline(always)]
fn spacing_mark(state: &mut State) -> bool
{
    let joins = *state & (AFTER_PREPEND | AFTER_CORE | AFTER_POSCORE) != 0;
    *state = AFTER_POSCORE;

    !joins
}

/// переход для чамо и слогов хангыль. joins - состояния, к которым кодпоинт
/// присоединяется по правилам L x (L|V|LV|LVT), (LV|V) x (V|T), (LVT|T) x T
#[inline(always)]
fn hangul_join(state: &mut State, next: State, joins: State) -> bool
{
    // различающие биты, без общей части AFTER_HANGUL
    let mask = !AFTER_HANGUL & joins;

    if *state & mask != 0 {
        *state = next;
        return false;
    }

    let new_cluster = *state != AFTER_PREPEND;
    *state = next;

    new_cluster
}
