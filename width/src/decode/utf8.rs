use crate::decode::CodepointCount;
use crate::decode::REPLACEMENT;
use crate::sink::CodepointSink;
use crate::SurrogatePolicy;

/// маска, исключающая 2 старших бита в байтах продолжения UTF-8
const CONT_MASK: u32 = 0x3F;

/// байт продолжения последовательности?
#[inline(always)]
fn is_continuation(byte: u8) -> bool
{
    byte & 0xC0 == 0x80
}

/// код двухбайтовой последовательности
#[inline(always)]
fn decode_2(ch0: u8, ch1: u8) -> u32
{
    ((ch0 as u32 & 0x1F) << 6) | (ch1 as u32 & CONT_MASK)
}

/// старшие 11 бит трёхбайтовой последовательности - по ним суррогатный
/// диапазон проверяется до чтения последнего байта
#[inline(always)]
fn first_2_of_3(ch0: u8, ch1: u8) -> u32
{
    ((ch0 as u32 & 0x0F) << 6) | (ch1 as u32 & CONT_MASK)
}

/// старшие биты трёхбайтовой последовательности допустимы?
#[inline(always)]
fn first_2_of_3_are_valid(x: u32, policy: SurrogatePolicy) -> bool
{
    policy == SurrogatePolicy::Lax || x >> 5 != 0x1B
}

/// старшие биты четырёхбайтовой последовательности
#[inline(always)]
fn first_2_of_4(ch0: u8, ch1: u8) -> u32
{
    (((ch0 ^ 0xF0) as u32) << 6) | (ch1 as u32 & CONT_MASK)
}

/// старшие биты четырёхбайтовой последовательности допустимы?
/// отсекаются избыточные кодировки и кодпоинты за U+10FFFF
#[inline(always)]
fn first_2_of_4_are_valid(x: u32) -> bool
{
    0xF < x && x < 0x110
}

/// декодировать UTF-8 в поток кодпоинтов.
///
/// каждый некорректный ведущий байт даёт один U+FFFD; байты за ним
/// рассматриваются как начало новой последовательности. корректное начало
/// оборванной последовательности поглощается вместе с ней
pub(crate) fn decode<S: CodepointSink>(sink: &mut S, src: &[u8], policy: SurrogatePolicy)
{
    let len = src.len();
    let mut i = 0;

    while i < len {
        let ch0 = src[i];
        i += 1;

        let code = if ch0 < 0x80 {
            ch0 as u32
        } else if ch0 & 0xE0 == 0xC0 {
            tail_2(src, &mut i, ch0)
        } else if ch0 == 0xE0 {
            tail_3_e0(src, &mut i)
        } else if ch0 & 0xF0 == 0xE0 {
            tail_3(src, &mut i, ch0, policy)
        } else {
            tail_4(src, &mut i, ch0)
        };

        if !sink.write(code) {
            return;
        }
    }
}

/// прочитать хвост двухбайтовой последовательности.
/// ведущие C0 и C1 недопустимы - избыточная кодировка ASCII
#[inline(always)]
fn tail_2(src: &[u8], i: &mut usize, ch0: u8) -> u32
{
    if ch0 > 0xC1 && *i < src.len() && is_continuation(src[*i]) {
        let ch1 = src[*i];
        *i += 1;

        return decode_2(ch0, ch1);
    }

    REPLACEMENT
}

/// прочитать хвост трёхбайтовой последовательности с ведущим E0.
/// продолжение обязано попадать в A0..BF - отсекаются избыточные кодировки
#[inline(always)]
fn tail_3_e0(src: &[u8], i: &mut usize) -> u32
{
    let len = src.len();

    if *i < len && src[*i] & 0xE0 == 0xA0 {
        let ch1 = src[*i];
        *i += 1;

        if *i < len && is_continuation(src[*i]) {
            let ch2 = src[*i];
            *i += 1;

            return ((ch1 as u32 & CONT_MASK) << 6) | (ch2 as u32 & CONT_MASK);
        }
    }

    REPLACEMENT
}

/// прочитать хвост трёхбайтовой последовательности с ведущим E1..EF
#[inline(always)]
fn tail_3(src: &[u8], i: &mut usize, ch0: u8, policy: SurrogatePolicy) -> u32
{
    let len = src.len();

    if *i < len && is_continuation(src[*i]) {
        let x = first_2_of_3(ch0, src[*i]);

        if first_2_of_3_are_valid(x, policy) {
            *i += 1;

            if *i < len && is_continuation(src[*i]) {
                let ch2 = src[*i];
                *i += 1;

                return (x << 6) | (ch2 as u32 & CONT_MASK);
            }
        }
    }

    REPLACEMENT
}

/// прочитать хвост четырёхбайтовой последовательности. сюда же попадают
/// одиночные байты продолжения и ведущие F5..FF - их отсекает проверка
/// старших бит
#[inline(always)]
fn tail_4(src: &[u8], i: &mut usize, ch0: u8) -> u32
{
    let len = src.len();

    if *i < len && is_continuation(src[*i]) {
        let x = first_2_of_4(ch0, src[*i]);

        if first_2_of_4_are_valid(x) {
            *i += 1;

            if *i < len && is_continuation(src[*i]) {
                let ch2 = src[*i];
                *i += 1;

                if *i < len && is_continuation(src[*i]) {
                    let ch3 = src[*i];
                    *i += 1;

                    return (x << 12) | ((ch2 as u32 & CONT_MASK) << 6) | (ch3 as u32 & CONT_MASK);
                }
            }
        }
    }

    REPLACEMENT
}

/// посчитать кодпоинты UTF-8 без декодирования - правила длины и поглощения
/// байтов те же, что в decode()
pub(crate) fn count_codepoints(src: &[u8], max_count: usize, policy: SurrogatePolicy)
    -> CodepointCount
{
    let len = src.len();
    let mut count = 0;
    let mut i = 0;

    while i < len && count != max_count {
        let ch0 = src[i];
        i += 1;
        count += 1;

        if ch0 < 0x80 {
            continue;
        }

        if ch0 & 0xE0 == 0xC0 {
            if ch0 > 0xC1 && i < len && is_continuation(src[i]) {
                i += 1;
            }
        } else if ch0 == 0xE0 {
            if i < len && src[i] & 0xE0 == 0xA0 {
                i += 1;

                if i < len && is_continuation(src[i]) {
                    i += 1;
                }
            }
        } else if ch0 & 0xF0 == 0xE0 {
            if i < len
                && is_continuation(src[i])
                && first_2_of_3_are_valid(first_2_of_3(ch0, src[i]), policy)
            {
                i += 1;

                if i < len && is_continuation(src[i]) {
                    i += 1;
                }
            }
        } else if i < len
            && is_continuation(src[i])
            && first_2_of_4_are_valid(first_2_of_4(ch0, src[i]))
        {
            i += 1;

            if i < len && is_continuation(src[i]) {
                i += 1;

                if i < len && is_continuation(src[i]) {
                    i += 1;
                }
            }
        }
    }

    CodepointCount { count, pos: i }
}
