use crate::ucd;
use crate::ucd::GraphemeBreak;

/// категории кодпоинтов кластерного автомата. значения совпадают с байтом
/// свойств в таблице данных
pub const CAT_OTHER: u8 = 0;
pub const CAT_EXTEND: u8 = 1;
pub const CAT_CONTROL: u8 = 2;
pub const CAT_EXTEND_AND_CONTROL: u8 = 3;
pub const CAT_SPACING_MARK: u8 = 4;
pub const CAT_PREPEND: u8 = 5;
pub const CAT_HANGUL_L: u8 = 6;
pub const CAT_HANGUL_V: u8 = 7;
pub const CAT_HANGUL_T: u8 = 8;
pub const CAT_HANGUL_LV_OR_LVT: u8 = 9;
pub const CAT_REGIONAL_INDICATOR: u8 = 10;
pub const CAT_EXTENDED_PICTO: u8 = 11;
pub const CAT_ZWJ: u8 = 12;

/// флаг двойной ширины
pub const DOUBLE_WIDTH: u8 = 0x10;

/// последний кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;

/// диапазоны двойной ширины по таблице ширины стандартной библиотеки
/// форматирования
pub const DOUBLE_WIDTH_RANGES: [(u32, u32); 14] = [
    (0x1100, 0x115F),
    (0x2329, 0x232A),
    (0x2E80, 0x303E),
    (0x3040, 0xA4CF),
    (0xAC00, 0xD7A3),
    (0xF900, 0xFAFF),
    (0xFE10, 0xFE19),
    (0xFE30, 0xFE6F),
    (0xFF00, 0xFF60),
    (0xFFE0, 0xFFE6),
    (0x1F300, 0x1F64F),
    (0x1F900, 0x1F9FF),
    (0x20000, 0x2FFFD),
    (0x30000, 0x3FFFD),
];

/// итоговая таблица свойств: категория и флаг ширины для каждого кодпоинта,
/// свёрнутые в диапазоны
pub fn prepare() -> Vec<(u32, u32, u8)>
{
    let ranges = ranges_from(|code| {
        let mut props = category(code);

        if is_double_width(code) {
            props |= DOUBLE_WIDTH;
        }

        props
    });

    verify(&ranges);

    ranges
}

/// собрать отсортированные диапазоны свойств по классификатору.
/// диапазоны со значением по умолчанию (обычный кодпоинт одинарной ширины)
/// в таблицу не записываются
pub fn ranges_from<F>(classify: F) -> Vec<(u32, u32, u8)>
where
    F: Fn(u32) -> u8,
{
    let mut ranges = vec![];

    let mut first = 0;
    let mut current = classify(0);

    for code in 1 ..= LAST_CODEPOINT {
        let props = classify(code);

        if props != current {
            if current != CAT_OTHER {
                ranges.push((first, code - 1, current));
            }

            first = code;
            current = props;
        }
    }

    if current != CAT_OTHER {
        ranges.push((first, LAST_CODEPOINT, current));
    }

    ranges
}

/// проверить, что диапазоны отсортированы и не пересекаются
pub fn verify(ranges: &[(u32, u32, u8)])
{
    for (index, &(first, last, _)) in ranges.iter().enumerate() {
        assert!(
            first <= last,
            "диапазон {}: U+{:04X} > U+{:04X}",
            index,
            first,
            last
        );

        if index > 0 {
            assert!(
                ranges[index - 1].1 < first,
                "диапазон {} пересекается с предыдущим",
                index
            );
        }
    }
}

/// кодпоинт двойной ширины?
fn is_double_width(code: u32) -> bool
{
    DOUBLE_WIDTH_RANGES
        .iter()
        .any(|&(first, last)| first <= code && code <= last)
}

/// категория кодпоинта. у кодпоинта не может быть больше одной категории:
/// порядок проверок повторяет порядок из генератора исходной таблицы
fn category(code: u32) -> u8
{
    let gcb = ucd::GRAPHEME_BREAK.get(&code).copied();

    let extend = gcb == Some(GraphemeBreak::Extend)
        || ucd::in_ranges(&ucd::EMOJI_MODIFIER, code);
    let control = is_control(code, gcb);

    if extend && control {
        return CAT_EXTEND_AND_CONTROL;
    }

    if control {
        return CAT_CONTROL;
    }

    if extend {
        return CAT_EXTEND;
    }

    match gcb {
        Some(GraphemeBreak::Zwj) => CAT_ZWJ,
        Some(GraphemeBreak::SpacingMark) => CAT_SPACING_MARK,
        Some(GraphemeBreak::Prepend) => CAT_PREPEND,
        Some(GraphemeBreak::RegionalIndicator) => CAT_REGIONAL_INDICATOR,
        Some(GraphemeBreak::L) => CAT_HANGUL_L,
        Some(GraphemeBreak::V) => CAT_HANGUL_V,
        Some(GraphemeBreak::T) => CAT_HANGUL_T,
        Some(GraphemeBreak::Lv) | Some(GraphemeBreak::Lvt) => CAT_HANGUL_LV_OR_LVT,
        _ => match ucd::in_ranges(&ucd::EXTENDED_PICTOGRAPHIC, code) {
            true => CAT_EXTENDED_PICTO,
            false => CAT_OTHER,
        },
    }
}

/// управляющий кодпоинт: разделители строк и абзацев, Cc, Cf и неназначенные
/// игнорируемые по умолчанию. ZWNJ, ZWJ и prepend-кодпоинты исключаются.
/// CR и LF остаются управляющими - автомат разбирает их до обращения к таблице
fn is_control(code: u32, gcb: Option<GraphemeBreak>) -> bool
{
    if code == 0x200C || code == 0x200D {
        return false;
    }

    if gcb == Some(GraphemeBreak::Prepend) {
        return false;
    }

    ucd::in_ranges(&ucd::CONTROL_CATEGORY, code)
        || (ucd::in_ranges(&ucd::UNASSIGNED, code)
            && ucd::in_ranges(&ucd::DEFAULT_IGNORABLE, code))
}
