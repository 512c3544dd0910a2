use std::collections::HashMap;
use std::fs;

/// версия UCD, из которой собирается таблица
pub const UNICODE_VERSION: (u8, u8, u8) = (15, 1, 0);

/// каталог с файлами UCD. файлы не хранятся в репозитории,
/// перед запуском их нужно скачать с unicode.org
const UCD_DIR: &str = "./data/ucd/15.1.0";

lazy_static! {
    /// классы Grapheme_Cluster_Break
    pub static ref GRAPHEME_BREAK: HashMap<u32, GraphemeBreak> = grapheme_break();
    /// диапазоны со свойством Extended_Pictographic
    pub static ref EXTENDED_PICTOGRAPHIC: Vec<(u32, u32)> =
        property_ranges("emoji/emoji-data.txt", "Extended_Pictographic");
    /// диапазоны со свойством Emoji_Modifier
    pub static ref EMOJI_MODIFIER: Vec<(u32, u32)> =
        property_ranges("emoji/emoji-data.txt", "Emoji_Modifier");
    /// диапазоны управляющих общих категорий: Cc, Cf, Zl, Zp
    pub static ref CONTROL_CATEGORY: Vec<(u32, u32)> = control_category();
    /// диапазоны неназначенных кодпоинтов (Cn)
    pub static ref UNASSIGNED: Vec<(u32, u32)> =
        property_ranges("extracted/DerivedGeneralCategory.txt", "Cn");
    /// диапазоны Default_Ignorable_Code_Point
    pub static ref DEFAULT_IGNORABLE: Vec<(u32, u32)> =
        property_ranges("DerivedCoreProperties.txt", "Default_Ignorable_Code_Point");
}

/// класс Grapheme_Cluster_Break из UCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphemeBreak
{
    Control,
    Cr,
    Lf,
    Extend,
    Zwj,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    Lv,
    Lvt,
}

impl TryFrom<&str> for GraphemeBreak
{
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        match value {
            "Control" => Ok(Self::Control),
            "CR" => Ok(Self::Cr),
            "LF" => Ok(Self::Lf),
            "Extend" => Ok(Self::Extend),
            "ZWJ" => Ok(Self::Zwj),
            "Regional_Indicator" => Ok(Self::RegionalIndicator),
            "Prepend" => Ok(Self::Prepend),
            "SpacingMark" => Ok(Self::SpacingMark),
            "L" => Ok(Self::L),
            "V" => Ok(Self::V),
            "T" => Ok(Self::T),
            "LV" => Ok(Self::Lv),
            "LVT" => Ok(Self::Lvt),
            _ => Err(format!("неизвестный класс GCB: {}", value)),
        }
    }
}

/// входит ли кодпоинт в отсортированные диапазоны
pub fn in_ranges(ranges: &[(u32, u32)], code: u32) -> bool
{
    let index = ranges.partition_point(|&(first, _)| first <= code);

    index > 0 && code <= ranges[index - 1].1
}

/// разбор GraphemeBreakProperty.txt в таблицу классов по кодпоинтам
fn grapheme_break() -> HashMap<u32, GraphemeBreak>
{
    let mut map = HashMap::new();

    for (first, last, value) in parse_property_file("auxiliary/GraphemeBreakProperty.txt") {
        let class = GraphemeBreak::try_from(value.as_str()).unwrap();

        for code in first ..= last {
            map.insert(code, class);
        }
    }

    map
}

/// диапазоны кодпоинтов с заданным значением свойства, отсортированные
fn property_ranges(name: &str, property: &str) -> Vec<(u32, u32)>
{
    let mut ranges: Vec<(u32, u32)> = parse_property_file(name)
        .into_iter()
        .filter(|(_, _, value)| value == property)
        .map(|(first, last, _)| (first, last))
        .collect();

    ranges.sort();

    ranges
}

/// диапазоны общих категорий Cc, Cf, Zl, Zp
fn control_category() -> Vec<(u32, u32)>
{
    let mut ranges: Vec<(u32, u32)> = parse_property_file("extracted/DerivedGeneralCategory.txt")
        .into_iter()
        .filter(|(_, _, value)| matches!(value.as_str(), "Cc" | "Cf" | "Zl" | "Zp"))
        .map(|(first, last, _)| (first, last))
        .collect();

    ranges.sort();

    ranges
}

/// разбор файла свойств UCD: строки вида "XXXX[..YYYY] ; Значение # ..."
fn parse_property_file(name: &str) -> Vec<(u32, u32, String)>
{
    let path = format!("{}/{}", UCD_DIR, name);
    let data = fs::read_to_string(&path).unwrap();

    let mut result = vec![];

    for line in data.lines() {
        let line = line.split('#').next().unwrap().trim();

        if line.is_empty() {
            continue;
        }

        let (codes, value) = line.split_once(';').unwrap();
        let value = value.trim().split_whitespace().next().unwrap().to_owned();
        let codes = codes.trim();

        let (first, last) = match codes.split_once("..") {
            Some((first, last)) => (
                u32::from_str_radix(first, 16).unwrap(),
                u32::from_str_radix(last, 16).unwrap(),
            ),
            None => {
                let code = u32::from_str_radix(codes, 16).unwrap();

                (code, code)
            }
        };

        result.push((first, last, value));
    }

    result
}
