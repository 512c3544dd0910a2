use crate::data;
use crate::Width;

/// флаг двойной ширины в байте свойств таблицы
const DOUBLE_WIDTH: u8 = 0x10;
/// маска категории в байте свойств таблицы
const CATEGORY_MASK: u8 = 0x0F;

/// категория кодпоинта по правилам границ графемных кластеров tr29
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Category
{
    /// обычный кодпоинт - ядро кластера
    Other,
    /// продолжение кластера: Grapheme_Extend и модификаторы эмодзи
    Extend,
    /// управляющий или форматирующий кодпоинт - всегда отдельный кластер
    Control,
    /// одновременно управляющий и продолжающий (теговые символы)
    ExtendAndControl,
    /// отметка, занимающая место (SpacingMark)
    SpacingMark,
    /// кодпоинт, присоединяющийся к следующему за ним кластеру
    Prepend,
    /// ведущая согласная чамо хангыль
    HangulL,
    /// гласная чамо хангыль
    HangulV,
    /// завершающая согласная чамо хангыль
    HangulT,
    /// слог хангыль LV или LVT
    HangulLvOrLvt,
    /// региональный индикатор
    RegionalIndicator,
    /// расширенная пиктограмма
    ExtendedPicto,
    /// ZERO WIDTH JOINER
    Zwj,
}

impl Category
{
    /// категория из байта свойств таблицы
    #[inline(always)]
    fn from_raw(props: u8) -> Self
    {
        match props & CATEGORY_MASK {
            1 => Self::Extend,
            2 => Self::Control,
            3 => Self::ExtendAndControl,
            4 => Self::SpacingMark,
            5 => Self::Prepend,
            6 => Self::HangulL,
            7 => Self::HangulV,
            8 => Self::HangulT,
            9 => Self::HangulLvOrLvt,
            10 => Self::RegionalIndicator,
            11 => Self::ExtendedPicto,
            12 => Self::Zwj,
            _ => Self::Other,
        }
    }
}

/// категория и ширина кодпоинта. кодпоинты, не попавшие в таблицу -
/// обычные, одинарной ширины
#[inline(always)]
pub(crate) fn category_and_width(code: u32) -> (Category, Width)
{
    let ranges = data::cluster_break().ranges;
    let index = ranges.partition_point(|&(first, _, _)| first <= code);

    if index > 0 {
        let (_, last, props) = ranges[index - 1];

        if code <= last {
            let width = match props & DOUBLE_WIDTH != 0 {
                true => 2,
                false => 1,
            };

            return (Category::from_raw(props), width);
        }
    }

    (Category::Other, 1)
}
