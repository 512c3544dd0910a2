/// данные классификации кодпоинтов для кластерного автомата
pub struct ClusterBreakData<'a>
{
    /// версия Unicode, из которой собрана таблица
    pub unicode_version: (u8, u8, u8),
    /// отсортированные непересекающиеся диапазоны:
    /// (первый кодпоинт, последний кодпоинт, категория | флаг двойной ширины).
    /// кодпоинты вне диапазонов - обычные, одинарной ширины
    pub ranges: &'a [(u32, u32, u8)],
}

/// подготовленная таблица классификации
pub fn cluster_break<'a>() -> ClusterBreakData<'a>
{
    include!("./../../data/width_gcb.txt")
}
