pub use data::cluster_break;
pub use data::ClusterBreakData;
pub use decode::CodeUnit;
pub use decode::CodepointCount;
pub use sink::CodepointSink;

use decrementer::WidthDecrementer;
use decrementer::WidthDecrementerWithPos;

mod category;
mod cluster;
mod data;
mod decode;
mod decrementer;
mod sink;

/// ширина в колонках моноширинного терминала
pub type Width = i32;

/// политика обработки одиночных суррогатов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurrogatePolicy
{
    /// одиночный суррогат заменяется на U+FFFD
    #[default]
    Strict,
    /// одиночный суррогат пропускается как есть
    Lax,
}

/// результат измерения ширины с позицией
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthAndPos
{
    /// измеренная ширина, не превышает лимит
    pub width: Width,
    /// смещение в единицах кодирования, на котором остановилось измерение.
    /// если лимит не был исчерпан - длина строки
    pub pos: usize,
}

/// ширина строки в колонках терминала, не более limit.
/// лимит исчерпан - значит полная ширина строки не меньше лимита,
/// и результатом является сам лимит
#[inline(never)]
pub fn str_width<U: CodeUnit>(limit: Width, src: &[U], policy: SurrogatePolicy) -> Width
{
    if limit <= 0 {
        return 0;
    }

    let mut decrementer = WidthDecrementer::new(limit);
    U::decode(&mut decrementer, src, policy);

    limit - decrementer.remaining_width()
}

/// ширина строки в колонках терминала и позиция, на которой исчерпался лимит.
/// позиция - в единицах кодирования источника; байтовый оффсет для UTF-8
#[inline(never)]
pub fn str_width_and_pos<U: CodeUnit>(
    limit: Width,
    src: &[U],
    policy: SurrogatePolicy,
) -> WidthAndPos
{
    if limit <= 0 {
        return WidthAndPos { width: 0, pos: 0 };
    }

    let mut decrementer = WidthDecrementerWithPos::new(limit);
    U::decode(&mut decrementer, src, policy);

    let result = decrementer.remaining_width_and_codepoints_count();
    let width = limit - result.width;

    if result.whole_string_covered {
        return WidthAndPos {
            width,
            pos: src.len(),
        };
    }

    // повторный проход по источнику: позиция первого не поместившегося
    // кодпоинта восстанавливается по их количеству, без хранения оффсетов
    let counted = U::count_codepoints(src, result.codepoints_count, policy);

    WidthAndPos {
        width,
        pos: counted.pos,
    }
}
