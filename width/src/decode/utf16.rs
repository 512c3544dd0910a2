use crate::decode::is_high_surrogate;
use crate::decode::is_low_surrogate;
use crate::decode::not_surrogate;
use crate::decode::CodepointCount;
use crate::decode::REPLACEMENT;
use crate::sink::CodepointSink;
use crate::SurrogatePolicy;

/// декодировать UTF-16 в поток кодпоинтов.
///
/// одиночный суррогат заменяется на U+FFFD или пропускается как есть -
/// в зависимости от политики. замена касается только текущей единицы:
/// единица, следующая за непарным старшим суррогатом, рассматривается заново
pub(crate) fn decode<S: CodepointSink>(sink: &mut S, src: &[u16], policy: SurrogatePolicy)
{
    let len = src.len();
    let mut i = 0;

    while i < len {
        let ch = src[i] as u32;
        i += 1;

        let code = if not_surrogate(ch) {
            ch
        } else if is_high_surrogate(ch) && i < len && is_low_surrogate(src[i] as u32) {
            let low = src[i] as u32;
            i += 1;

            0x10000 + (((ch & 0x3FF) << 10) | (low & 0x3FF))
        } else if policy == SurrogatePolicy::Lax {
            ch
        } else {
            REPLACEMENT
        };

        if !sink.write(code) {
            return;
        }
    }
}

/// посчитать кодпоинты UTF-16: суррогатная пара - один кодпоинт
pub(crate) fn count_codepoints(src: &[u16], max_count: usize, _policy: SurrogatePolicy)
    -> CodepointCount
{
    let len = src.len();
    let mut count = 0;
    let mut i = 0;

    while i < len && count < max_count {
        let ch = src[i] as u32;
        i += 1;
        count += 1;

        if is_high_surrogate(ch) && i < len && is_low_surrogate(src[i] as u32) {
            i += 1;
        }
    }

    CodepointCount { count, pos: i }
}
