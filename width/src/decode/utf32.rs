use crate::decode::CodepointCount;
use crate::decode::REPLACEMENT;
use crate::sink::CodepointSink;
use crate::SurrogatePolicy;

/// декодировать UTF-32: значения за пределами U+10FFFF заменяются на U+FFFD.
/// политика суррогатов на этом пути не применяется - суррогатные скаляры
/// передаются без изменений
pub(crate) fn decode<S: CodepointSink>(sink: &mut S, src: &[u32], _policy: SurrogatePolicy)
{
    for &ch in src {
        let code = match ch < 0x110000 {
            true => ch,
            false => REPLACEMENT,
        };

        if !sink.write(code) {
            return;
        }
    }
}

/// посчитать кодпоинты UTF-32: один кодпоинт на единицу кодирования
pub(crate) fn count_codepoints(src: &[u32], max_count: usize, _policy: SurrogatePolicy)
    -> CodepointCount
{
    match max_count <= src.len() {
        true => CodepointCount {
            count: max_count,
            pos: max_count,
        },
        false => CodepointCount {
            count: src.len(),
            pos: src.len(),
        },
    }
}
