// слоги хангыль (U+AC00..U+D7A3) расположены блоками: слог LV, за которым
// идут его LVT-варианты со всеми завершающими согласными

/// начало блока слогов хангыль
const HANGUL_S_BASE: u32 = 0xAC00;
/// количество завершающих согласных
const HANGUL_T_COUNT: u32 = 27;
/// количество кодпоинтов на блок LV: сам слог LV и его LVT-варианты
const HANGUL_T_BLOCK_SIZE: u32 = HANGUL_T_COUNT + 1;

/// является ли слог хангыль слогом LV - слоги LV стоят в начале каждого блока
#[inline(always)]
pub(crate) fn is_lv(code: u32) -> bool
{
    (code - HANGUL_S_BASE) % HANGUL_T_BLOCK_SIZE == 0
}
