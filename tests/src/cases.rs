use unicode_string_width::str_width;
use unicode_string_width::str_width_and_pos;
use unicode_string_width::SurrogatePolicy;
use unicode_string_width::Width;
use unicode_string_width::WidthAndPos;

const UNLIMITED: Width = Width::MAX;

/// ширина UTF-8 строки без ограничения
fn width(src: &str) -> Width
{
    str_width(UNLIMITED, src.as_bytes(), SurrogatePolicy::Strict)
}

/// ширина и позиция UTF-8 строки с лимитом
fn width_and_pos(limit: Width, src: &str) -> WidthAndPos
{
    str_width_and_pos(limit, src.as_bytes(), SurrogatePolicy::Strict)
}

#[test]
fn ascii_within_limit()
{
    assert_eq!(str_width(1000, b"abcd", SurrogatePolicy::Strict), 4);
    assert_eq!(width_and_pos(1000, "abcd"), WidthAndPos { width: 4, pos: 4 });
}

#[test]
fn ascii_clipped()
{
    assert_eq!(str_width(3, b"abcd", SurrogatePolicy::Strict), 3);
    assert_eq!(width_and_pos(3, "abcd"), WidthAndPos { width: 3, pos: 3 });
}

/// ширина k ASCII-символов при достаточном лимите равна k
#[test]
fn ascii_identity()
{
    let src = "a".repeat(100);

    assert_eq!(width(&src), 100);
    assert_eq!(
        width_and_pos(1000, &src),
        WidthAndPos {
            width: 100,
            pos: 100
        }
    );
}

#[test]
fn empty_string()
{
    assert_eq!(str_width(5, b"", SurrogatePolicy::Strict), 0);
    assert_eq!(width_and_pos(5, ""), WidthAndPos { width: 0, pos: 0 });
}

/// нулевой лимит - ответ без просмотра строки
#[test]
fn zero_limit()
{
    assert_eq!(str_width(0, b"abcd", SurrogatePolicy::Strict), 0);
    assert_eq!(width_and_pos(0, "abcd"), WidthAndPos { width: 0, pos: 0 });
}

/// комбинируемая отметка присоединяется к предыдущему кодпоинту
#[test]
fn combining_mark_joins()
{
    let src = "a\u{0308}b";

    assert_eq!(width(src), 2);
    assert_eq!(
        width_and_pos(1000, src),
        WidthAndPos {
            width: 2,
            pos: src.len()
        }
    );
}

/// ZWJ-последовательность эмодзи - один кластер двойной ширины
#[test]
fn emoji_zwj_sequence()
{
    let src = "\u{1F469}\u{200D}\u{1F4BB}";

    assert_eq!(width(src), 2);
    assert_eq!(
        width_and_pos(1000, src),
        WidthAndPos {
            width: 2,
            pos: src.len()
        }
    );
}

/// чамо L + V + T - один слог хангыль двойной ширины
#[test]
fn hangul_jamo_syllable()
{
    let src = "\u{1100}\u{1161}\u{11A8}";

    assert_eq!(width(src), 2);
    assert_eq!(
        width_and_pos(1000, src),
        WidthAndPos {
            width: 2,
            pos: src.len()
        }
    );
}

/// слог LV комбинируется с последующими V и T
#[test]
fn hangul_lv_syllable_joins()
{
    // U+AC00 (가, LV) + U+11A8 (завершающая согласная)
    assert_eq!(width("\u{AC00}\u{11A8}"), 2);
    // U+AC01 (각, LVT) + ещё одна завершающая согласная
    assert_eq!(width("\u{AC01}\u{11A8}"), 2);
    // два слога подряд не комбинируются
    assert_eq!(width("\u{AC00}\u{AC01}"), 4);
}

/// CRLF - один кластер ширины 1
#[test]
fn crlf_is_one_cluster()
{
    assert_eq!(width("\r\n"), 1);
    assert_eq!(width_and_pos(1000, "\r\n"), WidthAndPos { width: 1, pos: 2 });

    // LF без CR - отдельный кластер
    assert_eq!(width("\n\r"), 2);
}

/// региональные индикаторы группируются парами, ширина каждого кластера -
/// ширина его первого кодпоинта
#[test]
fn regional_indicators_pair_up()
{
    let src = "\u{1F1E6}\u{1F1E7}\u{1F1E8}";

    assert_eq!(width(src), 2);
    assert_eq!(
        width_and_pos(1000, src),
        WidthAndPos {
            width: 2,
            pos: src.len()
        }
    );
}

/// prepend-кодпоинт присоединяет следующий за ним кластер
#[test]
fn prepend_attaches_to_next()
{
    // U+0600 ARABIC NUMBER SIGN + цифры
    assert_eq!(width("\u{0600}12"), 2);
}

/// широкие кодпоинты списывают по две колонки
#[test]
fn wide_codepoints()
{
    assert_eq!(width("你好"), 4);
    assert_eq!(width("こんにちは"), 10);
    assert_eq!(width("ＡＢ"), 4);
    assert_eq!(width("\u{2329}\u{232A}"), 4);
}

/// лимит исчерпан посередине широкого кодпоинта: результат - сам лимит,
/// позиция указывает на не поместившийся кодпоинт
#[test]
fn clipped_inside_wide_codepoint()
{
    let src = "你好";

    assert_eq!(str_width(3, src.as_bytes(), SurrogatePolicy::Strict), 3);
    assert_eq!(width_and_pos(3, src), WidthAndPos { width: 3, pos: 3 });

    assert_eq!(str_width(2, src.as_bytes(), SurrogatePolicy::Strict), 2);
    assert_eq!(width_and_pos(2, src), WidthAndPos { width: 2, pos: 3 });

    assert_eq!(str_width(1, src.as_bytes(), SurrogatePolicy::Strict), 1);
    assert_eq!(width_and_pos(1, src), WidthAndPos { width: 1, pos: 0 });
}

/// измеренная ширина равна min(полная ширина, лимит)
#[test]
fn clipping_is_min()
{
    for (_, src) in crate::samples::narrow_cluster_texts() {
        let total = width(src);

        for limit in 0 ..= total + 2 {
            assert_eq!(
                str_width(limit, src.as_bytes(), SurrogatePolicy::Strict),
                total.min(limit),
                "{}",
                src
            );
        }
    }
}

/// оба варианта измерения согласованы между собой
#[test]
fn width_and_pos_matches_width()
{
    for (_, src) in crate::samples::narrow_cluster_texts() {
        let total = width(src);

        for limit in 1 ..= total + 2 {
            let result = width_and_pos(limit, src);

            assert_eq!(
                result.width,
                str_width(limit, src.as_bytes(), SurrogatePolicy::Strict)
            );

            match limit > total {
                // лимит не исчерпан - позиция равна длине строки
                true => assert_eq!(result.pos, src.len()),
                false => assert!(result.pos <= src.len()),
            }

            // ширина префикса до позиции совпадает с измеренной
            let prefix = &src.as_bytes()[.. result.pos];
            assert_eq!(str_width(UNLIMITED, prefix, SurrogatePolicy::Strict), result.width);
        }
    }
}

/// дописывание к строке не уменьшает измеренную ширину
#[test]
fn width_is_monotone()
{
    let src = "ab\r\nc\u{0308}你🇺🇸\u{1F469}\u{200D}\u{1F4BB}가힣e\u{0301}";
    let mut previous = 0;

    for end in 0 ..= src.len() {
        if !src.is_char_boundary(end) {
            continue;
        }

        let current = str_width(UNLIMITED, &src.as_bytes()[.. end], SurrogatePolicy::Strict);

        assert!(current >= previous);
        previous = current;
    }
}

/// границы кластеров сохраняются при разборе окна частями:
/// кластер, разрезанный границей окна, не даёт лишней колонки
#[test]
fn window_straddling_cluster()
{
    // 1 + 40 + 1 кодпоинтов при окне в 16
    let src = format!("a{}b", "\u{0308}".repeat(40));

    assert_eq!(width(&src), 2);
    assert_eq!(
        width_and_pos(1000, &src),
        WidthAndPos {
            width: 2,
            pos: src.len()
        }
    );

    // границы окна попадают внутрь ZWJ-последовательностей
    let src = "\u{1F469}\u{200D}\u{1F4BB}".repeat(20);

    assert_eq!(width(&src), 40);

    let clipped = width_and_pos(7, &src);

    assert_eq!(clipped.width, 7);
    // три последовательности по 11 байт поместились целиком
    assert_eq!(clipped.pos, 33);
}

/// некорректный UTF-8: каждый некорректный ведущий байт - один U+FFFD
#[test]
fn invalid_utf8_replacements()
{
    // избыточная кодировка NUL: оба байта некорректны по отдельности
    assert_eq!(str_width(1000, &[0xC0u8, 0x80], SurrogatePolicy::Strict), 2);

    // оборванная трёхбайтовая последовательность - один U+FFFD
    assert_eq!(str_width(1000, &[0xE2u8, 0x82], SurrogatePolicy::Strict), 1);

    // некорректное продолжение: U+FFFD, затем ASCII
    let result = str_width_and_pos(1000, &[0xF0u8, 0x28], SurrogatePolicy::Strict);
    assert_eq!(result.width, 2);
    assert_eq!(result.pos, 2);
}

/// трёхбайтовый суррогат в UTF-8: строгая политика заменяет каждый байт,
/// мягкая пропускает кодпоинт
#[test]
fn utf8_surrogate_policy()
{
    let src: &[u8] = &[0xED, 0xA0, 0x80];

    assert_eq!(str_width(1000, src, SurrogatePolicy::Strict), 3);
    assert_eq!(str_width(1000, src, SurrogatePolicy::Lax), 1);

    // позиция считается по тем же правилам длины
    assert_eq!(
        str_width_and_pos(1000, src, SurrogatePolicy::Lax),
        WidthAndPos { width: 1, pos: 3 }
    );
}

/// UTF-16: суррогатная пара - один кодпоинт
#[test]
fn utf16_pairs()
{
    // женщина + ZWJ + ноутбук
    let src: &[u16] = &[0xD83D, 0xDC69, 0x200D, 0xD83D, 0xDCBB];

    assert_eq!(str_width(1000, src, SurrogatePolicy::Strict), 2);
    assert_eq!(
        str_width_and_pos(1000, src, SurrogatePolicy::Strict),
        WidthAndPos { width: 2, pos: 5 }
    );
}

/// UTF-16: непарный суррогат обрабатывается по политике, следующая
/// единица рассматривается заново
#[test]
fn utf16_unpaired_surrogate()
{
    let src: &[u16] = &[0xD800, 0x0041, 0x0042];

    assert_eq!(str_width(1000, src, SurrogatePolicy::Strict), 3);
    assert_eq!(str_width(1000, src, SurrogatePolicy::Lax), 3);

    // младший суррогат без старшего
    let src: &[u16] = &[0xDC00, 0x0041];

    assert_eq!(str_width(1000, src, SurrogatePolicy::Strict), 2);
}

/// UTF-16: позиция в единицах кодирования
#[test]
fn utf16_clipped()
{
    let src: &[u16] = &[0x61, 0x62, 0x63, 0x64];

    assert_eq!(
        str_width_and_pos(3, src, SurrogatePolicy::Strict),
        WidthAndPos { width: 3, pos: 3 }
    );
}

/// UTF-32: значения за пределами U+10FFFF заменяются, суррогаты
/// пропускаются при любой политике
#[test]
fn utf32_validation()
{
    let src: &[u32] = &[0x1F469, 0x200D, 0x1F4BB];

    assert_eq!(str_width(1000, src, SurrogatePolicy::Strict), 2);

    assert_eq!(str_width(1000, &[0x110000u32], SurrogatePolicy::Strict), 1);
    assert_eq!(str_width(1000, &[0xD800u32], SurrogatePolicy::Strict), 1);
    assert_eq!(str_width(1000, &[0xD800u32], SurrogatePolicy::Lax), 1);

    assert_eq!(
        str_width_and_pos(2, &[0x41u32, 0x42, 0x43], SurrogatePolicy::Strict),
        WidthAndPos { width: 2, pos: 2 }
    );
}

/// управляющие кодпоинты - отдельные кластеры ширины 1
#[test]
fn controls_are_width_one()
{
    assert_eq!(width("\t"), 1);
    assert_eq!(width("a\tb"), 3);
    assert_eq!(width("\u{0007}"), 1);
}
