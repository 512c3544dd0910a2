use crate::tables;

/// статистика по таблице: количество диапазонов и кодпоинтов на категорию
pub fn format_stats(ranges: &[(u32, u32, u8)]) -> String
{
    let mut output = String::new();

    // props -> (количество диапазонов, количество кодпоинтов)
    let mut totals: Vec<(u8, usize, u64)> = vec![];

    for &(first, last, props) in ranges {
        match totals.iter_mut().find(|entry| entry.0 == props) {
            Some(entry) => {
                entry.1 += 1;
                entry.2 += (last - first + 1) as u64;
            }
            None => totals.push((props, 1, (last - first + 1) as u64)),
        }
    }

    totals.sort_by_key(|entry| entry.0);

    let mut ranges_total = 0;
    let mut codepoints_total = 0;

    for (props, ranges_count, codepoints) in totals {
        output.push_str(&format!(
            "{:<24} диапазонов: {:>4}, кодпоинтов: {:>7}\n",
            name(props),
            ranges_count,
            codepoints
        ));

        ranges_total += ranges_count;
        codepoints_total += codepoints;
    }

    output.push_str(&format!(
        "{:<24} диапазонов: {:>4}, кодпоинтов: {:>7}\n",
        "всего", ranges_total, codepoints_total
    ));

    output
}

/// краткая сводка в stdout
pub fn print(ranges: &[(u32, u32, u8)])
{
    println!(
        "таблица классификации:\n  \
        диапазонов: {}\n  \
        размер: {} байт\n",
        ranges.len(),
        ranges.len() * 9,
    );
}

/// название категории по байту свойств
fn name(props: u8) -> String
{
    let base = match props & 0xF {
        tables::CAT_EXTEND => "extend",
        tables::CAT_CONTROL => "control",
        tables::CAT_EXTEND_AND_CONTROL => "extend_and_control",
        tables::CAT_SPACING_MARK => "spacing_mark",
        tables::CAT_PREPEND => "prepend",
        tables::CAT_HANGUL_L => "hangul_l",
        tables::CAT_HANGUL_V => "hangul_v",
        tables::CAT_HANGUL_T => "hangul_t",
        tables::CAT_HANGUL_LV_OR_LVT => "hangul_lv_or_lvt",
        tables::CAT_REGIONAL_INDICATOR => "regional_indicator",
        tables::CAT_EXTENDED_PICTO => "extended_picto",
        tables::CAT_ZWJ => "zwj",
        _ => "other",
    };

    match props & tables::DOUBLE_WIDTH != 0 {
        true => format!("{}_dw", base),
        false => base.to_owned(),
    }
}
