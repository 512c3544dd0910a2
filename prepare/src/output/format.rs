/// представить диапазоны таблицы в текстовом виде, по 4 на строку
pub fn format_range_vec(ranges: &[(u32, u32, u8)]) -> String
{
    let mut output = String::new();

    for (index, &(first, last, props)) in ranges.iter().enumerate() {
        match index % 4 == 0 {
            true => output.push_str("        "),
            false => output.push(' '),
        }

        output.push_str(&format!("(0x{:X}, 0x{:X}, 0x{:X}),", first, last, props));

        if index % 4 == 3 {
            output.push('\n');
        }
    }

    if ranges.len() % 4 != 0 {
        output.push('\n');
    }

    output
}
