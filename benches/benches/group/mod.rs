pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $name: expr, $measure: expr) => {
        #[inline(never)]
        fn $test(text: &str) -> i32
        {
            $measure(text)
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (text_name, text) in group::samples() {
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, text_name),
                    text.as_str(),
                    |b, text| b.iter(|| $test(criterion::black_box(text))),
                );
            }

            group.finish();
        }
    };
}

/// синтетические тексты для замеров: по одному на класс нагрузки
pub fn samples() -> Vec<(&'static str, String)>
{
    let mut data = vec![
        (
            "ascii",
            "the quick brown fox jumps over the lazy dog ".repeat(64),
        ),
        (
            "russian",
            "широкая электрификация южных губерний ".repeat(64),
        ),
        ("cjk", "天地玄黃宇宙洪荒日月盈昃辰宿列張".repeat(64)),
        (
            "hangul_jamo",
            "\u{1100}\u{1161}\u{11A8}\u{1102}\u{1161}\u{1112}\u{1161}\u{11AB}".repeat(64),
        ),
        (
            "emoji",
            "\u{1F469}\u{200D}\u{1F4BB}\u{1F468}\u{200D}\u{1F373}\u{1F9D1}\u{200D}\u{1F692}"
                .repeat(64),
        ),
        (
            "combining",
            "a\u{0308}o\u{0308}u\u{0308}e\u{0301} ".repeat(64),
        ),
    ];

    data.sort_by(|a, b| a.0.cmp(b.0));

    data
}
