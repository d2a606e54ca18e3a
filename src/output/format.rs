use crate::ranges::RangeList;

/// диапазоны для включения в C++: {U'\U00000041', U'\U00000042'},... без пробелов между элементами
pub fn format_inc(ranges: &RangeList) -> String
{
    ranges
        .into_iter()
        .map(|r| format!("{{U'\\U{:08X}', U'\\U{:08X}'}}", r.start, r.end))
        .collect::<Vec<_>>()
        .join(",")
}

/// представить диапазоны в виде пар Rust, с переносом строк по достижении boundary
pub fn format_pairs(ranges: &RangeList, boundary: usize) -> String
{
    format_wrapped(
        ranges
            .into_iter()
            .map(|r| format!("(0x{:X}, 0x{:X}), ", r.start, r.end)),
        boundary,
    )
}

/// склеить готовые элементы, перенося строку, когда она превысит boundary
fn format_wrapped(items: impl Iterator<Item = String>, boundary: usize) -> String
{
    let mut output = String::new();

    let mut cur_len = boundary;

    for item in items {
        match cur_len + item.len() > boundary {
            true => {
                output.push_str("\n    ");
                cur_len = item.len();
            }
            false => cur_len += item.len(),
        };

        output.push_str(&item);
    }
    output.push('\n');

    output
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::ranges::compact;

    #[test]
    fn inc()
    {
        assert_eq!(
            format_inc(&compact(&[0x41])),
            "{U'\\U00000041', U'\\U00000042'}"
        );
        assert_eq!(
            format_inc(&compact(&[0x41, 0x10000])),
            "{U'\\U00000041', U'\\U00000042'},{U'\\U00010000', U'\\U00010001'}"
        );
        assert_eq!(format_inc(&compact(&[])), "");
    }

    #[test]
    fn pairs_wrap()
    {
        let ranges = compact(&[0x41, 0x300, 0x301]);

        assert_eq!(format_pairs(&ranges, 120), "\n    (0x41, 0x42), (0x300, 0x302), \n");
        assert_eq!(
            format_pairs(&ranges, 20),
            "\n    (0x41, 0x42), \n    (0x300, 0x302), \n"
        );
    }
}
