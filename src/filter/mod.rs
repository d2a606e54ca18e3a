/// суррогаты - не скалярные значения Unicode
pub const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800 ..= 0xDFFF;
/// последний кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;

pub trait CodepointFilter
{
    /// фильтрация кодпоинтов перед раскладыванием по таблицам
    /// true, если кодпоинт допустим
    fn filter(&self, code: u32) -> bool;
}

/// пропускает только скалярные значения: без суррогатов и не больше U+10FFFF
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarValueFilter;

impl CodepointFilter for ScalarValueFilter
{
    fn filter(&self, code: u32) -> bool
    {
        code <= LAST_CODEPOINT && !SURROGATES.contains(&code)
    }
}

/// фильтры по умолчанию
pub const DEFAULT_FILTERS: &[&dyn CodepointFilter] = &[&ScalarValueFilter];

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn scalar_values()
    {
        let filter = ScalarValueFilter;

        assert!(filter.filter(0));
        assert!(filter.filter(0xD7FF));
        assert!(!filter.filter(0xD800));
        assert!(!filter.filter(0xDBFF));
        assert!(!filter.filter(0xDFFF));
        assert!(filter.filter(0xE000));
        assert!(filter.filter(0x10FFFF));
        assert!(!filter.filter(0x110000));
    }
}
