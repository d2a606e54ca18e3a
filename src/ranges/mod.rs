use crate::filter::LAST_CODEPOINT;

#[cfg(test)]
mod tests;

/// полуинтервал кодпоинтов [start, end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodepointRange
{
    pub start: u32,
    /// не включается
    pub end: u32,
}

impl CodepointRange
{
    pub fn new(start: u32, end: u32) -> Self
    {
        debug_assert!(start < end);

        Self { start, end }
    }

    /// количество кодпоинтов в диапазоне
    pub fn len(&self) -> u32
    {
        self.end - self.start
    }

    pub fn contains(&self, code: u32) -> bool
    {
        (self.start .. self.end).contains(&code)
    }
}

/// упорядоченный список непересекающихся и несмежных диапазонов
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeList
{
    ranges: Vec<CodepointRange>,
}

impl RangeList
{
    pub fn as_slice(&self) -> &[CodepointRange]
    {
        &self.ranges
    }

    /// пары (start, end) для вывода и сравнения
    pub fn as_pairs(&self) -> Vec<(u32, u32)>
    {
        self.ranges.iter().map(|r| (r.start, r.end)).collect()
    }

    /// количество диапазонов
    pub fn len(&self) -> usize
    {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.ranges.is_empty()
    }

    /// количество кодпоинтов во всех диапазонах
    pub fn codepoints_count(&self) -> usize
    {
        self.ranges.iter().map(|r| r.len() as usize).sum()
    }

    /// входит ли кодпоинт в один из диапазонов (двоичный поиск)
    pub fn contains(&self, code: u32) -> bool
    {
        // первый диапазон, который заканчивается после кодпоинта
        let index = self.ranges.partition_point(|r| r.end <= code);

        self.ranges
            .get(index)
            .is_some_and(|r| r.contains(code))
    }

    /// развернуть обратно в кодпоинты
    pub fn expand(&self) -> impl Iterator<Item = u32> + '_
    {
        self.ranges.iter().flat_map(|r| r.start .. r.end)
    }
}

impl<'a> IntoIterator for &'a RangeList
{
    type Item = &'a CodepointRange;
    type IntoIter = std::slice::Iter<'a, CodepointRange>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.ranges.iter()
    }
}

/// свернуть отсортированные кодпоинты в минимальный список диапазонов.
/// повторы допустимы: шаг 0, как и шаг 1, продолжает текущий диапазон.
/// значения больше U+10FFFF (в том числе u32::MAX, у которого нет конца полуинтервала) - паника
pub fn compact(sorted: &[u32]) -> RangeList
{
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    if let Some(&last) = sorted.last() {
        assert!(last <= LAST_CODEPOINT, "U+{:X} за пределами Unicode", last);
    }

    let mut ranges = vec![];

    let (&first, rest) = match sorted.split_first() {
        Some(split) => split,
        None => return RangeList { ranges },
    };

    let mut start = first;
    let mut previous = first;

    for &code in rest {
        if code - previous > 1 {
            ranges.push(CodepointRange::new(start, previous + 1));
            start = code;
        }

        previous = code;
    }

    ranges.push(CodepointRange::new(start, previous + 1));

    RangeList { ranges }
}
