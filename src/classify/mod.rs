use std::fmt;

use crate::ranges::{compact, RangeList};

/// последний кодпоинт базовой многоязычной плоскости
pub const LAST_BMP_CODEPOINT: u32 = 0xFFFF;

/// таблицы, по которым раскладываются кодпоинты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification
{
    Bmp,
    NonBmp,
    Utf8Len1,
    Utf8Len2,
    Utf8Len3,
    Utf8Len4,
    All,
}

impl Classification
{
    /// все таблицы в порядке вывода
    pub const ALL: [Self; 7] = [
        Self::Bmp,
        Self::NonBmp,
        Self::Utf8Len1,
        Self::Utf8Len2,
        Self::Utf8Len3,
        Self::Utf8Len4,
        Self::All,
    ];

    pub fn name(&self) -> &'static str
    {
        match self {
            Self::Bmp => "bmp",
            Self::NonBmp => "non_bmp",
            Self::Utf8Len1 => "utf8_len_1",
            Self::Utf8Len2 => "utf8_len_2",
            Self::Utf8Len3 => "utf8_len_3",
            Self::Utf8Len4 => "utf8_len_4",
            Self::All => "all",
        }
    }

    /// три таблицы, в которые попадает кодпоинт: плоскость, длина в UTF-8, все
    pub fn of(code: u32) -> [Self; 3]
    {
        let plane = match in_bmp(code) {
            true => Self::Bmp,
            false => Self::NonBmp,
        };

        let utf8 = match utf8_len(code) {
            1 => Self::Utf8Len1,
            2 => Self::Utf8Len2,
            3 => Self::Utf8Len3,
            _ => Self::Utf8Len4,
        };

        [plane, utf8, Self::All]
    }
}

impl fmt::Display for Classification
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

/// кодпоинт в базовой многоязычной плоскости?
#[inline(always)]
pub fn in_bmp(code: u32) -> bool
{
    code <= LAST_BMP_CODEPOINT
}

/// количество байт в UTF-8
#[inline(always)]
pub fn utf8_len(code: u32) -> usize
{
    match code {
        ..= 0x7F => 1,
        ..= 0x7FF => 2,
        ..= 0xFFFF => 3,
        _ => 4,
    }
}

/// накопители кодпоинтов до сортировки
#[derive(Debug, Clone, Default)]
pub struct Accumulators
{
    pub bmp: Vec<u32>,
    pub non_bmp: Vec<u32>,
    /// индекс - длина в UTF-8 минус один
    pub utf8: [Vec<u32>; 4],
    pub all: Vec<u32>,
}

impl Accumulators
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// разложить кодпоинт по накопителям
    pub fn push(&mut self, code: u32)
    {
        for classification in Classification::of(code) {
            self.get_mut(classification).push(code);
        }
    }

    pub fn get(&self, classification: Classification) -> &Vec<u32>
    {
        match classification {
            Classification::Bmp => &self.bmp,
            Classification::NonBmp => &self.non_bmp,
            Classification::Utf8Len1 => &self.utf8[0],
            Classification::Utf8Len2 => &self.utf8[1],
            Classification::Utf8Len3 => &self.utf8[2],
            Classification::Utf8Len4 => &self.utf8[3],
            Classification::All => &self.all,
        }
    }

    fn get_mut(&mut self, classification: Classification) -> &mut Vec<u32>
    {
        match classification {
            Classification::Bmp => &mut self.bmp,
            Classification::NonBmp => &mut self.non_bmp,
            Classification::Utf8Len1 => &mut self.utf8[0],
            Classification::Utf8Len2 => &mut self.utf8[1],
            Classification::Utf8Len3 => &mut self.utf8[2],
            Classification::Utf8Len4 => &mut self.utf8[3],
            Classification::All => &mut self.all,
        }
    }

    /// отсортировать накопители и свернуть в диапазоны
    pub fn finish(mut self) -> ClassifiedRanges
    {
        let lists = Classification::ALL.map(|classification| {
            let codes = self.get_mut(classification);
            codes.sort_unstable();

            compact(codes)
        });

        ClassifiedRanges { lists }
    }
}

/// итоговые списки диапазонов по таблицам
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRanges
{
    /// в порядке Classification::ALL
    lists: [RangeList; 7],
}

impl ClassifiedRanges
{
    pub fn get(&self, classification: Classification) -> &RangeList
    {
        &self.lists[classification as usize]
    }

    /// пары (таблица, диапазоны) в порядке вывода
    pub fn iter(&self) -> impl Iterator<Item = (Classification, &RangeList)>
    {
        Classification::ALL.into_iter().zip(self.lists.iter())
    }
}
