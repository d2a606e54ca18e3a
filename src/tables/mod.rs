use tracing::{debug, trace};

use crate::{
    classify::{Accumulators, Classification, ClassifiedRanges},
    error::UcdResult,
    filter::{CodepointFilter, DEFAULT_FILTERS},
    ranges::RangeList,
    stats::ScanStats,
    ucd::{range_width, RangeMarker, UcdLine},
};

/// таблицы диапазонов кодпоинтов, собранные из UnicodeData.txt
#[derive(Debug, Clone)]
pub struct CodepointTables
{
    pub ranges: ClassifiedRanges,
    pub stats: ScanStats,
}

/// контекст одного прохода по файлу: состояние First / Last, фильтры, накопители, статистика
struct Scan<'a>
{
    marker: RangeMarker,
    filters: &'a [&'a dyn CodepointFilter],
    accumulators: Accumulators,
    stats: ScanStats,
}

impl CodepointTables
{
    /// собрать таблицы из строк UnicodeData.txt, отбросив суррогаты
    pub fn build<I, S>(lines: I) -> UcdResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with_filters(lines, DEFAULT_FILTERS)
    }

    /// собрать таблицы, пропуская кодпоинты через фильтры
    pub fn build_with_filters<I, S>(lines: I, filters: &[&dyn CodepointFilter]) -> UcdResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scan = Scan {
            marker: RangeMarker::new(),
            filters,
            accumulators: Accumulators::new(),
            stats: ScanStats::new(),
        };

        for (index, line) in lines.into_iter().enumerate() {
            scan.line(line.as_ref(), index + 1)?;
        }

        Ok(scan.finish())
    }

    /// диапазоны таблицы
    pub fn get(&self, classification: Classification) -> &RangeList
    {
        self.ranges.get(classification)
    }
}

impl<'a> Scan<'a>
{
    fn line(&mut self, line: &str, number: usize) -> UcdResult<()>
    {
        let line = line.trim();

        if line.is_empty() {
            self.stats.blank_lines += 1;
            return Ok(());
        }

        let line = UcdLine::parse(line, number)?;
        let interpreted = self.marker.interpret(&line);

        if let Some(start) = interpreted.abandoned {
            debug!("строка {}: незакрытый диапазон с U+{:04X} брошен", number, start);
        }

        self.stats.record(&interpreted);

        let codes = interpreted.contribution.codepoints();
        let beyond = range_width(&interpreted.contribution.bounds()) - range_width(&codes);

        if beyond != 0 {
            debug!("строка {}: {} значений больше U+10FFFF отброшено", number, beyond);
            self.stats.out_of_range += beyond;
        }

        for code in codes {
            if !self.filters.iter().all(|f| f.filter(code)) {
                self.stats.filtered += 1;
                continue;
            }

            self.accumulators.push(code);
            self.stats.accepted += 1;
        }

        Ok(())
    }

    fn finish(mut self) -> CodepointTables
    {
        if let Some(start) = self.marker.pending() {
            debug!("диапазон с U+{:04X} не закрыт до конца файла", start);
            self.stats.unterminated += 1;
        }

        let ranges = self.accumulators.finish();

        for (classification, list) in ranges.iter() {
            trace!(
                "{}: {} диапазонов, {} кодпоинтов",
                classification,
                list.len(),
                list.codepoints_count()
            );
        }

        CodepointTables {
            ranges,
            stats: self.stats,
        }
    }
}
