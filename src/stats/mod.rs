use tracing::info;

use crate::ucd::{range_width, Contribution, Interpreted};

/// статистика, собираемая при разборе UnicodeData.txt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats
{
    /// непустые строки
    pub lines: usize,
    /// пропущенные пустые строки
    pub blank_lines: usize,
    /// строки с одиночным кодпоинтом
    pub singles: usize,
    /// закрытые диапазоны First / Last
    pub ranges: usize,
    /// кодпоинты из закрытых диапазонов
    pub range_codepoints: usize,
    /// диапазоны, брошенные новым First или обычной строкой
    pub abandoned: usize,
    /// диапазоны с Last < First
    pub inverted: usize,
    /// Last без First
    pub orphans: usize,
    /// First, не закрытый до конца файла
    pub unterminated: usize,
    /// значения больше U+10FFFF, отсечённые до фильтров
    pub out_of_range: usize,
    /// кодпоинты, отброшенные фильтрами (суррогаты)
    pub filtered: usize,
    /// кодпоинты, разложенные по таблицам
    pub accepted: usize,
}

impl ScanStats
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// учесть результат обработки строки
    pub fn record(&mut self, interpreted: &Interpreted)
    {
        self.lines += 1;

        if interpreted.abandoned.is_some() {
            self.abandoned += 1;
        }

        match &interpreted.contribution {
            Contribution::Pending => (),
            Contribution::Single(_) => self.singles += 1,
            Contribution::Range(range) => {
                self.ranges += 1;
                self.range_codepoints += range_width(range);
            }
            Contribution::Inverted => self.inverted += 1,
            Contribution::Orphan => self.orphans += 1,
        }
    }

    /// вывести в лог
    pub fn log(&self)
    {
        info!(
            lines = self.lines,
            singles = self.singles,
            ranges = self.ranges,
            range_codepoints = self.range_codepoints,
            accepted = self.accepted,
            filtered = self.filtered,
            out_of_range = self.out_of_range,
            "UnicodeData.txt разобран"
        );

        if self.abandoned + self.inverted + self.orphans + self.unterminated != 0 {
            info!(
                abandoned = self.abandoned,
                inverted = self.inverted,
                orphans = self.orphans,
                unterminated = self.unterminated,
                "некорректные диапазоны First / Last пропущены"
            );
        }
    }
}
