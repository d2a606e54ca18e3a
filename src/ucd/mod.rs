use std::ops::RangeInclusive;

use tracing::trace;

use crate::error::{UcdError, UcdResult};
use crate::filter::LAST_CODEPOINT;


/// суффикс имени первого кодпоинта диапазона, например <CJK Ideograph, First>
pub const MARKER_FIRST: &str = ", First>";
/// суффикс имени последнего кодпоинта диапазона
pub const MARKER_LAST: &str = ", Last>";

/// тип строки UnicodeData.txt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind
{
    /// <..., First> - начало диапазона
    RangeStart,
    /// <..., Last> - конец диапазона
    RangeEnd,
    /// обычный кодпоинт
    Single,
}

/// разобранная строка UnicodeData.txt, из всех полей нужны только кодпоинт и имя
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UcdLine<'a>
{
    pub code: u32,
    pub name: &'a str,
    pub kind: LineKind,
}

impl<'a> UcdLine<'a>
{
    /// разобрать непустую строку, number - номер строки в файле (с единицы)
    pub fn parse(line: &'a str, number: usize) -> UcdResult<Self>
    {
        let mut fields = line.split(';');

        // split всегда возвращает хотя бы один элемент
        let code = parse_code(fields.next().unwrap_or_default(), number)?;
        let name = fields
            .next()
            .ok_or(UcdError::MissingName { line: number })?;

        Ok(Self {
            code,
            name,
            kind: LineKind::of(name),
        })
    }
}

impl LineKind
{
    /// тип строки определяется по суффиксу имени
    pub fn of(name: &str) -> Self
    {
        match name {
            n if n.ends_with(MARKER_FIRST) => Self::RangeStart,
            n if n.ends_with(MARKER_LAST) => Self::RangeEnd,
            _ => Self::Single,
        }
    }
}

/// кодпоинт из поля 0: только шестнадцатеричные цифры, без префикса и знака
fn parse_code(field: &str, number: usize) -> UcdResult<u32>
{
    let hex = field.trim();

    let malformed = || UcdError::MalformedCodepoint {
        line: number,
        field: field.to_owned(),
    };

    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    u32::from_str_radix(hex, 16).map_err(|_| malformed())
}

/// что дала строка
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contribution
{
    /// открыт диапазон, кодпоинты появятся вместе с <..., Last>
    Pending,
    /// одиночный кодпоинт
    Single(u32),
    /// закрытый диапазон, включительно
    Range(RangeInclusive<u32>),
    /// Last < First, диапазон отброшен
    Inverted,
    /// <..., Last> без открытого диапазона
    Orphan,
}

impl Contribution
{
    /// кодпоинты, которые добавляет строка. всё, что больше U+10FFFF, отсекается,
    /// поэтому диапазон не выходит за пределы Unicode
    pub fn codepoints(&self) -> RangeInclusive<u32>
    {
        let bounds = self.bounds();

        *bounds.start() ..= (*bounds.end()).min(LAST_CODEPOINT)
    }

    /// границы из файла, без отсечения
    pub fn bounds(&self) -> RangeInclusive<u32>
    {
        match self {
            Self::Single(code) => *code ..= *code,
            Self::Range(range) => range.clone(),
            // пустой диапазон
            Self::Pending | Self::Inverted | Self::Orphan => RangeInclusive::new(1, 0),
        }
    }
}

/// количество значений в диапазоне
pub fn range_width(range: &RangeInclusive<u32>) -> usize
{
    match range.is_empty() {
        true => 0,
        false => (range.end() - range.start()) as usize + 1,
    }
}

/// результат обработки строки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreted
{
    pub contribution: Contribution,
    /// начало незакрытого диапазона, брошенного этой строкой
    pub abandoned: Option<u32>,
}

/// состояние разбора диапазонов First / Last: начало открытого диапазона.
/// одновременно может быть открыт только один диапазон
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeMarker
{
    pending: Option<u32>,
}

impl RangeMarker
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// начало открытого диапазона
    pub fn pending(&self) -> Option<u32>
    {
        self.pending
    }

    /// обработать строку, обновив состояние
    pub fn interpret(&mut self, line: &UcdLine) -> Interpreted
    {
        let code = line.code;

        match line.kind {
            // новый First молча перекрывает незакрытый
            LineKind::RangeStart => {
                let abandoned = self.pending.replace(code);

                Interpreted {
                    contribution: Contribution::Pending,
                    abandoned,
                }
            }
            LineKind::RangeEnd => {
                let contribution = match self.pending.take() {
                    Some(start) if start <= code => Contribution::Range(start ..= code),
                    Some(start) => {
                        trace!("диапазон U+{:04X} .. U+{:04X} перевёрнут", start, code);
                        Contribution::Inverted
                    }
                    None => Contribution::Orphan,
                };

                Interpreted {
                    contribution,
                    abandoned: None,
                }
            }
            LineKind::Single => Interpreted {
                contribution: Contribution::Single(code),
                abandoned: self.pending.take(),
            },
        }
    }
}
