//! Сборка таблиц диапазонов кодпоинтов из UnicodeData.txt: базовая многоязычная плоскость,
//! остальные плоскости, длина в UTF-8 (1 - 4 байта) и все кодпоинты.

pub use classify::{Accumulators, Classification, ClassifiedRanges};
pub use error::{UcdError, UcdResult};
pub use filter::{CodepointFilter, ScalarValueFilter};
pub use output::{write_tables, OutputFormat};
pub use ranges::{compact, CodepointRange, RangeList};
pub use stats::ScanStats;
pub use tables::CodepointTables;
pub use ucd::{Contribution, Interpreted, LineKind, RangeMarker, UcdLine};

pub mod classify;
pub mod filter;
pub mod output;
pub mod ranges;
pub mod stats;
pub mod tables;
pub mod ucd;

mod error;
