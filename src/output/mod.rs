use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::classify::{Classification, ClassifiedRanges};

use format::{format_inc, format_pairs};

pub mod format;

/// длина строки в файле с подготовленными данными
pub const FORMAT_STRING_LENGTH: usize = 120;

/// файл с таблицами в формате Rust
pub const RUST_FILE_NAME: &str = "ranges.rs";

/// формат вывода таблиц
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat
{
    /// по файлу .inc на таблицу, для включения в C++
    #[default]
    Inc,
    /// один файл с константами Rust
    Rust,
}

/// имя файла .inc для таблицы
pub fn inc_file_name(classification: Classification) -> &'static str
{
    match classification {
        Classification::Bmp => "bmp_ranges.inc",
        Classification::NonBmp => "non_bmp_ranges.inc",
        Classification::Utf8Len1 => "utf8_ranges_1.inc",
        Classification::Utf8Len2 => "utf8_ranges_2.inc",
        Classification::Utf8Len3 => "utf8_ranges_3.inc",
        Classification::Utf8Len4 => "utf8_ranges_4.inc",
        Classification::All => "just_ranges.inc",
    }
}

/// записать таблицы в каталог, вернуть пути записанных файлов
pub fn write_tables(
    dir: impl AsRef<Path>,
    ranges: &ClassifiedRanges,
    format: OutputFormat,
) -> io::Result<Vec<PathBuf>>
{
    let dir = dir.as_ref();

    match format {
        OutputFormat::Inc => ranges
            .iter()
            .map(|(classification, list)| -> io::Result<PathBuf> {
                let path = dir.join(inc_file_name(classification));
                write_file(&path, &format_inc(list))?;

                Ok(path)
            })
            .collect(),
        OutputFormat::Rust => {
            let path = dir.join(RUST_FILE_NAME);
            write_file(&path, &format_rust(ranges))?;

            Ok(vec![path])
        }
    }
}

/// все таблицы в виде констант Rust
pub fn format_rust(ranges: &ClassifiedRanges) -> String
{
    ranges
        .iter()
        .map(|(classification, list)| {
            format!(
                "pub const {}: &[(u32, u32)] = &[{}];\n",
                classification.name().to_uppercase(),
                format_pairs(list, FORMAT_STRING_LENGTH),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_file(path: &Path, contents: &str) -> io::Result<()>
{
    let mut file = File::create(path)?;
    write!(file, "{}", contents)?;

    debug!("записан {}", path.display());

    Ok(())
}
