use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ucd_ranges::{write_tables, CodepointTables, OutputFormat};

/// таблицы диапазонов кодпоинтов из UnicodeData.txt
#[derive(Debug, Parser)]
#[command(name = "ucd_ranges", version)]
struct Args
{
    /// каталог с UnicodeData.txt
    ucd_dir: PathBuf,
    /// каталог для таблиц, создаётся при необходимости
    output_dir: PathBuf,
    /// формат таблиц
    #[arg(long, value_enum, default_value_t = OutputFormat::Inc)]
    format: OutputFormat,
    /// имя файла с данными в каталоге UCD
    #[arg(long, default_value = "UnicodeData.txt")]
    input_name: String,
}

fn main() -> Result<()>
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let ucd_path = args.ucd_dir.join(&args.input_name);
    let source = fs::read_to_string(&ucd_path)
        .wrap_err_with(|| format!("не удалось прочитать {}", ucd_path.display()))?;

    let tables = CodepointTables::build(source.lines())
        .wrap_err_with(|| format!("ошибка разбора {}", ucd_path.display()))?;

    tables.stats.log();

    fs::create_dir_all(&args.output_dir)
        .wrap_err_with(|| format!("не удалось создать {}", args.output_dir.display()))?;

    let written = write_tables(&args.output_dir, &tables.ranges, args.format)
        .wrap_err_with(|| format!("не удалось записать таблицы в {}", args.output_dir.display()))?;

    for (classification, list) in tables.ranges.iter() {
        info!(
            "{}: {} диапазонов, {} кодпоинтов",
            classification,
            list.len(),
            list.codepoints_count()
        );
    }

    info!("записано файлов: {}", written.len());

    Ok(())
}
