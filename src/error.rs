use thiserror::Error;

/// ошибка разбора UnicodeData.txt
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UcdError
{
    /// поле 0 - не шестнадцатеричное число
    #[error("строка {line}: некорректный кодпоинт {field:?}")]
    MalformedCodepoint
    {
        line: usize,
        field: String,
    },
    /// в строке нет поля с именем
    #[error("строка {line}: отсутствует поле с именем символа")]
    MissingName
    {
        line: usize,
    },
}

pub type UcdResult<T, E = UcdError> = std::result::Result<T, E>;
