use thiserror::Error;

pub type CalendarResult<T> = Result<T, CalendarError>;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("anchor `{anchor}` is already bound to a calendar")]
    DuplicateBinding { anchor: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown grid cell `{0}`")]
    UnknownCell(String),
}
