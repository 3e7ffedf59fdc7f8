use thiserror::Error;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("container `{container}` has no rendering surface")]
    MissingSurface { container: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("renderer failed for container `{container}`: {reason}")]
    Render { container: String, reason: String },

    #[error("unsupported http method: {0}")]
    UnsupportedMethod(String),

    #[error("permalink request failed: {0}")]
    Permalink(String),
}
