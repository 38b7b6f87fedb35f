use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistrarError>;

#[derive(Debug, Error)]
pub enum RegistrarError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
