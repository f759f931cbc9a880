use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Gallery error: {0}")]
    Gallery(String),
}

pub type Result<T> = std::result::Result<T, Error>;
