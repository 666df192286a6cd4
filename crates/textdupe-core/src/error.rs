use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("input path \"{0}\" does not exist")]
    PathNotFound(String),

    #[error("error walking directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("no input files found under the given paths")]
    NoInputFiles,
}
