use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no such directory: {0}")]
    DirectoryNotFound(String),

    #[error("manifest not found: {0}")]
    ManifestNotFound(String),

    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("invalid manifest: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    #[allow(dead_code)]
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Custom(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Custom(err)
    }
}
