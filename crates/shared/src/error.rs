#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid catalog: {0}")]
    Catalog(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! catalog {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Catalog(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Catalog(format!($fmt, $($arg)*)))
    };
}
