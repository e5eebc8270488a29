/// Core error type for the plugin.
///
/// Host adapters should map their platform errors into this type so the
/// plugin can handle failures consistently (fatal at load vs logged at
/// dispatch).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("host error: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, Error>;
