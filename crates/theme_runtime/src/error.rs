use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced by theme runtime operations that take untyped input or mutate process state.
pub enum ThemeError {
    /// The value is not one of `light`, `dark`, `auto`.
    #[error("unknown theme mode `{0}`")]
    UnknownThemeMode(String),
    /// The value is not one of the landing animation modes.
    #[error("unknown home animation mode `{0}`")]
    UnknownHomeMode(String),
    /// [`crate::install_stores`] was called a second time on this thread.
    #[error("theme stores are already installed")]
    AlreadyInstalled,
    /// The store configuration failed to parse or validate.
    #[error("invalid theme store config: {0}")]
    InvalidConfig(String),
}
