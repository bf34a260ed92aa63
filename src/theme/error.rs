use thiserror::Error;

/// Errors surfaced by the theme registry and provider.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The base document or a tenant fragment is malformed. Raised while
    /// building the registry; a host must treat it as fatal since a
    /// partially built registry is unsafe to serve from.
    #[error("theme configuration is invalid: {0}")]
    Configuration(String),

    /// A theme switch named a key the registry does not contain. The
    /// caller's session is left untouched.
    #[error("'{key}' is not a registered theme key")]
    UnknownThemeKey { key: String },

    /// A theme was read outside of any provider's scope. Always a wiring
    /// mistake in the host, never a runtime condition worth defaulting over.
    #[error("theme accessed outside of any provider scope")]
    MissingProvider,
}
