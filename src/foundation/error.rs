/// Convenience result type used across VetorLab.
pub type VetorResult<T> = Result<T, VetorError>;

/// Top-level error taxonomy.
///
/// Every variant is recoverable: callers report it and keep the form usable.
#[derive(thiserror::Error, Debug)]
pub enum VetorError {
    /// Non-numeric (or non-finite) text in a numeric field.
    #[error("parse error: {0}")]
    Parse(String),

    /// Vector/matrix dimension mismatch.
    #[error("shape error: {0}")]
    Shape(String),

    /// An input entry addressed by index does not exist in the current form layout.
    #[error("stale entry: {0}")]
    StaleWidget(String),

    /// Invalid user-provided data or settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or stepping an animation.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while rasterizing or encoding frames.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VetorError {
    /// Build a [`VetorError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`VetorError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`VetorError::StaleWidget`] value.
    pub fn stale_widget(msg: impl Into<String>) -> Self {
        Self::StaleWidget(msg.into())
    }

    /// Build a [`VetorError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VetorError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`VetorError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`VetorError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Prefix a `Parse` message with the field it came from; other kinds pass through.
    pub fn in_field(self, field: impl std::fmt::Display) -> Self {
        match self {
            Self::Parse(msg) => Self::Parse(format!("{field}: {msg}")),
            other => other,
        }
    }

    /// Short title for the error dialog shown by the shell.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            Self::Parse(_) => "Invalid number",
            Self::Shape(_) => "Incompatible dimensions",
            Self::StaleWidget(_) => "Form changed",
            Self::Validation(_) => "Invalid input",
            Self::Animation(_) | Self::Render(_) => "Rendering failed",
            Self::Serde(_) | Self::Other(_) => "Error",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
