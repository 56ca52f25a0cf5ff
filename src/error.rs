//! Errors raised while assigning colors.

/// All errors that can occur when resolving chart colors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A color item references a guid absent from the palette.
    #[error("color palette item not found: {0}")]
    PaletteItemNotFound(String),

    /// A string is not of the form `rgb(r,g,b)`.
    #[error("invalid color “{0}”")]
    InvalidColor(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
