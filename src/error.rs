//! Crate-level error types.

use std::fmt;

/// Errors produced by the gimbal crate.
#[derive(Debug)]
pub enum GimbalError {
    /// The combined projection/modelview transform produced a homogeneous
    /// w-component of exactly zero (non-invertible transform or point at
    /// infinity). This indicates invalid camera state and propagates as a
    /// hard failure.
    DegenerateTransform {
        /// Which operation hit the degenerate transform.
        context: &'static str,
    },
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for GimbalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateTransform { context } => {
                write!(f, "{context}: degenerate transform (w = 0)")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for GimbalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GimbalError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
