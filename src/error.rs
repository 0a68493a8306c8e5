#![warn(missing_docs)]
//! Lensbench specific error structures
use std::{error::Error, fmt::Display};

/// Lensbench specific Result type
pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// Errors that can be returned by various lensbench functions.
#[derive(Debug, PartialEq, Eq)]
pub enum BenchError {
    /// invalid lens parameters (e.g. aperture larger than a surface sphere)
    Lens(String),
    /// invalid ray or ray segment parameters
    Ray(String),
    /// precondition violations while tracing a ray through a lens
    Trace(String),
    /// errors while assembling a stack of lenses
    Bench(String),
    /// errors while reading or interpreting a bench configuration
    Config(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lens(m) => {
                write!(f, "Lens:{m}")
            }
            Self::Ray(m) => {
                write!(f, "Ray:{m}")
            }
            Self::Trace(m) => {
                write!(f, "Trace:{m}")
            }
            Self::Bench(m) => {
                write!(f, "Bench:{m}")
            }
            Self::Config(m) => {
                write!(f, "Config:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Lensbench Error:Other:{m}"),
        }
    }
}
impl Error for BenchError {}

impl std::convert::From<String> for BenchError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = BenchError::from("test".to_string());
        assert_eq!(error, BenchError::Other("test".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(format!("{}", BenchError::Lens("test".to_string())), "Lens:test");
        assert_eq!(format!("{}", BenchError::Ray("test".to_string())), "Ray:test");
        assert_eq!(
            format!("{}", BenchError::Trace("test".to_string())),
            "Trace:test"
        );
        assert_eq!(
            format!("{}", BenchError::Bench("test".to_string())),
            "Bench:test"
        );
        assert_eq!(
            format!("{}", BenchError::Config("test".to_string())),
            "Config:test"
        );
        assert_eq!(
            format!("{}", BenchError::Console("test".to_string())),
            "Console:test"
        );
        assert_eq!(
            format!("{}", BenchError::Other("test".to_string())),
            "Lensbench Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", BenchError::Trace("test".to_string())),
            "Trace(\"test\")"
        );
    }
}
