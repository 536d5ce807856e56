use thiserror::Error;

/// Errors from the geometry layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The name doesn't match any of the six supported functions
    #[error("Invalid argument: unknown trig function {0:?} (expected one of sin, cos, tan, cot, sec, csc)")]
    InvalidArgument(String),
}
