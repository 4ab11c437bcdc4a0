use thiserror::Error;

/// Top-level error type for the curvestitch kernel.
#[derive(Debug, Error)]
pub enum CurvestitchError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate line: start and end points are coincident")]
    DegenerateLine,

    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("unknown point reference in table")]
    UnknownPointRef,
}

/// Errors raised when a figure configuration fails validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least 3 nodes are required, got {actual}")]
    TooFewNodes { actual: usize },

    #[error("radius must be positive, got {value}")]
    NonPositiveRadius { value: f64 },

    #[error("line width must be positive, got {value}")]
    NonPositiveLineWidth { value: f64 },
}

/// Convenience type alias for results using [`CurvestitchError`].
pub type Result<T> = std::result::Result<T, CurvestitchError>;
