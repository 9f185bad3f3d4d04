use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The caller supplied something the core cannot rank: an empty
    /// candidate set, a non-positive limit, duplicate keys, a bad shape.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// One of the core's own invariants was violated mid-computation.
    #[error("Computation fault: {0}")]
    ComputationFault(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A request body that is not valid JSON or has the wrong shape
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// True for failures caused by the caller's input rather than by the core.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::Serialization(_))
    }

    /// True for violations of the core's own numeric invariants.
    pub fn is_computation_fault(&self) -> bool {
        matches!(self, Error::ComputationFault(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
