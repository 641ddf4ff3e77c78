use thiserror::Error;

/// Errors raised while building descriptors, registries, configs and circuits.
///
/// Every variant except [`CatalogError::UnknownGate`] describes a defect in
/// the built-in data or the startup configuration. Callers are expected to
/// abort rather than continue with a partially built catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A descriptor was given an empty serialized id.
    #[error("gate identifier must not be empty (symbol '{symbol}')")]
    EmptyId { symbol: String },

    /// A fixed matrix is not square.
    #[error("gate '{id}': matrix is {rows}x{cols}, expected a square matrix")]
    NotSquare { id: String, rows: usize, cols: usize },

    /// The matrix dimension is not a power of two (or is smaller than 2).
    #[error("gate '{id}': matrix dimension {dimension} is not a power of two")]
    InvalidDimension { id: String, dimension: usize },

    /// A parametrized generator produced a matrix of the wrong size.
    #[error("gate '{id}': generator produced a {actual}x{actual} matrix, declared {declared}x{declared}")]
    DimensionMismatch {
        id: String,
        declared: usize,
        actual: usize,
    },

    /// A synthesized matrix failed the unitarity check.
    #[error("gate '{id}' is not unitary: max deviation {deviation:.2e} exceeds {tolerance:.0e}")]
    NotUnitary {
        id: String,
        deviation: f64,
        tolerance: f64,
    },

    /// A family was instantiated at width zero.
    #[error("family '{base_id}': width must be at least 1, got {width}")]
    InvalidWidth { base_id: String, width: usize },

    /// A family template broke the id or dimension contract.
    #[error("family '{base_id}' at width {width}: {reason}")]
    FamilyContract {
        base_id: String,
        width: usize,
        reason: String,
    },

    /// Two descriptors in one registry share an id.
    #[error("duplicate gate identifier '{0}'")]
    DuplicateId(String),

    /// The configured gate set name is not one of the known profiles.
    #[error("unknown gate set: '{0}'")]
    UnknownGateSet(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Circuit JSON did not match the column format.
    #[error("malformed circuit: {0}")]
    CircuitFormat(#[from] serde_json::Error),

    /// A circuit referenced an id neither the registry nor the custom set knows.
    #[error("unknown gate '{0}'")]
    UnknownGate(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
