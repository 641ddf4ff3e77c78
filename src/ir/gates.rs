use crate::error::{CatalogError, Result};
use crate::math::matrix::{is_qubit_dimension, unitarity_deviation, GateMatrix, UNITARY_TOLERANCE};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Control values at which parametrized sources are validated and compared.
const SAMPLE_POINTS: [f64; 6] = [0.0, 0.125, 0.25, 0.5, 0.625, 0.875];

/// Function from a control value in `[0, 1)` to a matrix.
pub type Generator = Arc<dyn Fn(f64) -> GateMatrix + Send + Sync>;

/// Where a gate's matrix comes from.
///
/// # Examples
///
/// ```
/// use qgate_catalog::ir::MatrixSource;
/// use qgate_catalog::math::{power, PauliAxis};
///
/// let spinning = MatrixSource::parametrized(2, |t| power(PauliAxis::X, t));
/// assert_eq!(spinning.dimension(), 2);
/// ```
#[derive(Clone)]
pub enum MatrixSource {
    /// A constant matrix.
    Fixed(GateMatrix),
    /// A matrix that varies with a control value.
    Parametrized {
        /// Declared side length of every generated matrix.
        dimension: usize,
        generator: Generator,
    },
}

impl MatrixSource {
    pub fn fixed(matrix: GateMatrix) -> Self {
        MatrixSource::Fixed(matrix)
    }

    pub fn parametrized<F>(dimension: usize, generator: F) -> Self
    where
        F: Fn(f64) -> GateMatrix + Send + Sync + 'static,
    {
        MatrixSource::Parametrized {
            dimension,
            generator: Arc::new(generator),
        }
    }

    /// Side length of the matrix.
    pub fn dimension(&self) -> usize {
        match self {
            MatrixSource::Fixed(m) => m.nrows(),
            MatrixSource::Parametrized { dimension, .. } => *dimension,
        }
    }

    /// The matrix at control value `t`. Fixed sources ignore `t`.
    pub fn at(&self, t: f64) -> GateMatrix {
        match self {
            MatrixSource::Fixed(m) => m.clone(),
            MatrixSource::Parametrized { generator, .. } => generator(t),
        }
    }

    pub fn is_parametrized(&self) -> bool {
        matches!(self, MatrixSource::Parametrized { .. })
    }
}

impl fmt::Debug for MatrixSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixSource::Fixed(m) => f.debug_tuple("Fixed").field(m).finish(),
            MatrixSource::Parametrized { dimension, .. } => f
                .debug_struct("Parametrized")
                .field("dimension", dimension)
                .finish_non_exhaustive(),
        }
    }
}

impl PartialEq for MatrixSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MatrixSource::Fixed(a), MatrixSource::Fixed(b)) => a == b,
            (
                MatrixSource::Parametrized {
                    dimension: da,
                    generator: ga,
                },
                MatrixSource::Parametrized {
                    dimension: db,
                    generator: gb,
                },
            ) => da == db && SAMPLE_POINTS.iter().all(|&t| ga(t) == gb(t)),
            _ => false,
        }
    }
}

/// Rendering hints for the built-in gates.
///
/// The catalog stores one of these inside each built-in gate's [`Drawer`];
/// only the renderer reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawStyle {
    Default,
    /// Fractional powers of a half turn.
    Power,
    /// Gates that cycle with the control value.
    Cycle,
    /// Draws the matrix instead of the symbol outside the toolbox.
    MatrixSymbol,
    Control,
    AntiControl,
    Swap,
    Display,
    /// Marks the wires of an input register.
    Input,
    Spacer,
}

/// Opaque drawing capability attached to a gate.
///
/// The catalog never calls into it; it is stored and handed back to
/// whoever renders the gate.
#[derive(Clone)]
pub struct Drawer(Arc<dyn Any + Send + Sync>);

impl Drawer {
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Drawer(Arc::new(payload))
    }

    /// Access for the renderer that created the payload.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Drawer::new(DrawStyle::Default)
    }
}

impl From<DrawStyle> for Drawer {
    fn from(style: DrawStyle) -> Self {
        Drawer::new(style)
    }
}

impl fmt::Debug for Drawer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Drawer(..)")
    }
}

/// Immutable description of one gate.
///
/// Equality is structural: two descriptors are equal when they have the
/// same id, symbol, documentation and matrix. The drawer is not compared.
#[derive(Debug, Clone)]
pub struct GateDescriptor {
    symbol: String,
    source: MatrixSource,
    serialized_id: String,
    name: String,
    short_doc: String,
    long_doc: String,
    drawer: Drawer,
}

impl GateDescriptor {
    /// Validates and creates a descriptor.
    ///
    /// Fails when the id is empty, the matrix is not square, its dimension
    /// is not a power of two, a generator disagrees with its declared
    /// dimension, or the matrix is not unitary. Parametrized sources are
    /// checked at a fixed set of control values in `[0, 1)`.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Text shown on the gate.
    /// * `source` - Fixed matrix or generator over the control value.
    /// * `serialized_id` - Identifier used in saved circuits; must not be empty.
    /// * `name`, `short_doc`, `long_doc` - Human-readable documentation.
    /// * `drawer` - Rendering payload, stored without inspection.
    pub fn new(
        symbol: impl Into<String>,
        source: MatrixSource,
        serialized_id: impl Into<String>,
        name: impl Into<String>,
        short_doc: impl Into<String>,
        long_doc: impl Into<String>,
        drawer: Drawer,
    ) -> Result<Self> {
        let gate = Self {
            symbol: symbol.into(),
            source,
            serialized_id: serialized_id.into(),
            name: name.into(),
            short_doc: short_doc.into(),
            long_doc: long_doc.into(),
            drawer,
        };
        gate.validate()?;
        Ok(gate)
    }

    fn validate(&self) -> Result<()> {
        if self.serialized_id.is_empty() {
            return Err(CatalogError::EmptyId {
                symbol: self.symbol.clone(),
            });
        }

        let sampled = match &self.source {
            MatrixSource::Fixed(m) => {
                if !m.is_square() {
                    return Err(CatalogError::NotSquare {
                        id: self.serialized_id.clone(),
                        rows: m.nrows(),
                        cols: m.ncols(),
                    });
                }
                self.check_dimension(m.nrows())?;
                vec![m.clone()]
            }
            MatrixSource::Parametrized {
                dimension,
                generator,
            } => {
                self.check_dimension(*dimension)?;
                let mut sampled = Vec::with_capacity(SAMPLE_POINTS.len());
                for &t in SAMPLE_POINTS.iter() {
                    let m = generator(t);
                    if m.nrows() != *dimension || m.ncols() != *dimension {
                        return Err(CatalogError::DimensionMismatch {
                            id: self.serialized_id.clone(),
                            declared: *dimension,
                            actual: m.nrows().max(m.ncols()),
                        });
                    }
                    sampled.push(m);
                }
                sampled
            }
        };

        for m in &sampled {
            let deviation = unitarity_deviation(m);
            if deviation >= UNITARY_TOLERANCE {
                return Err(CatalogError::NotUnitary {
                    id: self.serialized_id.clone(),
                    deviation,
                    tolerance: UNITARY_TOLERANCE,
                });
            }
        }
        Ok(())
    }

    fn check_dimension(&self, dimension: usize) -> Result<()> {
        if is_qubit_dimension(dimension) {
            Ok(())
        } else {
            Err(CatalogError::InvalidDimension {
                id: self.serialized_id.clone(),
                dimension,
            })
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn serialized_id(&self) -> &str {
        &self.serialized_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_doc(&self) -> &str {
        &self.short_doc
    }

    pub fn long_doc(&self) -> &str {
        &self.long_doc
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn matrix_source(&self) -> &MatrixSource {
        &self.source
    }

    /// The gate's matrix at control value `t`.
    pub fn matrix_at(&self, t: f64) -> GateMatrix {
        self.source.at(t)
    }

    /// The matrix, if it does not depend on a control value.
    pub fn fixed_matrix(&self) -> Option<&GateMatrix> {
        match &self.source {
            MatrixSource::Fixed(m) => Some(m),
            MatrixSource::Parametrized { .. } => None,
        }
    }

    pub fn is_parametrized(&self) -> bool {
        self.source.is_parametrized()
    }

    pub fn dimension(&self) -> usize {
        self.source.dimension()
    }

    /// Number of qubits the gate acts on.
    pub fn qubit_span(&self) -> usize {
        self.dimension().trailing_zeros() as usize
    }
}

impl PartialEq for GateDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.serialized_id == other.serialized_id
            && self.symbol == other.symbol
            && self.name == other.name
            && self.short_doc == other.short_doc
            && self.long_doc == other.long_doc
            && self.source == other.source
    }
}

/// Step-by-step construction of a [`GateDescriptor`].
///
/// The serialized id defaults to the symbol.
///
/// # Examples
///
/// ```
/// use qgate_catalog::ir::{GateBuilder, MatrixSource};
/// use qgate_catalog::math::matrix::pauli_x;
///
/// let not = GateBuilder::new("X", MatrixSource::fixed(pauli_x()))
///     .name("Pauli X Gate")
///     .short_doc("Toggles between ON and OFF.")
///     .build()
///     .unwrap();
/// assert_eq!(not.serialized_id(), "X");
/// ```
#[derive(Debug, Clone)]
pub struct GateBuilder {
    symbol: String,
    source: MatrixSource,
    serialized_id: Option<String>,
    name: String,
    short_doc: String,
    long_doc: String,
    drawer: Drawer,
}

impl GateBuilder {
    /// Starts a gate with empty documentation and the default drawer.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Text shown on the gate, also the id unless one is set.
    /// * `source` - Where the gate's matrix comes from.
    pub fn new(symbol: impl Into<String>, source: MatrixSource) -> Self {
        Self {
            symbol: symbol.into(),
            source,
            serialized_id: None,
            name: String::new(),
            short_doc: String::new(),
            long_doc: String::new(),
            drawer: Drawer::default(),
        }
    }

    pub fn serialized_id(mut self, id: impl Into<String>) -> Self {
        self.serialized_id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn short_doc(mut self, doc: impl Into<String>) -> Self {
        self.short_doc = doc.into();
        self
    }

    pub fn long_doc(mut self, doc: impl Into<String>) -> Self {
        self.long_doc = doc.into();
        self
    }

    pub fn drawer(mut self, drawer: impl Into<Drawer>) -> Self {
        self.drawer = drawer.into();
        self
    }

    pub fn build(self) -> Result<GateDescriptor> {
        let id = self.serialized_id.unwrap_or_else(|| self.symbol.clone());
        GateDescriptor::new(
            self.symbol,
            self.source,
            id,
            self.name,
            self.short_doc,
            self.long_doc,
            self.drawer,
        )
    }
}
