use super::gates::{GateBuilder, GateDescriptor};
use crate::error::{CatalogError, Result};
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::debug;

/// Produces the not-yet-identified gate for a register width.
pub type Template = Arc<dyn Fn(usize) -> GateBuilder + Send + Sync>;

/// A series of gates indexed by register width.
///
/// Member ids are the family's base id followed by the decimal width, so
/// `QFT` at width 3 is `QFT3`. The template decides everything else about
/// the member; the family assigns the id and checks that the matrix has
/// dimension `2^width`.
///
/// # Examples
///
/// ```
/// use qgate_catalog::ir::{GateBuilder, GateFamily, MatrixSource};
/// use qgate_catalog::math::identity;
///
/// let spacer = GateFamily::new("Wide…", |n| {
///     GateBuilder::new("…", MatrixSource::fixed(identity(1 << n)))
/// });
/// let member = spacer.of_size(3).unwrap();
/// assert_eq!(member.serialized_id(), "Wide…3");
/// assert_eq!(member.dimension(), 8);
/// ```
#[derive(Clone)]
pub struct GateFamily {
    base_id: String,
    template: Template,
}

impl GateFamily {
    /// Creates a family.
    ///
    /// # Arguments
    ///
    /// * `base_id` - Prefix of every member id.
    /// * `template` - Builds the member for a width; its id is overwritten.
    pub fn new<F>(base_id: impl Into<String>, template: F) -> Self
    where
        F: Fn(usize) -> GateBuilder + Send + Sync + 'static,
    {
        Self {
            base_id: base_id.into(),
            template: Arc::new(template),
        }
    }

    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    /// Id of the member at `width`.
    pub fn member_id(&self, width: usize) -> String {
        format!("{}{}", self.base_id, width)
    }

    /// Instantiates the family at `width` qubits.
    pub fn of_size(&self, width: usize) -> Result<GateDescriptor> {
        let expected = u32::try_from(width)
            .ok()
            .filter(|&w| w >= 1)
            .and_then(|w| 1usize.checked_shl(w))
            .ok_or_else(|| CatalogError::InvalidWidth {
                base_id: self.base_id.clone(),
                width,
            })?;

        let gate = (self.template)(width)
            .serialized_id(self.member_id(width))
            .build()?;

        if gate.dimension() != expected {
            return Err(CatalogError::FamilyContract {
                base_id: self.base_id.clone(),
                width,
                reason: format!(
                    "template produced dimension {}, expected {}",
                    gate.dimension(),
                    expected
                ),
            });
        }

        debug!(family = %self.base_id, width, id = gate.serialized_id(), "instantiated family member");
        Ok(gate)
    }

    /// Instantiates every width in `widths`, in order.
    pub fn members(&self, widths: RangeInclusive<usize>) -> Result<Vec<GateDescriptor>> {
        widths.map(|n| self.of_size(n)).collect()
    }

    /// Recovers the width from an id this family produces.
    pub fn width_of(&self, id: &str) -> Option<usize> {
        let digits = id.strip_prefix(self.base_id.as_str())?;
        let width: usize = digits.parse().ok()?;
        (width >= 1 && self.member_id(width) == id).then_some(width)
    }
}

impl fmt::Debug for GateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateFamily")
            .field("base_id", &self.base_id)
            .finish_non_exhaustive()
    }
}
