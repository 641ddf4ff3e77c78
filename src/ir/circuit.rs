use super::gates::GateDescriptor;
use crate::error::{CatalogError, Result};
use crate::registry::{CustomGateSet, Registry};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Marker for an empty slot in the column format.
const EMPTY_SLOT: u64 = 1;

/// A circuit layout that references gates by serialized id.
///
/// A `Circuit` is a sequence of columns; each column lists, per wire, the
/// gate placed there or `None`. Nothing here evaluates the circuit.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    /// Columns from left to right.
    pub columns: Vec<Vec<Option<Arc<GateDescriptor>>>>,
}

#[derive(Serialize, Deserialize)]
struct CircuitJson {
    cols: Vec<Vec<Value>>,
}

impl Circuit {
    /// Creates a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column.
    pub fn add_column(&mut self, column: Vec<Option<Arc<GateDescriptor>>>) {
        self.columns.push(column);
    }

    /// Number of wires touched by the widest column.
    pub fn wire_count(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Parses `{"cols": [["H", 1], ["•", "X"]]}`.
    ///
    /// Each string is resolved through [`Registry::lookup`], so gates from
    /// `custom` are accepted too. The number `1` marks an empty slot.
    pub fn from_json<C>(text: &str, registry: &Registry, custom: &C) -> Result<Self>
    where
        C: CustomGateSet + ?Sized,
    {
        let raw: CircuitJson = serde_json::from_str(text)?;
        let mut circuit = Circuit::new();

        for col in raw.cols {
            let mut column = Vec::with_capacity(col.len());
            for slot in col {
                column.push(match slot {
                    Value::String(id) => match registry.lookup(&id, custom) {
                        Some(gate) => Some(gate),
                        None => {
                            warn!(id = %id, "circuit references an unknown gate");
                            return Err(CatalogError::UnknownGate(id));
                        }
                    },
                    Value::Number(n) if n.as_u64() == Some(EMPTY_SLOT) => None,
                    other => {
                        return Err(serde_json::Error::custom(format!(
                            "expected a gate id or {}, found {}",
                            EMPTY_SLOT, other
                        ))
                        .into())
                    }
                });
            }
            circuit.add_column(column);
        }
        Ok(circuit)
    }

    /// Writes the column format read by [`Circuit::from_json`].
    pub fn to_json(&self) -> Result<String> {
        let cols = self
            .columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .map(|slot| match slot {
                        Some(gate) => Value::from(gate.serialized_id()),
                        None => Value::from(EMPTY_SLOT),
                    })
                    .collect()
            })
            .collect();
        Ok(serde_json::to_string(&CircuitJson { cols })?)
    }
}
