use crate::catalog::GateSet;
use crate::error::{CatalogError, Result};
use crate::ir::GateDescriptor;
use crate::registry::Registry;
use std::sync::Arc;

/// One group of a toolbox layout, by id. `None` is a blank slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLayout {
    pub hint: &'static str,
    pub slots: &'static [Option<&'static str>],
}

const fn group(hint: &'static str, slots: &'static [Option<&'static str>]) -> GroupLayout {
    GroupLayout { hint, slots }
}

const DEFAULT_LAYOUT: &[GroupLayout] = &[
    group(
        "Probes",
        &[Some("Measure"), None, None, None, Some("◦"), Some("•")],
    ),
    group(
        "Displays",
        &[
            Some("Sample3"),
            None,
            Some("Density1"),
            Some("Bloch"),
            Some("Chance1"),
            Some("Amps2"),
        ],
    ),
    group(
        "Half Turns",
        &[Some("Z"), Some("Swap"), Some("Y"), None, Some("X"), Some("H")],
    ),
    group(
        "Quarter Turns",
        &[
            Some("Z^½"),
            Some("Z^-½"),
            Some("Y^½"),
            Some("Y^-½"),
            Some("X^½"),
            Some("X^-½"),
        ],
    ),
    group(
        "Eighth Turns",
        &[
            Some("Z^¼"),
            Some("Z^-¼"),
            Some("Y^¼"),
            Some("Y^-¼"),
            Some("X^¼"),
            Some("X^-¼"),
        ],
    ),
    group(
        "Sixteenths",
        &[
            Some("Z^⅛"),
            Some("Z^-⅛"),
            Some("Y^⅛"),
            Some("Y^-⅛"),
            Some("X^⅛"),
            Some("X^-⅛"),
        ],
    ),
    group(
        "Spinning",
        &[
            Some("Z^t"),
            Some("Z^-t"),
            Some("Y^t"),
            Some("Y^-t"),
            Some("X^t"),
            Some("X^-t"),
        ],
    ),
    group(
        "Parametrized",
        &[
            Some("Z^(A/2^n)"),
            Some("Z^(-A/2^n)"),
            Some("Y^(A/2^n)"),
            Some("Y^(-A/2^n)"),
            Some("X^(A/2^n)"),
            Some("X^(-A/2^n)"),
        ],
    ),
    group(
        "Silly",
        &[None, Some("Fuzz"), Some("NeGate"), None, Some("…"), None],
    ),
];

const QUEST_1_LAYOUT: &[GroupLayout] = &[
    group(
        "Operations",
        &[Some("X"), Some("Measure"), Some("MysteryRotation")],
    ),
    group("Displays", &[Some("Chance1")]),
];

const QUEST_2_OPERATIONS: GroupLayout = group(
    "Operations",
    &[Some("X"), Some("Measure"), Some("•"), Some("Z"), Some("H"), None],
);

const QUEST_2_LAYOUT: &[GroupLayout] = &[QUEST_2_OPERATIONS, group("Displays", &[Some("Chance2")])];

const QUEST_3_LAYOUT: &[GroupLayout] = &[QUEST_2_OPERATIONS, group("Displays", &[Some("Chance1")])];

const QUEST_4_LAYOUT: &[GroupLayout] = &[
    QUEST_2_OPERATIONS,
    group("Displays", &[Some("Chance1")]),
    group(
        "Oracles",
        &[
            Some("DatabaseChip"),
            Some("DeutschJozsaOracle"),
            Some("BernsteinVaziraniOracle"),
        ],
    ),
];

/// The id layout of a gate set's toolbox.
pub fn layout(gate_set: GateSet) -> &'static [GroupLayout] {
    match gate_set {
        GateSet::Default => DEFAULT_LAYOUT,
        GateSet::Quest1 => QUEST_1_LAYOUT,
        GateSet::Quest2 => QUEST_2_LAYOUT,
        GateSet::Quest3 => QUEST_3_LAYOUT,
        GateSet::Quest4 => QUEST_4_LAYOUT,
    }
}

/// A titled group of toolbox slots resolved to gates.
#[derive(Debug, Clone)]
pub struct ToolboxGroup {
    pub hint: String,
    pub slots: Vec<Option<Arc<GateDescriptor>>>,
}

impl ToolboxGroup {
    /// Slots split into columns of `rows` entries; the last may be shorter.
    pub fn columns(&self, rows: usize) -> Vec<&[Option<Arc<GateDescriptor>>]> {
        self.slots.chunks(rows.max(1)).collect()
    }

    /// The non-blank slots in order.
    pub fn gates(&self) -> impl Iterator<Item = &Arc<GateDescriptor>> {
        self.slots.iter().flatten()
    }
}

/// Resolves the layout of `gate_set` against `registry`.
///
/// An id the registry does not hold is an [`CatalogError::UnknownGate`].
pub fn assemble(gate_set: GateSet, registry: &Registry) -> Result<Vec<ToolboxGroup>> {
    layout(gate_set)
        .iter()
        .map(|group| {
            let slots = group
                .slots
                .iter()
                .map(|slot| match slot {
                    Some(id) => registry
                        .get(id)
                        .cloned()
                        .map(Some)
                        .ok_or_else(|| CatalogError::UnknownGate(id.to_string())),
                    None => Ok(None),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(ToolboxGroup {
                hint: group.hint.to_string(),
                slots,
            })
        })
        .collect()
}
