pub mod displays;
pub mod evolving;
pub mod families;
pub mod inputs;
pub mod oracles;
pub mod silly;
pub mod special;
pub mod turns;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::ir::{DrawStyle, GateBuilder, GateDescriptor, GateFamily, MatrixSource};
use crate::toolbox;
use indexmap::IndexSet;
use std::fmt;
use std::str::FromStr;

/// A gate whose serialized id is its symbol.
fn gate(
    symbol: &str,
    source: MatrixSource,
    name: &str,
    short_doc: &str,
    long_doc: &str,
    style: DrawStyle,
) -> Result<GateDescriptor> {
    GateBuilder::new(symbol, source)
        .name(name)
        .short_doc(short_doc)
        .long_doc(long_doc)
        .drawer(style)
        .build()
}

/// Every built-in gate that is not part of a family, in catalog order.
pub fn singles(fuzz_seed: Option<u64>) -> Result<Vec<GateDescriptor>> {
    let mut gates = special::all()?;
    gates.extend(inputs::singles()?);
    gates.extend(displays::singles()?);
    gates.extend(turns::all()?);
    gates.extend(evolving::all()?);
    gates.extend(silly::all(fuzz_seed)?);
    gates.extend(oracles::all()?);
    Ok(gates)
}

/// Every built-in family.
pub fn all_families() -> Vec<GateFamily> {
    let mut all = inputs::families();
    all.extend(displays::families());
    all.extend(families::all());
    all
}

/// A named selection of gates, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateSet {
    /// The whole catalog.
    Default,
    Quest1,
    Quest2,
    Quest3,
    Quest4,
}

impl GateSet {
    pub const ALL: [GateSet; 5] = [
        GateSet::Default,
        GateSet::Quest1,
        GateSet::Quest2,
        GateSet::Quest3,
        GateSet::Quest4,
    ];

    /// The configuration value that selects this set.
    pub fn name(self) -> &'static str {
        match self {
            GateSet::Default => "default",
            GateSet::Quest1 => "Quest 1",
            GateSet::Quest2 => "Quest 2",
            GateSet::Quest3 => "Quest 3",
            GateSet::Quest4 => "Quest 4",
        }
    }

    /// The gates to register for this set, in registration order.
    ///
    /// The default set registers every single gate plus every family at
    /// `config.family_widths()`. The quest sets register only what their
    /// toolboxes show. Family members named by the toolbox are always
    /// included, whatever the configured widths.
    pub fn known_gates(self, config: &CatalogConfig) -> Result<Vec<GateDescriptor>> {
        let families = all_families();
        let referenced: Vec<&'static str> = toolbox::layout(self)
            .iter()
            .flat_map(|group| group.slots.iter().flatten().copied())
            .collect();

        let all_singles = singles(config.fuzz_seed)?;
        let mut members: IndexSet<(usize, usize)> = IndexSet::new();
        let mut gates = match self {
            GateSet::Default => {
                for index in 0..families.len() {
                    members.extend(config.family_widths().map(|width| (index, width)));
                }
                all_singles
            }
            _ => all_singles
                .into_iter()
                .filter(|g| referenced.iter().any(|id| *id == g.serialized_id()))
                .collect(),
        };

        for id in referenced {
            if gates.iter().any(|g| g.serialized_id() == id) {
                continue;
            }
            let member = families
                .iter()
                .enumerate()
                .find_map(|(index, family)| family.width_of(id).map(|width| (index, width)))
                .ok_or_else(|| CatalogError::UnknownGate(id.to_string()))?;
            members.insert(member);
        }

        for (index, width) in members {
            gates.push(families[index].of_size(width)?);
        }
        Ok(gates)
    }
}

impl fmt::Display for GateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GateSet {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        GateSet::ALL
            .into_iter()
            .find(|set| set.name() == s)
            .ok_or_else(|| CatalogError::UnknownGateSet(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_gate_set_names_round_trip() {
        for set in GateSet::ALL {
            assert_eq!(set.name().parse::<GateSet>().unwrap(), set);
        }
    }

    #[test]
    fn test_unknown_gate_set() {
        for name in ["", "Default", "quest 1", "Quest 3 Quantum"] {
            assert!(matches!(
                name.parse::<GateSet>(),
                Err(CatalogError::UnknownGateSet(_))
            ));
        }
    }

    #[test]
    fn test_singles_have_unique_ids() {
        let gates = singles(Some(1)).unwrap();
        let ids: HashSet<&str> = gates.iter().map(|g| g.serialized_id()).collect();
        assert_eq!(ids.len(), gates.len());
    }

    #[test]
    fn test_quest_sets_are_small() {
        let config = CatalogConfig::default();
        let gates = GateSet::Quest2.known_gates(&config).unwrap();
        let ids: Vec<&str> = gates.iter().map(|g| g.serialized_id()).collect();
        assert_eq!(ids, vec!["•", "Measure", "X", "Z", "H", "Chance2"]);
    }

    #[test]
    fn test_toolbox_members_outside_widths_are_added() {
        let config = CatalogConfig {
            max_family_width: 1,
            ..CatalogConfig::default()
        };
        let gates = GateSet::Default.known_gates(&config).unwrap();
        let ids: Vec<&str> = gates.iter().map(|g| g.serialized_id()).collect();
        assert!(ids.contains(&"Sample3"));
        assert!(ids.contains(&"Amps2"));
        assert!(!ids.contains(&"QFT2"));
        assert_eq!(ids.iter().filter(|id| **id == "Chance1").count(), 1);
    }
}
