use crate::catalog::GateSet;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::ir::GateDescriptor;
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Resolves ids the built-in registry does not know.
pub trait CustomGateSet {
    fn find_by_serialized_id(&self, id: &str) -> Option<Arc<GateDescriptor>>;
}

/// A custom set with no gates.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyGateSet;

impl CustomGateSet for EmptyGateSet {
    fn find_by_serialized_id(&self, _id: &str) -> Option<Arc<GateDescriptor>> {
        None
    }
}

impl<F> CustomGateSet for F
where
    F: Fn(&str) -> Option<Arc<GateDescriptor>>,
{
    fn find_by_serialized_id(&self, id: &str) -> Option<Arc<GateDescriptor>> {
        self(id)
    }
}

/// A caller-owned collection of user-defined gates.
///
/// Inserting an id that is already present replaces the earlier gate.
#[derive(Debug, Default, Clone)]
pub struct CustomGates {
    gates: HashMap<String, Arc<GateDescriptor>>,
}

impl CustomGates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `gate`, returning the gate it replaced.
    pub fn insert(&mut self, gate: GateDescriptor) -> Option<Arc<GateDescriptor>> {
        self.gates
            .insert(gate.serialized_id().to_string(), Arc::new(gate))
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl CustomGateSet for CustomGates {
    fn find_by_serialized_id(&self, id: &str) -> Option<Arc<GateDescriptor>> {
        self.gates.get(id).cloned()
    }
}

/// Summary of one registered gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateInfo {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub short_doc: String,
    pub qubits: usize,
    pub parametrized: bool,
}

/// Immutable mapping from serialized id to gate, in insertion order.
///
/// Once built, a registry is never modified; share it by reference or
/// `Arc` across threads.
///
/// # Examples
///
/// ```rust
/// use qgate_catalog::registry::{build_registry, CustomGates};
/// use qgate_catalog::CatalogConfig;
///
/// let registry = build_registry(&CatalogConfig::for_gate_set("Quest 3")).unwrap();
/// let custom = CustomGates::new();
///
/// assert!(registry.lookup("H", &custom).is_some());
/// assert!(registry.lookup("~nope", &custom).is_none());
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    gates: IndexMap<String, Arc<GateDescriptor>>,
}

impl Registry {
    /// Builds a registry from `descriptors` in order.
    ///
    /// Two descriptors with the same id are a [`CatalogError::DuplicateId`];
    /// nothing is overwritten.
    pub fn build<I>(descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = GateDescriptor>,
    {
        let mut gates = IndexMap::new();
        for gate in descriptors {
            let id = gate.serialized_id().to_string();
            if gates.contains_key(&id) {
                return Err(CatalogError::DuplicateId(id));
            }
            gates.insert(id, Arc::new(gate));
        }
        Ok(Self { gates })
    }

    /// Resolves `id` against the built-in gates, then against `custom`.
    ///
    /// Results from `custom` are neither cached nor added to the registry.
    pub fn lookup<C>(&self, id: &str, custom: &C) -> Option<Arc<GateDescriptor>>
    where
        C: CustomGateSet + ?Sized,
    {
        match self.gates.get(id) {
            Some(gate) => Some(Arc::clone(gate)),
            None => custom.find_by_serialized_id(id),
        }
    }

    /// Built-in gates only.
    pub fn get(&self, id: &str) -> Option<&Arc<GateDescriptor>> {
        self.gates.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.gates.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<GateDescriptor>> {
        self.gates.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.gates.keys().map(String::as_str)
    }

    pub fn manifest(&self) -> Vec<GateInfo> {
        self.iter()
            .map(|gate| GateInfo {
                id: gate.serialized_id().to_string(),
                symbol: gate.symbol().to_string(),
                name: gate.name().to_string(),
                short_doc: gate.short_doc().to_string(),
                qubits: gate.qubit_span(),
                parametrized: gate.is_parametrized(),
            })
            .collect()
    }
}

/// Builds the registry for the gate set named in `config`.
///
/// An unknown gate set name or a duplicate id fails the whole build.
pub fn build_registry(config: &CatalogConfig) -> Result<Registry> {
    config.validate()?;
    let gate_set: GateSet = config.gate_set()?;
    let registry = Registry::build(gate_set.known_gates(config)?)?;
    info!(gate_set = %gate_set, gates = registry.len(), "built gate registry");
    Ok(registry)
}

static INSTALLED: OnceCell<Registry> = OnceCell::new();

/// Builds and publishes the process-wide registry.
///
/// The first successful call wins; later and concurrent callers get the
/// same registry regardless of the config they pass. A failed build
/// publishes nothing.
pub fn install(config: &CatalogConfig) -> Result<&'static Registry> {
    INSTALLED.get_or_try_init(|| {
        let registry = build_registry(config)?;
        info!(gates = registry.len(), "installed process-wide gate registry");
        Ok(registry)
    })
}

/// The process-wide registry, if [`install`] has succeeded.
pub fn installed() -> Option<&'static Registry> {
    INSTALLED.get()
}
