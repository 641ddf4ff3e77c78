//! # qgate-catalog
//!
//! A catalog of quantum gate descriptors. Each descriptor carries a
//! unitary matrix, fixed or generated from a control value in `[0, 1)`,
//! and a stable serialized id. Families produce one descriptor per
//! register width.
//!
//! The [`registry`] resolves ids against the built-in gates first and a
//! caller-supplied [`CustomGateSet`] second. Which built-in gates exist is
//! decided once at startup by the configured gate set.
//!
//! ```rust
//! use qgate_catalog::{build_registry, CatalogConfig};
//! use qgate_catalog::registry::EmptyGateSet;
//!
//! let registry = build_registry(&CatalogConfig::default()).unwrap();
//! let swap = registry.lookup("Swap", &EmptyGateSet).unwrap();
//! assert_eq!(swap.qubit_span(), 2);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod ir;
pub mod math;
pub mod registry;
pub mod toolbox;

pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use ir::{Circuit, GateDescriptor, GateFamily, MatrixSource};
pub use registry::{build_registry, CustomGateSet, Registry};
