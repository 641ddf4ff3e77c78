#[cfg(test)]
mod tests {
    use qgate_catalog::catalog::{all_families, GateSet};
    use qgate_catalog::ir::{GateBuilder, MatrixSource};
    use qgate_catalog::math::matrix::{hadamard, pauli_z};
    use qgate_catalog::registry::{install, installed, CustomGates, EmptyGateSet, Registry};
    use qgate_catalog::{build_registry, CatalogConfig, CatalogError};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn config(gate_set: &str) -> CatalogConfig {
        CatalogConfig {
            fuzz_seed: Some(42),
            ..CatalogConfig::for_gate_set(gate_set)
        }
    }

    #[test]
    fn test_ids_are_unique_in_every_gate_set() {
        for set in GateSet::ALL {
            let registry = build_registry(&config(set.name())).unwrap();
            let ids: HashSet<&str> = registry.ids().collect();
            assert_eq!(ids.len(), registry.len(), "gate set {}", set);
            assert!(!ids.contains(""));
        }
    }

    #[test]
    fn test_every_id_round_trips() {
        let registry = build_registry(&config("default")).unwrap();
        for gate in registry.iter() {
            let found = registry.lookup(gate.serialized_id(), &EmptyGateSet).unwrap();
            assert!(Arc::ptr_eq(&found, gate));
            assert_eq!(found.serialized_id(), gate.serialized_id());
        }
    }

    #[test]
    fn test_default_holds_every_family_width() {
        let config = config("default");
        let registry = build_registry(&config).unwrap();
        for family in all_families() {
            for width in config.family_widths() {
                let gate = registry.get(&family.member_id(width)).unwrap();
                assert_eq!(gate.dimension(), 1 << width);
            }
        }
    }

    #[test]
    fn test_quest_sets_differ() {
        let quest1 = build_registry(&config("Quest 1")).unwrap();
        let quest4 = build_registry(&config("Quest 4")).unwrap();
        assert!(quest1.contains("MysteryRotation"));
        assert!(!quest4.contains("MysteryRotation"));
        assert!(quest4.contains("DatabaseChip"));
        assert!(!quest1.contains("H"));
    }

    #[test]
    fn test_custom_gates_fill_the_gaps() {
        let registry = build_registry(&config("Quest 2")).unwrap();
        let mut custom = CustomGates::new();
        custom.insert(
            GateBuilder::new("~u", MatrixSource::fixed(hadamard()))
                .name("My Gate")
                .build()
                .unwrap(),
        );
        custom.insert(GateBuilder::new("H", MatrixSource::fixed(pauli_z())).build().unwrap());

        let mine = registry.lookup("~u", &custom).unwrap();
        assert_eq!(mine.name(), "My Gate");
        // The built-in H shadows the custom one.
        assert_eq!(registry.lookup("H", &custom).unwrap().fixed_matrix(), Some(&hadamard()));
        assert!(registry.lookup("~missing", &custom).is_none());
        assert!(!registry.contains("~u"));
    }

    #[test]
    fn test_duplicate_ids_are_fatal() {
        let gate = || GateBuilder::new("Z", MatrixSource::fixed(pauli_z())).build().unwrap();
        let err = Registry::build(vec![gate(), gate()]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "Z"));
    }

    #[test]
    fn test_unknown_gate_set_builds_nothing() {
        let err = build_registry(&config("Quest 3 Quantum")).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownGateSet(ref name) if name == "Quest 3 Quantum"));
        assert_eq!(err.to_string(), "unknown gate set: 'Quest 3 Quantum'");
    }

    #[test]
    fn test_install_happens_once() {
        assert!(install(&config("no such set")).is_err());
        let first = install(&config("Quest 1")).unwrap();
        let second = install(&config("default")).unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(installed().unwrap(), first));
        assert!(first.contains("MysteryRotation"));
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let registry = Arc::new(build_registry(&config("Quest 3")).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.lookup("Chance1", &EmptyGateSet).is_some())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_bundled_profiles_load() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("profiles");
        let quest3 = CatalogConfig::from_path(&dir.join("quest3.toml")).unwrap();
        assert_eq!(quest3.gate_set().unwrap(), GateSet::Quest3);
        let registry = build_registry(&quest3).unwrap();
        assert!(registry.contains("Chance1"));
        assert!(!registry.contains("Chance2"));

        let default = CatalogConfig::from_path(&dir.join("default.toml")).unwrap();
        assert_eq!(default.family_widths(), 1..=6);
    }

    #[test]
    fn test_manifest_serializes() {
        let registry = build_registry(&config("Quest 2")).unwrap();
        let json = serde_json::to_value(registry.manifest()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), registry.len());
        let chance = entries.iter().find(|e| e["id"] == "Chance2").unwrap();
        assert_eq!(chance["qubits"], 2);
        assert_eq!(chance["parametrized"], false);
    }
}
