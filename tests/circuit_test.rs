#[cfg(test)]
mod tests {
    use qgate_catalog::ir::{GateBuilder, MatrixSource};
    use qgate_catalog::math::identity;
    use qgate_catalog::registry::{CustomGates, EmptyGateSet};
    use qgate_catalog::{build_registry, CatalogConfig, CatalogError, Circuit};

    fn registry() -> qgate_catalog::Registry {
        build_registry(&CatalogConfig {
            fuzz_seed: Some(1),
            ..CatalogConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_bell_pair_layout() {
        let registry = registry();
        let text = r#"{"cols":[["H"],["•","X"],["Chance2"]]}"#;
        let circuit = Circuit::from_json(text, &registry, &EmptyGateSet).unwrap();

        assert_eq!(circuit.columns.len(), 3);
        assert_eq!(circuit.wire_count(), 2);
        assert_eq!(circuit.columns[1][0].as_ref().unwrap().name(), "Control");
        assert_eq!(circuit.columns[2][0].as_ref().unwrap().qubit_span(), 2);
        assert_eq!(circuit.to_json().unwrap(), text);
    }

    #[test]
    fn test_empty_slots() {
        let registry = registry();
        let text = r#"{"cols":[[1,"X^t",1,"QFT3"]]}"#;
        let circuit = Circuit::from_json(text, &registry, &EmptyGateSet).unwrap();
        assert!(circuit.columns[0][0].is_none());
        assert!(circuit.columns[0][1].as_ref().unwrap().is_parametrized());
        assert_eq!(circuit.to_json().unwrap(), text);
    }

    #[test]
    fn test_custom_gate_in_circuit() {
        let registry = registry();
        let mut custom = CustomGates::new();
        custom.insert(
            GateBuilder::new("~spin", MatrixSource::fixed(identity(2)))
                .build()
                .unwrap(),
        );
        let circuit =
            Circuit::from_json(r#"{"cols":[["~spin","H"]]}"#, &registry, &custom).unwrap();
        assert_eq!(circuit.columns[0][0].as_ref().unwrap().serialized_id(), "~spin");

        let err = Circuit::from_json(r#"{"cols":[["~spin"]]}"#, &registry, &EmptyGateSet)
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownGate(ref id) if id == "~spin"));
    }

    #[test]
    fn test_malformed_circuits() {
        let registry = registry();
        for text in [r#"{"cols":[[2]]}"#, r#"{"cols":[[null]]}"#, r#"{"rows":[]}"#, "not json"] {
            let err = Circuit::from_json(text, &registry, &EmptyGateSet).unwrap_err();
            assert!(matches!(err, CatalogError::CircuitFormat(_)), "{}", text);
        }
    }
}
