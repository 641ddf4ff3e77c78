use super::gate;
use crate::error::Result;
use crate::ir::{DrawStyle, GateBuilder, GateDescriptor, GateFamily, MatrixSource};
use crate::math::identity;

/// Names the wires it covers as input register `letter`. The matrix is the
/// identity; arithmetic gates in the same column read the register.
fn input_family(letter: &'static str) -> GateFamily {
    GateFamily::new(format!("input{}", letter), move |n| {
        GateBuilder::new(format!("input {}", letter), MatrixSource::fixed(identity(1 << n)))
            .name(format!("Input Gate [{}]", letter))
            .short_doc(format!("Marks some qubits as input '{}'.", letter))
            .long_doc("Does nothing on its own. Gates in the same column use the marked qubits as a number.")
            .drawer(DrawStyle::Input)
    })
}

/// Fixes the value of input `letter` for a column that has no input gate.
fn default_value(letter: &str) -> Result<GateDescriptor> {
    gate(
        &format!("set{}", letter),
        MatrixSource::fixed(identity(2)),
        &format!("Input Default [{}]", letter),
        &format!("Sets a classical value for input '{}' when it is not given by qubits.", letter),
        "The value is chosen by the circuit, not the gate, so the matrix is the identity.",
        DrawStyle::Input,
    )
}

pub fn input_a_family() -> GateFamily {
    input_family("A")
}

pub fn input_b_family() -> GateFamily {
    input_family("B")
}

pub fn input_r_family() -> GateFamily {
    input_family("R")
}

pub fn singles() -> Result<Vec<GateDescriptor>> {
    Ok(vec![
        default_value("A")?,
        default_value("B")?,
        default_value("R")?,
    ])
}

pub fn families() -> Vec<GateFamily> {
    vec![input_a_family(), input_b_family(), input_r_family()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_ids() {
        let gate = input_b_family().of_size(3).unwrap();
        assert_eq!(gate.serialized_id(), "inputB3");
        assert_eq!(gate.fixed_matrix(), Some(&identity(8)));
        assert_eq!(input_a_family().width_of("inputA2"), Some(2));
        assert_eq!(input_a_family().width_of("inputB2"), None);
    }

    #[test]
    fn test_default_values_are_markers() {
        let ids: Vec<String> = singles()
            .unwrap()
            .iter()
            .map(|g| g.serialized_id().to_string())
            .collect();
        assert_eq!(ids, vec!["setA", "setB", "setR"]);
    }
}
