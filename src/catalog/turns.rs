use super::gate;
use crate::error::Result;
use crate::ir::{DrawStyle, GateBuilder, GateDescriptor, MatrixSource};
use crate::math::matrix::{hadamard, pauli_x, pauli_y, pauli_z};
use crate::math::{pauli_rotation, PauliAxis};

pub fn x() -> Result<GateDescriptor> {
    gate(
        "X",
        MatrixSource::fixed(pauli_x()),
        "Pauli X Gate",
        "The NOT gate. Toggles between ON and OFF.",
        "The NOT gate is a 180° turn around the Bloch sphere's X axis. \
         Pairs states that differ only in the value of the target qubit, and swaps their amplitudes. \
         Combine with control gates to create controlled-NOT and Toffoli gates.",
        DrawStyle::Default,
    )
}

pub fn y() -> Result<GateDescriptor> {
    gate(
        "Y",
        MatrixSource::fixed(pauli_y()),
        "Pauli Y Gate",
        "A combination of the X and Z gates.",
        "The Pauli Y gate is a 180° turn around the Bloch sphere's Y axis. \
         It is equivalent to an X gate followed by a Z gate, up to a global phase factor.",
        DrawStyle::Default,
    )
}

pub fn z() -> Result<GateDescriptor> {
    gate(
        "Z",
        MatrixSource::fixed(pauli_z()),
        "Pauli Z Gate",
        "The phase flip gate. Negates phases when the qubit is ON.",
        "The phase flip gate is a 180° turn around the Bloch sphere's Z axis. \
         Negates the amplitude of parts of the superposition where the target qubit is ON.",
        DrawStyle::Default,
    )
}

pub fn h() -> Result<GateDescriptor> {
    gate(
        "H",
        MatrixSource::fixed(hadamard()),
        "Hadamard Gate",
        "Creates simple superpositions.",
        "The Hadamard gate is the simplest non-classical gate. \
         Maps ON to ON+OFF and back, but maps OFF to ON-OFF and back. \
         Corresponds to a 180° turn around the Bloch sphere's diagonal X+Z axis.",
        DrawStyle::Default,
    )
}

/// `axis^exponent`, where an exponent of 1 is a half turn.
fn fractional(axis: PauliAxis, label: &str, exponent: f64, short_doc: &str) -> Result<GateDescriptor> {
    let (wx, wy, wz) = axis.weights(exponent / 2.0);
    let symbol = format!("{}^{}", axis.label(), label);
    GateBuilder::new(symbol.clone(), MatrixSource::fixed(pauli_rotation(wx, wy, wz)))
        .name(format!("{} Gate", symbol))
        .short_doc(short_doc)
        .long_doc(format!(
            "A {}° turn around the Bloch sphere's {} axis.",
            (exponent * 1800.0).round() / 10.0,
            axis.label()
        ))
        .drawer(DrawStyle::Power)
        .build()
}

/// Forward and backward turns by `exponent` around each axis, Z first.
fn fraction_pair(label: &str, exponent: f64, what: &str) -> Result<Vec<GateDescriptor>> {
    let mut gates = Vec::new();
    for axis in [PauliAxis::Z, PauliAxis::Y, PauliAxis::X] {
        gates.push(fractional(
            axis,
            label,
            exponent,
            &format!("Principal {} of {}.", what, axis.label()),
        )?);
        gates.push(fractional(
            axis,
            &format!("-{}", label),
            -exponent,
            &format!("Adjoint {} of {}.", what, axis.label()),
        )?);
    }
    Ok(gates)
}

pub fn quarter_turns() -> Result<Vec<GateDescriptor>> {
    fraction_pair("½", 0.5, "square root")
}

pub fn eighth_turns() -> Result<Vec<GateDescriptor>> {
    fraction_pair("¼", 0.25, "fourth root")
}

pub fn sixteenth_turns() -> Result<Vec<GateDescriptor>> {
    fraction_pair("⅛", 0.125, "eighth root")
}

/// `Z^⅓` and `Z^-⅓`.
pub fn third_turns() -> Result<Vec<GateDescriptor>> {
    Ok(vec![
        fractional(PauliAxis::Z, "⅓", 1.0 / 3.0, "Principal cube root of Z.")?,
        fractional(PauliAxis::Z, "-⅓", -1.0 / 3.0, "Adjoint cube root of Z.")?,
    ])
}

pub fn all() -> Result<Vec<GateDescriptor>> {
    let mut gates = vec![x()?, y()?, z()?, h()?];
    gates.extend(quarter_turns()?);
    gates.extend(eighth_turns()?);
    gates.extend(sixteenth_turns()?);
    gates.extend(third_turns()?);
    Ok(gates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::{approx_eq, c, square};
    use crate::math::identity;

    fn find(gates: &[GateDescriptor], id: &str) -> GateDescriptor {
        gates
            .iter()
            .find(|g| g.serialized_id() == id)
            .cloned()
            .unwrap_or_else(|| panic!("missing {}", id))
    }

    #[test]
    fn test_quarter_turn_ids() {
        let ids: Vec<String> = quarter_turns()
            .unwrap()
            .iter()
            .map(|g| g.serialized_id().to_string())
            .collect();
        assert_eq!(ids, vec!["Z^½", "Z^-½", "Y^½", "Y^-½", "X^½", "X^-½"]);
    }

    #[test]
    fn test_sqrt_z_is_s_gate() {
        let s = find(&quarter_turns().unwrap(), "Z^½");
        let expected = square(2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)]);
        assert!(approx_eq(s.fixed_matrix().unwrap(), &expected, 1e-12));
    }

    #[test]
    fn test_square_roots_square_to_half_turns() {
        let gates = quarter_turns().unwrap();
        for (id, half) in [("X^½", pauli_x()), ("Y^½", pauli_y()), ("Z^½", pauli_z())] {
            let root = find(&gates, id);
            let m = root.fixed_matrix().unwrap();
            assert!(approx_eq(&(m * m), &half, 1e-12), "{} squared", id);
        }
    }

    #[test]
    fn test_forward_and_backward_cancel() {
        let gates = sixteenth_turns().unwrap();
        let forward = find(&gates, "Y^⅛");
        let backward = find(&gates, "Y^-⅛");
        let product = forward.fixed_matrix().unwrap() * backward.fixed_matrix().unwrap();
        assert!(approx_eq(&product, &identity(2), 1e-12));
    }

    #[test]
    fn test_cube_root_of_z() {
        let gates = third_turns().unwrap();
        let m = find(&gates, "Z^⅓").fixed_matrix().unwrap().clone();
        assert!(approx_eq(&(&m * &m * &m), &pauli_z(), 1e-12));
    }
}
