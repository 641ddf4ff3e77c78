use super::gate;
use crate::error::Result;
use crate::ir::{DrawStyle, GateBuilder, GateDescriptor, MatrixSource};
use crate::math::{
    anti_exponentiating, anti_power, exponentiating, pauli_rotation, power, PauliAxis,
};

const EXPONENTIATING_NOTE: &str = "The downside of not using complex factors is that it takes two turns \
     to get back to the start point. After the first turn, there's a global phase factor of -1 leftover.";

fn powering(axis: PauliAxis, anti: bool) -> Result<GateDescriptor> {
    let label = axis.label();
    let (symbol, name, long_doc) = if anti {
        (
            format!("{}^-t", label),
            format!("Evolving Anti {} Gate", label),
            format!(
                "Performs a continuous phase-corrected counter rotation around the Bloch sphere's {} axis.",
                label
            ),
        )
    } else {
        (
            format!("{}^t", label),
            format!("Evolving {} Gate", label),
            format!(
                "Performs a continuous phase-corrected rotation around the Bloch sphere's {} axis.",
                label
            ),
        )
    };
    let source = if anti {
        MatrixSource::parametrized(2, move |t| anti_power(axis, t))
    } else {
        MatrixSource::parametrized(2, move |t| power(axis, t))
    };
    GateBuilder::new(symbol, source)
        .name(name)
        .short_doc(format!(
            "Interpolates between no-op and the {} gate over time.",
            label
        ))
        .long_doc(long_doc)
        .drawer(DrawStyle::Cycle)
        .build()
}

/// `X^t`, `X^-t`, `Y^t`, `Y^-t`, `Z^t`, `Z^-t`.
pub fn powering_gates() -> Result<Vec<GateDescriptor>> {
    let mut gates = Vec::new();
    for axis in PauliAxis::ALL {
        gates.push(powering(axis, false)?);
        gates.push(powering(axis, true)?);
    }
    Ok(gates)
}

fn exponential(axis: PauliAxis, anti: bool) -> Result<GateDescriptor> {
    let label = axis.label();
    let symbol = if anti {
        format!("e^-i{}t", label)
    } else {
        format!("e^i{}t", label)
    };
    let source = if anti {
        MatrixSource::parametrized(2, move |t| anti_exponentiating(axis, t))
    } else {
        MatrixSource::parametrized(2, move |t| exponentiating(axis, t))
    };
    GateBuilder::new(symbol, source)
        .name(format!("Evolving Exponential {} Gate", label))
        .short_doc("Interpolates between no-op and a half turn over time, without phase correction.")
        .long_doc(EXPONENTIATING_NOTE)
        .drawer(DrawStyle::Cycle)
        .build()
}

/// `e^iXt`, `e^-iXt`, and the Y and Z equivalents.
pub fn exponentiating_gates() -> Result<Vec<GateDescriptor>> {
    let mut gates = Vec::new();
    for axis in PauliAxis::ALL {
        gates.push(exponential(axis, false)?);
        gates.push(exponential(axis, true)?);
    }
    Ok(gates)
}

/// A fixed rotation around an axis the player is meant to discover.
pub fn mystery_rotation() -> Result<GateDescriptor> {
    GateBuilder::new(
        "?",
        MatrixSource::fixed(pauli_rotation(0.0625, 0.125, 0.1875)),
    )
    .serialized_id("MysteryRotation")
    .name("Mystery Rotation")
    .short_doc("Rotates the qubit around an unknown axis.")
    .long_doc("Find the axis by probing the qubit with displays.")
    .drawer(DrawStyle::Default)
    .build()
}

fn scaled_rotation(axis: PauliAxis, negate: bool) -> Result<GateDescriptor> {
    let label = axis.label();
    let sign = if negate { -1.0 } else { 1.0 };
    let id = if negate {
        format!("{}^(-A/2^n)", label)
    } else {
        format!("{}^(A/2^n)", label)
    };
    let source = MatrixSource::parametrized(2, move |a| {
        let (x, y, z) = axis.weights(sign * a.rem_euclid(1.0) / 2.0);
        pauli_rotation(x, y, z)
    });
    gate(
        &id,
        source,
        &format!("Parametrized {} Gate", label),
        &format!(
            "Rotates around the {} axis by an amount proportional to input A.",
            label
        ),
        "The control value is A/2^n, the input register's value divided by its range.",
        DrawStyle::Power,
    )
}

/// `X^(A/2^n)`, `X^(-A/2^n)`, and the Y and Z equivalents, Z first.
pub fn parametrized_rotations() -> Result<Vec<GateDescriptor>> {
    let mut gates = Vec::new();
    for axis in [PauliAxis::Z, PauliAxis::Y, PauliAxis::X] {
        gates.push(scaled_rotation(axis, false)?);
        gates.push(scaled_rotation(axis, true)?);
    }
    Ok(gates)
}

pub fn all() -> Result<Vec<GateDescriptor>> {
    let mut gates = powering_gates()?;
    gates.extend(exponentiating_gates()?);
    gates.push(mystery_rotation()?);
    gates.extend(parametrized_rotations()?);
    Ok(gates)
}
