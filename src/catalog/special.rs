use super::gate;
use crate::error::Result;
use crate::ir::{DrawStyle, GateDescriptor, MatrixSource};
use crate::math::identity;
use crate::math::matrix::permutation;

pub fn control() -> Result<GateDescriptor> {
    gate(
        "•",
        MatrixSource::fixed(identity(2)),
        "Control",
        "Modifies linked operations to only happen when the control qubit is ON.",
        "The control 'gate' is a modifier of other operations. \
         It conditions them to only occur in the parts of the superposition where the control qubit is ON. \
         It applies to all operations in the same column.",
        DrawStyle::Control,
    )
}

pub fn anti_control() -> Result<GateDescriptor> {
    gate(
        "◦",
        MatrixSource::fixed(identity(2)),
        "Anti-Control",
        "Modifies linked operations to only happen when the control qubit is OFF.",
        "The anti-control 'gate' is a modifier of other operations. \
         It conditions them to only occur in the parts of the superposition where the control qubit is OFF \
         (the opposite of the usual control gate). \
         It applies to all operations in the same column.",
        DrawStyle::AntiControl,
    )
}

pub fn measurement() -> Result<GateDescriptor> {
    gate(
        "Measure",
        MatrixSource::fixed(identity(2)),
        "Measurement Gate",
        "Measures whether a qubit is ON or OFF, without conditioning on the result.",
        "Collapses the qubit into a classical bit. \
         Later operations on the wire are classically controlled.",
        DrawStyle::Default,
    )
}

pub fn swap_half() -> Result<GateDescriptor> {
    // Basis index is 2·q1 + q0; swapping the qubits exchanges |01⟩ and |10⟩.
    let swap = permutation(4, |k| ((k & 1) << 1) | (k >> 1));
    gate(
        "Swap",
        MatrixSource::fixed(swap),
        "Swap Gate [Half]",
        "Swaps the values of two qubits.",
        "Place two swap gate halves in the same column to form a swap gate.",
        DrawStyle::Swap,
    )
}

pub fn spacer() -> Result<GateDescriptor> {
    gate(
        "…",
        MatrixSource::fixed(identity(2)),
        "Spacer",
        "A gate with no effect.",
        "Occupies a slot without doing anything.",
        DrawStyle::Spacer,
    )
}

/// Controls, measurement, swap and spacer.
///
/// These carry identity matrices (or a plain swap); the execution engine
/// recognises them by id and gives them their special behavior.
pub fn all() -> Result<Vec<GateDescriptor>> {
    Ok(vec![
        control()?,
        anti_control()?,
        measurement()?,
        swap_half()?,
        spacer()?,
    ])
}
