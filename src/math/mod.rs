pub mod matrix;
pub mod synth;

// Re-export for easier access
pub use matrix::{approx_eq, identity, is_unitary, unitarity_deviation, GateMatrix, UNITARY_TOLERANCE};
pub use synth::{
    anti_exponentiating, anti_power, closest_unitary, exponentiating, pauli_rotation, power,
    random_matrix, PauliAxis,
};
