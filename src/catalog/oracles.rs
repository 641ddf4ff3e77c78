use super::gate;
use crate::error::Result;
use crate::ir::{DrawStyle, GateDescriptor, MatrixSource};
use crate::math::matrix::{c, diagonal};

/// Two-qubit diagonal oracle that flips the phase of the basis states `marked` selects.
fn phase_oracle(marked: impl Fn(usize) -> bool) -> MatrixSource {
    MatrixSource::fixed(diagonal(
        (0..4).map(|k| if marked(k) { c(-1.0, 0.0) } else { c(1.0, 0.0) }),
    ))
}

/// Grover search oracle over four entries; the hidden entry is `|10⟩`.
pub fn database_chip() -> Result<GateDescriptor> {
    gate(
        "DatabaseChip",
        phase_oracle(|k| k == 0b10),
        "Database Chip",
        "Marks one hidden entry of a four-entry database.",
        "Negates the amplitude of the hidden entry. Find it with as few queries as possible.",
        DrawStyle::Default,
    )
}

/// Deutsch-Jozsa oracle for the balanced function `f(x) = x₀`.
pub fn deutsch_jozsa_oracle() -> Result<GateDescriptor> {
    gate(
        "DeutschJozsaOracle",
        phase_oracle(|k| k & 1 == 1),
        "Deutsch-Jozsa Oracle",
        "Applies (-1)^f(x) for a function that is either constant or balanced.",
        "Decide which kind of function is hidden with a single query.",
        DrawStyle::Default,
    )
}

/// Bernstein-Vazirani oracle for the secret string `s = 11`.
pub fn bernstein_vazirani_oracle() -> Result<GateDescriptor> {
    const SECRET: usize = 0b11;
    gate(
        "BernsteinVaziraniOracle",
        phase_oracle(|k| (k & SECRET).count_ones() % 2 == 1),
        "Bernstein-Vazirani Oracle",
        "Applies (-1)^(s·x) for a hidden bit string s.",
        "Recover the hidden string with a single query.",
        DrawStyle::Default,
    )
}

pub fn all() -> Result<Vec<GateDescriptor>> {
    Ok(vec![
        database_chip()?,
        deutsch_jozsa_oracle()?,
        bernstein_vazirani_oracle()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracles_are_diagonal_signs() {
        for oracle in all().unwrap() {
            let m = oracle.fixed_matrix().unwrap();
            assert_eq!(oracle.qubit_span(), 2);
            for i in 0..4 {
                for j in 0..4 {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_eq!(m[(i, j)].norm(), expected);
                }
            }
        }
    }

    #[test]
    fn test_bernstein_vazirani_parity() {
        let m = bernstein_vazirani_oracle().unwrap().fixed_matrix().unwrap().clone();
        let signs: Vec<f64> = (0..4).map(|k| m[(k, k)].re).collect();
        assert_eq!(signs, vec![1.0, -1.0, -1.0, 1.0]);
    }
}
