use super::gate;
use crate::error::Result;
use crate::ir::{DrawStyle, GateBuilder, GateDescriptor, MatrixSource};
use crate::math::matrix::c;
use crate::math::{closest_unitary, identity, random_matrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn ne_gate() -> Result<GateDescriptor> {
    GateBuilder::new("-I", MatrixSource::fixed(identity(2) * c(-1.0, 0.0)))
        .serialized_id("NeGate")
        .name("Ne-Gate")
        .short_doc("Negates all amplitudes.")
        .long_doc("A global phase of -1. Only observable when controlled.")
        .build()
}

/// The closest unitary to a random matrix drawn from `rng`.
pub fn fuzz<R: Rng + ?Sized>(rng: &mut R) -> Result<GateDescriptor> {
    gate(
        "Fuzz",
        MatrixSource::fixed(closest_unitary(&random_matrix(rng, 2))),
        "Fuzz Gate",
        "Differs every time you grab a new one.",
        "",
        DrawStyle::MatrixSymbol,
    )
}

/// A fuzz gate drawn from `seed`, or from entropy when `seed` is `None`.
pub fn fuzz_from_seed(seed: Option<u64>) -> Result<GateDescriptor> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    fuzz(&mut rng)
}

pub fn all(fuzz_seed: Option<u64>) -> Result<Vec<GateDescriptor>> {
    Ok(vec![ne_gate()?, fuzz_from_seed(fuzz_seed)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_unitary;

    #[test]
    fn test_fuzz_is_seeded() {
        let a = fuzz_from_seed(Some(3)).unwrap();
        let b = fuzz_from_seed(Some(3)).unwrap();
        let other = fuzz_from_seed(Some(4)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, other);
        assert!(is_unitary(a.fixed_matrix().unwrap()));
    }
}
