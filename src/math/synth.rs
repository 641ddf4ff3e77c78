use super::matrix::{c, identity, pauli_x, pauli_y, pauli_z, GateMatrix};
use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::{PI, TAU};

/// One of the three Bloch sphere axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauliAxis {
    X,
    Y,
    Z,
}

impl PauliAxis {
    pub const ALL: [PauliAxis; 3] = [PauliAxis::X, PauliAxis::Y, PauliAxis::Z];

    /// Axis weights `(x, y, z)` for a rotation of `fraction` turns around this axis.
    pub fn weights(self, fraction: f64) -> (f64, f64, f64) {
        match self {
            PauliAxis::X => (fraction, 0.0, 0.0),
            PauliAxis::Y => (0.0, fraction, 0.0),
            PauliAxis::Z => (0.0, 0.0, fraction),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PauliAxis::X => "X",
            PauliAxis::Y => "Y",
            PauliAxis::Z => "Z",
        }
    }
}

/// Phase-corrected rotation by the axis vector `(x, y, z)`.
///
/// Amounts are measured in turns: `pauli_rotation(0.5, 0.0, 0.0)` is a
/// half turn around X, the Pauli X gate itself.
///
/// The rotation amount `f` is the length of the vector and the axis is its
/// direction. The result is `e^{iπf}·(cos(πf)·I − i·sin(πf)·(n·σ))`, which
/// keeps the +1 eigenspace of `n·σ` fixed and phases the other eigenspace
/// by `e^{2πif}`. The axis is oriented so that `11x + 13y + 17z ≥ 0`; a
/// negative weight therefore produces the exact inverse of the positive one.
///
/// The zero vector yields the identity.
pub fn pauli_rotation(x: f64, y: f64, z: f64) -> GateMatrix {
    let length = (x * x + y * y + z * z).sqrt();
    if length < f64::EPSILON {
        return identity(2);
    }

    let (mut nx, mut ny, mut nz) = (x / length, y / length, z / length);
    let mut fraction = length;
    if 11.0 * x + 13.0 * y + 17.0 * z < 0.0 {
        nx = -nx;
        ny = -ny;
        nz = -nz;
        fraction = -fraction;
    }

    let sigma = pauli_x() * c(nx, 0.0) + pauli_y() * c(ny, 0.0) + pauli_z() * c(nz, 0.0);
    let phase = Complex64::from_polar(1.0, PI * fraction);
    let (sin, cos) = (PI * fraction).sin_cos();

    identity(2) * (phase * cos) - sigma * (phase * c(0.0, sin))
}

/// Powering gate `axis^t`: a one-parameter subgroup with period 1.
///
/// `power(a, t1) · power(a, t2) == power(a, t1 + t2)` with no residual phase.
pub fn power(axis: PauliAxis, t: f64) -> GateMatrix {
    let (x, y, z) = axis.weights(t.rem_euclid(1.0));
    pauli_rotation(x, y, z)
}

/// Inverse of [`power`] at the same control value: `power` evaluated at `1 − t`.
pub fn anti_power(axis: PauliAxis, t: f64) -> GateMatrix {
    power(axis, (1.0 - t).rem_euclid(1.0))
}

/// Exponentiating gate `e^{+i·axis·t}` without phase correction.
///
/// The angle is `2π·(t % 1)`. Two half-way applications leave a global
/// phase of −1 behind (`exponentiating(a, 0.25)²  == −I`); it takes two
/// full turns of the underlying rotation to get back to the start.
pub fn exponentiating(axis: PauliAxis, t: f64) -> GateMatrix {
    exponential_at_angle(axis, (t % 1.0) * TAU)
}

/// Counter-rotating twin of [`exponentiating`], evaluated at `-t % 1`.
pub fn anti_exponentiating(axis: PauliAxis, t: f64) -> GateMatrix {
    exponential_at_angle(axis, (-t % 1.0) * TAU)
}

fn exponential_at_angle(axis: PauliAxis, angle: f64) -> GateMatrix {
    let (sin, cos) = angle.sin_cos();
    let entries = match axis {
        PauliAxis::X => [c(cos, 0.0), c(0.0, sin), c(0.0, sin), c(cos, 0.0)],
        PauliAxis::Y => [c(cos, 0.0), c(-sin, 0.0), c(sin, 0.0), c(cos, 0.0)],
        PauliAxis::Z => [c(cos, sin), c(0.0, 0.0), c(0.0, 0.0), c(cos, -sin)],
    };
    super::matrix::square(2, &entries)
}

/// Nearest unitary matrix to `m` under the Frobenius norm.
///
/// Computed through the polar decomposition: with `m = U·Σ·V†`, every
/// singular value is replaced by 1, giving `U·V†`. Rank-deficient input is
/// fine; the singular vectors are still a unitary basis.
pub fn closest_unitary(m: &GateMatrix) -> GateMatrix {
    let svd = m.clone().svd(true, true);
    // Both factors were requested above, so they are always present.
    let (Some(u), Some(v_t)) = (svd.u, svd.v_t) else {
        return identity(m.nrows());
    };
    u * v_t
}

/// Random `dim`×`dim` matrix with real and imaginary parts uniform in `[−0.5, 0.5)`.
pub fn random_matrix<R: Rng + ?Sized>(rng: &mut R, dim: usize) -> GateMatrix {
    GateMatrix::from_fn(dim, dim, |_, _| {
        c(rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::{approx_eq, frobenius_distance, hadamard, is_unitary, square};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_zero_axis_is_identity() {
        assert!(approx_eq(&pauli_rotation(0.0, 0.0, 0.0), &identity(2), EPS));
    }

    #[test]
    fn test_half_turns_are_paulis() {
        assert!(approx_eq(&pauli_rotation(0.5, 0.0, 0.0), &pauli_x(), EPS));
        assert!(approx_eq(&pauli_rotation(0.0, 0.5, 0.0), &pauli_y(), EPS));
        assert!(approx_eq(&pauli_rotation(0.0, 0.0, 0.5), &pauli_z(), EPS));
    }

    #[test]
    fn test_diagonal_half_turn_is_hadamard() {
        let s = std::f64::consts::FRAC_1_SQRT_2 / 2.0;
        assert!(approx_eq(&pauli_rotation(s, 0.0, s), &hadamard(), EPS));
    }

    #[test]
    fn test_sqrt_x() {
        let expected = square(
            2,
            &[c(0.5, 0.5), c(0.5, -0.5), c(0.5, -0.5), c(0.5, 0.5)],
        );
        assert!(approx_eq(&pauli_rotation(0.25, 0.0, 0.0), &expected, EPS));
    }

    #[test]
    fn test_t_gate() {
        let expected = square(
            2,
            &[
                c(1.0, 0.0),
                c(0.0, 0.0),
                c(0.0, 0.0),
                Complex64::from_polar(1.0, PI / 4.0),
            ],
        );
        assert!(approx_eq(&pauli_rotation(0.0, 0.0, 0.125), &expected, EPS));
    }

    #[test]
    fn test_negative_weight_is_inverse() {
        let forward = pauli_rotation(0.0, 0.25, 0.0);
        let backward = pauli_rotation(0.0, -0.25, 0.0);
        assert!(approx_eq(&(forward * backward), &identity(2), EPS));
    }

    #[test]
    fn test_power_period_one() {
        for axis in PauliAxis::ALL {
            assert!(approx_eq(&power(axis, 0.3), &power(axis, 1.3), EPS));
            assert!(approx_eq(&power(axis, -0.7), &power(axis, 0.3), EPS));
            assert!(approx_eq(&power(axis, 0.0), &identity(2), EPS));
        }
    }

    #[test]
    fn test_power_composes_without_phase() {
        for axis in PauliAxis::ALL {
            let product = power(axis, 0.7) * power(axis, 0.6);
            assert!(approx_eq(&product, &power(axis, 0.3), EPS));
        }
    }

    #[test]
    fn test_exponentiating_leaves_minus_one() {
        for axis in PauliAxis::ALL {
            let quarter = exponentiating(axis, 0.25);
            let twice = &quarter * &quarter;
            assert!(approx_eq(&twice, &(identity(2) * c(-1.0, 0.0)), EPS));
            assert!(!approx_eq(&twice, &identity(2), EPS));
        }
    }

    #[test]
    fn test_anti_exponentiating_inverts() {
        for axis in PauliAxis::ALL {
            let product = exponentiating(axis, 0.37) * anti_exponentiating(axis, 0.37);
            assert!(approx_eq(&product, &identity(2), EPS));
        }
    }

    #[test]
    fn test_closest_unitary_of_unitary_is_itself() {
        let h = hadamard();
        assert!(approx_eq(&closest_unitary(&h), &h, 1e-9));
    }

    #[test]
    fn test_closest_unitary_rank_deficient() {
        let rank_one = square(2, &[c(1.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(1.0, 0.0)]);
        assert!(is_unitary(&closest_unitary(&rank_one)));

        let zero = GateMatrix::zeros(2, 2);
        assert!(is_unitary(&closest_unitary(&zero)));
    }

    #[test]
    fn test_closest_unitary_beats_references() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let m = random_matrix(&mut rng, 2);
        let u = closest_unitary(&m);
        assert!(is_unitary(&u));

        let best = frobenius_distance(&u, &m);
        for candidate in [identity(2), pauli_x(), pauli_y(), pauli_z(), hadamard()] {
            assert!(best < frobenius_distance(&candidate, &m));
        }
    }

    #[test]
    fn test_random_matrix_range() {
        let mut rng = StdRng::seed_from_u64(17);
        let m = random_matrix(&mut rng, 4);
        assert_eq!(m.shape(), (4, 4));
        assert!(m.iter().all(|z| z.re.abs() <= 0.5 && z.im.abs() <= 0.5));
    }
}
