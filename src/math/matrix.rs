use nalgebra::DMatrix;
use num_complex::Complex64;

/// Dense complex matrix used for every gate.
pub type GateMatrix = DMatrix<Complex64>;

/// Maximum element-wise deviation of `M·M†` from the identity that still
/// counts as unitary.
pub const UNITARY_TOLERANCE: f64 = 1e-9;

/// Shorthand for a complex entry.
pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Builds a square matrix from row-major entries.
///
/// # Panics
///
/// Panics if `entries.len() != dim * dim`. Only called with literal data.
pub fn square(dim: usize, entries: &[Complex64]) -> GateMatrix {
    DMatrix::from_row_slice(dim, dim, entries)
}

pub fn identity(dim: usize) -> GateMatrix {
    DMatrix::identity(dim, dim)
}

pub fn pauli_x() -> GateMatrix {
    square(2, &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)])
}

pub fn pauli_y() -> GateMatrix {
    square(2, &[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)])
}

pub fn pauli_z() -> GateMatrix {
    square(2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)])
}

pub fn hadamard() -> GateMatrix {
    let s = std::f64::consts::FRAC_1_SQRT_2;
    square(2, &[c(s, 0.0), c(s, 0.0), c(s, 0.0), c(-s, 0.0)])
}

/// Diagonal matrix with the given entries.
pub fn diagonal<I>(entries: I) -> GateMatrix
where
    I: IntoIterator<Item = Complex64>,
{
    let entries: Vec<Complex64> = entries.into_iter().collect();
    DMatrix::from_diagonal(&nalgebra::DVector::from_vec(entries))
}

/// Permutation matrix sending basis state `k` to `image(k)`.
///
/// `image` must be a bijection on `0..dim` for the result to be unitary.
pub fn permutation(dim: usize, image: impl Fn(usize) -> usize) -> GateMatrix {
    let mut m = DMatrix::zeros(dim, dim);
    for k in 0..dim {
        m[(image(k) % dim, k)] = c(1.0, 0.0);
    }
    m
}

/// Conjugate transpose.
pub fn dagger(m: &GateMatrix) -> GateMatrix {
    m.adjoint()
}

/// Largest element-wise magnitude of `M·M† − I`.
///
/// Returns infinity for non-square input.
pub fn unitarity_deviation(m: &GateMatrix) -> f64 {
    if !m.is_square() {
        return f64::INFINITY;
    }
    let product = m * m.adjoint();
    let residual = product - identity(m.nrows());
    residual.iter().map(|z| z.norm()).fold(0.0, f64::max)
}

pub fn is_unitary(m: &GateMatrix) -> bool {
    unitarity_deviation(m) < UNITARY_TOLERANCE
}

/// Frobenius-norm distance between two matrices of the same shape.
pub fn frobenius_distance(a: &GateMatrix, b: &GateMatrix) -> f64 {
    (a - b).norm()
}

/// Element-wise comparison within `tolerance`. Shapes must match.
pub fn approx_eq(a: &GateMatrix, b: &GateMatrix, tolerance: f64) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() <= tolerance)
}

/// True for 2, 4, 8, ... (a matrix acting on at least one qubit).
pub fn is_qubit_dimension(dimension: usize) -> bool {
    dimension >= 2 && dimension.is_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paulis_are_unitary() {
        for m in [pauli_x(), pauli_y(), pauli_z(), hadamard()] {
            assert!(is_unitary(&m));
        }
    }

    #[test]
    fn test_pauli_products() {
        // XY = iZ
        let xy = pauli_x() * pauli_y();
        assert!(approx_eq(&xy, &(pauli_z() * c(0.0, 1.0)), 1e-12));
    }

    #[test]
    fn test_non_unitary_detected() {
        let projector = square(2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]);
        assert!(!is_unitary(&projector));
        assert!((unitarity_deviation(&projector) - 1.0).abs() < 1e-12);

        let wide = DMatrix::<Complex64>::zeros(2, 4);
        assert_eq!(unitarity_deviation(&wide), f64::INFINITY);
    }

    #[test]
    fn test_permutation_cycle() {
        let shift = permutation(4, |k| k + 1);
        assert!(is_unitary(&shift));
        assert_eq!(shift[(1, 0)], c(1.0, 0.0));
        assert_eq!(shift[(0, 3)], c(1.0, 0.0));
    }

    #[test]
    fn test_qubit_dimension() {
        assert!(is_qubit_dimension(2));
        assert!(is_qubit_dimension(64));
        assert!(!is_qubit_dimension(1));
        assert!(!is_qubit_dimension(0));
        assert!(!is_qubit_dimension(6));
    }

    #[test]
    fn test_frobenius_distance() {
        let d = frobenius_distance(&identity(2), &pauli_z());
        assert!((d - 2.0).abs() < 1e-12);
    }
}
