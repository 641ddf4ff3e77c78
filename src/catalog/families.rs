use crate::ir::{DrawStyle, GateBuilder, GateFamily, MatrixSource};
use crate::math::matrix::{diagonal, permutation, GateMatrix};
use num_complex::Complex64;
use std::f64::consts::{PI, TAU};

// Bit `b` of a basis index is the value of wire `b` of the register.

fn fourier_matrix(width: usize, sign: f64) -> GateMatrix {
    let dim = 1usize << width;
    let norm = 1.0 / (dim as f64).sqrt();
    GateMatrix::from_fn(dim, dim, |row, col| {
        let angle = sign * TAU * ((row * col) % dim) as f64 / dim as f64;
        Complex64::from_polar(norm, angle)
    })
}

pub fn fourier_transform() -> GateFamily {
    GateFamily::new("QFT", |n| {
        GateBuilder::new("QFT", MatrixSource::fixed(fourier_matrix(n, 1.0)))
            .name("Fourier Transform Gate")
            .short_doc("Transforms to/from phase frequency space.")
            .long_doc("Maps each basis state |k⟩ to the uniform superposition with phase gradient e^(2πi·jk/2^n).")
    })
}

pub fn inverse_fourier_transform() -> GateFamily {
    GateFamily::new("QFT†", |n| {
        GateBuilder::new("QFT^†", MatrixSource::fixed(fourier_matrix(n, -1.0)))
            .name("Inverse Fourier Transform Gate")
            .short_doc("Transforms from/to phase frequency space.")
            .long_doc("The adjoint of the Fourier transform gate.")
    })
}

fn reverse(k: usize, width: usize) -> usize {
    (0..width).fold(0, |acc, b| (acc << 1) | ((k >> b) & 1))
}

pub fn reverse_bits() -> GateFamily {
    GateFamily::new("rev", |n| {
        GateBuilder::new("Reverse", MatrixSource::fixed(permutation(1 << n, |k| reverse(k, n))))
            .name("Reverse Order")
            .short_doc("Swaps bits into the opposite order.")
    })
}

pub fn increment() -> GateFamily {
    GateFamily::new("inc", |n| {
        GateBuilder::new("+1", MatrixSource::fixed(permutation(1 << n, |k| k + 1)))
            .name("Increment Gate")
            .short_doc("Adds 1 to the little-endian number represented by a block of qubits.")
    })
}

pub fn decrement() -> GateFamily {
    GateFamily::new("dec", |n| {
        let dim = 1usize << n;
        GateBuilder::new("-1", MatrixSource::fixed(permutation(dim, move |k| k + dim - 1)))
            .name("Decrement Gate")
            .short_doc("Subtracts 1 from the little-endian number represented by a block of qubits.")
    })
}

fn cycle_left(k: usize, width: usize) -> usize {
    let mask = (1usize << width) - 1;
    ((k << 1) | (k >> (width - 1))) & mask
}

fn cycle_right(k: usize, width: usize) -> usize {
    (k >> 1) | ((k & 1) << (width - 1))
}

pub fn cycle_bits_left() -> GateFamily {
    GateFamily::new("<<", |n| {
        GateBuilder::new("<<<", MatrixSource::fixed(permutation(1 << n, |k| cycle_left(k, n))))
            .name("Left Rotate")
            .short_doc("Rotates bits upward, the top bit wrapping to the bottom.")
    })
}

pub fn cycle_bits_right() -> GateFamily {
    GateFamily::new(">>", |n| {
        GateBuilder::new(">>>", MatrixSource::fixed(permutation(1 << n, |k| cycle_right(k, n))))
            .name("Right Rotate")
            .short_doc("Rotates bits downward, the bottom bit wrapping to the top.")
    })
}

/// Where the interleave permutation sends bit `bit` of a `width`-bit register.
///
/// The low half of the register lands on the even positions and the high
/// half on the odd ones.
fn interleave_bit(bit: usize, width: usize) -> usize {
    let half = (width + 1) / 2;
    if bit < half {
        bit * 2
    } else {
        (bit - half) * 2 + 1
    }
}

fn deinterleave_bit(bit: usize, width: usize) -> usize {
    let half = (width + 1) / 2;
    if bit % 2 == 0 {
        bit / 2
    } else {
        half + bit / 2
    }
}

fn permute_bits(k: usize, width: usize, target: fn(usize, usize) -> usize) -> usize {
    (0..width).fold(0, |acc, b| acc | (((k >> b) & 1) << target(b, width)))
}

pub fn interleave_bits() -> GateFamily {
    GateFamily::new("weave", |n| {
        let matrix = permutation(1 << n, |k| permute_bits(k, n, interleave_bit));
        GateBuilder::new("Weave", MatrixSource::fixed(matrix))
            .name("Interleave")
            .short_doc("Re-orders blocks of bits into stripes of bits.")
            .long_doc("The low half of the register moves to the even wires and the high half to the odd wires.")
    })
}

pub fn deinterleave_bits() -> GateFamily {
    GateFamily::new("split", |n| {
        let matrix = permutation(1 << n, |k| permute_bits(k, n, deinterleave_bit));
        GateBuilder::new("Split", MatrixSource::fixed(matrix))
            .name("Deinterleave")
            .short_doc("Re-orders stripes of bits into blocks of bits.")
            .long_doc("The even wires move to the low half of the register and the odd wires to the high half.")
    })
}

fn gradient(width: usize, sign: f64) -> GateMatrix {
    let dim = 1usize << width;
    diagonal((0..dim).map(|k| Complex64::from_polar(1.0, sign * PI * k as f64 / dim as f64)))
}

pub fn phase_gradient() -> GateFamily {
    GateFamily::new("PhaseGradient", |n| {
        GateBuilder::new("Grad^½", MatrixSource::fixed(gradient(n, 1.0)))
            .name("Phase Gradient Gate")
            .short_doc("Phases by an amount proportional to the target value.")
            .long_doc("Multiplies |k⟩ by e^(iπk/2^n).")
            .drawer(DrawStyle::Power)
    })
}

pub fn phase_ungradient() -> GateFamily {
    GateFamily::new("PhaseUngradient", |n| {
        GateBuilder::new("Grad^-½", MatrixSource::fixed(gradient(n, -1.0)))
            .name("Inverse Phase Gradient Gate")
            .short_doc("Counter-phases by an amount proportional to the target value.")
            .long_doc("Multiplies |k⟩ by e^(-iπk/2^n).")
            .drawer(DrawStyle::Power)
    })
}

/// Shift by `⌊t·2^n⌋` positions, `t` taken modulo 1.
fn counting_shift(t: f64, dim: usize) -> usize {
    ((t.rem_euclid(1.0) * dim as f64).floor() as usize).min(dim - 1)
}

pub fn counting() -> GateFamily {
    GateFamily::new("Counting", |n| {
        let dim = 1usize << n;
        let source = MatrixSource::parametrized(dim, move |t| {
            let shift = counting_shift(t, dim);
            permutation(dim, |k| k + shift)
        });
        GateBuilder::new("Count", source)
            .name("Counting Gate")
            .short_doc("Adds an increasing little-endian count into a block of qubits.")
            .drawer(DrawStyle::Cycle)
    })
}

pub fn uncounting() -> GateFamily {
    GateFamily::new("Uncounting", |n| {
        let dim = 1usize << n;
        let source = MatrixSource::parametrized(dim, move |t| {
            let shift = counting_shift(t, dim);
            permutation(dim, |k| k + dim - shift)
        });
        GateBuilder::new("Uncount", source)
            .name("Down Counting Gate")
            .short_doc("Subtracts an increasing little-endian count from a block of qubits.")
            .drawer(DrawStyle::Cycle)
    })
}

pub fn all() -> Vec<GateFamily> {
    vec![
        fourier_transform(),
        inverse_fourier_transform(),
        reverse_bits(),
        increment(),
        decrement(),
        cycle_bits_left(),
        cycle_bits_right(),
        interleave_bits(),
        deinterleave_bits(),
        phase_gradient(),
        phase_ungradient(),
        counting(),
        uncounting(),
    ]
}
