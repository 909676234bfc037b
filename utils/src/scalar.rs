//! Scalar-field sampling and inversion, shared by both signature schemes.

use ark_ff::{PrimeField, Zero};
use ark_std::{rand::RngCore, UniformRand};

/// Sample a uniform scalar in Zp. This is `RandomZp()` from the mercurial
/// signature construction.
pub fn rand_zp<F: PrimeField, R: RngCore + ?Sized>(rng: &mut R) -> F {
    F::rand(rng)
}

/// Invert a scalar mod p. Returns `None` for the zero element, which a
/// caller should treat as "resample" rather than propagate.
pub fn inv_zp<F: PrimeField>(x: F) -> Option<F> {
    x.inverse()
}

/// Sample a nonzero scalar, resampling on the negligible chance of drawing
/// zero. Every fresh randomization scalar (`y`, `ψ`, `ρ`, `μ`) is drawn this
/// way so that `inv_zp` never needs to fail downstream.
pub fn rand_nonzero_zp<F: PrimeField, R: RngCore + ?Sized>(rng: &mut R) -> F {
    loop {
        let x = F::rand(rng);
        if !x.is_zero() {
            return x;
        }
    }
}
