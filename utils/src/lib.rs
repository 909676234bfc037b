//! Pairing backend adapter.
//!
//! Wraps the external pairing library (`ark-ec`/`ark-ff`/`ark-bn254`) behind
//! the handful of operations the mercurial signature and DAC crates actually
//! need: scalar sampling/inversion, and hashing into G1. Group-element
//! arithmetic (scalar multiplication, point addition, the pairing itself) is
//! used directly from `ark-ec` by the crates above this one. There is
//! nothing this adapter could usefully wrap without hiding the very
//! bilinearity those crates reason about.

pub mod curve;
pub mod hashing;
pub mod scalar;

pub use curve::PairingCurve;
pub use hashing::hash_to_g1;
#[cfg(any(test, feature = "testing"))]
pub use hashing::insecure_sample_g2_for_testing;
pub use scalar::{inv_zp, rand_nonzero_zp, rand_zp};
