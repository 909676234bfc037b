//! Seeded-RNG helper and curve type aliases shared by the `mercurial_signature`
//! and `dac` crates' test suites, mirroring `docknetwork/crypto`'s own
//! `test_utils` crate.

use ark_std::rand::{rngs::StdRng, SeedableRng};

pub use dock_crypto_utils::insecure_sample_g2_for_testing;

/// A deterministic RNG seeded from a plain `u64`, so that a failing test
/// case is reproducible from its seed alone.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// The pairing engine every test in this workspace runs against.
pub type TestEngine = ark_bn254::Bn254;

pub type Fr = <TestEngine as ark_ec::PairingEngine>::Fr;
pub type G1 = <TestEngine as ark_ec::PairingEngine>::G1Projective;
pub type G2 = <TestEngine as ark_ec::PairingEngine>::G2Projective;
