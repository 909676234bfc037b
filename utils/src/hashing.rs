//! Hashing into the pairing groups.
//!
//! `hash_to_g1` is the one real hash this adapter exposes: deterministic,
//! collision-resistant (inherited from SHAKE-256), uniform over G1 modulo
//! cofactor clearing. There is deliberately no `hash_to_g2` here, see
//! `insecure_sample_g2_for_testing` below.

use ark_ec::{AffineCurve, PairingEngine};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

const DOMAIN_SEPARATOR: &[u8] = b"mercurial-signature-h2c-g1-v1";

/// Hash an arbitrary byte string into G1 via try-and-increment over a
/// SHAKE-256 XOF: derive a candidate field element, attempt to lift it to an
/// affine point, increment a counter and retry on failure, then clear the
/// cofactor. Mirrors `docknetwork/crypto`'s
/// `dock_crypto_utils::hashing_utils::projective_group_elem_from_try_and_incr`.
pub fn hash_to_g1<E: PairingEngine>(bytes: &[u8]) -> E::G1Projective {
    let mut counter: u64 = 0;
    loop {
        let mut hasher = Shake256::default();
        hasher.update(DOMAIN_SEPARATOR);
        hasher.update(bytes);
        hasher.update(&counter.to_le_bytes());
        let mut reader = hasher.finalize_xof();
        let mut candidate = [0u8; 64];
        reader.read(&mut candidate);

        if let Some(point) = E::G1Affine::from_random_bytes(&candidate) {
            return point.mul_by_cofactor_to_projective();
        }
        counter += 1;
    }
}

/// Stand-in for a hash-to-G2, used only by the dual scheme's test path.
///
/// This is **not** a hash: it samples a uniform random scalar and multiplies
/// the G2 generator by it, so the same input produces a different output
/// every call. It exists solely because the dual scheme's test suite needs
/// *some* way to manufacture G2-valued test messages without a production
/// hash-to-G2 implementation. Gated behind the `testing` feature (enabled
/// transitively through `test_utils`) rather than plain `#[cfg(test)]`, so
/// that it is reachable from other crates' test suites too, while never
/// being part of this crate's default, production feature set.
#[cfg(any(test, feature = "testing"))]
pub fn insecure_sample_g2_for_testing<E: PairingEngine, R: ark_std::rand::RngCore>(
    rng: &mut R,
) -> E::G2Projective {
    use ark_ec::ProjectiveCurve;
    use ark_ff::{PrimeField, UniformRand};

    let scalar = E::Fr::rand(rng);
    E::G2Projective::prime_subgroup_generator().mul(scalar.into_repr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Bn254;

    #[test]
    fn hash_to_g1_is_deterministic() {
        let a = hash_to_g1::<Bn254>(b"hello");
        let b = hash_to_g1::<Bn254>(b"hello");
        assert_eq!(a, b);
    }

    #[test]
    fn hash_to_g1_distinguishes_inputs() {
        let a = hash_to_g1::<Bn254>(b"hello");
        let b = hash_to_g1::<Bn254>(b"goodbye");
        assert_ne!(a, b);
    }
}
