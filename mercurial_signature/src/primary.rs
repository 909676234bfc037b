//! MS-A, the primary mercurial signature scheme of Crites and Lysyanskaya's
//! construction.
//!
//! Public keys and `Ŷ` live in G2; messages, `Z`, and `Y` live in G1.

use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::{Field, One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::RngCore;
use ark_std::vec::Vec;
use ark_std::UniformRand;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use dock_crypto_utils::{hash_to_g1, rand_nonzero_zp, rand_zp};

use crate::convert::{change_rep, convert_pk, convert_sig, convert_sk};
use crate::error::MercurialSignatureError;

/// `sk = (x_1, ..., x_ell)`.
pub type SecretKey<E> = Vec<<E as PairingEngine>::Fr>;
/// `pk_i = x_i . P_hat`, one component per secret scalar, in G2.
pub type PublicKey<E> = Vec<<E as PairingEngine>::G2Projective>;
/// A length-`ell` message vector in G1.
pub type Message<E> = Vec<<E as PairingEngine>::G1Projective>;

/// `sigma = (Z, Y, Y_hat)` with `Z, Y` in G1 and `Y_hat` in G2.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Signature<E: PairingEngine> {
    pub z: E::G1Projective,
    pub y: E::G1Projective,
    pub y_hat: E::G2Projective,
}

// Written by hand rather than `#[derive(Copy)]`: the derive macro would add
// an `E: Copy` bound on the pairing engine marker type itself, which is both
// unnecessary (only the field types need to be `Copy`, and `ProjectiveCurve`
// requires exactly that) and not always satisfied by a given `E`.
impl<E: PairingEngine> Copy for Signature<E> {}

impl<E: PairingEngine> Signature<E> {
    fn into_triple(self) -> (E::G1Projective, E::G1Projective, E::G2Projective) {
        (self.z, self.y, self.y_hat)
    }

    fn from_triple(triple: (E::G1Projective, E::G1Projective, E::G2Projective)) -> Self {
        Self {
            z: triple.0,
            y: triple.1,
            y_hat: triple.2,
        }
    }
}

/// Zero-sized marker type carrying the associated operations of MS-A. There
/// is no per-instance state (the scheme is parametrized only by `ell`, which
/// each operation takes as the length of its own arguments).
pub struct MercurialSignatureScheme<E: PairingEngine>(core::marker::PhantomData<E>);

impl<E: PairingEngine> MercurialSignatureScheme<E> {
    /// `RandomZp()`, exposed here for interface parity; the implementation
    /// lives in `dock_crypto_utils` and is shared with MS-B.
    pub fn random_zp<R: RngCore>(rng: &mut R) -> E::Fr {
        rand_zp(rng)
    }

    /// `KeyGen(ell)`.
    pub fn key_gen<R: RngCore>(ell: usize, rng: &mut R) -> (PublicKey<E>, SecretKey<E>) {
        let p_hat = E::G2Projective::prime_subgroup_generator();
        let sk: SecretKey<E> = (0..ell).map(|_| E::Fr::rand(rng)).collect();
        #[cfg(feature = "parallel")]
        let pk = sk.par_iter().map(|x| p_hat.mul(x.into_repr())).collect();
        #[cfg(not(feature = "parallel"))]
        let pk = sk.iter().map(|x| p_hat.mul(x.into_repr())).collect();
        (pk, sk)
    }

    /// `Sign(sk, M)`. Fails with [`MercurialSignatureError::LengthMismatch`]
    /// if `|sk| != |M|`.
    pub fn sign<R: RngCore>(
        sk: &SecretKey<E>,
        message: &Message<E>,
        rng: &mut R,
    ) -> Result<Signature<E>, MercurialSignatureError> {
        if sk.len() != message.len() {
            return Err(MercurialSignatureError::LengthMismatch {
                expected: sk.len(),
                got: message.len(),
            });
        }
        let y: E::Fr = rand_nonzero_zp(rng);
        let y_inv = y.inverse().expect("y sampled nonzero");
        let s: E::G1Projective = sk
            .iter()
            .zip(message.iter())
            .map(|(xi, mi)| mi.mul(xi.into_repr()))
            .fold(E::G1Projective::zero(), |acc, term| acc + term);
        Ok(Signature {
            z: s.mul(y.into_repr()),
            y: E::G1Projective::prime_subgroup_generator().mul(y_inv.into_repr()),
            y_hat: E::G2Projective::prime_subgroup_generator().mul(y_inv.into_repr()),
        })
    }

    /// `Verify(pk, M, sigma)`. Accepts iff both pairing equations of the
    /// construction hold; returns `false` (never errors) on a length
    /// mismatch or a genuinely invalid signature.
    pub fn verify(pk: &PublicKey<E>, message: &Message<E>, sigma: &Signature<E>) -> bool {
        if pk.len() != message.len() {
            return false;
        }
        let p = E::G1Projective::prime_subgroup_generator();
        let p_hat = E::G2Projective::prime_subgroup_generator();

        let lhs_1 = pk
            .iter()
            .zip(message.iter())
            .fold(E::Fqk::one(), |acc, (pki, mi)| {
                acc * E::pairing(mi.into_affine(), pki.into_affine())
            });
        let rhs_1 = E::pairing(sigma.z.into_affine(), sigma.y_hat.into_affine());
        if lhs_1 != rhs_1 {
            return false;
        }

        let lhs_2 = E::pairing(sigma.y.into_affine(), p_hat.into_affine());
        let rhs_2 = E::pairing(p.into_affine(), sigma.y_hat.into_affine());
        lhs_2 == rhs_2
    }

    /// `ConvertSK(sk, rho)`.
    pub fn convert_sk(sk: &SecretKey<E>, rho: E::Fr) -> SecretKey<E> {
        convert_sk(sk, rho)
    }

    /// `ConvertPK(pk, rho)`.
    pub fn convert_pk(pk: &PublicKey<E>, rho: E::Fr) -> PublicKey<E> {
        convert_pk(pk, rho)
    }

    /// `ConvertSig(pk, M, sigma, rho)`. `pk` and `M` are accepted, unused,
    /// for interface symmetry with `change_rep`.
    pub fn convert_sig<R: RngCore>(
        pk: &PublicKey<E>,
        message: &Message<E>,
        sigma: Signature<E>,
        rho: E::Fr,
        rng: &mut R,
    ) -> Signature<E> {
        Signature::from_triple(convert_sig(pk, message, sigma.into_triple(), rho, rng))
    }

    /// `ChangeRep(pk, M, sigma, mu)`.
    pub fn change_rep<R: RngCore>(
        pk: &PublicKey<E>,
        message: &Message<E>,
        sigma: Signature<E>,
        mu: E::Fr,
        rng: &mut R,
    ) -> (Message<E>, Signature<E>) {
        let (new_message, new_sigma) = change_rep(pk, message, sigma.into_triple(), mu, rng);
        (new_message, Signature::from_triple(new_sigma))
    }

    /// `HashMessage(bytes)`: deterministic, collision-resistant hash into
    /// G1. MS-A is the scheme that gets to expose this, see [`crate::dual`]
    /// for why MS-B does not.
    pub fn hash_message(bytes: &[u8]) -> E::G1Projective {
        hash_to_g1::<E>(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Bn254;
    use test_utils::seeded_rng;

    type MSS = MercurialSignatureScheme<Bn254>;

    fn messages(ell: usize) -> Message<Bn254> {
        (0..ell)
            .map(|i| MSS::hash_message(format!("message-{i}").as_bytes()))
            .collect()
    }

    #[test]
    fn signature_correctness() {
        let mut rng = seeded_rng(0);
        for ell in 1..=5 {
            let (pk, sk) = MSS::key_gen(ell, &mut rng);
            let m = messages(ell);
            let sigma = MSS::sign(&sk, &m, &mut rng).unwrap();
            assert!(MSS::verify(&pk, &m, &sigma));
        }
    }

    #[test]
    fn sign_rejects_length_mismatch() {
        let mut rng = seeded_rng(1);
        let (_, sk) = MSS::key_gen(3, &mut rng);
        let m = messages(2);
        assert_eq!(
            MSS::sign(&sk, &m, &mut rng),
            Err(MercurialSignatureError::LengthMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn unforgeability_smoke() {
        let mut rng = seeded_rng(2);
        let (pk, sk) = MSS::key_gen(3, &mut rng);
        let mut m = messages(3);
        let sigma = MSS::sign(&sk, &m, &mut rng).unwrap();
        m[1] = MSS::hash_message(b"a different message entirely");
        assert!(!MSS::verify(&pk, &m, &sigma));
    }

    #[test]
    fn key_conversion_compatibility() {
        let mut rng = seeded_rng(3);
        let (pk, sk) = MSS::key_gen(4, &mut rng);
        let m = messages(4);
        let sigma = MSS::sign(&sk, &m, &mut rng).unwrap();
        let rho = MSS::random_zp(&mut rng);
        let pk1 = MSS::convert_pk(&pk, rho);
        let sigma1 = MSS::convert_sig(&pk, &m, sigma, rho, &mut rng);
        assert!(MSS::verify(&pk1, &m, &sigma1));
    }

    #[test]
    fn representation_change_compatibility_and_forgery() {
        let mut rng = seeded_rng(4);
        let (pk, sk) = MSS::key_gen(5, &mut rng);
        let m = messages(5);
        let sigma = MSS::sign(&sk, &m, &mut rng).unwrap();
        let mu = MSS::random_zp(&mut rng);
        let (mut m1, sigma1) = MSS::change_rep(&pk, &m, sigma, mu, &mut rng);
        assert!(MSS::verify(&pk, &m1, &sigma1));

        m1[4] = MSS::hash_message(b"forged tail element");
        assert!(!MSS::verify(&pk, &m1, &sigma1));
    }

    #[test]
    fn group_order_sanity() {
        // (r+1).P = P and (r+1).P_hat = P_hat, using the actual integer
        // r+1 (not reduced mod r) as the scalar multiplier.
        use ark_ff::{BigInteger, FpParameters, PrimeField};
        let mut r_plus_one = <<Bn254 as PairingEngine>::Fr as PrimeField>::Params::MODULUS;
        r_plus_one.add_nocarry(&1u64.into());

        let p = <Bn254 as PairingEngine>::G1Projective::prime_subgroup_generator();
        let p_hat = <Bn254 as PairingEngine>::G2Projective::prime_subgroup_generator();
        assert_eq!(p.mul(r_plus_one), p);
        assert_eq!(p_hat.mul(r_plus_one), p_hat);
    }

    #[test]
    fn hash_message_is_deterministic_and_collision_resistant_smoke() {
        assert_eq!(MSS::hash_message(b"foo"), MSS::hash_message(b"foo"));
        assert_eq!(MSS::hash_message(b"bar"), MSS::hash_message(b"bar"));
        assert_ne!(MSS::hash_message(b"foo"), MSS::hash_message(b"bar"));
    }
}
