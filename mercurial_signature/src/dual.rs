//! MS-B, the dual mercurial signature scheme from Crites and Lysyanskaya's
//! construction.
//!
//! Structurally identical to [`crate::primary`] with G1 and G2 swapped
//! everywhere: public keys and `Ŷ` live in G1; messages, `Z`, and `Y` live
//! in G2. The randomization operations are shared verbatim via
//! [`crate::convert`]. Only `Sign`/`Verify`'s pairing argument order
//! differs, and that difference is not a symbolic substitution, so it is
//! written out explicitly here rather than derived from [`crate::primary`]
//! by a macro.

use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::{Field, One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::RngCore;
use ark_std::vec::Vec;
use ark_std::UniformRand;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use dock_crypto_utils::{rand_nonzero_zp, rand_zp};

use crate::convert::{change_rep, convert_pk, convert_sig, convert_sk};
use crate::error::MercurialSignatureError;

/// `sk = (x_1, ..., x_ell)`.
pub type SecretKey<E> = Vec<<E as PairingEngine>::Fr>;
/// `pk_i = x_i . P`, one component per secret scalar, in G1.
pub type PublicKey<E> = Vec<<E as PairingEngine>::G1Projective>;
/// A length-`ell` message vector in G2.
pub type Message<E> = Vec<<E as PairingEngine>::G2Projective>;

/// `sigma = (Z, Y, Y_hat)` with `Z, Y` in G2 and `Y_hat` in G1.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Signature<E: PairingEngine> {
    pub z: E::G2Projective,
    pub y: E::G2Projective,
    pub y_hat: E::G1Projective,
}

// See the identical comment in `primary::Signature` for why this is written
// by hand instead of derived.
impl<E: PairingEngine> Copy for Signature<E> {}

impl<E: PairingEngine> Signature<E> {
    fn into_triple(self) -> (E::G2Projective, E::G2Projective, E::G1Projective) {
        (self.z, self.y, self.y_hat)
    }

    fn from_triple(triple: (E::G2Projective, E::G2Projective, E::G1Projective)) -> Self {
        Self {
            z: triple.0,
            y: triple.1,
            y_hat: triple.2,
        }
    }
}

/// Zero-sized marker type carrying the associated operations of MS-B.
pub struct MercurialSignatureDual<E: PairingEngine>(core::marker::PhantomData<E>);

impl<E: PairingEngine> MercurialSignatureDual<E> {
    /// `RandomZp()`; MS-A and MS-B share the same underlying sampler, the
    /// two schemes share `RandomZp`, `ChangeRep`, and `ConvertSig`.
    pub fn random_zp<R: RngCore>(rng: &mut R) -> E::Fr {
        rand_zp(rng)
    }

    /// `KeyGen(ell)`.
    pub fn key_gen<R: RngCore>(ell: usize, rng: &mut R) -> (PublicKey<E>, SecretKey<E>) {
        let p = E::G1Projective::prime_subgroup_generator();
        let sk: SecretKey<E> = (0..ell).map(|_| E::Fr::rand(rng)).collect();
        #[cfg(feature = "parallel")]
        let pk = sk.par_iter().map(|x| p.mul(x.into_repr())).collect();
        #[cfg(not(feature = "parallel"))]
        let pk = sk.iter().map(|x| p.mul(x.into_repr())).collect();
        (pk, sk)
    }

    /// `Sign(sk, M)`.
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
        let s: E::G2Projective = sk
            .iter()
            .zip(message.iter())
            .map(|(xi, mi)| mi.mul(xi.into_repr()))
            .fold(E::G2Projective::zero(), |acc, term| acc + term);
        Ok(Signature {
            z: s.mul(y.into_repr()),
            y: E::G2Projective::prime_subgroup_generator().mul(y_inv.into_repr()),
            y_hat: E::G1Projective::prime_subgroup_generator().mul(y_inv.into_repr()),
        })
    }

    /// `Verify(pk, M, sigma)`: accept iff
    /// `prod e(M_i, pk_i) == e(Z, Y_hat)` and `e(Y, P) == e(P_hat, Y_hat)`.
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
                acc * E::pairing(pki.into_affine(), mi.into_affine())
            });
        let rhs_1 = E::pairing(sigma.y_hat.into_affine(), sigma.z.into_affine());
        if lhs_1 != rhs_1 {
            return false;
        }

        let lhs_2 = E::pairing(p.into_affine(), sigma.y.into_affine());
        let rhs_2 = E::pairing(sigma.y_hat.into_affine(), p_hat.into_affine());
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

    /// `ConvertSig(pk, M, sigma, rho)`.
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

    // Deliberately no `hash_message` here. The only "hash"-to-G2 available
    // samples a random scalar times the G2 generator and is not a hash at
    // all, a different output every call. Exposing it as `HashMessage` on
    // the public API would be a silent correctness trap for callers who
    // assume hash semantics (determinism, collision resistance). It lives
    // behind `dock_crypto_utils`'s `testing` feature instead, for use only
    // from this workspace's own test suites.
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Bn254;
    use dock_crypto_utils::insecure_sample_g2_for_testing;
    use test_utils::seeded_rng;

    type MSD = MercurialSignatureDual<Bn254>;

    fn messages(ell: usize, rng: &mut impl RngCore) -> Message<Bn254> {
        (0..ell)
            .map(|_| insecure_sample_g2_for_testing::<Bn254, _>(rng))
            .collect()
    }

    #[test]
    fn signature_correctness() {
        let mut rng = seeded_rng(10);
        for ell in 1..=5 {
            let (pk, sk) = MSD::key_gen(ell, &mut rng);
            let m = messages(ell, &mut rng);
            let sigma = MSD::sign(&sk, &m, &mut rng).unwrap();
            assert!(MSD::verify(&pk, &m, &sigma));
        }
    }

    #[test]
    fn sign_rejects_length_mismatch() {
        let mut rng = seeded_rng(11);
        let (_, sk) = MSD::key_gen(3, &mut rng);
        let m = messages(2, &mut rng);
        assert_eq!(
            MSD::sign(&sk, &m, &mut rng),
            Err(MercurialSignatureError::LengthMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn unforgeability_smoke() {
        let mut rng = seeded_rng(12);
        let (pk, sk) = MSD::key_gen(3, &mut rng);
        let mut m = messages(3, &mut rng);
        let sigma = MSD::sign(&sk, &m, &mut rng).unwrap();
        m[2] = insecure_sample_g2_for_testing::<Bn254, _>(&mut rng);
        assert!(!MSD::verify(&pk, &m, &sigma));
    }

    #[test]
    fn key_conversion_compatibility() {
        let mut rng = seeded_rng(13);
        let (pk, sk) = MSD::key_gen(4, &mut rng);
        let m = messages(4, &mut rng);
        let sigma = MSD::sign(&sk, &m, &mut rng).unwrap();
        let rho = MSD::random_zp(&mut rng);
        let pk1 = MSD::convert_pk(&pk, rho);
        let sigma1 = MSD::convert_sig(&pk, &m, sigma, rho, &mut rng);
        assert!(MSD::verify(&pk1, &m, &sigma1));
    }

    #[test]
    fn representation_change_compatibility_and_forgery() {
        let mut rng = seeded_rng(14);
        let (pk, sk) = MSD::key_gen(5, &mut rng);
        let m = messages(5, &mut rng);
        let sigma = MSD::sign(&sk, &m, &mut rng).unwrap();
        let mu = MSD::random_zp(&mut rng);
        let (mut m1, sigma1) = MSD::change_rep(&pk, &m, sigma, mu, &mut rng);
        assert!(MSD::verify(&pk, &m1, &sigma1));

        m1[0] = insecure_sample_g2_for_testing::<Bn254, _>(&mut rng);
        assert!(!MSD::verify(&pk, &m1, &sigma1));
    }

    #[test]
    fn group_order_sanity() {
        use ark_ff::{BigInteger, FpParameters, PrimeField};
        let mut r_plus_one = <<Bn254 as PairingEngine>::Fr as PrimeField>::Params::MODULUS;
        r_plus_one.add_nocarry(&1u64.into());

        let p = <Bn254 as PairingEngine>::G1Projective::prime_subgroup_generator();
        let p_hat = <Bn254 as PairingEngine>::G2Projective::prime_subgroup_generator();
        assert_eq!(p.mul(r_plus_one), p);
        assert_eq!(p_hat.mul(r_plus_one), p_hat);
    }
}
