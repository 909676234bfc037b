//! The credential chain: nym generation, first issuance, delegation, and
//! full-chain verification.
//!
//! A chain link's nym and signature alternate shape by position, the
//! parity invariant of the delegatable credential construction: position
//! `j`'s nym is MS-A-shaped (G2-valued) when `j` is even and MS-B-shaped
//! (G1-valued) when `j` is odd; its *incoming* signature (the one proving
//! the link from position `j - 1`) is an MS-B signature when `j` is even
//! and an MS-A signature when `j` is odd, this is why `sigs[0]`, the
//! root's own signature, is MS-B. [`Nym`] and [`Sig`] carry that
//! alternation as an enum rather than by index-parity alone.

use ark_ec::PairingEngine;
use ark_std::rand::RngCore;
use ark_std::vec::Vec;

use dock_crypto_utils::rand_nonzero_zp;
use mercurial_signature::{dual, primary, MercurialSignatureDual, MercurialSignatureScheme};

use crate::error::DacError;

/// A key pair in MS-B (G1-valued public key): the "even" half of
/// [`Dac::key_gen`]'s output.
pub struct EvenKeyPair<E: PairingEngine> {
    pub public_key: dual::PublicKey<E>,
    pub secret_key: dual::SecretKey<E>,
}

/// A key pair in MS-A (G2-valued public key): the "odd" half of
/// [`Dac::key_gen`]'s output.
pub struct OddKeyPair<E: PairingEngine> {
    pub public_key: primary::PublicKey<E>,
    pub secret_key: primary::SecretKey<E>,
}

/// An MS-B-shaped pseudonym (G1-valued) together with the secret key
/// re-randomized to match it.
pub struct EvenNym<E: PairingEngine> {
    pub nym: dual::PublicKey<E>,
    pub secret_key: dual::SecretKey<E>,
}

/// An MS-A-shaped pseudonym (G2-valued) together with the secret key
/// re-randomized to match it.
pub struct OddNym<E: PairingEngine> {
    pub nym: primary::PublicKey<E>,
    pub secret_key: primary::SecretKey<E>,
}

/// A chain-position nym: MS-A-shaped (G2) or MS-B-shaped (G1).
#[derive(Clone)]
pub enum Nym<E: PairingEngine> {
    A(primary::PublicKey<E>),
    B(dual::PublicKey<E>),
}

impl<E: PairingEngine> Nym<E> {
    pub fn len(&self) -> usize {
        match self {
            Self::A(v) => v.len(),
            Self::B(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_a(&self) -> Option<&primary::PublicKey<E>> {
        match self {
            Self::A(v) => Some(v),
            Self::B(_) => None,
        }
    }

    fn as_b(&self) -> Option<&dual::PublicKey<E>> {
        match self {
            Self::B(v) => Some(v),
            Self::A(_) => None,
        }
    }
}

/// A chain-position signature: the MS-B signature proving `sigs[0]` (the
/// root link) or any even-position link, or the MS-A signature proving an
/// odd-position link.
#[derive(Clone)]
pub enum Sig<E: PairingEngine> {
    A(primary::Signature<E>),
    B(dual::Signature<E>),
}

impl<E: PairingEngine> Sig<E> {
    fn as_a(&self) -> Option<primary::Signature<E>> {
        match self {
            Self::A(s) => Some(*s),
            Self::B(_) => None,
        }
    }

    fn as_b(&self) -> Option<dual::Signature<E>> {
        match self {
            Self::B(s) => Some(*s),
            Self::A(_) => None,
        }
    }
}

/// The secret key a delegator presents to `IssueNext`, tagged by which
/// scheme it belongs to so it can be checked against the position it is
/// meant to extend.
pub enum DelegatorSecretKey<E: PairingEngine> {
    A(primary::SecretKey<E>),
    B(dual::SecretKey<E>),
}

/// `(nyms[0..n], sigs[0..n])`, the credential chain.
pub struct CredentialChain<E: PairingEngine> {
    nyms: Vec<Nym<E>>,
    sigs: Vec<Sig<E>>,
}

impl<E: PairingEngine> CredentialChain<E> {
    /// Number of links currently in the chain.
    pub fn len(&self) -> usize {
        self.nyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nyms.is_empty()
    }

    pub fn nyms(&self) -> &[Nym<E>] {
        &self.nyms
    }

    pub fn sigs(&self) -> &[Sig<E>] {
        &self.sigs
    }
}

/// A DAC instance with a fixed root key pair under MS-B.
pub struct Dac<E: PairingEngine> {
    ell: usize,
    pk0: dual::PublicKey<E>,
    sk0: dual::SecretKey<E>,
}

impl<E: PairingEngine> Dac<E> {
    /// `DAC(ell)`: establishes the instance-wide root key pair.
    pub fn new<R: RngCore>(ell: usize, rng: &mut R) -> Self {
        let (pk0, sk0) = MercurialSignatureDual::key_gen(ell, rng);
        Self { ell, pk0, sk0 }
    }

    pub fn ell(&self) -> usize {
        self.ell
    }

    /// The root's public key, `pk0`. Exposed so a verifier can check a
    /// chain against this DAC instance without needing the whole `Dac`
    /// value (e.g. after deserializing one elsewhere); `VerifyChain` itself
    /// is a method here because it also needs `ell` is implicit via `pk0`'s
    /// length.
    pub fn root_public_key(&self) -> &dual::PublicKey<E> {
        &self.pk0
    }

    /// `KeyGen() -> (even_pair, odd_pair)`.
    pub fn key_gen<R: RngCore>(
        &self,
        rng: &mut R,
    ) -> (EvenKeyPair<E>, OddKeyPair<E>) {
        let (even_pk, even_sk) = MercurialSignatureDual::key_gen(self.ell, rng);
        let (odd_pk, odd_sk) = MercurialSignatureScheme::key_gen(self.ell, rng);
        (
            EvenKeyPair {
                public_key: even_pk,
                secret_key: even_sk,
            },
            OddKeyPair {
                public_key: odd_pk,
                secret_key: odd_sk,
            },
        )
    }

    /// `NymGen(pk_even, sk_even, pk_odd, sk_odd)`.
    pub fn nym_gen<R: RngCore>(
        &self,
        even: &EvenKeyPair<E>,
        odd: &OddKeyPair<E>,
        rng: &mut R,
    ) -> (EvenNym<E>, OddNym<E>) {
        let rho_even: E::Fr = rand_nonzero_zp(rng);
        let nym_even = MercurialSignatureDual::convert_pk(&even.public_key, rho_even);
        let sk_even = MercurialSignatureDual::convert_sk(&even.secret_key, rho_even);

        let rho_odd: E::Fr = rand_nonzero_zp(rng);
        let nym_odd = MercurialSignatureScheme::convert_pk(&odd.public_key, rho_odd);
        let sk_odd = MercurialSignatureScheme::convert_sk(&odd.secret_key, rho_odd);

        (
            EvenNym {
                nym: nym_even,
                secret_key: sk_even,
            },
            OddNym {
                nym: nym_odd,
                secret_key: sk_odd,
            },
        )
    }

    /// `IssueFirst(nym1) -> chain`. `nym1` must be MS-A-shaped (G2-valued),
    /// since the root signs under MS-B, whose messages live in G2.
    pub fn issue_first<R: RngCore>(
        &self,
        nym1: primary::PublicKey<E>,
        rng: &mut R,
    ) -> Result<CredentialChain<E>, DacError> {
        if nym1.len() != self.ell {
            return Err(DacError::LengthMismatch {
                expected: self.ell,
                got: nym1.len(),
            });
        }
        let sig1 = MercurialSignatureDual::sign(&self.sk0, &nym1, rng)?;
        Ok(CredentialChain {
            nyms: vec![Nym::A(nym1)],
            sigs: vec![Sig::B(sig1)],
        })
    }

    /// `IssueNext(chain, new_nym, sk_delegator) -> chain'`. Consumes the
    /// chain and returns the rewritten one; every existing link is
    /// re-randomized in the process, so the prior `CredentialChain` value
    /// must not be retained under an assumption of equality with the one
    /// returned here.
    pub fn issue_next<R: RngCore>(
        &self,
        mut chain: CredentialChain<E>,
        new_nym: Nym<E>,
        sk_delegator: DelegatorSecretKey<E>,
        rng: &mut R,
    ) -> Result<CredentialChain<E>, DacError> {
        if chain.nyms.len() != chain.sigs.len() || chain.nyms.is_empty() {
            return Err(DacError::MalformedChain);
        }
        if new_nym.len() != self.ell {
            return Err(DacError::LengthMismatch {
                expected: self.ell,
                got: new_nym.len(),
            });
        }

        let k = chain.nyms.len();

        // Step 1: re-randomize link 0 against the fixed root under MS-B.
        let mut rho: E::Fr = rand_nonzero_zp(rng);
        {
            let nym0 = chain.nyms[0].as_a().ok_or(DacError::ShapeMismatch)?.clone();
            let sig0 = chain.sigs[0].as_b().ok_or(DacError::ShapeMismatch)?;
            let (new_nym0, new_sig0) =
                MercurialSignatureDual::change_rep(&self.pk0, &nym0, sig0, rho, rng);
            debug_assert!(MercurialSignatureDual::verify(&self.pk0, &new_nym0, &new_sig0));
            chain.nyms[0] = Nym::A(new_nym0);
            chain.sigs[0] = Sig::B(new_sig0);
        }

        // Step 2: walk the rest of the existing chain, re-randomizing each
        // link in turn with the scheme matching its position's parity.
        for i in 0..k - 1 {
            if i % 2 == 0 {
                let pk_i = chain.nyms[i].as_a().ok_or(DacError::ShapeMismatch)?.clone();
                let msg = chain.nyms[i + 1]
                    .as_b()
                    .ok_or(DacError::ShapeMismatch)?
                    .clone();
                let sig = chain.sigs[i + 1].as_a().ok_or(DacError::ShapeMismatch)?;
                let converted = MercurialSignatureScheme::convert_sig(&pk_i, &msg, sig, rho, rng);
                let mu: E::Fr = rand_nonzero_zp(rng);
                let (new_msg, new_sig) =
                    MercurialSignatureScheme::change_rep(&pk_i, &msg, converted, mu, rng);
                debug_assert!(MercurialSignatureScheme::verify(&pk_i, &new_msg, &new_sig));
                chain.nyms[i + 1] = Nym::B(new_msg);
                chain.sigs[i + 1] = Sig::A(new_sig);
                rho = mu;
            } else {
                let pk_i = chain.nyms[i].as_b().ok_or(DacError::ShapeMismatch)?.clone();
                let msg = chain.nyms[i + 1]
                    .as_a()
                    .ok_or(DacError::ShapeMismatch)?
                    .clone();
                let sig = chain.sigs[i + 1].as_b().ok_or(DacError::ShapeMismatch)?;
                let converted = MercurialSignatureDual::convert_sig(&pk_i, &msg, sig, rho, rng);
                let mu: E::Fr = rand_nonzero_zp(rng);
                let (new_msg, new_sig) =
                    MercurialSignatureDual::change_rep(&pk_i, &msg, converted, mu, rng);
                debug_assert!(MercurialSignatureDual::verify(&pk_i, &new_msg, &new_sig));
                chain.nyms[i + 1] = Nym::A(new_msg);
                chain.sigs[i + 1] = Sig::B(new_sig);
                rho = mu;
            }
        }

        // Step 3: append the new link. `rho` is the scalar that just
        // re-randomized nyms[k-1], so sk_delegator is converted by the
        // most recent rho to match.
        chain.nyms.push(new_nym);
        let new_len = chain.nyms.len();
        let last_sig = if new_len % 2 == 0 {
            // MS-A signs: new_nym is B-shaped, sk_delegator is A-shaped.
            let sk = match sk_delegator {
                DelegatorSecretKey::A(sk) => sk,
                DelegatorSecretKey::B(_) => return Err(DacError::ShapeMismatch),
            };
            let sk = MercurialSignatureScheme::convert_sk(&sk, rho);
            let new_nym_b = chain.nyms[new_len - 1]
                .as_b()
                .ok_or(DacError::ShapeMismatch)?
                .clone();
            let sig = MercurialSignatureScheme::sign(&sk, &new_nym_b, rng)?;
            debug_assert!({
                let pk = chain.nyms[new_len - 2].as_a().expect("checked above");
                MercurialSignatureScheme::verify(pk, &new_nym_b, &sig)
            });
            Sig::A(sig)
        } else {
            let sk = match sk_delegator {
                DelegatorSecretKey::B(sk) => sk,
                DelegatorSecretKey::A(_) => return Err(DacError::ShapeMismatch),
            };
            let sk = MercurialSignatureDual::convert_sk(&sk, rho);
            let new_nym_a = chain.nyms[new_len - 1]
                .as_a()
                .ok_or(DacError::ShapeMismatch)?
                .clone();
            let sig = MercurialSignatureDual::sign(&sk, &new_nym_a, rng)?;
            debug_assert!({
                let pk = chain.nyms[new_len - 2].as_b().expect("checked above");
                MercurialSignatureDual::verify(pk, &new_nym_a, &sig)
            });
            Sig::B(sig)
        };
        chain.sigs.push(last_sig);

        Ok(chain)
    }

    /// `VerifyChain(chain) -> bool`. Never errors; a malformed chain or a
    /// chain with a nym/sig in the wrong group for its position simply
    /// fails to verify.
    pub fn verify_chain(&self, chain: &CredentialChain<E>) -> bool {
        if chain.nyms.len() != chain.sigs.len() || chain.nyms.is_empty() {
            return false;
        }

        let nym0 = match &chain.nyms[0] {
            Nym::A(v) => v,
            Nym::B(_) => return false,
        };
        let sig0 = match &chain.sigs[0] {
            Sig::B(s) => s,
            Sig::A(_) => return false,
        };
        if !MercurialSignatureDual::verify(&self.pk0, nym0, sig0) {
            return false;
        }

        for i in 0..chain.nyms.len() - 1 {
            let verifies = if i % 2 == 0 {
                match (&chain.nyms[i], &chain.nyms[i + 1], &chain.sigs[i + 1]) {
                    (Nym::A(pk), Nym::B(msg), Sig::A(sig)) => {
                        MercurialSignatureScheme::verify(pk, msg, sig)
                    }
                    _ => false,
                }
            } else {
                match (&chain.nyms[i], &chain.nyms[i + 1], &chain.sigs[i + 1]) {
                    (Nym::B(pk), Nym::A(msg), Sig::B(sig)) => {
                        MercurialSignatureDual::verify(pk, msg, sig)
                    }
                    _ => false,
                }
            };
            if !verifies {
                return false;
            }
        }
        true
    }
}
