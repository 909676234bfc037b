//! Delegatable anonymous credentials built on the alternating pair of
//! mercurial signature schemes in `mercurial_signature`, following Crites
//! and Lysyanskaya's delegatable anonymous credential construction.

pub mod chain;
pub mod error;

pub use chain::{
    CredentialChain, Dac, DelegatorSecretKey, EvenKeyPair, EvenNym, Nym, OddKeyPair, OddNym, Sig,
};
pub use error::DacError;
