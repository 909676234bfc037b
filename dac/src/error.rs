use ark_std::fmt;

use mercurial_signature::error::MercurialSignatureError;

/// Failure modes recognized by this crate. `VerifyChain` itself never
/// returns one of these, a failed verification is its normal `false`
/// return, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DacError {
    /// A secret key, public key, nym, or message vector did not have the
    /// instance's `ell`.
    LengthMismatch { expected: usize, got: usize },
    /// `IssueNext`/`VerifyChain` was handed a chain whose `nyms` and `sigs`
    /// were not the same length, or that was empty.
    MalformedChain,
    /// A nym or secret key was in the wrong one of the two pairing groups
    /// for its position in the chain (the alternating-parity invariant,
    /// enforced here by explicit dispatch rather than index-parity alone).
    ShapeMismatch,
    /// A failure from the underlying signature scheme (currently only ever
    /// a length mismatch; `Sign` is the only fallible operation it exposes).
    Signature(MercurialSignatureError),
}

impl fmt::Display for DacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => write!(
                f,
                "length mismatch: expected a vector of length {}, got {}",
                expected, got
            ),
            Self::MalformedChain => {
                write!(f, "credential chain's nyms and sigs are not in lockstep")
            }
            Self::ShapeMismatch => write!(
                f,
                "a nym or secret key was in the wrong pairing group for its chain position"
            ),
            Self::Signature(e) => write!(f, "signature scheme error: {}", e),
        }
    }
}

impl From<MercurialSignatureError> for DacError {
    fn from(e: MercurialSignatureError) -> Self {
        Self::Signature(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DacError {}
