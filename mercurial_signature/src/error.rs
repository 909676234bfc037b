use ark_std::fmt;

/// Failure modes recognized by this crate. `Verify` itself never returns an
/// error, a failed verification is the `false` case of its `bool` return,
/// not one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MercurialSignatureError {
    /// A secret key, public key, or message vector did not have the length
    /// the operation expected.
    LengthMismatch { expected: usize, got: usize },
}

impl fmt::Display for MercurialSignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => write!(
                f,
                "length mismatch: expected a vector of length {}, got {}",
                expected, got
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MercurialSignatureError {}
