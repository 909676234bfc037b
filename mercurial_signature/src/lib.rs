//! Mercurial signatures over a Type-III bilinear pairing.
//!
//! [`primary`] is MS-A (messages in G1, public keys in G2); [`dual`] is
//! MS-B, its structural twin with the groups swapped. Both share the
//! scalar-level randomization operations in [`convert`]. See the `dac`
//! crate for the delegatable credential protocol built on top of the two.

pub mod convert;
pub mod dual;
pub mod error;
pub mod primary;

pub use dual::MercurialSignatureDual;
pub use error::MercurialSignatureError;
pub use primary::MercurialSignatureScheme;
