//! Curve pinning.
//!
//! The construction fixes the curve to BN254, a Type-III pairing: `PairingCurve::G1`
//! and `PairingCurve::G2` are distinct prime-order groups with no efficient
//! homomorphism between them, and `PairingCurve::pairing` is the bilinear
//! map `e`. Everything above this module is generic over `PairingEngine` so
//! that swapping the curve later (e.g. to a curve with a real hash-to-G2)
//! is a one-line change here.
pub type PairingCurve = ark_bn254::Bn254;
