//! The three randomization operations, implemented once and shared by both
//! [`crate::primary`] (MS-A) and [`crate::dual`] (MS-B).
//!
//! `ConvertSK`/`ConvertPK`/`ConvertSig`/`ChangeRep` manipulate scalars and
//! the signature triple's components uniformly regardless of which group the
//! key lives in, so they are written once here, generic over the group
//! type(s) involved, rather than duplicated per scheme. `Sign` and `Verify`
//! are *not* here, their pairing-equation argument order differs
//! non-trivially between the two schemes and each is written out explicitly
//! in its own module.

use ark_ec::ProjectiveCurve;
use ark_ff::{Field, PrimeField};
use ark_std::rand::RngCore;

use dock_crypto_utils::rand_nonzero_zp;

/// `ConvertSK(sk, rho)`: scale every secret scalar by `rho`.
pub fn convert_sk<F: PrimeField>(sk: &[F], rho: F) -> Vec<F> {
    sk.iter().map(|x| *x * rho).collect()
}

/// `ConvertPK(pk, rho)`: scale every public-key component by `rho`.
pub fn convert_pk<G: ProjectiveCurve>(pk: &[G], rho: G::ScalarField) -> Vec<G> {
    pk.iter().map(|p| p.mul(rho.into_repr())).collect()
}

/// `ConvertSig(pk, M, sigma, rho)`. `pk` and `M` are accepted but unused, for
/// interface symmetry with [`change_rep`]; see DESIGN.md for why the broader
/// signature is kept.
///
/// `G` is the group shared by `Z` and `Y`; `H` is the group of `Ŷ` (the
/// group opposite `G`, sharing the same scalar field).
#[allow(clippy::too_many_arguments)]
pub fn convert_sig<G, H, R: RngCore>(
    _pk: &[H],
    _message: &[G],
    signature: (G, G, H),
    rho: G::ScalarField,
    rng: &mut R,
) -> (G, G, H)
where
    G: ProjectiveCurve,
    H: ProjectiveCurve<ScalarField = G::ScalarField>,
{
    let (z, y, y_hat) = signature;
    let psi: G::ScalarField = rand_nonzero_zp(rng);
    let psi_inv = psi.inverse().expect("psi was sampled nonzero");
    (
        z.mul((psi * rho).into_repr()),
        y.mul(psi_inv.into_repr()),
        y_hat.mul(psi_inv.into_repr()),
    )
}

/// `ChangeRep(pk, M, sigma, mu)`: re-randomize both the message and the
/// signature by `mu`, returning the new message alongside the new
/// signature. `pk` is accepted but unused, `Verify` under the *same* `pk`
/// is what makes this operation meaningful, `pk` itself never changes here.
pub fn change_rep<G, H, R: RngCore>(
    _pk: &[H],
    message: &[G],
    signature: (G, G, H),
    mu: G::ScalarField,
    rng: &mut R,
) -> (Vec<G>, (G, G, H))
where
    G: ProjectiveCurve,
    H: ProjectiveCurve<ScalarField = G::ScalarField>,
{
    let (z, y, y_hat) = signature;
    let psi: G::ScalarField = rand_nonzero_zp(rng);
    let psi_inv = psi.inverse().expect("psi was sampled nonzero");
    let new_message: Vec<G> = message.iter().map(|m| m.mul(mu.into_repr())).collect();
    let new_signature = (
        z.mul((psi * mu).into_repr()),
        y.mul(psi_inv.into_repr()),
        y_hat.mul(psi_inv.into_repr()),
    );
    (new_message, new_signature)
}
