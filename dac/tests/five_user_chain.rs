//! The five-user delegation scenario, run for each `ell` in {2, 3, 4},
//! plus a tamper-detection smoke test.

use ark_bn254::Bn254;

use dac::{CredentialChain, Dac, DelegatorSecretKey, Nym};
use test_utils::seeded_rng;

fn run_five_user_chain(ell: usize, seed: u64) -> (Dac<Bn254>, CredentialChain<Bn254>) {
    let mut rng = seeded_rng(seed);
    let dac = Dac::<Bn254>::new(ell, &mut rng);

    // User 1: generates keys and nyms, becomes the first link.
    let (even1, odd1) = dac.key_gen(&mut rng);
    let (_nym_e1, nym_o1) = dac.nym_gen(&even1, &odd1, &mut rng);
    let chain = dac
        .issue_first(nym_o1.nym.clone(), &mut rng)
        .expect("issue_first should succeed");
    assert!(dac.verify_chain(&chain), "user 1 checks out");
    assert_eq!(chain.len(), 1);

    // User 2: appended via user 1's odd secret key.
    let (even2, odd2) = dac.key_gen(&mut rng);
    let (nym_e2, _nym_o2) = dac.nym_gen(&even2, &odd2, &mut rng);
    let chain = dac
        .issue_next(
            chain,
            Nym::B(nym_e2.nym.clone()),
            DelegatorSecretKey::A(nym_o1.secret_key.clone()),
            &mut rng,
        )
        .expect("user 2 is a-ok");
    assert!(dac.verify_chain(&chain));
    assert_eq!(chain.len(), 2);

    // User 3: appended via user 2's even secret key.
    let (even3, odd3) = dac.key_gen(&mut rng);
    let (_nym_e3, nym_o3) = dac.nym_gen(&even3, &odd3, &mut rng);
    let chain = dac
        .issue_next(
            chain,
            Nym::A(nym_o3.nym.clone()),
            DelegatorSecretKey::B(nym_e2.secret_key.clone()),
            &mut rng,
        )
        .expect("go for user 3");
    assert!(dac.verify_chain(&chain));
    assert_eq!(chain.len(), 3);

    // User 4: appended via user 3's odd secret key.
    let (even4, odd4) = dac.key_gen(&mut rng);
    let (nym_e4, _nym_o4) = dac.nym_gen(&even4, &odd4, &mut rng);
    let chain = dac
        .issue_next(
            chain,
            Nym::B(nym_e4.nym.clone()),
            DelegatorSecretKey::A(nym_o3.secret_key.clone()),
            &mut rng,
        )
        .expect("go for user 4");
    assert!(dac.verify_chain(&chain));
    assert_eq!(chain.len(), 4);

    // User 5: appended via user 4's even secret key.
    let (even5, odd5) = dac.key_gen(&mut rng);
    let (_nym_e5, nym_o5) = dac.nym_gen(&even5, &odd5, &mut rng);
    let chain = dac
        .issue_next(
            chain,
            Nym::A(nym_o5.nym.clone()),
            DelegatorSecretKey::B(nym_e4.secret_key.clone()),
            &mut rng,
        )
        .expect("go for user 5");
    assert!(dac.verify_chain(&chain));
    assert_eq!(chain.len(), 5);

    (dac, chain)
}

#[test]
fn five_user_chain_verifies_for_ell_2_3_4() {
    for (ell, seed) in [(2usize, 100u64), (3, 101), (4, 102)] {
        let (_dac, chain) = run_five_user_chain(ell, seed);
        assert_eq!(chain.len(), chain.nyms().len());
        assert_eq!(chain.len(), chain.sigs().len());
    }
}

#[test]
fn issue_first_alone_verifies() {
    let mut rng = seeded_rng(200);
    let dac = Dac::<Bn254>::new(3, &mut rng);
    let (even1, odd1) = dac.key_gen(&mut rng);
    let (_nym_e1, nym_o1) = dac.nym_gen(&even1, &odd1, &mut rng);
    let chain = dac.issue_first(nym_o1.nym, &mut rng).unwrap();
    assert!(dac.verify_chain(&chain));
}

#[test]
fn chain_rooted_at_a_different_dac_instance_does_not_verify() {
    // Root public keys differ between instances, so a chain built entirely
    // under one DAC's root must be rejected by another's `verify_chain`,
    // even though both chains have the same shape and length.
    let (dac_a, _chain_a) = run_five_user_chain(3, 300);
    let (dac_b, chain_b) = run_five_user_chain(3, 301);
    assert!(dac_b.verify_chain(&chain_b));
    assert!(!dac_a.verify_chain(&chain_b));
}
