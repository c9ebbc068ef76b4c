// SPDX-License-Identifier: MIT

//! Properties of the public DRBG interface.
use aes_ctr_drbg::{
    ctr::{CtrDrbg, MAX_BYTE_REQUEST},
    Error,
};
use proptest::prelude::*;

fn entropy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 48)
}

fn short_input() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=48)
}

fn padded(input: &[u8]) -> [u8; 48] {
    let mut out = [0u8; 48];
    out[..input.len()].copy_from_slice(input);
    out
}

fn run(entropy: &[u8], personal: &[u8], requests: &[(Vec<u8>, usize)]) -> Vec<u8> {
    let mut drbg: CtrDrbg = CtrDrbg::instantiate(entropy, personal).expect("instantiate");
    let mut out = Vec::new();
    for (additional, len) in requests {
        let mut buf = vec![0u8; *len];
        drbg.generate(&mut buf, Some(additional)).expect("generate");
        out.extend_from_slice(&buf);
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_is_deterministic(
        entropy in entropy(),
        personal in short_input(),
        requests in prop::collection::vec((short_input(), 0..200usize), 1..8)
    ) {
        let first = run(&entropy, &personal, &requests);
        let second = run(&entropy, &personal, &requests);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn generate_writes_exactly_the_request(
        entropy in entropy(),
        len in 0..300usize
    ) {
        let mut drbg: CtrDrbg = CtrDrbg::instantiate(&entropy, &[]).expect("instantiate");
        let mut buf = vec![0xa5u8; len + 32];
        drbg.generate(&mut buf[..len], None).expect("generate");
        prop_assert!(buf[len..].iter().all(|b| *b == 0xa5));
    }

    #[test]
    fn one_bit_flip_changes_first_block(
        entropy in entropy(),
        bit in 0..384usize
    ) {
        let mut flipped = entropy.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);
        let a = run(&entropy, &[], &[(Vec::new(), 16)]);
        let b = run(&flipped, &[], &[(Vec::new(), 16)]);
        prop_assert_ne!(a, b);
    }

    #[test]
    fn distinct_additional_inputs_diverge(
        entropy in entropy(),
        add_1 in prop::collection::vec(any::<u8>(), 1..=48),
        add_2 in prop::collection::vec(any::<u8>(), 1..=48)
    ) {
        prop_assume!(padded(&add_1) != padded(&add_2));
        let a = run(&entropy, &[], &[(add_1, 0), (Vec::new(), 16)]);
        let b = run(&entropy, &[], &[(add_2, 0), (Vec::new(), 16)]);
        prop_assert_ne!(a, b);
    }

    #[test]
    fn oversized_inputs_are_rejected(
        entropy in entropy(),
        extra in 1..64usize
    ) {
        let mut drbg: CtrDrbg = CtrDrbg::instantiate(&entropy, &[]).expect("instantiate");
        let too_long = vec![0u8; 48 + extra];
        let mut buf = [0u8; 16];
        prop_assert_eq!(
            drbg.generate(&mut buf, Some(&too_long)),
            Err(Error::InvalidLength(48 + extra))
        );
        prop_assert_eq!(
            drbg.reseed(&too_long, None),
            Err(Error::InvalidLength(48 + extra))
        );
    }
}

#[test]
fn fill_bytes_spans_many_requests() {
    let entropy = [0x3cu8; 48];
    let mut a: CtrDrbg = CtrDrbg::instantiate(&entropy, &[]).unwrap();
    let mut b: CtrDrbg = CtrDrbg::instantiate(&entropy, &[]).unwrap();

    let len = 3 * MAX_BYTE_REQUEST + 5;
    let mut large = vec![0u8; len];
    a.fill_bytes(&mut large, Some(b"first chunk only")).unwrap();

    let mut expected = Vec::with_capacity(len);
    let mut additional: Option<&[u8]> = Some(b"first chunk only");
    for chunk_len in [MAX_BYTE_REQUEST, MAX_BYTE_REQUEST, MAX_BYTE_REQUEST, 5] {
        let mut buf = vec![0u8; chunk_len];
        b.generate(&mut buf, additional.take()).unwrap();
        expected.extend_from_slice(&buf);
    }
    assert_eq!(large, expected);
}

#[test]
fn independent_instances_on_threads() {
    let handles: Vec<_> = (0u8..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut drbg: CtrDrbg = CtrDrbg::instantiate(&[i; 48], &[]).unwrap();
                let mut buf = [0u8; 64];
                drbg.generate(&mut buf, None).unwrap();
                buf
            })
        })
        .collect();
    let outputs: Vec<[u8; 64]> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for (i, out) in outputs.iter().enumerate() {
        let mut drbg: CtrDrbg = CtrDrbg::instantiate(&[i as u8; 48], &[]).unwrap();
        let mut buf = [0u8; 64];
        drbg.generate(&mut buf, None).unwrap();
        assert_eq!(out, &buf);
    }
}
