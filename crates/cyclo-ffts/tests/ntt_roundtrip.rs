//! Round-trip tests: coeffs --NTT--> evals --INTT--> coeffs

use cyclo_ffts::NttEngine;

#[inline]
#[track_caller]
fn det_vec(n: usize, modulus: u64, seed: u64) -> Vec<u64> {
    // Tiny LCG to avoid bringing in `rand`.
    let (mut a, c, m) = (
        1_664_525u64.wrapping_mul(seed).wrapping_add(1_013_904_223),
        1_013_904_223u64,
        1u64 << 32,
    );
    (0..n)
        .map(|i| {
            a = a.wrapping_mul(1_664_525).wrapping_add(c) % m;
            (a ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)) % modulus
        })
        .collect()
}

#[test]
fn ntt_roundtrip_various_sizes() {
    // 12289 - 1 = 2^12 * 3: supports degrees up to 2^11.
    let modulus = 12289u64;
    for k in 1..=11 {
        let n = 1usize << k;
        let engine = NttEngine::new(modulus, n).unwrap();
        let v = det_vec(n, modulus, 1_337);

        let evals = engine.forward(&v).unwrap();
        let back = engine.inverse(&evals).unwrap();

        assert_eq!(back, v, "round-trip failed (n = 2^{k})");
    }
}

#[test]
fn ntt_roundtrip_small_prime() {
    // 7681 - 1 = 2^9 * 3 * 5: supports degrees up to 2^8.
    let modulus = 7681u64;
    for k in 1..=8 {
        let n = 1usize << k;
        let engine = NttEngine::new(modulus, n).unwrap();
        let v = det_vec(n, modulus, 2_024);

        let back = engine.inverse(&engine.forward(&v).unwrap()).unwrap();
        assert_eq!(back, v, "round-trip failed (q = 7681, n = 2^{k})");
    }
}

#[test]
fn ntt_roundtrip_special_vectors() {
    let modulus = 12289u64;
    for k in 1..=8 {
        let n = 1usize << k;
        let engine = NttEngine::new(modulus, n).unwrap();

        // All zeros.
        let zeros = vec![0u64; n];
        let back = engine.inverse(&engine.forward(&zeros).unwrap()).unwrap();
        assert_eq!(back, zeros, "zeros round-trip failed (n = 2^{k})");

        // Delta (1, 0, 0, ...).
        let mut delta = vec![0u64; n];
        delta[0] = 1;
        let back = engine.inverse(&engine.forward(&delta).unwrap()).unwrap();
        assert_eq!(back, delta, "delta round-trip failed (n = 2^{k})");

        // Arithmetic progression.
        let ap: Vec<u64> = (0..n as u64).map(|i| i % modulus).collect();
        let back = engine.inverse(&engine.forward(&ap).unwrap()).unwrap();
        assert_eq!(back, ap, "AP round-trip failed (n = 2^{k})");
    }
}

#[test]
fn engine_reuse_is_stable() {
    // One engine instance serves many calls; the tables are write-once.
    let engine = NttEngine::new(12289, 64).unwrap();
    let v = det_vec(64, 12289, 7);
    let first = engine.forward(&v).unwrap();
    for _ in 0..10 {
        assert_eq!(engine.forward(&v).unwrap(), first);
    }
    assert_eq!(engine.inverse(&first).unwrap(), v);
}

#[test]
fn inverse_then_forward_also_recovers() {
    let engine = NttEngine::new(7681, 16).unwrap();
    let v = det_vec(16, 7681, 99);
    let coeffs = engine.inverse(&v).unwrap();
    assert_eq!(engine.forward(&coeffs).unwrap(), v);
}
