//! Known-answer tests pinning the transform conventions.
//!
//! The NTT vectors exercise the textbook negacyclic parameters q = 7681,
//! n = 4 (psi = 1925); the FFT vector is the classic half-ones window at
//! degree 8. Any change to twiddle indexing, twist order, or kernel sign
//! shows up here first.

use cyclo_ffts::{Complex64, FftEngine, NttEngine};

#[test]
fn ntt_forward_known_vector() {
    let engine = NttEngine::new(7681, 4).unwrap();
    let evals = engine.forward(&[1, 2, 3, 4]).unwrap();
    assert_eq!(evals, vec![1467, 2807, 3471, 7621]);
}

#[test]
fn ntt_inverse_of_known_vector() {
    let engine = NttEngine::new(7681, 4).unwrap();
    let coeffs = engine.inverse(&[1467, 2807, 3471, 7621]).unwrap();
    assert_eq!(coeffs, vec![1, 2, 3, 4]);
}

#[test]
fn negacyclic_convolution_known_vector() {
    // (1 + 2x + 3x^2 + 4x^3) * (5 + 6x + 7x^2 + 8x^3) in Z_7681[x]/(x^4 + 1)
    // = -56 - 36x + 2x^2 + 60x^3.
    let engine = NttEngine::new(7681, 4).unwrap();
    let lhs = engine.forward(&[1, 2, 3, 4]).unwrap();
    let rhs = engine.forward(&[5, 6, 7, 8]).unwrap();
    let product = engine.pointwise(&lhs, &rhs).unwrap();
    let coeffs = engine.inverse(&product).unwrap();
    assert_eq!(coeffs, vec![7625, 7645, 2, 60]);
}

#[test]
fn fft_forward_known_vector() {
    let engine = FftEngine::new(8).unwrap();
    let input: Vec<Complex64> = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]
        .iter()
        .map(|&re| Complex64::new(re, 0.0))
        .collect();
    let spectrum = engine.forward(&input).unwrap();

    let expected = [
        Complex64::new(4.0, 0.0),
        Complex64::new(1.0, -2.41421),
        Complex64::new(0.0, 0.0),
        Complex64::new(1.0, -0.41421),
        Complex64::new(0.0, 0.0),
        Complex64::new(1.0, 0.41421),
        Complex64::new(0.0, 0.0),
        Complex64::new(1.0, 2.41421),
    ];
    for (k, (got, want)) in spectrum.iter().zip(&expected).enumerate() {
        assert!(
            (got - want).norm() < 1e-5,
            "bin {k}: got {got}, want {want}"
        );
    }
}
