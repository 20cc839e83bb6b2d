pub(crate) use super::*;

#[test]
fn test_constants() {
    assert_eq!(Complex::ZERO, Complex::new(0.0, 0.0));
    assert_eq!(Complex::ONE, Complex::new(1.0, 0.0));
}

#[test]
fn test_conj() {
    let z = Complex::new(1.0, 2.0);
    assert_eq!(z.conj(), Complex::new(1.0, -2.0));
    assert_eq!(z.conj().conj(), z);
    // Real numbers are fixed points of conjugation.
    let r = Complex::new(5.0, 0.0);
    assert_eq!(r.conj(), r);
}

#[test]
fn test_add_sub() {
    let a = Complex::new(1.0, 2.0);
    let b = Complex::new(3.0, -1.0);
    assert_eq!(a + b, Complex::new(4.0, 1.0));
    assert_eq!(a - b, Complex::new(-2.0, 3.0));
    assert_eq!(a - a, Complex::ZERO);
}

#[test]
fn test_mul() {
    // (1+2i)(3-i) = 3 - i + 6i - 2i² = 5 + 5i
    let a = Complex::new(1.0, 2.0);
    let b = Complex::new(3.0, -1.0);
    assert_eq!(a * b, Complex::new(5.0, 5.0));
    assert_eq!(a * Complex::ONE, a);
    assert_eq!(a * Complex::ZERO, Complex::ZERO);
}

#[test]
fn test_neg() {
    let z = Complex::new(1.5, -2.5);
    assert_eq!(-z, Complex::new(-1.5, 2.5));
    assert_eq!(z + -z, Complex::ZERO);
}

#[test]
fn test_display() {
    assert_eq!(Complex::new(1.0, 2.0).to_string(), "1+2i");
    assert_eq!(Complex::new(1.0, -2.0).to_string(), "1-2i");
}

#[test]
fn test_serde_roundtrip() {
    let z = Complex::new(2.0, -3.0);
    let json = serde_json::to_string(&z).expect("serializes");
    let back: Complex = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, z);
}
