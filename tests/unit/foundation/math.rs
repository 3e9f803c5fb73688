use super::*;

#[test]
fn fnv_matches_reference_vectors() {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(b"");
    assert_eq!(h.finish(), Fnv1a64::OFFSET_BASIS);

    let mut h = Fnv1a64::new_default();
    h.write_bytes(b"a");
    assert_eq!(h.finish(), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn fnv_seed_changes_output() {
    let mut a = Fnv1a64::new(1);
    let mut b = Fnv1a64::new(2);
    a.write_u64(42);
    b.write_u64(42);
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn fmt_num_trims_and_rounds() {
    assert_eq!(fmt_num(110.0), "110");
    assert_eq!(fmt_num(-12.5), "-12.5");
    assert_eq!(fmt_num(0.333333), "0.33");
    assert_eq!(fmt_num(1.005e-9), "0");
    assert_eq!(fmt_num(-0.001), "0");
    assert_eq!(fmt_num(f64::NAN), "0");
    assert_eq!(fmt_num(f64::INFINITY), "0");
}
