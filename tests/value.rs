use wasm_f64::{BARE_NAN, CANONICAL_NAN, F64, SIGN_BIT};

#[test]
fn bits_round_trip_exactly() {
    for bits in [0, SIGN_BIT, 1, CANONICAL_NAN, BARE_NAN | 1, u64::MAX] {
        assert_eq!(F64::from_bits(bits).to_bits(), bits);
    }
}

#[test]
fn float_conversion_is_reinterpretation() {
    let one = F64::from_float(1.0);
    assert_eq!(one.to_bits(), 0x3FF0_0000_0000_0000);
    assert_eq!(one.to_float(), 1.0);

    // A signaling NaN keeps its payload through the native view.
    let snan = F64::from_bits(0x7FF0_0000_0000_0001);
    assert_eq!(F64::from_float(snan.to_float()).to_bits(), 0x7FF0_0000_0000_0001);

    let via_traits: f64 = F64::from(2.5f64).into();
    assert_eq!(via_traits, 2.5);
    let raw: u64 = F64::from(0x1234u64).into();
    assert_eq!(raw, 0x1234);
}

#[test]
fn byte_conversions() {
    let value = F64::from_float(1.0);
    assert_eq!(value.to_be_bytes(), hex_literal::hex!("3ff0000000000000"));
    assert_eq!(value.to_le_bytes(), hex_literal::hex!("000000000000f03f"));
    assert_eq!(
        F64::from_le_bytes(hex_literal::hex!("000000000000f03f")).to_bits(),
        value.to_bits()
    );
    assert_eq!(
        F64::try_from_be_slice(hex_literal::hex!("7ff8000000000123"))
            .unwrap()
            .to_bits(),
        0x7FF8_0000_0000_0123
    );
    assert!(F64::try_from_be_slice([0u8; 4]).is_err());
}

#[test]
fn classification() {
    assert!(F64::NAN.is_nan());
    assert!(F64::NAN.is_canonical_nan());
    assert!(F64::NAN.neg().is_canonical_nan());
    assert!(!F64::from_bits(BARE_NAN | 1).is_canonical_nan());
    assert!(!F64::INFINITY.is_nan());
    assert!(F64::INFINITY.is_infinite());
    assert!(F64::NEG_INFINITY.is_infinite());
    assert!(!F64::INFINITY.is_finite());
    assert!(F64::NEG_ZERO.is_zero());
    assert!(F64::NEG_ZERO.is_sign_negative());
    assert!(F64::ONE.is_finite());
    assert_eq!(F64::from_bits(BARE_NAN | 0x42).nan_payload(), Some(0x42));
    assert_eq!(F64::from_bits(SIGN_BIT | BARE_NAN | 0x42).nan_payload(), Some(0x42));
    assert_eq!(F64::INFINITY.nan_payload(), None);
    assert_eq!(F64::default().to_bits(), 0);
}

#[test]
fn bitwise_ops_never_touch_nan_payloads() {
    let nan = F64::from_bits(BARE_NAN | 0x5);
    assert_eq!(nan.neg().to_bits(), SIGN_BIT | BARE_NAN | 0x5);
    assert_eq!(nan.neg().abs().to_bits(), BARE_NAN | 0x5);
    assert_eq!((-nan).to_bits(), SIGN_BIT | BARE_NAN | 0x5);
    assert_eq!(nan.copysign(F64::NEG_ZERO).to_bits(), SIGN_BIT | BARE_NAN | 0x5);
}

#[test]
fn copysign_takes_magnitude_and_sign() {
    let x = F64::from_float(3.0);
    let y = F64::from_float(-0.5);
    assert_eq!(x.copysign(y).to_float(), -3.0);
    assert_eq!(y.copysign(x).to_float(), 0.5);
}

#[test]
fn comparisons_follow_ieee() {
    let one = F64::ONE;
    let two = F64::from_float(2.0);
    assert!(one.lt(two));
    assert!(one.le(two));
    assert!(two.gt(one));
    assert!(two.ge(one));
    assert!(one.ne(two));
    assert!(!one.eq(two));
    assert!(F64::ZERO.eq(F64::NEG_ZERO));

    let nan = F64::from_bits(BARE_NAN | 1);
    assert!(!nan.eq(nan));
    assert!(nan.ne(nan));
    assert!(!nan.lt(one));
    assert!(!nan.gt(one));
    assert!(!nan.le(one));
    assert!(!nan.ge(one));
    assert!(one.ne(nan));
}

#[test]
fn debug_shows_bit_pattern() {
    assert_eq!(format!("{:?}", F64::ONE), "F64(0x3ff0000000000000)");
    assert_eq!(format!("{:?}", F64::ZERO), "F64(0x0000000000000000)");
}
