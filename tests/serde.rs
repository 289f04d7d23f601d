#![cfg(feature = "serde")]

use arrow_fromiter::{BuildOptions, Complex64, DEFAULT_CHUNK_SIZE, Value, from_iter};

#[test]
fn options_round_trip() {
    let opts = BuildOptions::default().with_chunk_size(16).with_max_depth(4);
    let json = serde_json::to_string(&opts).unwrap();
    let back: BuildOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, opts);
}

#[test]
fn missing_option_fields_take_defaults() {
    let opts: BuildOptions = serde_json::from_str(r#"{"max_depth": 8}"#).unwrap();
    assert_eq!(opts.chunk_size, DEFAULT_CHUNK_SIZE);
    assert!(!opts.reference_sharing);
    assert_eq!(opts.max_depth, Some(8));

    let opts: BuildOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, BuildOptions::default());
}

#[test]
fn deserialized_reference_sharing_still_rejected() {
    let opts: BuildOptions = serde_json::from_str(r#"{"reference_sharing": true}"#).unwrap();
    assert!(opts.validate().is_err());
}

#[test]
fn values_round_trip_and_build_identically() {
    let values = vec![
        Value::Int(1),
        Value::Null,
        Value::Real(2.5),
        Value::Bool(true),
        Value::Complex(Complex64::new(1.0, -1.0)),
        Value::bytes("ab"),
        Value::List(vec![Value::Int(3), Value::Null]),
    ];
    let json = serde_json::to_string(&values).unwrap();
    let back: Vec<Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, values);

    let a = from_iter(values, BuildOptions::default()).unwrap();
    let b = from_iter(back, BuildOptions::default()).unwrap();
    assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
}
