use arrow_fromiter::{BuildOptions, Chunk, Complex64, Dtype, Value, from_iter};

fn build(values: Vec<Value>) -> arrow_fromiter::PartitionedSequence {
    from_iter(values, BuildOptions::default()).unwrap()
}

#[test]
fn homogeneous_ints_fill_one_chunk() {
    let seq = build(vec![Value::Int(3), Value::Int(1), Value::Int(4)]);
    assert_eq!(seq.chunks().len(), 1);
    assert_eq!(seq.offsets(), &[0, 3]);
    let buf = seq.chunks()[0].as_scalar().unwrap();
    assert_eq!(buf.dtype(), Dtype::Int64);
    assert_eq!(buf.as_int64(), Some(&[3, 1, 4][..]));
}

#[test]
fn real_after_ints_widens_buffer() {
    let seq = build(vec![Value::Int(1), Value::Int(2), Value::Real(2.5)]);
    let buf = seq.chunks()[0].as_scalar().unwrap();
    assert_eq!(buf.dtype(), Dtype::Float64);
    assert_eq!(buf.as_float64(), Some(&[1.0, 2.0, 2.5][..]));
}

#[test]
fn int_after_real_keeps_float() {
    let seq = build(vec![Value::Real(0.5), Value::Int(7)]);
    let buf = seq.chunks()[0].as_scalar().unwrap();
    assert_eq!(buf.dtype(), Dtype::Float64);
    assert_eq!(buf.as_float64(), Some(&[0.5, 7.0][..]));
    assert_eq!(seq.get(1), Some(Value::Real(7.0)));
}

#[test]
fn complex_tops_the_ladder() {
    let seq = build(vec![
        Value::Int(1),
        Value::Real(2.5),
        Value::Complex(Complex64::new(0.0, 1.0)),
        Value::Int(-1),
    ]);
    assert_eq!(seq.chunks().len(), 1);
    let buf = seq.chunks()[0].as_scalar().unwrap();
    assert_eq!(buf.dtype(), Dtype::Complex128);
    assert_eq!(
        buf.as_complex128(),
        Some(
            &[
                Complex64::new(1.0, 0.0),
                Complex64::new(2.5, 0.0),
                Complex64::new(0.0, 1.0),
                Complex64::new(-1.0, 0.0),
            ][..]
        )
    );
}

#[test]
fn bools_stay_bools() {
    let seq = build(vec![Value::Bool(true), Value::Bool(false)]);
    let buf = seq.chunks()[0].as_scalar().unwrap();
    assert_eq!(buf.dtype(), Dtype::Bool);
    assert_eq!(buf.as_bool(), Some(&[true, false][..]));
}

#[test]
fn bytes_use_the_leaf() {
    let seq = build(vec![Value::bytes("ab"), Value::bytes(""), Value::bytes("cde")]);
    let Chunk::Bytes(leaf) = &seq.chunks()[0] else {
        panic!("expected byte-string leaf, got {:?}", seq.chunks()[0]);
    };
    assert_eq!(leaf.starts(), &[0, 2, 2]);
    assert_eq!(leaf.stops(), &[2, 2, 5]);
    assert_eq!(leaf.content(), b"abcde");
    assert_eq!(seq.get(2), Some(Value::bytes("cde")));
}

#[test]
fn empty_input_has_no_chunks() {
    let seq = build(vec![]);
    assert!(seq.is_empty());
    assert!(seq.chunks().is_empty());
    assert_eq!(seq.offsets(), &[0]);
    assert_eq!(seq.get(0), None);
}

#[test]
fn read_back_matches_input() {
    let input = vec![Value::Int(5), Value::Int(6), Value::Int(7)];
    let seq = build(input.clone());
    assert_eq!(seq.iter().collect::<Vec<_>>(), input);
}
