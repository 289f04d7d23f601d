use arrow_fromiter::{BuildOptions, Chunk, Dtype, Value, from_iter};

fn build(values: Vec<Value>) -> arrow_fromiter::PartitionedSequence {
    from_iter(values, BuildOptions::default()).unwrap()
}

#[test]
fn int_and_bool_form_two_variants() {
    let seq = build(vec![Value::Int(1), Value::Bool(true), Value::Int(2)]);
    let u = seq.chunks()[0].as_union().unwrap();
    assert_eq!(u.tags(), &[0, 1, 0]);
    assert_eq!(u.index(), &[0, 0, 1]);
    assert_eq!(u.next_index(), &[2, 1]);
    assert_eq!(u.contents().len(), 2);
    assert_eq!(
        u.contents()[0].as_scalar().unwrap().as_int64(),
        Some(&[1, 2][..])
    );
    assert_eq!(
        u.contents()[1].as_scalar().unwrap().as_bool(),
        Some(&[true][..])
    );
}

#[test]
fn bool_first_then_numbers() {
    let seq = build(vec![
        Value::Bool(false),
        Value::Int(1),
        Value::Real(2.5),
        Value::Bool(true),
    ]);
    let u = seq.chunks()[0].as_union().unwrap();
    assert_eq!(u.tags(), &[0, 1, 1, 0]);
    assert_eq!(u.index(), &[0, 0, 1, 1]);
    let numbers = u.contents()[1].as_scalar().unwrap();
    assert_eq!(numbers.dtype(), Dtype::Float64);
    assert_eq!(numbers.as_float64(), Some(&[1.0, 2.5][..]));
}

#[test]
fn ints_then_bytes() {
    let seq = build(vec![Value::Int(1), Value::Int(2), Value::bytes("x")]);
    let u = seq.chunks()[0].as_union().unwrap();
    assert_eq!(u.tags(), &[0, 0, 1]);
    assert_eq!(u.index(), &[0, 1, 0]);
    assert_eq!(u.contents()[1].as_bytes().unwrap().get(0), Some(&b"x"[..]));
}

#[test]
fn variants_keep_creation_order() {
    let seq = build(vec![
        Value::bytes("a"),
        Value::List(vec![Value::Int(1)]),
        Value::Bool(true),
        Value::Int(3),
        Value::bytes("b"),
    ]);
    let u = seq.chunks()[0].as_union().unwrap();
    let kinds: Vec<_> = u.contents().iter().map(Chunk::kind_name).collect();
    assert_eq!(kinds, vec!["bytes", "list", "bool", "int64"]);
    assert_eq!(u.tags(), &[0, 1, 2, 3, 0]);
    assert_eq!(u.index(), &[0, 0, 0, 0, 1]);
    assert_eq!(seq.get(4), Some(Value::bytes("b")));
    assert_eq!(seq.get(1), Some(Value::List(vec![Value::Int(1)])));
}

#[test]
fn chunk_after_full_union_starts_plain() {
    let opts = BuildOptions::default().with_chunk_size(3);
    let seq = from_iter(
        vec![
            Value::Int(1),
            Value::Bool(true),
            Value::Int(2),
            Value::Int(3),
        ],
        opts,
    )
    .unwrap();
    assert!(seq.chunks()[0].as_union().is_some());
    assert!(seq.chunks()[1].as_scalar().is_some());
}

#[test]
fn every_slot_addresses_one_variant_element() {
    let input = vec![
        Value::Int(1),
        Value::Bool(true),
        Value::List(vec![]),
        Value::Bool(false),
        Value::Real(0.25),
        Value::List(vec![Value::bytes("q")]),
    ];
    let seq = build(input.clone());
    let u = seq.chunks()[0].as_union().unwrap();
    for (tag, pos) in u.tags().iter().zip(u.index()) {
        let variant = &u.contents()[*tag as usize];
        assert!((*pos as usize) < variant.len());
    }
    let expected: Vec<_> = input
        .into_iter()
        .map(|v| match v {
            Value::Int(i) => Value::Real(i as f64),
            other => other,
        })
        .collect();
    assert_eq!(seq.iter().collect::<Vec<_>>(), expected);
}
