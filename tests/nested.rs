use arrow_fromiter::{BuildError, BuildOptions, MASKED, Value, from_iter};

fn build(values: Vec<Value>) -> arrow_fromiter::PartitionedSequence {
    from_iter(values, BuildOptions::default()).unwrap()
}

fn ints(v: &[i64]) -> Value {
    Value::List(v.iter().copied().map(Value::Int).collect())
}

#[test]
fn two_rows_share_one_content() {
    let seq = build(vec![ints(&[1, 2]), ints(&[3])]);
    let list = seq.chunks()[0].as_list().unwrap();
    assert_eq!(list.starts(), &[0, 2]);
    assert_eq!(list.stops(), &[2, 3]);
    let content = list.content();
    assert_eq!(content.offsets(), &[0, 3]);
    assert_eq!(
        content.chunks()[0].as_scalar().unwrap().as_int64(),
        Some(&[1, 2, 3][..])
    );
}

#[test]
fn empty_rows_are_zero_width() {
    let seq = build(vec![ints(&[]), ints(&[7]), ints(&[])]);
    let list = seq.chunks()[0].as_list().unwrap();
    assert_eq!(list.starts(), &[0, 0, 1]);
    assert_eq!(list.stops(), &[0, 1, 1]);
    assert_eq!(seq.get(0), Some(ints(&[])));
    assert_eq!(seq.get(1), Some(ints(&[7])));
}

#[test]
fn nulls_inside_rows_wrap_the_inner_chunk() {
    let seq = build(vec![
        Value::List(vec![Value::Int(1), Value::Null]),
        ints(&[2]),
    ]);
    let list = seq.chunks()[0].as_list().unwrap();
    assert_eq!(list.stops(), &[2, 3]);
    let inner = list.content().chunks()[0].as_nullable().unwrap();
    assert_eq!(inner.index(), &[0, MASKED, 1]);
}

#[test]
fn rows_of_rows_recurse() {
    let input = vec![
        Value::List(vec![ints(&[1]), ints(&[2, 3])]),
        Value::List(vec![]),
        Value::List(vec![ints(&[])]),
    ];
    let seq = build(input.clone());
    let outer = seq.chunks()[0].as_list().unwrap();
    assert_eq!(outer.starts(), &[0, 2, 2]);
    assert_eq!(outer.stops(), &[2, 2, 3]);
    let inner = outer.content().chunks()[0].as_list().unwrap();
    assert_eq!(inner.starts(), &[0, 1, 3]);
    assert_eq!(inner.stops(), &[1, 3, 3]);
    assert_eq!(seq.iter().collect::<Vec<_>>(), input);
}

#[test]
fn inner_content_rolls_chunks() {
    let opts = BuildOptions::default().with_chunk_size(2);
    let seq = from_iter(vec![ints(&[1, 2, 3, 4, 5])], opts).unwrap();
    let list = seq.chunks()[0].as_list().unwrap();
    assert_eq!(list.stops(), &[5]);
    assert_eq!(list.content().offsets(), &[0, 2, 4, 5]);
    assert_eq!(seq.get(0), Some(ints(&[1, 2, 3, 4, 5])));
}

#[test]
fn heterogeneous_elements_unionize_inside_rows() {
    let seq = build(vec![Value::List(vec![
        Value::Int(1),
        Value::bytes("b"),
        Value::Int(2),
    ])]);
    let list = seq.chunks()[0].as_list().unwrap();
    let u = list.content().chunks()[0].as_union().unwrap();
    assert_eq!(u.tags(), &[0, 1, 0]);
}

#[test]
fn list_and_scalar_form_a_union() {
    let seq = build(vec![ints(&[1]), Value::Int(2)]);
    let u = seq.chunks()[0].as_union().unwrap();
    assert_eq!(u.tags(), &[0, 1]);
    assert!(u.contents()[0].as_list().is_some());
}

#[test]
fn deep_nesting_without_a_limit() {
    let mut v = Value::Int(42);
    for _ in 0..64 {
        v = Value::List(vec![v]);
    }
    let seq = build(vec![v.clone()]);
    assert_eq!(seq.get(0), Some(v));
}

#[test]
fn depth_limit_is_enforced() {
    let opts = BuildOptions::default().with_max_depth(2);
    let ok = Value::List(vec![ints(&[1])]);
    assert!(from_iter(vec![ok.clone()], opts.clone()).is_ok());

    let too_deep = Value::List(vec![ok]);
    let err = from_iter(vec![too_deep], opts).unwrap_err();
    match err {
        BuildError::ResourceExhausted { depth, limit } => {
            assert_eq!(depth, 3);
            assert_eq!(limit, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
