use crate::{
    line::{BoundValue, Endpoint, NumberLine, Segment},
    predicate::CompareOp,
    value::Value,
};

fn int(v: i64) -> Value {
    Value::Int(v)
}

fn defined(v: i64) -> BoundValue<Value> {
    BoundValue::Defined(int(v))
}

type Bounds = (BoundValue<Value>, bool, BoundValue<Value>, bool);

fn bounds_of(line: &NumberLine<Value>) -> Vec<Bounds> {
    line.segments()
        .map(|segment| {
            (
                segment.low().value().clone(),
                segment.low().is_inclusive(),
                segment.high().value().clone(),
                segment.high().is_inclusive(),
            )
        })
        .collect()
}

#[test]
fn ge_intersected_with_lt_is_half_open() {
    let lower = NumberLine::for_comparator(CompareOp::Gte, int(18));
    let upper = NumberLine::for_comparator(CompareOp::Lt, int(30));

    let both = NumberLine::intersection(&[lower, upper]);

    assert_eq!(bounds_of(&both), vec![(defined(18), true, defined(30), false)]);
}

#[test]
fn bounded_below_comparators_exclude_null() {
    let lte = NumberLine::for_comparator(CompareOp::Lte, int(5));

    assert!(lte.contains(&int(5)));
    assert!(lte.contains(&int(-100)));
    assert!(!lte.contains(&Value::Null));
}

#[test]
fn ne_is_two_segments_without_null() {
    let ne = NumberLine::for_comparator(CompareOp::Ne, int(7));

    assert_eq!(
        bounds_of(&ne),
        vec![
            (BoundValue::Defined(Value::Null), false, defined(7), false),
            (defined(7), false, BoundValue::PosInf, true),
        ]
    );
    assert!(!ne.contains(&Value::Null));
    assert!(!ne.contains(&int(7)));
    assert!(ne.contains(&int(8)));
}

#[test]
fn not_between_is_two_outer_segments() {
    let between = NumberLine::from_segment(Segment::between(int(10), int(20)));
    let outside = between.complement();

    assert_eq!(
        bounds_of(&outside),
        vec![
            (BoundValue::NegInf, true, defined(10), false),
            (defined(20), false, BoundValue::PosInf, true),
        ]
    );
}

#[test]
fn between_orders_endpoints_by_value() {
    let forward = NumberLine::from_segment(Segment::between(int(10), int(20)));
    let reversed = NumberLine::from_segment(Segment::between(int(20), int(10)));

    assert_eq!(forward, reversed);
}

#[test]
fn null_test_segments() {
    let is_null = NumberLine::from_segment(Segment::null_test(true));
    assert!(is_null.contains(&Value::Null));
    assert!(!is_null.contains(&int(0)));

    let not_null = NumberLine::from_segment(Segment::null_test(false));
    assert!(!not_null.contains(&Value::Null));
    assert!(not_null.contains(&int(0)));
    assert!(not_null.contains(&Value::Text("x".into())));
}

#[test]
fn complement_of_null_test_keeps_non_null_values() {
    let not_null = NumberLine::from_segment(Segment::null_test(true)).complement();

    assert!(!not_null.contains(&Value::Null));
    assert!(not_null.contains(&int(1)));

    // And back again.
    let is_null = not_null.complement();
    assert!(is_null.contains(&Value::Null));
    assert!(!is_null.contains(&int(1)));
}

#[test]
fn complement_of_empty_is_unbounded() {
    let everything = NumberLine::<Value>::empty().complement();

    assert_eq!(everything, NumberLine::unbounded());
    assert_eq!(everything.complement(), NumberLine::empty());
}

#[test]
fn union_merges_touching_inclusive_segments() {
    let a = NumberLine::from_segment(Segment::between(int(1), int(2)));
    let b = NumberLine::from_segment(Segment::between(int(2), int(3)));

    let merged = NumberLine::union(&[a, b]);

    assert_eq!(bounds_of(&merged), vec![(defined(1), true, defined(3), true)]);
}

#[test]
fn union_keeps_exclusive_adjacency_separate() {
    let below = NumberLine::for_comparator(CompareOp::Lt, int(2));
    let above = NumberLine::for_comparator(CompareOp::Gt, int(2));

    let both = NumberLine::union(&[below, above]);

    assert_eq!(both.segment_count(), 2);
    assert!(!both.contains(&int(2)));
    assert!(both.contains(&int(1)));
    assert!(both.contains(&int(3)));
}

#[test]
fn intersection_with_disjoint_segments_is_empty() {
    let low = NumberLine::from_segment(Segment::between(int(1), int(2)));
    let high = NumberLine::from_segment(Segment::between(int(5), int(6)));

    assert!(NumberLine::intersection(&[low, high]).is_empty());
}

#[test]
fn intersection_with_empty_operand_is_empty() {
    let some = NumberLine::from_segment(Segment::between(int(1), int(9)));

    assert!(NumberLine::intersection(&[some, NumberLine::empty()]).is_empty());
}

#[test]
fn insert_segment_union_merges_overlap() {
    let mut line = NumberLine::from_segment(Segment::between(int(1), int(5)));
    line.insert_segment(Segment::between(int(3), int(8)));

    assert_eq!(bounds_of(&line), vec![(defined(1), true, defined(8), true)]);
}

#[test]
fn degenerate_exclusive_point_is_empty() {
    let lt_null = NumberLine::from_segment(Segment::new(
        Endpoint::low(BoundValue::Defined(Value::Null), false),
        Endpoint::high(BoundValue::Defined(Value::Null), false),
    ));

    assert!(lt_null.is_empty());
}
