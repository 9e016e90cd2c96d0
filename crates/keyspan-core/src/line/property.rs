use crate::{
    line::{BoundValue, Endpoint, NumberLine, Segment},
    value::Value,
};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = BoundValue<Value>> {
    prop_oneof![
        Just(BoundValue::NegInf),
        Just(BoundValue::Defined(Value::Null)),
        (-20i64..20).prop_map(|v| BoundValue::Defined(Value::Int(v))),
        Just(BoundValue::PosInf),
    ]
}

fn arb_segment() -> impl Strategy<Value = Segment<Value>> {
    (arb_point(), any::<bool>(), arb_point(), any::<bool>()).prop_map(|(a, ai, b, bi)| {
        Segment::new(Endpoint::low(a, ai), Endpoint::high(b, bi))
    })
}

fn arb_line() -> impl Strategy<Value = NumberLine<Value>> {
    prop::collection::vec(arb_segment(), 0..4).prop_map(|segments| {
        let mut line = NumberLine::empty();
        for segment in segments {
            line.insert_segment(segment);
        }
        line
    })
}

fn arb_probe() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        (-25i64..25).prop_map(Value::Int),
    ]
}

proptest! {
    #[test]
    fn complement_is_an_involution(line in arb_line()) {
        let round_trip = line.clone().complement().complement();
        prop_assert_eq!(round_trip, line);
    }

    #[test]
    fn complement_flips_membership(line in arb_line(), probe in arb_probe()) {
        let inside = line.contains(&probe);
        prop_assert_eq!(line.complement().contains(&probe), !inside);
    }

    #[test]
    fn intersection_is_commutative(a in arb_line(), b in arb_line()) {
        let ab = NumberLine::intersection(&[a.clone(), b.clone()]);
        let ba = NumberLine::intersection(&[b, a]);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn union_is_commutative(a in arb_line(), b in arb_line()) {
        let ab = NumberLine::union(&[a.clone(), b.clone()]);
        let ba = NumberLine::union(&[b, a]);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn intersection_is_associative(
        a in arb_line(),
        b in arb_line(),
        c in arb_line(),
        probe in arb_probe(),
    ) {
        let left = NumberLine::intersection(&[
            NumberLine::intersection(&[a.clone(), b.clone()]),
            c.clone(),
        ]);
        let right = NumberLine::intersection(&[a, NumberLine::intersection(&[b, c])]);

        prop_assert_eq!(left.contains(&probe), right.contains(&probe));
    }

    #[test]
    fn union_is_associative(
        a in arb_line(),
        b in arb_line(),
        c in arb_line(),
        probe in arb_probe(),
    ) {
        let left = NumberLine::union(&[NumberLine::union(&[a.clone(), b.clone()]), c.clone()]);
        let right = NumberLine::union(&[a, NumberLine::union(&[b, c])]);

        prop_assert_eq!(left.contains(&probe), right.contains(&probe));
    }

    #[test]
    fn unbounded_is_the_intersection_identity(line in arb_line()) {
        let kept = NumberLine::intersection(&[line.clone(), NumberLine::unbounded()]);
        prop_assert_eq!(kept, line);
    }

    #[test]
    fn unbounded_absorbs_union(line in arb_line()) {
        let all = NumberLine::union(&[line, NumberLine::unbounded()]);
        prop_assert_eq!(all, NumberLine::unbounded());
    }

    #[test]
    fn intersection_membership_is_conjunction(
        a in arb_line(),
        b in arb_line(),
        probe in arb_probe(),
    ) {
        let both = NumberLine::intersection(&[a.clone(), b.clone()]);
        prop_assert_eq!(both.contains(&probe), a.contains(&probe) && b.contains(&probe));
    }

    #[test]
    fn union_membership_is_disjunction(
        a in arb_line(),
        b in arb_line(),
        probe in arb_probe(),
    ) {
        let either = NumberLine::union(&[a.clone(), b.clone()]);
        prop_assert_eq!(either.contains(&probe), a.contains(&probe) || b.contains(&probe));
    }
}
