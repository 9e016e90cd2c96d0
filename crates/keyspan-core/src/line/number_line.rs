use crate::{
    line::{BoundValue, Endpoint, IndexValue, LinePoint, Segment, Side},
    predicate::CompareOp,
    value::Value,
};

///
/// NumberLine
///
/// An ordered, disjoint set of segments over one key domain, stored as a
/// flat sorted sequence of alternating low/high transition endpoints. The
/// sequence length is always even; adjacent segments stay separate when an
/// exclusive endpoint keeps them from touching.
///

#[derive(Clone, Debug, PartialEq)]
pub struct NumberLine<P> {
    transitions: Vec<Endpoint<P>>,
}

impl<P> Default for NumberLine<P> {
    fn default() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }
}

impl<P: LinePoint> NumberLine<P> {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// The whole line, `[-∞, +∞]`.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::from_segment(Segment::unbounded())
    }

    /// A one-segment line; a logically empty segment yields the empty set.
    #[must_use]
    pub fn from_segment(segment: Segment<P>) -> Self {
        if segment.is_empty() {
            return Self::empty();
        }

        Self {
            transitions: vec![segment.low, segment.high],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.transitions.len() / 2
    }

    /// Iterate the segments of the line in ascending order.
    pub fn segments(&self) -> impl Iterator<Item = Segment<P>> + '_ {
        self.transitions
            .chunks_exact(2)
            .map(|pair| Segment::from_endpoints(pair[0].clone(), pair[1].clone()))
    }

    /// Intersection of all operand lines: a sweep over the merged transition
    /// points, keeping the regions covered by every operand.
    #[must_use]
    pub fn intersection(lines: &[Self]) -> Self {
        Self::sweep(lines, lines.len())
    }

    /// Union of all operand lines: the same sweep, keeping regions covered
    /// by at least one operand.
    #[must_use]
    pub fn union(lines: &[Self]) -> Self {
        Self::sweep(lines, 1)
    }

    /// Complement of the set. Every endpoint flips role (and inclusivity,
    /// when finite); a finite outer bound gains the matching infinity while
    /// a non-finite one is dropped as redundant.
    #[must_use]
    pub fn complement(mut self) -> Self {
        if self.transitions.is_empty() {
            return Self::unbounded();
        }

        for point in &mut self.transitions {
            point.complement();
        }

        if self.transitions.first().is_some_and(Endpoint::is_finite) {
            self.transitions.insert(0, Endpoint::neg_inf());
        } else {
            self.transitions.remove(0);
        }

        if self.transitions.last().is_some_and(Endpoint::is_finite) {
            self.transitions.push(Endpoint::pos_inf());
        } else {
            self.transitions.pop();
        }

        debug_assert!(
            self.transitions.len() % 2 == 0,
            "complement must leave whole segments"
        );

        self
    }

    /// Union-merge one segment into this line.
    pub(crate) fn insert_segment(&mut self, segment: Segment<P>) {
        let lines = [std::mem::take(self), Self::from_segment(segment)];
        *self = Self::union(&lines);
    }

    /// True if `value` lies inside one of the segments.
    #[must_use]
    pub fn contains(&self, value: &P) -> bool {
        let probe = BoundValue::Defined(value.clone());

        self.segments().any(|segment| {
            let above_low = match segment.low.value.compare(&probe) {
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Equal => segment.low.inclusive,
                std::cmp::Ordering::Greater => false,
            };
            let below_high = match segment.high.value.compare(&probe) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Equal => segment.high.inclusive,
                std::cmp::Ordering::Less => false,
            };

            above_low && below_high
        })
    }

    /// Merge-sort every operand's transitions and track coverage depth: a
    /// low endpoint opens a region, a high endpoint closes one. Transition
    /// points crossing `target_depth` delimit the result.
    fn sweep(lines: &[Self], target_depth: usize) -> Self {
        let mut points: Vec<&Endpoint<P>> = lines
            .iter()
            .flat_map(|line| line.transitions.iter())
            .collect();
        points.sort_by(|a, b| a.compare(b));

        let target = isize::try_from(target_depth).expect("operand count fits isize");
        let mut depth = 0isize;
        let mut transitions = Vec::new();

        for point in points {
            match point.side {
                Side::Low => {
                    depth += 1;
                    if depth == target {
                        transitions.push(point.clone());
                    }
                }
                Side::High => {
                    if depth == target {
                        transitions.push(point.clone());
                    }
                    depth -= 1;
                }
            }
        }

        debug_assert!(
            transitions.len() % 2 == 0,
            "sweep must produce whole segments"
        );

        Self { transitions }
    }
}

impl NumberLine<Value> {
    /// The satisfying set of `column <op> value` as a one-column line.
    ///
    /// Bounded-below comparators exclude the null point (nulls sort low, so
    /// `x ≤ v` must not match a null); `Ne` is the complement of the
    /// equality point with nulls excluded.
    #[must_use]
    pub fn for_comparator(op: CompareOp, value: Value) -> Self {
        let null_floor = || Endpoint::low(BoundValue::Defined(Value::Null), false);
        let point = |inclusive| Endpoint::low(BoundValue::Defined(value.clone()), inclusive);

        match op {
            CompareOp::Eq => Self::from_segment(Segment::new(point(true), point(true))),
            CompareOp::Ne => Self::from_segment(Segment::new(point(true), point(true)))
                .complement()
                .non_null(),
            CompareOp::Lt => Self::from_segment(Segment::new(null_floor(), point(false))),
            CompareOp::Lte => Self::from_segment(Segment::new(null_floor(), point(true))),
            CompareOp::Gt => Self::from_segment(Segment::new(point(false), Endpoint::pos_inf())),
            CompareOp::Gte => Self::from_segment(Segment::new(point(true), Endpoint::pos_inf())),
        }
    }

    /// Replace the line's lower bound with an exclusive null floor.
    pub(crate) fn non_null(mut self) -> Self {
        if let Some(first) = self.transitions.first_mut() {
            *first = Endpoint::low(BoundValue::Defined(Value::Null), false);
        }

        self
    }

    /// Lift a one-column line into a composite line of one-part key values.
    #[must_use]
    pub(crate) fn to_index_values(&self) -> NumberLine<IndexValue> {
        let transitions = self
            .transitions
            .iter()
            .map(|point| {
                let mut tuple = IndexValue::new();
                tuple.push_part(point.value.clone());

                Endpoint {
                    value: BoundValue::Defined(tuple),
                    inclusive: point.inclusive,
                    side: point.side,
                }
            })
            .collect();

        NumberLine { transitions }
    }
}
