use std::cmp::Ordering;

/// Weight of an edge in a graph without explicit weights.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Returns `true` if the value can be used as an edge weight.
///
/// Dijkstra's algorithm requires non-negative weights, and NaN or infinite
/// weights would make the reported distances meaningless.
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

/// Strategy for turning a stored edge weight into the weight used by a search.
pub trait GetWeight {
    fn get(&self, weight: f64) -> f64;

    fn get_const(&self) -> Option<f64> {
        None
    }
}

/// Uses the stored weight as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl GetWeight for Identity {
    fn get(&self, weight: f64) -> f64 {
        weight
    }
}

/// Every edge costs one, so the distance becomes the number of hops.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unit;

impl GetWeight for Unit {
    fn get(&self, _weight: f64) -> f64 {
        DEFAULT_WEIGHT
    }

    fn get_const(&self) -> Option<f64> {
        Some(DEFAULT_WEIGHT)
    }
}

/// `f64` with a total order, so it can be used as a priority.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct OrderedFloat(f64);

impl OrderedFloat {
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Ord for OrderedFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Eq for OrderedFloat {}

impl From<f64> for OrderedFloat {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<OrderedFloat> for f64 {
    fn from(value: OrderedFloat) -> Self {
        value.0
    }
}

/// A value paired with a weight. Comparisons only look at the weight.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

#[cfg(test)]
mod tests {
    use std::{cmp::Reverse, collections::BinaryHeap};

    use super::*;

    #[test]
    fn valid_weights() {
        assert!(is_valid_weight(0.0));
        assert!(is_valid_weight(12.5));
        assert!(!is_valid_weight(-1.0));
        assert!(!is_valid_weight(f64::NAN));
        assert!(!is_valid_weight(f64::INFINITY));
    }

    #[test]
    fn ordered_float_min_heap() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(Weighted("far", OrderedFloat::from(7.5))));
        heap.push(Reverse(Weighted("near", OrderedFloat::from(0.5))));
        heap.push(Reverse(Weighted("middle", OrderedFloat::from(3.0))));

        let order = std::iter::from_fn(|| heap.pop().map(|Reverse(Weighted(name, _))| name))
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["near", "middle", "far"]);
    }

    #[test]
    fn unit_is_const() {
        assert_eq!(Unit.get_const(), Some(1.0));
        assert_eq!(Identity.get_const(), None);
        assert_eq!(Unit.get(42.0), 1.0);
        assert_eq!(Identity.get(42.0), 42.0);
    }
}
