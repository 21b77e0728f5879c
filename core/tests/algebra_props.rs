use ir_core::algebra::{difference, intersect, union};
use ir_core::DocId;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn posting_list() -> impl Strategy<Value = Vec<DocId>> {
    proptest::collection::btree_set(1u32..200, 0..60).prop_map(|s| s.into_iter().collect())
}

fn set(v: &[DocId]) -> BTreeSet<DocId> {
    v.iter().copied().collect()
}

fn strictly_increasing(v: &[DocId]) -> bool {
    v.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #[test]
    fn intersect_matches_set_intersection(a in posting_list(), b in posting_list()) {
        let out = intersect(&a, &b);
        prop_assert!(strictly_increasing(&out));
        let expected: Vec<DocId> = set(&a).intersection(&set(&b)).copied().collect();
        prop_assert_eq!(&out, &expected);
        prop_assert!(out.len() <= a.len().min(b.len()));
    }

    #[test]
    fn union_matches_set_union(a in posting_list(), b in posting_list()) {
        let out = union(&a, &b);
        prop_assert!(strictly_increasing(&out));
        let expected: Vec<DocId> = set(&a).union(&set(&b)).copied().collect();
        prop_assert_eq!(&out, &expected);
        prop_assert!(out.len() >= a.len().max(b.len()));
    }

    #[test]
    fn difference_matches_set_difference(a in posting_list(), b in posting_list()) {
        let out = difference(&a, &b);
        prop_assert!(strictly_increasing(&out));
        let expected: Vec<DocId> = set(&a).difference(&set(&b)).copied().collect();
        prop_assert_eq!(&out, &expected);
        prop_assert_eq!(out.len(), a.len() - intersect(&a, &b).len());
    }

    #[test]
    fn operations_are_idempotent(a in posting_list()) {
        prop_assert_eq!(intersect(&a, &a), a.clone());
        prop_assert_eq!(union(&a, &a), a.clone());
        prop_assert!(difference(&a, &a).is_empty());
    }

    #[test]
    fn union_and_intersect_commute(a in posting_list(), b in posting_list()) {
        prop_assert_eq!(union(&a, &b), union(&b, &a));
        prop_assert_eq!(intersect(&a, &b), intersect(&b, &a));
    }
}
