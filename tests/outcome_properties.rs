//! Property-based tests for the Outcome combinator surface.
//!
//! These tests use proptest to verify the combinator laws hold across
//! randomly generated payloads, not just hand-picked examples.

use proptest::prelude::*;

use verdict::outcome::Outcome;

/// Strategy covering both variants with arbitrary payloads.
fn any_outcome() -> impl Strategy<Value = Outcome<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Outcome::Ok),
        ".{0,24}".prop_map(Outcome::Err),
    ]
}

proptest! {
    /// Exactly one of is_ok / is_err holds.
    #[test]
    fn variant_queries_are_exclusive(v in any_outcome()) {
        prop_assert_ne!(v.is_ok(), v.is_err());
    }

    /// Projections are disjoint: exactly one of ok() / err() is Some.
    #[test]
    fn projections_are_disjoint(v in any_outcome()) {
        prop_assert_ne!(v.clone().ok().is_some(), v.err().is_some());
    }

    /// fold agrees with the variant queries.
    #[test]
    fn fold_dispatches_on_the_active_variant(v in any_outcome()) {
        let was_ok = v.is_ok();
        prop_assert_eq!(v.fold(|_| true, |_| false), was_ok);
    }

    /// map preserves the variant and touches only the success payload.
    #[test]
    fn map_preserves_variant(v in any_outcome()) {
        let mapped = v.clone().map(|n| n.wrapping_add(1));
        prop_assert_eq!(mapped.is_ok(), v.is_ok());
        if let Some(n) = v.ok() {
            prop_assert_eq!(mapped.ok(), Some(n.wrapping_add(1)));
        }
    }

    /// map with the identity function is a no-op.
    #[test]
    fn map_identity(v in any_outcome()) {
        prop_assert_eq!(v.clone().map(|n| n), v);
    }

    /// map composes: mapping f then g equals mapping their composition.
    #[test]
    fn map_composes(v in any_outcome()) {
        let f = |n: i64| n.wrapping_mul(3);
        let g = |n: i64| n.wrapping_sub(7);
        prop_assert_eq!(v.clone().map(f).map(g), v.map(|n| g(f(n))));
    }

    /// and_then on Ok applies the continuation; on Err it short-circuits.
    #[test]
    fn and_then_law(v in any_outcome(), delta in any::<i64>()) {
        let f = move |n: i64| Outcome::<i64, String>::Ok(n.wrapping_add(delta));
        let chained = v.clone().and_then(f);
        match v {
            Outcome::Ok(n) => prop_assert_eq!(chained, f(n)),
            Outcome::Err(e) => prop_assert_eq!(chained, Outcome::Err(e)),
        }
    }

    /// or_else on Err applies the recovery; on Ok it short-circuits.
    #[test]
    fn or_else_law(v in any_outcome()) {
        let recovered = v.clone().or_else(|e| Outcome::<i64, usize>::Err(e.len()));
        match v {
            Outcome::Ok(n) => prop_assert_eq!(recovered, Outcome::Ok(n)),
            Outcome::Err(e) => prop_assert_eq!(recovered, Outcome::Err(e.len())),
        }
    }

    /// unwrap_or returns the payload on Ok and the default on Err.
    #[test]
    fn unwrap_or_law(v in any_outcome(), default in any::<i64>()) {
        let expected = v.clone().ok().unwrap_or(default);
        prop_assert_eq!(v.unwrap_or(default), expected);
    }

    /// Round-tripping through std Result is lossless.
    #[test]
    fn result_round_trip(v in any_outcome()) {
        prop_assert_eq!(Outcome::from(v.clone().into_result()), v);
    }

    /// Round-tripping through JSON is lossless.
    #[test]
    fn serde_round_trip(v in any_outcome()) {
        let json = serde_json::to_string(&v).unwrap();
        let back: Outcome<i64, String> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, v);
    }

    /// branch and fold agree on which variant is active.
    #[test]
    fn branch_agrees_with_fold(v in any_outcome()) {
        use std::ops::ControlFlow;
        let was_ok = v.is_ok();
        match v.branch() {
            ControlFlow::Continue(_) => prop_assert!(was_ok),
            ControlFlow::Break(failure) => {
                prop_assert!(!was_ok);
                prop_assert!(failure.widen::<i64>().is_err());
            }
        }
    }
}
