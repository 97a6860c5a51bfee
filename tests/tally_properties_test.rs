use narrative_dice::Tally;
use proptest::prelude::*;

fn arb_tally() -> impl Strategy<Value = Tally> {
    (
        0u32..50,
        0u32..50,
        0u32..50,
        0u32..50,
        0u32..50,
        0u32..50,
        0u32..50,
        0u32..50,
    )
        .prop_map(
            |(success, advantage, failure, threat, triumph, despair, dark, light)| Tally {
                success,
                advantage,
                failure,
                threat,
                triumph,
                despair,
                dark,
                light,
            },
        )
}

proptest! {
    #[test]
    fn addition_is_commutative(a in arb_tally(), b in arb_tally()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn addition_is_associative(a in arb_tally(), b in arb_tally(), c in arb_tally()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn blank_is_the_identity(a in arb_tally()) {
        prop_assert_eq!(a + Tally::BLANK, a);
        prop_assert_eq!(Tally::BLANK + a, a);
    }

    #[test]
    fn cancel_is_idempotent(a in arb_tally()) {
        let once = a.cancel();
        prop_assert_eq!(once.cancel(), once);
    }

    #[test]
    fn opposed_pairs_never_both_survive(a in arb_tally()) {
        let canceled = a.cancel();
        prop_assert!(canceled.success == 0 || canceled.failure == 0);
        prop_assert!(canceled.advantage == 0 || canceled.threat == 0);
        prop_assert!(canceled.triumph == 0 || canceled.despair == 0);
    }

    #[test]
    fn cancel_never_touches_dark_or_light(a in arb_tally()) {
        let canceled = a.cancel();
        prop_assert_eq!(canceled.dark, a.dark);
        prop_assert_eq!(canceled.light, a.light);
    }

    #[test]
    fn cancel_matches_the_axis_formulas(a in arb_tally()) {
        let canceled = a.cancel();
        let successes = a.success + a.triumph;
        let failures = a.failure + a.despair;
        prop_assert_eq!(canceled.success, successes.max(failures) - failures);
        prop_assert_eq!(canceled.failure, failures.max(successes) - successes);
        prop_assert_eq!(canceled.advantage, a.advantage.max(a.threat) - a.threat);
        prop_assert_eq!(canceled.threat, a.threat.max(a.advantage) - a.advantage);
        prop_assert_eq!(canceled.triumph, a.triumph.max(a.despair) - a.despair);
        prop_assert_eq!(canceled.despair, a.despair.max(a.triumph) - a.triumph);
    }
}
