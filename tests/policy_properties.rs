//! Cross-policy properties.
//!
//! These hold for every trace and capacity, so they are checked with
//! proptest over random traces rather than hand-picked ones.

use pagesim::cache::replacer::{run, FifoReplacer, Replacer};
use pagesim::sim::{Aggregator, ProcessReport};
use pagesim::{FaultTally, Outcome, PerStrategy, ReferenceString, Strategy};
use proptest::prelude::*;
use proptest::strategy::Strategy as PropStrategy;

fn trace_strategy(max_page: u32, max_len: usize) -> impl PropStrategy<Value = ReferenceString> {
    prop::collection::vec(1..=max_page, 0..max_len)
        .prop_map(|ids| ReferenceString::from_ids(&ids).unwrap())
}

fn report_strategy() -> impl PropStrategy<Value = ProcessReport> {
    prop::collection::vec((0u64..50, 0u64..50), Strategy::COUNT).prop_map(|pairs| {
        let mut report = ProcessReport::not_applicable();
        for (strategy, (faults, extra)) in Strategy::ALL.into_iter().zip(pairs) {
            report[strategy] = Outcome::Measured(FaultTally::new(faults, faults + extra, 0));
        }
        report
    })
}

proptest! {
    /// Faults never exceed accesses, and accesses equal the trace length.
    #[test]
    fn prop_faults_bounded_by_accesses(
        refs in trace_strategy(12, 300),
        capacity in 0usize..10
    ) {
        for strategy in Strategy::ALL {
            let tally = strategy.simulate(&refs, capacity);
            prop_assert_eq!(tally.accesses, refs.len() as u64);
            prop_assert!(tally.faults <= tally.accesses);
            prop_assert!(tally.evictions <= tally.faults);
        }
    }

    /// Every fault beyond the first `capacity` distinct loads evicts.
    #[test]
    fn prop_evictions_follow_faults(
        refs in trace_strategy(12, 300),
        capacity in 1usize..10
    ) {
        for strategy in Strategy::ALL {
            let tally = strategy.simulate(&refs, capacity);
            let warmup = tally.faults.min(capacity as u64);
            prop_assert_eq!(tally.evictions, tally.faults - warmup);
        }
    }

    /// With room for every page, only first references fault.
    #[test]
    fn prop_large_capacity_faults_once_per_page(refs in trace_strategy(20, 200)) {
        let capacity = refs.len();
        let distinct = refs.distinct_pages() as u64;
        for strategy in Strategy::ALL {
            let tally = strategy.simulate(&refs, capacity);
            prop_assert_eq!(tally.faults, distinct);
            prop_assert_eq!(tally.evictions, 0);
        }
    }

    /// OPTIMAL is a lower bound on faults.
    #[test]
    fn prop_optimal_is_lower_bound(
        refs in trace_strategy(10, 400),
        capacity in 0usize..8
    ) {
        let optimal = Strategy::Optimal.simulate(&refs, capacity).faults;
        for strategy in [Strategy::Fifo, Strategy::Lru, Strategy::Mru] {
            prop_assert!(optimal <= strategy.simulate(&refs, capacity).faults);
        }
    }

    /// Zero frames means every access faults.
    #[test]
    fn prop_zero_capacity_all_faults(refs in trace_strategy(10, 200)) {
        for strategy in Strategy::ALL {
            let tally = strategy.simulate(&refs, 0);
            prop_assert_eq!(tally.faults, tally.accesses);
        }
    }

    /// LRU has no Belady anomaly: more frames never means more faults.
    #[test]
    fn prop_lru_is_monotone(refs in trace_strategy(10, 300), capacity in 1usize..8) {
        let smaller = Strategy::Lru.simulate(&refs, capacity).faults;
        let larger = Strategy::Lru.simulate(&refs, capacity + 1).faults;
        prop_assert!(larger <= smaller);
    }

    /// Resident set never exceeds capacity.
    #[test]
    fn prop_resident_within_capacity(refs in trace_strategy(15, 200), capacity in 0usize..6) {
        let mut replacer = FifoReplacer::new(capacity);
        for (position, &page) in refs.iter().enumerate() {
            replacer.access(position, page);
            prop_assert!(replacer.len() <= capacity);
        }
    }

    /// Merging order does not change the totals.
    #[test]
    fn prop_merge_commutes(a in report_strategy(), b in report_strategy()) {
        let mut forward = Aggregator::new();
        forward.merge(0, &a);
        forward.merge(0, &b);

        let mut backward = Aggregator::new();
        backward.merge(0, &b);
        backward.merge(0, &a);

        prop_assert_eq!(forward, backward);
    }

    /// Grouping does not change the totals.
    #[test]
    fn prop_merge_associates(
        a in report_strategy(),
        b in report_strategy(),
        c in report_strategy()
    ) {
        let mut left = a;
        left.merge(&b);
        left.merge(&c);

        let mut bc = b;
        bc.merge(&c);
        let mut right = a;
        right.merge(&bc);

        prop_assert_eq!(left, right);
    }
}

#[test]
fn test_fifo_driver_matches_strategy() {
    let refs = ReferenceString::from_ids(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]).unwrap();
    let direct = run(&mut FifoReplacer::new(3), &refs);
    assert_eq!(direct, Strategy::Fifo.simulate(&refs, 3));
    assert_eq!(direct, FaultTally::new(9, 12, 6));
}

#[test]
fn test_per_strategy_from_fn_order() {
    let names = PerStrategy::from_fn(|s| s.name());
    let collected: Vec<&str> = names.values().copied().collect();
    assert_eq!(collected, vec!["OPT", "FIFO", "LRU", "MRU"]);
}
