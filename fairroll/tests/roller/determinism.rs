//! Seeded sources and statistical sanity over many rolls.

use std::collections::BTreeMap;

use fairroll::{DiceParameters, Roller, SimDieSource, get_roll_count, roll, set_sim_seed};

#[test]
fn test_same_seed_same_outcomes() {
    let params = DiceParameters::from_bounds(-50, 50).expect("valid bounds");

    let first = Roller::new(SimDieSource::seeded(2024))
        .roll_many(&params, 200)
        .expect("rolls");
    let second = Roller::new(SimDieSource::seeded(2024))
        .roll_many(&params, 200)
        .expect("rolls");

    assert_eq!(first, second);
}

#[test]
fn test_roll_count_matches_dice_drawn() {
    let params = DiceParameters::from_bounds(1, 300).expect("valid bounds");
    set_sim_seed(5);

    let mut source = SimDieSource;
    let mut expected = 0u64;
    for _ in 0..50 {
        let outcome = roll(&params, &mut source).expect("roll");
        expected += u64::from(outcome.attempts()) * u64::from(params.dice());
    }
    assert_eq!(get_roll_count(), expected);
}

#[test]
fn test_seeded_distribution_is_roughly_flat() {
    let params = DiceParameters::from_bounds(1, 11).expect("valid bounds");
    let mut roller = Roller::new(SimDieSource::seeded(11));

    let rolls = 55_000;
    let mut counts: BTreeMap<i64, u32> = BTreeMap::new();
    let mut rerolls = 0u64;
    for outcome in roller.roll_many(&params, rolls).expect("rolls") {
        *counts.entry(outcome.final_result).or_default() += 1;
        rerolls += u64::from(outcome.rerolls);
    }

    assert_eq!(counts.len(), 11);
    // Expected 5_000 each; 10% is far outside any plausible deviation.
    for (&value, &count) in &counts {
        assert!((4_500..=5_500).contains(&count), "{value} came up {count} times");
    }

    // N=11 rejects 9/20 of attempts: about 0.818 rerolls per roll.
    let mean_rerolls = rerolls as f64 / rolls as f64;
    assert!((0.70..0.95).contains(&mean_rerolls), "mean rerolls {mean_rerolls}");
}

/// Threads own their generators, so equal seeds agree across threads.
#[test]
fn test_parallel_rollers_are_independent() {
    let params = DiceParameters::from_bounds(1, 10_000).expect("valid bounds");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                Roller::new(SimDieSource::seeded(99))
                    .roll_many(&params, 100)
                    .expect("rolls")
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread finished"))
        .collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
