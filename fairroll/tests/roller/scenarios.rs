//! Known-answer scenarios with scripted faces.

use fairroll::{DiceParameters, RangeConfig, Roller, RollerConfig, ScriptedDieSource, roll};

fn plan(config: RangeConfig) -> DiceParameters {
    DiceParameters::plan(&config).expect("valid range")
}

/// A single d20 over 1..=20 is the identity: no rejection, face is result.
#[test]
fn test_d20_range_maps_faces_directly() {
    let params = plan(RangeConfig::inclusive(1, 20));
    assert_eq!((params.size(), params.dice(), params.limit()), (20, 1, 20));
    assert_eq!(params.rejection_probability(), 0.0);

    for face in 1..=20u8 {
        let outcome = roll(&params, &mut ScriptedDieSource::new([face])).expect("roll");
        assert_eq!(outcome.final_result, i64::from(face));
        assert_eq!(outcome.dice_values, vec![face]);
        assert_eq!(outcome.rerolls, 0);
    }
}

/// Raw 17 is the last accepted value for N=6; 18 and 19 are rerolled.
#[test]
fn test_rejection_boundary_for_six() {
    let params = plan(RangeConfig::inclusive(1, 6));
    assert_eq!(params.limit(), 18);

    let outcome = roll(&params, &mut ScriptedDieSource::new([18])).expect("roll");
    assert_eq!(outcome.raw_value, 17);
    assert_eq!(outcome.final_result, 6);
    assert_eq!(outcome.rerolls, 0);

    let mut source = ScriptedDieSource::new([19, 20, 2]);
    let outcome = roll(&params, &mut source).expect("roll");
    assert_eq!(outcome.raw_value, 1);
    assert_eq!(outcome.final_result, 2);
    assert_eq!(outcome.rerolls, 2);
    assert_eq!(source.draws(), 3);
}

#[test]
fn test_wraparound_within_accepted_values() {
    let params = plan(RangeConfig::inclusive(1, 6));
    let outcome = roll(&params, &mut ScriptedDieSource::new([7])).expect("roll");
    assert_eq!(outcome.final_result, 1);
}

#[test]
fn test_two_dice_hundred() {
    let params = plan(RangeConfig::inclusive(1, 100));
    assert_eq!((params.dice(), params.limit()), (2, 400));

    let outcome = roll(&params, &mut ScriptedDieSource::new([6, 20])).expect("roll");
    assert_eq!(outcome.dice_values, vec![6, 20]);
    assert_eq!(outcome.raw_value, 119);
    assert_eq!(outcome.final_result, 20);
    assert_eq!(outcome.rerolls, 0);
}

/// A rejected multi-die attempt discards every die of that attempt.
#[test]
fn test_multi_die_reroll_discards_whole_attempt() {
    // N=300: k=2, S=400, raw >= 300 rejected.
    let params = plan(RangeConfig::inclusive(0, 299));
    assert_eq!((params.dice(), params.limit()), (2, 300));

    // [16, 1] -> raw 300 rejected; [1, 2] -> raw 1 accepted.
    let outcome = roll(&params, &mut ScriptedDieSource::new([16, 1, 1, 2])).expect("roll");
    assert_eq!(outcome.dice_values, vec![1, 2]);
    assert_eq!(outcome.final_result, 1);
    assert_eq!(outcome.rerolls, 1);
}

#[test]
fn test_inclusion_flags_shift_results() {
    let excl_start = plan(RangeConfig::inclusive(1, 10).include_start(false));
    assert_eq!((excl_start.range_min(), excl_start.range_max()), (2, 10));

    let low = roll(&excl_start, &mut ScriptedDieSource::new([1])).expect("roll");
    assert_eq!(low.final_result, 2);
    let high = roll(&excl_start, &mut ScriptedDieSource::new([9])).expect("roll");
    assert_eq!(high.final_result, 10);

    let excl_end = plan(RangeConfig::inclusive(1, 10).include_end(false));
    assert_eq!((excl_end.range_min(), excl_end.range_max()), (1, 9));
    let high = roll(&excl_end, &mut ScriptedDieSource::new([9])).expect("roll");
    assert_eq!(high.final_result, 9);
}

#[test]
fn test_single_value_range_always_accepts() {
    let params = plan(RangeConfig::inclusive(-7, -7));
    for face in 1..=20u8 {
        let outcome = roll(&params, &mut ScriptedDieSource::new([face])).expect("roll");
        assert_eq!(outcome.final_result, -7);
        assert_eq!(outcome.rerolls, 0);
    }
}

#[test]
fn test_extreme_bounds_stay_in_range() {
    let params = DiceParameters::from_bounds(i64::MAX - 5, i64::MAX).expect("valid bounds");
    let mut roller =
        Roller::new(ScriptedDieSource::cycle([1, 6, 19, 20])).with_config(RollerConfig::strict());
    for outcome in roller.roll_many(&params, 8).expect("rolls") {
        assert!(outcome.final_result >= i64::MAX - 5);
    }

    let params = DiceParameters::from_bounds(i64::MIN, i64::MIN + 2).expect("valid bounds");
    let outcome = roll(&params, &mut ScriptedDieSource::new([18])).expect("roll");
    assert_eq!(outcome.final_result, i64::MIN + 2);
}
