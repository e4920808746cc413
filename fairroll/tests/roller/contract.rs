//! Die source contract violations and the attempt cap.

use fairroll::{
    DiceParameters, RollError, RollerConfig, ScriptEnd, ScriptedDieSource, from_fn, roll,
    roll_with_config,
};

fn six() -> DiceParameters {
    DiceParameters::from_bounds(1, 6).expect("valid bounds")
}

#[test]
fn test_zero_face_is_rejected_loudly() {
    let err = roll(&six(), &mut ScriptedDieSource::new([0])).expect_err("invalid face");
    assert_eq!(err, RollError::InvalidDieValue { value: 0 });
}

#[test]
fn test_twenty_one_is_rejected_loudly() {
    let err = roll(&six(), &mut ScriptedDieSource::new([21])).expect_err("invalid face");
    assert_eq!(err, RollError::InvalidDieValue { value: 21 });
}

/// A bad face after a rejected attempt still fails rather than being skipped.
#[test]
fn test_invalid_face_after_reroll() {
    let err = roll(&six(), &mut ScriptedDieSource::new([20, 255])).expect_err("invalid face");
    assert_eq!(err, RollError::InvalidDieValue { value: 255 });
}

#[test]
fn test_invalid_second_die_stops_drawing() {
    let params = DiceParameters::from_bounds(1, 100).expect("valid bounds");
    let mut source = ScriptedDieSource::new([3, 0, 5]);
    let err = roll(&params, &mut source).expect_err("invalid face");
    assert_eq!(err, RollError::InvalidDieValue { value: 0 });
    assert_eq!(source.draws(), 2);
}

#[test]
fn test_stuck_source_exhausts_default_cap() {
    let mut source = ScriptedDieSource::new(Vec::<u8>::new()).with_end(ScriptEnd::Repeat(20));
    let err = roll(&six(), &mut source).expect_err("always rejected");
    assert_eq!(err, RollError::RollerExhausted { attempts: 10_000 });
    assert_eq!(source.draws(), 10_000);
}

#[test]
fn test_configured_cap() {
    let mut draws = 0u32;
    let mut source = from_fn(|| {
        draws += 1;
        19
    });
    let err = roll_with_config(&six(), &mut source, &RollerConfig::strict())
        .expect_err("always rejected");
    assert_eq!(err, RollError::RollerExhausted { attempts: 100 });
    assert_eq!(draws, 100);
}

#[test]
fn test_accepted_on_last_allowed_attempt() {
    let config = RollerConfig::new().with_max_attempts(3);
    let mut source = ScriptedDieSource::new([20, 20, 5]);
    let outcome = roll_with_config(&six(), &mut source, &config).expect("third attempt");
    assert_eq!(outcome.rerolls, 2);
    assert_eq!(outcome.final_result, 5);
}

#[test]
fn test_range_errors_surface_before_rolling() {
    assert!(matches!(
        DiceParameters::from_bounds(1, 0),
        Err(RollError::EmptyRange { .. })
    ));
    assert!(matches!(
        DiceParameters::from_bounds(i64::MIN, i64::MAX),
        Err(RollError::RangeTooLarge { .. })
    ));
}
