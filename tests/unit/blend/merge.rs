use super::*;
use crate::state::coerce::StateTokens;

fn merged(lower: &StateSnapshot, upper: &StateSnapshot, factor: f64) -> StateSnapshot {
    let tokens = StateTokens::default();
    Merger::new(&tokens, Rounding::default())
        .merge(lower, upper, factor)
        .unwrap()
}

#[test]
fn on_stays_on_until_the_off_anchor() {
    let on = StateSnapshot::new("light.hall", "on");
    let off = StateSnapshot::new("light.hall", "off");
    for t in [0.0, 0.2, 0.5, 0.51, 0.99] {
        assert_eq!(merged(&on, &off, t).state, Value::from("on"), "factor {t}");
    }
}

#[test]
fn off_lower_takes_upper_state() {
    let off = StateSnapshot::new("light.hall", "off");
    let on = StateSnapshot::new("light.hall", "on");
    for t in [0.01, 0.5, 0.99] {
        assert_eq!(merged(&off, &on, t).state, Value::from("on"), "factor {t}");
    }
}

#[test]
fn unknown_lower_state_takes_upper_state() {
    let unknown = StateSnapshot::new("light.hall", "unknown");
    let on = StateSnapshot::new("light.hall", "on");
    for t in [0.1, 0.5] {
        assert_eq!(merged(&unknown, &on, t).state, Value::from("on"), "factor {t}");
    }
    assert_eq!(merged(&on, &unknown, 0.9).state, Value::from("on"));
}

#[test]
fn sticky_rule_keeps_token_text() {
    let open = StateSnapshot::new("cover.blind", "open");
    let closed = StateSnapshot::new("cover.blind", "closed");
    assert_eq!(merged(&open, &closed, 0.8).state, Value::from("open"));
    assert_eq!(merged(&closed, &open, 0.2).state, Value::from("open"));
}

#[test]
fn numeric_string_against_token_uses_sticky_rule() {
    let lower = StateSnapshot::new("input_number.level", "0.5");
    let upper = StateSnapshot::new("input_number.level", "on");
    assert_eq!(merged(&lower, &upper, 0.1).state, Value::from("on"));
}

#[test]
fn plain_numeric_states_blend() {
    let lower = StateSnapshot::new("input_number.level", Value::Integer(10));
    let upper = StateSnapshot::new("input_number.level", Value::Integer(20));
    assert_eq!(merged(&lower, &upper, 0.5).state, Value::Integer(15));
}

#[test]
fn uncoercible_states_switch_at_midpoint() {
    let heat = StateSnapshot::new("climate.lounge", "heat");
    let cool = StateSnapshot::new("climate.lounge", "cool");
    assert_eq!(merged(&heat, &cool, 0.5).state, Value::from("heat"));
    assert_eq!(merged(&heat, &cool, 0.6).state, Value::from("cool"));

    let on = StateSnapshot::new("climate.lounge", "on");
    assert_eq!(merged(&on, &cool, 0.4).state, Value::from("on"));
    assert_eq!(merged(&on, &cool, 0.7).state, Value::from("cool"));
}

#[test]
fn attributes_merge_over_intersection() {
    let lower = StateSnapshot::new("light.desk", "on")
        .with_attribute("brightness", 100_i64)
        .with_attribute("effect", "none")
        .with_attribute("color_temp", 300_i64);
    let upper = StateSnapshot::new("light.desk", "on")
        .with_attribute("brightness", 200_i64)
        .with_attribute("effect", "colorloop")
        .with_attribute("transition", 2_i64);

    let out = merged(&lower, &upper, 0.75);
    assert_eq!(out.attributes.len(), 2);
    assert_eq!(out.attribute("brightness"), Some(&Value::Integer(175)));
    assert_eq!(out.attribute("effect"), Some(&Value::from("colorloop")));
    assert!(out.attribute("color_temp").is_none());
    assert!(out.attribute("transition").is_none());
}

#[test]
fn null_attribute_keeps_the_recorded_side() {
    let lower = StateSnapshot::new("light.desk", "on").with_attribute("brightness", Value::Null);
    let upper = StateSnapshot::new("light.desk", "on").with_attribute("brightness", 80_i64);
    let out = merged(&lower, &upper, 0.25);
    assert_eq!(out.attribute("brightness"), Some(&Value::Integer(80)));
}

#[test]
fn mismatched_entities_fail() {
    let tokens = StateTokens::default();
    let err = Merger::new(&tokens, Rounding::default())
        .merge(
            &StateSnapshot::new("light.a", "on"),
            &StateSnapshot::new("light.b", "on"),
            0.5,
        )
        .unwrap_err();
    assert!(matches!(err, FaderError::EntityMismatch { .. }));
}

#[test]
fn custom_coercion_is_consulted() {
    let never = |v: &Value| -> Result<f64, crate::state::coerce::CoercionError> {
        Err(crate::state::coerce::CoercionError(v.to_string()))
    };
    let on = StateSnapshot::new("light.hall", "on");
    let off = StateSnapshot::new("light.hall", "off");
    let merger = Merger::new(&never, Rounding::default());
    assert_eq!(merger.merge_state(&on, &off, 0.7), Value::from("off"));
}
