use super::*;

fn lerp(l: impl Into<Value>, u: impl Into<Value>, t: f64) -> Value {
    interpolate(Some(&l.into()), Some(&u.into()), t, Rounding::default()).unwrap()
}

#[test]
fn numeric_endpoints_are_exact() {
    for (l, u) in [(0_i64, 255_i64), (-40, 40), (153, 500), (7, 7)] {
        assert_eq!(lerp(l, u, 0.0), Value::Integer(l));
        assert_eq!(lerp(l, u, 1.0), Value::Integer(u));
    }
    assert_eq!(lerp(2.0, 8.0, 0.0), Value::Integer(2));
    assert_eq!(lerp(2.0, 8.0, 1.0), Value::Integer(8));
}

#[test]
fn numeric_blend_rounds_to_whole_number() {
    assert_eq!(lerp(0_i64, 10_i64, 0.2), Value::Integer(2));
    assert_eq!(lerp(0_i64, 10_i64, 0.3), Value::Integer(3));
    assert_eq!(lerp(100_i64, 200_i64, 0.5), Value::Integer(150));
    assert_eq!(lerp(0.0, 1.0, 0.4), Value::Integer(0));
}

#[test]
fn default_rounding_breaks_ties_toward_even() {
    assert_eq!(Rounding::default(), Rounding::HalfEven);
    assert_eq!(lerp(0_i64, 10_i64, 0.25), Value::Integer(2));
    assert_eq!(lerp(100_i64, 101_i64, 0.5), Value::Integer(100));
    assert_eq!(lerp(101_i64, 102_i64, 0.5), Value::Integer(102));
}

#[test]
fn half_away_from_zero_rounds_ties_up() {
    let out = interpolate(
        Some(&Value::Integer(0)),
        Some(&Value::Integer(10)),
        0.25,
        Rounding::HalfAwayFromZero,
    );
    assert_eq!(out, Some(Value::Integer(3)));
    let out = interpolate(
        Some(&Value::Integer(0)),
        Some(&Value::Integer(-10)),
        0.25,
        Rounding::HalfAwayFromZero,
    );
    assert_eq!(out, Some(Value::Integer(-3)));
}

#[test]
fn half_even_breaks_ties_toward_even() {
    let l = Value::Integer(0);
    let u = Value::Integer(10);
    let out = interpolate(Some(&l), Some(&u), 0.25, Rounding::HalfEven).unwrap();
    assert_eq!(out, Value::Integer(2));
    let u = Value::Integer(14);
    let out = interpolate(Some(&l), Some(&u), 0.25, Rounding::HalfEven).unwrap();
    assert_eq!(out, Value::Integer(4));
}

#[test]
fn mixed_integer_and_real_blend_numerically() {
    assert_eq!(lerp(0_i64, 10.0, 0.5), Value::Integer(5));
}

#[test]
fn text_switches_after_midpoint() {
    assert_eq!(lerp("low", "high", 0.0), Value::from("low"));
    assert_eq!(lerp("low", "high", 0.5), Value::from("low"));
    assert_eq!(lerp("low", "high", 0.51), Value::from("high"));
    assert_eq!(lerp("low", "high", 1.0), Value::from("high"));
}

#[test]
fn number_against_text_uses_discrete_switch() {
    assert_eq!(lerp(10_i64, "auto", 0.3), Value::Integer(10));
    assert_eq!(lerp(10_i64, "auto", 0.7), Value::from("auto"));
}

#[test]
fn bools_are_not_numeric() {
    assert_eq!(lerp(true, false, 0.5), Value::Bool(true));
    assert_eq!(lerp(true, false, 0.6), Value::Bool(false));
}

#[test]
fn structured_values_switch_discretely() {
    let l = Value::Other(serde_json::json!([255, 0, 0]));
    let u = Value::Other(serde_json::json!([0, 0, 255]));
    assert_eq!(lerp(l.clone(), u.clone(), 0.5), l);
    assert_eq!(lerp(l, u.clone(), 0.9), u);
}

#[test]
fn absent_side_yields_the_other() {
    let v = Value::Integer(42);
    for t in [0.0, 0.5, 1.0] {
        assert_eq!(interpolate(None, Some(&v), t, Rounding::default()), Some(v.clone()));
        assert_eq!(interpolate(Some(&v), None, t, Rounding::default()), Some(v.clone()));
        assert_eq!(
            interpolate(Some(&Value::Null), Some(&v), t, Rounding::default()),
            Some(v.clone())
        );
        assert_eq!(
            interpolate(Some(&v), Some(&Value::Null), t, Rounding::default()),
            Some(v.clone())
        );
    }
    assert_eq!(interpolate(None, None, 0.5, Rounding::default()), None);
}
