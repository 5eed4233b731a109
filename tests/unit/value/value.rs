use super::*;

#[test]
fn json_scalars_map_to_variants() {
    let v: Vec<Value> = serde_json::from_str(r#"[null, true, 180, 0.5, "on", [1, 2]]"#).unwrap();
    assert_eq!(v[0], Value::Null);
    assert_eq!(v[1], Value::Bool(true));
    assert_eq!(v[2], Value::Integer(180));
    assert_eq!(v[3], Value::Real(0.5));
    assert_eq!(v[4], Value::Text("on".to_owned()));
    assert_eq!(v[5], Value::Other(serde_json::json!([1, 2])));
}

#[test]
fn serializes_untagged() {
    let out = serde_json::to_string(&vec![
        Value::Integer(3),
        Value::from("off"),
        Value::Null,
    ])
    .unwrap();
    assert_eq!(out, r#"[3,"off",null]"#);
}

#[test]
fn numeric_view_covers_integer_and_real_only() {
    assert_eq!(Value::Integer(4).as_f64(), Some(4.0));
    assert_eq!(Value::Real(0.25).as_f64(), Some(0.25));
    assert_eq!(Value::Bool(true).as_f64(), None);
    assert_eq!(Value::from("12").as_f64(), None);
}
