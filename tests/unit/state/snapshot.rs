use super::*;

#[test]
fn scene_config_loads_from_snapshot_list() {
    let json = r#"[
        {"entity_id": "light.b", "state": "off"},
        {"entity_id": "light.a", "state": "on", "attributes": {"brightness": 120}}
    ]"#;
    let config: SceneConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.len(), 2);

    let a = config.get(&EntityId::new("light.a")).unwrap();
    assert_eq!(a.state, Value::from("on"));
    assert_eq!(a.attribute("brightness"), Some(&Value::Integer(120)));
    assert!(config.get(&EntityId::new("light.b")).unwrap().attributes.is_empty());

    let ids: Vec<&str> = config.iter().map(|s| s.entity_id.as_str()).collect();
    assert_eq!(ids, vec!["light.a", "light.b"]);
}

#[test]
fn duplicate_entities_are_rejected() {
    let json = r#"[
        {"entity_id": "light.a", "state": "on"},
        {"entity_id": "light.a", "state": "off"}
    ]"#;
    let err = serde_json::from_str::<SceneConfig>(json).unwrap_err();
    assert!(err.to_string().contains("recorded twice"));
}

#[test]
fn empty_attributes_are_not_serialized() {
    let s = StateSnapshot::new("switch.fan", "on");
    let out = serde_json::to_string(&s).unwrap();
    assert_eq!(out, r#"{"entity_id":"switch.fan","state":"on"}"#);
}
