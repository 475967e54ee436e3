use rowpipe::{Row, Value};

#[test]
fn test_rows_decode_from_plain_json_objects() {
    let rows: Vec<Row> = serde_json::from_str(
        r#"[
            {"id": 1, "name": "Contoso", "active": true},
            {"id": 2, "name": null, "price": 9.5}
        ]"#,
    )
    .expect("deserialize");
    assert_eq!(rows[0].get("id"), Some(&Value::Int(1)));
    assert_eq!(rows[0].get("active"), Some(&Value::Bool(true)));
    assert_eq!(rows[1].get("name"), Some(&Value::Null));
    assert_eq!(rows[1].get("price"), Some(&Value::Float(9.5)));
}

#[test]
fn test_missing_and_null_fields_display_alike() {
    let row: Row = serde_json::from_str(r#"{"id": 1, "name": null}"#).expect("deserialize");
    assert_eq!(row.display("name"), "");
    assert_eq!(row.display("absent"), "");
    assert_eq!(row.key("id"), Some(&Value::Int(1)));
}

#[test]
fn test_values_serialize_untagged() {
    let row = Row::new().set("id", 7).set("name", "x").set("gone", Value::Null);
    let json = serde_json::to_value(&row).expect("serialize");
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "x");
    assert!(json["gone"].is_null());
}
