use numerus_derive::api_model;

#[api_model]
struct Payload {
    input: String,
    trace_id: String,
}

#[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
struct Lenient {
    trace_id: String,
}

#[test]
fn api_model_serializes_camel_case() {
    let payload = Payload { input: "42".to_owned(), trace_id: "abc".to_owned() };
    let json = serde_json::to_value(&payload).expect("serialize");

    assert_eq!(json, serde_json::json!({ "input": "42", "traceId": "abc" }));
}

#[test]
fn api_model_rejects_unknown_fields_by_default() {
    let raw = r#"{ "input": "1", "traceId": "t", "extra": true }"#;
    assert!(serde_json::from_str::<Payload>(raw).is_err());
}

#[test]
fn api_model_arguments_override_policy() {
    let raw = r#"{ "trace_id": "t", "extra": true }"#;
    let parsed: Lenient = serde_json::from_str(raw).expect("lenient model should accept extras");

    assert_eq!(parsed.trace_id, "t");
    assert!(format!("{parsed:?}").contains("Lenient"));
}
