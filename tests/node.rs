use astro_filter::{
    Error, FilterNode, FixedClock, Message, NodeStatus, StatusFill, StatusShape, NODE_TYPE,
};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::New_York;
use serde_json::{json, Value};

fn local(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    New_York
        .with_ymd_and_hms(y, m, d, 18, 46, 27)
        .unwrap()
        .with_timezone(&Utc)
}

fn reference_settings() -> Value {
    json!({
        "eventType": "june_solstice",
        "startOffset": -5,
        "endOffset": 7,
        "useAbsoluteDiff": false,
        "timeZone": "America/New_York"
    })
}

fn sample_message() -> Message {
    Message::from_value(json!({ "attr1": "value 22", "payload": { "someData": "test" } }))
}

type TestNode = FilterNode<FixedClock, Vec<NodeStatus>>;

fn deploy(settings: &Value, now: DateTime<Utc>) -> TestNode {
    FilterNode::from_json(settings, FixedClock(now), Vec::new()).unwrap()
}

#[test]
fn node_type_name() {
    assert_eq!(NODE_TYPE, "astro-filter");
}

#[test]
fn status_after_deployment() {
    let node = deploy(&reference_settings(), local(2025, 6, 25));
    assert_eq!(
        node.status(),
        &NodeStatus {
            fill: StatusFill::Grey,
            shape: StatusShape::Dot,
            text: "Range: Jun 15 to Jun 27".into(),
        }
    );
    assert_eq!(node.sink().len(), 1);
}

#[test]
fn default_config_deployment() {
    let node = deploy(
        &json!({ "timeZone": "America/New_York" }),
        local(2025, 6, 25),
    );
    assert_eq!(node.status().text, "Range: Jun 20 to Jun 20");
}

#[test]
fn default_zone_is_utc() {
    // 2025-06-21 02:42 UTC: the solstice day differs from New York's.
    let node = deploy(&json!({}), local(2025, 6, 25));
    assert_eq!(node.status().text, "Range: Jun 21 to Jun 21");
}

#[test]
fn default_config_signed_diff() {
    let mut node = deploy(
        &json!({ "startOffset": -3, "timeZone": "America/New_York" }),
        local(2025, 6, 18),
    );
    let routing = node.on_input(sample_message()).unwrap();
    assert!(routing.is_forward());
    assert_eq!(
        routing.message().payload(),
        Some(&json!({ "astroDiff": -2, "someData": "test" }))
    );
}

#[test]
fn status_input_in_range() {
    let mut node = deploy(&reference_settings(), local(2025, 6, 25));
    let routing = node.on_input(sample_message()).unwrap();
    assert_eq!(
        serde_json::to_value(node.status()).unwrap(),
        json!({ "fill": "green", "shape": "dot", "text": "In range: Jun 15 to Jun 27" })
    );
    let forwarded = routing.forwarded().expect("message forwarded");
    assert_eq!(forwarded.get("attr1"), Some(&json!("value 22")));
    assert_eq!(
        forwarded.payload(),
        Some(&json!({ "astroDiff": 5, "someData": "test" }))
    );
}

#[test]
fn status_input_outside_range() {
    let mut node = deploy(&reference_settings(), local(2025, 6, 28));
    let routing = node.on_input(sample_message()).unwrap();
    assert_eq!(
        serde_json::to_value(node.status()).unwrap(),
        json!({ "fill": "red", "shape": "ring", "text": "Outside range: Jun 15 to Jun 27" })
    );
    assert!(!routing.is_forward());
    let msg = routing.into_message();
    assert_eq!(msg.get("attr1"), Some(&json!("value 22")));
    assert_eq!(
        msg.payload(),
        Some(&json!({ "astroDiff": 8, "someData": "test" }))
    );
}

#[test]
fn input_with_empty_message() {
    let mut node = deploy(&reference_settings(), local(2025, 6, 25));
    let routing = node.on_input(Message::new()).unwrap();
    assert_eq!(node.status().text, "In range: Jun 15 to Jun 27");
    assert_eq!(
        routing.forwarded().map(Message::into_value),
        Some(json!({ "payload": { "astroDiff": 5 } }))
    );
}

#[test]
fn input_with_invalid_type_payload() {
    let mut node = deploy(&reference_settings(), local(2025, 6, 25));
    let routing = node.on_input(Message::with_payload(json!(77))).unwrap();
    assert_eq!(node.status().text, "In range: Jun 15 to Jun 27");
    assert_eq!(
        routing.forwarded().map(Message::into_value),
        Some(json!({ "payload": { "astroDiff": 5 } }))
    );
}

#[test]
fn absolute_diff_before_the_event() {
    let mut settings = reference_settings();
    settings["useAbsoluteDiff"] = json!(true);
    let mut node = deploy(&settings, local(2025, 6, 17));
    let routing = node.on_input(Message::new()).unwrap();
    assert_eq!(
        routing.message().payload(),
        Some(&json!({ "astroDiff": 3 }))
    );
}

#[test]
fn december_solstice_rollover_node() {
    let settings = json!({
        "eventType": "december_solstice",
        "startOffset": "-5",
        "endOffset": "37",
        "timeZone": "America/New_York"
    });
    let mut node = deploy(&settings, local(2026, 1, 12));
    assert_eq!(node.status().text, "Range: Dec 16 to Jan 27");
    let routing = node.on_input(sample_message()).unwrap();
    assert!(routing.is_forward());
    assert_eq!(
        routing.message().payload(),
        Some(&json!({ "astroDiff": 22, "someData": "test" }))
    );
}

#[test]
fn unknown_event_type_fails_deployment() {
    let result: Result<TestNode, Error> = FilterNode::from_json(
        &json!({ "eventType": "lunar_eclipse" }),
        FixedClock(local(2025, 6, 25)),
        Vec::new(),
    );
    assert_eq!(
        result.err(),
        Some(Error::UnknownEventType("lunar_eclipse".into()))
    );
}

#[test]
fn non_numeric_offsets_are_zero() {
    let node = deploy(
        &json!({ "startOffset": "soon", "endOffset": null, "timeZone": "America/New_York" }),
        local(2025, 6, 25),
    );
    assert_eq!(node.config().start_offset, 0);
    assert_eq!(node.config().end_offset, 0);
    assert_eq!(node.status().text, "Range: Jun 20 to Jun 20");
}
