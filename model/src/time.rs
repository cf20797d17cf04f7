use chrono::{SecondsFormat, Utc};

// RFC 3339 in UTC with millisecond precision, e.g. 2023-12-05T00:00:00.000Z
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[test]
fn now_rfc3339_test() {
    let before = Utc::now();
    let now = chrono::DateTime::parse_from_rfc3339(&now_rfc3339()).unwrap();
    assert!(now.timestamp_millis() >= before.timestamp_millis());
    assert!(now_rfc3339().ends_with('Z'));
}
