/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a prefixed random id, e.g. `sub_3f2a...`
///
/// The suffix is a simple (hyphen-less) v4 UUID so ids stay URL-safe.
pub fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}
