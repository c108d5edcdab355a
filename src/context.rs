use std::collections::HashMap;

pub const DEFAULT_LEAD_NAME: &str = "Unknown Lead";
pub const DEFAULT_FOLLOW_UP_TITLE: &str = "Follow-up Due";

/// Typed view of an inbound reminder event. Every field is always a present
/// string; absence in the payload is normalized to the field's default at
/// extraction time so nothing downstream has to branch on missing keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderContext {
    pub lead_name: String,
    pub follow_up_title: String,
    pub phone_number: String,
    pub lead_id: String,
    pub follow_up_id: String,
}

impl ReminderContext {
    /// Extract a context from a raw payload. Total: any payload, including
    /// an empty one, yields a fully populated context. Phone numbers are not
    /// validated here.
    pub fn from_payload(payload: &HashMap<String, String>) -> Self {
        let field = |key: &str, default: &str| {
            payload
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            lead_name: field("lead_name", DEFAULT_LEAD_NAME),
            follow_up_title: field("follow_up_title", DEFAULT_FOLLOW_UP_TITLE),
            phone_number: field("phone_number", ""),
            lead_id: field("lead_id", ""),
            follow_up_id: field("follow_up_id", ""),
        }
    }
}
