use std::collections::HashMap;

use crate::call::CallInitiator;
use crate::resume::{AppResumeDispatcher, ResumeRequest};

/// The closed set of named actions a tray notification can carry. Anything
/// outside this set fails to parse and is never dispatched, so "unknown
/// action is a no-op" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionName {
    Call,
    Snooze,
    OpenLead,
}

impl ActionName {
    /// Parse the wire identifier of an action event.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "CALL_ACTION" => Some(ActionName::Call),
            "SNOOZE_ACTION" => Some(ActionName::Snooze),
            "OPEN_LEAD_ACTION" => Some(ActionName::OpenLead),
            _ => None,
        }
    }

    /// Value forwarded to the host application in the resume deep link.
    pub fn param_value(self) -> &'static str {
        match self {
            ActionName::Call => "call",
            ActionName::Snooze => "snooze",
            ActionName::OpenLead => "open_lead",
        }
    }
}

/// Routes named action events (the background path, as opposed to overlay
/// button taps) to the call initiator or the resume dispatcher.
pub struct ActionRouter {
    calls: CallInitiator,
    resume: AppResumeDispatcher,
}

impl ActionRouter {
    pub fn new(calls: CallInitiator, resume: AppResumeDispatcher) -> Self {
        Self { calls, resume }
    }

    pub fn dispatch(&self, action: ActionName, payload: &HashMap<String, String>) {
        match action {
            ActionName::Call => {
                let number = payload.get("phone_number").map(String::as_str).unwrap_or("");
                if !number.is_empty() {
                    if let Err(err) = self.calls.place(number) {
                        tracing::warn!(%err, "dialer fallback failed");
                    }
                }
            }
            ActionName::Snooze => {
                let mut request = ResumeRequest::new(Some(ActionName::Snooze));
                if let Some(id) = payload.get("follow_up_id") {
                    request = request.follow_up_id(id.clone());
                }
                self.resume.resume(request);
            }
            ActionName::OpenLead => {
                let mut request = ResumeRequest::new(Some(ActionName::OpenLead));
                if let Some(id) = payload.get("lead_id") {
                    request = request.lead_id(id.clone());
                }
                self.resume.resume(request);
            }
        }
    }
}
