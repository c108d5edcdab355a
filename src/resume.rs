use crate::platform::{AppLauncher, ResumeTargetNotFound};
use crate::router::ActionName;

/// Launch request targeting the host application's own entry point. The two
/// flags ask the handler to bring an existing instance forward and clear any
/// intermediate ones instead of stacking a fresh instance; re-entry must be
/// idempotent on the host side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeRequest {
    pub action: Option<ActionName>,
    pub lead_id: Option<String>,
    pub follow_up_id: Option<String>,
    pub bring_to_front: bool,
    pub clear_intermediates: bool,
}

impl ResumeRequest {
    pub fn new(action: Option<ActionName>) -> Self {
        Self {
            action,
            lead_id: None,
            follow_up_id: None,
            bring_to_front: true,
            clear_intermediates: true,
        }
    }

    pub fn lead_id(mut self, id: impl Into<String>) -> Self {
        self.lead_id = Some(id.into());
        self
    }

    pub fn follow_up_id(mut self, id: impl Into<String>) -> Self {
        self.follow_up_id = Some(id.into());
        self
    }

    /// Render the request as a deep link under `base`, e.g.
    /// `igpl://app?action=snooze&follow_up_id=f42`.
    pub fn deep_link(&self, base: &str) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(action) = self.action {
            params.push(format!("action={}", action.param_value()));
        }
        if let Some(id) = &self.lead_id {
            params.push(format!("lead_id={}", urlencoding::encode(id)));
        }
        if let Some(id) = &self.follow_up_id {
            params.push(format!("follow_up_id={}", urlencoding::encode(id)));
        }
        if params.is_empty() {
            base.to_string()
        } else {
            // The base may already carry a query string.
            let sep = if base.contains('?') { '&' } else { '?' };
            format!("{base}{sep}{}", params.join("&"))
        }
    }
}

/// Re-enters the host application through an [`AppLauncher`]. A missing
/// resume target is dropped silently: there is no recovery action and the
/// user is never shown an error for it.
pub struct AppResumeDispatcher {
    launcher: Box<dyn AppLauncher>,
}

impl AppResumeDispatcher {
    pub fn new(launcher: Box<dyn AppLauncher>) -> Self {
        Self { launcher }
    }

    pub fn resume(&self, request: ResumeRequest) {
        if let Err(ResumeTargetNotFound) = self.launcher.launch(&request) {
            tracing::debug!(?request, "dropping resume request, host application not found");
        }
    }
}
