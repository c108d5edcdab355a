use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;

use followup_overlay::call::CallInitiator;
use followup_overlay::context::ReminderContext;
use followup_overlay::overlay;
use followup_overlay::platform::SystemLauncher;
use followup_overlay::resume::AppResumeDispatcher;
use followup_overlay::router::{ActionName, ActionRouter};
use followup_overlay::settings::Settings;

/// One inbound notification event. With an `action` key it is a tray-action
/// event handled by the router; without one it launches the overlay.
#[derive(Debug, Deserialize)]
struct InboundEvent {
    action: Option<String>,
    #[serde(flatten)]
    payload: HashMap<String, String>,
}

fn read_event() -> anyhow::Result<String> {
    if let Some(arg) = std::env::args().nth(1) {
        return Ok(arg);
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    followup_overlay::logging::init(
        settings.debug_logging,
        settings.log_file.as_ref().map(PathBuf::from),
    );

    let raw = read_event()?;
    let event: InboundEvent = serde_json::from_str(&raw)?;

    match event.action.as_deref() {
        Some(raw_action) => {
            // Unknown action names are dropped without a trace on purpose.
            if let Some(action) = ActionName::parse(raw_action) {
                let launcher = SystemLauncher::new(&settings);
                let router = ActionRouter::new(
                    CallInitiator::new(Box::new(launcher.clone())),
                    AppResumeDispatcher::new(Box::new(launcher)),
                );
                router.dispatch(action, &event.payload);
            }
        }
        None => {
            let context = ReminderContext::from_payload(&event.payload);
            overlay::run(context, &settings)?;
        }
    }
    Ok(())
}
