use crate::resume::ResumeRequest;
use crate::settings::Settings;

/// The host application could not be located for resume. The caller has no
/// recovery action, so this is the whole error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeTargetNotFound;

impl std::fmt::Display for ResumeTargetNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "host application not found")
    }
}

impl std::error::Error for ResumeTargetNotFound {}

/// Capability to hand a `tel:` URI to the platform.
pub trait CallLauncher {
    /// Primary request: place the call directly.
    fn place_call(&self, uri: &str) -> anyhow::Result<()>;
    /// Secondary request: open the call UI prefilled with the number
    /// without placing the call.
    fn open_dialer(&self, uri: &str) -> anyhow::Result<()>;
}

/// Capability to bring the host application back to the foreground.
pub trait AppLauncher {
    fn launch(&self, request: &ResumeRequest) -> Result<(), ResumeTargetNotFound>;
}

/// System-backed launcher. Call requests go to whatever handler the OS has
/// registered for `tel:` URIs; resume requests go through the deep-link base
/// configured in [`Settings::resume_target`].
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    resume_target: Option<String>,
}

impl SystemLauncher {
    pub fn new(settings: &Settings) -> Self {
        Self {
            resume_target: settings.resume_target.clone(),
        }
    }
}

impl CallLauncher for SystemLauncher {
    fn place_call(&self, uri: &str) -> anyhow::Result<()> {
        // Waits on the handler's verdict so a missing or refusing tel:
        // handler surfaces as a rejection here.
        open::that(uri)?;
        Ok(())
    }

    fn open_dialer(&self, uri: &str) -> anyhow::Result<()> {
        open::that_detached(uri)?;
        Ok(())
    }
}

impl AppLauncher for SystemLauncher {
    fn launch(&self, request: &ResumeRequest) -> Result<(), ResumeTargetNotFound> {
        let base = self.resume_target.as_deref().ok_or(ResumeTargetNotFound)?;
        let uri = request.deep_link(base);
        tracing::debug!(%uri, "resuming host application");
        open::that_detached(uri).map_err(|_| ResumeTargetNotFound)
    }
}
