use crate::platform::CallLauncher;

/// Issues call requests through a [`CallLauncher`]. For any non-empty number
/// exactly one request goes out: the direct-call request, or the dialer
/// prefill if the direct request is rejected.
pub struct CallInitiator {
    launcher: Box<dyn CallLauncher>,
}

impl CallInitiator {
    pub fn new(launcher: Box<dyn CallLauncher>) -> Self {
        Self { launcher }
    }

    /// Fire-and-forget: the call is requested, never awaited. An empty
    /// number issues nothing. The only error that can come back is the
    /// fallback dialer request itself failing.
    pub fn place(&self, phone_number: &str) -> anyhow::Result<()> {
        if phone_number.is_empty() {
            return Ok(());
        }
        let uri = format!("tel:{phone_number}");
        match self.launcher.place_call(&uri) {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::debug!(%err, %uri, "direct call rejected, falling back to dialer");
                self.launcher.open_dialer(&uri)
            }
        }
    }
}
