use crate::call::CallInitiator;
use crate::context::ReminderContext;
use crate::platform::SystemLauncher;
use crate::resume::{AppResumeDispatcher, ResumeRequest};
use crate::settings::Settings;
use eframe::egui;

/// Lifecycle of the interstitial. Single-shot: once `Presenting` is left it
/// is never re-entered, and the only ways out are the two buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Presenting,
    Calling,
    Dismissed,
}

/// The overlay's behavior, kept separate from the egui shell so the state
/// machine can be driven directly in tests.
pub struct OverlayPresenter {
    context: ReminderContext,
    calls: CallInitiator,
    resume: AppResumeDispatcher,
    state: OverlayState,
}

impl OverlayPresenter {
    pub fn new(context: ReminderContext, calls: CallInitiator, resume: AppResumeDispatcher) -> Self {
        Self {
            context,
            calls,
            resume,
            state: OverlayState::Presenting,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn context(&self) -> &ReminderContext {
        &self.context
    }

    /// The generic close gesture only succeeds once a button has already
    /// ended the presentation; while `Presenting` it is consumed.
    pub fn allow_close(&self) -> bool {
        self.state != OverlayState::Presenting
    }

    /// "Call Now": request the call first, then resume the host app with the
    /// context's identifiers, then tear down. Teardown happens whether the
    /// call request succeeded, fell back, or failed outright.
    pub fn press_call_now(&mut self) {
        if self.state != OverlayState::Presenting {
            return;
        }
        self.state = OverlayState::Calling;
        if let Err(err) = self.calls.place(&self.context.phone_number) {
            tracing::warn!(%err, "dialer fallback failed");
        }
        let request = ResumeRequest::new(None)
            .lead_id(self.context.lead_id.clone())
            .follow_up_id(self.context.follow_up_id.clone());
        self.resume.resume(request);
    }

    /// "Snooze": tear down with no call and no resume. The tray
    /// notification's snooze action behaves differently (it resumes the
    /// host app); see ActionRouter.
    pub fn press_snooze(&mut self) {
        if self.state != OverlayState::Presenting {
            return;
        }
        self.state = OverlayState::Dismissed;
    }
}

/// egui shell around [`OverlayPresenter`]: fullscreen dark panel, header,
/// lead name, follow-up title, and the red/green button pair.
pub struct OverlayApp {
    presenter: OverlayPresenter,
}

impl OverlayApp {
    pub fn new(presenter: OverlayPresenter) -> Self {
        Self { presenter }
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        use egui::*;

        if ctx.input(|i| i.viewport().close_requested()) && !self.presenter.allow_close() {
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
        }

        CentralPanel::default()
            .frame(Frame::none().fill(Color32::BLACK).inner_margin(Margin::symmetric(30.0, 100.0)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Follow-up Reminder")
                            .size(18.0)
                            .color(Color32::WHITE),
                    );
                    ui.add_space(50.0);
                    ui.label(
                        RichText::new(&self.presenter.context().lead_name)
                            .size(26.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.add_space(15.0);
                    ui.label(
                        RichText::new(&self.presenter.context().follow_up_title)
                            .size(18.0)
                            .color(Color32::from_white_alpha(0xcc)),
                    );
                    ui.add_space(75.0);
                });

                ui.columns(2, |cols| {
                    let snooze = cols[0].add_sized(
                        [cols[0].available_width(), 64.0],
                        Button::new(RichText::new("Snooze").size(18.0).color(Color32::WHITE))
                            .fill(Color32::RED),
                    );
                    let call = cols[1].add_sized(
                        [cols[1].available_width(), 64.0],
                        Button::new(RichText::new("Call Now").size(18.0).color(Color32::WHITE))
                            .fill(Color32::DARK_GREEN),
                    );
                    if snooze.clicked() {
                        self.presenter.press_snooze();
                    }
                    if call.clicked() {
                        self.presenter.press_call_now();
                    }
                });
            });

        if self.presenter.allow_close() {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

/// Present the overlay for a single context and block until a button ends it.
pub fn run(context: ReminderContext, settings: &Settings) -> anyhow::Result<()> {
    let launcher = SystemLauncher::new(settings);
    let calls = CallInitiator::new(Box::new(launcher.clone()));
    let resume = AppResumeDispatcher::new(Box::new(launcher));
    let presenter = OverlayPresenter::new(context, calls, resume);

    let (width, height) = settings.overlay_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_fullscreen(true)
            .with_always_on_top(),
        ..Default::default()
    };

    eframe::run_native(
        "Follow-up Reminder",
        native_options,
        Box::new(move |_cc| Box::new(OverlayApp::new(presenter))),
    )
    .map_err(|e| anyhow::anyhow!("overlay window failed: {e}"))
}
