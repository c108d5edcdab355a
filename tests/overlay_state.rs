use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use followup_overlay::call::CallInitiator;
use followup_overlay::context::ReminderContext;
use followup_overlay::overlay::{OverlayPresenter, OverlayState};
use followup_overlay::platform::{AppLauncher, CallLauncher, ResumeTargetNotFound};
use followup_overlay::resume::{AppResumeDispatcher, ResumeRequest};

#[derive(Debug, Clone, PartialEq)]
enum Issued {
    Call(String),
    Dial(String),
    Resume(ResumeRequest),
}

struct FakeLauncher {
    reject_call: bool,
    issued: Arc<Mutex<Vec<Issued>>>,
}

impl CallLauncher for FakeLauncher {
    fn place_call(&self, uri: &str) -> anyhow::Result<()> {
        if self.reject_call {
            anyhow::bail!("call capability denied");
        }
        self.issued.lock().unwrap().push(Issued::Call(uri.to_string()));
        Ok(())
    }

    fn open_dialer(&self, uri: &str) -> anyhow::Result<()> {
        self.issued.lock().unwrap().push(Issued::Dial(uri.to_string()));
        Ok(())
    }
}

impl AppLauncher for FakeLauncher {
    fn launch(&self, request: &ResumeRequest) -> Result<(), ResumeTargetNotFound> {
        self.issued.lock().unwrap().push(Issued::Resume(request.clone()));
        Ok(())
    }
}

fn presenter(
    payload: &[(&str, &str)],
    reject_call: bool,
) -> (OverlayPresenter, Arc<Mutex<Vec<Issued>>>) {
    let map: HashMap<String, String> = payload
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let context = ReminderContext::from_payload(&map);
    let issued = Arc::new(Mutex::new(Vec::new()));
    let calls = CallInitiator::new(Box::new(FakeLauncher {
        reject_call,
        issued: issued.clone(),
    }));
    let resume = AppResumeDispatcher::new(Box::new(FakeLauncher {
        reject_call,
        issued: issued.clone(),
    }));
    (OverlayPresenter::new(context, calls, resume), issued)
}

#[test]
fn close_gesture_is_consumed_while_presenting() {
    let (presenter, issued) = presenter(&[("phone_number", "555-1234")], false);

    assert_eq!(presenter.state(), OverlayState::Presenting);
    assert!(!presenter.allow_close());
    assert!(issued.lock().unwrap().is_empty());
}

#[test]
fn call_now_issues_call_then_resume_in_order() {
    let (mut presenter, issued) =
        presenter(&[("lead_name", "Jane Doe"), ("phone_number", "555-1234")], false);

    assert_eq!(presenter.context().lead_name, "Jane Doe");
    presenter.press_call_now();

    let expected_resume = ResumeRequest::new(None).lead_id("").follow_up_id("");
    assert_eq!(
        *issued.lock().unwrap(),
        vec![
            Issued::Call("tel:555-1234".into()),
            Issued::Resume(expected_resume),
        ]
    );
    assert_eq!(presenter.state(), OverlayState::Calling);
    assert!(presenter.allow_close());
}

#[test]
fn call_now_with_empty_payload_still_resumes() {
    let (mut presenter, issued) = presenter(&[], false);

    presenter.press_call_now();

    let expected_resume = ResumeRequest::new(None).lead_id("").follow_up_id("");
    assert_eq!(
        *issued.lock().unwrap(),
        vec![Issued::Resume(expected_resume)]
    );
    assert_eq!(presenter.state(), OverlayState::Calling);
}

#[test]
fn rejected_call_falls_back_and_still_resumes() {
    let (mut presenter, issued) = presenter(&[("phone_number", "555-1234")], true);

    presenter.press_call_now();

    let issued = issued.lock().unwrap();
    assert_eq!(issued[0], Issued::Dial("tel:555-1234".into()));
    assert!(matches!(issued[1], Issued::Resume(_)));
    assert_eq!(issued.len(), 2);
}

#[test]
fn snooze_terminates_without_requests() {
    let (mut presenter, issued) = presenter(&[("phone_number", "555-1234")], false);

    presenter.press_snooze();

    assert!(issued.lock().unwrap().is_empty());
    assert_eq!(presenter.state(), OverlayState::Dismissed);
    assert!(presenter.allow_close());
}

#[test]
fn transitions_are_single_shot() {
    let (mut presenter, issued) = presenter(&[("phone_number", "555-1234")], false);

    presenter.press_call_now();
    presenter.press_call_now();
    presenter.press_snooze();

    assert_eq!(issued.lock().unwrap().len(), 2);
    assert_eq!(presenter.state(), OverlayState::Calling);
}
