use super::*;
use crate::consts::UNKNOWN_ERROR_MESSAGE;

fn report_with_strong(points: &[&str]) -> AnalysisReport {
    AnalysisReport {
        strong_points: points.iter().map(|p| (*p).to_owned()).collect(),
        ..AnalysisReport::default()
    }
}

// =============================================================
// begin
// =============================================================

#[test]
fn tracker_default_is_idle() {
    let tracker = SubmissionTracker::default();
    assert_eq!(tracker.state, SubmissionState::Idle);
    assert!(!tracker.in_flight());
    assert_eq!(tracker.status_message(), None);
}

#[test]
fn begin_requires_document() {
    let mut tracker = SubmissionTracker::default();
    assert_eq!(tracker.begin(false), Err(BeginError::NoDocument));
    assert_eq!(tracker.state, SubmissionState::Idle);
}

#[test]
fn begin_enters_awaiting_upload_with_extracting_message() {
    let mut tracker = SubmissionTracker::default();
    tracker.begin(true).unwrap();
    assert_eq!(tracker.state, SubmissionState::AwaitingUpload);
    assert_eq!(tracker.status_message(), Some(EXTRACTING_MESSAGE));
}

#[test]
fn begin_refuses_while_in_flight() {
    let mut tracker = SubmissionTracker::default();
    tracker.begin(true).unwrap();
    assert_eq!(tracker.begin(true), Err(BeginError::InFlight));
}

#[test]
fn begin_clears_previous_failure_and_report() {
    let mut tracker = SubmissionTracker::default();
    let t1 = tracker.begin(true).unwrap();
    tracker.complete(t1, Err(SubmitError::Service("nope".to_owned())));
    tracker.begin(true).unwrap();
    assert_eq!(tracker.state, SubmissionState::AwaitingUpload);

    let mut tracker = SubmissionTracker::default();
    let t1 = tracker.begin(true).unwrap();
    tracker.complete(t1, Ok(AnalysisReport::default()));
    tracker.begin(true).unwrap();
    assert!(tracker.report().is_none());
}

// =============================================================
// trigger
// =============================================================

#[test]
fn submit_enabled_needs_document_and_idle_request() {
    let mut tracker = SubmissionTracker::default();
    assert!(!tracker.submit_enabled(false));
    assert!(tracker.submit_enabled(true));
    let ticket = tracker.begin(true).unwrap();
    assert!(!tracker.submit_enabled(true));
    tracker.complete(ticket, Ok(AnalysisReport::default()));
    assert!(tracker.submit_enabled(true));
}

// =============================================================
// analyzing status
// =============================================================

#[test]
fn mark_analyzing_updates_message_while_in_flight() {
    let mut tracker = SubmissionTracker::default();
    let ticket = tracker.begin(true).unwrap();
    assert!(tracker.mark_analyzing(ticket));
    assert_eq!(tracker.state, SubmissionState::Analyzing);
    assert_eq!(tracker.status_message(), Some(ANALYZING_MESSAGE));
}

#[test]
fn late_analyzing_after_completion_is_ignored() {
    let mut tracker = SubmissionTracker::default();
    let ticket = tracker.begin(true).unwrap();
    tracker.complete(ticket, Err(SubmitError::Transport("down".to_owned())));
    assert!(!tracker.mark_analyzing(ticket));
    assert_eq!(tracker.state, SubmissionState::Failed("Network error: down".to_owned()));
    assert_eq!(tracker.status_message(), None);
}

#[test]
fn analyzing_from_older_submission_is_ignored() {
    let mut tracker = SubmissionTracker::default();
    let old = tracker.begin(true).unwrap();
    tracker.complete(old, Ok(AnalysisReport::default()));
    let _current = tracker.begin(true).unwrap();
    assert!(!tracker.mark_analyzing(old));
    assert_eq!(tracker.state, SubmissionState::AwaitingUpload);
    assert_eq!(tracker.status_message(), Some(EXTRACTING_MESSAGE));
}

// =============================================================
// complete
// =============================================================

#[test]
fn complete_success_stores_report() {
    let mut tracker = SubmissionTracker::default();
    let ticket = tracker.begin(true).unwrap();
    assert!(tracker.complete(ticket, Ok(report_with_strong(&["A"]))));
    assert_eq!(tracker.report().map(|r| r.strong_points.len()), Some(1));
    assert!(!tracker.in_flight());
}

#[test]
fn transport_failure_is_failed_and_not_in_flight() {
    let mut tracker = SubmissionTracker::default();
    let ticket = tracker.begin(true).unwrap();
    tracker.complete(ticket, Err(SubmitError::Transport("Failed to fetch".to_owned())));
    assert_eq!(tracker.state, SubmissionState::Failed("Network error: Failed to fetch".to_owned()));
    assert!(!tracker.in_flight());
    assert!(tracker.submit_enabled(true));
}

#[test]
fn service_failure_is_failed_and_not_in_flight() {
    let mut tracker = SubmissionTracker::default();
    let ticket = tracker.begin(true).unwrap();
    tracker.complete(ticket, Err(SubmitError::Service(UNKNOWN_ERROR_MESSAGE.to_owned())));
    assert_eq!(tracker.state, SubmissionState::Failed(UNKNOWN_ERROR_MESSAGE.to_owned()));
    assert_eq!(tracker.status_message(), None);
    assert!(tracker.submit_enabled(true));
}

#[test]
fn stale_completion_is_ignored() {
    let mut tracker = SubmissionTracker::default();
    let old = tracker.begin(true).unwrap();
    tracker.complete(old, Err(SubmitError::Service("first".to_owned())));
    let current = tracker.begin(true).unwrap();
    assert!(!tracker.complete(old, Ok(AnalysisReport::default())));
    assert!(tracker.in_flight());
    assert!(tracker.complete(current, Ok(AnalysisReport::default())));
}

#[test]
fn second_completion_for_same_ticket_is_ignored() {
    let mut tracker = SubmissionTracker::default();
    let ticket = tracker.begin(true).unwrap();
    tracker.complete(ticket, Ok(AnalysisReport::default()));
    assert!(!tracker.complete(ticket, Err(SubmitError::Service("late".to_owned()))));
    assert!(tracker.report().is_some());
}

// =============================================================
// dismiss
// =============================================================

// =============================================================
// finish
// =============================================================

/// Stand-in for a scheduled status update; counts how often it is dropped.
struct PendingStatus(std::rc::Rc<std::cell::Cell<u32>>);

impl Drop for PendingStatus {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn finish_drops_pending_status_before_recording_outcome() {
    let mut tracker = SubmissionTracker::default();
    let ticket = tracker.begin(true).unwrap();
    let drops = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut pending = Some(PendingStatus(drops.clone()));

    assert!(tracker.finish(&mut pending, ticket, Ok(report_with_strong(&["A"]))));

    assert!(pending.is_none());
    assert_eq!(drops.get(), 1);
    assert_eq!(tracker.report().map(|r| r.strong_points.len()), Some(1));
    assert_eq!(tracker.status_message(), None);
}

#[test]
fn finish_then_late_status_update_changes_nothing() {
    let mut tracker = SubmissionTracker::default();
    let ticket = tracker.begin(true).unwrap();
    let mut pending: Option<()> = Some(());

    assert!(tracker.finish(&mut pending, ticket, Err(SubmitError::Transport("offline".into()))));
    assert!(!tracker.mark_analyzing(ticket));

    assert_eq!(tracker.state, SubmissionState::Failed("Network error: offline".into()));
}

#[test]
fn stale_finish_keeps_current_pending_status() {
    let mut tracker = SubmissionTracker::default();
    let old = tracker.begin(true).unwrap();
    assert!(tracker.complete(old, Err(SubmitError::Service("boom".into()))));
    let _current = tracker.begin(true).unwrap();
    let mut pending = Some(());

    assert!(!tracker.finish(&mut pending, old, Ok(AnalysisReport::default())));

    assert!(pending.is_some());
    assert!(tracker.in_flight());
}

#[test]
fn dismiss_report_returns_to_idle() {
    let mut tracker = SubmissionTracker::default();
    let ticket = tracker.begin(true).unwrap();
    tracker.complete(ticket, Ok(AnalysisReport::default()));
    assert!(tracker.dismiss_report());
    assert_eq!(tracker.state, SubmissionState::Idle);
}

#[test]
fn dismiss_report_keeps_failure() {
    let mut tracker = SubmissionTracker::default();
    let ticket = tracker.begin(true).unwrap();
    tracker.complete(ticket, Err(SubmitError::Service("x".to_owned())));
    assert!(!tracker.dismiss_report());
    assert_eq!(tracker.state, SubmissionState::Failed("x".to_owned()));
}
