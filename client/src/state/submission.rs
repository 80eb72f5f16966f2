//! Submission lifecycle: idle → in flight → succeeded | failed.
//!
//! DESIGN
//! ======
//! Each `begin()` hands out a `SubmissionTicket` carrying a generation number.
//! Every later transition must present the ticket, so a timer or response that
//! belongs to an older submission can never overwrite the current one. This
//! is what makes the delayed "analyzing" message harmless after completion.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::consts::{ANALYZING_MESSAGE, EXTRACTING_MESSAGE};
use crate::net::api::SubmitError;
use crate::net::types::AnalysisReport;

/// Where the current submission stands. Exactly one exists per page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    AwaitingUpload,
    Analyzing,
    Succeeded(AnalysisReport),
    Failed(String),
}

impl SubmissionState {
    #[must_use]
    pub fn in_flight(&self) -> bool {
        matches!(self, Self::AwaitingUpload | Self::Analyzing)
    }
}

/// Proof that a transition belongs to a particular submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Why a submission could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BeginError {
    #[error("no document selected")]
    NoDocument,
    #[error("a submission is already in flight")]
    InFlight,
}

/// Shared submission state provided via context.
#[derive(Clone, Debug, Default)]
pub struct SubmissionTracker {
    pub state: SubmissionState,
    generation: u64,
    status_message: String,
}

impl SubmissionTracker {
    /// Start a submission: clears any prior error or report and shows the
    /// extraction message.
    ///
    /// # Errors
    ///
    /// Returns [`BeginError::NoDocument`] without a selection and
    /// [`BeginError::InFlight`] while another submission is outstanding.
    pub fn begin(&mut self, has_document: bool) -> Result<SubmissionTicket, BeginError> {
        if !has_document {
            return Err(BeginError::NoDocument);
        }
        if self.state.in_flight() {
            return Err(BeginError::InFlight);
        }
        self.generation += 1;
        self.state = SubmissionState::AwaitingUpload;
        EXTRACTING_MESSAGE.clone_into(&mut self.status_message);
        Ok(SubmissionTicket(self.generation))
    }

    /// Switch the loader to the analyzing message.
    ///
    /// Ignored unless `ticket` is current and the submission is still in
    /// flight. Returns whether anything changed.
    pub fn mark_analyzing(&mut self, ticket: SubmissionTicket) -> bool {
        if !self.is_current(ticket) || !self.state.in_flight() {
            return false;
        }
        self.state = SubmissionState::Analyzing;
        ANALYZING_MESSAGE.clone_into(&mut self.status_message);
        true
    }

    /// Record the outcome of the request for `ticket`.
    ///
    /// Returns `false` if the ticket is stale or the submission already ended.
    pub fn complete(&mut self, ticket: SubmissionTicket, outcome: Result<AnalysisReport, SubmitError>) -> bool {
        if !self.is_current(ticket) || !self.state.in_flight() {
            return false;
        }
        self.state = match outcome {
            Ok(report) => SubmissionState::Succeeded(report),
            Err(err) => SubmissionState::Failed(err.to_string()),
        };
        self.status_message.clear();
        true
    }

    /// Settle `ticket` with its outcome, first dropping the delayed status
    /// update still pending for it.
    ///
    /// The pending handle is only released when `ticket` is current; a stale
    /// response leaves the newer submission's timer alone.
    pub fn finish<T>(
        &mut self,
        pending_status: &mut Option<T>,
        ticket: SubmissionTicket,
        outcome: Result<AnalysisReport, SubmitError>,
    ) -> bool {
        if self.is_current(ticket) {
            drop(pending_status.take());
        }
        self.complete(ticket, outcome)
    }

    /// Discard a rendered report, returning to idle. Other states are kept.
    pub fn dismiss_report(&mut self) -> bool {
        if !matches!(self.state, SubmissionState::Succeeded(_)) {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }

    #[must_use]
    pub fn is_current(&self, ticket: SubmissionTicket) -> bool {
        ticket.0 == self.generation
    }

    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.state.in_flight()
    }

    /// Loader text while a request is outstanding.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.in_flight().then_some(self.status_message.as_str())
    }

    /// The report of a successful submission, if that is where we are.
    #[must_use]
    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.state {
            SubmissionState::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    /// Whether the submit trigger should be enabled.
    #[must_use]
    pub fn submit_enabled(&self, has_document: bool) -> bool {
        has_document && !self.in_flight()
    }
}
