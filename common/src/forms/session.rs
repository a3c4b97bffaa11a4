//! Per-session state machine for a multi-step form.
//!
//! A `FormSession` owns the wizard state for one open form: the current step,
//! the field values entered so far, the submission status, and the message
//! shown when validation or submission fails. It performs no IO. When the
//! last step passes validation the session moves to `Submitting` and hands a
//! [`SubmissionDraft`] to the caller, which sends it and reports the outcome
//! via [`FormSession::finish_submission`].
//!
//! Status transitions:
//! `Editing --last step valid--> Submitting --ok--> Succeeded`;
//! `Submitting --error--> Failed`; `Failed --submit--> Submitting` (retry);
//! any state `--reset--> Editing`. A field edit or navigation from `Failed`
//! returns the session to `Editing` and clears the message.

use std::collections::HashMap;

use crate::forms::definition::{FormDefinition, FormKind};
use crate::forms::validation;

/// Where a session is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Editing,
    /// A gateway call is outstanding. No other operation may mutate the
    /// session until the outcome is reported.
    Submitting,
    Succeeded,
    Failed,
}

/// The one message shown to users for any transport or server failure. The
/// underlying cause is logged at the boundary, never surfaced.
pub const GENERIC_SUBMIT_ERROR: &str = "Something went wrong. Please try again.";

/// Everything the gateway needs to build the outbound request, minus the
/// client timestamp (stamped by the caller at send time, since this core has
/// no clock).
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDraft {
    pub kind: FormKind,
    pub source: String,
    pub fields: HashMap<String, String>,
}

/// Result of a [`FormSession::go_next`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Validation passed; the session now sits at this step index.
    Advanced(usize),
    /// Validation failed; the step is unchanged and the message is stored on
    /// the session as well.
    Rejected(String),
    /// The last step passed validation. The session is now `Submitting` and
    /// the caller must send exactly this draft to the gateway.
    SubmitStarted(SubmissionDraft),
    /// The session is not editable right now (submission outstanding or
    /// already succeeded). Nothing changed.
    Ignored,
}

pub struct FormSession {
    definition: FormDefinition,
    current_step: usize,
    fields: HashMap<String, String>,
    status: SubmissionStatus,
    error_message: Option<String>,
}

impl FormSession {
    pub fn new(definition: FormDefinition) -> Self {
        Self {
            definition,
            current_step: 0,
            fields: HashMap::new(),
            status: SubmissionStatus::Editing,
            error_message: None,
        }
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Current value of a field, empty if never edited.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// Stores a field value and clears any pending error message. No
    /// validation happens here; it is deferred to step advancement. Editing
    /// after a failed submission returns the session to `Editing`.
    pub fn edit_field(&mut self, name: &str, value: &str) {
        match self.status {
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded => return,
            SubmissionStatus::Failed => self.status = SubmissionStatus::Editing,
            SubmissionStatus::Editing => {}
        }
        self.fields.insert(name.to_string(), value.to_string());
        self.error_message = None;
    }

    /// Validates the current step and advances on success. Reaching the step
    /// past the last one starts the submission and yields the draft exactly
    /// once; the `Submitting` status blocks re-entry until the outcome is
    /// reported.
    pub fn go_next(&mut self) -> StepOutcome {
        if matches!(
            self.status,
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded
        ) {
            return StepOutcome::Ignored;
        }
        let Some(step) = self.definition.step(self.current_step) else {
            return StepOutcome::Ignored;
        };
        if self.status == SubmissionStatus::Failed {
            self.status = SubmissionStatus::Editing;
        }
        if let Err(message) = validation::validate_step(step, &self.fields) {
            self.error_message = Some(message.clone());
            return StepOutcome::Rejected(message);
        }
        self.error_message = None;
        self.current_step += 1;
        if self.current_step == self.definition.total_steps() {
            self.status = SubmissionStatus::Submitting;
            StepOutcome::SubmitStarted(self.draft())
        } else {
            StepOutcome::Advanced(self.current_step)
        }
    }

    /// Moves one step back without validating. A strict no-op at step 0.
    /// Clears any pending error message; navigating away from `Failed`
    /// returns the session to `Editing`.
    pub fn go_back(&mut self) {
        if self.current_step == 0
            || matches!(
                self.status,
                SubmissionStatus::Submitting | SubmissionStatus::Succeeded
            )
        {
            return;
        }
        if self.status == SubmissionStatus::Failed {
            self.status = SubmissionStatus::Editing;
        }
        self.current_step -= 1;
        self.error_message = None;
    }

    /// Re-attempts the submission after a failure. Yields a fresh draft and
    /// moves back to `Submitting`; `None` while a call is already outstanding
    /// or the session has succeeded, or if the wizard never reached its last
    /// step.
    pub fn submit(&mut self) -> Option<SubmissionDraft> {
        match self.status {
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded => None,
            SubmissionStatus::Editing | SubmissionStatus::Failed => {
                if self.current_step < self.definition.total_steps() {
                    return None;
                }
                self.status = SubmissionStatus::Submitting;
                self.error_message = None;
                Some(self.draft())
            }
        }
    }

    /// Reports the gateway outcome. Only meaningful while `Submitting`;
    /// field values are kept either way so a failed attempt can be retried.
    pub fn finish_submission(&mut self, result: Result<(), ()>) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded;
                self.error_message = None;
            }
            Err(()) => {
                self.status = SubmissionStatus::Failed;
                self.error_message = Some(GENERIC_SUBMIT_ERROR.to_string());
            }
        }
    }

    /// Discards all field values and returns the session to its initial
    /// state. Valid from any status.
    pub fn reset(&mut self) {
        self.current_step = 0;
        self.fields.clear();
        self.status = SubmissionStatus::Editing;
        self.error_message = None;
    }

    fn draft(&self) -> SubmissionDraft {
        SubmissionDraft {
            kind: self.definition.kind,
            source: self.definition.source.clone(),
            fields: self.fields.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::catalog;

    fn waitlist_session() -> FormSession {
        FormSession::new(catalog::aperture_waitlist())
    }

    fn fill_step_zero(session: &mut FormSession) {
        session.edit_field("name", "Jane");
        session.edit_field("email", "jane@x.com");
    }

    #[test]
    fn invalid_step_leaves_current_step_and_sets_a_message() {
        let mut session = waitlist_session();
        session.edit_field("name", "Jane");
        // email missing
        let outcome = session.go_next();
        assert!(matches!(outcome, StepOutcome::Rejected(_)));
        assert_eq!(session.current_step(), 0);
        assert_eq!(
            session.error_message(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn valid_step_advances_by_one_and_clears_the_message() {
        let mut session = waitlist_session();
        session.edit_field("name", "Jane");
        let _ = session.go_next(); // sets an error
        assert!(session.error_message().is_some());

        session.edit_field("email", "jane@x.com");
        let outcome = session.go_next();
        assert_eq!(outcome, StepOutcome::Advanced(1));
        assert_eq!(session.current_step(), 1);
        assert_eq!(session.error_message(), None);
    }

    #[test]
    fn edit_field_always_clears_the_error_message() {
        let mut session = waitlist_session();
        let _ = session.go_next();
        assert!(session.error_message().is_some());
        // Even an invalid value clears the message; validation is deferred.
        session.edit_field("email", "still not an email");
        assert_eq!(session.error_message(), None);
    }

    #[test]
    fn go_back_at_step_zero_is_a_no_op() {
        let mut session = waitlist_session();
        session.edit_field("name", "Jane");
        let _ = session.go_next(); // rejected, leaves a message behind
        let message = session.error_message().map(str::to_string);
        assert!(message.is_some());

        session.go_back();
        assert_eq!(session.current_step(), 0);
        assert_eq!(session.status(), SubmissionStatus::Editing);
        assert_eq!(session.field("name"), "Jane");
        // Truly no state change: even the pending message survives.
        assert_eq!(session.error_message().map(str::to_string), message);
    }

    #[test]
    fn reset_restores_the_initial_state_from_any_point() {
        let mut session = waitlist_session();
        fill_step_zero(&mut session);
        let _ = session.go_next();
        session.reset();
        assert_eq!(session.current_step(), 0);
        assert!(session.fields().is_empty());
        assert_eq!(session.status(), SubmissionStatus::Editing);
        assert_eq!(session.error_message(), None);
    }

    fn drive_to_submission(session: &mut FormSession) -> SubmissionDraft {
        fill_step_zero(session);
        assert_eq!(session.go_next(), StepOutcome::Advanced(1));

        session.edit_field("company", "Acme");
        session.edit_field("role", "Recruiter");
        session.edit_field("teamSize", "1-10");
        assert_eq!(session.go_next(), StepOutcome::Advanced(2));

        session.edit_field("rolesPerQuarter", "1-10");
        match session.go_next() {
            StepOutcome::SubmitStarted(draft) => draft,
            other => panic!("expected submission to start, got {:?}", other),
        }
    }

    #[test]
    fn reaching_the_last_step_submits_exactly_once() {
        let mut session = waitlist_session();
        let draft = drive_to_submission(&mut session);
        assert_eq!(session.status(), SubmissionStatus::Submitting);

        for expected in ["name", "email", "company", "role", "teamSize", "rolesPerQuarter"] {
            assert!(draft.fields.contains_key(expected), "missing {expected}");
        }

        // While the call is outstanding nothing else may fire or mutate.
        assert_eq!(session.go_next(), StepOutcome::Ignored);
        assert!(session.submit().is_none());
        session.edit_field("name", "Mallory");
        assert_eq!(session.field("name"), "Jane");
    }

    #[test]
    fn waitlist_end_to_end_success() {
        let mut session = waitlist_session();
        let draft = drive_to_submission(&mut session);
        assert_eq!(draft.source, "apertureiq-landing");

        session.finish_submission(Ok(()));
        assert_eq!(session.status(), SubmissionStatus::Succeeded);
        assert_eq!(session.error_message(), None);
    }

    #[test]
    fn waitlist_end_to_end_failure_keeps_fields_and_allows_retry() {
        let mut session = waitlist_session();
        let first = drive_to_submission(&mut session);

        session.finish_submission(Err(()));
        assert_eq!(session.status(), SubmissionStatus::Failed);
        assert_eq!(session.error_message(), Some(GENERIC_SUBMIT_ERROR));
        // Fields survive the failure so the user can retry as-is.
        assert_eq!(session.field("email"), "jane@x.com");

        let retry = session.submit().expect("retry should yield a draft");
        assert_eq!(retry, first);
        assert_eq!(session.status(), SubmissionStatus::Submitting);

        session.finish_submission(Ok(()));
        assert_eq!(session.status(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn succeeded_sessions_only_respond_to_reset() {
        let mut session = waitlist_session();
        let _ = drive_to_submission(&mut session);
        session.finish_submission(Ok(()));

        session.edit_field("name", "Other");
        assert_eq!(session.field("name"), "Jane");
        assert_eq!(session.go_next(), StepOutcome::Ignored);
        assert!(session.submit().is_none());

        session.reset();
        assert_eq!(session.status(), SubmissionStatus::Editing);
        assert!(session.fields().is_empty());
    }

    #[test]
    fn navigating_back_from_a_failure_returns_to_editing() {
        let mut session = waitlist_session();
        let _ = drive_to_submission(&mut session);
        session.finish_submission(Err(()));

        session.go_back();
        assert_eq!(session.status(), SubmissionStatus::Editing);
        assert_eq!(session.error_message(), None);
        assert_eq!(session.current_step(), 2);
    }

    #[test]
    fn submit_before_the_last_step_yields_nothing() {
        let mut session = waitlist_session();
        fill_step_zero(&mut session);
        assert!(session.submit().is_none());
        assert_eq!(session.status(), SubmissionStatus::Editing);
    }

    #[test]
    fn stale_outcome_reports_are_ignored() {
        let mut session = waitlist_session();
        fill_step_zero(&mut session);
        // Not submitting: a late gateway callback must not corrupt status.
        session.finish_submission(Err(()));
        assert_eq!(session.status(), SubmissionStatus::Editing);
        assert_eq!(session.error_message(), None);
    }

    #[test]
    fn single_step_email_capture_submits_from_step_zero() {
        let mut session = FormSession::new(catalog::call_clerk_email_capture());
        session.edit_field("email", "owner@shop.example");
        match session.go_next() {
            StepOutcome::SubmitStarted(draft) => {
                assert_eq!(draft.kind, FormKind::EmailCapture);
                assert_eq!(draft.fields.get("email").map(String::as_str), Some("owner@shop.example"));
            }
            other => panic!("expected submission to start, got {:?}", other),
        }
    }
}
