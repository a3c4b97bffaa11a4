//! Static declarations of the forms shown on the landing pages.
//!
//! A `FormDefinition` is plain data: the fixed sequence of steps, the fields
//! each step shows, and the constraint (if any) each field must satisfy
//! before the session may advance past its step. The structs derive
//! `PartialEq` and `Clone` so a definition can be passed to the frontend
//! engine as a Yew property.

use crate::forms::validation::Constraint;

/// Which wire shape a completed form submits as, and which persistence
/// collection the backend files the document under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Waitlist,
    DemoRequest,
    EmailCapture,
}

/// Input control rendered for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Text,
    Email,
    TextArea,
    /// Dropdown with a fixed option list.
    Select(Vec<String>),
}

/// One input field within a step.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    /// Key used in the session's field map and in the submission payload.
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub widget: Widget,
    /// Present iff the field is required. Constraints are checked in the
    /// order fields are declared; the first failure is surfaced.
    pub constraint: Option<Constraint>,
}

/// One step of the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDefinition {
    pub title: String,
    pub fields: Vec<FieldDefinition>,
}

/// The complete declaration of one landing-page form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefinition {
    /// Stable identifier, used to tag analytics events.
    pub id: String,
    pub kind: FormKind,
    /// Source tag stamped into lead payloads (which landing page sent this).
    pub source: String,
    /// Shareable URL pushed onto the history stack after a successful
    /// submission.
    pub success_path: String,
    pub steps: Vec<StepDefinition>,
}

impl FormDefinition {
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }
}
