//! Component state for the generic multi-step form.

use common::forms::definition::FormDefinition;
use common::forms::session::FormSession;
use uuid::Uuid;

/// State container for the `MultiStepFormComponent`.
///
/// The wizard logic lives entirely in the [`FormSession`]; this struct only
/// adds what the browser layer needs. Fields are `pub` because they are
/// accessed by the `view` and `update` modules.
pub struct MultiStepFormComponent {
    /// The state machine driving the wizard.
    pub session: FormSession,

    /// Correlates this session's analytics events.
    pub session_id: String,
}

impl MultiStepFormComponent {
    pub fn new(definition: FormDefinition) -> Self {
        Self {
            session: FormSession::new(definition),
            session_id: Uuid::new_v4().to_string(),
        }
    }
}
