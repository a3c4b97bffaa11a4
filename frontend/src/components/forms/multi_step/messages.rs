use crate::gateway::GatewayError;

#[derive(Clone)]
pub enum Msg {
    /// A field on the current step changed.
    Edit { name: String, value: String },
    /// Validate the current step and advance (submits from the last step).
    Next,
    Back,
    /// Re-attempt the submission after a failure.
    Retry,
    /// The gateway call settled.
    Resolved(Result<(), GatewayError>),
    /// Discard everything and start over.
    Reset,
}
