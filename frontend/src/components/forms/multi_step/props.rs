//! Properties for the generic multi-step form component.

use common::forms::definition::FormDefinition;
use yew::prelude::*;

/// Configuration passed by a landing page: the complete form declaration
/// (steps, fields, constraints, source tag, success path). The definition is
/// cloned into the session when the component mounts.
#[derive(Properties, PartialEq, Clone)]
pub struct MultiStepFormProps {
    pub definition: FormDefinition,
}
