//! The data-driven multi-step form core.
//!
//! A landing page declares its form once as a [`definition::FormDefinition`]
//! (steps, fields, constraints) and drives a [`session::FormSession`] with
//! user events. The session validates each step, gates advancement, and hands
//! a [`session::SubmissionDraft`] to the caller when the last step passes;
//! the caller performs the network call and reports the outcome back. All of
//! the decision logic lives here so it can be tested off the browser.

pub mod catalog;
pub mod definition;
pub mod session;
pub mod validation;
