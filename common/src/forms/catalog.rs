//! The form declarations for each landing page.
//!
//! One factory function per flow; the frontend pages clone these into the
//! engine, and the tests drive the same definitions the pages ship.

use crate::forms::definition::{
    FieldDefinition, FormDefinition, FormKind, StepDefinition, Widget,
};
use crate::forms::validation::Constraint;

fn field(
    name: &str,
    label: &str,
    placeholder: &str,
    widget: Widget,
    constraint: Option<Constraint>,
) -> FieldDefinition {
    FieldDefinition {
        name: name.to_string(),
        label: label.to_string(),
        placeholder: placeholder.to_string(),
        widget,
        constraint,
    }
}

fn step(title: &str, fields: Vec<FieldDefinition>) -> StepDefinition {
    StepDefinition {
        title: title.to_string(),
        fields,
    }
}

fn select(options: &[&str]) -> Widget {
    Widget::Select(options.iter().map(|o| o.to_string()).collect())
}

/// ApertureIQ waitlist questionnaire, three steps.
pub fn aperture_waitlist() -> FormDefinition {
    FormDefinition {
        id: "aperture-waitlist".to_string(),
        kind: FormKind::Waitlist,
        source: "apertureiq-landing".to_string(),
        success_path: "/aperture-iq/thank-you".to_string(),
        steps: vec![
            step(
                "About you",
                vec![
                    field("name", "Name", "Jane Smith", Widget::Text, Some(Constraint::NonEmpty)),
                    field(
                        "email",
                        "Work email",
                        "jane@company.com",
                        Widget::Email,
                        Some(Constraint::EmailAddress),
                    ),
                ],
            ),
            step(
                "Your company",
                vec![
                    field("company", "Company", "Acme Inc.", Widget::Text, Some(Constraint::NonEmpty)),
                    field("role", "Role", "Recruiter", Widget::Text, Some(Constraint::NonEmpty)),
                    field(
                        "teamSize",
                        "Team size",
                        "",
                        select(&["1-10", "11-50", "51-200", "200+"]),
                        Some(Constraint::NonEmpty),
                    ),
                ],
            ),
            step(
                "Hiring volume",
                vec![field(
                    "rolesPerQuarter",
                    "Roles per quarter",
                    "",
                    select(&["1-10", "11-25", "26-50", "50+"]),
                    Some(Constraint::NonEmpty),
                )],
            ),
        ],
    }
}

/// Call Clerk demo request, two steps.
pub fn call_clerk_demo() -> FormDefinition {
    FormDefinition {
        id: "call-clerk-demo".to_string(),
        kind: FormKind::DemoRequest,
        source: "callclerk-landing".to_string(),
        success_path: "/call-clerk/thank-you".to_string(),
        steps: vec![
            step(
                "About you",
                vec![
                    field("name", "Name", "Sam Lee", Widget::Text, Some(Constraint::NonEmpty)),
                    field(
                        "email",
                        "Work email",
                        "sam@business.com",
                        Widget::Email,
                        Some(Constraint::EmailAddress),
                    ),
                ],
            ),
            step(
                "Your call volume",
                vec![
                    field("company", "Business name", "Lee Plumbing", Widget::Text, Some(Constraint::NonEmpty)),
                    field(
                        "callVolume",
                        "Calls per day",
                        "",
                        select(&["Under 10", "10-50", "50-200", "200+"]),
                        Some(Constraint::NonEmpty),
                    ),
                    field(
                        "preferredTime",
                        "Preferred demo time",
                        "",
                        select(&["Morning", "Afternoon", "Evening"]),
                        None,
                    ),
                ],
            ),
        ],
    }
}

/// Call Clerk footer email capture, a single step.
pub fn call_clerk_email_capture() -> FormDefinition {
    FormDefinition {
        id: "call-clerk-updates".to_string(),
        kind: FormKind::EmailCapture,
        source: "callclerk-landing".to_string(),
        success_path: "/call-clerk/subscribed".to_string(),
        steps: vec![step(
            "Stay in the loop",
            vec![field(
                "email",
                "Email",
                "you@example.com",
                Widget::Email,
                Some(Constraint::EmailAddress),
            )],
        )],
    }
}

/// Estate Beacon contact form, two steps.
pub fn estate_contact() -> FormDefinition {
    FormDefinition {
        id: "estate-contact".to_string(),
        kind: FormKind::Contact,
        source: "estatebeacon-landing".to_string(),
        success_path: "/estate-beacon/thank-you".to_string(),
        steps: vec![
            step(
                "About you",
                vec![
                    field("name", "Name", "Alex Morgan", Widget::Text, Some(Constraint::NonEmpty)),
                    field(
                        "email",
                        "Email",
                        "alex@agency.com",
                        Widget::Email,
                        Some(Constraint::EmailAddress),
                    ),
                ],
            ),
            step(
                "Your message",
                vec![
                    field("company", "Agency", "Morgan Realty", Widget::Text, Some(Constraint::NonEmpty)),
                    field(
                        "message",
                        "Message",
                        "Tell us what you need",
                        Widget::TextArea,
                        Some(Constraint::MaxLength(1200)),
                    ),
                ],
            ),
        ],
    }
}
