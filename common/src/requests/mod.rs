//! Wire-level payloads shared by the form engine and the backend handlers.
//!
//! Each form kind serializes to a closed record type rather than an open
//! map, so the payload contract is checkable on both ends. All field names
//! serialize camelCase to match the public endpoint contract.

use serde::{Deserialize, Serialize};

use crate::forms::definition::FormKind;
use crate::forms::session::SubmissionDraft;
use crate::forms::validation::{self, Constraint};

/// Body of `POST /api/submissions/contact`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// Body of `POST /api/submissions/lead` (waitlist, demo request, email
/// capture).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questionnaire_data: Option<QuestionnaireData>,
    /// Which landing page sent this lead.
    pub source: String,
    /// Client-generated submission time, milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Form-specific questionnaire answers. A closed enum: each form contributes
/// exactly the fields it collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QuestionnaireData {
    #[serde(rename_all = "camelCase")]
    Waitlist {
        name: String,
        company: String,
        role: String,
        team_size: String,
        roles_per_quarter: String,
    },
    #[serde(rename_all = "camelCase")]
    DemoRequest {
        name: String,
        company: String,
        call_volume: String,
        preferred_time: String,
    },
}

/// Uniform response body for the submission endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// A fully-formed outbound submission, ready for the gateway. Serializes
/// untagged: the wire sees only the inner record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubmissionRequest {
    Contact(ContactRequest),
    Lead(LeadRequest),
}

impl SubmissionRequest {
    /// Endpoint path the gateway posts this payload to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SubmissionRequest::Contact(_) => "/api/submissions/contact",
            SubmissionRequest::Lead(_) => "/api/submissions/lead",
        }
    }
}

impl ContactRequest {
    /// Persistence collection for contact submissions.
    pub const COLLECTION: &'static str = "contact";

    /// Shape validation mirroring the client-side step rules, so the
    /// endpoint can answer 400 for payloads that bypassed the form.
    pub fn validate(&self) -> Result<(), String> {
        validation::check(&Constraint::NonEmpty, "name", &self.name)?;
        validation::check(&Constraint::EmailAddress, "email", &self.email)?;
        validation::check(&Constraint::NonEmpty, "company", &self.company)?;
        validation::check(&Constraint::MaxLength(1200), "Message", &self.message)?;
        Ok(())
    }
}

impl LeadRequest {
    /// Persistence collection, one per submission kind.
    pub fn collection(&self) -> &'static str {
        match &self.questionnaire_data {
            Some(QuestionnaireData::Waitlist { .. }) => "waitlist",
            Some(QuestionnaireData::DemoRequest { .. }) => "demo_request",
            None => "email_capture",
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validation::check(&Constraint::EmailAddress, "email", &self.email)?;
        Ok(())
    }
}

impl SubmissionDraft {
    /// Builds the typed wire payload from the collected fields, the form's
    /// source tag, and the caller-supplied client timestamp.
    pub fn into_request(self, timestamp: u64) -> SubmissionRequest {
        let mut fields = self.fields;
        let mut take = |name: &str| fields.remove(name).unwrap_or_default();
        match self.kind {
            FormKind::Contact => SubmissionRequest::Contact(ContactRequest {
                name: take("name"),
                email: take("email"),
                company: take("company"),
                message: take("message"),
            }),
            FormKind::Waitlist => SubmissionRequest::Lead(LeadRequest {
                email: take("email"),
                questionnaire_data: Some(QuestionnaireData::Waitlist {
                    name: take("name"),
                    company: take("company"),
                    role: take("role"),
                    team_size: take("teamSize"),
                    roles_per_quarter: take("rolesPerQuarter"),
                }),
                source: self.source,
                timestamp,
            }),
            FormKind::DemoRequest => SubmissionRequest::Lead(LeadRequest {
                email: take("email"),
                questionnaire_data: Some(QuestionnaireData::DemoRequest {
                    name: take("name"),
                    company: take("company"),
                    call_volume: take("callVolume"),
                    preferred_time: take("preferredTime"),
                }),
                source: self.source,
                timestamp,
            }),
            FormKind::EmailCapture => SubmissionRequest::Lead(LeadRequest {
                email: take("email"),
                questionnaire_data: None,
                source: self.source,
                timestamp,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn waitlist_draft() -> SubmissionDraft {
        let mut fields = HashMap::new();
        for (name, value) in [
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("company", "Acme"),
            ("role", "Recruiter"),
            ("teamSize", "1-10"),
            ("rolesPerQuarter", "1-10"),
        ] {
            fields.insert(name.to_string(), value.to_string());
        }
        SubmissionDraft {
            kind: FormKind::Waitlist,
            source: "apertureiq-landing".to_string(),
            fields,
        }
    }

    #[test]
    fn waitlist_draft_builds_a_lead_request_with_camel_case_wire_names() {
        let request = waitlist_draft().into_request(1_700_000_000_000);
        assert_eq!(request.endpoint(), "/api/submissions/lead");

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["email"], "jane@x.com");
        assert_eq!(wire["source"], "apertureiq-landing");
        assert_eq!(wire["timestamp"], 1_700_000_000_000u64);
        assert_eq!(wire["questionnaireData"]["kind"], "waitlist");
        assert_eq!(wire["questionnaireData"]["teamSize"], "1-10");
        assert_eq!(wire["questionnaireData"]["rolesPerQuarter"], "1-10");
    }

    #[test]
    fn email_capture_carries_no_questionnaire() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "owner@shop.example".to_string());
        let draft = SubmissionDraft {
            kind: FormKind::EmailCapture,
            source: "callclerk-landing".to_string(),
            fields,
        };
        let request = draft.into_request(42);
        let SubmissionRequest::Lead(lead) = &request else {
            panic!("email capture must build a lead request");
        };
        assert_eq!(lead.collection(), "email_capture");
        let wire = serde_json::to_value(&request).unwrap();
        assert!(wire.get("questionnaireData").is_none());
    }

    #[test]
    fn contact_draft_builds_the_contact_shape() {
        let mut fields = HashMap::new();
        for (name, value) in [
            ("name", "Alex"),
            ("email", "alex@agency.com"),
            ("company", "Morgan Realty"),
            ("message", "Looking for alerts in the north end."),
        ] {
            fields.insert(name.to_string(), value.to_string());
        }
        let draft = SubmissionDraft {
            kind: FormKind::Contact,
            source: "estatebeacon-landing".to_string(),
            fields,
        };
        let request = draft.into_request(0);
        assert_eq!(request.endpoint(), "/api/submissions/contact");
        let SubmissionRequest::Contact(contact) = request else {
            panic!("contact draft must build a contact request");
        };
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn contact_validation_rejects_bad_shapes() {
        let mut contact = ContactRequest {
            name: "Alex".to_string(),
            email: "alex@agency".to_string(),
            company: "Morgan Realty".to_string(),
            message: "hi".to_string(),
        };
        assert_eq!(
            contact.validate().unwrap_err(),
            "Please enter a valid email address"
        );

        contact.email = "alex@agency.com".to_string();
        contact.message = "x".repeat(1201);
        assert_eq!(
            contact.validate().unwrap_err(),
            "Message must be 1200 characters or fewer"
        );

        contact.message = "x".repeat(1200);
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn lead_validation_only_gates_on_the_email() {
        let lead = LeadRequest {
            email: "a b@c.com".to_string(),
            questionnaire_data: None,
            source: "callclerk-landing".to_string(),
            timestamp: 1,
        };
        assert!(lead.validate().is_err());
    }

    #[test]
    fn collections_are_one_per_submission_kind() {
        let base = |questionnaire| LeadRequest {
            email: "a@b.co".to_string(),
            questionnaire_data: questionnaire,
            source: "s".to_string(),
            timestamp: 0,
        };
        assert_eq!(base(None).collection(), "email_capture");
        assert_eq!(
            base(Some(QuestionnaireData::Waitlist {
                name: String::new(),
                company: String::new(),
                role: String::new(),
                team_size: String::new(),
                roles_per_quarter: String::new(),
            }))
            .collection(),
            "waitlist"
        );
        assert_eq!(
            base(Some(QuestionnaireData::DemoRequest {
                name: String::new(),
                company: String::new(),
                call_volume: String::new(),
                preferred_time: String::new(),
            }))
            .collection(),
            "demo_request"
        );
    }
}
