//! Field identifiers and the mutable form record.
//!
//! Field ids match the DOM ids the contact section renders, so input events
//! can be routed without a lookup table on the UI side.

use std::fmt;

use chrono::NaiveDate;

/// The fixed set of text inputs on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// First name (required)
    FirstName,
    /// Last name (required)
    LastName,
    /// Email address (required, validated)
    Email,
    /// Practice name (optional)
    Practice,
    /// Project description (required)
    Message,
    /// Answer to the arithmetic challenge
    CaptchaAnswer,
}

impl FieldId {
    /// Every field, in form order.
    pub const ALL: [FieldId; 6] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Practice,
        FieldId::Message,
        FieldId::CaptchaAnswer,
    ];

    /// Fields that must be non-empty before a submission is considered,
    /// in the order they are checked.
    pub const REQUIRED: [FieldId; 4] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Message,
    ];

    /// DOM id of the input bound to this field.
    pub fn dom_id(&self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Practice => "practice",
            FieldId::Message => "message",
            FieldId::CaptchaAnswer => "captchaAnswer",
        }
    }

    /// Resolve a DOM id back to a field.
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.dom_id() == id)
    }

    /// Human-readable label, as printed above the input.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email Address",
            FieldId::Practice => "Practice Name",
            FieldId::Message => "Tell us about your project",
            FieldId::CaptchaAnswer => "Verification",
        }
    }

    /// Whether an empty value blocks submission.
    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Everything the visitor has typed or selected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// `firstName` input
    pub first_name: String,
    /// `lastName` input
    pub last_name: String,
    /// `email` input
    pub email: String,
    /// `practice` input, blank means "not given"
    pub practice_name: String,
    /// `message` textarea
    pub project_description: String,
    /// Date picker selection, never earlier than the day it was picked
    pub preferred_meeting_date: Option<NaiveDate>,
    /// `captchaAnswer` input, parsed as an integer on submit
    pub challenge_response: String,
}

impl FormState {
    /// Current text of a field.
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Practice => &self.practice_name,
            FieldId::Message => &self.project_description,
            FieldId::CaptchaAnswer => &self.challenge_response,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::Practice => &mut self.practice_name,
            FieldId::Message => &mut self.project_description,
            FieldId::CaptchaAnswer => &mut self.challenge_response,
        }
    }

    /// First required field that is empty or whitespace-only.
    pub fn first_missing(&self) -> Option<FieldId> {
        FieldId::REQUIRED
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
    }

    /// True when nothing has been entered yet.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_roundtrip() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_dom_id(field.dom_id()), Some(field));
        }
        assert_eq!(FieldId::from_dom_id("phone"), None);
    }

    #[test]
    fn display_uses_dom_ids() {
        assert_eq!(FieldId::CaptchaAnswer.to_string(), "captchaAnswer");
    }

    #[test]
    fn practice_and_captcha_are_optional_for_the_required_check() {
        assert!(!FieldId::Practice.is_required());
        assert!(!FieldId::CaptchaAnswer.is_required());
        assert!(FieldId::Message.is_required());
    }

    #[test]
    fn first_missing_follows_form_order() {
        let mut state = FormState::default();
        assert_eq!(state.first_missing(), Some(FieldId::FirstName));

        state.first_name = "John".into();
        state.email = "john@example.com".into();
        assert_eq!(state.first_missing(), Some(FieldId::LastName));

        state.last_name = "Smith".into();
        state.project_description = "   ".into();
        assert_eq!(state.first_missing(), Some(FieldId::Message));

        state.project_description = "Need a new site".into();
        assert_eq!(state.first_missing(), None);
    }

    #[test]
    fn slot_mut_targets_the_named_field() {
        let mut state = FormState::default();
        *state.slot_mut(FieldId::Practice) = "Smith Family Dental".into();
        assert_eq!(state.practice_name, "Smith Family Dental");
        assert_eq!(state.value(FieldId::Practice), "Smith Family Dental");
        assert!(!state.is_blank());
    }
}
