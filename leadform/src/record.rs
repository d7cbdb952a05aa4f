//! Row shape of the hosted leads table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::form::FormState;

/// One lead, as inserted. Column names are the table's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    /// `first_name text not null`
    pub first_name: String,
    /// `last_name text not null`
    pub last_name: String,
    /// `email text not null`
    pub email: String,
    /// `null` when the visitor left the practice name blank.
    pub practice_name: Option<String>,
    /// `project_description text not null`
    pub project_description: String,
    /// Serialized as `YYYY-MM-DD`; left out of the payload when not chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_meeting_date: Option<NaiveDate>,
}

impl LeadRecord {
    /// Build the row from validated form state.
    ///
    /// Text fields are trimmed; the challenge answer is not part of the row.
    pub fn from_form(state: &FormState) -> Self {
        let practice = state.practice_name.trim();
        Self {
            first_name: state.first_name.trim().to_string(),
            last_name: state.last_name.trim().to_string(),
            email: state.email.trim().to_string(),
            practice_name: (!practice.is_empty()).then(|| practice.to_string()),
            project_description: state.project_description.trim().to_string(),
            preferred_meeting_date: state.preferred_meeting_date,
        }
    }

    /// JSON body for the insert call.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn filled() -> FormState {
        FormState {
            first_name: " John ".into(),
            last_name: "Smith".into(),
            email: "john@example.com".into(),
            practice_name: "   ".into(),
            project_description: "Need a new site".into(),
            preferred_meeting_date: None,
            challenge_response: "7".into(),
        }
    }

    #[test]
    fn blank_practice_becomes_null_and_date_is_omitted() {
        let record = LeadRecord::from_form(&filled());
        let value: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "first_name": "John",
                "last_name": "Smith",
                "email": "john@example.com",
                "practice_name": null,
                "project_description": "Need a new site",
            })
        );
    }

    #[test]
    fn meeting_date_is_an_iso_calendar_date() {
        let mut state = filled();
        state.practice_name = "Smith Family Dental".into();
        state.preferred_meeting_date = NaiveDate::from_ymd_opt(2025, 4, 2);

        let record = LeadRecord::from_form(&state);
        let value: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["preferred_meeting_date"], "2025-04-02");
        assert_eq!(value["practice_name"], "Smith Family Dental");
    }

    #[test]
    fn challenge_answer_is_not_sent() {
        let json = LeadRecord::from_form(&filled()).to_json().unwrap();
        assert!(!json.contains("challenge"));
    }
}
