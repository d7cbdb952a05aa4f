//! Error types for the lead form.
//!
//! Every submission attempt ends in at most one of these. The variants map
//! one-to-one onto rows of the recovery table in [`crate::recovery`].

use chrono::NaiveDate;
use thiserror::Error;

use crate::form::FieldId;

/// A required field is empty or the email is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// First empty required field, in form order.
    #[error("missing required field: {0}")]
    MissingField(FieldId),
    /// Email does not match the address pattern.
    #[error("invalid email")]
    InvalidEmail,
}

/// The arithmetic challenge was not solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChallengeError {
    /// Answer is empty or not an integer.
    #[error("captcha answer missing or not a number")]
    Missing,
    /// Answer is a number but not the current expected sum.
    #[error("captcha mismatch")]
    Mismatch,
}

/// The insert did not go through.
///
/// Callers never distinguish these for the visitor; the split exists for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteWriteError {
    /// No backend URL configured for this build.
    #[error("lead backend is not configured")]
    NotConfigured,
    /// Request never produced a response (offline, CORS, DNS, ...).
    #[error("transport error: {0}")]
    Transport(String),
    /// Backend answered with a non-success status.
    #[error("backend rejected insert with status {status}: {body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },
    /// Record could not be serialized.
    #[error("failed to encode lead record: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for RemoteWriteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteWriteError::Encode(err.to_string())
    }
}

/// Why a call to `submit` did not end in a stored lead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A submission is already in flight; this call was dropped.
    #[error("a submission is already in progress")]
    InFlight,
    /// An insert result arrived while no submission was in flight.
    #[error("no submission in progress")]
    NotInFlight,
    /// Field validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The challenge was not solved.
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
    /// The remote insert failed.
    #[error(transparent)]
    Remote(#[from] RemoteWriteError),
}

/// Refused form input outside of `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// Selected meeting date lies before the current day.
    #[error("meeting date {date} is before today ({today})")]
    PastMeetingDate {
        /// The refused selection
        date: NaiveDate,
        /// The current calendar day at selection time
        today: NaiveDate,
    },
}

/// Site configuration could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML syntax or type mismatch.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::MissingField(FieldId::LastName).to_string(),
            "missing required field: lastName"
        );
        assert_eq!(ValidationError::InvalidEmail.to_string(), "invalid email");
        assert_eq!(ChallengeError::Mismatch.to_string(), "captcha mismatch");
        assert_eq!(
            RemoteWriteError::Rejected {
                status: 401,
                body: "Invalid API key".into()
            }
            .to_string(),
            "backend rejected insert with status 401: Invalid API key"
        );
    }

    #[test]
    fn submit_error_is_transparent() {
        let err: SubmitError = ChallengeError::Mismatch.into();
        assert_eq!(err.to_string(), "captcha mismatch");

        let err: SubmitError = RemoteWriteError::Transport("offline".into()).into();
        assert_eq!(err.to_string(), "transport error: offline");
    }
}
