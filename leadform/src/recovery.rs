//! What the form does after each kind of submission outcome.
//!
//! Challenge regeneration is easy to get backwards, so it is written down as
//! a table instead of falling out of a shared reset path:
//!
//! | Outcome               | Notice  | New challenge | Reset form |
//! |-----------------------|---------|---------------|------------|
//! | `MissingField`        | error   | no            | no         |
//! | `InvalidEmail`        | error   | no            | no         |
//! | `ChallengeUnanswered` | error   | yes           | no         |
//! | `ChallengeMismatch`   | error   | yes           | no         |
//! | `RemoteFailure`       | error   | no            | no         |
//! | `Delivered`           | success | yes           | yes        |
//!
//! Validation failures keep the challenge so the visitor can fix a field
//! without solving a new puzzle. A remote failure keeps it too: the answer
//! already matched and stays valid for an immediate retry.

use crate::error::SubmitError;
use crate::notify::Notice;

/// Outcome of one submission attempt that reached the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A required field was empty.
    MissingField,
    /// Email failed the address pattern.
    InvalidEmail,
    /// Challenge answer blank or not a number.
    ChallengeUnanswered,
    /// Challenge answer is a number but the wrong one.
    ChallengeMismatch,
    /// Insert failed.
    RemoteFailure,
    /// Insert succeeded.
    Delivered,
}

impl Outcome {
    /// Classify a submit error. Phase misuse (`InFlight`, `NotInFlight`)
    /// never reaches the table.
    pub fn from_error(err: &SubmitError) -> Option<Self> {
        match err {
            SubmitError::InFlight | SubmitError::NotInFlight => None,
            SubmitError::Validation(crate::ValidationError::MissingField(_)) => {
                Some(Outcome::MissingField)
            }
            SubmitError::Validation(crate::ValidationError::InvalidEmail) => {
                Some(Outcome::InvalidEmail)
            }
            SubmitError::Challenge(crate::ChallengeError::Missing) => {
                Some(Outcome::ChallengeUnanswered)
            }
            SubmitError::Challenge(crate::ChallengeError::Mismatch) => {
                Some(Outcome::ChallengeMismatch)
            }
            SubmitError::Remote(_) => Some(Outcome::RemoteFailure),
        }
    }

    /// Short label for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Outcome::MissingField => "missing_field",
            Outcome::InvalidEmail => "invalid_email",
            Outcome::ChallengeUnanswered => "challenge_unanswered",
            Outcome::ChallengeMismatch => "challenge_mismatch",
            Outcome::RemoteFailure => "remote_failure",
            Outcome::Delivered => "delivered",
        }
    }
}

/// One row of the recovery table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovery {
    /// Draw a new challenge and clear the typed answer.
    pub regenerate_challenge: bool,
    /// Clear every field back to its default.
    pub reset_form: bool,
}

impl Recovery {
    /// Look up the row for `outcome`.
    pub const fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::MissingField | Outcome::InvalidEmail | Outcome::RemoteFailure => Self {
                regenerate_challenge: false,
                reset_form: false,
            },
            Outcome::ChallengeUnanswered | Outcome::ChallengeMismatch => Self {
                regenerate_challenge: true,
                reset_form: false,
            },
            Outcome::Delivered => Self {
                regenerate_challenge: true,
                reset_form: true,
            },
        }
    }

    /// Toast raised for `outcome`.
    pub fn notice(outcome: Outcome) -> Notice {
        match outcome {
            Outcome::MissingField => Notice::error(
                "Missing information",
                "Please fill in all required fields.",
            ),
            Outcome::InvalidEmail => {
                Notice::error("Invalid email", "Please enter a valid email address.")
            }
            Outcome::ChallengeUnanswered => Notice::error(
                "Verification required",
                "Please answer the verification question with a number.",
            ),
            Outcome::ChallengeMismatch => Notice::error(
                "Verification failed",
                "Incorrect answer. Please solve the new question and try again.",
            ),
            Outcome::RemoteFailure => Notice::error(
                "Submission failed",
                "Something went wrong sending your request. Please try again.",
            ),
            Outcome::Delivered => Notice::success(
                "Request sent!",
                "Thanks for reaching out. We'll get back to you within 2 hours during business hours.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ChallengeError, RemoteWriteError, ValidationError};
    use crate::form::FieldId;
    use crate::notify::Severity;

    #[test]
    fn only_challenge_and_delivery_regenerate() {
        let regenerating: Vec<Outcome> = [
            Outcome::MissingField,
            Outcome::InvalidEmail,
            Outcome::ChallengeUnanswered,
            Outcome::ChallengeMismatch,
            Outcome::RemoteFailure,
            Outcome::Delivered,
        ]
        .into_iter()
        .filter(|o| Recovery::for_outcome(*o).regenerate_challenge)
        .collect();
        assert_eq!(
            regenerating,
            vec![
                Outcome::ChallengeUnanswered,
                Outcome::ChallengeMismatch,
                Outcome::Delivered
            ]
        );
    }

    #[test]
    fn only_delivery_resets() {
        assert!(Recovery::for_outcome(Outcome::Delivered).reset_form);
        assert!(!Recovery::for_outcome(Outcome::RemoteFailure).reset_form);
        assert!(!Recovery::for_outcome(Outcome::ChallengeMismatch).reset_form);
    }

    #[test]
    fn classifies_errors() {
        let missing = SubmitError::from(ValidationError::MissingField(FieldId::Email));
        assert_eq!(Outcome::from_error(&missing), Some(Outcome::MissingField));

        let blank = SubmitError::from(ChallengeError::Missing);
        assert_eq!(Outcome::from_error(&blank), Some(Outcome::ChallengeUnanswered));

        let wrong = SubmitError::from(ChallengeError::Mismatch);
        assert_eq!(Outcome::from_error(&wrong), Some(Outcome::ChallengeMismatch));

        let remote = SubmitError::from(RemoteWriteError::NotConfigured);
        assert_eq!(Outcome::from_error(&remote), Some(Outcome::RemoteFailure));

        assert_eq!(Outcome::from_error(&SubmitError::InFlight), None);
        assert_eq!(Outcome::from_error(&SubmitError::NotInFlight), None);
    }

    #[test]
    fn blank_answer_is_not_called_incorrect() {
        let notice = Recovery::notice(Outcome::ChallengeUnanswered);
        assert_eq!(notice.title, "Verification required");
        assert!(!notice.description.contains("Incorrect"));
        assert_eq!(notice.severity, Severity::Error);
    }

    #[test]
    fn notice_severity_matches_outcome() {
        assert_eq!(
            Recovery::notice(Outcome::Delivered).severity,
            Severity::Success
        );
        assert_eq!(
            Recovery::notice(Outcome::RemoteFailure).severity,
            Severity::Error
        );
    }
}
