//! # leadform
//!
//! The lead capture form behind the Carepoint landing page contact section.
//!
//! The crate owns everything the contact form decides on its own: field
//! state, email validation, the arithmetic challenge, the rules for what
//! happens after each kind of failure, and the one insert per accepted
//! submission. Rendering stays in the `landing` crate; the controller only
//! talks to two collaborators:
//!
//! - a [`Notifier`] that shows toast-style [`Notice`]s
//! - a [`LeadSink`] that writes one [`LeadRecord`] to the hosted table
//!
//! ## Quick Start
//!
//! ```rust
//! use leadform::{FieldId, LeadForm, Notice, Notifier};
//!
//! struct Silent;
//! impl Notifier for Silent {
//!     fn notify(&self, _notice: Notice) {}
//! }
//!
//! let mut form = LeadForm::new(Silent);
//! form.update_field(FieldId::Email, "not-an-email");
//! assert!(form.email_error().is_some());
//!
//! form.update_field(FieldId::Email, "john@example.com");
//! assert!(form.email_error().is_none());
//! ```
//!
//! ## Submission phases
//!
//! [`LeadForm::submit`] awaits the sink directly. UIs that keep the form in a
//! reactive cell use the split form instead, so no borrow is held across the
//! network call:
//!
//! ```rust,ignore
//! let record = form.update(|f| f.begin_submit())?;
//! let outcome = sink.insert(&record).await;
//! form.update(|f| f.finish_submit(outcome));
//! ```
//!
//! ---
//!
//! Developed by the Carepoint Digital team (c)2025

#![warn(missing_docs)]

pub mod challenge;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod notify;
pub mod record;
pub mod recovery;
pub mod remote;
pub mod validate;

pub use challenge::Challenge;
pub use config::{BackendConfig, LoggingConfig, SiteConfig};
pub use controller::{FormPhase, LeadForm};
pub use error::{
    ChallengeError, ConfigError, FormError, RemoteWriteError, SubmitError, ValidationError,
};
pub use form::{FieldId, FormState};
pub use notify::{Notice, Notifier, Severity};
pub use record::LeadRecord;
pub use recovery::{Outcome, Recovery};
pub use remote::{InsertRequest, LeadSink};
