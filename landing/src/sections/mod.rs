// Landing page sections
// Developed by the Carepoint Digital team (c)2025

mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod services;
mod toast;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use services::Services;
pub use toast::{ToastQueue, Toaster};

/// Anchor id of the contact section; every call-to-action scrolls here.
pub const CONTACT_ANCHOR: &str = "contact-section";
