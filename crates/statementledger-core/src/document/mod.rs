//! Mailbox PDF attachments as seen by the dashboard.
//!
//! Documents arrive from the backend already parsed: billing fields are
//! present only when the backend recognised a credit card statement and
//! managed to read it. A missing amount is never the same thing as a zero
//! amount, so every billing field is an `Option`.

mod model;

pub use model::{Document, DocumentKey, DocumentListing, parse_listing};
