//! # statementledger-core
//!
//! Core business logic for `StatementLedger`.
//!
//! This crate provides:
//! - The document model for mailbox PDF attachments
//! - Search filtering over subjects and filenames
//! - **Document Classification** - bank statements, credit card statements, everything else
//! - **Billing Summary** - totals and still-collectible dues for credit card statements
//! - **Preview Sessions** - password-aware preview retrieval with stale response protection
//! - Display helpers (currency, statement period, due urgency)
//!
//! Classification and aggregation are pure functions over borrowed documents.
//! The preview session is the only stateful component; it talks to the
//! outside world through the [`PreviewBackend`] trait.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod document;
mod error;
pub mod format;
pub mod preview;
pub mod search;
pub mod service;
pub mod summary;
pub mod view;

pub use classify::{Categorized, Category, categorize, classify};
pub use document::{Document, DocumentKey, DocumentListing, parse_listing};
pub use error::{Error, Result};
pub use format::{DueUrgency, format_due, format_inr, statement_period, username_from_email};
pub use preview::{
    ContentStore, FetchTicket, MemoryStore, PreviewContent, PreviewController, PreviewError,
    PreviewSession, PreviewState, PreviewStatus, Resolution,
};
pub use search::filter_documents;
pub use service::{DocumentSource, PreviewBackend, PreviewRequest, UserIdentity};
pub use summary::{CreditCardSummary, summarize};
pub use view::{DocumentView, Section};
