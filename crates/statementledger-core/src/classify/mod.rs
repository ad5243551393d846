//! Document classification.
//!
//! Every document falls into exactly one [`Category`]:
//! - **Credit Card**: credit card statements, the only category with billing figures
//! - **Bank Statement**: account statements and e-statements from a bank
//! - **Other**: invoices, receipts and anything else
//!
//! The category is derived from subject and filename each time it is
//! needed and is never stored on the document.
//!
//! # Example
//!
//! ```ignore
//! use statementledger_core::classify::{categorize, Category};
//!
//! let groups = categorize(&documents);
//! for doc in &groups.credit_cards {
//!     // render a credit card row
//! }
//! assert_eq!(groups.len(), documents.len());
//! ```

mod classifier;
mod model;

pub use classifier::{categorize, classify};
pub use model::{Categorized, Category};
