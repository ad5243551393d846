//! # statementledger-client
//!
//! HTTP client for the `StatementLedger` document backend.
//!
//! ## Features
//!
//! - **Document listing**: `GET /gmail/list-pdfs`
//! - **Preview retrieval**: `POST /gmail/preview`, with password retry signalling
//! - **Download links**: `GET /gmail/download` URL construction
//!
//! [`BackendClient`] implements the core's [`DocumentSource`] and
//! [`PreviewBackend`] traits, so it plugs straight into a
//! [`PreviewController`](statementledger_core::PreviewController).
//!
//! ## Quick Start
//!
//! ```ignore
//! use statementledger_client::BackendClient;
//! use statementledger_core::{UserIdentity, categorize, summarize};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BackendClient::new("http://localhost:8000")?;
//!     let user = UserIdentity::new("priya@example.com");
//!
//!     let documents = client.list_documents(&user).await?;
//!     let groups = categorize(&documents);
//!     let summary = summarize(groups.credit_cards.iter().copied());
//!     println!("Total due: {}", summary.total_amount);
//!     Ok(())
//! }
//! ```
//!
//! [`DocumentSource`]: statementledger_core::DocumentSource
//! [`PreviewBackend`]: statementledger_core::PreviewBackend

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
pub mod endpoint;
mod error;

pub use client::{BackendClient, classify_failure};
pub use endpoint::Endpoints;
pub use error::{Error, Result};
