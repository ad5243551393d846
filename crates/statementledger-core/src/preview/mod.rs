//! Preview sessions for possibly password-protected PDFs.
//!
//! This module provides:
//! - **[`PreviewSession`]**: a synchronous state machine
//!   (`Idle → Loading → AwaitingPassword | Ready | Failed`)
//! - **[`ContentStore`]**: ownership of decrypted preview bytes
//! - **[`PreviewController`]**: drives a session against a [`PreviewBackend`](crate::PreviewBackend)
//!
//! # Stale responses
//!
//! Every fetch is tagged with the session generation current when it was
//! issued. Reopening or submitting a new password bumps the generation, and
//! a response carrying an older generation is dropped without touching the
//! session. Arrival order does not matter.
//!
//! # Example
//!
//! ```ignore
//! use statementledger_core::preview::{MemoryStore, PreviewSession, PreviewStatus};
//!
//! let mut session = PreviewSession::new(MemoryStore::default());
//! let ticket = session.open(document);
//! let outcome = backend.fetch_preview(&ticket.request(&user)).await;
//! session.resolve(ticket.generation(), outcome);
//!
//! if session.status() == PreviewStatus::AwaitingPassword {
//!     let retry = session.submit_password("secret").expect("awaiting password");
//!     // fetch and resolve again
//! }
//! ```

mod content;
mod controller;
mod error;
mod session;
mod state;

pub use content::{ContentStore, MemoryStore, PreviewContent};
pub use controller::{PreviewController, TIMEOUT_MESSAGE};
pub use error::{DEFAULT_FAILURE_MESSAGE, INCORRECT_PASSWORD_MESSAGE, PreviewError};
pub use session::{FetchTicket, PreviewSession, Resolution};
pub use state::{PreviewState, PreviewStatus};
