//! Document model types.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::Result;

/// One PDF attachment from the user's mailbox.
///
/// Documents are immutable once received; nothing in this crate mutates
/// one after deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Subject of the message carrying the attachment.
    pub subject: String,
    /// Attachment filename.
    pub filename: String,
    /// Opaque identifier of the source message.
    pub message_id: String,
    /// Server-side storage reference (not interpreted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_path: Option<String>,
    /// Total amount due on the statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount_due: Option<f64>,
    /// Minimum amount due on the statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_amount_due: Option<f64>,
    /// Payment due date.
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
    /// Days from "now" to the due date, as computed upstream.
    ///
    /// Zero means due today, negative means overdue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_left: Option<i64>,
    /// Advisory hint that the PDF is encrypted.
    ///
    /// The preview response is authoritative, not this flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_required: Option<bool>,
}

impl Document {
    /// Create a document with no billing information.
    #[must_use]
    pub fn new(
        message_id: impl Into<String>,
        filename: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            filename: filename.into(),
            message_id: message_id.into(),
            saved_path: None,
            total_amount_due: None,
            minimum_amount_due: None,
            due_date: None,
            days_left: None,
            password_required: None,
        }
    }

    /// Sets the total and minimum amounts due.
    #[must_use]
    pub const fn with_amounts(mut self, total: Option<f64>, minimum: Option<f64>) -> Self {
        self.total_amount_due = total;
        self.minimum_amount_due = minimum;
        self
    }

    /// Sets the upstream days-left figure.
    #[must_use]
    pub const fn with_days_left(mut self, days_left: i64) -> Self {
        self.days_left = Some(days_left);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the server-side storage reference.
    #[must_use]
    pub fn with_saved_path(mut self, path: impl Into<String>) -> Self {
        self.saved_path = Some(path.into());
        self
    }

    /// Identity of this document within one user's result set.
    #[must_use]
    pub fn key(&self) -> DocumentKey<'_> {
        DocumentKey {
            message_id: &self.message_id,
            filename: &self.filename,
        }
    }

    /// Days between `today` and the due date.
    ///
    /// This is a fresh computation; `days_left` keeps the upstream value.
    #[must_use]
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.due_date.map(|due| (due - today).num_days())
    }

    /// Whether the backend hinted that the PDF is encrypted.
    #[must_use]
    pub fn hints_password(&self) -> bool {
        self.password_required.unwrap_or(false)
    }
}

/// `(message_id, filename)` pair that uniquely identifies a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentKey<'a> {
    /// Source message identifier.
    pub message_id: &'a str,
    /// Attachment filename.
    pub filename: &'a str,
}

impl std::fmt::Display for DocumentKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.message_id, self.filename)
    }
}

/// Wire format of the document listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentListing {
    /// Attachments in backend order.
    #[serde(default)]
    pub pdf_attachments: Vec<Document>,
}

/// Parse a document listing body.
///
/// # Errors
///
/// Returns an error if the body is not a valid listing.
pub fn parse_listing(body: &[u8]) -> Result<Vec<Document>> {
    let listing: DocumentListing = serde_json::from_slice(body)?;
    Ok(listing.pdf_attachments)
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp; anything else becomes `None`.
fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let s = s.trim();
        s.parse::<NaiveDate>()
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
    }))
}
