//! Display helpers for dashboard figures.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Placeholder for values that are not known.
pub const MISSING: &str = "-";

static MONTH_YEAR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[\s-]*(\d{4})",
    )
    .ok()
});

/// Format an amount as Indian rupees with lakh/crore digit grouping.
///
/// Always shows two fraction digits, e.g. `₹1,23,456.50`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_inr(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return MISSING.to_string();
    };

    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}₹{}.{:02}", group_indian(cents / 100), cents % 100)
}

/// Last three digits, then groups of two: `12,34,567`.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Statement period named in a subject line, e.g. `"March 2024"`.
///
/// Returns `"Recent"` when the subject names no month and year.
#[must_use]
pub fn statement_period(subject: &str) -> String {
    MONTH_YEAR
        .as_ref()
        .and_then(|re| re.captures(subject))
        .map_or_else(
            || "Recent".to_string(),
            |caps| format!("{} {}", &caps[1], &caps[2]),
        )
}

/// Format a due date for display.
#[must_use]
pub fn format_due(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || MISSING.to_string(),
        |d| d.format("%d %b %Y").to_string(),
    )
}

/// Name shown for the signed-in user: the local part of the email address.
#[must_use]
pub fn username_from_email(email: Option<&str>) -> String {
    email
        .filter(|e| !e.is_empty())
        .and_then(|e| e.split('@').next())
        .unwrap_or("User")
        .to_string()
}

/// How pressing a due date is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueUrgency {
    /// Three days or fewer, including overdue.
    Critical,
    /// Within a week.
    Soon,
    /// More than a week away.
    Comfortable,
}

impl DueUrgency {
    /// Bucket an upstream days-left figure.
    #[must_use]
    pub const fn from_days_left(days_left: i64) -> Self {
        if days_left <= 3 {
            Self::Critical
        } else if days_left <= 7 {
            Self::Soon
        } else {
            Self::Comfortable
        }
    }

    /// Short label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Soon => "soon",
            Self::Comfortable => "ok",
        }
    }
}
