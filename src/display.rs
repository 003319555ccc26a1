//! Result projection.
//!
//! Maps filtered records into display-ready cards. The two derived fields
//! (deadline text and funds badge) are computed here at projection time and
//! never written back onto the source records. Order is inherited unchanged
//! from the filter's output, and projecting the same records again yields the
//! same cards.

use crate::types::ScholarshipRecord;
use chrono::NaiveDate;

/// Badge text shown when a scholarship has no deadline on record.
const NO_DEADLINE: &str = "N/A";

/// Everything the listing card renders for one scholarship.
#[derive(Debug, Clone, PartialEq)]
pub struct ScholarshipCard {
    pub id: i64,
    pub award_name: String,
    pub organization: String,
    pub levels_of_study: Vec<String>,
    pub award_type: String,
    pub purpose: String,
    pub focus: String,
    pub qualifications: String,
    /// Formatted deadline, or the fixed no-deadline placeholder.
    pub deadline_display: String,
    /// The raw funds string as served; numeric extraction is a filtering
    /// concern and never reformats what the user sees.
    pub funds_badge: String,
    pub website: String,
}

/// Project filtered records into cards, preserving order.
pub fn project(records: &[ScholarshipRecord]) -> Vec<ScholarshipCard> {
    records.iter().map(card).collect()
}

fn card(record: &ScholarshipRecord) -> ScholarshipCard {
    ScholarshipCard {
        id: record.id,
        award_name: record.award_name.clone().unwrap_or_default(),
        organization: record.organization.clone().unwrap_or_default(),
        levels_of_study: record.levels_of_study.clone().unwrap_or_default(),
        award_type: record
            .award_type
            .map(|kind| kind.label().to_string())
            .unwrap_or_default(),
        purpose: record.purpose.clone().unwrap_or_default(),
        focus: record.focus.clone().unwrap_or_default(),
        qualifications: record.qualifications.clone().unwrap_or_default(),
        deadline_display: record
            .deadline
            .map(format_deadline)
            .unwrap_or_else(|| NO_DEADLINE.to_string()),
        funds_badge: record.funds.clone().unwrap_or_default(),
        website: record.website.clone().unwrap_or_default(),
    }
}

/// Format a deadline for the card badge, e.g. "June 30, 2026".
fn format_deadline(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
