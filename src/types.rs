use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One scholarship listing as served by the remote API.
///
/// Every field except `id` is optional on the wire; absent fields stay absent
/// rather than defaulting to placeholder text. Records are never mutated after
/// deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScholarshipRecord {
    pub id: i64,
    #[serde(default)]
    pub award_name: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default, rename = "level_of_study")]
    pub levels_of_study: Option<Vec<String>>,
    #[serde(default, deserialize_with = "award_type_or_none")]
    pub award_type: Option<AwardType>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub qualifications: Option<String>,
    #[serde(default)]
    pub criteria: Option<String>,
    #[serde(default)]
    pub funds: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Award category offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum AwardType {
    Scholarship,
    Grant,
    Fellowship,
    Prize,
}

impl AwardType {
    /// Parse a wire/form label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Scholarship" => Some(Self::Scholarship),
            "Grant" => Some(Self::Grant),
            "Fellowship" => Some(Self::Fellowship),
            "Prize" => Some(Self::Prize),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Scholarship => "Scholarship",
            Self::Grant => "Grant",
            Self::Fellowship => "Fellowship",
            Self::Prize => "Prize",
        }
    }
}

/// An unrecognized award type on the wire is treated as absent instead of
/// failing the whole record set.
fn award_type_or_none<'de, D>(deserializer: D) -> Result<Option<AwardType>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(AwardType::from_label))
}

/// A structured filter that is either unconstrained or pinned to one value.
///
/// Replaces the "all" sentinel string of the search form: "all" maps to `Any`
/// at the form boundary and never leaks into comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter<T> {
    Any,
    Only(T),
}

impl<T> TagFilter<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl<T> Default for TagFilter<T> {
    fn default() -> Self {
        Self::Any
    }
}

/// Where the result set comes from.
///
/// `LocalFilter` runs the predicate engine over the fetched listing;
/// `DelegatedSearch` projects the remote delegate's results unfiltered, since
/// the delegate already applied its own ranking. Both states are steady and
/// the selector moves freely between them on explicit search actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    LocalFilter,
    DelegatedSearch,
}

/// The active query state, rebuilt on every search action and discarded after
/// one pass. Bounds are inclusive; `None` means the corresponding form input
/// was empty or non-numeric.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub level_of_study: TagFilter<String>,
    pub award_type: TagFilter<AwardType>,
    pub min_funds: Option<f64>,
    pub max_funds: Option<f64>,
    pub mode: SearchMode,
}
