//! Client-side filtering of scholarship listings.
//!
//! Pure predicate logic: no I/O, no mutation of the input records, and the
//! output keeps the input order. A record survives only if every active
//! predicate passes (logical AND). Malformed data never raises here; an
//! unparseable funds string degrades the range predicates to "pass".

use crate::types::{FilterCriteria, ScholarshipRecord, TagFilter};

/// Apply the criteria to a record set, preserving input order.
///
/// With every filter at its unconstrained default and an empty search text
/// this is the identity.
pub fn apply(records: &[ScholarshipRecord], criteria: &FilterCriteria) -> Vec<ScholarshipRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

/// Evaluate whether a single record passes every active predicate.
pub fn matches(record: &ScholarshipRecord, criteria: &FilterCriteria) -> bool {
    // Text predicate: query must appear as a case-folded substring of the
    // record's present text fields.
    if !criteria.search_text.is_empty() {
        let haystack = build_search_text(record);
        if !haystack.contains(&criteria.search_text.to_lowercase()) {
            return false;
        }
    }

    // Level of study is membership in the record's tag list, never equality
    // against the whole list. A record without levels fails once a specific
    // level is requested.
    if let TagFilter::Only(level) = &criteria.level_of_study {
        let has_level = record
            .levels_of_study
            .as_ref()
            .map(|levels| levels.iter().any(|l| l == level))
            .unwrap_or(false);
        if !has_level {
            return false;
        }
    }

    if let TagFilter::Only(kind) = &criteria.award_type {
        if record.award_type != Some(*kind) {
            return false;
        }
    }

    // Funds range, inclusive on both ends. Skipped entirely when the record's
    // funds string is absent or unparseable (fails open).
    if criteria.min_funds.is_some() || criteria.max_funds.is_some() {
        if let Some(amount) = record.funds.as_deref().and_then(parse_funds) {
            if let Some(min) = criteria.min_funds {
                if amount < min {
                    return false;
                }
            }
            if let Some(max) = criteria.max_funds {
                if amount > max {
                    return false;
                }
            }
        }
    }

    true
}

/// Extract the numeric magnitude from a funds display string like "$5,000".
///
/// Strips every character that is not an ASCII digit or a decimal point, then
/// parses the remainder. Returns `None` for strings with no usable number
/// ("varies", "Full tuition").
pub fn parse_funds(funds: &str) -> Option<f64> {
    let numeric: String = funds
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse::<f64>().ok()
}

/// Concatenate the record's present text fields, lowercased, for substring
/// search. Absent fields contribute nothing.
fn build_search_text(record: &ScholarshipRecord) -> String {
    [
        &record.award_name,
        &record.organization,
        &record.purpose,
        &record.focus,
        &record.qualifications,
        &record.criteria,
    ]
    .into_iter()
    .filter_map(|field| field.as_deref())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AwardType;

    fn record(id: i64, name: &str) -> ScholarshipRecord {
        ScholarshipRecord {
            id,
            award_name: Some(name.to_string()),
            organization: None,
            levels_of_study: None,
            award_type: None,
            purpose: None,
            focus: None,
            qualifications: None,
            criteria: None,
            funds: None,
            deadline: None,
            website: None,
        }
    }

    fn sample_set() -> Vec<ScholarshipRecord> {
        vec![
            ScholarshipRecord {
                levels_of_study: Some(vec![
                    "High School".to_string(),
                    "Vocational".to_string(),
                ]),
                award_type: Some(AwardType::Scholarship),
                organization: Some("Future Engineers Fund".to_string()),
                focus: Some("Engineering".to_string()),
                funds: Some("$5,000".to_string()),
                ..record(1, "STEM Excellence Award")
            },
            ScholarshipRecord {
                levels_of_study: Some(vec!["Graduate Degree".to_string()]),
                award_type: Some(AwardType::Fellowship),
                purpose: Some("Support doctoral research".to_string()),
                funds: Some("$20,000".to_string()),
                ..record(2, "Research Fellowship")
            },
            ScholarshipRecord {
                funds: Some("varies".to_string()),
                ..record(3, "Community Spirit Grant")
            },
        ]
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let records = sample_set();
        let out = apply(&records, &FilterCriteria::default());
        assert_eq!(out, records);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let out = apply(&[], &FilterCriteria::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_text_search_is_case_insensitive_substring() {
        let records = sample_set();
        let criteria = FilterCriteria {
            search_text: "stem".to_string(),
            ..Default::default()
        };
        let out = apply(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);
    }

    #[test]
    fn test_text_search_spans_all_present_fields() {
        let records = sample_set();
        // "doctoral" only appears in record 2's purpose field.
        let criteria = FilterCriteria {
            search_text: "DOCTORAL".to_string(),
            ..Default::default()
        };
        let out = apply(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);
    }

    #[test]
    fn test_text_search_skips_absent_fields() {
        // Record 3 has only a name; searching for it must not trip over the
        // absent fields, and a miss must not match placeholder text.
        let records = sample_set();
        let criteria = FilterCriteria {
            search_text: "community".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&records, &criteria).len(), 1);

        let criteria = FilterCriteria {
            search_text: "none".to_string(),
            ..Default::default()
        };
        assert!(apply(&records, &criteria).is_empty());
    }

    #[test]
    fn test_level_filter_is_membership() {
        let records = sample_set();
        let criteria = FilterCriteria {
            level_of_study: TagFilter::Only("Vocational".to_string()),
            ..Default::default()
        };
        let out = apply(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);

        // Membership, not whole-sequence equality: the record listing
        // ["High School", "Vocational"] matches neither of these.
        let criteria = FilterCriteria {
            level_of_study: TagFilter::Only("Graduate Degree".to_string()),
            ..Default::default()
        };
        assert!(!matches(&records[0], &criteria));

        let criteria = FilterCriteria {
            level_of_study: TagFilter::Only("Associate Degree".to_string()),
            ..Default::default()
        };
        assert!(apply(&records, &criteria).is_empty());
    }

    #[test]
    fn test_level_filter_fails_records_without_levels() {
        let records = sample_set();
        let criteria = FilterCriteria {
            level_of_study: TagFilter::Only("High School".to_string()),
            ..Default::default()
        };
        // Record 3 has no levels listed, so it cannot match a specific level.
        let out = apply(&records, &criteria);
        assert!(out.iter().all(|r| r.id != 3));
    }

    #[test]
    fn test_award_type_filter_is_exact() {
        let records = sample_set();
        let criteria = FilterCriteria {
            award_type: TagFilter::Only(AwardType::Fellowship),
            ..Default::default()
        };
        let out = apply(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);
    }

    #[test]
    fn test_award_type_filter_fails_records_without_type() {
        let records = sample_set();
        let criteria = FilterCriteria {
            award_type: TagFilter::Only(AwardType::Scholarship),
            ..Default::default()
        };
        let out = apply(&records, &criteria);
        assert!(out.iter().all(|r| r.id != 3));
    }

    #[test]
    fn test_funds_range_inclusive() {
        let records = sample_set();
        let criteria = FilterCriteria {
            min_funds: Some(4000.0),
            max_funds: Some(6000.0),
            ..Default::default()
        };
        let out = apply(&records, &criteria);
        assert!(out.iter().any(|r| r.id == 1));
        assert!(out.iter().all(|r| r.id != 2));

        // Exact boundary values stay included.
        let criteria = FilterCriteria {
            min_funds: Some(5000.0),
            max_funds: Some(5000.0),
            ..Default::default()
        };
        assert!(apply(&records, &criteria).iter().any(|r| r.id == 1));
    }

    #[test]
    fn test_max_funds_excludes_larger_awards() {
        let records = sample_set();
        let criteria = FilterCriteria {
            max_funds: Some(4000.0),
            ..Default::default()
        };
        let out = apply(&records, &criteria);
        assert!(out.iter().all(|r| r.id != 1));
        assert!(out.iter().all(|r| r.id != 2));
    }

    #[test]
    fn test_unparseable_funds_fails_open() {
        let records = sample_set();
        let criteria = FilterCriteria {
            min_funds: Some(100.0),
            ..Default::default()
        };
        // "varies" cannot be parsed, so record 3 is not excluded.
        let out = apply(&records, &criteria);
        assert!(out.iter().any(|r| r.id == 3));
    }

    #[test]
    fn test_absent_funds_skips_range_predicates() {
        let records = vec![record(9, "No Funds Listed")];
        let criteria = FilterCriteria {
            min_funds: Some(1000.0),
            max_funds: Some(2000.0),
            ..Default::default()
        };
        assert_eq!(apply(&records, &criteria).len(), 1);
    }

    #[test]
    fn test_parse_funds() {
        assert_eq!(parse_funds("$5,000"), Some(5000.0));
        assert_eq!(parse_funds("$1,250.50"), Some(1250.5));
        assert_eq!(parse_funds("5000"), Some(5000.0));
        assert_eq!(parse_funds("varies"), None);
        assert_eq!(parse_funds(""), None);
        // Two decimal points leave nothing parseable; the predicate fails open.
        assert_eq!(parse_funds("1.2.3"), None);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let records = sample_set();
        let criteria = FilterCriteria {
            search_text: "engineering".to_string(),
            level_of_study: TagFilter::Only("High School".to_string()),
            award_type: TagFilter::Only(AwardType::Scholarship),
            min_funds: Some(1000.0),
            max_funds: Some(10000.0),
            ..Default::default()
        };
        let out = apply(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);

        // Flipping one predicate empties the result.
        let criteria = FilterCriteria {
            award_type: TagFilter::Only(AwardType::Grant),
            ..criteria
        };
        assert!(apply(&records, &criteria).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample_set();
        let criteria = FilterCriteria {
            search_text: "award".to_string(),
            min_funds: Some(1000.0),
            ..Default::default()
        };
        let once = apply(&records, &criteria);
        let twice = apply(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_narrowing_min_funds_is_monotonic() {
        let records = sample_set();
        let mut previous = records.len();
        for min in [0.0, 1000.0, 6000.0, 25000.0] {
            let criteria = FilterCriteria {
                min_funds: Some(min),
                ..Default::default()
            };
            let count = apply(&records, &criteria).len();
            assert!(count <= previous, "raising min_funds to {min} grew the result set");
            previous = count;
        }
    }

    #[test]
    fn test_output_preserves_input_order() {
        let records = sample_set();
        let criteria = FilterCriteria {
            search_text: "r".to_string(),
            ..Default::default()
        };
        let out = apply(&records, &criteria);
        let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_input_records_are_untouched() {
        let records = sample_set();
        let snapshot = records.clone();
        let criteria = FilterCriteria {
            search_text: "stem".to_string(),
            min_funds: Some(100.0),
            ..Default::default()
        };
        let _ = apply(&records, &criteria);
        assert_eq!(records, snapshot);
    }
}
