//! Aggregate statistics over a snapshot of admins.
//!
//! [`compute_statistics`] is a pure, total function: it never fails, never
//! mutates its input and returns the same summary for the same records in the
//! same order.
//!
//! Two populations are involved:
//!
//! - `total_admins` and `average_age` cover **every** record in the snapshot.
//! - The senior list and the youngest/oldest names only consider **active**
//!   records (see [`is_active`]).

use serde::{Deserialize, Serialize};

use crate::types::AdminRecord;

/// Name reported for youngest/oldest when no active admin exists.
pub const NO_ADMINS_FOUND: &str = "No admins found";

/// Aggregate view over a snapshot of admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    /// Mean age over every record that has an age; `0.0` when there are none.
    pub average_age: f64,
    /// Number of records in the snapshot.
    pub total_admins: usize,
    /// Emails of active admins at or above the threshold, ascending.
    pub senior_admin_emails: Vec<String>,
    /// Name of the youngest active admin.
    #[serde(rename = "youngestAdmin")]
    pub youngest_admin_name: String,
    /// Name of the oldest active admin.
    #[serde(rename = "oldestAdmin")]
    pub oldest_admin_name: String,
}

/// Whether a record takes part in the senior and youngest/oldest figures.
///
/// Requires an email and an age strictly greater than zero. An age of exactly
/// zero is inactive.
#[must_use]
pub fn is_active(record: &AdminRecord) -> bool {
    record.email.is_some() && record.age.is_some_and(|age| age > 0)
}

/// Compute statistics for `records` with the given senior age threshold.
///
/// The threshold is not range-checked; zero and negative values are accepted.
/// Ties on youngest or oldest go to the record that appears first.
///
/// # Example
///
/// ```
/// use adminhub_core::{AdminRecord, Email, compute_statistics};
///
/// let record = |name: &str, email: &str, age| AdminRecord {
///     id: None,
///     name: name.to_string(),
///     email: Some(Email::parse(email).unwrap()),
///     age: Some(age),
/// };
/// let records = [record("A", "a@x", 20), record("B", "b@x", 40)];
///
/// let summary = compute_statistics(&records, 30);
/// assert_eq!(summary.total_admins, 2);
/// assert_eq!(summary.senior_admin_emails, ["b@x"]);
/// assert_eq!(summary.youngest_admin_name, "A");
/// assert_eq!(summary.oldest_admin_name, "B");
/// ```
#[must_use]
pub fn compute_statistics(records: &[AdminRecord], senior_age_threshold: i32) -> StatisticsSummary {
    let active: Vec<(&AdminRecord, i32)> = records
        .iter()
        .filter(|record| is_active(record))
        .filter_map(|record| record.age.map(|age| (record, age)))
        .collect();

    let mut senior_admin_emails: Vec<String> = active
        .iter()
        .filter(|(_, age)| *age >= senior_age_threshold)
        .filter_map(|(record, _)| record.email.as_ref().map(|email| email.as_str().to_owned()))
        .collect();
    senior_admin_emails.sort_unstable();

    // min_by_key keeps the first minimum; max needs an explicit strict comparison
    // so the first maximum wins as well.
    let youngest = active.iter().min_by_key(|(_, age)| *age);
    let oldest = active
        .iter()
        .fold(None::<&(&AdminRecord, i32)>, |best, candidate| match best {
            Some(current) if current.1 >= candidate.1 => Some(current),
            _ => Some(candidate),
        });

    StatisticsSummary {
        average_age: average_age(records),
        total_admins: records.len(),
        senior_admin_emails,
        youngest_admin_name: name_or_sentinel(youngest.map(|(record, _)| *record)),
        oldest_admin_name: name_or_sentinel(oldest.map(|(record, _)| *record)),
    }
}

fn average_age(records: &[AdminRecord]) -> f64 {
    let (sum, count) = records
        .iter()
        .filter_map(|record| record.age)
        .fold((0_i64, 0_u64), |(sum, count), age| {
            (sum + i64::from(age), count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)] // Age sums and counts stay far below 2^52
    let mean = sum as f64 / count as f64;
    mean
}

fn name_or_sentinel(record: Option<&AdminRecord>) -> String {
    record.map_or_else(|| NO_ADMINS_FOUND.to_owned(), |record| record.name.clone())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Email;

    fn admin(name: &str, email: Option<&str>, age: Option<i32>) -> AdminRecord {
        AdminRecord {
            id: None,
            name: name.to_string(),
            email: email.map(|e| Email::parse(e).unwrap()),
            age,
        }
    }

    fn active(name: &str, email: &str, age: i32) -> AdminRecord {
        admin(name, Some(email), Some(age))
    }

    #[test]
    fn test_empty_input() {
        let summary = compute_statistics(&[], 30);

        assert_eq!(summary.total_admins, 0);
        assert!((summary.average_age - 0.0).abs() < f64::EPSILON);
        assert!(summary.senior_admin_emails.is_empty());
        assert_eq!(summary.youngest_admin_name, NO_ADMINS_FOUND);
        assert_eq!(summary.oldest_admin_name, NO_ADMINS_FOUND);
    }

    #[test]
    fn test_missing_email_is_not_active() {
        let records = [
            active("A", "a@x", 20),
            active("B", "b@x", 40),
            admin("C", None, Some(50)),
        ];

        let summary = compute_statistics(&records, 30);

        assert_eq!(summary.total_admins, 3);
        assert_eq!(summary.senior_admin_emails, ["b@x"]);
        assert_eq!(summary.youngest_admin_name, "A");
        assert_eq!(summary.oldest_admin_name, "B");
    }

    #[test]
    fn test_average_covers_inactive_records() {
        let records = [
            active("Ten", "ten@x", 10),
            active("Zero", "zero@x", 0),
            active("Forty", "forty@x", 40),
        ];

        let summary = compute_statistics(&records, 18);

        assert_eq!(summary.total_admins, 3);
        assert!((summary.average_age - 50.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.senior_admin_emails, ["forty@x"]);
        assert_eq!(summary.youngest_admin_name, "Ten");
    }

    #[test]
    fn test_age_zero_excluded_even_with_zero_threshold() {
        let records = [active("Zero", "zero@x", 0), active("One", "one@x", 1)];

        let summary = compute_statistics(&records, 0);

        assert_eq!(summary.senior_admin_emails, ["one@x"]);
        assert_eq!(summary.youngest_admin_name, "One");
        assert_eq!(summary.oldest_admin_name, "One");
    }

    #[test]
    fn test_no_active_records_uses_sentinel() {
        let records = [
            active("Zero", "zero@x", 0),
            admin("NoEmail", None, Some(33)),
            admin("NoAge", Some("noage@x"), None),
        ];

        let summary = compute_statistics(&records, -100);

        assert_eq!(summary.total_admins, 3);
        assert!(summary.senior_admin_emails.is_empty());
        assert_eq!(summary.youngest_admin_name, NO_ADMINS_FOUND);
        assert_eq!(summary.oldest_admin_name, NO_ADMINS_FOUND);
        // Records without an age do not contribute to the mean
        assert!((summary.average_age - 16.5).abs() < 1e-9);
    }

    #[test]
    fn test_senior_emails_sorted_with_duplicates() {
        let records = [
            active("Z", "zed@x", 50),
            active("M", "mid@x", 35),
            active("A", "alpha@x", 60),
            active("M2", "mid@x", 45),
            active("Junior", "junior@x", 20),
        ];

        let summary = compute_statistics(&records, 30);

        assert_eq!(
            summary.senior_admin_emails,
            ["alpha@x", "mid@x", "mid@x", "zed@x"]
        );
    }

    #[test]
    fn test_ordinal_sort_puts_uppercase_first() {
        let records = [active("b", "b@x", 40), active("B", "B@x", 40)];

        let summary = compute_statistics(&records, 30);

        assert_eq!(summary.senior_admin_emails, ["B@x", "b@x"]);
    }

    #[test]
    fn test_ties_go_to_first_record() {
        let records = [
            active("FirstYoung", "fy@x", 20),
            active("FirstOld", "fo@x", 60),
            active("SecondYoung", "sy@x", 20),
            active("SecondOld", "so@x", 60),
        ];

        let summary = compute_statistics(&records, 30);

        assert_eq!(summary.youngest_admin_name, "FirstYoung");
        assert_eq!(summary.oldest_admin_name, "FirstOld");
    }

    #[test]
    fn test_negative_threshold_includes_all_active() {
        let records = [active("A", "a@x", 1), active("B", "b@x", 99)];

        let summary = compute_statistics(&records, i32::MIN);

        assert_eq!(summary.senior_admin_emails, ["a@x", "b@x"]);
    }

    #[test]
    fn test_is_idempotent() {
        let records = [
            active("A", "a@x", 31),
            active("B", "b@x", 29),
            admin("C", None, Some(70)),
        ];

        let first = compute_statistics(&records, 30);
        let second = compute_statistics(&records, 30);

        assert_eq!(first, second);
        assert_eq!(first.average_age.to_bits(), second.average_age.to_bits());
    }

    #[test]
    fn test_seniors_never_exceed_active_count() {
        let records = [
            active("A", "a@x", 31),
            active("B", "b@x", 0),
            admin("C", None, Some(70)),
        ];

        let summary = compute_statistics(&records, 0);
        let active_count = records.iter().filter(|r| is_active(r)).count();

        assert!(summary.senior_admin_emails.len() <= active_count);
        assert!(summary.senior_admin_emails.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let summary = compute_statistics(&[active("Aravind", "aravind@example.com", 26)], 30);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["totalAdmins"], 1);
        assert_eq!(json["averageAge"], 26.0);
        assert_eq!(json["seniorAdminEmails"], serde_json::json!([]));
        assert_eq!(json["youngestAdmin"], "Aravind");
        assert_eq!(json["oldestAdmin"], "Aravind");
    }
}
