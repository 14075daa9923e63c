use storage::models::{AGE_GROUP_ORDER, is_valid_age_group};
use tracing::warn;

use super::models::{RawRosterRecord, RosterRow};

pub struct RosterValidator;

impl RosterValidator {
    /// Validate parsed roster records. A record failing any check is excluded
    /// from the batch entirely; the remaining rows are returned normalized.
    /// Error messages are numbered from row 2, row 1 being the header.
    pub fn validate(records: &[RawRosterRecord]) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (idx, record) in records.iter().enumerate() {
            let row_number = idx + 2;
            let mut valid = true;

            let first_name = trimmed(&record.first_name);
            if first_name.is_empty() {
                report
                    .errors
                    .push(format!("Row {}: First name is required", row_number));
                valid = false;
            }

            let last_name = trimmed(&record.last_name);
            if last_name.is_empty() {
                report
                    .errors
                    .push(format!("Row {}: Last name is required", row_number));
                valid = false;
            }

            let gender = trimmed(&record.gender).to_lowercase();
            if gender != "male" && gender != "female" {
                report.errors.push(format!(
                    "Row {}: Gender must be 'male' or 'female'",
                    row_number
                ));
                valid = false;
            }

            let age_group = non_empty(&record.age);
            if let Some(ref age) = age_group
                && !is_valid_age_group(age)
            {
                report.errors.push(format!(
                    "Row {}: Age must be one of: {}",
                    row_number,
                    AGE_GROUP_ORDER.join(", ")
                ));
                valid = false;
            }

            if valid {
                report.rows.push(RosterRow {
                    first_name,
                    last_name,
                    gender,
                    age_group,
                    club: non_empty(&record.club),
                    level: non_empty(&record.level),
                });
            }
        }

        report
    }
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().trim().to_string()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Rows that passed every check, normalized and in file order.
    pub rows: Vec<RosterRow>,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn log_errors(&self) {
        for error in &self.errors {
            warn!("{}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        first: Option<&str>,
        last: Option<&str>,
        gender: Option<&str>,
        age: Option<&str>,
    ) -> RawRosterRecord {
        RawRosterRecord {
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            gender: gender.map(String::from),
            age: age.map(String::from),
            club: None,
            level: None,
        }
    }

    #[test]
    fn test_valid_row_is_normalized() {
        let records = vec![record(
            Some("  John "),
            Some("Doe"),
            Some("Male"),
            Some("14+ years"),
        )];

        let report = RosterValidator::validate(&records);

        assert!(report.errors.is_empty());
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].first_name, "John");
        assert_eq!(report.rows[0].gender, "male");
        assert_eq!(report.rows[0].age_group.as_deref(), Some("14+ years"));
    }

    #[test]
    fn test_missing_names_are_rejected() {
        let records = vec![
            record(None, Some("Doe"), Some("male"), None),
            record(Some("Jane"), Some("  "), Some("female"), None),
        ];

        let report = RosterValidator::validate(&records);

        assert!(report.rows.is_empty());
        assert_eq!(
            report.errors,
            vec![
                "Row 2: First name is required",
                "Row 3: Last name is required",
            ]
        );
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let records = vec![record(Some("John"), Some("Doe"), Some("other"), None)];

        let report = RosterValidator::validate(&records);

        assert!(report.rows.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Row 2: Gender"));
    }

    #[test]
    fn test_bad_age_group_excludes_only_that_row() {
        let records = vec![
            record(Some("John"), Some("Doe"), Some("male"), Some("12 yrs")),
            record(Some("Jane"), Some("Smith"), Some("female"), Some("12 years")),
        ];

        let report = RosterValidator::validate(&records);

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Row 2: Age must be one of:"));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].first_name, "Jane");
    }

    #[test]
    fn test_blank_age_is_allowed() {
        let records = vec![record(Some("John"), Some("Doe"), Some("male"), Some("  "))];

        let report = RosterValidator::validate(&records);

        assert!(report.errors.is_empty());
        assert_eq!(report.rows[0].age_group, None);
    }
}
