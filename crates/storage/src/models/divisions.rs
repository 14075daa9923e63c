/// Fixed age-group labels, in display order. This list doubles as the
/// validation set for athlete creation and CSV import: an age-group must
/// match one of these entries exactly (case-sensitive, no normalization).
pub const AGE_GROUP_ORDER: &[&str] = &[
    "7-8 years",
    "7-9 years",
    "7-10 years",
    "7-11 years",
    "7-13 years",
    "9 years",
    "9-10 years",
    "10 years",
    "10-11 years",
    "11 years",
    "12 years",
    "12-13 years",
    "13 years",
    "14+ years",
];

/// Fixed competition-level labels, in display order. Athlete levels are free
/// text, so this only drives presentation ordering.
pub const LEVEL_ORDER: &[&str] = &[
    "Level 1", "Level 2", "Level 3", "Level 4", "Level 5", "Level 6", "Level 7", "Level 8",
    "Level 9", "Level 10", "Elite",
];

/// Sentinel bucket labels for athletes missing a level or age-group.
pub const NO_LEVEL: &str = "No Level";
pub const NO_AGE_GROUP: &str = "No Age Group";

pub fn is_valid_age_group(label: &str) -> bool {
    AGE_GROUP_ORDER.contains(&label)
}

/// Sort key placing known levels in `LEVEL_ORDER` position, unknown labels
/// after all known ones (alphabetically), and the sentinel bucket last.
pub fn level_sort_key(label: &str) -> (usize, String) {
    sort_key(label, LEVEL_ORDER, NO_LEVEL)
}

/// Same shape as [`level_sort_key`], over the age-group enumeration.
pub fn age_group_sort_key(label: &str) -> (usize, String) {
    sort_key(label, AGE_GROUP_ORDER, NO_AGE_GROUP)
}

fn sort_key(label: &str, order: &[&str], sentinel: &str) -> (usize, String) {
    if label == sentinel {
        return (order.len() + 1, String::new());
    }
    match order.iter().position(|known| *known == label) {
        Some(idx) => (idx, String::new()),
        None => (order.len(), label.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_age_groups_validate() {
        assert!(is_valid_age_group("12 years"));
        assert!(is_valid_age_group("14+ years"));
        assert!(is_valid_age_group("7-9 years"));
    }

    #[test]
    fn test_age_group_match_is_exact() {
        assert!(!is_valid_age_group("12 yrs"));
        assert!(!is_valid_age_group("12 Years"));
        assert!(!is_valid_age_group(" 12 years"));
    }

    #[test]
    fn test_known_labels_keep_enumeration_order() {
        assert!(level_sort_key("Level 2") < level_sort_key("Level 10"));
        assert!(age_group_sort_key("7-8 years") < age_group_sort_key("14+ years"));
    }

    #[test]
    fn test_unknown_labels_sort_after_known_alphabetically() {
        assert!(level_sort_key("Elite") < level_sort_key("Xcel Gold"));
        assert!(level_sort_key("Open") < level_sort_key("Xcel Gold"));
        assert!(age_group_sort_key("14+ years") < age_group_sort_key("Seniors"));
    }

    #[test]
    fn test_sentinel_buckets_sort_last() {
        assert!(level_sort_key("Xcel Gold") < level_sort_key(NO_LEVEL));
        assert!(age_group_sort_key("Seniors") < age_group_sort_key(NO_AGE_GROUP));
    }
}
