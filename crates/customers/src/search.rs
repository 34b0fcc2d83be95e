//! Customer search over a snapshot.

use crate::record::CustomerRecord;

/// Matches for one query, in snapshot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: String,
    pub matches: Vec<CustomerRecord>,
}

impl SearchOutcome {
    /// True when a non-empty query found nothing ("No Customer Exists").
    pub fn is_no_match(&self) -> bool {
        !self.query.is_empty() && self.matches.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

/// Filter records by name, email or phone.
///
/// The query is trimmed; an empty query matches everything. Names and email
/// match case-insensitively, phone matches on the raw digits.
pub fn search(records: &[CustomerRecord], query: &str) -> SearchOutcome {
    let query = query.trim();
    let needle = query.to_lowercase();

    let matches = records
        .iter()
        .filter(|r| {
            r.first_name.to_lowercase().contains(&needle)
                || r.last_name.to_lowercase().contains(&needle)
                || r.email.to_lowercase().contains(&needle)
                || r.phone.contains(query)
        })
        .cloned()
        .collect();

    SearchOutcome {
        query: query.to_string(),
        matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CustomerInput;
    use chrono::Utc;
    use custdash_core::CustomerId;

    fn records() -> Vec<CustomerRecord> {
        [
            ("Grace", "Hopper", "grace@navy.mil", "2025550100", "Arlington"),
            ("Alan", "Turing", "alan@bletchley.uk", "4420790000", "London"),
            ("Ada", "Lovelace", "ada@analytical.org", "4420111111", "London"),
        ]
        .into_iter()
        .map(|(f, l, e, p, c)| {
            CustomerInput::new(f, l, e, p, c).into_record(CustomerId::new(), Utc::now())
        })
        .collect()
    }

    fn names(outcome: &SearchOutcome) -> Vec<&str> {
        outcome.matches.iter().map(|r| r.first_name.as_str()).collect()
    }

    #[test]
    fn empty_or_blank_query_returns_everything() {
        let records = records();
        assert_eq!(search(&records, "").len(), 3);

        let blank = search(&records, "   ");
        assert_eq!(blank.len(), 3);
        assert!(!blank.is_no_match());

        let nothing = search(&[], "");
        assert!(nothing.is_empty());
        assert!(!nothing.is_no_match());
    }

    #[test]
    fn matches_names_case_insensitively() {
        let records = records();
        assert_eq!(names(&search(&records, "TURING")), vec!["Alan"]);
        assert_eq!(names(&search(&records, "a")), vec!["Grace", "Alan", "Ada"]);
    }

    #[test]
    fn matches_email_and_phone_substrings() {
        let records = records();
        assert_eq!(names(&search(&records, "Analytical.ORG")), vec!["Ada"]);
        assert_eq!(names(&search(&records, "4420")), vec!["Alan", "Ada"]);
    }

    #[test]
    fn city_is_not_searched() {
        let records = records();
        assert!(search(&records, "Arlington").is_empty());
    }

    #[test]
    fn query_is_trimmed() {
        let records = records();
        let outcome = search(&records, "  hopper ");
        assert_eq!(outcome.query, "hopper");
        assert_eq!(names(&outcome), vec!["Grace"]);
    }

    #[test]
    fn no_match_is_reported_as_empty() {
        let records = records();
        let outcome = search(&records, "zzz");
        assert!(outcome.is_no_match());
        assert_eq!(outcome.len(), 0);
    }
}
