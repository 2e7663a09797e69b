//! Fixed seed data for ledger initialization.

use prl_types::{Request, Status};

/// Key prefix for seeded records: `REQ0` through `REQ9`.
pub const SEED_KEY_PREFIX: &str = "REQ";

/// The ten seed tuples, in write order: (provider, patient, category, status).
const SEED_TABLE: [(&str, &str, &str, Status); 10] = [
    ("PR0", "PA3", "lifestyle", Status::Pending),
    ("PR1", "PA2", "history", Status::Accepted),
    ("PR2", "PA1", "medication", Status::Denied),
    ("PR3", "PA0", "history", Status::Pending),
    ("PR0", "PA3", "lifestyle", Status::Accepted),
    ("PR1", "PA2", "history", Status::Accepted),
    ("PR2", "PA1", "medication", Status::Accepted),
    ("PR3", "PA0", "lifestyle", Status::Denied),
    ("PR0", "PA3", "history", Status::Pending),
    ("PR1", "PA2", "medication", Status::Pending),
];

/// Materialize the seed records in write order.
pub fn seed_requests() -> Vec<Request> {
    SEED_TABLE
        .iter()
        .map(|(provider, patient, category, status)| Request {
            provider_id: (*provider).to_string(),
            patient_id: (*patient).to_string(),
            category: (*category).to_string(),
            status: *status,
        })
        .collect()
}

/// The key a seed record at `index` is stored under.
pub fn seed_key(index: usize) -> String {
    format!("{SEED_KEY_PREFIX}{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_seed_records() {
        assert_eq!(seed_requests().len(), 10);
    }

    #[test]
    fn seed_keys_are_indexed() {
        assert_eq!(seed_key(0), "REQ0");
        assert_eq!(seed_key(9), "REQ9");
    }

    #[test]
    fn first_seed_record_matches_table() {
        let first = &seed_requests()[0];
        assert_eq!(first.provider_id, "PR0");
        assert_eq!(first.patient_id, "PA3");
        assert_eq!(first.category, "lifestyle");
        assert_eq!(first.status, Status::Pending);
    }
}
