use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Lifecycle state of a [`Request`].
///
/// The vocabulary is closed: the wire never carries a status outside these
/// four words. A request starts `Pending`; `Revoked` is reachable only from
/// `Accepted` (enforced by the contract's revoke operation, not here).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Accepted,
    Denied,
    Revoked,
}

impl Status {
    /// The wire form of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Denied => "denied",
            Self::Revoked => "revoked",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "denied" => Ok(Self::Denied),
            "revoked" => Ok(Self::Revoked),
            other => Err(TypeError::UnknownStatus(other.to_string())),
        }
    }
}

/// A medical-service request: the sole entity the ledger manages.
///
/// Provider, patient, and category are fixed at creation; only `status`
/// changes over a record's lifetime. The wire format is a flat JSON object
/// with exactly these four fields, under the capitalized key names carried
/// over as the compatibility contract. Field order is stable so that
/// encoding the same record always produces the same bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Identifier of the provider that raised the request.
    #[serde(rename = "ProviderID")]
    pub provider_id: String,
    /// Identifier of the patient the request concerns.
    #[serde(rename = "PatientID")]
    pub patient_id: String,
    /// Free-form classification, e.g. "lifestyle", "history", "medication".
    #[serde(rename = "Category")]
    pub category: String,
    /// Current lifecycle state.
    #[serde(rename = "Status")]
    pub status: Status,
}

impl Request {
    /// Create a new request in the initial `pending` state.
    pub fn new(
        provider_id: impl Into<String>,
        patient_id: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            patient_id: patient_id.into(),
            category: category.into(),
            status: Status::Pending,
        }
    }

    /// Encode to the JSON wire format (the ledger value bytes).
    pub fn to_bytes(&self) -> Result<Vec<u8>, TypeError> {
        serde_json::to_vec(self).map_err(|e| TypeError::Serialization(e.to_string()))
    }

    /// Decode from the JSON wire format.
    ///
    /// Absent or malformed bytes are an error, never a zero-valued record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        serde_json::from_slice(bytes).map_err(|e| TypeError::Serialization(e.to_string()))
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} [{}] {}",
            self.provider_id, self.patient_id, self.category, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_request_is_pending() {
        let req = Request::new("PR0", "PA3", "lifestyle");
        assert_eq!(req.provider_id, "PR0");
        assert_eq!(req.patient_id, "PA3");
        assert_eq!(req.category, "lifestyle");
        assert_eq!(req.status, Status::Pending);
    }

    #[test]
    fn wire_field_names_are_exact() {
        let req = Request::new("PR1", "PA2", "history");
        let json = String::from_utf8(req.to_bytes().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"ProviderID":"PR1","PatientID":"PA2","Category":"history","Status":"pending"}"#
        );
    }

    #[test]
    fn decode_wire_bytes() {
        let bytes = br#"{"ProviderID":"PR2","PatientID":"PA1","Category":"medication","Status":"denied"}"#;
        let req = Request::from_bytes(bytes).unwrap();
        assert_eq!(req.provider_id, "PR2");
        assert_eq!(req.patient_id, "PA1");
        assert_eq!(req.category, "medication");
        assert_eq!(req.status, Status::Denied);
    }

    #[test]
    fn decode_malformed_bytes_is_an_error() {
        let err = Request::from_bytes(b"not json").unwrap_err();
        assert!(matches!(err, TypeError::Serialization(_)));
    }

    #[test]
    fn decode_unknown_status_is_an_error() {
        let bytes = br#"{"ProviderID":"PR0","PatientID":"PA0","Category":"x","Status":"frozen"}"#;
        let err = Request::from_bytes(bytes).unwrap_err();
        assert!(matches!(err, TypeError::Serialization(_)));
    }

    #[test]
    fn status_parse_and_display() {
        for word in ["pending", "accepted", "denied", "revoked"] {
            let status: Status = word.parse().unwrap();
            assert_eq!(status.to_string(), word);
        }
        let err = "approved".parse::<Status>().unwrap_err();
        assert_eq!(err, TypeError::UnknownStatus("approved".to_string()));
    }

    #[test]
    fn status_wire_form_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&Status::Accepted).unwrap(),
            r#""accepted""#
        );
        let parsed: Status = serde_json::from_str(r#""revoked""#).unwrap();
        assert_eq!(parsed, Status::Revoked);
    }

    fn any_status() -> impl Strategy<Value = Status> {
        prop_oneof![
            Just(Status::Pending),
            Just(Status::Accepted),
            Just(Status::Denied),
            Just(Status::Revoked),
        ]
    }

    proptest! {
        #[test]
        fn encode_decode_round_trip(
            provider in "[A-Za-z0-9]{0,16}",
            patient in "[A-Za-z0-9]{0,16}",
            category in "[a-z]{0,16}",
            status in any_status(),
        ) {
            let req = Request {
                provider_id: provider,
                patient_id: patient,
                category,
                status,
            };
            let decoded = Request::from_bytes(&req.to_bytes().unwrap()).unwrap();
            prop_assert_eq!(decoded, req);
        }
    }
}
