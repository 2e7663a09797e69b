//! String-name dispatch surface for external invocation hosts.
//!
//! The host hands the contract a function name and a flat list of string
//! arguments; [`Operation::parse`] maps that pair onto a typed variant,
//! validating the argument count up front, and
//! [`RequestContract::invoke`] applies the variant. Routing through a
//! tagged enum keeps the wire names in exactly one place.

use prl_store::StateStore;

use crate::contract::RequestContract;
use crate::error::{ContractError, ContractResult};

/// A parsed contract invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `publishRequest(key, providerID, patientID, category)`
    Publish {
        key: String,
        provider_id: String,
        patient_id: String,
        category: String,
    },
    /// `initLedger()`
    Seed,
    /// `response(key, newStatus, expectedPatientID)`
    UpdateStatus {
        key: String,
        new_status: String,
        expected_patient_id: String,
    },
    /// `revoke(key)`
    Revoke { key: String },
    /// `queryPatientRequests(patientID)`
    QueryByPatient { patient_id: String },
}

impl Operation {
    /// Map a wire function name and argument list onto a typed operation.
    ///
    /// Argument counts are validated here, before any store access; the
    /// error messages are part of the external wire contract.
    pub fn parse(function: &str, args: &[String]) -> ContractResult<Self> {
        match function {
            "publishRequest" => {
                let [key, provider_id, patient_id, category] = take_args::<4>(args)?;
                Ok(Self::Publish {
                    key,
                    provider_id,
                    patient_id,
                    category,
                })
            }
            "initLedger" => {
                take_args::<0>(args)?;
                Ok(Self::Seed)
            }
            "response" => {
                let [key, new_status, expected_patient_id] = take_args::<3>(args)?;
                Ok(Self::UpdateStatus {
                    key,
                    new_status,
                    expected_patient_id,
                })
            }
            "revoke" => {
                let [key] = take_args::<1>(args)?;
                Ok(Self::Revoke { key })
            }
            "queryPatientRequests" => {
                let [patient_id] = take_args::<1>(args)?;
                Ok(Self::QueryByPatient { patient_id })
            }
            other => Err(ContractError::UnknownFunction(other.to_string())),
        }
    }
}

/// Require exactly `N` arguments, cloning them out of the slice.
fn take_args<const N: usize>(args: &[String]) -> ContractResult<[String; N]> {
    let args: [String; N] = args
        .to_vec()
        .try_into()
        .map_err(|_| ContractError::ArgumentCount { expected: N })?;
    Ok(args)
}

impl<S: StateStore> RequestContract<S> {
    /// Invoke an operation by its wire name.
    ///
    /// Mutating operations return an empty payload; the query returns its
    /// JSON array bytes.
    pub fn invoke(&self, function: &str, args: &[String]) -> ContractResult<Vec<u8>> {
        self.apply(Operation::parse(function, args)?)
    }

    /// Apply a parsed operation.
    pub fn apply(&self, operation: Operation) -> ContractResult<Vec<u8>> {
        match operation {
            Operation::Publish {
                key,
                provider_id,
                patient_id,
                category,
            } => {
                self.publish_request(&key, &provider_id, &patient_id, &category)?;
                Ok(Vec::new())
            }
            Operation::Seed => {
                self.init_ledger()?;
                Ok(Vec::new())
            }
            Operation::UpdateStatus {
                key,
                new_status,
                expected_patient_id,
            } => {
                self.update_status(&key, &new_status, &expected_patient_id)?;
                Ok(Vec::new())
            }
            Operation::Revoke { key } => {
                self.revoke(&key)?;
                Ok(Vec::new())
            }
            Operation::QueryByPatient { patient_id } => {
                self.query_patient_requests(&patient_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prl_store::InMemoryStateStore;
    use prl_types::{Request, Status};

    fn contract() -> RequestContract<InMemoryStateStore> {
        RequestContract::new(InMemoryStateStore::new())
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_publish() {
        let op = Operation::parse(
            "publishRequest",
            &strings(&["REQ0", "PR0", "PA3", "lifestyle"]),
        )
        .unwrap();
        assert_eq!(
            op,
            Operation::Publish {
                key: "REQ0".into(),
                provider_id: "PR0".into(),
                patient_id: "PA3".into(),
                category: "lifestyle".into(),
            }
        );
    }

    #[test]
    fn parse_rejects_wrong_argument_counts_with_exact_messages() {
        let cases = [
            ("publishRequest", "Incorrect number of arguments. Expecting 4"),
            ("response", "Incorrect number of arguments. Expecting 3"),
            ("revoke", "Incorrect number of arguments. Expecting 1"),
            ("queryPatientRequests", "Incorrect number of arguments. Expecting 1"),
            ("initLedger", "Incorrect number of arguments. Expecting 0"),
        ];
        for (function, message) in cases {
            let err = Operation::parse(function, &strings(&["a", "b", "c", "d", "e"]))
                .unwrap_err();
            assert_eq!(err.to_string(), message, "function {function}");
        }
    }

    #[test]
    fn parse_rejects_unknown_function() {
        let err = Operation::parse("deleteEverything", &[]).unwrap_err();
        assert!(matches!(err, ContractError::UnknownFunction(name) if name == "deleteEverything"));
    }

    #[test]
    fn invoke_publish_writes_a_pending_record() {
        let contract = contract();
        let payload = contract
            .invoke("publishRequest", &strings(&["k", "PR5", "PA5", "history"]))
            .unwrap();
        assert!(payload.is_empty());

        let bytes = contract.store().get("k").unwrap().unwrap();
        let record = Request::from_bytes(&bytes).unwrap();
        assert_eq!(record.status, Status::Pending);
    }

    #[test]
    fn invoke_seed_then_query() {
        let contract = contract();
        assert!(contract.invoke("initLedger", &[]).unwrap().is_empty());

        let payload = contract
            .invoke("queryPatientRequests", &strings(&["PA1"]))
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&payload).unwrap();
        // PA1 owns the two seeded medication requests, REQ2 and REQ6.
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn invoke_response_updates_status() {
        let contract = contract();
        contract.invoke("initLedger", &[]).unwrap();
        contract
            .invoke("response", &strings(&["REQ0", "accepted", "PA3"]))
            .unwrap();

        let bytes = contract.store().get("REQ0").unwrap().unwrap();
        assert_eq!(Request::from_bytes(&bytes).unwrap().status, Status::Accepted);
    }

    #[test]
    fn invoke_revoke_is_wired() {
        let contract = contract();
        contract.invoke("initLedger", &[]).unwrap();

        // REQ1 is seeded accepted.
        assert!(contract
            .invoke("revoke", &strings(&["REQ1"]))
            .unwrap()
            .is_empty());
        let bytes = contract.store().get("REQ1").unwrap().unwrap();
        assert_eq!(Request::from_bytes(&bytes).unwrap().status, Status::Revoked);

        // REQ0 is seeded pending; revoking it must fail with the fixed message.
        let err = contract.invoke("revoke", &strings(&["REQ0"])).unwrap_err();
        assert_eq!(err.to_string(), "Cannot revoke.");
    }

    #[test]
    fn validation_happens_before_any_write() {
        let contract = contract();
        let err = contract
            .invoke("publishRequest", &strings(&["k", "PR0"]))
            .unwrap_err();
        assert!(matches!(err, ContractError::ArgumentCount { expected: 4 }));
        assert!(contract.store().is_empty());
    }
}
