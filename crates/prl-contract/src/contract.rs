use std::str::FromStr;

use tracing::{debug, info};

use prl_store::StateStore;
use prl_types::{Request, Status};

use crate::error::{ContractError, ContractResult};
use crate::seed::{seed_key, seed_requests};

/// The request ledger contract.
///
/// Owns a [`StateStore`] backend and implements the record lifecycle on top
/// of it. The contract is stateless between calls: every operation is a
/// self-contained read (at most one) followed by a write (at most one);
/// isolation across concurrent calls on the same key is the backing
/// ledger's concern, not the contract's.
pub struct RequestContract<S: StateStore> {
    store: S,
}

impl<S: StateStore> RequestContract<S> {
    /// Create a contract bound to the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the contract and return the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Publish a new request under `key`, overwriting any prior record.
    ///
    /// The record starts in the `pending` state with the supplied provider,
    /// patient, and category fixed for its lifetime.
    pub fn publish_request(
        &self,
        key: &str,
        provider_id: &str,
        patient_id: &str,
        category: &str,
    ) -> ContractResult<()> {
        let request = Request::new(provider_id, patient_id, category);
        self.store.put(key, &request.to_bytes()?)?;
        debug!(key, provider = provider_id, patient = patient_id, "published request");
        Ok(())
    }

    /// Seed the ledger with the ten fixed demo records under `REQ0`..`REQ9`.
    ///
    /// Each record is an independent write; seeding is not transactional,
    /// so a mid-seed fault leaves a partial seed behind. Re-running
    /// overwrites the same ten keys, so the effect is idempotent.
    pub fn init_ledger(&self) -> ContractResult<()> {
        for (index, request) in seed_requests().iter().enumerate() {
            let key = seed_key(index);
            self.store.put(&key, &request.to_bytes()?)?;
            info!(%key, record = %request, "seeded request");
        }
        Ok(())
    }

    /// Overwrite the status of the record at `key`, guarded by patient
    /// identity.
    ///
    /// `new_status` must belong to the closed status vocabulary. The write
    /// only happens when the stored record's patient matches
    /// `expected_patient_id`; a mismatch leaves the record untouched and is
    /// reported as [`ContractError::PatientMismatch`] so callers can tell
    /// the no-op apart from an applied update.
    pub fn update_status(
        &self,
        key: &str,
        new_status: &str,
        expected_patient_id: &str,
    ) -> ContractResult<()> {
        let status = Status::from_str(new_status)
            .map_err(|_| ContractError::InvalidStatus(new_status.to_string()))?;

        let mut request = self.read_record(key)?;
        if request.patient_id != expected_patient_id {
            debug!(key, "patient mismatch; status left unchanged");
            return Err(ContractError::PatientMismatch {
                key: key.to_string(),
            });
        }

        request.status = status;
        self.store.put(key, &request.to_bytes()?)?;
        debug!(key, status = %status, "updated request status");
        Ok(())
    }

    /// Revoke the request at `key`.
    ///
    /// Revocation is only reachable from the `accepted` state; any other
    /// stored status fails with [`ContractError::CannotRevoke`] and leaves
    /// the record untouched.
    pub fn revoke(&self, key: &str) -> ContractResult<()> {
        let mut request = self.read_record(key)?;
        if request.status != Status::Accepted {
            return Err(ContractError::CannotRevoke);
        }

        request.status = Status::Revoked;
        self.store.put(key, &request.to_bytes()?)?;
        debug!(key, "revoked request");
        Ok(())
    }

    /// Query all stored requests belonging to `patient_id`.
    ///
    /// Scans the full keyspace in ascending key order and keeps entries
    /// whose decoded patient matches; non-matching entries are skipped
    /// without error. The payload is a JSON array built by direct
    /// concatenation, each element carrying the key and the stored record
    /// bytes verbatim: `[{"Key":"<key>", "Record":<stored bytes>}, ...]`.
    /// Zero matches yield the literal `[]`.
    pub fn query_patient_requests(&self, patient_id: &str) -> ContractResult<Vec<u8>> {
        let mut cursor = self.store.range_scan("", None)?;

        let mut payload: Vec<u8> = Vec::new();
        payload.push(b'[');
        let mut first = true;

        while let Some(entry) = cursor.next_entry()? {
            let record =
                Request::from_bytes(&entry.value).map_err(|e| ContractError::CorruptRecord {
                    key: entry.key.clone(),
                    reason: e.to_string(),
                })?;
            if record.patient_id != patient_id {
                continue;
            }

            if !first {
                payload.push(b',');
            }
            payload.extend_from_slice(b"{\"Key\":\"");
            payload.extend_from_slice(entry.key.as_bytes());
            payload.extend_from_slice(b"\", \"Record\":");
            payload.extend_from_slice(&entry.value);
            payload.push(b'}');
            first = false;
        }
        payload.push(b']');

        debug!(patient = patient_id, bytes = payload.len(), "query complete");
        Ok(payload)
    }

    /// Read and decode the record at `key`.
    ///
    /// Absence is surfaced as [`ContractError::NotFound`], undecodable
    /// bytes as [`ContractError::CorruptRecord`]; neither is papered over
    /// with a zero-valued record.
    fn read_record(&self, key: &str) -> ContractResult<Request> {
        let bytes = self
            .store
            .get(key)?
            .ok_or_else(|| ContractError::NotFound(key.to_string()))?;
        Request::from_bytes(&bytes).map_err(|e| ContractError::CorruptRecord {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}
