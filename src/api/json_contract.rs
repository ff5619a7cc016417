use serde::{Deserialize, Serialize};

use crate::core::Clock;
use crate::error::{CalendarError, CalendarResult};

use super::{Calendar, CalendarSnapshot};

pub const CALENDAR_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: CalendarSnapshot,
}

impl CalendarSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> CalendarResult<String> {
        let payload = CalendarSnapshotJsonContractV1 {
            schema_version: CALENDAR_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            CalendarError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> CalendarResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<CalendarSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: CalendarSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                CalendarError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != CALENDAR_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(CalendarError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<C: Clock> Calendar<C> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> CalendarResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
