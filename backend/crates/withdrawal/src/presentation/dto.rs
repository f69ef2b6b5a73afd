//! API DTOs (Data Transfer Objects)

use crate::domain::value_objects::RawAmount;
use crate::error::{WithdrawalError, WithdrawalResult};
use serde::Serialize;
use serde_json::Value;

/// Request for POST /api/withdraw
///
/// Parsed by hand instead of derived: a missing field, `null` and a
/// non-numeric value must each reach the domain as a distinct case.
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawRequest {
    pub amount: RawAmount,
}

impl WithdrawRequest {
    pub fn from_slice(body: &[u8]) -> WithdrawalResult<Self> {
        let value: Value = serde_json::from_slice(body)?;
        match value {
            Value::Object(fields) => Ok(Self {
                amount: raw_amount(fields.get("amount")),
            }),
            _ => Err(WithdrawalError::InvalidBodyShape),
        }
    }
}

fn raw_amount(value: Option<&Value>) -> RawAmount {
    match value {
        None | Some(Value::Null) => RawAmount::Absent,
        Some(Value::Number(n)) => n.as_f64().map_or(RawAmount::NotNumeric, RawAmount::Number),
        Some(_) => RawAmount::NotNumeric,
    }
}

/// Response for POST /api/withdraw
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawResponse {
    pub notes: Vec<u32>,
    pub total: u64,
}
