//! SCIM 2.0 bulk message types (RFC 7644 §3.7)

use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Schema URN every bulk request must declare
pub const BULK_REQUEST_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:BulkRequest";
/// Schema URN of the bulk response envelope
pub const BULK_RESPONSE_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:BulkResponse";
/// Schema URN of SCIM error bodies
pub const ERROR_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:Error";

/// Bulk request envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRequest {
    /// Declared schema URNs
    #[serde(default)]
    pub schemas: Vec<String>,
    /// Failure budget; `None` or `0` means unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_errors: Option<u64>,
    /// Sub-operations, processed in order
    #[serde(rename = "Operations", alias = "operations", default)]
    pub operations: Vec<BulkOperation>,
}

impl BulkRequest {
    /// Create a request declaring the bulk-request schema
    pub fn new(operations: Vec<BulkOperation>) -> Self {
        Self {
            schemas: vec![BULK_REQUEST_SCHEMA.to_string()],
            fail_on_errors: None,
            operations,
        }
    }

    /// Set the failure budget
    pub fn with_fail_on_errors(mut self, fail_on_errors: u64) -> Self {
        self.fail_on_errors = Some(fail_on_errors);
        self
    }

    /// Whether `schemas` declares the bulk-request URN
    pub fn has_bulk_schema(&self) -> bool {
        self.schemas.iter().any(|s| s == BULK_REQUEST_SCHEMA)
    }

    /// Effective failure budget. Zero is treated as "no limit".
    pub fn failure_limit(&self) -> Option<u64> {
        self.fail_on_errors.filter(|&limit| limit > 0)
    }
}

/// One sub-operation of a bulk request
///
/// `method` and `path` are kept as raw strings so that an unsupported verb or
/// a missing path is reported on the operation itself rather than failing the
/// whole envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOperation {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub method: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path: String,
    /// Client correlation token, echoed verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_id: Option<String>,
    /// Resource payload, forwarded untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl BulkOperation {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            bulk_id: None,
            data: None,
        }
    }

    pub fn with_bulk_id(mut self, bulk_id: impl Into<String>) -> Self {
        self.bulk_id = Some(bulk_id.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Read an optional string field, mapping an explicit `null` to `""`
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Verbs allowed inside a bulk envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkMethod {
    Post,
    Put,
    Patch,
    Delete,
}

impl BulkMethod {
    /// Parse a verb, ignoring ASCII case. `GET` and anything unknown yield `None`.
    pub fn parse(method: &str) -> Option<Self> {
        match method.to_ascii_uppercase().as_str() {
            "POST" => Some(BulkMethod::Post),
            "PUT" => Some(BulkMethod::Put),
            "PATCH" => Some(BulkMethod::Patch),
            "DELETE" => Some(BulkMethod::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BulkMethod::Post => "POST",
            BulkMethod::Put => "PUT",
            BulkMethod::Patch => "PATCH",
            BulkMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for BulkMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-operation HTTP status.
///
/// Kept numeric for comparisons; serialized as a decimal string as the bulk
/// response format requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperationStatus(u16);

impl OperationStatus {
    pub const BAD_REQUEST: OperationStatus = OperationStatus(400);
    pub const SERVICE_UNAVAILABLE: OperationStatus = OperationStatus(503);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// 4xx and 5xx count against the failure budget
    pub const fn is_failure(&self) -> bool {
        self.0 >= 400
    }
}

impl From<u16> for OperationStatus {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for OperationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OperationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Some servers send a bare number; accept both.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(u16),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(code) => Ok(Self(code)),
            Repr::Text(text) => text
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid status code '{}'", text))),
        }
    }
}

/// Bulk response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkResponse {
    pub schemas: Vec<String>,
    #[serde(rename = "Operations", default)]
    pub operations: Vec<BulkOperationResult>,
}

impl BulkResponse {
    pub fn new(operations: Vec<BulkOperationResult>) -> Self {
        Self {
            schemas: vec![BULK_RESPONSE_SCHEMA.to_string()],
            operations,
        }
    }
}

impl Default for BulkResponse {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Outcome of one processed operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOperationResult {
    /// Echoed verb; empty for results synthesized without a source operation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_id: Option<String>,
    /// Resource URI reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: OperationStatus,
    /// Backend body or synthesized error detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

/// `scimType` values used in synthesized error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScimType {
    InvalidSyntax,
    InvalidPath,
    InvalidValue,
}

/// SCIM error body (RFC 7644 §3.12)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimErrorBody {
    pub schemas: Vec<String>,
    pub status: OperationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scim_type: Option<ScimType>,
    pub detail: String,
}

impl ScimErrorBody {
    pub fn new(status: OperationStatus, scim_type: Option<ScimType>, detail: impl Into<String>) -> Self {
        Self {
            schemas: vec![ERROR_SCHEMA.to_string()],
            status,
            scim_type,
            detail: detail.into(),
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Overall result of a bulk call: the call status plus the response envelope.
///
/// The call status is 400 only when the envelope itself was rejected; it stays
/// 200 however many individual operations failed.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkOutcome {
    pub status: StatusCode,
    pub response: BulkResponse,
}

impl BulkOutcome {
    pub fn accepted(response: BulkResponse) -> Self {
        Self {
            status: StatusCode::OK,
            response,
        }
    }

    pub fn rejected(response: BulkResponse) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            response,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Number of operation results with a failure status
    pub fn failed_operations(&self) -> usize {
        self.response
            .operations
            .iter()
            .filter(|op| op.status.is_failure())
            .count()
    }
}
