use std::fmt::{Display, Formatter};

use roster_core::{EnvelopeMeta, Operation, ValidationError};
use uuid::Uuid;

pub const SCHEMA_VERSION: &str = "v1.0.0";

/// Request identifier (UUID v4) for end-to-end request tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Envelope metadata for one CLI invocation.
pub fn envelope_meta(
    operation: Operation,
    latency_ms: u64,
) -> Result<EnvelopeMeta, ValidationError> {
    EnvelopeMeta::new(
        RequestId::new_v4().to_string(),
        SCHEMA_VERSION,
        operation,
        latency_ms,
    )
}
