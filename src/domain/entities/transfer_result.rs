//! TransferResult entity
//!
//! Created once the transfer tool has exited. Never mutated afterwards.

use serde::Serialize;

use crate::domain::value_objects::Endpoint;

/// Outcome of one transfer tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferResult {
    exit_code: i32,
    source: Endpoint,
    destination: Endpoint,
}

impl TransferResult {
    pub fn new(exit_code: i32, source: Endpoint, destination: Endpoint) -> Self {
        Self {
            exit_code,
            source,
            destination,
        }
    }

    /// Exit code exactly as the tool reported it
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn source(&self) -> &Endpoint {
        &self.source
    }

    pub fn destination(&self) -> &Endpoint {
        &self.destination
    }

    /// Zero is success; nothing else is interpreted
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
