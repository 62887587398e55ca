// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! JSON text encoding through serde_json.

use super::{Backend, BackendKind};
use crate::error::CodecError;
use crate::workload::Person;

/// serde_json backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBackend;

impl Backend for JsonBackend {
    type Model = Person;

    fn name(&self) -> &'static str {
        BackendKind::Json.label()
    }

    fn prepare(&self, person: &Person) -> Person {
        person.clone()
    }

    fn encode(&self, model: &Person) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(model).map_err(|e| CodecError::Encode {
            backend: self.name(),
            reason: e.to_string(),
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Person, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode {
            backend: self.name(),
            reason: e.to_string(),
        })
    }
}
