// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Binary encoding through bincode's serde API.

use super::{Backend, BackendKind};
use crate::error::CodecError;
use crate::workload::Person;

/// bincode backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeBackend;

impl Backend for BincodeBackend {
    type Model = Person;

    fn name(&self) -> &'static str {
        BackendKind::Bincode.label()
    }

    fn prepare(&self, person: &Person) -> Person {
        person.clone()
    }

    fn encode(&self, model: &Person) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(model).map_err(|e| CodecError::Encode {
            backend: self.name(),
            reason: e.to_string(),
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Person, CodecError> {
        bincode::deserialize(bytes).map_err(|e| CodecError::Decode {
            backend: self.name(),
            reason: e.to_string(),
        })
    }
}
