// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! MessagePack encoding through rmp-serde.

use super::{Backend, BackendKind};
use crate::error::CodecError;
use crate::workload::Person;

/// rmp-serde backend. Structs are written as maps so field names travel
/// with the payload, like the JSON and XML backends.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagePackBackend;

impl Backend for MessagePackBackend {
    type Model = Person;

    fn name(&self) -> &'static str {
        BackendKind::MessagePack.label()
    }

    fn prepare(&self, person: &Person) -> Person {
        person.clone()
    }

    fn encode(&self, model: &Person) -> Result<Vec<u8>, CodecError> {
        rmp_serde::to_vec_named(model).map_err(|e| CodecError::Encode {
            backend: self.name(),
            reason: e.to_string(),
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Person, CodecError> {
        rmp_serde::from_slice(bytes).map_err(|e| CodecError::Decode {
            backend: self.name(),
            reason: e.to_string(),
        })
    }
}
