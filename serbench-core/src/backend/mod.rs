// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Serialization backends under test.
//!
//! Each backend adapts one external codec to the [`Backend`] trait. The
//! driver is generic over the trait; [`BackendKind`] is the enumerated list
//! used by configuration and dispatch.

mod binary;
mod json;
mod msgpack;
mod protobuf;
mod xml;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::workload::Person;

pub use self::binary::BincodeBackend;
pub use self::json::JsonBackend;
pub use self::msgpack::MessagePackBackend;
pub use self::protobuf::{DocumentProto, PersonProto, ProtobufBackend};
pub use self::xml::XmlBackend;

/// A serialization format plugged into the benchmark loop.
///
/// `Model` is the in-memory representation the codec works on. Serde-based
/// backends use [`Person`] directly; schema-based backends convert once in
/// [`Backend::prepare`], outside the timed region.
pub trait Backend {
    type Model: Snapshot;

    /// Label used as the scenario name prefix.
    fn name(&self) -> &'static str;

    /// Convert the shared workload into this backend's model. Not timed.
    fn prepare(&self, person: &Person) -> Self::Model;

    /// Encode the model into a fresh buffer.
    fn encode(&self, model: &Self::Model) -> Result<Vec<u8>, CodecError>;

    /// Decode a buffer into a fresh model.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Model, CodecError>;
}

/// Read-only view over a decoded model, used for round-trip checks.
pub trait Snapshot {
    fn person_name(&self) -> &str;
    fn person_age(&self) -> i32;
    fn document_count(&self) -> usize;
}

impl Snapshot for Person {
    fn person_name(&self) -> &str {
        &self.name
    }

    fn person_age(&self) -> i32 {
        self.age
    }

    fn document_count(&self) -> usize {
        self.documents.len()
    }
}

/// Enumerated list of available backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// bincode binary encoding
    Bincode,
    /// serde_json text encoding
    Json,
    /// quick-xml text encoding
    Xml,
    /// prost protocol buffers
    Protobuf,
    /// rmp-serde MessagePack
    #[serde(alias = "msgpack")]
    MessagePack,
}

impl BackendKind {
    /// Every backend, in report order.
    pub const ALL: [BackendKind; 5] = [
        BackendKind::Bincode,
        BackendKind::Json,
        BackendKind::Xml,
        BackendKind::Protobuf,
        BackendKind::MessagePack,
    ];

    /// Backends measured when none are configured.
    pub const DEFAULT: [BackendKind; 4] = [
        BackendKind::Bincode,
        BackendKind::Json,
        BackendKind::Xml,
        BackendKind::Protobuf,
    ];

    /// Human-readable label used as the scenario name prefix.
    pub fn label(&self) -> &'static str {
        match self {
            BackendKind::Bincode => "Bincode Binary",
            BackendKind::Json => "Serde Json",
            BackendKind::Xml => "Quick Xml",
            BackendKind::Protobuf => "Prost Protobuf",
            BackendKind::MessagePack => "Rmp MessagePack",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
