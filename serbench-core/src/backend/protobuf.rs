// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Schema-based binary encoding through prost.
//!
//! The messages mirror this schema:
//!
//! ```proto
//! message DocumentProto {
//!   int32 id = 1;
//!   string name = 2;
//!   string content = 3;
//!   google.protobuf.Timestamp expiration_date = 4;
//! }
//!
//! message PersonProto {
//!   int32 age = 1;
//!   google.protobuf.Timestamp birthday = 2;
//!   string name = 3;
//!   repeated DocumentProto documents = 4;
//! }
//! ```

use chrono::{DateTime, Utc};
use prost::Message;
use prost_types::Timestamp;

use super::{Backend, BackendKind, Snapshot};
use crate::error::CodecError;
use crate::workload::{Document, Person};

#[derive(Clone, PartialEq, Message)]
pub struct DocumentProto {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub content: String,
    #[prost(message, optional, tag = "4")]
    pub expiration_date: Option<Timestamp>,
}

#[derive(Clone, PartialEq, Message)]
pub struct PersonProto {
    #[prost(int32, tag = "1")]
    pub age: i32,
    #[prost(message, optional, tag = "2")]
    pub birthday: Option<Timestamp>,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(message, repeated, tag = "4")]
    pub documents: Vec<DocumentProto>,
}

fn to_timestamp(time: &DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: time.timestamp(),
        nanos: time.timestamp_subsec_nanos() as i32,
    }
}

impl From<&Document> for DocumentProto {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id,
            name: doc.name.clone(),
            content: doc.content.clone(),
            expiration_date: Some(to_timestamp(&doc.expiration_date)),
        }
    }
}

impl From<&Person> for PersonProto {
    fn from(person: &Person) -> Self {
        Self {
            age: person.age,
            birthday: Some(to_timestamp(&person.birthday)),
            name: person.name.clone(),
            documents: person.documents.iter().map(DocumentProto::from).collect(),
        }
    }
}

impl Snapshot for PersonProto {
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

/// prost backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufBackend;

impl Backend for ProtobufBackend {
    type Model = PersonProto;

    fn name(&self) -> &'static str {
        BackendKind::Protobuf.label()
    }

    fn prepare(&self, person: &Person) -> PersonProto {
        PersonProto::from(person)
    }

    fn encode(&self, model: &PersonProto) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::with_capacity(model.encoded_len());
        model.encode(&mut buf).map_err(|e| CodecError::Encode {
            backend: self.name(),
            reason: e.to_string(),
        })?;
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<PersonProto, CodecError> {
        PersonProto::decode(bytes).map_err(|e| CodecError::Decode {
            backend: self.name(),
            reason: e.to_string(),
        })
    }
}
