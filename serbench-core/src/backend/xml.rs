// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! XML text encoding through quick-xml's serde support.
//!
//! The root element is `<Person>`; each document becomes a repeated
//! `<documents>` child element.

use super::{Backend, BackendKind};
use crate::error::CodecError;
use crate::workload::Person;

/// quick-xml backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlBackend;

impl Backend for XmlBackend {
    type Model = Person;

    fn name(&self) -> &'static str {
        BackendKind::Xml.label()
    }

    fn prepare(&self, person: &Person) -> Person {
        person.clone()
    }

    fn encode(&self, model: &Person) -> Result<Vec<u8>, CodecError> {
        quick_xml::se::to_string(model)
            .map(String::into_bytes)
            .map_err(|e| CodecError::Encode {
                backend: self.name(),
                reason: e.to_string(),
            })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Person, CodecError> {
        let text = std::str::from_utf8(bytes).map_err(|e| CodecError::Decode {
            backend: self.name(),
            reason: e.to_string(),
        })?;

        quick_xml::de::from_str(text).map_err(|e| CodecError::Decode {
            backend: self.name(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_element() {
        let person = crate::workload::create_workload_with(2);
        let bytes = XmlBackend.encode(&person).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("<Person>"));
        assert_eq!(text.matches("<documents>").count(), 2);
    }

    #[test]
    fn test_empty_document_list() {
        let mut person = crate::workload::create_workload_with(0);
        person.age = 7;
        let bytes = XmlBackend.encode(&person).unwrap();
        let decoded = XmlBackend.decode(&bytes).unwrap();

        assert!(decoded.documents.is_empty());
        assert_eq!(decoded.age, 7);
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let err = XmlBackend.decode(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, CodecError::Decode { backend: "Quick Xml", .. }));
    }
}
