// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark workload: a person carrying a fixed list of documents.
//!
//! The shape is fixed so every backend serializes identical input. Timestamps
//! come from the wall clock at construction, so encoded bytes differ between
//! runs; only timing is compared.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Number of documents attached to the benchmark person.
pub const DOCUMENT_COUNT: usize = 1000;

const PERSON_AGE: i32 = 123;
const PERSON_NAME: &str = "John Doe";
const DOCUMENT_CONTENT: &str = "abcdefghijklmnopqrstuvwxyzüäçéčß";

/// A single document record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i32,
    pub name: String,
    pub content: String,
    pub expiration_date: DateTime<Utc>,
}

/// The root object graph handed to every backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub age: i32,
    pub birthday: DateTime<Utc>,
    pub name: String,
    /// Position in the list identifies a document.
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// Build the standard benchmark workload with [`DOCUMENT_COUNT`] documents.
pub fn create_workload() -> Person {
    create_workload_with(DOCUMENT_COUNT)
}

/// Build a workload of the standard shape with `count` documents.
///
/// Document `i` expires `i` hours from now.
pub fn create_workload_with(count: usize) -> Person {
    let now = Utc::now();
    let documents = (0..count)
        .map(|i| Document {
            id: i as i32,
            name: format!("License{}", i),
            content: DOCUMENT_CONTENT.to_string(),
            expiration_date: now + Duration::hours(i as i64),
        })
        .collect();

    Person {
        age: PERSON_AGE,
        birthday: now,
        name: PERSON_NAME.to_string(),
        documents,
    }
}
