//! Common types used throughout pagechain
//!
//! This module contains shared record definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Records
// ============================================================================

/// A user as returned by the course roster endpoint
///
/// Fields not listed here are dropped when a page is canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub login_id: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: i64, name: impl Into<String>, login_id: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            login_id: login_id.into(),
        }
    }
}
