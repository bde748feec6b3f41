//! cdc-diff — structural field-level diff for CDC event payloads.
//!
//! # Overview
//!
//! Change-data-capture events carry a pair of row states: the row as it was
//! (`before`) and the row as it is now (`after`). This crate compares two
//! such JSON objects key by key and classifies every top-level field as
//! changed, added, removed, or unchanged. It also knows how to pull the
//! before/after pair out of the common envelope shapes those events ship in
//! (root-level pair, creation event without a prior state, legacy
//! `payload`-wrapped envelope).
//!
//! # Example
//!
//! ```
//! use cdc_diff::{compare, DiffKind};
//! use serde_json::json;
//!
//! let before = json!({"id": 1, "name": "ada", "role": "admin"});
//! let after = json!({"id": 1, "name": "ada lovelace", "email": "ada@example.com"});
//!
//! let entries = compare(&before, &after).unwrap();
//! assert_eq!(entries[0].key, "name");
//! assert_eq!(entries[0].kind, DiffKind::Changed);
//! ```

pub mod diff;
pub mod envelope;
pub mod equal;
pub mod error;

pub use diff::{compare, DiffEntry, DiffKind};
pub use envelope::{extract_envelope, Envelope};
pub use equal::deep_equal;
pub use error::{json_type_name, DiffError, EnvelopeError, Side};
