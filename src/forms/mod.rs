//! Form definitions and client-side validation.
//!
//! Validation failures are resolved entirely locally as a field → message
//! map; they never reach the network layer.

use std::collections::BTreeMap;

pub mod profile;

/// Per-field validation messages. An absent field is valid; an empty map
/// means the whole form is valid.
pub type FieldErrors = BTreeMap<&'static str, String>;
