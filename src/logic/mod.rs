//! Pure functional business logic
//!
//! This module contains pure functions that implement business logic
//! without side effects. These functions can be tested independently
//! and composed together to build imperative shell functions.
//!
//! The key principle: all functions here are pure - they take inputs,
//! return outputs, and have no side effects (no I/O, no printing, no clock reads).

pub mod clarity;
pub mod contract_name;
pub mod decimals;
pub mod form;
pub mod network;

// Re-export commonly used types
pub use clarity::{build_contract_source, clamp_decimals, escape_clarity_string};
pub use contract_name::is_valid_contract_name;
pub use decimals::parse_decimals;
pub use form::{Alert, AlertKind, FieldView, FormState, FormView, Panel};
pub use network::NetworkDescriptor;
