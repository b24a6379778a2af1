//! Domain logic for the university administration backend.
//!
//! Pure types and functions only -- no I/O, no framework dependencies.
//! The `academe-db` and `academe-api` crates build on these primitives.

pub mod attention;
pub mod decisions;
pub mod error;
pub mod meetings;
pub mod plans;
pub mod roles;
pub mod schedules;
pub mod signing;
pub mod types;
