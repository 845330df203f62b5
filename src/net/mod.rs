//! Typed access to the patient-record backend.
//!
//! DESIGN
//! ======
//! Every request leaves through [`api::Gateway`], which attaches the stored
//! credential and classifies each failure as `Unauthorized`, `Rejected`, or
//! `Unreachable` so the pages handle errors uniformly instead of re-deriving
//! the branching per call.

pub mod api;
pub mod error;
pub mod types;
