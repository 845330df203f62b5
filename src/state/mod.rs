//! Shared client-side state modules.
//!
//! Split by domain so components can depend on small focused models: the
//! decoded session in `auth`, the hospital dashboard's form buffers in
//! `hospital`.

pub mod auth;
pub mod hospital;
