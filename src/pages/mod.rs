//! Page-level view controllers, one per route.

pub mod hospitals;
pub mod login;
pub mod patients;
