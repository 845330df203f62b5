//! Client-side session core: credential storage, claim decoding, and
//! route gating.
//!
//! DESIGN
//! ======
//! Nothing in this module talks to the network. Storage is an injectable
//! trait so the request gateway and the pages share one credential slot and
//! tests can substitute an in-memory fake. Decoding only proves a credential
//! is structurally well formed; the backend's 401 stays the sole authority
//! on whether it is still valid.

pub mod claims;
pub mod guard;
pub mod store;
