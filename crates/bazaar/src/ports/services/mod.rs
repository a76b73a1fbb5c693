//! Service Ports
//!
//! Interfaces for collaborators the domain delegates to.

mod password_hasher;

pub use password_hasher::*;
