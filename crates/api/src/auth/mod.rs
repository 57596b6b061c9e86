//! Admin session tokens.

pub mod token;
