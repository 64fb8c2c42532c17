//! Request gate module
//!
//! Pattern-matches request headers to turn away non-browser clients.
//! This is a cosmetic filter and not an access-control mechanism.

mod filter;

pub use filter::{AccessDecision, AccessFilter, DenyReason, GateScope};
