//! Shared foundational types used across the conlog crates.
//!
//! This crate provides the [`Fault`] error type raised by the logging
//! pipeline, the [`FromDiagnostic`] conversion used to pick a raised error
//! kind, and the [`CallSite`] captured by the call-site macros.

#![warn(missing_docs)]

pub mod result;
pub mod site;

pub use result::{ConlogResult, Fault, FromDiagnostic};
pub use site::CallSite;
