//! Domain logic for the travel inquiry intake wizard.
//!
//! Owns the draft record, the seven step definitions, the wizard session
//! state machine, and the one-shot submission pipeline.  Network IO stays
//! behind the [`submit::InquiryBackend`] seam; see `getaway-client` for
//! the HTTP implementation.

pub mod draft;
pub mod error;
pub mod options;
pub mod payload;
pub mod session;
pub mod steps;
pub mod submit;
