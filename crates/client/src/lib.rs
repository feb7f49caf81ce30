//! HTTP client for the travel inquiry collection service.

mod api;

pub use api::{InquiryApi, InquiryApiError, DEFAULT_TIMEOUT};
