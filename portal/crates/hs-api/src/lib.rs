//! HTTP client for the Heritage Shipping portal backend.
//!
//! Every call returns [`ApiResult`]; a non-success status never decodes a
//! body into the success type.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{ApiClient, ApiError, ApiResult};
