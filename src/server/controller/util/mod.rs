//! Utility functions for controller request handling.
//!
//! Extractor rejections are converted into the API's JSON error envelope here so that a
//! malformed path or body is answered like every other client error.

pub mod request;
