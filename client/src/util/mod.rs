//! Browser environment helpers.
//!
//! `base_path` works out which URL prefix the page was published under, so
//! the examples document and its media resolve on both local and project
//! deployments.

pub mod base_path;
