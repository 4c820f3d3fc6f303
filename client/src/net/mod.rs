//! Networking for the showcase.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single examples-document fetch. Everything else the
//! page shows (audio, spectrograms) is loaded by the browser's own media
//! elements.

pub mod api;
