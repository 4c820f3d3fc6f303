//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The showcase is a single page. It owns the load lifecycle and delegates
//! rendering details to `components`.

pub mod showcase;
