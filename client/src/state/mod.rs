//! Client-side view state.
//!
//! DESIGN
//! ======
//! The page has exactly one piece of state: whether the examples document
//! has arrived yet.

pub mod showcase;
