//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the showcase chrome and the example cards. They take
//! plain values as props; only `pages::showcase` knows about load state.

pub mod about_section;
pub mod audio_player;
pub mod example_card;
pub mod example_section;
pub mod signal_panel;
pub mod site_footer;
pub mod site_header;
