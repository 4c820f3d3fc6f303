//! # client
//!
//! Leptos + WASM frontend for the speech inpainting showcase.
//!
//! The page fetches `public/data/examples.json` once, then renders one
//! section per gap duration with a card per example. Each card carries the
//! masked, inpainted and target signals as caption, audio player and
//! spectrogram image. The data model lives in the shared `catalog` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
