//! Nexus landing page.
//!
//! Theme, scroll and motion logic is plain Rust and builds for every target so
//! it can be tested natively. The Yew front-end that renders the page is only
//! compiled for `wasm32`.

pub mod config;
pub mod content;
pub mod logging;
pub mod motion;
pub mod nav;
pub mod observe;
pub mod parallax;
pub mod scroll;
pub mod theme;
pub mod variants;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(target_arch = "wasm32")]
pub use frontend::run;
