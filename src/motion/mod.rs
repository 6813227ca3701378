//! Scroll- and visibility-driven visual parameters.

mod easing;
mod frame;
mod keyframes;
mod reveal;

pub use easing::{Easing, Spring};
pub use frame::{Length, VisualFrame};
pub use keyframes::Keyframes;
pub use reveal::{
    inset_root_margin, stagger_delay, RevealLatch, RevealPreset, RevealTransition,
    DEFAULT_REVEAL_DURATION_SECS, DEFAULT_STAGGER_STEP_SECS,
};
