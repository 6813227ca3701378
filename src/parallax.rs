//! Scroll-linked frames for the hero and product showcase sections.

use crate::motion::{Keyframes, Length, VisualFrame};
use crate::scroll::ScrollOffset;

pub const HERO_OFFSET: ScrollOffset = ScrollOffset::PINNED_TO_EXIT;
pub const SHOWCASE_OFFSET: ScrollOffset = ScrollOffset::ENTER_TO_EXIT;

const HERO_BACKGROUND_Y_PERCENT: Keyframes = Keyframes::new(&[(0.0, 0.0), (1.0, 50.0)]);
const HERO_CONTENT_Y: Keyframes = Keyframes::new(&[(0.0, 0.0), (1.0, 150.0)]);
const HERO_CONTENT_OPACITY: Keyframes = Keyframes::new(&[(0.0, 1.0), (0.5, 0.0)]);
const HERO_IMAGE_Y: Keyframes = Keyframes::new(&[(0.0, 0.0), (1.0, 100.0)]);
const HERO_IMAGE_SCALE: Keyframes = Keyframes::new(&[(0.0, 1.0), (1.0, 0.9)]);
const HERO_FLOATING_Y: [Keyframes; 2] = [
    Keyframes::new(&[(0.0, 0.0), (1.0, -80.0)]),
    Keyframes::new(&[(0.0, 0.0), (1.0, -120.0)]),
];
const HERO_BLOB_SCALE: Keyframes = Keyframes::new(&[(0.0, 1.0), (1.0, 1.5)]);
const HERO_BLOB_OPACITY: Keyframes = Keyframes::new(&[(0.0, 1.0), (0.8, 0.3)]);

const STAGE_Y: Keyframes = Keyframes::new(&[(0.0, 100.0), (1.0, -100.0)]);
const STAGE_OPACITY: Keyframes = Keyframes::new(&[(0.0, 0.0), (0.3, 1.0), (0.7, 1.0), (1.0, 0.0)]);
const STAGE_SCALE: Keyframes = Keyframes::new(&[(0.0, 0.9), (0.5, 1.0), (1.0, 0.95)]);
const STAGE_ROTATE_X: Keyframes = Keyframes::new(&[(0.0, 10.0), (0.5, 0.0), (1.0, -5.0)]);
const BACKDROP_SCALE: Keyframes = Keyframes::new(&[(0.0, 1.0), (1.0, 1.5)]);
const BACKDROP_OPACITY: Keyframes = Keyframes::new(&[(0.0, 0.2), (0.5, 0.4), (1.0, 0.1)]);
const ORB_TRACKS: [(Keyframes, Keyframes); 2] = [
    (
        Keyframes::new(&[(0.0, -100.0), (1.0, 150.0)]),
        Keyframes::new(&[(0.0, 50.0), (1.0, -100.0)]),
    ),
    (
        Keyframes::new(&[(0.0, 100.0), (1.0, -120.0)]),
        Keyframes::new(&[(0.0, -50.0), (1.0, 80.0)]),
    ),
];
const HIGHLIGHT_Y: [Keyframes; 3] = [
    Keyframes::new(&[(0.0, 0.0), (1.0, -80.0)]),
    Keyframes::new(&[(0.0, 0.0), (1.0, -120.0)]),
    Keyframes::new(&[(0.0, 0.0), (1.0, -60.0)]),
];

/// Progress at which the showcase stage sits untransformed.
pub const SHOWCASE_REST_PROGRESS: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub background: VisualFrame,
    pub content: VisualFrame,
    pub image: VisualFrame,
    pub floating_cards: [VisualFrame; 2],
    /// Shared by the two drifting blobs.
    pub blobs: VisualFrame,
    /// Centre blob follows the scale only.
    pub center_blob: VisualFrame,
}

pub fn hero_frame(progress: f64) -> HeroFrame {
    let blob_scale = HERO_BLOB_SCALE.sample(progress);
    HeroFrame {
        background: VisualFrame::IDENTITY
            .with_y(Length::Percent(HERO_BACKGROUND_Y_PERCENT.sample(progress))),
        content: VisualFrame::IDENTITY
            .with_y(Length::Px(HERO_CONTENT_Y.sample(progress)))
            .with_opacity(HERO_CONTENT_OPACITY.sample(progress)),
        image: VisualFrame::IDENTITY
            .with_y(Length::Px(HERO_IMAGE_Y.sample(progress)))
            .with_scale(HERO_IMAGE_SCALE.sample(progress)),
        floating_cards: HERO_FLOATING_Y
            .map(|track| VisualFrame::IDENTITY.with_y(Length::Px(track.sample(progress)))),
        blobs: VisualFrame::IDENTITY
            .with_scale(blob_scale)
            .with_opacity(HERO_BLOB_OPACITY.sample(progress)),
        center_blob: VisualFrame::IDENTITY.with_scale(blob_scale),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowcaseFrame {
    /// Product screenshot and its floating cards.
    pub stage: VisualFrame,
    pub backdrop: VisualFrame,
    pub orbs: [VisualFrame; 2],
    pub highlight_cards: [VisualFrame; 3],
}

impl ShowcaseFrame {
    /// Stage fully visible and flat; used when motion is reduced.
    pub fn at_rest() -> Self {
        let mut frame = showcase_frame(SHOWCASE_REST_PROGRESS);
        frame.orbs = [VisualFrame::IDENTITY; 2];
        frame.highlight_cards = [VisualFrame::IDENTITY; 3];
        frame
    }
}

pub fn showcase_frame(progress: f64) -> ShowcaseFrame {
    ShowcaseFrame {
        stage: VisualFrame::IDENTITY
            .with_y(Length::Px(STAGE_Y.sample(progress)))
            .with_opacity(STAGE_OPACITY.sample(progress))
            .with_scale(STAGE_SCALE.sample(progress))
            .with_rotate_x(STAGE_ROTATE_X.sample(progress)),
        backdrop: VisualFrame::IDENTITY
            .with_scale(BACKDROP_SCALE.sample(progress))
            .with_opacity(BACKDROP_OPACITY.sample(progress)),
        orbs: ORB_TRACKS.map(|(x, y)| {
            VisualFrame::IDENTITY
                .with_x(Length::Px(x.sample(progress)))
                .with_y(Length::Px(y.sample(progress)))
        }),
        highlight_cards: HIGHLIGHT_Y
            .map(|track| VisualFrame::IDENTITY.with_y(Length::Px(track.sample(progress)))),
    }
}
