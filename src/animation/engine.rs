//! Contract between the slider and whatever performs interpolation.
//!
//! The slider never interpolates on its own. It asks an [`AnimationEngine`]
//! to move element properties toward target values and learns about progress
//! and completion through [`EngineEvent`]s that the host routes back into
//! [`crate::StorySlider::handle_engine_event`].

use crate::{
    animation::ease::Ease,
    foundation::core::{ElementId, Vec2},
    transition::reveal::RevealMask,
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TweenId(pub u64);

/// Target property values. `None` leaves a property untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Properties {
    pub mask: Option<RevealMask>,
    pub offset: Option<Vec2>, // content displacement in px
    pub opacity: Option<f64>,
}

impl Properties {
    pub fn mask(mask: RevealMask) -> Self {
        Self {
            mask: Some(mask),
            ..Self::default()
        }
    }

    pub fn offset(offset: Vec2) -> Self {
        Self {
            offset: Some(offset),
            ..Self::default()
        }
    }

    pub fn faded(opacity: f64, offset: Vec2) -> Self {
        Self {
            mask: None,
            offset: Some(offset),
            opacity: Some(opacity),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenOptions {
    pub duration_secs: f64,
    pub ease: Ease,
    pub delay_secs: f64,
    /// Report progress and completion for this tween.
    pub tracked: bool,
}

impl TweenOptions {
    pub fn new(duration_secs: f64, ease: Ease) -> Self {
        Self {
            duration_secs,
            ease,
            delay_secs: 0.0,
            tracked: false,
        }
    }

    pub fn delayed(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    pub fn tracked(mut self) -> Self {
        self.tracked = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum EngineEvent {
    /// Linear (un-eased) time progress in `[0, 1]`.
    Progress { tween: TweenId, progress: f64 },
    Complete { tween: TweenId },
}

pub trait AnimationEngine {
    /// Animate `targets` from their current values toward `to`.
    /// Concurrent tweens on distinct properties must run independently.
    fn animate(&mut self, targets: &[ElementId], to: Properties, opts: TweenOptions) -> TweenId;

    /// Assign properties with zero duration.
    fn set_immediate(&mut self, targets: &[ElementId], props: Properties);
}

/// Engines whose clock is advanced explicitly by the host.
pub trait Clocked {
    fn advance(&mut self, dt_secs: f64) -> Vec<EngineEvent>;
}
