//! Storyslider orchestrates the slide transitions behind a story/gallery view.
//!
//! - Load a [`SlideRegistry`] and a [`SliderConfig`]
//! - Mount a [`StorySlider`] over any [`AnimationEngine`] and [`ContentRenderer`]
//! - Feed it wheel/touch input or call [`StorySlider::advance`],
//!   [`StorySlider::retreat`], [`StorySlider::jump_to_category`]
//! - Route engine progress/completion back in and read [`DerivedUi`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod derived;
pub mod foundation;
pub mod input;
pub mod slider;
pub mod slides;
pub mod transition;
pub mod viewport;

pub use crate::animation::ease::Ease;
pub use crate::animation::engine::{
    AnimationEngine, Clocked, EngineEvent, Properties, TweenId, TweenOptions,
};
pub use crate::animation::timeline::{ElementState, Timeline};
pub use crate::config::{SliderConfig, TextRevealConfig};
pub use crate::derived::DerivedUi;
pub use crate::foundation::core::{Category, ElementId, Point, SlideId, Vec2};
pub use crate::foundation::error::{SliderError, SliderResult};
pub use crate::input::Command;
pub use crate::slider::StorySlider;
pub use crate::slides::registry::{CategoryShare, SlideRecord, SlideRegistry};
pub use crate::slides::render::{ContentRenderer, HeadlessRenderer, SlideBinding};
pub use crate::transition::lock::TransitionState;
pub use crate::transition::reveal::{RevealMask, RevealStyle};
pub use crate::viewport::{ScrollGuard, Viewport};
