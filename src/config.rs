use crate::{
    animation::ease::Ease,
    foundation::error::{SliderError, SliderResult},
    input::InputThresholds,
    transition::reveal::RevealStyle,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    pub duration_secs: f64,
    pub ease: Ease,
    pub wheel_threshold: f64,
    pub min_swipe_distance: f64,
    /// Mask progress at which the incoming slide's text reveal fires.
    pub text_reveal_at: f64,
    pub content_travel: f64,   // px, vertical steps and jump exit
    pub jump_entry_offset: f64, // px, horizontal jump entry
    pub text: TextRevealConfig,
    pub reveal: RevealStyle,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            duration_secs: 2.0,
            ease: Ease::Hop,
            wheel_threshold: 100.0,
            min_swipe_distance: 50.0,
            text_reveal_at: 0.33,
            content_travel: 500.0,
            jump_entry_offset: 250.0,
            text: TextRevealConfig::default(),
            reveal: RevealStyle::Directional,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextRevealConfig {
    pub duration_secs: f64,
    /// Each text block starts this long before the previous one ends.
    pub overlap_secs: f64,
    pub rise: f64, // px
    pub ease: Ease,
}

impl Default for TextRevealConfig {
    fn default() -> Self {
        Self {
            duration_secs: 0.8,
            overlap_secs: 0.3,
            rise: 20.0,
            ease: Ease::OutQuad,
        }
    }
}

impl TextRevealConfig {
    pub fn stagger_secs(&self) -> f64 {
        (self.duration_secs - self.overlap_secs).max(0.0)
    }
}

impl SliderConfig {
    pub fn from_json(s: &str) -> SliderResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn thresholds(&self) -> InputThresholds {
        InputThresholds {
            wheel: self.wheel_threshold,
            min_swipe: self.min_swipe_distance,
        }
    }

    pub fn validate(&self) -> SliderResult<()> {
        fn positive(name: &str, v: f64) -> SliderResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(SliderError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
            Ok(())
        }

        fn non_negative(name: &str, v: f64) -> SliderResult<()> {
            if !v.is_finite() || v < 0.0 {
                return Err(SliderError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
            Ok(())
        }

        positive("duration_secs", self.duration_secs)?;
        positive("wheel_threshold", self.wheel_threshold)?;
        positive("min_swipe_distance", self.min_swipe_distance)?;
        non_negative("content_travel", self.content_travel)?;
        non_negative("jump_entry_offset", self.jump_entry_offset)?;
        positive("text.duration_secs", self.text.duration_secs)?;
        non_negative("text.overlap_secs", self.text.overlap_secs)?;
        non_negative("text.rise", self.text.rise)?;

        if !(self.text_reveal_at > 0.0 && self.text_reveal_at <= 1.0) {
            return Err(SliderError::validation("text_reveal_at must be in (0, 1]"));
        }
        if self.text.overlap_secs >= self.text.duration_secs {
            return Err(SliderError::validation(
                "text.overlap_secs must be < text.duration_secs",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
