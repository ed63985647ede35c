use kurbo::Point;

use crate::{
    animation::engine::Lerp,
    foundation::core::{SplitMix64, Vec2},
};

/// Clip quad in unit slide space, corners ordered top-left, top-right,
/// bottom-right, bottom-left.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealMask(pub [Point; 4]);

impl RevealMask {
    pub const FULL: Self = Self([
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]);

    /// Collapsed onto the bottom edge; reveals upward.
    pub const HIDDEN_BOTTOM: Self = Self([
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]);

    /// Collapsed onto the top edge; reveals downward.
    pub const HIDDEN_TOP: Self = Self([
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 0.0),
    ]);

    /// Collapsed onto the right edge; reveals leftward.
    pub const HIDDEN_RIGHT: Self = Self([
        Point::new(1.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 1.0),
    ]);

    /// Visible fraction of the slide (shoelace area of the quad).
    pub fn visible_area(&self) -> f64 {
        let p = &self.0;
        let mut twice = 0.0;
        for i in 0..4 {
            let a = p[i];
            let b = p[(i + 1) % 4];
            twice += a.x * b.y - b.x * a.y;
        }
        (twice * 0.5).abs()
    }

    pub fn is_hidden(&self) -> bool {
        self.visible_area() < 1e-9
    }

    /// CSS `clip-path` rendering, for hosts that paint through a browser.
    pub fn to_css(&self) -> String {
        let corners: Vec<String> = self
            .0
            .iter()
            .map(|p| format!("{}% {}%", p.x * 100.0, p.y * 100.0))
            .collect();
        format!("polygon({})", corners.join(", "))
    }
}

impl Lerp for RevealMask {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let mut out = a.0;
        for (o, (pa, pb)) in out.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
            *o = pa.lerp(*pb, t);
        }
        Self(out)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Direction {
    Forward,
    Backward,
    /// Forward by `steps` buffer positions in one visual transition.
    Jump { steps: usize },
}

/// How reveal geometry is chosen for each transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealStyle {
    /// Geometry follows the direction of travel.
    #[default]
    Directional,
    /// Step transitions pick bottom-up or top-down at random.
    Random { seed: u64 },
}

/// Geometry for one transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPlan {
    pub initial: RevealMask,
    pub target: RevealMask,
    /// Incoming content starts here and travels to zero.
    pub entry: Vec2,
    /// Outgoing content travels here.
    pub exit: Vec2,
    /// Shape given to slides that leave the front, ready for a later reveal.
    pub reset: RevealMask,
}

impl RevealPlan {
    pub fn for_direction(
        direction: Direction,
        style: RevealStyle,
        rng: &mut SplitMix64,
        travel: f64,
        jump_entry: f64,
    ) -> Self {
        match direction {
            Direction::Jump { .. } => Self {
                initial: RevealMask::HIDDEN_RIGHT,
                target: RevealMask::FULL,
                entry: Vec2::new(jump_entry, 0.0),
                exit: Vec2::new(-travel, 0.0),
                reset: RevealMask::HIDDEN_RIGHT,
            },
            Direction::Forward | Direction::Backward => {
                let from_below = match style {
                    RevealStyle::Directional => direction == Direction::Forward,
                    RevealStyle::Random { .. } => rng.pick(2) == 0,
                };
                if from_below {
                    Self::vertical(RevealMask::HIDDEN_BOTTOM, travel)
                } else {
                    Self::vertical(RevealMask::HIDDEN_TOP, -travel)
                }
            }
        }
    }

    fn vertical(initial: RevealMask, entry_y: f64) -> Self {
        Self {
            initial,
            target: RevealMask::FULL,
            entry: Vec2::new(0.0, entry_y),
            exit: Vec2::new(0.0, -entry_y),
            reset: RevealMask::HIDDEN_BOTTOM,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/reveal.rs"]
mod tests;
