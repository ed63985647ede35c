//! Input normalization: raw wheel/touch/programmatic input to [`Command`]s.

use crate::foundation::core::{Category, Point};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Command {
    Advance,
    Retreat,
    Jump(Category),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputThresholds {
    pub wheel: f64,
    pub min_swipe: f64,
}

#[derive(Clone, Copy, Debug, Default)]
struct TouchGesture {
    start: Point,
    end: Option<Point>,
}

/// Coalesces analog input into at most one command per gesture.
#[derive(Clone, Debug)]
pub struct InputNormalizer {
    thresholds: InputThresholds,
    accumulated: f64,
    touch: Option<TouchGesture>,
}

impl InputNormalizer {
    pub fn new(thresholds: InputThresholds) -> Self {
        Self {
            thresholds,
            accumulated: 0.0,
            touch: None,
        }
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Feed a vertical wheel delta (positive scrolls toward the next slide).
    pub fn wheel(&mut self, delta_y: f64, locked: bool) -> Option<Command> {
        if locked || !delta_y.is_finite() {
            self.accumulated = 0.0;
            return None;
        }

        self.accumulated += delta_y;
        if self.accumulated.abs() < self.thresholds.wheel {
            return None;
        }

        let cmd = if self.accumulated > 0.0 {
            Command::Advance
        } else {
            Command::Retreat
        };
        self.accumulated = 0.0;
        Some(cmd)
    }

    pub fn touch_start(&mut self, at: Point) {
        self.touch = Some(TouchGesture {
            start: at,
            end: None,
        });
    }

    pub fn touch_move(&mut self, at: Point) {
        if let Some(gesture) = self.touch.as_mut() {
            gesture.end = Some(at);
        }
    }

    /// Finish the gesture. Swiping up (finger moves toward smaller y) advances.
    pub fn touch_end(&mut self, locked: bool) -> Option<Command> {
        let gesture = self.touch.take()?;
        let end = gesture.end?;
        if locked {
            return None;
        }

        let dy = gesture.start.y - end.y;
        let dx = gesture.start.x - end.x;
        if dy.abs() <= dx.abs() {
            return None;
        }

        if dy > self.thresholds.min_swipe {
            Some(Command::Advance)
        } else if dy < -self.thresholds.min_swipe {
            Some(Command::Retreat)
        } else {
            None
        }
    }

    /// Programmatic jumps bypass thresholding.
    pub fn jump(&self, category: &str) -> Command {
        Command::Jump(Category::new(category))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/normalize.rs"]
mod tests;
