use kurbo::{CubicBez, ParamCurve, Point};

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Fast launch with a long settle; the slide transition curve.
    Hop,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Hop => hop(t),
        }
    }
}

// M0,0 C0.083,0.294 0.117,0.767 0.413,0.908 0.606,1 0.752,1 1,1
const HOP_SEGMENTS: [[(f64, f64); 4]; 2] = [
    [(0.0, 0.0), (0.083, 0.294), (0.117, 0.767), (0.413, 0.908)],
    [(0.413, 0.908), (0.606, 1.0), (0.752, 1.0), (1.0, 1.0)],
];

fn hop(x: f64) -> f64 {
    if x >= 1.0 {
        return 1.0;
    }
    if x <= 0.0 {
        return 0.0;
    }
    let seg = if x < HOP_SEGMENTS[1][0].0 {
        &HOP_SEGMENTS[0]
    } else {
        &HOP_SEGMENTS[1]
    };
    let curve = CubicBez::new(
        Point::new(seg[0].0, seg[0].1),
        Point::new(seg[1].0, seg[1].1),
        Point::new(seg[2].0, seg[2].1),
        Point::new(seg[3].0, seg[3].1),
    );
    curve.eval(solve_param_for_x(&curve, x)).y
}

// x(s) is monotonic on both segments, so bisection converges.
fn solve_param_for_x(curve: &CubicBez, x: f64) -> f64 {
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..48 {
        let mid = 0.5 * (lo + hi);
        if curve.eval(mid).x < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
