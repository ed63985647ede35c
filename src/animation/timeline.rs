use std::collections::BTreeMap;

use crate::{
    animation::engine::{AnimationEngine, Clocked, EngineEvent, Lerp, Properties, TweenId, TweenOptions},
    foundation::core::{ElementId, Vec2},
    transition::reveal::RevealMask,
};

/// Resolved property values of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ElementState {
    pub mask: RevealMask,
    pub offset: Vec2,
    pub opacity: f64,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            mask: RevealMask::FULL,
            offset: Vec2::ZERO,
            opacity: 1.0,
        }
    }
}

impl ElementState {
    fn assign(&mut self, props: &Properties) {
        if let Some(mask) = props.mask {
            self.mask = mask;
        }
        if let Some(offset) = props.offset {
            self.offset = offset;
        }
        if let Some(opacity) = props.opacity {
            self.opacity = opacity;
        }
    }

    fn blend(from: &Self, to: &Properties, t: f64) -> Properties {
        Properties {
            mask: to.mask.map(|m| <RevealMask as Lerp>::lerp(&from.mask, &m, t)),
            offset: to.offset.map(|o| <Vec2 as Lerp>::lerp(&from.offset, &o, t)),
            opacity: to.opacity.map(|o| <f64 as Lerp>::lerp(&from.opacity, &o, t)),
        }
    }
}

#[derive(Clone, Debug)]
struct Tween {
    id: TweenId,
    targets: Vec<ElementId>,
    to: Properties,
    opts: TweenOptions,
    elapsed: f64,
    from: Option<Vec<ElementState>>, // captured once the delay has elapsed
}

/// Deterministic in-memory animation engine.
///
/// Tweens advance only when [`Clocked::advance`] is called, in creation order.
/// Progress is reported for tracked tweens on every step they are running,
/// followed by a completion event on the step they reach the end.
#[derive(Debug, Default)]
pub struct Timeline {
    elements: BTreeMap<ElementId, ElementState>,
    tweens: Vec<Tween>,
    next_id: u64,
    now: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, el: ElementId) -> ElementState {
        self.elements.get(&el).copied().unwrap_or_default()
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    fn step_tween(&mut self, idx: usize, dt: f64, events: &mut Vec<EngineEvent>) -> bool {
        let tween = &mut self.tweens[idx];
        tween.elapsed += dt;
        if tween.elapsed < tween.opts.delay_secs {
            return false;
        }

        if tween.from.is_none() {
            tween.from = Some(
                tween
                    .targets
                    .iter()
                    .map(|el| self.elements.get(el).copied().unwrap_or_default())
                    .collect(),
            );
        }

        let local = tween.elapsed - tween.opts.delay_secs;
        let progress = if tween.opts.duration_secs <= 0.0 {
            1.0
        } else {
            (local / tween.opts.duration_secs).clamp(0.0, 1.0)
        };
        let eased = tween.opts.ease.apply(progress);

        let from = tween.from.as_deref().unwrap_or_default();
        for (el, start) in tween.targets.iter().zip(from) {
            let props = ElementState::blend(start, &tween.to, eased);
            self.elements.entry(*el).or_default().assign(&props);
        }

        let done = progress >= 1.0;
        if tween.opts.tracked {
            events.push(EngineEvent::Progress {
                tween: tween.id,
                progress,
            });
            if done {
                events.push(EngineEvent::Complete { tween: tween.id });
            }
        }
        done
    }
}

impl AnimationEngine for Timeline {
    fn animate(&mut self, targets: &[ElementId], to: Properties, opts: TweenOptions) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.push(Tween {
            id,
            targets: targets.to_vec(),
            to,
            opts,
            elapsed: 0.0,
            from: None,
        });
        id
    }

    fn set_immediate(&mut self, targets: &[ElementId], props: Properties) {
        for el in targets {
            self.elements.entry(*el).or_default().assign(&props);
        }
    }
}

impl Clocked for Timeline {
    fn advance(&mut self, dt_secs: f64) -> Vec<EngineEvent> {
        let dt = dt_secs.max(0.0);
        self.now += dt;

        let mut events = Vec::new();
        let mut idx = 0;
        while idx < self.tweens.len() {
            if self.step_tween(idx, dt, &mut events) {
                self.tweens.remove(idx);
            } else {
                idx += 1;
            }
        }
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
