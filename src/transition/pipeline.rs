//! Stages of one slide transition: setup, run, threshold text reveal, commit.

use crate::{
    animation::engine::{AnimationEngine, Properties, TweenId, TweenOptions},
    config::{SliderConfig, TextRevealConfig},
    foundation::core::{ElementId, SlideId, Vec2},
    slides::buffer::CyclicSlideBuffer,
    transition::reveal::{Direction, RevealMask, RevealPlan},
};

/// Why an admitted command ends without any visual change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    TooFewSlides,
    AlreadyCurrent,
    UnknownCategory,
    MissingBinding,
}

/// Element handles taking part in one transition.
#[derive(Clone, Debug)]
pub struct Participants {
    pub outgoing: SlideId,
    pub incoming: SlideId,
    pub outgoing_content: ElementId,
    pub incoming_slide: ElementId,
    pub incoming_content: ElementId,
    pub incoming_texts: Vec<ElementId>,
    /// Slide roots that leave the front on commit.
    pub departing: Vec<ElementId>,
}

impl Participants {
    /// Gather bindings for moving `target` positions forward (or to the tail
    /// slide for `Direction::Backward`).
    pub fn collect(
        buffer: &CyclicSlideBuffer,
        direction: Direction,
        target: usize,
    ) -> Result<Self, Skip> {
        let outgoing = buffer.current().ok_or(Skip::TooFewSlides)?;
        let incoming = buffer.get(target).ok_or(Skip::TooFewSlides)?;

        let (Some(out_b), Some(in_b)) = (&outgoing.binding, &incoming.binding) else {
            tracing::warn!(outgoing = ?outgoing.id, incoming = ?incoming.id, "slide element missing");
            return Err(Skip::MissingBinding);
        };
        let (Some(outgoing_content), Some(incoming_content)) = (out_b.content, in_b.content) else {
            tracing::warn!(outgoing = ?outgoing.id, incoming = ?incoming.id, "content root missing");
            return Err(Skip::MissingBinding);
        };

        let departing = match direction {
            Direction::Forward | Direction::Backward => vec![out_b.slide],
            Direction::Jump { steps } => buffer
                .iter()
                .take(steps)
                .filter_map(|h| h.binding.as_ref().map(|b| b.slide))
                .collect(),
        };

        Ok(Self {
            outgoing: outgoing.id,
            incoming: incoming.id,
            outgoing_content,
            incoming_slide: in_b.slide,
            incoming_content,
            incoming_texts: in_b.texts.clone(),
            departing,
        })
    }
}

/// A running transition. Exists only between admission and commit.
#[derive(Debug)]
pub struct InFlight {
    pub tween: TweenId,
    pub direction: Direction,
    pub parts: Participants,
    reset: RevealMask,
    text_fired: bool, // one-shot latch for this invocation
}

impl InFlight {
    /// Setup and run: position both slides, then start the concurrent
    /// content displacement and mask reveal. Only the mask tween is tracked.
    pub fn start<E: AnimationEngine>(
        engine: &mut E,
        cfg: &SliderConfig,
        direction: Direction,
        plan: RevealPlan,
        parts: Participants,
    ) -> Self {
        engine.set_immediate(&[parts.incoming_slide], Properties::mask(plan.initial));
        engine.set_immediate(&[parts.incoming_content], Properties::offset(plan.entry));
        engine.set_immediate(&[parts.outgoing_content], Properties::offset(Vec2::ZERO));

        let opts = TweenOptions::new(cfg.duration_secs, cfg.ease);
        engine.animate(&[parts.outgoing_content], Properties::offset(plan.exit), opts);
        engine.animate(&[parts.incoming_content], Properties::offset(Vec2::ZERO), opts);
        let tween = engine.animate(
            &[parts.incoming_slide],
            Properties::mask(plan.target),
            opts.tracked(),
        );

        tracing::debug!(?direction, from = ?parts.outgoing, to = ?parts.incoming, "transition started");
        Self {
            tween,
            direction,
            parts,
            reset: plan.reset,
            text_fired: false,
        }
    }

    pub fn text_fired(&self) -> bool {
        self.text_fired
    }

    pub fn on_progress<E: AnimationEngine>(
        &mut self,
        engine: &mut E,
        cfg: &SliderConfig,
        progress: f64,
    ) {
        if progress >= cfg.text_reveal_at {
            self.fire_text(engine, &cfg.text);
        }
    }

    fn fire_text<E: AnimationEngine>(&mut self, engine: &mut E, text: &TextRevealConfig) {
        if self.text_fired {
            return;
        }
        self.text_fired = true;
        reveal_text(engine, &self.parts.incoming_texts, text);
    }

    /// Reset departed slides, rotate the buffer. The caller re-projects
    /// derived state and releases the lock.
    pub fn commit<E: AnimationEngine>(
        mut self,
        engine: &mut E,
        cfg: &SliderConfig,
        buffer: &mut CyclicSlideBuffer,
    ) -> Participants {
        self.fire_text(engine, &cfg.text);
        engine.set_immediate(&self.parts.departing, Properties::mask(self.reset));

        match self.direction {
            Direction::Forward => buffer.rotate_forward(),
            Direction::Backward => buffer.rotate_backward(),
            Direction::Jump { steps } => buffer.rotate_to_front(steps),
        }
        self.parts
    }
}

/// Staggered fade-and-rise of a slide's text blocks. No-op without texts.
pub fn reveal_text<E: AnimationEngine>(engine: &mut E, texts: &[ElementId], cfg: &TextRevealConfig) {
    if texts.is_empty() {
        return;
    }

    engine.set_immediate(texts, Properties::faded(0.0, Vec2::new(0.0, cfg.rise)));
    let stagger = cfg.stagger_secs();
    for (i, el) in texts.iter().enumerate() {
        let opts = TweenOptions::new(cfg.duration_secs, cfg.ease).delayed(i as f64 * stagger);
        engine.animate(&[*el], Properties::faded(1.0, Vec2::ZERO), opts);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/pipeline.rs"]
mod tests;
