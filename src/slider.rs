use crate::{
    animation::engine::{AnimationEngine, Clocked, EngineEvent, Properties},
    config::SliderConfig,
    derived::DerivedUi,
    foundation::{
        core::{Point, SlideId, SplitMix64},
        error::{SliderError, SliderResult},
    },
    input::{Command, InputNormalizer},
    slides::{
        buffer::{CyclicSlideBuffer, SlideHandle},
        registry::SlideRegistry,
        render::ContentRenderer,
    },
    transition::{
        lock::{TransitionLock, TransitionState},
        pipeline::{self, InFlight, Participants, Skip},
        reveal::{Direction, RevealMask, RevealPlan, RevealStyle},
    },
};

/// Orchestrates a story/gallery slider: one transition at a time, driven by
/// normalized input, committed only when the engine reports completion.
///
/// All methods run on the host's event context. Engine progress and
/// completion must be fed back through [`StorySlider::handle_engine_event`]
/// (or [`StorySlider::tick`] for [`Clocked`] engines).
pub struct StorySlider<E: AnimationEngine> {
    registry: SlideRegistry,
    config: SliderConfig,
    engine: E,
    buffer: CyclicSlideBuffer,
    lock: TransitionLock,
    input: InputNormalizer,
    derived: DerivedUi,
    in_flight: Option<InFlight>,
    rng: SplitMix64,
}

impl<E: AnimationEngine> StorySlider<E> {
    /// Validate inputs, bind every slide through `renderer` and show the
    /// first one with its text revealed.
    #[tracing::instrument(skip_all, fields(slides = registry.len()))]
    pub fn mount<R: ContentRenderer>(
        registry: SlideRegistry,
        config: SliderConfig,
        mut engine: E,
        renderer: &mut R,
    ) -> SliderResult<Self> {
        config.validate()?;
        registry.validate()?;

        let handles: Vec<SlideHandle> = registry
            .iter()
            .map(|(id, rec)| {
                let binding = renderer.bind(id, rec);
                if binding.is_none() {
                    tracing::warn!(slide = %rec.id, "renderer produced no binding");
                }
                SlideHandle {
                    id,
                    category: rec.category.clone(),
                    binding,
                }
            })
            .collect();
        let buffer = CyclicSlideBuffer::new(handles);

        for (pos, handle) in buffer.iter().enumerate() {
            let Some(binding) = &handle.binding else {
                continue;
            };
            let mask = if pos == 0 {
                RevealMask::FULL
            } else {
                RevealMask::HIDDEN_BOTTOM
            };
            engine.set_immediate(&[binding.slide], Properties::mask(mask));
        }
        if let Some(binding) = buffer.current().and_then(|h| h.binding.as_ref()) {
            pipeline::reveal_text(&mut engine, &binding.texts, &config.text);
        }

        let derived = DerivedUi::project(&buffer, &registry)
            .ok_or_else(|| SliderError::registry("no slides to mount"))?;
        let seed = match config.reveal {
            RevealStyle::Random { seed } => seed,
            RevealStyle::Directional => 0,
        };

        tracing::debug!(category = %derived.current_category, "slider mounted");
        Ok(Self {
            input: InputNormalizer::new(config.thresholds()),
            registry,
            config,
            engine,
            buffer,
            lock: TransitionLock::new(),
            derived,
            in_flight: None,
            rng: SplitMix64::new(seed),
        })
    }

    /// Tear down the view, handing the engine back. Any transition in flight
    /// is abandoned without committing.
    pub fn unmount(self) -> E {
        if self.in_flight.is_some() {
            tracing::debug!("unmounted with a transition in flight");
        }
        self.engine
    }

    /// UI-facing state as of the last commit.
    pub fn derived(&self) -> &DerivedUi {
        &self.derived
    }

    /// Which transition, if any, holds the lock.
    pub fn state(&self) -> TransitionState {
        self.lock.state()
    }

    /// `true` while a transition is in flight.
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Commands discarded because they arrived while locked.
    pub fn dropped_commands(&self) -> u64 {
        self.lock.dropped()
    }

    /// Registry ids in current buffer order; position 0 is on screen.
    pub fn order(&self) -> Vec<SlideId> {
        self.buffer.order()
    }

    /// Slide records this slider was mounted with.
    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    /// Validated tuning in effect.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Borrow the animation engine, e.g. to sample element state.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the engine. Tweens started here are not tracked
    /// by the slider.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Text reveal already fired in the running transition, if any.
    pub fn text_revealed(&self) -> Option<bool> {
        self.in_flight.as_ref().map(InFlight::text_fired)
    }

    /// Step to the next slide. Returns `true` if a transition started.
    #[tracing::instrument(skip(self))]
    pub fn advance(&mut self) -> bool {
        self.dispatch(Command::Advance)
    }

    /// Step to the previous slide. Returns `true` if a transition started.
    #[tracing::instrument(skip(self))]
    pub fn retreat(&mut self) -> bool {
        self.dispatch(Command::Retreat)
    }

    /// Rotate forward to the nearest slide of `category`.
    #[tracing::instrument(skip(self))]
    pub fn jump_to_category(&mut self, category: &str) -> bool {
        let cmd = self.input.jump(category);
        self.dispatch(cmd)
    }

    /// Feed a wheel delta. Returns `true` if it started a transition.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        match self.input.wheel(delta_y, self.lock.is_locked()) {
            Some(cmd) => self.dispatch(cmd),
            None => false,
        }
    }

    /// Record where a touch began.
    pub fn touch_start(&mut self, at: Point) {
        self.input.touch_start(at);
    }

    /// Track the latest touch position.
    pub fn touch_move(&mut self, at: Point) {
        self.input.touch_move(at);
    }

    /// Finish a touch; a vertical swipe past the minimum distance steps.
    pub fn touch_end(&mut self) -> bool {
        match self.input.touch_end(self.lock.is_locked()) {
            Some(cmd) => self.dispatch(cmd),
            None => false,
        }
    }

    /// Route an engine notification. Events for other tweens are ignored.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Progress { tween, progress } => {
                if let Some(flight) = self.in_flight.as_mut().filter(|f| f.tween == tween) {
                    flight.on_progress(&mut self.engine, &self.config, progress);
                }
            }
            EngineEvent::Complete { tween } => {
                if self.in_flight.as_ref().is_some_and(|f| f.tween == tween) {
                    self.commit();
                }
            }
        }
    }

    fn dispatch(&mut self, cmd: Command) -> bool {
        if !self.lock.try_admit(&cmd) {
            return false;
        }

        match self.begin(&cmd) {
            Ok(flight) => {
                self.in_flight = Some(flight);
                true
            }
            Err(skip) => {
                tracing::debug!(?cmd, ?skip, "command resolved as no-op");
                self.lock.release();
                false
            }
        }
    }

    fn begin(&mut self, cmd: &Command) -> Result<InFlight, Skip> {
        let len = self.buffer.len();
        if len < 2 {
            return Err(Skip::TooFewSlides);
        }

        let (direction, target) = match cmd {
            Command::Advance => (Direction::Forward, 1),
            Command::Retreat => (Direction::Backward, len - 1),
            Command::Jump(category) => {
                if self.derived.current_category == *category {
                    return Err(Skip::AlreadyCurrent);
                }
                let pos = self
                    .buffer
                    .find_forward(category.as_str())
                    .ok_or(Skip::UnknownCategory)?;
                (Direction::Jump { steps: pos }, pos)
            }
        };

        let parts = Participants::collect(&self.buffer, direction, target)?;
        let plan = RevealPlan::for_direction(
            direction,
            self.config.reveal,
            &mut self.rng,
            self.config.content_travel,
            self.config.jump_entry_offset,
        );
        Ok(InFlight::start(
            &mut self.engine,
            &self.config,
            direction,
            plan,
            parts,
        ))
    }

    fn commit(&mut self) {
        let Some(flight) = self.in_flight.take() else {
            self.lock.release();
            return;
        };

        let parts = flight.commit(&mut self.engine, &self.config, &mut self.buffer);
        if let Some(derived) = DerivedUi::project(&self.buffer, &self.registry) {
            self.derived = derived;
        }
        self.lock.release();
        tracing::debug!(
            from = ?parts.outgoing,
            to = ?parts.incoming,
            index = self.derived.current_slide_index,
            category = %self.derived.current_category,
            "transition committed"
        );
    }
}

impl<E: AnimationEngine + Clocked> StorySlider<E> {
    /// Advance the engine clock and route every resulting event.
    pub fn tick(&mut self, dt_secs: f64) {
        for event in self.engine.advance(dt_secs) {
            self.handle_engine_event(event);
        }
    }

    /// Tick until no transition is in flight.
    ///
    /// Fails with [`SliderError::Animation`] if the running transition has
    /// not committed after `max_secs` of engine time.
    pub fn settle(&mut self, step_secs: f64, max_secs: f64) -> SliderResult<()> {
        if !(step_secs.is_finite() && step_secs > 0.0) {
            return Err(SliderError::validation("settle step must be finite and > 0"));
        }
        if !(max_secs.is_finite() && max_secs >= 0.0) {
            return Err(SliderError::validation("settle budget must be finite and >= 0"));
        }

        let mut spent = 0.0;
        while self.in_flight.is_some() && spent < max_secs {
            self.tick(step_secs);
            spent += step_secs;
        }
        match &self.in_flight {
            Some(flight) => Err(SliderError::animation(format!(
                "transition {:?} did not complete within {max_secs}s",
                flight.direction
            ))),
            None => Ok(()),
        }
    }
}
