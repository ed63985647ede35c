use super::*;
use crate::{
    animation::timeline::Timeline,
    foundation::core::{Category, SplitMix64},
    slides::{buffer::SlideHandle, render::SlideBinding},
    transition::reveal::RevealStyle,
};

#[derive(Default)]
struct Recorder {
    sets: Vec<(Vec<ElementId>, Properties)>,
    tweens: Vec<(Vec<ElementId>, Properties, TweenOptions)>,
}

impl AnimationEngine for Recorder {
    fn animate(&mut self, targets: &[ElementId], to: Properties, opts: TweenOptions) -> TweenId {
        self.tweens.push((targets.to_vec(), to, opts));
        TweenId(self.tweens.len() as u64 - 1)
    }

    fn set_immediate(&mut self, targets: &[ElementId], props: Properties) {
        self.sets.push((targets.to_vec(), props));
    }
}

// Slide i: root 10*i, content 10*i+1, texts 10*i+2.. (two each).
fn buffer(n: usize) -> CyclicSlideBuffer {
    CyclicSlideBuffer::new((0..n).map(|i| {
        let base = 10 * i as u64;
        SlideHandle {
            id: SlideId(i),
            category: Category::new(if i < 2 { "a" } else { "b" }),
            binding: Some(SlideBinding {
                slide: ElementId(base),
                content: Some(ElementId(base + 1)),
                texts: vec![ElementId(base + 2), ElementId(base + 3)],
            }),
        }
    }))
}

fn plan(direction: Direction) -> RevealPlan {
    RevealPlan::for_direction(
        direction,
        RevealStyle::Directional,
        &mut SplitMix64::new(0),
        500.0,
        250.0,
    )
}

#[test]
fn collect_forward_picks_head_and_next() {
    let parts = Participants::collect(&buffer(3), Direction::Forward, 1).unwrap();
    assert_eq!(parts.outgoing, SlideId(0));
    assert_eq!(parts.incoming, SlideId(1));
    assert_eq!(parts.outgoing_content, ElementId(1));
    assert_eq!(parts.incoming_slide, ElementId(10));
    assert_eq!(parts.departing, vec![ElementId(0)]);
}

#[test]
fn collect_jump_departs_every_passed_slide() {
    let parts = Participants::collect(&buffer(5), Direction::Jump { steps: 3 }, 3).unwrap();
    assert_eq!(parts.incoming, SlideId(3));
    assert_eq!(
        parts.departing,
        vec![ElementId(0), ElementId(10), ElementId(20)]
    );
}

#[test]
fn collect_reports_missing_content_root() {
    let mut handles: Vec<SlideHandle> = buffer(2).iter().cloned().collect();
    if let Some(b) = handles[1].binding.as_mut() {
        b.content = None;
    }
    let buf = CyclicSlideBuffer::new(handles);
    assert_eq!(
        Participants::collect(&buf, Direction::Forward, 1).unwrap_err(),
        Skip::MissingBinding
    );
}

#[test]
fn collect_reports_unbound_slide() {
    let mut handles: Vec<SlideHandle> = buffer(2).iter().cloned().collect();
    handles[0].binding = None;
    let buf = CyclicSlideBuffer::new(handles);
    assert_eq!(
        Participants::collect(&buf, Direction::Forward, 1).unwrap_err(),
        Skip::MissingBinding
    );
}

#[test]
fn start_positions_then_runs_three_concurrent_tweens() {
    let cfg = SliderConfig::default();
    let mut rec = Recorder::default();
    let parts = Participants::collect(&buffer(3), Direction::Forward, 1).unwrap();
    let flight = InFlight::start(&mut rec, &cfg, Direction::Forward, plan(Direction::Forward), parts);

    assert_eq!(
        rec.sets[0],
        (vec![ElementId(10)], Properties::mask(RevealMask::HIDDEN_BOTTOM))
    );
    assert_eq!(
        rec.sets[1],
        (vec![ElementId(11)], Properties::offset(Vec2::new(0.0, 500.0)))
    );

    assert_eq!(rec.tweens.len(), 3);
    assert_eq!(rec.tweens[0].1, Properties::offset(Vec2::new(0.0, -500.0)));
    assert_eq!(rec.tweens[1].1, Properties::offset(Vec2::ZERO));
    let (targets, to, opts) = &rec.tweens[2];
    assert_eq!(targets, &vec![ElementId(10)]);
    assert_eq!(*to, Properties::mask(RevealMask::FULL));
    assert!(opts.tracked);
    assert!(!rec.tweens[0].2.tracked);
    assert_eq!(flight.tween, TweenId(2));
    assert!(rec.tweens.iter().all(|t| t.2.duration_secs == 2.0));
}

#[test]
fn text_latch_fires_once_past_threshold() {
    let cfg = SliderConfig::default();
    let mut rec = Recorder::default();
    let parts = Participants::collect(&buffer(3), Direction::Forward, 1).unwrap();
    let mut flight =
        InFlight::start(&mut rec, &cfg, Direction::Forward, plan(Direction::Forward), parts);
    let base = rec.tweens.len();

    flight.on_progress(&mut rec, &cfg, 0.2);
    assert!(!flight.text_fired());
    assert_eq!(rec.tweens.len(), base);

    flight.on_progress(&mut rec, &cfg, 0.4);
    flight.on_progress(&mut rec, &cfg, 0.4);
    flight.on_progress(&mut rec, &cfg, 1.0);
    assert!(flight.text_fired());
    assert_eq!(rec.tweens.len(), base + 2);
    assert_eq!(rec.tweens[base].2.delay_secs, 0.0);
    assert!((rec.tweens[base + 1].2.delay_secs - 0.5).abs() < 1e-12);
}

#[test]
fn commit_fires_text_if_progress_never_crossed() {
    let cfg = SliderConfig::default();
    let mut rec = Recorder::default();
    let mut buf = buffer(3);
    let parts = Participants::collect(&buf, Direction::Forward, 1).unwrap();
    let flight = InFlight::start(&mut rec, &cfg, Direction::Forward, plan(Direction::Forward), parts);
    let base = rec.tweens.len();

    flight.commit(&mut rec, &cfg, &mut buf);
    assert_eq!(rec.tweens.len(), base + 2);
    assert_eq!(
        rec.sets.last().unwrap(),
        &(vec![ElementId(0)], Properties::mask(RevealMask::HIDDEN_BOTTOM))
    );
    assert_eq!(buf.order(), vec![SlideId(1), SlideId(2), SlideId(0)]);
}

#[test]
fn commit_backward_and_jump_rotate_accordingly() {
    let cfg = SliderConfig::default();
    let mut rec = Recorder::default();

    let mut buf = buffer(4);
    let parts = Participants::collect(&buf, Direction::Backward, 3).unwrap();
    let flight =
        InFlight::start(&mut rec, &cfg, Direction::Backward, plan(Direction::Backward), parts);
    flight.commit(&mut rec, &cfg, &mut buf);
    assert_eq!(buf.current().unwrap().id, SlideId(3));

    let mut buf = buffer(4);
    let dir = Direction::Jump { steps: 2 };
    let parts = Participants::collect(&buf, dir, 2).unwrap();
    let flight = InFlight::start(&mut rec, &cfg, dir, plan(dir), parts);
    flight.commit(&mut rec, &cfg, &mut buf);
    assert_eq!(
        buf.order(),
        vec![SlideId(2), SlideId(3), SlideId(0), SlideId(1)]
    );
    assert_eq!(
        rec.sets.last().unwrap(),
        &(
            vec![ElementId(0), ElementId(10)],
            Properties::mask(RevealMask::HIDDEN_RIGHT)
        )
    );
}

#[test]
fn reveal_text_without_texts_does_nothing() {
    let mut tl = Timeline::new();
    reveal_text(&mut tl, &[], &TextRevealConfig::default());
    assert!(tl.is_idle());
}

#[test]
fn reveal_text_fades_in_over_timeline() {
    use crate::animation::engine::Clocked;

    let mut tl = Timeline::new();
    let texts = [ElementId(1), ElementId(2), ElementId(3)];
    reveal_text(&mut tl, &texts, &TextRevealConfig::default());
    assert_eq!(tl.state(ElementId(3)).opacity, 0.0);
    assert_eq!(tl.state(ElementId(3)).offset, Vec2::new(0.0, 20.0));

    tl.advance(0.8);
    assert!((tl.state(ElementId(1)).opacity - 1.0).abs() < 1e-9);
    assert!(tl.state(ElementId(2)).opacity > 0.0);
    assert_eq!(tl.state(ElementId(3)).opacity, 0.0);

    tl.advance(1.5);
    for el in texts {
        let s = tl.state(el);
        assert!((s.opacity - 1.0).abs() < 1e-9);
        assert!(s.offset.y.abs() < 1e-9);
    }
}
