use std::collections::VecDeque;

use crate::{
    foundation::core::{Category, SlideId},
    slides::render::SlideBinding,
};

/// Live reference to a registry slide and its view binding.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideHandle {
    pub id: SlideId,
    pub category: Category,
    pub binding: Option<SlideBinding>,
}

/// Cyclic slide order. Position 0 is always the visible slide; rotations
/// reorder handles without creating or dropping any.
#[derive(Clone, Debug, Default)]
pub struct CyclicSlideBuffer {
    slides: VecDeque<SlideHandle>,
}

impl CyclicSlideBuffer {
    pub fn new(handles: impl IntoIterator<Item = SlideHandle>) -> Self {
        Self {
            slides: handles.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&SlideHandle> {
        self.slides.get(pos)
    }

    pub fn current(&self) -> Option<&SlideHandle> {
        self.slides.front()
    }

    pub fn last(&self) -> Option<&SlideHandle> {
        self.slides.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideHandle> {
        self.slides.iter()
    }

    /// Registry ids in buffer order.
    pub fn order(&self) -> Vec<SlideId> {
        self.slides.iter().map(|h| h.id).collect()
    }

    /// Head moves to the tail.
    pub fn rotate_forward(&mut self) {
        if self.slides.len() > 1 {
            self.slides.rotate_left(1);
        }
    }

    /// Tail moves to the head.
    pub fn rotate_backward(&mut self) {
        if self.slides.len() > 1 {
            self.slides.rotate_right(1);
        }
    }

    /// Brings `target` to the front by single forward steps, never backward.
    pub fn rotate_to_front(&mut self, target: usize) {
        for _ in 0..target {
            self.rotate_forward();
        }
    }

    /// Nearest position after the head whose slide carries `category`.
    pub fn find_forward(&self, category: &str) -> Option<usize> {
        self.slides
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, h)| h.category == *category)
            .map(|(pos, _)| pos)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slides/buffer.rs"]
mod tests;
