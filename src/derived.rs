use crate::{
    foundation::core::Category,
    slides::{buffer::CyclicSlideBuffer, registry::SlideRegistry},
};

/// Observable state for surrounding UI (progress bar, category indicator).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DerivedUi {
    pub current_category: Category,
    /// Absolute index in registry order.
    pub current_slide_index: usize,
    pub overall_progress_percent: f64,
}

impl DerivedUi {
    /// Project from the committed buffer. `None` only for an empty buffer.
    pub fn project(buffer: &CyclicSlideBuffer, registry: &SlideRegistry) -> Option<Self> {
        let head = buffer.current()?;
        let total = registry.len().max(1) as f64;
        Some(Self {
            current_category: head.category.clone(),
            current_slide_index: head.id.0,
            overall_progress_percent: (head.id.0 as f64 + 1.0) / total * 100.0,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/derived.rs"]
mod tests;
