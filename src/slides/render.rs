use crate::{
    foundation::core::{ElementId, SlideId},
    slides::registry::SlideRecord,
};

/// Animation targets the renderer exposes for one slide.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SlideBinding {
    /// Slide root; carries the reveal mask.
    pub slide: ElementId,
    /// Content root; carries the displacement offset.
    pub content: Option<ElementId>,
    /// Text regions in reveal order.
    pub texts: Vec<ElementId>,
}

pub trait ContentRenderer {
    /// Produce the element binding for a record, or `None` if it could not be
    /// rendered. Unbound slides are skipped by transitions.
    fn bind(&mut self, id: SlideId, record: &SlideRecord) -> Option<SlideBinding>;
}

/// Renderer without a display: allocates sequential element ids.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    next: u64,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self) -> ElementId {
        self.next += 1;
        ElementId(self.next)
    }
}

impl ContentRenderer for HeadlessRenderer {
    fn bind(&mut self, _id: SlideId, record: &SlideRecord) -> Option<SlideBinding> {
        let slide = self.alloc();
        let content = Some(self.alloc());
        let texts = record.text.iter().map(|_| self.alloc()).collect();
        Some(SlideBinding {
            slide,
            content,
            texts,
        })
    }
}
