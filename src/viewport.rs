//! Document-level scroll suppression while a slider view is mounted.

pub trait Viewport {
    /// Whatever the host needs to put the document back as it was.
    type Saved;

    /// Disable page scrolling/overscroll and return the previous settings.
    fn suppress_scroll(&mut self) -> Self::Saved;

    fn restore_scroll(&mut self, saved: Self::Saved);
}

/// Holds scroll suppression for its lifetime and restores on drop,
/// independent of any transition still in flight.
pub struct ScrollGuard<V: Viewport> {
    viewport: V,
    saved: Option<V::Saved>,
}

impl<V: Viewport> ScrollGuard<V> {
    pub fn acquire(mut viewport: V) -> Self {
        let saved = viewport.suppress_scroll();
        tracing::debug!("document scroll suppressed");
        Self {
            viewport,
            saved: Some(saved),
        }
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn is_active(&self) -> bool {
        self.saved.is_some()
    }

    /// Restore early. Later calls and the final drop do nothing.
    pub fn restore(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.viewport.restore_scroll(saved);
            tracing::debug!("document scroll restored");
        }
    }
}

impl<V: Viewport> Drop for ScrollGuard<V> {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
#[path = "../tests/unit/viewport.rs"]
mod tests;
