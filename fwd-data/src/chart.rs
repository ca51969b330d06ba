//! Scoped ownership of the live chart instance.
//!
//! Charting libraries hand out instances that must be destroyed by hand.
//! [`ChartSlot`] owns at most one of them: every replacement destroys the
//! old instance before the new one is constructed, and dropping the slot
//! destroys whatever is still live.

use crate::view::LineChart;

/// A charting library seen from the explorer: build a line chart, tear it down.
pub trait ChartBackend {
    type Handle;

    fn create(&mut self, chart: &LineChart) -> Self::Handle;
    fn destroy(&mut self, handle: Self::Handle);
}

/// Holds the single live chart of a chart surface.
pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    active: Option<B::Handle>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            active: None,
        }
    }

    /// Destroy the current chart (if any), then build `chart`.
    pub fn replace(&mut self, chart: &LineChart) {
        self.clear();
        self.active = Some(self.backend.create(chart));
    }

    pub fn clear(&mut self) {
        if let Some(handle) = self.active.take() {
            self.backend.destroy(handle);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChartBackend> Drop for ChartSlot<B> {
    fn drop(&mut self) {
        self.clear();
    }
}
