//! Scoped ownership of the chart living on one canvas.
//!
//! A `ChartSlot` holds at most one live handle. `replace_with` destroys the
//! previous handle before the builder runs, and dropping the slot destroys
//! whatever it still holds, so a surface never has two charts painted on it.

#[cfg(test)]
#[path = "chart_slot_test.rs"]
mod chart_slot_test;

/// A chart handle that releases its surface when destroyed.
pub trait ChartHandle {
    fn destroy(self);
}

#[cfg(feature = "hydrate")]
impl ChartHandle for charts::Chart {
    fn destroy(self) {
        charts::Chart::destroy(self);
    }
}

/// Owner of the single live chart for one surface.
#[derive(Debug)]
pub struct ChartSlot<H: ChartHandle> {
    live: Option<H>,
}

impl<H: ChartHandle> Default for ChartSlot<H> {
    fn default() -> Self {
        Self { live: None }
    }
}

impl<H: ChartHandle> ChartSlot<H> {
    /// Destroy the current chart, then build and keep a new one.
    ///
    /// On error the slot is left empty.
    ///
    /// # Errors
    ///
    /// Returns whatever `build` returns.
    pub fn replace_with<E>(&mut self, build: impl FnOnce() -> Result<H, E>) -> Result<(), E> {
        self.clear();
        self.live = Some(build()?);
        Ok(())
    }

    /// Destroy the current chart, if any.
    pub fn clear(&mut self) {
        if let Some(handle) = self.live.take() {
            handle.destroy();
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    #[must_use]
    pub fn get(&self) -> Option<&H> {
        self.live.as_ref()
    }
}

impl<H: ChartHandle> Drop for ChartSlot<H> {
    fn drop(&mut self) {
        self.clear();
    }
}
