use crate::foundation::error::{StarglassError, StarglassResult};
use crate::render::painter::Painter;
use crate::scene::{SceneFrame, SceneRenderer};

/// A time interval during which one scene contributes to the frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseWindow {
    /// Window start in elapsed milliseconds.
    pub start_ms: f64,
    /// Window end in elapsed milliseconds. Must be `> start_ms`.
    pub end_ms: f64,
}

impl PhaseWindow {
    /// Create a validated window with `end_ms > start_ms`.
    ///
    /// Zero-length windows are a configuration error rejected here, never a
    /// per-frame runtime check.
    pub fn new(start_ms: f64, end_ms: f64) -> StarglassResult<Self> {
        if !(end_ms > start_ms) {
            return Err(StarglassError::validation(
                "PhaseWindow end_ms must be > start_ms",
            ));
        }
        Ok(Self { start_ms, end_ms })
    }

    /// Return `true` while `elapsed_ms` is inside `[start_ms, end_ms]`.
    pub fn contains(self, elapsed_ms: f64) -> bool {
        self.start_ms <= elapsed_ms && elapsed_ms <= self.end_ms
    }

    /// Normalized position within the window: exactly 0 at `start_ms`,
    /// exactly 1 at `end_ms`, clamped outside.
    pub fn local_progress(self, elapsed_ms: f64) -> f64 {
        ((elapsed_ms - self.start_ms) / (self.end_ms - self.start_ms)).clamp(0.0, 1.0)
    }
}

/// One scheduled scene.
pub struct TimelineEntry {
    /// The scene renderer.
    pub scene: Box<dyn SceneRenderer>,
    /// When the scene is active.
    pub window: PhaseWindow,
}

/// The phase table: scenes with overlapping time windows, listed
/// back-to-front.
///
/// Listed order IS the compositing order: every frame, active entries are
/// invoked in listed order, so overlapping scenes always paint in the same
/// fixed relative order and cross-fades emerge from each scene's own fade
/// envelope with no separate blending step.
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Build a timeline from entries in back-to-front order.
    pub fn new(entries: Vec<TimelineEntry>) -> Self {
        Self { entries }
    }

    /// Number of scheduled scenes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no scenes are scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild every scene's pools for `viewport`.
    pub fn rebuild(&mut self, viewport: crate::foundation::core::Viewport) {
        for entry in &mut self.entries {
            entry.scene.rebuild(viewport);
        }
    }

    /// Run one compositing pass at `elapsed_ms`.
    ///
    /// Scenes outside their window are skipped entirely; active scenes run
    /// in listed order with their local progress.
    pub fn render_pass(
        &mut self,
        painter: &mut Painter,
        elapsed_ms: f64,
    ) -> StarglassResult<()> {
        let viewport = painter.viewport();
        for entry in &mut self.entries {
            if !entry.window.contains(elapsed_ms) {
                continue;
            }
            let frame = SceneFrame {
                progress: entry.window.local_progress(elapsed_ms),
                elapsed_ms,
                viewport,
            };
            entry.scene.render(painter, frame)?;
        }
        Ok(())
    }

    /// Number of scenes active at `elapsed_ms`.
    pub fn active_count(&self, elapsed_ms: f64) -> usize {
        self.entries
            .iter()
            .filter(|e| e.window.contains(elapsed_ms))
            .count()
    }

    /// Names of active scenes at `elapsed_ms`, in compositing order.
    pub fn active_names(&self, elapsed_ms: f64) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.window.contains(elapsed_ms))
            .map(|e| e.scene.name())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/phase.rs"]
mod tests;
