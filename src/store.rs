use crate::enums::{Orientation, Rotation, RotationStep};
use crate::renderer::{RenderedFrame, SliceRenderer};
use crate::volume::Volume;
use crate::volume_loader::{LoadError, VolumeLoader};

use log::{error, info};
use std::path::Path;

/// Per-volume display parameters.
///
/// Values only change through the transition methods, one per control
/// event, so every observable state is a valid one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub orientation: Orientation,
    pub slice_index: usize,
    pub rotation: Rotation,
}

impl DisplayState {
    /// Switch orientation. The slice range depends on the axis length,
    /// so the index restarts at 0.
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            slice_index: 0,
            ..self
        }
    }

    /// Move to `index`, clamped into `[0, depth - 1]`.
    pub fn with_slice(self, index: usize, depth: usize) -> Self {
        let slice_index = if depth == 0 { 0 } else { index.min(depth - 1) };
        Self {
            slice_index,
            ..self
        }
    }

    /// Apply one ±90° rotation step.
    pub fn stepped(self, step: RotationStep) -> Self {
        Self {
            rotation: self.rotation.stepped(step),
            ..self
        }
    }
}

/// Pane slot in the comparison view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    LowRes,
    HighRes,
}

impl Pane {
    /// The opposite pane of the comparison view.
    pub fn other(self) -> Pane {
        match self {
            Pane::LowRes => Pane::HighRes,
            Pane::HighRes => Pane::LowRes,
        }
    }

    fn index(self) -> usize {
        match self {
            Pane::LowRes => 0,
            Pane::HighRes => 1,
        }
    }
}

#[derive(Default)]
struct PaneEntry {
    volume: Option<Volume>,
    display: DisplayState,
    frame: Option<RenderedFrame>,
}

/// Owns the loaded volumes and their per-pane display state.
///
/// Every mutating call renders the affected pane synchronously. A failed
/// render is logged and the previous frame kept, so consumers always
/// have something displayable. With `sync` enabled, control events apply
/// to both panes, each clamped against its own volume.
#[derive(Default)]
pub struct VolumeStore {
    panes: [PaneEntry; 2],
    sync: bool,
}

impl VolumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a volume into `pane`, replacing whatever it held.
    ///
    /// # Errors
    ///
    /// Fails on unsupported extensions and decode errors; the pane then
    /// keeps its previous volume, state and frame.
    pub fn load(&mut self, pane: Pane, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let volume = VolumeLoader::load(path.as_ref())?;
        self.set_volume(pane, volume);
        Ok(())
    }

    /// Attach an already decoded volume to `pane`.
    ///
    /// Orientation and rotation carry over; the slice index restarts at
    /// 0 because the new axis length may differ.
    pub fn set_volume(&mut self, pane: Pane, volume: Volume) {
        info!("loaded volume with shape {:?}", volume.shape());
        let entry = &mut self.panes[pane.index()];
        entry.volume = Some(volume);
        entry.display = DisplayState {
            slice_index: 0,
            ..entry.display
        };
        Self::refresh(entry);
    }

    pub fn set_orientation(&mut self, pane: Pane, orientation: Orientation) {
        self.apply(pane, |state, _depth| state.with_orientation(orientation));
    }

    /// Move the pane to `index`, silently clamping into the valid range.
    pub fn set_slice(&mut self, pane: Pane, index: usize) {
        self.apply(pane, move |state, depth| state.with_slice(index, depth));
    }

    pub fn rotate(&mut self, pane: Pane, step: RotationStep) {
        self.apply(pane, move |state, _depth| state.stepped(step));
    }

    /// Mirror subsequent control events across both panes.
    pub fn set_sync(&mut self, sync: bool) {
        self.sync = sync;
    }

    pub fn sync(&self) -> bool {
        self.sync
    }

    pub fn volume(&self, pane: Pane) -> Option<&Volume> {
        self.panes[pane.index()].volume.as_ref()
    }

    pub fn display(&self, pane: Pane) -> DisplayState {
        self.panes[pane.index()].display
    }

    /// The most recently rendered frame, if any render has succeeded.
    pub fn frame(&self, pane: Pane) -> Option<&RenderedFrame> {
        self.panes[pane.index()].frame.as_ref()
    }

    /// Number of slices along the pane's current orientation axis.
    pub fn slice_count(&self, pane: Pane) -> usize {
        let entry = &self.panes[pane.index()];
        entry
            .volume
            .as_ref()
            .map_or(0, |volume| volume.depth_along(entry.display.orientation))
    }

    fn apply<F>(&mut self, pane: Pane, transition: F)
    where
        F: Fn(DisplayState, usize) -> DisplayState,
    {
        self.transition_pane(pane, &transition);
        if self.sync {
            self.transition_pane(pane.other(), &transition);
        }
    }

    fn transition_pane<F>(&mut self, pane: Pane, transition: &F)
    where
        F: Fn(DisplayState, usize) -> DisplayState,
    {
        let entry = &mut self.panes[pane.index()];
        let depth = entry
            .volume
            .as_ref()
            .map_or(0, |volume| volume.depth_along(entry.display.orientation));
        entry.display = transition(entry.display, depth);
        Self::refresh(entry);
    }

    fn refresh(entry: &mut PaneEntry) {
        let Some(volume) = entry.volume.as_ref() else {
            return;
        };
        match SliceRenderer::render(volume, &entry.display) {
            Ok(frame) => entry.frame = Some(frame),
            Err(err) => error!("render failed: {err}"),
        }
    }
}
