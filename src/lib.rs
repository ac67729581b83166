//! # medvol-viewer library
//!
//! This crate implements the slice extraction and display pipeline of a
//! volumetric medical image viewer.
//!
//! Volumes are loaded from NIfTI (".nii.gz", ".nii") or DICOM (".dcm")
//! files into an n-dimensional voxel array. A [`VolumeStore`] owns up to
//! two volumes, a low-resolution and a high-resolution pane, together
//! with each pane's display state: slicing orientation (Axial, Sagittal
//! or Coronal), slice index and quarter-turn rotation. Every control
//! event maps to one pure state transition followed by one synchronous
//! render pass.
//!
//! Rendering extracts the selected 2D slice, applies the rotation as
//! exact 90° turns without resampling, transposes it so the origin sits
//! at the bottom left, and normalizes intensities linearly between the
//! slice minimum and maximum into an 8-bit grayscale frame. Fitting the
//! frame into a viewport preserves the aspect ratio and resamples
//! bilinearly. Render failures are logged and leave the previous frame
//! in place; nothing in the pipeline panics on malformed input.
//!
//! The two panes can optionally be synchronized so that orientation,
//! slice and rotation events apply to both, each pane clamping the slice
//! index against its own volume.
//!
//! # Examples
//!
//! ## Viewing a slice of a NIfTI volume
//!
//! Load a compressed NIfTI file, pick the middle sagittal slice, turn it
//! 90° counterclockwise and save the rendered frame.
//!
//! ```no_run
//! # use medvol_viewer::enums::{Orientation, RotationStep};
//! # use medvol_viewer::store::{Pane, VolumeStore};
//! let mut store = VolumeStore::new();
//! store
//!     .load(Pane::LowRes, "scan.nii.gz")
//!     .expect("should have loaded the volume");
//! store.set_orientation(Pane::LowRes, Orientation::Sagittal);
//! store.set_slice(Pane::LowRes, store.slice_count(Pane::LowRes) / 2);
//! store.rotate(Pane::LowRes, RotationStep::Ccw);
//! let frame = store
//!     .frame(Pane::LowRes)
//!     .expect("should have rendered a frame");
//! frame.save("slice.png");
//! ```
//!
//! [`VolumeStore`]: store::VolumeStore

pub mod enums;
mod interpolator;
pub mod renderer;
pub mod store;
pub mod volume;
pub mod volume_loader;
