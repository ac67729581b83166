use crate::interpolator::Interpolator;
use crate::store::DisplayState;
use crate::volume::Volume;

use image::ImageBuffer;
use image::Luma;
use ndarray::ArrayView2;
use ndarray::Axis;
use ndarray::Ix2;
use rayon::prelude::*;
use thiserror::Error;

/// Display-ready 8-bit grayscale frame.
pub type RenderedFrame = ImageBuffer<Luma<u8>, Vec<u8>>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("orientation axis {axis} out of bounds for volume of rank {rank}")]
    AxisOutOfBounds { axis: usize, rank: usize },

    #[error("slice index {index} out of bounds for axis of length {len}")]
    SliceOutOfBounds { index: usize, len: usize },

    #[error("extracted slice has rank {rank}, expected 2")]
    NotTwoDimensional { rank: usize },

    #[error("extracted slice contains no samples")]
    EmptySlice,
}

/// Pure function from a volume and its display state to a frame.
///
/// Extraction, rotation and the display transpose are all stride
/// manipulations on a borrowed view; pixels are only materialized once,
/// during normalization.
pub struct SliceRenderer;

impl SliceRenderer {
    /// Render the slice selected by `state` at its native resolution.
    ///
    /// The frame's dimensions equal the extents of the rotated slice's
    /// transpose.
    pub fn render(volume: &Volume, state: &DisplayState) -> Result<RenderedFrame, RenderError> {
        let display = Self::display_array(volume, state)?;
        let (min, max) = Self::min_max(&display);
        let (rows, cols) = display.dim();

        let pixel_data: Vec<u8> = display
            .into_par_iter()
            .map(|&value| Self::normalize_to_u8(value, min, max))
            .collect();

        ImageBuffer::from_raw(cols as u32, rows as u32, pixel_data)
            .ok_or(RenderError::EmptySlice)
    }

    /// Render and fit into `max_width` x `max_height`, preserving the
    /// aspect ratio and resampling bilinearly.
    pub fn render_scaled(
        volume: &Volume,
        state: &DisplayState,
        max_width: u32,
        max_height: u32,
    ) -> Result<RenderedFrame, RenderError> {
        let display = Self::display_array(volume, state)?;
        let (min, max) = Self::min_max(&display);
        let (rows, cols) = display.dim();
        let (width, height) = Interpolator::fit_dimensions((rows, cols), (max_width, max_height));

        let pixel_data: Vec<u8> = (0..height)
            .into_par_iter()
            .flat_map(|y| {
                (0..width)
                    .map(|x| {
                        // Half-pixel offset keeps samples centered in the
                        // output grid.
                        let norm_x = (x as f32 + 0.5) / width as f32;
                        let norm_y = (y as f32 + 0.5) / height as f32;

                        let src_x = (norm_x * cols as f32 - 0.5).clamp(0.0, (cols - 1) as f32);
                        let src_y = (norm_y * rows as f32 - 0.5).clamp(0.0, (rows - 1) as f32);

                        let value = Interpolator::bilinear_interpolate(&display, src_y, src_x);
                        Self::normalize_to_u8(value, min, max)
                    })
                    .collect::<Vec<u8>>()
            })
            .collect();

        ImageBuffer::from_raw(width, height, pixel_data).ok_or(RenderError::EmptySlice)
    }

    /// Extract, rotate and orient the slice for display.
    ///
    /// Rows of the returned array run top to bottom on screen; the
    /// slice's own rows end up on the horizontal axis with the origin at
    /// the bottom left.
    fn display_array<'a>(
        volume: &'a Volume,
        state: &DisplayState,
    ) -> Result<ArrayView2<'a, f32>, RenderError> {
        let axis = state.orientation.axis();
        if axis >= volume.ndim() {
            return Err(RenderError::AxisOutOfBounds {
                axis,
                rank: volume.ndim(),
            });
        }

        let len = volume.depth_along(state.orientation);
        let slice = volume
            .slice_at(state.orientation, state.slice_index)
            .ok_or(RenderError::SliceOutOfBounds {
                index: state.slice_index,
                len,
            })?;

        let mut plane = slice
            .into_dimensionality::<Ix2>()
            .map_err(|_| RenderError::NotTwoDimensional {
                rank: volume.ndim() - 1,
            })?;

        if plane.is_empty() {
            return Err(RenderError::EmptySlice);
        }

        for _ in 0..state.rotation.quarter_turns() {
            plane = Self::rot90_ccw(plane);
        }

        let mut display = plane.reversed_axes();
        display.invert_axis(Axis(0));
        Ok(display)
    }

    /// One exact counterclockwise quarter turn: transpose, then reverse
    /// the new leading axis.
    fn rot90_ccw(plane: ArrayView2<'_, f32>) -> ArrayView2<'_, f32> {
        let mut rotated = plane.reversed_axes();
        rotated.invert_axis(Axis(0));
        rotated
    }

    fn min_max(values: &ArrayView2<'_, f32>) -> (f32, f32) {
        values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &value| {
                (min.min(value), max.max(value))
            })
    }

    #[inline]
    fn normalize_to_u8(value: f32, min: f32, max: f32) -> u8 {
        let range = max - min;
        if range <= 0.0 {
            // Constant slices map to the darkest level.
            return 0;
        }
        (((value - min) / range) * 255.0).clamp(0.0, 255.0) as u8
    }
}
