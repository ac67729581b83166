use crate::enums::Orientation;

use ndarray::ArrayD;
use ndarray::ArrayViewD;
use ndarray::Axis;

/// A loaded voxel array.
///
/// Samples are stored as `f32` regardless of the on-disk dtype; the
/// loaders apply any slope/intercept scaling before construction. The
/// rank is dynamic because DICOM files can decode to a single 2D frame
/// and NIfTI files to 4D time series, both of which the renderer has to
/// reject with a diagnostic instead of a panic.
#[derive(Clone, Debug, Default)]
pub struct Volume {
    data: ArrayD<f32>,
}

impl Volume {
    pub fn new(data: ArrayD<f32>) -> Self {
        Self { data }
    }

    /// Ordered axis lengths of the volume.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &ArrayD<f32> {
        &self.data
    }

    /// Number of slices along the axis fixed by `orientation`.
    ///
    /// Returns 0 when the volume has no such axis.
    pub fn depth_along(&self, orientation: Orientation) -> usize {
        self.data
            .shape()
            .get(orientation.axis())
            .copied()
            .unwrap_or(0)
    }

    /// Extract the slice at `index` along the orientation axis.
    ///
    /// The remaining axes keep their original order and become the
    /// slice's (row, column) axes. Returns `None` when the axis or the
    /// index is out of bounds.
    pub fn slice_at(
        &self,
        orientation: Orientation,
        index: usize,
    ) -> Option<ArrayViewD<'_, f32>> {
        if !self.is_valid_index(index, orientation) {
            return None;
        }
        Some(self.data.index_axis(Axis(orientation.axis()), index))
    }

    fn is_valid_index(&self, index: usize, orientation: Orientation) -> bool {
        index < self.depth_along(orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    fn ramp_volume() -> Volume {
        let data = ArrayD::from_shape_fn(IxDyn(&[10, 20, 30]), |idx| {
            (idx[0] * 600 + idx[1] * 30 + idx[2]) as f32
        });
        Volume::new(data)
    }

    #[test]
    fn slice_shapes_follow_the_remaining_axes() {
        let volume = ramp_volume();
        let axial = volume.slice_at(Orientation::Axial, 5).unwrap();
        assert_eq!(axial.shape(), &[20, 30]);
        let sagittal = volume.slice_at(Orientation::Sagittal, 5).unwrap();
        assert_eq!(sagittal.shape(), &[10, 30]);
        let coronal = volume.slice_at(Orientation::Coronal, 5).unwrap();
        assert_eq!(coronal.shape(), &[10, 20]);
    }

    #[test]
    fn slice_values_come_from_the_fixed_axis() {
        let volume = ramp_volume();
        let slice = volume.slice_at(Orientation::Axial, 5).unwrap();
        assert_eq!(slice[[0, 0]], 3000.0);
        assert_eq!(slice[[19, 29]], 3000.0 + 19.0 * 30.0 + 29.0);
    }

    #[test]
    fn last_index_is_valid_and_depth_is_not() {
        let volume = ramp_volume();
        assert!(volume.slice_at(Orientation::Sagittal, 19).is_some());
        assert!(volume.slice_at(Orientation::Sagittal, 20).is_none());
    }

    #[test]
    fn depth_along_is_zero_beyond_the_rank() {
        let flat = Volume::new(ArrayD::zeros(IxDyn(&[4, 6])));
        assert_eq!(flat.depth_along(Orientation::Axial), 4);
        assert_eq!(flat.depth_along(Orientation::Coronal), 0);
        assert!(flat.slice_at(Orientation::Coronal, 0).is_none());
    }
}
