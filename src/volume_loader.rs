use crate::volume::Volume;

use dicom::{
    object::open_file,
    pixeldata::{ConvertOptions, PixelDecoder, VoiLutOption},
};
use ndarray::{Axis, s};
use nifti::{NiftiObject, ReaderOptions};
use nifti::volume::ndarray::IntoNdArray;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("NIfTI error: {0}")]
    Nifti(#[from] nifti::NiftiError),

    #[error("DICOM error: {0}")]
    Dicom(#[from] dicom::object::ReadError),

    #[error("DICOM pixel data error: {0}")]
    PixelData(#[from] dicom::pixeldata::Error),
}

pub struct VolumeLoader;

impl VolumeLoader {
    /// Load a volume, dispatching on the file extension.
    ///
    /// `.nii.gz` and `.nii` files are read as NIfTI, `.dcm` files as
    /// DICOM. Extension matching ignores ASCII case.
    ///
    /// # Errors
    ///
    /// Returns an error when the extension is unsupported or the
    /// decoding collaborator rejects the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Volume, LoadError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if name.ends_with(".nii.gz") || name.ends_with(".nii") {
            Self::load_nifti(path)
        } else if name.ends_with(".dcm") {
            Self::load_dicom(path)
        } else {
            Err(LoadError::UnsupportedExtension(name))
        }
    }

    fn load_nifti(path: &Path) -> Result<Volume, LoadError> {
        let object = ReaderOptions::new().read_file(path)?;
        // Slope/intercept scaling is applied during the conversion.
        let data = object.into_volume().into_ndarray::<f32>()?;
        Ok(Volume::new(data))
    }

    fn load_dicom(path: &Path) -> Result<Volume, LoadError> {
        let object = open_file(path)?;
        let pixel_data = object.decode_pixel_data()?;
        let options = ConvertOptions::new().with_voi_lut(VoiLutOption::First);
        let decoded = pixel_data.to_ndarray_with_options::<f32>(&options)?;

        // Decoded layout is (frames, rows, columns, samples); keep the
        // first sample channel.
        let frames = decoded.slice_move(s![.., .., .., 0]);
        let data = if frames.shape()[0] == 1 {
            // Single-frame files are plain 2D images.
            frames.index_axis_move(Axis(0), 0).into_dyn()
        } else {
            frames.into_dyn()
        };

        Ok(Volume::new(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn unsupported_extension_is_rejected_without_touching_disk() {
        let result = VolumeLoader::load("does-not-exist.txt");
        assert!(matches!(
            result,
            Err(LoadError::UnsupportedExtension(ref name)) if name == "does-not-exist.txt"
        ));
    }

    #[test]
    fn extension_matching_ignores_case() {
        // Uppercase .DCM dispatches to the DICOM reader, which then
        // fails on the missing file rather than on the extension.
        let result = VolumeLoader::load("missing.DCM");
        assert!(matches!(result, Err(LoadError::Dicom(_))));
    }

    #[test]
    fn garbage_dicom_surfaces_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.dcm");
        fs::write(&path, b"definitely not a dicom file").unwrap();
        assert!(matches!(
            VolumeLoader::load(&path),
            Err(LoadError::Dicom(_))
        ));
    }

    #[test]
    fn garbage_nifti_surfaces_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.nii.gz");
        fs::write(&path, b"definitely not gzip").unwrap();
        assert!(matches!(
            VolumeLoader::load(&path),
            Err(LoadError::Nifti(_))
        ));
    }
}
