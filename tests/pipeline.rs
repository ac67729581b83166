//! End-to-end pipeline coverage: write a NIfTI volume to disk, load it
//! through the store and drive the display controls.

use medvol_viewer::enums::{Orientation, RotationStep};
use medvol_viewer::store::{Pane, VolumeStore};
use medvol_viewer::volume_loader::LoadError;

use ndarray::Array3;
use nifti::writer::WriterOptions;

fn write_ramp_nifti(path: &std::path::Path) {
    let data = Array3::from_shape_fn((10, 20, 30), |(z, y, x)| (z * 600 + y * 30 + x) as f32);
    WriterOptions::new(path)
        .write_nifti(&data)
        .expect("should have written the NIfTI file");
}

#[test]
fn load_slice_and_rotate_a_nifti_volume() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.nii.gz");
    write_ramp_nifti(&path);

    let mut store = VolumeStore::new();
    store.load(Pane::LowRes, &path).unwrap();
    assert_eq!(store.volume(Pane::LowRes).unwrap().shape(), &[10, 20, 30]);

    // Axial slice 5 has shape (20, 30); the frame shows its transpose.
    store.set_slice(Pane::LowRes, 5);
    let frame = store.frame(Pane::LowRes).unwrap();
    assert_eq!((frame.width(), frame.height()), (20, 30));

    // One counterclockwise turn swaps the extents.
    store.rotate(Pane::LowRes, RotationStep::Ccw);
    let frame = store.frame(Pane::LowRes).unwrap();
    assert_eq!((frame.width(), frame.height()), (30, 20));
}

#[test]
fn orientation_switch_rescopes_the_slice_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.nii.gz");
    write_ramp_nifti(&path);

    let mut store = VolumeStore::new();
    store.load(Pane::LowRes, &path).unwrap();
    store.set_slice(Pane::LowRes, 9);

    store.set_orientation(Pane::LowRes, Orientation::Sagittal);
    assert_eq!(store.display(Pane::LowRes).slice_index, 0);
    assert_eq!(store.slice_count(Pane::LowRes), 20);
}

#[test]
fn rejected_load_keeps_the_previous_volume() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.nii.gz");
    write_ramp_nifti(&path);

    let mut store = VolumeStore::new();
    store.load(Pane::LowRes, &path).unwrap();
    let frame_before = store.frame(Pane::LowRes).unwrap().clone();

    let bogus = dir.path().join("notes.txt");
    std::fs::write(&bogus, b"not an image").unwrap();
    let result = store.load(Pane::LowRes, &bogus);
    assert!(matches!(result, Err(LoadError::UnsupportedExtension(_))));

    assert_eq!(store.volume(Pane::LowRes).unwrap().shape(), &[10, 20, 30]);
    assert_eq!(
        store.frame(Pane::LowRes).unwrap().as_raw(),
        frame_before.as_raw()
    );
}
