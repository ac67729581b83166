use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use medvol_viewer::enums::{Orientation, Rotation, RotationStep};
use medvol_viewer::renderer::SliceRenderer;
use medvol_viewer::store::{Pane, VolumeStore};

/// Render one slice of a medical image volume to a PNG.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input volume (.nii.gz, .nii or .dcm)
    path: PathBuf,

    /// Slicing orientation
    #[arg(long, value_enum, default_value_t = OrientationArg::Axial)]
    orientation: OrientationArg,

    /// Slice index, defaulting to the middle of the chosen axis
    #[arg(long)]
    slice: Option<usize>,

    /// Counterclockwise rotation in degrees (multiple of 90)
    #[arg(long, default_value_t = 0)]
    rotation: u16,

    /// Fit the frame into WIDTHxHEIGHT, preserving the aspect ratio
    #[arg(long, value_parser = parse_viewport)]
    fit: Option<(u32, u32)>,

    /// Output image path
    #[arg(long, default_value = "slice.png")]
    output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Axial,
    Sagittal,
    Coronal,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Axial => Orientation::Axial,
            OrientationArg::Sagittal => Orientation::Sagittal,
            OrientationArg::Coronal => Orientation::Coronal,
        }
    }
}

fn parse_viewport(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| "expected WIDTHxHEIGHT".to_owned())?;
    let width = width.parse().map_err(|_| format!("invalid width: {width}"))?;
    let height = height
        .parse()
        .map_err(|_| format!("invalid height: {height}"))?;
    Ok((width, height))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rotation = Rotation::from_degrees(args.rotation)
        .context("rotation must be one of 0, 90, 180 or 270")?;

    let mut store = VolumeStore::new();
    store
        .load(Pane::LowRes, &args.path)
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    store.set_orientation(Pane::LowRes, args.orientation.into());
    let depth = store.slice_count(Pane::LowRes);
    store.set_slice(Pane::LowRes, args.slice.unwrap_or(depth / 2));
    for _ in 0..rotation.quarter_turns() {
        store.rotate(Pane::LowRes, RotationStep::Ccw);
    }

    let volume = store.volume(Pane::LowRes).context("no volume loaded")?;
    let state = store.display(Pane::LowRes);
    let frame = match args.fit {
        Some((width, height)) => SliceRenderer::render_scaled(volume, &state, width, height)?,
        None => SliceRenderer::render(volume, &state)?,
    };

    frame.save(&args.output)?;
    println!(
        "wrote {} ({}x{})",
        args.output.display(),
        frame.width(),
        frame.height()
    );
    Ok(())
}
