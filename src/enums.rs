/// Slicing orientation, named after the three medical viewing planes.
///
/// The variant order matches the loaded volume's axis order: Axial fixes
/// axis 0, Sagittal axis 1, Coronal axis 2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Axial,
    Sagittal,
    Coronal,
}

impl Orientation {
    /// The shape axis held fixed when slicing in this orientation.
    pub fn axis(self) -> usize {
        match self {
            Orientation::Axial => 0,
            Orientation::Sagittal => 1,
            Orientation::Coronal => 2,
        }
    }
}

/// Rotation of the displayed slice, in counterclockwise 90° steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

/// A single ±90° rotation control event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationStep {
    /// Counterclockwise quarter turn (+90°).
    Ccw,
    /// Clockwise quarter turn (-90°).
    Cw,
}

impl Rotation {
    /// Number of counterclockwise quarter turns to apply.
    pub fn quarter_turns(self) -> usize {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    pub fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }

    /// Parse a degree value; anything but a multiple of 90 is rejected.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    /// Apply one ±90° step, wrapping around the full turn.
    pub fn stepped(self, step: RotationStep) -> Self {
        let turns = match step {
            RotationStep::Ccw => self.quarter_turns() + 1,
            RotationStep::Cw => self.quarter_turns() + 3,
        };
        match turns % 4 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_in_both_directions() {
        assert_eq!(Rotation::Deg270.stepped(RotationStep::Ccw), Rotation::Deg0);
        assert_eq!(Rotation::Deg0.stepped(RotationStep::Cw), Rotation::Deg270);
    }

    #[test]
    fn rotation_step_pair_is_identity() {
        for rotation in [
            Rotation::Deg0,
            Rotation::Deg90,
            Rotation::Deg180,
            Rotation::Deg270,
        ] {
            assert_eq!(
                rotation.stepped(RotationStep::Ccw).stepped(RotationStep::Cw),
                rotation
            );
        }
    }

    #[test]
    fn from_degrees_rejects_partial_turns() {
        assert_eq!(Rotation::from_degrees(450), Some(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(45), None);
    }
}
