use super::ModelError;
use nalgebra::Point3;

/// Atom positions of one trajectory snapshot, indexed by atom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    positions: Vec<Point3<f64>>,
}

impl Frame {
    pub fn new(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }

    /// Builds a frame from a flat `[x0, y0, z0, x1, ...]` coordinate slice.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::RaggedCoordinates`] when the slice length is not a multiple of 3.
    pub fn from_flat(coords: &[f64]) -> Result<Self, ModelError> {
        if coords.len() % 3 != 0 {
            return Err(ModelError::RaggedCoordinates { len: coords.len() });
        }
        Ok(Self {
            positions: coords
                .chunks_exact(3)
                .map(|c| Point3::new(c[0], c[1], c[2]))
                .collect(),
        })
    }

    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    #[inline]
    pub fn position(&self, atom: usize) -> Option<&Point3<f64>> {
        self.positions.get(atom)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// An ordered sequence of frames that all describe the same set of atoms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    frames: Vec<Frame>,
    atom_count: usize,
}

impl Trajectory {
    /// Creates a trajectory, checking that every frame has the same atom count.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InconsistentAtomCount`] for the first frame whose atom count
    /// differs from the first frame's.
    pub fn new(frames: Vec<Frame>) -> Result<Self, ModelError> {
        let atom_count = frames.first().map_or(0, Frame::len);
        if let Some((index, frame)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.len() != atom_count)
        {
            return Err(ModelError::InconsistentAtomCount {
                frame: index,
                expected: atom_count,
                found: frame.len(),
            });
        }
        Ok(Self { frames, atom_count })
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl From<Frame> for Trajectory {
    fn from(frame: Frame) -> Self {
        let atom_count = frame.len();
        Self {
            frames: vec![frame],
            atom_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_groups_coordinates_into_points() {
        let frame = Frame::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.position(1), Some(&Point3::new(4.0, 5.0, 6.0)));
    }

    #[test]
    fn from_flat_rejects_incomplete_triples() {
        let err = Frame::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap_err();
        assert_eq!(err, ModelError::RaggedCoordinates { len: 7 });
        assert!(Frame::from_flat(&[]).unwrap().is_empty());
    }

    fn flat_frame(value: f64, atoms: usize) -> Frame {
        Frame::from_flat(&vec![value; 3 * atoms]).unwrap()
    }

    #[test]
    fn trajectory_accepts_frames_with_equal_atom_counts() {
        let frames = vec![
            flat_frame(0.0, 2),
            flat_frame(1.0, 2),
            flat_frame(2.0, 2),
        ];
        let trajectory = Trajectory::new(frames).unwrap();
        assert_eq!(trajectory.frame_count(), 3);
        assert_eq!(trajectory.atom_count(), 2);
    }

    #[test]
    fn trajectory_rejects_inconsistent_atom_counts() {
        let frames = vec![flat_frame(0.0, 2), flat_frame(0.0, 3)];
        let err = Trajectory::new(frames).unwrap_err();
        assert_eq!(
            err,
            ModelError::InconsistentAtomCount {
                frame: 1,
                expected: 2,
                found: 3,
            }
        );
    }

    #[test]
    fn empty_trajectory_has_no_atoms() {
        let trajectory = Trajectory::new(Vec::new()).unwrap();
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.atom_count(), 0);
    }
}
