use crate::core::io::traits::TrajectoryFile;
use crate::core::models::ModelError;
use crate::core::models::frame::{Frame, Trajectory};
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Per-atom and per-frame information carried by an XYZ file besides coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyzMetadata {
    /// Element symbol of every atom, taken from the first frame.
    pub elements: Vec<String>,
    /// The free-text comment line of every frame.
    pub comments: Vec<String>,
}

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: XyzParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count '{0}'")]
    InvalidAtomCount(String),
    #[error("Invalid coordinate '{0}'")]
    InvalidCoordinate(String),
    #[error("Atom line needs an element symbol and three coordinates")]
    TooFewFields,
    #[error("File ended inside a frame")]
    UnexpectedEof,
}

/// Multi-frame XYZ trajectory: each frame is an atom count line, a comment line and one
/// `symbol x y z` line per atom.
pub struct XyzFile;

impl TrajectoryFile for XyzFile {
    type Metadata = XyzMetadata;
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Trajectory, Self::Metadata), Self::Error> {
        let mut metadata = XyzMetadata::default();
        let mut frames = Vec::new();
        let mut lines = reader.lines().enumerate();

        while let Some((line_idx, line_res)) = lines.next() {
            let header = line_res?;
            let header = header.trim();
            if header.is_empty() {
                continue;
            }
            let atom_count: usize = header.parse().map_err(|_| XyzError::Parse {
                line: line_idx + 1,
                kind: XyzParseErrorKind::InvalidAtomCount(header.to_string()),
            })?;

            let (_, comment) = lines.next().ok_or(XyzError::Parse {
                line: line_idx + 2,
                kind: XyzParseErrorKind::UnexpectedEof,
            })?;
            metadata.comments.push(comment?.trim_end().to_string());

            let is_first_frame = frames.is_empty();
            let mut positions = Vec::new();
            for atom in 0..atom_count {
                let (atom_line_idx, atom_line) = lines.next().ok_or(XyzError::Parse {
                    line: line_idx + 3 + atom,
                    kind: XyzParseErrorKind::UnexpectedEof,
                })?;
                let atom_line = atom_line?;
                let (symbol, position) = parse_atom_line(&atom_line, atom_line_idx + 1)?;

                if is_first_frame {
                    metadata.elements.push(symbol.to_string());
                } else if metadata.elements.get(atom).map(String::as_str) != Some(symbol) {
                    return Err(XyzError::Inconsistency(format!(
                        "atom {} is '{}' in frame {} but '{}' in frame 0",
                        atom,
                        symbol,
                        frames.len(),
                        metadata.elements.get(atom).map_or("<missing>", String::as_str)
                    )));
                }
                positions.push(position);
            }
            frames.push(Frame::new(positions));
        }

        let trajectory = Trajectory::new(frames)?;
        Ok((trajectory, metadata))
    }

    fn write_to(
        trajectory: &Trajectory,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        if metadata.elements.len() != trajectory.atom_count() {
            return Err(XyzError::Inconsistency(format!(
                "{} element symbols for {} atoms",
                metadata.elements.len(),
                trajectory.atom_count()
            )));
        }
        for (index, frame) in trajectory.frames().iter().enumerate() {
            writeln!(writer, "{}", frame.len())?;
            writeln!(
                writer,
                "{}",
                metadata.comments.get(index).map_or("", String::as_str)
            )?;
            for (symbol, p) in metadata.elements.iter().zip(frame.positions()) {
                writeln!(
                    writer,
                    "{:<2} {:>12.6} {:>12.6} {:>12.6}",
                    symbol, p.x, p.y, p.z
                )?;
            }
        }
        Ok(())
    }
}

fn parse_atom_line(line: &str, line_num: usize) -> Result<(&str, Point3<f64>), XyzError> {
    let mut fields = line.split_whitespace();
    let symbol = fields.next().ok_or(XyzError::Parse {
        line: line_num,
        kind: XyzParseErrorKind::TooFewFields,
    })?;

    let mut coords = [0.0; 3];
    for c in coords.iter_mut() {
        let field = fields.next().ok_or(XyzError::Parse {
            line: line_num,
            kind: XyzParseErrorKind::TooFewFields,
        })?;
        *c = field.parse().map_err(|_| XyzError::Parse {
            line: line_num,
            kind: XyzParseErrorKind::InvalidCoordinate(field.to_string()),
        })?;
    }
    Ok((symbol, Point3::new(coords[0], coords[1], coords[2])))
}
