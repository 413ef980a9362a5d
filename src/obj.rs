//! Line-oriented Wavefront OBJ parser.
//!
//! Reads `v`, `vt`, `vn` and `f` records. Anything else, including malformed
//! records, is skipped without complaint; the only hard failure is not being
//! able to read the file at all.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

/// One corner of a face: 0-based indices into the position / texcoord /
/// normal pools. OBJ counts from 1; conversion happens on ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceIndex {
    pub position: u32,
    pub texcoord: u32,
    pub normal: u32,
}

#[derive(Debug, Default)]
pub struct ObjData {
    pub positions: Vec<[f32; 3]>,
    pub texcoords: Vec<[f32; 2]>,
    pub normals: Vec<[f32; 3]>,
    /// Triangulated face corners, three per triangle.
    pub corners: Vec<FaceIndex>,
}

impl ObjData {
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    pub fn read<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut data = ObjData::default();

        for line in reader.lines() {
            let line = line?;
            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("v") => {
                    if let Some(pos) = parse_floats(fields) {
                        data.positions.push(pos);
                    }
                }
                Some("vt") => {
                    if let Some(uv) = parse_floats(fields) {
                        data.texcoords.push(uv);
                    }
                }
                Some("vn") => {
                    if let Some(n) = parse_floats(fields) {
                        data.normals.push(n);
                    }
                }
                Some("f") => data.push_face(fields),
                Some(_) | None => {
                    // comments, groups, mtllib etc. are of no interest here
                }
            }
        }

        debug!(
            "obj: {} positions, {} texcoords, {} normals, {} corners",
            data.positions.len(),
            data.texcoords.len(),
            data.normals.len(),
            data.corners.len()
        );
        Ok(data)
    }

    /// Parse the corners of one `f` record; polygons with more than three
    /// corners are split into a triangle fan. A corner that does not parse
    /// discards the whole face (a partial triangle is worse than none).
    fn push_face<'a, I: Iterator<Item = &'a str>>(&mut self, fields: I) {
        let corners: Option<Vec<FaceIndex>> = fields.map(parse_corner).collect();
        let Some(corners) = corners else { return };

        if corners.len() < 3 {
            return;
        }
        for i in 1..corners.len() - 1 {
            self.corners.push(corners[0]);
            self.corners.push(corners[i]);
            self.corners.push(corners[i + 1]);
        }
    }
}

fn parse_floats<'a, const N: usize>(
    mut fields: impl Iterator<Item = &'a str>,
) -> Option<[f32; N]> {
    let mut out = [0.0; N];
    for slot in out.iter_mut() {
        *slot = fields.next()?.parse().ok()?;
    }
    Some(out)
}

/// `v/t/n` with 1-based components. `v/t` is accepted with the normal index
/// defaulting to the position index; other shapes are rejected.
fn parse_corner(field: &str) -> Option<FaceIndex> {
    let mut parts = field.split('/');
    let position = parse_index(parts.next()?)?;
    let texcoord = parse_index(parts.next()?)?;
    let normal = match parts.next() {
        Some(n) => parse_index(n)?,
        None => position,
    };
    Some(FaceIndex {
        position,
        texcoord,
        normal,
    })
}

fn parse_index(s: &str) -> Option<u32> {
    let idx: u32 = s.parse().ok()?;
    idx.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CUBE_FACE: &str = "\
# a single quad
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vt 0.0 1.0
vn 0.0 0.0 1.0
f 1/1/1 2/2/1 3/3/1 4/4/1
";

    fn parse(s: &str) -> ObjData {
        ObjData::read(Cursor::new(s)).unwrap()
    }

    #[test]
    fn parses_records_and_triangulates_quads() {
        let data = parse(CUBE_FACE);
        assert_eq!(data.positions.len(), 4);
        assert_eq!(data.texcoords.len(), 4);
        assert_eq!(data.normals.len(), 1);
        // quad -> two triangles -> six corners
        assert_eq!(data.corners.len(), 6);
        assert_eq!(
            data.corners[0],
            FaceIndex {
                position: 0,
                texcoord: 0,
                normal: 0
            }
        );
        // fan: (0,1,2) then (0,2,3)
        assert_eq!(data.corners[3].position, 0);
        assert_eq!(data.corners[4].position, 2);
        assert_eq!(data.corners[5].position, 3);
    }

    #[test]
    fn indices_become_zero_based() {
        let data = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1/1 2/1/1 3/1/1\n");
        assert_eq!(data.corners[1].position, 1);
        assert_eq!(data.corners[2].position, 2);
        assert_eq!(data.corners[0].texcoord, 0);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let data = parse("v 1.0 bogus 3.0\nvt 0.5\nnonsense line\nv 1 2 3\n");
        assert_eq!(data.positions.len(), 1);
        assert_eq!(data.positions[0], [1.0, 2.0, 3.0]);
        assert!(data.texcoords.is_empty());
    }

    #[test]
    fn face_without_texcoord_slot_is_dropped() {
        let data = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
        assert!(data.corners.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(ObjData::load(Path::new("/no/such/file.obj")).is_err());
    }
}
