//! Indexed model building and the `.model` binary format.
//!
//! A parsed OBJ keeps positions and texcoords in separate pools; the
//! renderer wants one flat vertex buffer plus an index buffer. Building it
//! means deduplicating (position, texcoord) pairs: the first time a pair is
//! referenced it becomes a new output vertex, every later reference reuses
//! that slot.
//!
//! On disk (little-endian):
//! header { u32 vertex count, u32 index count }, then `vertex count` vertices
//! of five f32 (x, y, z, u, v), then `index count` u32 indices.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::info;

use crate::obj::ObjData;

/// Position followed by texture coordinate, matching the file layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Debug, Default, PartialEq)]
pub struct IndexedModel {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
}

#[derive(Debug)]
pub enum ModelError {
    Io(io::Error),
    /// File ended before the counts promised by the header were read.
    Truncated,
    /// An index refers past the vertex array.
    IndexOutOfRange { index: u32, vertices: u32 },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Io(e) => write!(f, "model io error: {e}"),
            ModelError::Truncated => write!(f, "model file shorter than its header claims"),
            ModelError::IndexOutOfRange { index, vertices } => {
                write!(f, "index {index} out of range for {vertices} vertices")
            }
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ModelError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ModelError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            ModelError::Truncated
        } else {
            ModelError::Io(e)
        }
    }
}

impl IndexedModel {
    /// Build the deduplicated vertex/index buffers from parsed OBJ data.
    ///
    /// The mapping (position index, texcoord index) -> output slot is a
    /// bijection onto first-seen order. A triangle with any corner referring
    /// outside the pools is dropped whole, so the index buffer stays a
    /// multiple of three (a partial triangle is worse than none).
    pub fn from_obj(obj: &ObjData) -> Self {
        let mut seen: HashMap<(u32, u32), u32> = HashMap::new();
        let mut model = IndexedModel::default();

        'triangles: for tri in obj.corners.chunks_exact(3) {
            for corner in tri {
                if obj.positions.get(corner.position as usize).is_none()
                    || obj.texcoords.get(corner.texcoord as usize).is_none()
                {
                    continue 'triangles;
                }
            }

            for corner in tri {
                let key = (corner.position, corner.texcoord);
                let slot = *seen.entry(key).or_insert_with(|| {
                    model.vertices.push(ModelVertex {
                        pos: obj.positions[corner.position as usize],
                        uv: obj.texcoords[corner.texcoord as usize],
                    });
                    (model.vertices.len() - 1) as u32
                });
                model.indices.push(slot);
            }
        }

        info!(
            "deduplicated {} corners into {} vertices",
            model.indices.len(),
            model.vertices.len()
        );
        model
    }

    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let file = File::create(path)?;
        self.encode(BufWriter::new(file))
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let file = File::open(path)?;
        Self::decode(BufReader::new(file))
    }

    pub fn encode<W: Write>(&self, mut w: W) -> Result<(), ModelError> {
        w.write_all(&(self.vertices.len() as u32).to_le_bytes())?;
        w.write_all(&(self.indices.len() as u32).to_le_bytes())?;
        for v in &self.vertices {
            for f in v.pos.iter().chain(v.uv.iter()) {
                w.write_all(&f.to_le_bytes())?;
            }
        }
        for idx in &self.indices {
            w.write_all(&idx.to_le_bytes())?;
        }
        w.flush()?;
        Ok(())
    }

    pub fn decode<R: Read>(mut r: R) -> Result<Self, ModelError> {
        let n_vertices = read_u32(&mut r)?;
        let n_indices = read_u32(&mut r)?;

        let mut vertices = Vec::with_capacity(n_vertices as usize);
        for _ in 0..n_vertices {
            let mut fields = [0.0f32; 5];
            for f in fields.iter_mut() {
                *f = read_f32(&mut r)?;
            }
            vertices.push(ModelVertex {
                pos: [fields[0], fields[1], fields[2]],
                uv: [fields[3], fields[4]],
            });
        }

        let mut indices = Vec::with_capacity(n_indices as usize);
        for _ in 0..n_indices {
            let idx = read_u32(&mut r)?;
            if idx >= n_vertices {
                return Err(ModelError::IndexOutOfRange {
                    index: idx,
                    vertices: n_vertices,
                });
            }
            indices.push(idx);
        }

        Ok(IndexedModel { vertices, indices })
    }
}

fn read_u32<R: Read>(r: &mut R) -> Result<u32, ModelError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_f32<R: Read>(r: &mut R) -> Result<f32, ModelError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obj::ObjData;
    use std::io::Cursor;

    // two triangles sharing the edge 2/2 - 3/3
    const SHARED_EDGE: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
f 1/1/1 2/2/1 3/3/1
f 1/1/1 3/3/1 4/4/1
";

    fn build(s: &str) -> IndexedModel {
        IndexedModel::from_obj(&ObjData::read(Cursor::new(s)).unwrap())
    }

    #[test]
    fn dedup_reuses_first_seen_slot() {
        let model = build(SHARED_EDGE);
        // 6 corners but only 4 distinct (position, texcoord) pairs
        assert_eq!(model.indices.len(), 6);
        assert_eq!(model.vertices.len(), 4);
        assert_eq!(model.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn same_position_different_texcoord_is_a_new_vertex() {
        let model = build(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 1\n\
             f 1/1/1 2/1/1 3/1/1\nf 1/2/1 2/1/1 3/1/1\n",
        );
        // position 0 appears with texcoords 0 and 1: two output vertices
        assert_eq!(model.vertices.len(), 4);
        assert_eq!(model.indices[3], 3);
    }

    #[test]
    fn vertices_appear_in_first_seen_order() {
        let model = build(SHARED_EDGE);
        assert_eq!(model.vertices[0].pos, [0.0, 0.0, 0.0]);
        assert_eq!(model.vertices[1].uv, [1.0, 0.0]);
        assert_eq!(model.vertices[3].pos, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn out_of_range_corner_is_dropped() {
        let model = build("v 0 0 0\nvt 0 0\nf 1/1/1 2/1/1 9/1/1\n");
        assert!(model.indices.is_empty());
        assert!(model.vertices.is_empty());
    }

    #[test]
    fn bad_corner_drops_its_whole_triangle_only() {
        // second face references position 9, which does not exist
        let model = build(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\n\
             f 1/1/1 2/2/1 3/3/1\nf 1/1/1 2/2/1 9/3/1\nf 3/3/1 2/2/1 1/1/1\n",
        );
        // bad face contributes nothing, not even its valid corners
        assert_eq!(model.indices.len(), 6);
        assert_eq!(model.indices.len() % 3, 0);
        assert_eq!(model.indices, vec![0, 1, 2, 2, 1, 0]);
        assert_eq!(model.vertices.len(), 3);
    }

    #[test]
    fn binary_round_trip() {
        let model = build(SHARED_EDGE);
        let mut bytes = Vec::new();
        model.encode(&mut bytes).unwrap();
        // header + 4 vertices * 20 bytes + 6 indices * 4 bytes
        assert_eq!(bytes.len(), 8 + 4 * 20 + 6 * 4);
        let back = IndexedModel::decode(Cursor::new(bytes)).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn truncated_file_is_rejected() {
        let model = build(SHARED_EDGE);
        let mut bytes = Vec::new();
        model.encode(&mut bytes).unwrap();
        bytes.truncate(bytes.len() - 3);
        match IndexedModel::decode(Cursor::new(bytes)) {
            Err(ModelError::Truncated) => {}
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn wild_index_is_rejected() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u32.to_le_bytes()); // one vertex
        bytes.extend_from_slice(&1u32.to_le_bytes()); // one index
        bytes.extend_from_slice(&[0u8; 20]); // the vertex
        bytes.extend_from_slice(&7u32.to_le_bytes()); // bogus index
        assert!(matches!(
            IndexedModel::decode(Cursor::new(bytes)),
            Err(ModelError::IndexOutOfRange { index: 7, .. })
        ));
    }
}
