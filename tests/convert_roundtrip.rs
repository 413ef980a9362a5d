//! End-to-end: parse an OBJ, deduplicate, write the binary model, read it
//! back and expand it into renderable triangles.

use std::io::Cursor;

use softrender::mesh::model_triangles;
use softrender::model::IndexedModel;
use softrender::obj::ObjData;

// unit cube, 8 positions, 4 texcoords, 12 triangles
const CUBE_OBJ: &str = "\
v -1 -1 -1
v 1 -1 -1
v 1 1 -1
v -1 1 -1
v -1 -1 1
v 1 -1 1
v 1 1 1
v -1 1 1
vt 0 0
vt 1 0
vt 1 1
vt 0 1
f 1/1/1 3/3/1 2/2/1
f 1/1/1 4/4/1 3/3/1
f 5/1/2 6/2/2 7/3/2
f 5/1/2 7/3/2 8/4/2
f 1/1/3 2/2/3 6/3/3
f 1/1/3 6/3/3 5/4/3
f 2/1/4 3/2/4 7/3/4
f 2/1/4 7/3/4 6/4/4
f 3/1/5 4/2/5 8/3/5
f 3/1/5 8/3/5 7/4/5
f 4/1/6 1/2/6 5/3/6
f 4/1/6 5/3/6 8/4/6
";

#[test]
fn obj_to_model_file_and_back() {
    let obj = ObjData::read(Cursor::new(CUBE_OBJ)).unwrap();
    assert_eq!(obj.positions.len(), 8);
    assert_eq!(obj.corners.len(), 36);

    let model = IndexedModel::from_obj(&obj);
    assert_eq!(model.indices.len(), 36);
    // every referenced (position, texcoord) pair appears exactly once
    let mut pairs: Vec<([u8; 12], [u8; 8])> = model
        .vertices
        .iter()
        .map(|v| {
            let mut pos = [0u8; 12];
            let mut uv = [0u8; 8];
            for (i, f) in v.pos.iter().enumerate() {
                pos[i * 4..i * 4 + 4].copy_from_slice(&f.to_le_bytes());
            }
            for (i, f) in v.uv.iter().enumerate() {
                uv[i * 4..i * 4 + 4].copy_from_slice(&f.to_le_bytes());
            }
            (pos, uv)
        })
        .collect();
    let before = pairs.len();
    pairs.sort();
    pairs.dedup();
    assert_eq!(pairs.len(), before, "duplicate vertex emitted");

    let path = std::env::temp_dir().join("softrender_roundtrip.model");
    model.save(&path).unwrap();
    let restored = IndexedModel::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(restored, model);

    let triangles = model_triangles(&restored);
    assert_eq!(triangles.len(), 12);
}
