//! OBJ to `.model` converter: deduplicates (position, texcoord) pairs into a
//! flat binary vertex/index buffer the viewer consumes.

use std::error::Error;
use std::path::Path;
use std::process;

use log::info;

use softrender::model::IndexedModel;
use softrender::obj::ObjData;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: objconv <input.obj> <output.model>");
        process::exit(2);
    }

    if let Err(e) = run(Path::new(&args[1]), Path::new(&args[2])) {
        eprintln!("objconv: {e}");
        process::exit(1);
    }
}

fn run(input: &Path, output: &Path) -> Result<(), Box<dyn Error>> {
    let obj = ObjData::load(input)?;
    info!(
        "read {}: {} positions, {} texcoords, {} indices",
        input.display(),
        obj.positions.len(),
        obj.texcoords.len(),
        obj.corners.len()
    );

    let model = IndexedModel::from_obj(&obj);
    model.save(output)?;
    info!(
        "wrote {}: {} unique vertices, {} indices",
        output.display(),
        model.vertices.len(),
        model.indices.len()
    );
    Ok(())
}
