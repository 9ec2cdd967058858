use std::fs;
use std::io;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        match fs::remove_dir_all(out_dir) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => panic!("cannot clear {}: {}", out_dir.display(), err),
        }
        fs::create_dir_all(out_dir).expect("create host/static");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("copy frontend/dist into host/static/dist, run `trunk build` in frontend/ first");
    }
    // The embedded directory must exist even before the front-end is built.
    fs::create_dir_all(out_dir.join("dist")).expect("create host/static/dist");
    println!("cargo:rerun-if-changed=../frontend/dist");
}
