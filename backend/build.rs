use std::fs;
use std::path::Path;

fn main() {
    let static_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    // Refresh the embedded bundle whenever a frontend build exists. The
    // committed static/dist placeholder keeps include_dir! well-formed
    // before the first frontend build.
    if dist_dir.exists() {
        let _ = fs::remove_dir_all(static_dir.join("dist"));
        fs::create_dir_all(static_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            static_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
