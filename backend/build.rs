use std::{fs, path::Path};

fn main() {
    // rust-embed needs the folder to exist, even when the frontend is not built yet
    let path = "../frontend/dist";
    println!("cargo:rerun-if-changed={path}");

    if !Path::new(path).exists() {
        fs::create_dir_all(path).expect("Could not create a frontend/dist folder");
    }
}
