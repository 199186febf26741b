use std::fs;
use std::path::{Path, PathBuf};

pub fn write_input(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write input file");
    path
}
