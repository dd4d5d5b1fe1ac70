use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> io::Result<()> {
    fs::create_dir_all(path.as_ref())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Write a string to a file, creating the file and its parent directories
/// if they don't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Read a file if it exists
pub fn read_optional<P: AsRef<Path>>(path: P) -> io::Result<Option<String>> {
    match read_file(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
