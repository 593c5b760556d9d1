//! Small filesystem helpers used to persist generated descriptors.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// Make sure that the parent directory of `path` exists, creating all missing components.
pub fn ensure_dir(path: impl AsRef<Path>) -> io::Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            log::trace!("creating directory {parent:?}");
            fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}

/// Write `text` to the file at `path`, creating its parent directories first.
///
/// An existing file is overwritten.
pub fn write_file(path: impl AsRef<Path>, text: impl AsRef<str>) -> io::Result<()> {
    let path = path.as_ref();
    ensure_dir(path)?;

    // open file, ensuring that an existing file is overwritten
    let mut file = fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;

    file.write_all(text.as_ref().as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn creates_missing_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a").join("b").join("bd.yaml");

        write_file(&path, "first").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bd.yaml");

        write_file(&path, "a much longer first version").unwrap();
        write_file(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn bare_file_name_needs_no_directory() {
        assert!(ensure_dir("bd.yaml").is_ok());
    }
}
