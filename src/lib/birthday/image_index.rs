//! Persistent cursor into the image rotation: a file holding one decimal number.
use std::{fs, io, path::Path};

use log::debug;

/// Reads the cursor. Missing or unparsable files mean "start over" and read as `0`.
pub fn read_image_index(path: &Path) -> usize {
    match fs::read_to_string(path) {
        Ok(contents) => contents.trim().parse().unwrap_or_else(|_| {
            debug!("Image index in {} is not a number, using 0", path.display());
            0
        }),
        Err(_) => 0,
    }
}

pub fn write_image_index(path: &Path, index: usize) -> io::Result<()> {
    debug!("Writing image index {} to {}", index, path.display());
    fs::write(path, index.to_string())
}
