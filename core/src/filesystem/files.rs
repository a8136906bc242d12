use super::error::FileSystemError;
use log::error;
use std::{fs::File, io::Read, path::Path};

/// Read a whole file into memory
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, FileSystemError> {
    let file_path = Path::new(path);
    if !file_path.is_file() {
        error!("[files] Path {path} is not a file");
        return Err(FileSystemError::NotFile);
    }

    let open_result = File::open(file_path);
    let mut file = match open_result {
        Ok(result) => result,
        Err(err) => {
            error!("[files] Failed to open file {path}: {err:?}");
            return Err(FileSystemError::OpenFile);
        }
    };

    let mut buffer = Vec::new();
    let read_result = file.read_to_end(&mut buffer);
    match read_result {
        Ok(_) => Ok(buffer),
        Err(err) => {
            error!("[files] Failed to read file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}
