//! Desktop-shell file bridge.
//!
//! The frontend only needs three capabilities from the shell, all used
//! to stage a PDF before it is handed to the decoder: write a buffer to
//! a temporary file, delete a file by path, and join path segments.

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use super::CommandResult;

/// Write `contents` to a uniquely named temporary file and return its path.
#[tauri::command]
pub fn stage_temp_file(contents: Vec<u8>, file_name: String) -> CommandResult<String> {
    let path = std::env::temp_dir().join(format!("{}-{file_name}", Uuid::new_v4()));
    fs::write(&path, &contents)?;
    log::debug!("staged {} bytes at {}", contents.len(), path.display());
    Ok(path.to_string_lossy().into_owned())
}

/// Delete a previously staged temporary file.
#[tauri::command]
pub fn remove_temp_file(path: String) -> CommandResult<()> {
    fs::remove_file(&path)?;
    Ok(())
}

#[tauri::command]
pub fn join_path(directory: String, file_name: String) -> String {
    PathBuf::from(directory)
        .join(file_name)
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_then_remove_round_trip() {
        let path = stage_temp_file(b"%PDF-1.4".to_vec(), "list.pdf".to_string()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4");
        remove_temp_file(path.clone()).unwrap();
        assert!(!PathBuf::from(path).exists());
    }

    #[test]
    fn test_staged_names_are_unique() {
        let a = stage_temp_file(Vec::from("a"), "list.pdf".to_string()).unwrap();
        let b = stage_temp_file(Vec::from("b"), "list.pdf".to_string()).unwrap();
        assert_ne!(a, b);
        remove_temp_file(a).unwrap();
        remove_temp_file(b).unwrap();
    }

    #[test]
    fn test_join_path() {
        let joined = join_path("/tmp/imports".to_string(), "list.pdf".to_string());
        assert_eq!(PathBuf::from(joined), PathBuf::from("/tmp/imports/list.pdf"));
    }
}
