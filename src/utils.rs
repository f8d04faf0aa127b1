use std::path::{Path, PathBuf};

use crate::constants::OUTPUT_EXTENSION;

/// Path of the component file generated for `component_name`
pub fn component_path(output_folder: &Path, component_name: &str) -> PathBuf {
    output_folder.join(format!("{component_name}.{OUTPUT_EXTENSION}"))
}

#[cfg(unix)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(windows)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    if let Ok(metadata) = path.metadata() {
        metadata.file_attributes() & 0x2 != 0 // FILE_ATTRIBUTE_HIDDEN
    } else {
        false
    }
}
