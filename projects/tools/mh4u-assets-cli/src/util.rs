use std::fs;
use std::path::*;

/// Recursively collects every file under `dir` whose extension is `extension`
/// (case insensitive).
///
/// Directories or entries that cannot be read are skipped.
pub fn find_all_files(dir: &Path, extension: &str, entries: &mut Vec<PathBuf>) -> std::io::Result<()> {
    // Gracefully handle cases where the directory cannot be read
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()),
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // Skip problematic entries, e.g. those without access.
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, extension, entries)?;
        } else if has_extension(&path, extension) {
            entries.push(path);
        }
    }
    Ok(())
}

/// Files to process for `input`: the file itself, or every matching file below it.
pub fn collect_inputs(input: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut entries = Vec::new();
    find_all_files(input, extension, &mut entries)?;
    entries.sort();
    Ok(entries)
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Creates the output directory if needed and returns its canonical path.
pub fn canonicalize_cli_path(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);

    // If path doesn't exist, create it
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| format!("Failed to create directory: {e}"))?;
    }

    fs::canonicalize(path).map_err(|e| format!("Invalid path: {e}"))
}

/// Where the export of `path` goes: its location relative to `input_root`, under
/// `output_root`, with the extension replaced.
pub fn output_path(path: &Path, input_root: &Path, output_root: &Path, extension: &str) -> PathBuf {
    let relative = path
        .strip_prefix(input_root)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .or_else(|| path.file_name().map(Path::new))
        .unwrap_or(path);
    output_root.join(relative).with_extension(extension)
}
