use std::path::{Path, PathBuf};

/// Glob used to discover candidate entries at the root
pub const SHOT_GLOB: &str = "SHOT_*";

/// Default name of the summary document
pub const SUMMARY_FILE: &str = "summary.txt";

/// Name of the optional configuration file in the input directory
pub const CONFIG_FILE: &str = ".shot-organizer.json";

/// Legacy split layout subfolders, in processing order
pub const PREVIEW_DIR: &str = "preview";
pub const FINAL_DIR: &str = "final";
pub const SPLIT_SUBFOLDERS: [&str; 2] = [PREVIEW_DIR, FINAL_DIR];

/// Get the path to the configuration file
pub fn get_config_path(input_dir: &Path) -> PathBuf {
    input_dir.join(CONFIG_FILE)
}

/// Basename of a path as an owned string, lossy for non-UTF-8 names
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// File name of the running executable, if it can be determined
pub fn current_exe_name() -> Option<String> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_name().map(|n| n.to_string_lossy().to_string()))
}
