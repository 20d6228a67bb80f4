//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! points at the directory Zellij was started from (normally the user's home).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Returns the plugin's data directory, which holds the trace file.
///
/// # Examples
///
/// ```
/// use weatherdash::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/weatherdash");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("weatherdash")
}

/// Expands a leading `~` to the sandbox host mount.
///
/// # Examples
///
/// ```
/// use weatherdash::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/weatherdash.toml"), "/etc/weatherdash.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}
