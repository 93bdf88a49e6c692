// Platform-specific helpers

use std::path::Path;
use std::process::Command;

/// Open a directory in the system file manager
///
/// Best effort: spawn failures are logged and swallowed, since not being
/// able to pop a window open should never fail an operation.
pub fn open_in_file_manager(path: &Path) {
    #[cfg(target_os = "windows")]
    let opener = "explorer";

    #[cfg(target_os = "macos")]
    let opener = "open";

    #[cfg(all(unix, not(target_os = "macos")))]
    let opener = "xdg-open";

    if let Err(err) = Command::new(opener).arg(path).spawn() {
        log::debug!("Could not open {:?} in file manager: {}", path, err);
    }
}
