//! Run-scoped scratch directory.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use crate::domain::AppError;

static LIVE_DIRS: Mutex<Vec<PathBuf>> = Mutex::new(Vec::new());

/// Temporary working directory, removed when dropped or when the process is interrupted.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn new() -> Result<Self, AppError> {
        let dir = tempfile::Builder::new().prefix("addon-publish-").tempdir()?;
        if let Ok(mut live) = LIVE_DIRS.lock() {
            live.push(dir.path().to_path_buf());
        }
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create (if needed) and return a subdirectory.
    pub fn subdir(&self, name: &str) -> Result<PathBuf, AppError> {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(&path)?;
        Ok(path)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Ok(mut live) = LIVE_DIRS.lock() {
            live.retain(|p| p != self.dir.path());
        }
    }
}

#[cfg(unix)]
fn remove_live_dirs() {
    if let Ok(live) = LIVE_DIRS.lock() {
        for dir in live.iter() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}

/// Delete live scratch directories and exit with 1 on SIGINT/SIGTERM.
///
/// The signals are blocked and collected by a dedicated thread with `sigwait`. Call this
/// before spawning any other thread so every thread inherits the mask. Child processes
/// start with an empty mask.
#[cfg(unix)]
pub fn install_interrupt_cleanup() {
    let signals = unsafe {
        let mut set: libc::sigset_t = std::mem::zeroed();
        libc::sigemptyset(&mut set);
        libc::sigaddset(&mut set, libc::SIGINT);
        libc::sigaddset(&mut set, libc::SIGTERM);
        if libc::pthread_sigmask(libc::SIG_BLOCK, &set, std::ptr::null_mut()) != 0 {
            return;
        }
        set
    };

    std::thread::spawn(move || {
        let mut received: libc::c_int = 0;
        if unsafe { libc::sigwait(&signals, &mut received) } == 0 {
            remove_live_dirs();
            std::process::exit(1);
        }
    });
}

#[cfg(not(unix))]
pub fn install_interrupt_cleanup() {}
