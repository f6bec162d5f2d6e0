use std::fs;
use std::io::Write;
use std::path::PathBuf;

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use crate::global_constants::LOG_TAG_INSTANCE;

const LOCK_FILE_NAME: &str = "screensage.lock";

/// Keeps a second copy of the app from fighting over the keyboard hook and
/// the screen-capture facility: an earlier live instance is terminated, a
/// stale lock is cleaned up, then our pid takes the lock.
pub fn ensure_single_instance() -> bool {
    let lock_file_path = lock_file_path();

    if lock_file_path.exists() {
        handle_existing_lock(&lock_file_path);
    }

    write_current_pid(&lock_file_path)
}

fn lock_file_path() -> PathBuf {
    std::env::temp_dir().join(LOCK_FILE_NAME)
}

fn handle_existing_lock(lock_file_path: &PathBuf) {
    let Ok(pid_string) = fs::read_to_string(lock_file_path) else {
        return;
    };
    let Ok(pid) = pid_string.trim().parse::<u32>() else {
        return;
    };

    log::info!(
        "{} Found existing instance with PID: {}",
        LOG_TAG_INSTANCE,
        pid
    );

    let mut system = System::new();
    system.refresh_processes_specifics(ProcessesToUpdate::All, true, ProcessRefreshKind::nothing());

    if let Some(process) = system.process(Pid::from_u32(pid)) {
        log::warn!(
            "{} Killing existing instance (PID: {})",
            LOG_TAG_INSTANCE,
            pid
        );
        process.kill();
        std::thread::sleep(std::time::Duration::from_millis(500));
    } else {
        log::info!(
            "{} Previous instance (PID: {}) is not running, cleaning up stale lock file",
            LOG_TAG_INSTANCE,
            pid
        );
    }

    let _ = fs::remove_file(lock_file_path);
}

fn write_current_pid(lock_file_path: &PathBuf) -> bool {
    let current_pid = std::process::id();

    if let Err(e) = fs::File::create(lock_file_path)
        .and_then(|mut file| file.write_all(current_pid.to_string().as_bytes()))
    {
        log::error!("{} Failed to create lock file: {}", LOG_TAG_INSTANCE, e);
        return false;
    }

    log::info!(
        "{} Created lock file with PID: {}",
        LOG_TAG_INSTANCE,
        current_pid
    );
    true
}
