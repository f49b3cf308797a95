//! DXGI Snapshot
//!
//! One-shot screenshot tools for Windows built on the DXGI Desktop
//! Duplication API. Two binaries share this library:
//! - `desktop_capture` saves the entire primary display
//! - `window_capture` crops the capture to a window found by title keyword
//!
//! Output is an uncompressed 32bpp top-down BGRA BMP on the user's desktop.

pub mod bmp;
pub mod capture;
pub mod frame;
pub mod paths;

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

/// Logs a message to both console and log file with timestamp.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    print!("{}", line);
    let log_path = paths::logs_dir().join("dxgi_snapshot.log");
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(line.as_bytes());
    }
}
