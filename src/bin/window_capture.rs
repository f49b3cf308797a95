//! Captures one window to `window_capture.bmp` on the user's desktop
//! folder. The window is chosen by prompting for a title keyword and
//! taking the first visible top-level window whose title contains it.

#[cfg(windows)]
fn run() -> anyhow::Result<()> {
    use anyhow::{anyhow, bail};
    use dxgi_snapshot::{bmp, capture, log, paths};
    use std::io::{self, Write};

    paths::ensure_directories()?;

    print!("Enter a window title keyword: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let keyword = line.trim();
    if keyword.is_empty() {
        bail!("No keyword entered");
    }

    log(&format!("Searching for window containing \"{}\"...", keyword));
    let window = capture::find_window_by_title(keyword)?;
    log(&format!(
        "Matched \"{}\" at ({}, {}) size {}x{}",
        window.title, window.rect.left, window.rect.top, window.rect.width, window.rect.height
    ));

    log("Capturing primary display...");
    let frame = capture::capture_primary_output()?;
    let cropped = frame.crop(&window.rect)?;

    let path = paths::desktop_dir()
        .ok_or_else(|| anyhow!("Could not locate the desktop folder"))?
        .join("window_capture.bmp");
    bmp::save(&cropped, &path)?;

    log(&format!(
        "Saved {}x{} capture to {}",
        cropped.width,
        cropped.height,
        path.display()
    ));
    Ok(())
}

#[cfg(windows)]
fn main() {
    if let Err(e) = run() {
        eprintln!("Capture failed: {:#}", e);
        std::process::exit(-1);
    }
}

#[cfg(not(windows))]
fn main() {
    eprintln!("window_capture requires the DXGI Desktop Duplication API (Windows only)");
    std::process::exit(-1);
}
