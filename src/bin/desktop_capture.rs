//! Captures the entire primary display to `desktop_full.bmp` on the
//! user's desktop folder.

#[cfg(windows)]
fn run() -> anyhow::Result<()> {
    use anyhow::anyhow;
    use dxgi_snapshot::{bmp, capture, log, paths};

    paths::ensure_directories()?;

    log("Capturing primary display...");
    let frame = capture::capture_primary_output()?;

    let path = paths::desktop_dir()
        .ok_or_else(|| anyhow!("Could not locate the desktop folder"))?
        .join("desktop_full.bmp");
    bmp::save(&frame, &path)?;

    log(&format!(
        "Saved {}x{} capture to {}",
        frame.width,
        frame.height,
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
    eprintln!("desktop_capture requires the DXGI Desktop Duplication API (Windows only)");
    std::process::exit(-1);
}
