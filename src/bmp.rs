//! Uncompressed BMP output.
//!
//! Writes the fixed format the capture produces: 14-byte file header,
//! 40-byte info header, then raw 32bpp BGRA pixel data. `biHeight` is
//! negative so rows are stored top-down, matching the frame layout.

use anyhow::{Context, Result};
use std::path::Path;

use crate::frame::Frame;

/// BITMAPFILEHEADER (14) + BITMAPINFOHEADER (40); pixel data starts here.
pub const HEADER_LEN: usize = 54;

/// Encodes a frame as a complete BMP file image.
///
/// The result is always `HEADER_LEN + width * height * 4` bytes.
pub fn encode(frame: &Frame) -> Vec<u8> {
    let image_size = frame.pixels.len() as u32;
    let file_size = HEADER_LEN as u32 + image_size;

    let mut out = Vec::with_capacity(file_size as usize);

    // BITMAPFILEHEADER
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // bfReserved1
    out.extend_from_slice(&0u16.to_le_bytes()); // bfReserved2
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes()); // bfOffBits

    // BITMAPINFOHEADER
    out.extend_from_slice(&40u32.to_le_bytes()); // biSize
    out.extend_from_slice(&(frame.width as i32).to_le_bytes());
    // Negative height marks top-down row order
    out.extend_from_slice(&(-(frame.height as i32)).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // biPlanes
    out.extend_from_slice(&32u16.to_le_bytes()); // biBitCount
    out.extend_from_slice(&0u32.to_le_bytes()); // biCompression = BI_RGB
    out.extend_from_slice(&image_size.to_le_bytes()); // biSizeImage
    out.extend_from_slice(&0i32.to_le_bytes()); // biXPelsPerMeter
    out.extend_from_slice(&0i32.to_le_bytes()); // biYPelsPerMeter
    out.extend_from_slice(&0u32.to_le_bytes()); // biClrUsed
    out.extend_from_slice(&0u32.to_le_bytes()); // biClrImportant

    out.extend_from_slice(&frame.pixels);
    out
}

/// Encodes `frame` and writes it to `path`, replacing any existing file.
pub fn save(frame: &Frame, path: &Path) -> Result<()> {
    std::fs::write(path, encode(frame))
        .with_context(|| format!("Failed to write {}", path.display()))
}
