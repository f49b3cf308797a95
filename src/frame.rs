//! CPU-side frame buffer and screen rectangles.
//!
//! A [`Frame`] is tightly packed BGRA, row-major, top-down. Mapped GPU
//! textures carry a driver-chosen row pitch that may exceed `width * 4`,
//! so rows are de-padded on the way in.

use anyhow::{anyhow, Result};

/// A screen rectangle in desktop coordinates.
///
/// Window rectangles can have negative origins (multi-monitor layouts,
/// windows dragged partly off-screen), so left/top are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Clamps this region to a `frame_width` x `frame_height` frame whose
    /// origin is (0, 0). Returns `None` when the intersection is empty.
    pub fn intersect_frame(&self, frame_width: u32, frame_height: u32) -> Option<Region> {
        let left = self.left.max(0);
        let top = self.top.max(0);
        let right = (self.left + self.width as i32).min(frame_width as i32);
        let bottom = (self.top + self.height as i32).min(frame_height as i32);

        if right <= left || bottom <= top {
            return None;
        }

        Some(Region {
            left,
            top,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }
}

/// A captured frame: tightly packed BGRA pixels, 4 bytes per pixel,
/// row-major, top-down. `pixels.len() == width * height * 4` always holds.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Builds a tightly packed frame from a mapped texture buffer.
    ///
    /// `src` holds `height` rows of `row_pitch` bytes each; only the first
    /// `width * 4` bytes of each row are meaningful, the rest is alignment
    /// padding and is dropped.
    pub fn from_padded_rows(src: &[u8], row_pitch: usize, width: u32, height: u32) -> Frame {
        let row_bytes = width as usize * 4;
        debug_assert!(row_pitch >= row_bytes);

        let mut pixels = Vec::with_capacity(row_bytes * height as usize);
        for y in 0..height as usize {
            let start = y * row_pitch;
            pixels.extend_from_slice(&src[start..start + row_bytes]);
        }

        Frame {
            width,
            height,
            pixels,
        }
    }

    /// Copies out the part of this frame covered by `region`.
    ///
    /// The region is clamped to the frame bounds first; a region that lies
    /// entirely outside the frame is an error.
    pub fn crop(&self, region: &Region) -> Result<Frame> {
        let clamped = region
            .intersect_frame(self.width, self.height)
            .ok_or_else(|| anyhow!("window region lies outside the captured frame"))?;

        let src_row_bytes = self.width as usize * 4;
        let out_row_bytes = clamped.width as usize * 4;
        let x_offset = clamped.left as usize * 4;

        let mut pixels = Vec::with_capacity(out_row_bytes * clamped.height as usize);
        for y in 0..clamped.height as usize {
            let row_start = (clamped.top as usize + y) * src_row_bytes + x_offset;
            pixels.extend_from_slice(&self.pixels[row_start..row_start + out_row_bytes]);
        }

        Ok(Frame {
            width: clamped.width,
            height: clamped.height,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_padded_rows_strips_pitch() {
        // 2x2 frame, 8 meaningful bytes per row, pitch 12 (4 bytes padding)
        let mut src = Vec::new();
        for row in 0u8..2 {
            for i in 0u8..8 {
                src.push(row * 10 + i);
            }
            src.extend_from_slice(&[0xEE; 4]);
        }

        let frame = Frame::from_padded_rows(&src, 12, 2, 2);

        assert_eq!(frame.pixels.len(), 16);
        assert_eq!(&frame.pixels[..8], &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(&frame.pixels[8..], &[10, 11, 12, 13, 14, 15, 16, 17]);
    }

    #[test]
    fn test_from_padded_rows_exact_pitch() {
        let src: Vec<u8> = (0..24).collect();
        let frame = Frame::from_padded_rows(&src, 8, 2, 3);
        assert_eq!(frame.pixels, src);
    }

    #[test]
    fn test_crop_interior() {
        // 4x4 frame where each pixel's 4 bytes encode its (x, y)
        let mut pixels = Vec::new();
        for y in 0u8..4 {
            for x in 0u8..4 {
                pixels.extend_from_slice(&[x, y, 0, 255]);
            }
        }
        let frame = Frame {
            width: 4,
            height: 4,
            pixels,
        };

        let region = Region {
            left: 1,
            top: 2,
            width: 2,
            height: 1,
        };
        let cropped = frame.crop(&region).unwrap();

        assert_eq!((cropped.width, cropped.height), (2, 1));
        assert_eq!(cropped.pixels, vec![1, 2, 0, 255, 2, 2, 0, 255]);
    }

    #[test]
    fn test_crop_clamps_to_frame() {
        let frame = Frame {
            width: 4,
            height: 4,
            pixels: vec![7; 64],
        };

        // Overhangs the frame on all sides
        let region = Region {
            left: -2,
            top: -2,
            width: 10,
            height: 10,
        };
        let cropped = frame.crop(&region).unwrap();

        assert_eq!((cropped.width, cropped.height), (4, 4));
        assert_eq!(cropped.pixels.len(), 64);
    }

    #[test]
    fn test_crop_outside_frame_is_error() {
        let frame = Frame {
            width: 4,
            height: 4,
            pixels: vec![0; 64],
        };

        let region = Region {
            left: 100,
            top: 100,
            width: 5,
            height: 5,
        };
        assert!(frame.crop(&region).is_err());
    }

    #[test]
    fn test_intersect_empty_when_degenerate() {
        let region = Region {
            left: 0,
            top: 0,
            width: 0,
            height: 5,
        };
        assert_eq!(region.intersect_frame(10, 10), None);
    }
}
