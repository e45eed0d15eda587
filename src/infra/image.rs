//! Decoding and fitting rendered diagrams for display.

use image::imageops::FilterType;
use std::path::Path;

use crate::domain::{Result, WorkflowError};

/// Decoded RGBA pixels ready to upload as a texture.
#[derive(Clone, PartialEq, Eq)]
pub struct PreviewImage {
    /// Size of the file as rendered by the external tool.
    pub native_size: [u32; 2],
    /// Size of `rgba`, never larger than `native_size`.
    pub size: [u32; 2],
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewImage")
            .field("native_size", &self.native_size)
            .field("size", &self.size)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Largest size with the source's aspect ratio that fits inside `frame`.
///
/// Images that already fit are returned unchanged, so the result never
/// exceeds the source. A zero frame side means "unbounded" on that axis.
pub fn fit_within(source: (u32, u32), frame: (u32, u32)) -> (u32, u32) {
    let (width, height) = source;
    if width == 0 || height == 0 {
        return source;
    }

    let max_w = if frame.0 == 0 { width } else { frame.0 };
    let max_h = if frame.1 == 0 { height } else { frame.1 };
    if width <= max_w && height <= max_h {
        return source;
    }

    let ratio = (f64::from(max_w) / f64::from(width)).min(f64::from(max_h) / f64::from(height));
    let fit_w = ((f64::from(width) * ratio).floor() as u32).clamp(1, width);
    let fit_h = ((f64::from(height) * ratio).floor() as u32).clamp(1, height);
    (fit_w, fit_h)
}

/// Decode `path` and downscale it to fit `frame`.
pub fn load_scaled(path: &Path, frame: (u32, u32)) -> Result<PreviewImage> {
    let decoded = image::open(path)
        .map_err(|err| WorkflowError::Display(format!("{}: {err}", path.display())))?;

    let native = (decoded.width(), decoded.height());
    let (width, height) = fit_within(native, frame);
    let scaled = if (width, height) == native {
        decoded
    } else {
        log::debug!("scaling preview {native:?} -> {:?}", (width, height));
        decoded.resize_exact(width, height, FilterType::Lanczos3)
    };

    let rgba = scaled.to_rgba8();
    Ok(PreviewImage {
        native_size: [native.0, native.1],
        size: [rgba.width(), rgba.height()],
        rgba: rgba.into_raw(),
    })
}
