//! Spacing scale shared by the views.
//!
//! All constants are f32. Cast with `as i8` where egui margin APIs want it.

/// 4px
pub const SPACING_XS: f32 = 4.0;

/// 8px
pub const SPACING_SM: f32 = 8.0;

/// 12px
pub const SPACING_MD: f32 = 12.0;

/// 16px
pub const SPACING_LG: f32 = 16.0;

/// Medium corner radius for widgets.
pub const RADIUS_MD: u8 = 4;

/// Large corner radius for windows and dialogs.
pub const RADIUS_LG: u8 = 8;
