//! Named colors used by the fixture
//!
//! Values follow the common web/X11 color names.
#![allow(clippy::unreadable_literal)]

use super::{Rgb, utils::rgb_from_u32};

pub const BLACK: Rgb = rgb_from_u32(0x000000);
pub const WHITE: Rgb = rgb_from_u32(0xFFFFFF);
pub const RED: Rgb = rgb_from_u32(0xFF0000);
pub const DEEP_PINK: Rgb = rgb_from_u32(0xFF1493);
pub const BLUE_VIOLET: Rgb = rgb_from_u32(0x8A2BE2);
pub const DARK_ORANGE: Rgb = rgb_from_u32(0xFF8C00);
pub const GOLD: Rgb = rgb_from_u32(0xFFD700);
pub const CYAN: Rgb = rgb_from_u32(0x00FFFF);
pub const MAGENTA: Rgb = rgb_from_u32(0xFF00FF);
pub const DEEP_SKY_BLUE: Rgb = rgb_from_u32(0x00BFFF);
pub const ANTIQUE_WHITE: Rgb = rgb_from_u32(0xFAEBD7);
pub const ORANGE_RED: Rgb = rgb_from_u32(0xFF4500);
pub const ORANGE: Rgb = rgb_from_u32(0xFFA500);

/// Warm white used for static decoration (logo, bride, eyes)
pub const WARM_WHITE: Rgb = rgb_from_u32(0xF6C8A0);
