//! `0xRRGGBB` → linear-ish RGB float triples.
//!
//! Colors are stored as `[f32; 3]` in [0, 1] throughout the crate so they
//! serialize cleanly into TOML presets and pack directly into GPU instances.

/// Convert a packed `0xRRGGBB` value into an RGB float triple.
#[must_use]
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Append an alpha channel to an RGB triple.
#[must_use]
pub const fn with_alpha(color: [f32; 3], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha]
}
