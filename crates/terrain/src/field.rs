//! Closed-form crater height field and its colour bands.
//!
//! Heights are a sum of radial Gaussian terms plus a fixed trigonometric
//! roughness, flattened beyond `FAR_FIELD_RADIUS`. Nothing here is seeded:
//! the same `(x, y)` always yields the same sample.

use bevy::color::{LinearRgba, Mix, Srgba};

const BASIN_DEPTH: f32 = 18.0;
const BASIN_SPREAD: f32 = 45.0;

const PEAK_RING_HEIGHT: f32 = 14.0;
const PEAK_RING_RADIUS: f32 = 38.0;
const PEAK_RING_SPREAD: f32 = 12.0;

const OUTER_RIM_HEIGHT: f32 = 8.0;
const OUTER_RIM_RADIUS: f32 = 80.0;
const OUTER_RIM_SPREAD: f32 = 25.0;

pub const FAR_FIELD_RADIUS: f32 = 100.0;
const FAR_FIELD_FALLOFF: f32 = 20.0;

/// Upper bound of `|surface_noise|`.
pub const NOISE_BOUND: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Deep,
    Rock,
    Peak,
    Rim,
    Magma,
}

impl PaletteColor {
    pub fn srgb(self) -> Srgba {
        match self {
            PaletteColor::Deep => Srgba::rgb_u8(0x33, 0x41, 0x55),
            PaletteColor::Rock => Srgba::rgb_u8(0x94, 0xa3, 0xb8),
            PaletteColor::Peak => Srgba::rgb_u8(0xe2, 0xe8, 0xf0),
            PaletteColor::Rim => Srgba::rgb_u8(0x64, 0x74, 0x8b),
            PaletteColor::Magma => Srgba::rgb_u8(0x7f, 0x1d, 0x1d),
        }
    }

    pub fn linear(self) -> LinearRgba {
        self.srgb().into()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    /// Central melt sheet.
    MeltZone,
    PeakRing,
    OuterRim,
    /// Everything else: trough and surrounding sea floor.
    Seafloor,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CraterSample {
    pub height: f32,
    pub color: LinearRgba,
}

#[inline]
pub fn radius(x: f32, y: f32) -> f32 {
    (x * x + y * y).sqrt()
}

/// Noise-free radial shape: basin, peak ring and outer rim.
pub fn radial_profile(r: f32) -> f32 {
    let basin = -BASIN_DEPTH * (-(r * r) / (BASIN_SPREAD * BASIN_SPREAD)).exp();

    let dp = r - PEAK_RING_RADIUS;
    let peak_ring = PEAK_RING_HEIGHT * (-(dp * dp) / (PEAK_RING_SPREAD * PEAK_RING_SPREAD)).exp();

    let dr = r - OUTER_RIM_RADIUS;
    let rim = OUTER_RIM_HEIGHT * (-(dr * dr) / (OUTER_RIM_SPREAD * OUTER_RIM_SPREAD)).exp();

    basin + peak_ring + rim
}

pub fn surface_noise(x: f32, y: f32) -> f32 {
    (x / 4.0).sin() * (y / 4.0).cos() * 0.5 + (x / 1.5).sin() * (y / 1.5).sin() * 0.2
}

pub fn far_field_damping(r: f32) -> f32 {
    if r > FAR_FIELD_RADIUS {
        (-(r - FAR_FIELD_RADIUS) / FAR_FIELD_FALLOFF).exp()
    } else {
        1.0
    }
}

pub fn height_at(x: f32, y: f32) -> f32 {
    let r = radius(x, y);
    (radial_profile(r) + surface_noise(x, y)) * far_field_damping(r)
}

/// First matching band wins. The peak ring test overlaps the melt zone at
/// small radii, so the order here is load-bearing.
pub fn classify_band(r: f32, height: f32) -> Band {
    if r < 15.0 {
        Band::MeltZone
    } else if height > 2.0 && r < 50.0 {
        Band::PeakRing
    } else if r > 60.0 && r < 90.0 {
        Band::OuterRim
    } else {
        Band::Seafloor
    }
}

pub fn band_color(band: Band, height: f32) -> LinearRgba {
    match band {
        Band::MeltZone => PaletteColor::Deep
            .linear()
            .mix(&PaletteColor::Magma.linear(), 0.2),
        Band::PeakRing => PaletteColor::Rock
            .linear()
            .mix(&PaletteColor::Peak.linear(), height / 15.0),
        Band::OuterRim => PaletteColor::Rim
            .linear()
            .mix(&PaletteColor::Rock.linear(), 0.5),
        Band::Seafloor => PaletteColor::Deep
            .linear()
            .mix(&PaletteColor::Rock.linear(), 0.3),
    }
}

pub fn color_for(r: f32, height: f32) -> LinearRgba {
    band_color(classify_band(r, height), height)
}

pub fn sample(x: f32, y: f32) -> CraterSample {
    let height = height_at(x, y);
    CraterSample {
        height,
        color: color_for(radius(x, y), height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damping_is_identity_inside_far_field() {
        assert_eq!(far_field_damping(0.0), 1.0);
        assert_eq!(far_field_damping(FAR_FIELD_RADIUS), 1.0);
        assert!(far_field_damping(FAR_FIELD_RADIUS + 1.0) < 1.0);
    }

    #[test]
    fn noise_stays_within_bound() {
        let mut x = -120.0;
        while x <= 120.0 {
            let mut y = -120.0;
            while y <= 120.0 {
                assert!(surface_noise(x, y).abs() <= NOISE_BOUND);
                y += 3.7;
            }
            x += 3.7;
        }
    }
}
