use terrain::field::{
    self, Band, FAR_FIELD_RADIUS, NOISE_BOUND, PaletteColor, band_color, classify_band, color_for,
    far_field_damping, height_at, radial_profile,
};

#[test]
fn height_is_deterministic_across_grid() {
    let mut x = -120.0f32;
    while x <= 120.0 {
        let mut y = -120.0f32;
        while y <= 120.0 {
            let a = field::sample(x, y);
            let b = field::sample(x, y);
            assert_eq!(a.height.to_bits(), b.height.to_bits());
            assert_eq!(a.color, b.color);
            y += 7.5;
        }
        x += 7.5;
    }
}

#[test]
fn basin_sits_below_peak_ring() {
    let center = height_at(0.0, 0.0);
    let peak = height_at(38.0, 0.0);
    assert!(center < 0.0, "center {center}");
    assert!(center < peak, "center {center} peak {peak}");
}

#[test]
fn peak_ring_is_a_local_crest() {
    let peak = height_at(38.0, 0.0);
    assert!(peak > height_at(25.0, 0.0));
    assert!(peak > height_at(50.0, 0.0));
    assert!(peak > 2.0);
}

#[test]
fn outer_rim_is_a_local_crest() {
    let rim = height_at(80.0, 0.0);
    assert!(rim > height_at(65.0, 0.0));
    assert!(rim > height_at(95.0, 0.0));
    assert!(rim > 0.0);
}

#[test]
fn far_field_damping_strictly_decreases() {
    let mut prev = far_field_damping(FAR_FIELD_RADIUS);
    let mut r = FAR_FIELD_RADIUS + 0.5;
    while r <= 170.0 {
        let d = far_field_damping(r);
        assert!(d < prev, "damping not decreasing at r={r}");
        prev = d;
        r += 0.5;
    }
}

#[test]
fn damped_profile_flattens_monotonically() {
    let damped = |r: f32| radial_profile(r) * far_field_damping(r);
    let mut prev = damped(FAR_FIELD_RADIUS).abs();
    for step in 1..=70 {
        let r = FAR_FIELD_RADIUS + step as f32;
        let h = damped(r).abs();
        assert!(h < prev, "|profile| not decreasing at r={r}: {h} >= {prev}");
        prev = h;
    }
}

#[test]
fn far_field_heights_stay_under_decaying_envelope() {
    for deg in (0..360).step_by(15) {
        let theta = (deg as f32).to_radians();
        for r in [101.0f32, 110.0, 125.0, 140.0, 160.0] {
            let (x, y) = (r * theta.cos(), r * theta.sin());
            let envelope = (radial_profile(r).abs() + NOISE_BOUND) * far_field_damping(r);
            assert!(height_at(x, y).abs() <= envelope + 1e-5);
        }
    }
}

#[test]
fn first_matching_band_wins() {
    // High ground near the centre still reads as melt zone.
    assert_eq!(classify_band(10.0, 5.0), Band::MeltZone);
    assert_eq!(classify_band(15.0, 3.0), Band::PeakRing);
    assert_eq!(classify_band(30.0, 5.0), Band::PeakRing);
    assert_eq!(classify_band(30.0, 1.0), Band::Seafloor);
    assert_eq!(classify_band(55.0, 3.0), Band::Seafloor);
    assert_eq!(classify_band(70.0, 5.0), Band::OuterRim);
    assert_eq!(classify_band(90.0, 0.0), Band::Seafloor);
    assert_eq!(classify_band(130.0, 0.0), Band::Seafloor);
}

#[test]
fn color_is_pure_function_of_radius_and_height() {
    for (r, h) in [(5.0, -12.0), (30.0, 6.0), (75.0, 4.0), (110.0, 0.2)] {
        assert_eq!(color_for(r, h), color_for(r, h));
    }
    // Only the peak ring blend depends on height.
    assert_eq!(color_for(5.0, -10.0), color_for(5.0, 1.0));
    assert_eq!(color_for(75.0, -1.0), color_for(75.0, 6.0));
    assert_ne!(color_for(30.0, 3.0), color_for(30.0, 9.0));
}

#[test]
fn peak_ring_blends_from_rock_toward_peak() {
    let rock = PaletteColor::Rock.linear();
    let peak = PaletteColor::Peak.linear();

    let low = band_color(Band::PeakRing, 0.0);
    let high = band_color(Band::PeakRing, 15.0);

    assert!((low.red - rock.red).abs() < 1e-6);
    assert!((high.red - peak.red).abs() < 1e-5);
    assert!((high.blue - peak.blue).abs() < 1e-5);
}

#[test]
fn melt_zone_is_tinted_by_magma() {
    let deep = PaletteColor::Deep.linear();
    let melt = band_color(Band::MeltZone, 0.0);
    // Magma is redder and less blue than the deep slate.
    assert!(melt.red > deep.red);
    assert!(melt.blue < deep.blue);
}
