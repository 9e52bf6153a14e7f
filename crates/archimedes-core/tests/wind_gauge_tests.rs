// End-to-end checks against the wind gauge layout:
// calm readings near white, a blue-to-red sweep above 5 m/s.

use archimedes_core::*;

fn wind_config() -> ArchimedesConfig {
    ArchimedesConfig {
        value_min: 5.0,
        value_max: 30.0,
        angle_min: 210.0,
        angle_max: 450.0,
        radius_min: 50.0,
        radius_max: 255.0,
        brightness_max: 255,
    }
}

fn make_mapper() -> anyhow::Result<Archimedes> {
    Ok(Archimedes::new(wind_config())?)
}

#[test]
fn zero_reading_is_white() -> anyhow::Result<()> {
    let m = make_mapper()?;
    let at = m.position(0.0);
    assert_eq!(at.phi, 210.0);
    assert_eq!(at.r, 0.0);
    assert_eq!(m.levels(0.0), [255, 255, 255]);
    assert_eq!(m.get_color(0.0), 0xffffff);
    Ok(())
}

#[test]
fn value_min_sits_on_inner_edge() -> anyhow::Result<()> {
    let m = make_mapper()?;
    let at = m.position(5.0);
    assert_eq!(at.phi, 210.0);
    assert!((at.r - 50.0).abs() < 1e-9, "r = {}", at.r);
    assert_eq!(m.levels(5.0), [205, 205, 255]);
    assert_eq!(m.get_color(5.0), 0xcdcdff);
    Ok(())
}

#[test]
fn value_max_is_saturated_red() -> anyhow::Result<()> {
    let m = make_mapper()?;
    let at = m.position(30.0);
    assert!((at.phi - 450.0).abs() < 1e-9, "phi = {}", at.phi);
    assert!((at.r - 255.0).abs() < 1e-9, "r = {}", at.r);
    assert_eq!(m.get_color(30.0), 0xff0000);
    assert_eq!(m.get_rgb(30.0), Rgb { r: 255, g: 0, b: 0 });
    assert_eq!(m.get_rgb(30.0).to_string(), "#ff0000");
    Ok(())
}

#[test]
fn out_of_range_readings_are_clamped() -> anyhow::Result<()> {
    let m = make_mapper()?;
    assert_eq!(m.get_color(-10.0), m.get_color(0.0));
    assert_eq!(m.get_color(1000.0), m.get_color(30.0));
    assert_eq!(m.get_color(f64::NEG_INFINITY), 0xffffff);
    assert_eq!(m.get_color(f64::INFINITY), 0xff0000);
    assert_eq!(m.get_color(f64::NAN), 0xffffff);
    Ok(())
}

#[test]
fn below_threshold_fades_in_along_start_angle() -> anyhow::Result<()> {
    let m = make_mapper()?;
    let at = m.position(2.5);
    assert_eq!(at.phi, 210.0);
    assert_eq!(at.r, 25.0);
    // blue stays full, red and green dim by r
    assert_eq!(m.levels(2.5), [230, 230, 255]);
    assert_eq!(m.get_color(2.5), 0xe6e6ff);
    Ok(())
}

#[test]
fn midrange_reading_passes_through_green() -> anyhow::Result<()> {
    let m = make_mapper()?;
    // phi = 9.6 * 17.5 + 162 = 330, straight on the green hue
    let at = m.position(17.5);
    assert!((at.phi - 330.0).abs() < 1e-9);
    let [red, green, blue] = m.levels(17.5);
    assert_eq!(green, 255);
    assert!(red < green && blue < green);
    Ok(())
}

#[test]
fn equal_value_bounds_are_rejected() {
    let cfg = ArchimedesConfig {
        value_max: 5.0,
        ..wind_config()
    };
    let err = Archimedes::new(cfg).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::DegenerateValueDomain {
            value_min: 5.0,
            value_max: 5.0
        }
    );
    assert!(err.to_string().contains("value_max"));
}

#[test]
fn mapper_keeps_its_own_copy_of_the_config() -> anyhow::Result<()> {
    let mut cfg = wind_config();
    let m = Archimedes::new(cfg)?;
    let before = m.get_color(20.0);
    cfg.angle_max = 90.0;
    cfg.brightness_max = 10;
    assert_eq!(m.get_color(20.0), before);
    assert_eq!(m.config(), &wind_config());
    Ok(())
}

#[test]
fn reduced_brightness_ceiling_caps_every_channel() -> anyhow::Result<()> {
    // blue-green to red sweep with a dimmer ceiling
    let m = Archimedes::new(ArchimedesConfig {
        value_min: 5.0,
        value_max: 25.0,
        angle_min: 90.0,
        angle_max: 300.0,
        radius_min: 100.0,
        radius_max: 200.0,
        brightness_max: 200,
    })?;
    for v in [0.0, 3.0, 5.0, 12.5, 20.0, 25.0] {
        for level in m.levels(v) {
            assert!((0..=200).contains(&level), "level {level} at value {v}");
        }
    }
    assert_eq!(m.get_color(0.0), 0xc8c8c8);
    Ok(())
}

#[test]
fn mapper_is_shareable_across_threads() -> anyhow::Result<()> {
    let m = make_mapper()?;
    let expected: Vec<u32> = (0..=30).map(|v| m.get_color(v as f64)).collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| (0..=30).map(|v| m.get_color(v as f64)).collect::<Vec<_>>()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
    Ok(())
}

#[test]
fn negative_value_floor_starts_mid_sweep_at_zero() -> anyhow::Result<()> {
    let m = Archimedes::new(ArchimedesConfig {
        value_min: -10.0,
        value_max: 10.0,
        ..wind_config()
    })?;
    // readings never drop below 0, so the fade-in zone is unreachable
    let at = m.position(0.0);
    assert_eq!(at.phi, 330.0);
    assert!((at.r - 152.5).abs() < 1e-9, "r = {}", at.r);
    let [red, green, blue] = m.levels(0.0);
    assert_eq!(green, 255);
    assert_eq!(red, blue);
    assert_eq!(m.get_color(-5.0), m.get_color(0.0));

    // phi = 390: red and green on their plateaus, blue opposite
    assert_eq!(m.levels(5.0), [255, 255, 51]);
    assert_eq!(m.get_color(5.0), 0xffff33);

    assert_eq!(m.get_color(10.0), 0xff0000);
    assert_eq!(m.get_color(1000.0), 0xff0000);
    Ok(())
}

#[test]
fn negative_value_max_pins_every_reading_to_it() -> anyhow::Result<()> {
    let m = Archimedes::new(ArchimedesConfig {
        value_min: -10.0,
        value_max: -5.0,
        ..wind_config()
    })?;
    assert_eq!(m.spiral().clamp_value(0.0), -5.0);
    assert_eq!(m.spiral().clamp_value(-20.0), -5.0);
    assert_eq!(m.get_color(0.0), 0xff0000);
    assert_eq!(m.get_color(-20.0), 0xff0000);
    assert_eq!(m.get_color(f64::NAN), 0xff0000);
    Ok(())
}

#[test]
fn zero_value_floor_starts_on_inner_edge() -> anyhow::Result<()> {
    let m = Archimedes::new(ArchimedesConfig {
        value_min: 0.0,
        ..wind_config()
    })?;
    let at = m.position(0.0);
    assert_eq!(at.phi, 210.0);
    assert!(at.r.is_finite());
    assert!((at.r - 50.0).abs() < 1e-9, "r = {}", at.r);
    assert_eq!(m.get_color(0.0), 0xcdcdff);
    assert_eq!(m.get_color(0.0), m.get_color(-1.0));
    assert_eq!(m.get_color(0.0), m.get_color(f64::NAN));
    Ok(())
}

#[test]
fn spiral_and_channels_are_inspectable() -> anyhow::Result<()> {
    let m = make_mapper()?;
    let phi = m.spiral().phi_scale();
    assert!((phi.k - 9.6).abs() < 1e-12);
    assert!((phi.b - 162.0).abs() < 1e-9);
    let r = m.spiral().r_scale();
    assert!((r.apply(450.0) - 255.0).abs() < 1e-9);

    let at = m.position(5.0);
    assert_eq!(m.channel(ChannelHue::Red).hue, ChannelHue::Red);
    assert_eq!(m.channel(ChannelHue::Red).level(at), 205);
    assert_eq!(m.channel(ChannelHue::Green).level(at), 205);
    assert_eq!(m.channel(ChannelHue::Blue).level(at), 255);
    assert_eq!(m.channel(ChannelHue::Blue).brightness_max(), 255.0);
    Ok(())
}
