//! Globe appearance validation.

use crate::colors::validate_color;
use crate::schema::GlobeAppConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_globe(errors: &mut Vec<String>, config: &GlobeAppConfig) {
    let g = &config.globe;
    validate_range(errors, "globe.width", g.width, 1, 8192);
    validate_range(errors, "globe.height", g.height, 1, 8192);
    validate_range_f64(errors, "globe.device_pixel_ratio", g.device_pixel_ratio, 0.5, 4.0);
    validate_range_f64(
        errors,
        "globe.phi",
        g.phi,
        -std::f64::consts::TAU,
        std::f64::consts::TAU,
    );
    validate_range_f64(
        errors,
        "globe.theta",
        g.theta,
        -std::f64::consts::FRAC_PI_2,
        std::f64::consts::FRAC_PI_2,
    );
    validate_range_f64(errors, "globe.dark", g.dark, 0.0, 1.0);
    validate_range_f64(errors, "globe.diffuse", g.diffuse, 0.0, 10.0);
    validate_range(errors, "globe.map_samples", g.map_samples, 100, 100_000);
    validate_range_f64(errors, "globe.map_brightness", g.map_brightness, 0.0, 20.0);
    validate_range_f64(errors, "globe.rotation_step", g.rotation_step, 0.0001, 1.0);

    for (name, value) in [
        ("globe.base_color", &g.base_color),
        ("globe.marker_color", &g.marker_color),
        ("globe.glow_color", &g.glow_color),
    ] {
        if !validate_color(value) {
            errors.push(format!("{name} = '{value}' is not a valid color"));
        }
    }
}
