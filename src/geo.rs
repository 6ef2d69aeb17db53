use crate::errors::AppError;
use crate::mcc;
use crate::model::{Area, Selection};
use log::info;
use regex::Regex;
use std::sync::LazyLock;

/// Mean Earth radius (IUGG), km.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

static LOCATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-R]{2}[0-9]{2}(?:[A-X]{2}(?:[0-9]{2})?)?$").expect("static regex"));

/// Great-circle distance in km on a spherical Earth.
///
/// Uses the atan2 form of the central angle, which stays accurate for both
/// very short and near-antipodal distances.
pub fn great_circle_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lon2) = (b.0.to_radians(), b.1.to_radians());
    let dlon = lon2 - lon1;
    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lat2, cos_lat2) = lat2.sin_cos();
    let (sin_dlon, cos_dlon) = dlon.sin_cos();

    let y = ((cos_lat2 * sin_dlon).powi(2) + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlon).powi(2)).sqrt();
    let x = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_dlon;
    EARTH_RADIUS_KM * y.atan2(x)
}

/// Center of a Maidenhead locator square (4, 6 or 8 characters) as (lat, lon).
pub fn locator_center(locator: &str) -> Result<(f64, f64), AppError> {
    let loc = locator.trim().to_ascii_uppercase();
    if !LOCATOR_RE.is_match(&loc) {
        return Err(AppError::InvalidLocator(locator.to_string()));
    }
    let b = loc.as_bytes();

    // field 20x10 deg, square 2x1 deg, subsquare 1/12 x 1/24 deg, extended 1/120 x 1/240 deg
    let mut lon = -180.0 + f64::from(b[0] - b'A') * 20.0 + f64::from(b[2] - b'0') * 2.0;
    let mut lat = -90.0 + f64::from(b[1] - b'A') * 10.0 + f64::from(b[3] - b'0');
    let (mut lon_step, mut lat_step) = (2.0, 1.0);

    if b.len() >= 6 {
        lon_step /= 24.0;
        lat_step /= 24.0;
        lon += f64::from(b[4] - b'A') * lon_step;
        lat += f64::from(b[5] - b'A') * lat_step;
    }
    if b.len() == 8 {
        lon_step /= 10.0;
        lat_step /= 10.0;
        lon += f64::from(b[6] - b'0') * lon_step;
        lat += f64::from(b[7] - b'0') * lat_step;
    }
    Ok((lat + lat_step / 2.0, lon + lon_step / 2.0))
}

/// Turns the user's selection into the coordinate circle or identifier prefixes the filter tests.
pub fn resolve(selection: &Selection) -> Result<Area, AppError> {
    match selection {
        Selection::Mcc(code) => {
            let code = code.trim();
            if !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()) {
                return Ok(Area::Prefixes(vec![code.to_string()]));
            }
            let entry = mcc::lookup(code).ok_or_else(|| AppError::UnknownCountryCode(code.to_string()))?;
            info!("Selecting {} repeaters (MCC {})", entry.name, entry.mcc.join(", "));
            Ok(Area::Prefixes(entry.mcc.iter().map(|p| p.to_string()).collect()))
        }
        Selection::Locator { locator, radius_km } => {
            let (lat, lon) = locator_center(locator)?;
            Ok(Area::Radius { lat, lon, radius_km: *radius_km })
        }
        Selection::Coordinates { lat, lon, radius_km } => Ok(Area::Radius { lat: *lat, lon: *lon, radius_km: *radius_km }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn one_degree_of_equator() {
        let d = great_circle_km((0.0, 0.0), (0.0, 1.0));
        assert_abs_diff_eq!(d, EARTH_RADIUS_KM * std::f64::consts::PI / 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(d, 111.195, epsilon = 1e-3);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let warsaw = (52.2297, 21.0122);
        let helsinki = (60.1699, 24.9384);
        assert_abs_diff_eq!(great_circle_km(warsaw, helsinki), great_circle_km(helsinki, warsaw), epsilon = 1e-9);
        assert_abs_diff_eq!(great_circle_km(warsaw, warsaw), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(great_circle_km(warsaw, helsinki), 914.0, epsilon = 5.0);
    }

    #[test]
    fn four_char_locator_center() {
        let (lat, lon) = locator_center("JO01").unwrap();
        assert_abs_diff_eq!(lat, 51.5, epsilon = 1e-9);
        assert_abs_diff_eq!(lon, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn six_char_locator_center_is_case_insensitive() {
        let (lat, lon) = locator_center("fn31pr").unwrap();
        assert_abs_diff_eq!(lat, 41.0 + 17.0 / 24.0 + 1.0 / 48.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lon, -74.0 + 15.0 / 12.0 + 1.0 / 24.0, epsilon = 1e-9);
    }

    #[test]
    fn eight_char_locator_refines_six() {
        let (lat6, lon6) = locator_center("KO26BX").unwrap();
        let (lat8, lon8) = locator_center("KO26BX55").unwrap();
        // 55 is the middle of the 10x10 grid, half a step off the subsquare center
        assert_abs_diff_eq!(lat8, lat6 + 1.0 / 480.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lon8, lon6 + 1.0 / 240.0, epsilon = 1e-9);
    }

    #[test]
    fn malformed_locators_are_rejected() {
        for bad in ["", "JO", "JO0", "ZZ00", "JO01A", "JO01AY", "JO01AA5", "JO01AA55XX"] {
            assert!(matches!(locator_center(bad), Err(AppError::InvalidLocator(_))), "{bad}");
        }
    }

    #[test]
    fn numeric_mcc_is_a_single_prefix() {
        let area = resolve(&Selection::Mcc("260".into())).unwrap();
        assert_eq!(area, Area::Prefixes(vec!["260".into()]));
    }

    #[test]
    fn country_code_resolves_to_mcc_prefixes() {
        assert_eq!(resolve(&Selection::Mcc("pl".into())).unwrap(), Area::Prefixes(vec!["260".into()]));
        match resolve(&Selection::Mcc("GB".into())).unwrap() {
            Area::Prefixes(p) => assert_eq!(p, vec!["234".to_string(), "235".to_string()]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_country_fails() {
        assert!(matches!(resolve(&Selection::Mcc("XX".into())), Err(AppError::UnknownCountryCode(_))));
    }

    #[test]
    fn locator_selection_keeps_radius() {
        let area = resolve(&Selection::Locator { locator: "JO01".into(), radius_km: 50.0 }).unwrap();
        assert_eq!(area, Area::Radius { lat: 51.5, lon: 1.0, radius_km: 50.0 });
    }
}
