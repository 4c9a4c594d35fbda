//! Great-circle distance between coordinates

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two latitude/longitude points
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        assert!(distance_km(49.2743, -123.1544, 49.2743, -123.1544).abs() < 1e-9);
    }

    #[test]
    fn test_known_distance() {
        // London to Paris is roughly 344 km
        let d = distance_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((d - 344.0).abs() < 5.0, "got {}", d);
    }

    #[test]
    fn test_symmetric() {
        let ab = distance_km(-8.78, 34.5, 12.77, -85.6);
        let ba = distance_km(12.77, -85.6, -8.78, 34.5);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_antipodes_is_half_circumference() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
