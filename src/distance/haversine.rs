use crate::domain::types::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two coordinates.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lon.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lon.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    // Rounding can push h a hair outside [0, 1] for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Moves a coordinate `km` kilometres due north (negative goes south).
///
/// Along a meridian the haversine distance is exactly the arc length, so
/// `distance_km(c, offset_north_km(c, d))` is `d` up to float rounding.
pub fn offset_north_km(origin: Coordinate, km: f64) -> Coordinate {
    let dlat = (km / EARTH_RADIUS_KM).to_degrees();
    Coordinate::new(origin.lat + dlat, origin.lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARCELONA: Coordinate = Coordinate {
        lat: 41.3851,
        lon: 2.1734,
    };

    #[test]
    fn same_point_is_zero() {
        assert_eq!(distance_km(BARCELONA, BARCELONA), 0.0);
    }

    #[test]
    fn symmetric() {
        let other = Coordinate::new(41.4036, 2.1744);
        let ab = distance_km(BARCELONA, other);
        let ba = distance_km(other, BARCELONA);
        assert!((ab - ba).abs() < 1e-12);
        assert!(ab > 0.0);
    }

    #[test]
    fn known_city_pair() {
        // Barcelona to Madrid is roughly 505 km as the crow flies.
        let madrid = Coordinate::new(40.4168, -3.7038);
        let d = distance_km(BARCELONA, madrid);
        assert!((d - 505.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn offset_north_round_trips_distance() {
        for km in [0.25, 1.0, 5.0, 6.0, 42.0] {
            let moved = offset_north_km(BARCELONA, km);
            assert!((distance_km(BARCELONA, moved) - km).abs() < 1e-9);
        }
    }

    #[test]
    fn grows_with_separation() {
        let near = offset_north_km(BARCELONA, 1.0);
        let far = offset_north_km(BARCELONA, 2.0);
        assert!(distance_km(BARCELONA, near) < distance_km(BARCELONA, far));
    }
}
