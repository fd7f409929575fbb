use crate::constants::EARTH_RADIUS_M;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(GeoPoint { lat, lng })
    }

    /// Calculate distance between two points using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M / 1000.0 * c
    }

    pub fn distance_m(&self, other: &GeoPoint) -> f64 {
        self.distance_to(other) * 1000.0
    }

    /// Round coordinates to specified decimal places for caching
    pub fn round(&self, decimal_places: u32) -> Self {
        let multiplier = 10_f64.powi(decimal_places as i32);
        GeoPoint {
            lat: (self.lat * multiplier).round() / multiplier,
            lng: (self.lng * multiplier).round() / multiplier,
        }
    }

    /// Move by a local east/north offset in meters.
    ///
    /// The offset is read as a distance and a bearing from this point and
    /// followed along the great circle, so it stays on the globe anywhere,
    /// poles included. Longitude wraps into [-180, 180].
    pub fn offset_by_meters(&self, east_m: f64, north_m: f64) -> GeoPoint {
        let distance = east_m.hypot(north_m) / EARTH_RADIUS_M;
        if distance == 0.0 || !distance.is_finite() {
            return *self;
        }
        let bearing = east_m.atan2(north_m);

        let (sin_lat, cos_lat) = self.lat.to_radians().sin_cos();
        let (sin_d, cos_d) = distance.sin_cos();

        let sin_lat2 = (sin_lat * cos_d + cos_lat * sin_d * bearing.cos()).clamp(-1.0, 1.0);
        // Written without dividing by cos(lat) so a start on a pole stays well defined.
        let delta_lng = (bearing.sin() * sin_d)
            .atan2(cos_lat * cos_d - sin_lat * sin_d * bearing.cos());

        let lat = sin_lat2.asin().to_degrees().clamp(-90.0, 90.0);
        let lng = (self.lng + delta_lng.to_degrees() + 180.0).rem_euclid(360.0) - 180.0;

        GeoPoint { lat, lng }
    }
}
