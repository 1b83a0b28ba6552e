//! Sign recovery and fixed-point position conversion.
//!
//! All decoded positions are signed integers in 1/10000 minute, whatever their
//! on-air resolution. East longitude and north latitude are positive.

use serde::Serialize;
use std::fmt;

/// Latitude/longitude pair in 1/10000 minute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Position {
    pub latitude: i32,
    pub longitude: i32,
}

impl Position {
    pub fn new(latitude: i32, longitude: i32) -> Self {
        Self { latitude, longitude }
    }

    /// Build from raw 27-bit latitude and 28-bit longitude (1/10000 minute)
    pub fn from_raw(latitude: u32, longitude: u32) -> Self {
        let (latitude, longitude) = conv_pos(latitude, longitude);
        Self { latitude, longitude }
    }

    /// Build from raw 17-bit latitude and 18-bit longitude (1/10 minute)
    pub fn from_raw_tenths(latitude: u32, longitude: u32) -> Self {
        let (latitude, longitude) = conv_pos27(latitude, longitude);
        Self { latitude, longitude }
    }

    /// Build from raw 24-bit latitude and 25-bit longitude (1/1000 minute)
    pub fn from_raw_milli(latitude: u32, longitude: u32) -> Self {
        let (latitude, longitude) = conv_pos_milli(latitude, longitude);
        Self { latitude, longitude }
    }

    /// Decimal degrees as (latitude, longitude)
    pub fn to_degrees(&self) -> (f64, f64) {
        pos2ddd(self.latitude, self.longitude)
    }

    /// Degrees and minutes as ((lat_deg, lat_min), (lon_deg, lon_min))
    pub fn to_degrees_minutes(&self) -> ((i16, f64), (i16, f64)) {
        pos2dmm(self.latitude, self.longitude)
    }

    /// 91 degrees latitude / 181 degrees longitude mean "not available"
    pub fn is_available(&self) -> bool {
        self.latitude != 91 * 600_000 && self.longitude != 181 * 600_000
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (lat, lon) = self.to_degrees();
        write!(f, "{:.6}° N, {:.6}° E", lat, lon)
    }
}

/// Two's-complement sign recovery for a field whose top bit is `sign_bit`.
///
/// `sign_bit` must be the highest bit of the field width, e.g. 0x200 for a
/// 10-bit field.
pub fn conv_sign(sign_bit: u32, value: u32) -> i32 {
    if value & sign_bit != 0 {
        -(((sign_bit << 1) - value) as i32)
    } else {
        value as i32
    }
}

/// Sign recovery of a 27-bit latitude and 28-bit longitude.
pub fn conv_pos(latitude: u32, longitude: u32) -> (i32, i32) {
    (conv_sign(0x400_0000, latitude), conv_sign(0x800_0000, longitude))
}

/// Sign recovery of a 17-bit latitude and 18-bit longitude in 1/10 minute,
/// scaled x1000 to 1/10000 minute.
pub fn conv_pos27(latitude: u32, longitude: u32) -> (i32, i32) {
    (conv_sign(0x1_0000, latitude) * 1000, conv_sign(0x2_0000, longitude) * 1000)
}

/// Sign recovery of a 24-bit latitude and 25-bit longitude in 1/1000 minute,
/// scaled x10 to 1/10000 minute.
pub fn conv_pos_milli(latitude: u32, longitude: u32) -> (i32, i32) {
    (conv_sign(0x80_0000, latitude) * 10, conv_sign(0x100_0000, longitude) * 10)
}

fn to_ddd(value: i32) -> f64 {
    let whole = value / 600_000;
    whole as f64 + (value - whole * 600_000) as f64 / 600_000.0
}

fn to_dmm(value: i32) -> (i16, f64) {
    let whole = value / 600_000;
    (whole as i16, (value - whole * 600_000).abs() as f64 / 10_000.0)
}

/// Convert 1/10000 minute latitude and longitude to decimal degrees.
pub fn pos2ddd(latitude: i32, longitude: i32) -> (f64, f64) {
    (to_ddd(latitude), to_ddd(longitude))
}

/// Convert 1/10000 minute latitude and longitude to whole degrees and
/// non-negative decimal minutes.
pub fn pos2dmm(latitude: i32, longitude: i32) -> ((i16, f64), (i16, f64)) {
    (to_dmm(latitude), to_dmm(longitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_conv_sign() {
        assert_eq!(conv_sign(0x200, 0), 0);
        assert_eq!(conv_sign(0x200, 0x1FF), 511);
        assert_eq!(conv_sign(0x200, 0x3FF), -1);
        assert_eq!(conv_sign(0x200, 0x3FE), -2);
        // Raw value equal to the sign bit is the most negative value
        assert_eq!(conv_sign(0x200, 0x200), -512);
        assert_eq!(conv_sign(0x8000, 0x8000), -32768);
    }

    #[test]
    fn test_conv_pos() {
        // Trondheim
        assert_eq!(conv_pos(38049766, 6247336), (38049766, 6247336));
        // Lexington, MA
        assert_eq!(conv_pos(25482612, 225623348), (25482612, -42812108));
        // Tasmania
        assert_eq!(conv_pos(109017158, 87956591), (-25200570, 87956591));
        // Bolivia
        assert_eq!(conv_pos(123616751, 230768857), (-10600977, -37666599));
        assert_eq!(conv_pos(0x400_0000, 0x800_0000), (-0x400_0000, -0x800_0000));
    }

    #[test]
    fn test_conv_pos27() {
        assert_eq!(conv_pos27(38049, 6247), (38049000, 6247000));
        assert_eq!(conv_pos27(25482, 219331), (25482000, -42813000));
        assert_eq!(conv_pos27(105871, 87956), (-25201000, 87956000));
        assert_eq!(conv_pos27(120472, 224477), (-10600000, -37667000));
        assert_eq!(conv_pos27(0, 0), (0, 0));
    }

    #[test]
    fn test_conv_pos_milli() {
        assert_eq!(conv_pos_milli(30500, 1623000), (305000, 16230000));
        assert_eq!(conv_pos_milli(0xFFFFFF, 0x1FFFFFF), (-10, -10));
        assert_eq!(conv_pos_milli(0x800000, 0), (-83886080, 0));
    }

    #[test]
    fn test_pos2ddd() {
        let (lat, lon) = pos2ddd(38049766, 6247336);
        assert_abs_diff_eq!(lat, 63.416276666666668, epsilon = 1e-9);
        assert_abs_diff_eq!(lon, 10.412226666666667, epsilon = 1e-9);

        let (lat, lon) = pos2ddd(25482612, -42812108);
        assert_abs_diff_eq!(lat, 42.47102, epsilon = 1e-6);
        assert_abs_diff_eq!(lon, -71.35351333, epsilon = 1e-6);

        let (lat, lon) = pos2ddd(-25200570, 87956591);
        assert_abs_diff_eq!(lat, -42.00095, epsilon = 1e-6);
        assert_abs_diff_eq!(lon, 146.594318333, epsilon = 1e-6);

        let (lat, lon) = pos2ddd(-10600977, -37666599);
        assert_abs_diff_eq!(lat, -17.668295, epsilon = 1e-6);
        assert_abs_diff_eq!(lon, -62.777665, epsilon = 1e-6);

        assert_eq!(pos2ddd(0, 0), (0.0, 0.0));
    }

    #[test]
    fn test_pos2dmm() {
        let ((lat_d, lat_m), (lon_d, lon_m)) = pos2dmm(38049766, 6247336);
        assert_eq!((lat_d, lon_d), (63, 10));
        assert_abs_diff_eq!(lat_m, 24.9766, epsilon = 1e-9);
        assert_abs_diff_eq!(lon_m, 24.7336, epsilon = 1e-9);

        let ((lat_d, lat_m), (lon_d, lon_m)) = pos2dmm(25482612, -42812108);
        assert_eq!((lat_d, lon_d), (42, -71));
        assert_abs_diff_eq!(lat_m, 28.2612, epsilon = 1e-9);
        assert_abs_diff_eq!(lon_m, 21.2108, epsilon = 1e-9);

        let ((lat_d, lat_m), (lon_d, lon_m)) = pos2dmm(-25200570, 87956591);
        assert_eq!((lat_d, lon_d), (-42, 146));
        assert_abs_diff_eq!(lat_m, 0.057, epsilon = 1e-9);
        assert_abs_diff_eq!(lon_m, 35.6591, epsilon = 1e-9);

        let ((lat_d, lat_m), (lon_d, lon_m)) = pos2dmm(-10600977, -37666599);
        assert_eq!((lat_d, lon_d), (-17, -62));
        assert_abs_diff_eq!(lat_m, 40.0977, epsilon = 1e-9);
        assert_abs_diff_eq!(lon_m, 46.6599, epsilon = 1e-9);

        assert_eq!(pos2dmm(0, 0), ((0, 0.0), (0, 0.0)));
    }

    #[test]
    fn test_position_helpers() {
        let pos = Position::from_raw(38049766, 6247336);
        assert_eq!(pos, Position::new(38049766, 6247336));
        assert!(pos.is_available());
        assert!(!Position::new(91 * 600_000, 181 * 600_000).is_available());
        assert_eq!(Position::from_raw_tenths(105871, 87956), Position::new(-25201000, 87956000));
    }
}
