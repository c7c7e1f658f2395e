use anyhow::{Context, Result, ensure};
use std::{fmt, str::FromStr};

/// Number of fixed-point steps per degree (7 decimal places).
pub const COORDINATE_PRECISION: i32 = 10_000_000;

const UNDEFINED_COORDINATE: i32 = i32::MAX;
const MAX_LON: i32 = 180 * COORDINATE_PRECISION;
const MAX_LAT: i32 = 90 * COORDINATE_PRECISION;

/// A geographic position stored as fixed-precision longitude (`x`) and latitude (`y`).
///
/// Coordinates are kept as `i32` with seven decimal places. A `Location` can be
/// *undefined* (the default), which is how an empty [`GeoBox`](crate::GeoBox)
/// represents its corners.
///
/// # Examples
/// ```
/// use osmheader_core::Location;
///
/// let location = Location::new(13.3888, 52.5170);
/// assert!(location.is_valid());
/// assert_eq!(location.x(), 133_888_000);
/// assert_eq!(location.to_string(), "(13.3888,52.517)");
///
/// assert!(!Location::undefined().is_defined());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
	x: i32,
	y: i32,
}

impl Location {
	/// Creates a location from longitude and latitude in degrees.
	///
	/// Values are rounded to the fixed precision. Out-of-range degrees are kept,
	/// such a location is defined but not valid. Degrees beyond the `i32` range
	/// saturate just short of the undefined sentinel. `NaN` and infinities give
	/// an undefined coordinate.
	pub fn new(lon: f64, lat: f64) -> Location {
		Location {
			x: to_fixed(lon),
			y: to_fixed(lat),
		}
	}

	/// Creates a location from raw fixed-precision values.
	pub fn from_fixed(x: i32, y: i32) -> Location {
		Location { x, y }
	}

	/// Returns the undefined location.
	pub fn undefined() -> Location {
		Location {
			x: UNDEFINED_COORDINATE,
			y: UNDEFINED_COORDINATE,
		}
	}

	pub fn x(&self) -> i32 {
		self.x
	}

	pub fn y(&self) -> i32 {
		self.y
	}

	/// Longitude in degrees, `None` if undefined.
	pub fn lon(&self) -> Option<f64> {
		self.is_defined().then(|| to_degrees(self.x))
	}

	/// Latitude in degrees, `None` if undefined.
	pub fn lat(&self) -> Option<f64> {
		self.is_defined().then(|| to_degrees(self.y))
	}

	/// Both coordinates hold a value other than the undefined sentinel.
	pub fn is_defined(&self) -> bool {
		self.x != UNDEFINED_COORDINATE && self.y != UNDEFINED_COORDINATE
	}

	/// Defined and inside `-180..=180` longitude and `-90..=90` latitude.
	pub fn is_valid(&self) -> bool {
		self.is_defined() && (-MAX_LON..=MAX_LON).contains(&self.x) && (-MAX_LAT..=MAX_LAT).contains(&self.y)
	}

	pub(crate) fn min(self, other: Location) -> Location {
		Location {
			x: self.x.min(other.x),
			y: self.y.min(other.y),
		}
	}

	pub(crate) fn max(self, other: Location) -> Location {
		Location {
			x: self.x.max(other.x),
			y: self.y.max(other.y),
		}
	}
}

impl Default for Location {
	fn default() -> Self {
		Location::undefined()
	}
}

fn to_fixed(degrees: f64) -> i32 {
	if !degrees.is_finite() {
		return UNDEFINED_COORDINATE;
	}
	(degrees * f64::from(COORDINATE_PRECISION))
		.round()
		.clamp(f64::from(i32::MIN), f64::from(UNDEFINED_COORDINATE - 1)) as i32
}

pub(crate) fn to_degrees(fixed: i32) -> f64 {
	f64::from(fixed) / f64::from(COORDINATE_PRECISION)
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self.lon(), self.lat()) {
			(Some(lon), Some(lat)) => write!(f, "({lon},{lat})"),
			_ => write!(f, "(undefined,undefined)"),
		}
	}
}

impl fmt::Debug for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Location{self}")
	}
}

impl FromStr for Location {
	type Err = anyhow::Error;

	/// Parses `"lon,lat"` in degrees.
	fn from_str(input: &str) -> Result<Self> {
		let parts: Vec<&str> = input.split(',').map(str::trim).collect();
		ensure!(
			parts.len() == 2,
			"location '{input}' must have 2 comma separated parts (lon,lat)"
		);
		let lon: f64 = parts[0]
			.parse()
			.with_context(|| format!("invalid longitude '{}'", parts[0]))?;
		let lat: f64 = parts[1]
			.parse()
			.with_context(|| format!("invalid latitude '{}'", parts[1]))?;
		Ok(Location::new(lon, lat))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn default_is_undefined() {
		let location = Location::default();
		assert!(!location.is_defined());
		assert!(!location.is_valid());
		assert_eq!(location.lon(), None);
		assert_eq!(location.lat(), None);
		assert_eq!(location, Location::undefined());
	}

	#[test]
	fn new_rounds_to_fixed_precision() {
		let location = Location::new(1.234_567_89, -0.000_000_04);
		assert_eq!(location.x(), 12_345_679);
		assert_eq!(location.y(), 0);
	}

	#[test]
	fn degrees_round_trip_through_fixed() {
		let location = Location::from_fixed(-123_456_789, 512_345_678);
		assert_eq!(location.lon(), Some(-12.345_678_9));
		assert_eq!(location.lat(), Some(51.234_567_8));
	}

	#[rstest]
	#[case(0.0, 0.0, true)]
	#[case(180.0, 90.0, true)]
	#[case(-180.0, -90.0, true)]
	#[case(180.000_000_1, 0.0, false)]
	#[case(0.0, -90.5, false)]
	fn validity(#[case] lon: f64, #[case] lat: f64, #[case] valid: bool) {
		let location = Location::new(lon, lat);
		assert!(location.is_defined());
		assert_eq!(location.is_valid(), valid);
	}

	#[rstest]
	#[case(215.0, 0.0)]
	#[case(-215.0, 0.0)]
	#[case(0.0, 1e12)]
	#[case(-1e12, -1e12)]
	fn far_out_of_range_stays_defined(#[case] lon: f64, #[case] lat: f64) {
		let location = Location::new(lon, lat);
		assert!(location.is_defined());
		assert!(!location.is_valid());
	}

	#[test]
	fn saturates_below_sentinel() {
		let location = Location::new(215.0, -215.0);
		assert_eq!(location.x(), i32::MAX - 1);
		assert_eq!(location.y(), i32::MIN);
	}

	#[rstest]
	#[case(f64::NAN, 0.0)]
	#[case(0.0, f64::NAN)]
	#[case(f64::INFINITY, 0.0)]
	#[case(0.0, f64::NEG_INFINITY)]
	fn non_finite_is_undefined(#[case] lon: f64, #[case] lat: f64) {
		let location = Location::new(lon, lat);
		assert!(!location.is_defined());
		assert!(!location.is_valid());
	}

	#[rstest]
	#[case("NaN,NaN")]
	#[case("inf,0")]
	#[case("0,-inf")]
	fn parse_non_finite_is_undefined(#[case] input: &str) -> Result<()> {
		assert!(!input.parse::<Location>()?.is_defined());
		Ok(())
	}

	#[test]
	fn half_undefined_is_not_defined() {
		let location = Location::from_fixed(0, i32::MAX);
		assert!(!location.is_defined());
	}

	#[rstest]
	#[case("13.3888,52.517", 133_888_000, 525_170_000)]
	#[case(" -1.5 , 2 ", -15_000_000, 20_000_000)]
	fn parse(#[case] input: &str, #[case] x: i32, #[case] y: i32) -> Result<()> {
		let location: Location = input.parse()?;
		assert_eq!((location.x(), location.y()), (x, y));
		Ok(())
	}

	#[rstest]
	#[case("1")]
	#[case("1,2,3")]
	#[case("east,2")]
	#[case("1,north")]
	fn parse_errors(#[case] input: &str) {
		assert!(input.parse::<Location>().is_err());
	}

	#[test]
	fn display() {
		assert_eq!(Location::new(-10.0, 5.25).to_string(), "(-10,5.25)");
		assert_eq!(Location::undefined().to_string(), "(undefined,undefined)");
		assert_eq!(format!("{:?}", Location::new(1.0, 2.0)), "Location(1,2)");
	}
}
