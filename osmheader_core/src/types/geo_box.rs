use super::{Location, location::to_degrees};
use anyhow::{Context, Result, ensure};
use std::{fmt, str::FromStr};

/// An axis-aligned geographic bounding box spanned by a `bottom_left` and a
/// `top_right` [`Location`].
///
/// A box is *valid* when both corners are valid locations. The default box has
/// undefined corners and is invalid. It is the neutral element of
/// [`extend`](Self::extend): extending an invalid box yields the other box,
/// extending by an invalid box changes nothing.
///
/// # Examples
///
/// ## Joining two boxes
/// ```
/// use osmheader_core::GeoBox;
///
/// let mut bbox = GeoBox::from_coords(-10.0, -5.0, 10.0, 5.0);
/// bbox.extend(&GeoBox::from_coords(-12.0, -3.0, 8.0, 6.0));
/// assert_eq!(bbox, GeoBox::from_coords(-12.0, -5.0, 10.0, 6.0));
/// ```
///
/// ## Starting from an empty box
/// ```
/// use osmheader_core::GeoBox;
///
/// let mut bbox = GeoBox::new();
/// assert!(!bbox.is_valid());
/// bbox.extend(&GeoBox::from_coords(1.0, 2.0, 3.0, 4.0));
/// assert_eq!(bbox.to_string(), "(1,2,3,4)");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GeoBox {
	bottom_left: Location,
	top_right: Location,
}

impl GeoBox {
	/// Creates an empty, invalid box.
	pub fn new() -> GeoBox {
		GeoBox::default()
	}

	/// Creates a box from its two corners. The corners are stored as given.
	pub fn from_locations(bottom_left: Location, top_right: Location) -> GeoBox {
		GeoBox { bottom_left, top_right }
	}

	/// Creates a box from `west, south, east, north` in degrees.
	///
	/// Nothing is validated or reordered, a box with swapped or out-of-range
	/// coordinates is representable.
	pub fn from_coords(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> GeoBox {
		GeoBox {
			bottom_left: Location::new(min_lon, min_lat),
			top_right: Location::new(max_lon, max_lat),
		}
	}

	pub fn bottom_left(&self) -> Location {
		self.bottom_left
	}

	pub fn top_right(&self) -> Location {
		self.top_right
	}

	/// Both corners are valid locations.
	pub fn is_valid(&self) -> bool {
		self.bottom_left.is_valid() && self.top_right.is_valid()
	}

	/// Expands the box in place so that it covers the area of `other` as well.
	///
	/// - `other` invalid: no change
	/// - `self` invalid: takes the extent of `other`
	/// - otherwise: component-wise minimum of the bottom left corners and
	///   maximum of the top right corners
	///
	/// The result always has `bottom_left <= top_right` in both components, even
	/// if one of the inputs was stored with swapped corners.
	///
	/// # Examples
	/// ```
	/// use osmheader_core::GeoBox;
	///
	/// let mut bbox = GeoBox::from_coords(0.0, 0.0, 1.0, 1.0);
	/// bbox.extend(&GeoBox::new());
	/// assert_eq!(bbox, GeoBox::from_coords(0.0, 0.0, 1.0, 1.0));
	/// ```
	pub fn extend(&mut self, other: &GeoBox) -> &mut Self {
		if !other.is_valid() {
			return self;
		}
		let (low, high) = other.ordered_corners();
		if self.is_valid() {
			let (self_low, self_high) = self.ordered_corners();
			self.bottom_left = self_low.min(low);
			self.top_right = self_high.max(high);
		} else {
			self.bottom_left = low;
			self.top_right = high;
		}
		self
	}

	/// Expands the box in place so that it contains `location`.
	///
	/// Invalid locations are ignored. An invalid box becomes the degenerate box
	/// around `location`.
	pub fn extend_location(&mut self, location: Location) -> &mut Self {
		if !location.is_valid() {
			return self;
		}
		if self.is_valid() {
			self.bottom_left = self.bottom_left.min(location);
			self.top_right = self.top_right.max(location);
		} else {
			self.bottom_left = location;
			self.top_right = location;
		}
		self
	}

	fn ordered_corners(&self) -> (Location, Location) {
		(
			self.bottom_left.min(self.top_right),
			self.bottom_left.max(self.top_right),
		)
	}

	/// Non-mutating version of [`extend`](Self::extend).
	#[must_use]
	pub fn extended(mut self, other: &GeoBox) -> GeoBox {
		self.extend(other);
		self
	}

	/// Whether `location` lies inside the box, borders included.
	/// Always `false` if the box or the location is invalid.
	pub fn contains(&self, location: Location) -> bool {
		self.is_valid()
			&& location.is_valid()
			&& (self.bottom_left.x()..=self.top_right.x()).contains(&location.x())
			&& (self.bottom_left.y()..=self.top_right.y()).contains(&location.y())
	}

	/// Area in square degrees, `0.0` for invalid boxes.
	pub fn size(&self) -> f64 {
		if !self.is_valid() {
			return 0.0;
		}
		let width = to_degrees(self.top_right.x()) - to_degrees(self.bottom_left.x());
		let height = to_degrees(self.top_right.y()) - to_degrees(self.bottom_left.y());
		width * height
	}

	/// `[west, south, east, north]` in degrees, `None` for invalid boxes.
	pub fn as_array(&self) -> Option<[f64; 4]> {
		if !self.is_valid() {
			return None;
		}
		Some([
			to_degrees(self.bottom_left.x()),
			to_degrees(self.bottom_left.y()),
			to_degrees(self.top_right.x()),
			to_degrees(self.top_right.y()),
		])
	}
}

impl fmt::Display for GeoBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.as_array() {
			Some([x0, y0, x1, y1]) => write!(f, "({x0},{y0},{x1},{y1})"),
			None => write!(f, "(invalid)"),
		}
	}
}

impl fmt::Debug for GeoBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// "GeoBox(-10, -5, 10, 5)" or "GeoBox(invalid)"
		match self.as_array() {
			Some([x0, y0, x1, y1]) => write!(f, "GeoBox({x0}, {y0}, {x1}, {y1})"),
			None => write!(f, "GeoBox(invalid)"),
		}
	}
}

impl From<[f64; 4]> for GeoBox {
	fn from(input: [f64; 4]) -> Self {
		GeoBox::from_coords(input[0], input[1], input[2], input[3])
	}
}

impl TryFrom<Vec<f64>> for GeoBox {
	type Error = anyhow::Error;

	/// Builds a box from exactly four values `[west, south, east, north]`.
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"GeoBox must have 4 elements (min_lon, min_lat, max_lon, max_lat), got {}",
			input.len()
		);
		Ok(GeoBox::from_coords(input[0], input[1], input[2], input[3]))
	}
}

impl FromStr for GeoBox {
	type Err = anyhow::Error;

	/// Parses `"min_lon,min_lat,max_lon,max_lat"`. Only the syntax is checked,
	/// the resulting box may be invalid.
	///
	/// ```
	/// use osmheader_core::GeoBox;
	///
	/// let bbox: GeoBox = "-10,-5,10,5".parse().unwrap();
	/// assert_eq!(bbox, GeoBox::from_coords(-10.0, -5.0, 10.0, 5.0));
	/// ```
	fn from_str(input: &str) -> Result<Self> {
		let values = input
			.split(',')
			.map(|part| {
				let part = part.trim();
				part.parse::<f64>().with_context(|| format!("invalid coordinate '{part}'"))
			})
			.collect::<Result<Vec<f64>>>()
			.with_context(|| format!("Failed to parse '{input}' as GeoBox"))?;
		GeoBox::try_from(values).with_context(|| format!("Failed to parse '{input}' as GeoBox"))
	}
}
