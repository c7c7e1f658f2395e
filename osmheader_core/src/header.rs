//! Metadata from the preamble of a map data file.

use crate::{GeoBox, Options};
use std::fmt;

/// Meta information from the header of a map data stream.
///
/// A header can contain any number of bounding boxes, although usually there
/// is one or none. Formats that only store a single box should use
/// [`joined_boxes`](Self::joined_boxes). Boxes are neither validated nor
/// deduplicated here, that is up to the reader or writer of a concrete format.
///
/// The `has_multiple_object_versions` flag tells whether the same object may
/// appear more than once, as in history and change files.
///
/// Everything else is kept as free-form string [`Options`], for example the
/// `generator` that produced the file.
///
/// # Examples
/// ```
/// use osmheader_core::{GeoBox, Header};
///
/// let mut header = Header::from([("generator", "toolX")]);
/// header
/// 	.add_box(GeoBox::from_coords(0.0, 0.0, 1.0, 1.0))
/// 	.add_box(GeoBox::from_coords(2.0, 2.0, 3.0, 3.0))
/// 	.set_has_multiple_object_versions(true);
///
/// assert_eq!(header.first_box(), GeoBox::from_coords(0.0, 0.0, 1.0, 1.0));
/// assert_eq!(header.joined_boxes(), GeoBox::from_coords(0.0, 0.0, 3.0, 3.0));
/// assert_eq!(header.get("generator"), Some("toolX"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
	boxes: Vec<GeoBox>,
	has_multiple_object_versions: bool,
	options: Options,
}

impl Header {
	pub fn new() -> Header {
		Header::default()
	}

	/// All bounding boxes in the order they were added.
	pub fn boxes(&self) -> &[GeoBox] {
		&self.boxes
	}

	pub fn boxes_mut(&mut self) -> &mut Vec<GeoBox> {
		&mut self.boxes
	}

	/// Replaces all bounding boxes.
	pub fn set_boxes(&mut self, boxes: Vec<GeoBox>) -> &mut Self {
		self.boxes = boxes;
		self
	}

	/// The first bounding box, or an invalid box if there is none.
	pub fn first_box(&self) -> GeoBox {
		self.boxes.first().copied().unwrap_or_default()
	}

	/// Joins all bounding boxes into one.
	///
	/// This is what most callers want, unless they handle multiple boxes
	/// themselves. Returns an invalid box if there are no valid boxes.
	pub fn joined_boxes(&self) -> GeoBox {
		let joined = self.boxes.iter().fold(GeoBox::new(), |acc, b| acc.extended(b));
		log::trace!("joined {} boxes into {joined}", self.boxes.len());
		joined
	}

	/// Appends a bounding box. Invalid boxes are accepted.
	pub fn add_box(&mut self, bbox: GeoBox) -> &mut Self {
		self.boxes.push(bbox);
		self
	}

	/// Can this stream contain multiple versions of the same object?
	pub fn has_multiple_object_versions(&self) -> bool {
		self.has_multiple_object_versions
	}

	pub fn set_has_multiple_object_versions(&mut self, value: bool) -> &mut Self {
		self.has_multiple_object_versions = value;
		self
	}

	pub fn options(&self) -> &Options {
		&self.options
	}

	pub fn options_mut(&mut self) -> &mut Options {
		&mut self.options
	}

	/// Shortcut for [`Options::get`].
	pub fn get(&self, key: &str) -> Option<&str> {
		self.options.get(key)
	}

	/// Shortcut for [`Options::set`].
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.options.set(key, value);
		self
	}

	#[must_use]
	pub fn with_box(mut self, bbox: GeoBox) -> Header {
		self.add_box(bbox);
		self
	}

	#[must_use]
	pub fn with_multiple_object_versions(mut self, value: bool) -> Header {
		self.set_has_multiple_object_versions(value);
		self
	}

	#[must_use]
	pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Header {
		self.set(key, value);
		self
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Header {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Header {
			options: Options::from_iter(iter),
			..Header::default()
		}
	}
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Header {
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl fmt::Display for Header {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "boxes: {}", self.boxes.len())?;
		for bbox in &self.boxes {
			writeln!(f, "  box: {bbox}")?;
		}
		writeln!(f, "joined box: {}", self.joined_boxes())?;
		let versions = if self.has_multiple_object_versions { "yes" } else { "no" };
		writeln!(f, "multiple object versions: {versions}")?;
		writeln!(f, "options:")?;
		for (key, value) in self.options.iter() {
			writeln!(f, "  {key}={value}")?;
		}
		Ok(())
	}
}
