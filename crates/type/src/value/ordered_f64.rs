// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// An `f64` with a total order, usable as a hash-map key.
///
/// NaN is rejected at construction, so `Eq`, `Ord` and `Hash` hold for every
/// reachable value.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn zero() -> Self {
		Self(0.0)
	}

	pub fn value(&self) -> f64 {
		self.0
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = ();

	fn try_from(v: f64) -> Result<Self, Self::Error> {
		if v.is_nan() {
			Err(())
		} else {
			Ok(Self(v))
		}
	}
}

impl From<OrderedF64> for f64 {
	fn from(v: OrderedF64) -> f64 {
		v.0
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		// Total order is fine: NaN cannot be constructed
		self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		// Normalize -0.0 so it hashes like 0.0, matching Eq
		let v = if self.0 == 0.0 {
			0.0f64
		} else {
			self.0
		};
		v.to_bits().hash(state);
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}
