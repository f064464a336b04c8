// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

/// A calendar date (year, month, day) without time information.
///
/// Internally stored as days since the Unix epoch (1970-01-01); negative
/// values represent earlier dates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
	days_since_epoch: i32,
}

impl Date {
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	// Howard Hinnant's civil-calendar algorithm
	fn ymd_to_days(year: i32, month: u32, day: u32) -> Option<i32> {
		if month < 1 || month > 12 || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		let (y, m) = if month <= 2 {
			(year - 1, month as i32 + 9)
		} else {
			(year, month as i32 - 3)
		};

		let era = if y >= 0 {
			y
		} else {
			y - 399
		} / 400;
		let yoe = y - era * 400;
		let doy = (153 * m + 2) / 5 + day as i32 - 1;
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

		Some(era * 146097 + doe - 719468)
	}

	fn days_to_ymd(days: i32) -> (i32, u32, u32) {
		let days_since_ce = days + 719468;

		let era = if days_since_ce >= 0 {
			days_since_ce
		} else {
			days_since_ce - 146096
		} / 146097;
		let doe = days_since_ce - era * 146097;
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
		let mp = (5 * doy + 2) / 153;
		let d = doy - (153 * mp + 2) / 5 + 1;
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		};
		let year = if m <= 2 {
			y + 1
		} else {
			y
		};

		(year, m as u32, d as u32)
	}

	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		Self::ymd_to_days(year, month, day).map(|days_since_epoch| Self {
			days_since_epoch,
		})
	}

	pub fn year(&self) -> i32 {
		Self::days_to_ymd(self.days_since_epoch).0
	}

	pub fn month(&self) -> u32 {
		Self::days_to_ymd(self.days_since_epoch).1
	}

	pub fn day(&self) -> u32 {
		Self::days_to_ymd(self.days_since_epoch).2
	}

	pub fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}
}

impl Default for Date {
	fn default() -> Self {
		// 1970-01-01
		Self {
			days_since_epoch: 0,
		}
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = Self::days_to_ymd(self.days_since_epoch);
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)
		}
	}
}

impl Serialize for Date {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
	type Value = Date;

	fn expecting(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		formatter.write_str("a date in ISO 8601 format (YYYY-MM-DD)")
	}

	fn visit_str<E>(self, value: &str) -> Result<Date, E>
	where
		E: de::Error,
	{
		let (negative, rest) = match value.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, value),
		};

		let mut parts = rest.splitn(3, '-');
		let year: i32 = parts
			.next()
			.and_then(|p| p.parse().ok())
			.ok_or_else(|| E::custom(format!("invalid date: {}", value)))?;
		let month: u32 = parts
			.next()
			.and_then(|p| p.parse().ok())
			.ok_or_else(|| E::custom(format!("invalid date: {}", value)))?;
		let day: u32 = parts
			.next()
			.and_then(|p| p.parse().ok())
			.ok_or_else(|| E::custom(format!("invalid date: {}", value)))?;

		let year = if negative {
			-year
		} else {
			year
		};

		Date::new(year, month, day).ok_or_else(|| E::custom(format!("invalid date: {}", value)))
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D>(deserializer: D) -> Result<Date, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DateVisitor)
	}
}
