// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The semantic type of a column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// Column holds no defined values (yet)
	Undefined,
	/// A boolean: true or false.
	Boolean,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text
	Utf8,
	/// A date value (year, month, day)
	Date,
	/// Text labels drawn from a fixed set of levels
	Categorical,
}

impl Type {
	/// Whether key columns of these types can be matched against each
	/// other. Identical types always compare; an all-undefined column
	/// compares with anything; categorical and text columns compare with
	/// each other since both carry text labels. Everything else errors
	/// rather than coercing.
	pub fn is_comparable_with(&self, other: &Type) -> bool {
		if self == other {
			return true;
		}
		if matches!(self, Type::Undefined) || matches!(other, Type::Undefined) {
			return true;
		}
		matches!(
			(self, other),
			(Type::Utf8, Type::Categorical) | (Type::Categorical, Type::Utf8)
		)
	}

	pub fn is_text(&self) -> bool {
		matches!(self, Type::Utf8 | Type::Categorical)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("UNDEFINED"),
			Type::Boolean => f.write_str("BOOLEAN"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Utf8 => f.write_str("UTF8"),
			Type::Date => f.write_str("DATE"),
			Type::Categorical => f.write_str("CATEGORICAL"),
		}
	}
}
