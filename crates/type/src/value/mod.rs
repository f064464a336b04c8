// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

mod date;
mod ordered_f64;
mod r#type;

pub use date::Date;
pub use ordered_f64::OrderedF64;
pub use r#type::Type;

/// A single cell value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A date value (year, month, day)
	Date(Date),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into())
			.map(Value::Float8)
			.unwrap_or(Value::Undefined)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn date(v: Date) -> Self {
		Value::Date(v)
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float8(_) => Type::Float8,
			Value::Utf8(_) => Type::Utf8,
			Value::Date(_) => Type::Date,
		}
	}

	/// Total order over values of one semantic type, with `Undefined`
	/// sorting after every defined value. Values of different types order
	/// by their type tag; mixed-type comparison only arises for columns
	/// that were promoted from all-undefined.
	pub fn compare(&self, other: &Value) -> Ordering {
		use Value::*;

		match (self, other) {
			(Undefined, Undefined) => Ordering::Equal,
			(Undefined, _) => Ordering::Greater,
			(_, Undefined) => Ordering::Less,
			(Boolean(l), Boolean(r)) => l.cmp(r),
			(Float8(l), Float8(r)) => l.cmp(r),
			(Utf8(l), Utf8(r)) => l.cmp(r),
			(Date(l), Date(r)) => l.cmp(r),
			(l, r) => l.get_type().to_string().cmp(&r.get_type().to_string()),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Utf8(v) => Display::fmt(v, f),
			Value::Date(v) => Display::fmt(v, f),
		}
	}
}
