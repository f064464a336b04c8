// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reframe_type::{Date, Type};
use serde::{Deserialize, Serialize};

mod data;

pub use data::ColumnData;

/// A named column of uniform semantic type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn bool(name: impl Into<String>, values: impl IntoIterator<Item = bool>) -> Self {
		let values: Vec<bool> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		Self::new(name, ColumnData::Bool(values, valid))
	}

	pub fn bool_with_validity(
		name: impl Into<String>,
		values: impl IntoIterator<Item = bool>,
		valid: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(name, ColumnData::Bool(values.into_iter().collect(), valid.into_iter().collect()))
	}

	pub fn float8(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
		let values: Vec<f64> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		Self::new(name, ColumnData::Float8(values, valid))
	}

	pub fn float8_with_validity(
		name: impl Into<String>,
		values: impl IntoIterator<Item = f64>,
		valid: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(name, ColumnData::Float8(values.into_iter().collect(), valid.into_iter().collect()))
	}

	pub fn utf8<'a>(name: impl Into<String>, values: impl IntoIterator<Item = &'a str>) -> Self {
		let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
		let valid = vec![true; values.len()];
		Self::new(name, ColumnData::Utf8(values, valid))
	}

	pub fn utf8_with_validity<'a>(
		name: impl Into<String>,
		values: impl IntoIterator<Item = &'a str>,
		valid: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(
			name,
			ColumnData::Utf8(
				values.into_iter().map(|v| v.to_string()).collect(),
				valid.into_iter().collect(),
			),
		)
	}

	pub fn date(name: impl Into<String>, values: impl IntoIterator<Item = Date>) -> Self {
		let values: Vec<Date> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		Self::new(name, ColumnData::Date(values, valid))
	}

	/// A categorical column. Labels must be drawn from `levels`; labels
	/// outside the level set extend it in observation order.
	pub fn categorical<'a>(
		name: impl Into<String>,
		levels: impl IntoIterator<Item = &'a str>,
		labels: impl IntoIterator<Item = &'a str>,
	) -> Self {
		let mut data = ColumnData::Categorical {
			levels: levels.into_iter().map(|l| l.to_string()).collect(),
			codes: Vec::new(),
			valid: Vec::new(),
		};
		for label in labels {
			data.push(reframe_type::Value::utf8(label));
		}
		Self::new(name, data)
	}

	pub fn undefined(name: impl Into<String>, len: usize) -> Self {
		Self::new(name, ColumnData::Undefined(len))
	}
}
