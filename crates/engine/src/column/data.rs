// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reframe_type::{Date, Type, Value};
use serde::{Deserialize, Serialize};

/// Columnar storage for one column: values alongside a validity mask.
///
/// A cell whose validity entry is `false` is missing; `get` surfaces it as
/// [`Value::Undefined`]. `Undefined` is the special case of a column with no
/// defined values at all, which promotes to a typed container on the first
/// typed push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	// value, is_valid
	Bool(Vec<bool>, Vec<bool>),
	Float8(Vec<f64>, Vec<bool>),
	Utf8(Vec<String>, Vec<bool>),
	Date(Vec<Date>, Vec<bool>),

	// dictionary-encoded text labels drawn from a fixed level set
	Categorical {
		levels: Vec<String>,
		codes: Vec<usize>,
		valid: Vec<bool>,
	},

	// special case: all undefined
	Undefined(usize),
}

impl ColumnData {
	pub fn with_capacity(ty: Type, capacity: usize) -> Self {
		match ty {
			Type::Boolean => ColumnData::Bool(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Date => ColumnData::Date(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Categorical => ColumnData::Categorical {
				levels: Vec::new(),
				codes: Vec::with_capacity(capacity),
				valid: Vec::with_capacity(capacity),
			},
			Type::Undefined => ColumnData::Undefined(0),
		}
	}

	/// An empty container of the same type. Categorical columns keep their
	/// level set.
	pub fn empty_like(&self) -> Self {
		match self {
			ColumnData::Categorical {
				levels,
				..
			} => ColumnData::Categorical {
				levels: levels.clone(),
				codes: Vec::new(),
				valid: Vec::new(),
			},
			other => Self::with_capacity(other.get_type(), 0),
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_, _) => Type::Boolean,
			ColumnData::Float8(_, _) => Type::Float8,
			ColumnData::Utf8(_, _) => Type::Utf8,
			ColumnData::Date(_, _) => Type::Date,
			ColumnData::Categorical {
				..
			} => Type::Categorical,
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(_, b) => b.len(),
			ColumnData::Float8(_, b) => b.len(),
			ColumnData::Utf8(_, b) => b.len(),
			ColumnData::Date(_, b) => b.len(),
			ColumnData::Categorical {
				valid,
				..
			} => valid.len(),
			ColumnData::Undefined(n) => *n,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self {
			ColumnData::Bool(_, b)
			| ColumnData::Float8(_, b)
			| ColumnData::Utf8(_, b)
			| ColumnData::Date(_, b) => b[index],
			ColumnData::Categorical {
				valid,
				..
			} => valid[index],
			ColumnData::Undefined(_) => false,
		}
	}

	pub fn get(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(v, b) => {
				if b[index] {
					Value::Boolean(v[index])
				} else {
					Value::Undefined
				}
			}
			ColumnData::Float8(v, b) => {
				if b[index] {
					Value::float8(v[index])
				} else {
					Value::Undefined
				}
			}
			ColumnData::Utf8(v, b) => {
				if b[index] {
					Value::Utf8(v[index].clone())
				} else {
					Value::Undefined
				}
			}
			ColumnData::Date(v, b) => {
				if b[index] {
					Value::Date(v[index])
				} else {
					Value::Undefined
				}
			}
			ColumnData::Categorical {
				levels,
				codes,
				valid,
			} => {
				if valid[index] {
					Value::Utf8(levels[codes[index]].clone())
				} else {
					Value::Undefined
				}
			}
			ColumnData::Undefined(_) => Value::Undefined,
		}
	}

	pub fn as_string(&self, index: usize) -> String {
		self.get(index).to_string()
	}

	pub fn push(&mut self, value: Value) {
		// Promote an all-undefined container on the first typed push
		if let ColumnData::Undefined(n) = self {
			if !value.is_undefined() {
				let undefined = *n;
				let mut promoted = Self::with_capacity(value.get_type(), undefined + 1);
				for _ in 0..undefined {
					promoted.push(Value::Undefined);
				}
				promoted.push(value);
				*self = promoted;
				return;
			}
		}

		match (self, value) {
			(ColumnData::Bool(v, b), Value::Boolean(x)) => {
				v.push(x);
				b.push(true);
			}
			(ColumnData::Float8(v, b), Value::Float8(x)) => {
				v.push(x.value());
				b.push(true);
			}
			(ColumnData::Utf8(v, b), Value::Utf8(x)) => {
				v.push(x);
				b.push(true);
			}
			(ColumnData::Date(v, b), Value::Date(x)) => {
				v.push(x);
				b.push(true);
			}
			(
				ColumnData::Categorical {
					levels,
					codes,
					valid,
				},
				Value::Utf8(label),
			) => {
				let code = match levels.iter().position(|l| *l == label) {
					Some(code) => code,
					None => {
						levels.push(label);
						levels.len() - 1
					}
				};
				codes.push(code);
				valid.push(true);
			}
			(ColumnData::Bool(v, b), Value::Undefined) => {
				v.push(false);
				b.push(false);
			}
			(ColumnData::Float8(v, b), Value::Undefined) => {
				v.push(0.0);
				b.push(false);
			}
			(ColumnData::Utf8(v, b), Value::Undefined) => {
				v.push(String::new());
				b.push(false);
			}
			(ColumnData::Date(v, b), Value::Undefined) => {
				v.push(Date::default());
				b.push(false);
			}
			(
				ColumnData::Categorical {
					codes,
					valid,
					..
				},
				Value::Undefined,
			) => {
				codes.push(0);
				valid.push(false);
			}
			(ColumnData::Undefined(n), Value::Undefined) => *n += 1,
			(data, value) => {
				panic!("mismatched column type {} and value {}", data.get_type(), value)
			}
		}
	}

	/// A new container holding the rows named by `indices`, in that order.
	/// Indices may repeat or omit rows.
	pub fn reordered(&self, indices: &[usize]) -> ColumnData {
		match self {
			ColumnData::Bool(v, b) => ColumnData::Bool(
				indices.iter().map(|&i| v[i]).collect(),
				indices.iter().map(|&i| b[i]).collect(),
			),
			ColumnData::Float8(v, b) => ColumnData::Float8(
				indices.iter().map(|&i| v[i]).collect(),
				indices.iter().map(|&i| b[i]).collect(),
			),
			ColumnData::Utf8(v, b) => ColumnData::Utf8(
				indices.iter().map(|&i| v[i].clone()).collect(),
				indices.iter().map(|&i| b[i]).collect(),
			),
			ColumnData::Date(v, b) => ColumnData::Date(
				indices.iter().map(|&i| v[i]).collect(),
				indices.iter().map(|&i| b[i]).collect(),
			),
			ColumnData::Categorical {
				levels,
				codes,
				valid,
			} => ColumnData::Categorical {
				levels: levels.clone(),
				codes: indices.iter().map(|&i| codes[i]).collect(),
				valid: indices.iter().map(|&i| valid[i]).collect(),
			},
			ColumnData::Undefined(_) => ColumnData::Undefined(indices.len()),
		}
	}
}
