// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Relational joins between two tables on a key mapping.
//!
//! All six variants share one matching core: a hash multi-map from each
//! fully defined key tuple in the right table to the ordinals of its rows,
//! probed with the left table's rows in original order. Key tuples holding a
//! missing value never match anything, on either side.

use std::fmt::{Display, Formatter};

use reframe_type::Error;
use tracing::instrument;

use crate::table::Table;

mod anti;
mod common;
mod full;
mod inner;
mod left;
mod right;
mod semi;

use common::ResolvedKeys;

/// The join variant to compute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JoinKind {
	Left,
	Right,
	Inner,
	Full,
	Semi,
	Anti,
}

impl Display for JoinKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			JoinKind::Left => f.write_str("LEFT"),
			JoinKind::Right => f.write_str("RIGHT"),
			JoinKind::Inner => f.write_str("INNER"),
			JoinKind::Full => f.write_str("FULL"),
			JoinKind::Semi => f.write_str("SEMI"),
			JoinKind::Anti => f.write_str("ANTI"),
		}
	}
}

/// Ordered (left column, right column) pairs matching rows across two
/// tables. Pairs may rename-on-match; a composite mapping requires equality
/// on all pairs simultaneously.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMapping {
	pairs: Vec<(String, String)>,
}

impl KeyMapping {
	pub fn new<L, R>(pairs: impl IntoIterator<Item = (L, R)>) -> Self
	where
		L: Into<String>,
		R: Into<String>,
	{
		Self {
			pairs: pairs.into_iter().map(|(l, r)| (l.into(), r.into())).collect(),
		}
	}

	/// Convenience for keys carrying the same name on both sides.
	pub fn columns<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
		Self {
			pairs: names
				.into_iter()
				.map(|name| {
					let name = name.into();
					(name.clone(), name)
				})
				.collect(),
		}
	}

	pub fn reversed(&self) -> Self {
		Self {
			pairs: self.pairs.iter().map(|(l, r)| (r.clone(), l.clone())).collect(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	pub fn pairs(&self) -> &[(String, String)] {
		&self.pairs
	}
}

fn resolve_keys(left: &Table, right: &Table, keys: &KeyMapping) -> crate::Result<ResolvedKeys> {
	let mut resolved = ResolvedKeys {
		left: Vec::with_capacity(keys.pairs.len()),
		right: Vec::with_capacity(keys.pairs.len()),
	};

	for (left_name, right_name) in &keys.pairs {
		let left_idx = left.column_index(left_name).ok_or_else(|| Error::UnknownColumn {
			column: left_name.clone(),
		})?;
		let right_idx = right.column_index(right_name).ok_or_else(|| Error::UnknownColumn {
			column: right_name.clone(),
		})?;

		let left_type = left[left_idx].get_type();
		let right_type = right[right_idx].get_type();
		if !left_type.is_comparable_with(&right_type) {
			return Err(Error::IncompatibleKeyType {
				left: left_name.clone(),
				right: right_name.clone(),
				left_type,
				right_type,
			});
		}

		resolved.left.push(left_idx);
		resolved.right.push(right_idx);
	}

	Ok(resolved)
}

/// Join `left` and `right` on `keys`, producing a new table. Neither input
/// is mutated; a zero-row result is a valid table retaining its schema.
#[instrument(name = "join", level = "trace", skip(left, right, keys))]
pub fn join(kind: JoinKind, left: &Table, right: &Table, keys: &KeyMapping) -> crate::Result<Table> {
	if keys.is_empty() {
		return Err(Error::EmptyKeyMapping);
	}

	if let JoinKind::Right = kind {
		return right::right_join(left, right, keys);
	}

	let resolved = resolve_keys(left, right, keys)?;
	match kind {
		JoinKind::Left => left::left_join(left, right, &resolved),
		JoinKind::Inner => inner::inner_join(left, right, &resolved),
		JoinKind::Full => full::full_join(left, right, &resolved),
		JoinKind::Semi => semi::semi_join(left, right, &resolved),
		JoinKind::Anti => anti::anti_join(left, right, &resolved),
		JoinKind::Right => unreachable!(),
	}
}
