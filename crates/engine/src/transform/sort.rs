// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::cmp::Ordering;

use reframe_type::Error;
use tracing::instrument;

use crate::column::{Column, ColumnData};
use crate::table::Table;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortDirection {
	Asc,
	Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
	pub column: String,
	pub direction: SortDirection,
}

impl SortKey {
	pub fn asc(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Asc,
		}
	}

	pub fn desc(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Desc,
		}
	}
}

impl Table {
	/// A new table with rows ordered by the given keys. The sort is
	/// stable, so ties keep their original relative order; missing values
	/// sort after defined ones on an ascending key.
	#[instrument(name = "sort", level = "trace", skip_all)]
	pub fn sorted(&self, keys: &[SortKey]) -> crate::Result<Table> {
		let mut indices: Vec<usize> = (0..self.row_count()).collect();

		let key_refs: Vec<(&ColumnData, SortDirection)> = keys
			.iter()
			.map(|key| {
				let col = self.column(&key.column).ok_or_else(|| Error::UnknownColumn {
					column: key.column.clone(),
				})?;
				Ok::<_, Error>((&col.data, key.direction))
			})
			.collect::<Result<_, _>>()?;

		indices.sort_by(|&a, &b| {
			for (col, direction) in &key_refs {
				let ord = col.get(a).compare(&col.get(b));
				let ord = match direction {
					SortDirection::Asc => ord,
					SortDirection::Desc => ord.reverse(),
				};
				if ord != Ordering::Equal {
					return ord;
				}
			}
			Ordering::Equal
		});

		Table::new(
			self.columns
				.iter()
				.map(|col| Column::new(col.name.clone(), col.data.reordered(&indices)))
				.collect(),
		)
	}
}
