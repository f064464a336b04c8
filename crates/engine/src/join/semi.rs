// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use super::common::{ResolvedKeys, build_match_map, row_key};
use crate::column::Column;
use crate::table::Table;

/// Left rows with at least one match, never duplicated, left columns only.
pub(crate) fn semi_join(left: &Table, right: &Table, keys: &ResolvedKeys) -> crate::Result<Table> {
	let matches = build_match_map(right, &keys.right);

	let kept: Vec<usize> = (0..left.row_count())
		.filter(|&row| {
			row_key(left, &keys.left, row).map_or(false, |key| matches.contains_key(&key))
		})
		.collect();

	filter_rows(left, &kept)
}

/// The left table reduced to the rows named by `indices`.
pub(crate) fn filter_rows(left: &Table, indices: &[usize]) -> crate::Result<Table> {
	Table::new(
		left.iter().map(|col| Column::new(col.name.clone(), col.data.reordered(indices))).collect(),
	)
}
