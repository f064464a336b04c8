// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use super::common::{ResolvedKeys, build_match_map, matched_row, mutating_schema, row_key, unmatched_left_row};
use crate::table::Table;

/// Every left row appears; k matches produce k contiguous output rows in
/// right-table row order, and unmatched left rows fill the right-side
/// columns with missing.
pub(crate) fn left_join(left: &Table, right: &Table, keys: &ResolvedKeys) -> crate::Result<Table> {
	let matches = build_match_map(right, &keys.right);
	let (mut builder, keep) = mutating_schema(left, right, keys);

	for left_row in 0..left.row_count() {
		let matched = row_key(left, &keys.left, left_row).and_then(|key| matches.get(&key));

		match matched {
			Some(right_rows) => {
				for &right_row in right_rows {
					builder.push_row(matched_row(left, right, &keep, left_row, right_row));
				}
			}
			None => builder.push_row(unmatched_left_row(left, keep.len(), left_row)),
		}
	}

	builder.finish()
}
