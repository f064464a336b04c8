// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use super::KeyMapping;
use super::left::left_join;
use crate::table::Table;

/// The mirror of a left join: identical to joining with the tables swapped
/// and the key mapping reversed, column-for-column. Callers wanting the
/// left table's columns first can compose with `Table::select`.
pub(crate) fn right_join(left: &Table, right: &Table, keys: &KeyMapping) -> crate::Result<Table> {
	let mirrored = keys.reversed();
	let resolved = super::resolve_keys(right, left, &mirrored)?;
	left_join(right, left, &resolved)
}
