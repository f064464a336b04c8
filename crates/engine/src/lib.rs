// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! In-memory tabular join and reshape engine.
//!
//! A [`Table`] is an ordered collection of named, validity-masked columns.
//! [`join`] matches rows between two tables on a [`KeyMapping`];
//! [`pivot_wider`] and [`pivot_longer`] convert a table between wide and
//! long layouts. Every operation is a pure function: inputs are never
//! mutated, results are fresh tables, and failures return a typed
//! [`Error`] without partial effects.

pub use column::{Column, ColumnData};
pub use join::{JoinKind, KeyMapping, join};
pub use pivot::{pivot_longer, pivot_wider};
pub use reframe_type::{Date, Error, OrderedF64, Type, Value};
pub use table::Table;
pub use transform::{SortDirection, SortKey};
pub use view::{GroupKey, GroupView};

pub mod column;
pub mod join;
pub mod pivot;
pub mod table;
pub mod transform;
pub mod view;

pub type Result<T> = std::result::Result<T, Error>;
