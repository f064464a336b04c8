// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Conversions between wide and long table layouts.
//!
//! [`pivot_longer`] collapses a set of columns into (name, value) rows;
//! [`pivot_wider`] spreads a (name, value) column pair back into one column
//! per distinct label. The two are inverses modulo fill values and
//! row/column ordering.

mod longer;
mod wider;

pub use longer::pivot_longer;
pub use wider::pivot_wider;
