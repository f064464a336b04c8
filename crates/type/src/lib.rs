// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! Scalar values, semantic types and the shared error type for the reframe
//! tabular engine.

pub use error::Error;
pub use value::{Date, OrderedF64, Type, Value};

pub mod error;
pub mod value;

pub type Result<T> = std::result::Result<T, Error>;
