//! Module containing the syntax tree of signatures and the grammar's character codes.
pub mod base_type;
pub mod markers;
pub mod signatures;
