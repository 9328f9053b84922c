//! Test fixtures shared by the validators' unit tests.

pub mod fixtures;
