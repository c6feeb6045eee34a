//! Per-operation parameter objects, grouped by API tag.

pub mod services;
