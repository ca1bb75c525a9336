//! Static lookup tables

pub mod cost_table;

pub use cost_table::{cost_table_rows, get_cost_estimate, lookup_cost};
