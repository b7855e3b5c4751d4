pub mod config;
pub mod core;

pub use core::encoder::{encode, encode_default, EncodeOptions};
pub use core::table::{mapping_table, MappingRow, MappingTable};
