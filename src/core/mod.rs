pub mod encoder;
pub mod jamo;
pub mod symbols;
pub mod table;
pub mod unicode;
