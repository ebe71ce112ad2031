//! Upload parsing for external measurement files

pub mod cmm;

pub use cmm::{parse, parse_dfq, CmmParseError};
