//! Pure calculations - no state, no I/O

pub mod emission;

pub use emission::{
    compute, EmissionCategory, EmissionError, EmissionLine, EmissionReport,
};
