//! Shows that incrementing a pointer moves it by the size of its pointee.

pub mod error;
pub mod pointer;
pub mod report;

pub use error::{Result, StrideError};
pub use pointer::PointerStep;
pub use report::{run, StrideReport};
