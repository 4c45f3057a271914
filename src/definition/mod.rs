pub mod conversion;
pub mod raw;

pub use conversion::*;
pub use raw::*;
