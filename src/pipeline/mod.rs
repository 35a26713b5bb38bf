//! Pipeline module - decoding, splitting, and header-keyed records

pub mod decode;
pub mod error;
pub mod loader;
pub mod record;

pub use decode::*;
pub use error::{ConvertError, Result};
pub use loader::*;
pub use record::*;
