pub mod manifest;
pub mod png;
pub mod source;

pub use manifest::*;
pub use png::*;
pub use source::*;
