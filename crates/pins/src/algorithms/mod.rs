pub mod preprocessing;
pub mod extraction;
pub mod isolation;

pub use preprocessing::*;
pub use extraction::*;
pub use isolation::*;
