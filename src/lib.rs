pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;

pub use analysis::*;
pub use config::*;
pub use engine::*;
pub use error::Error;
pub use geometry::*;

pub type Result<T> = std::result::Result<T, Error>;
