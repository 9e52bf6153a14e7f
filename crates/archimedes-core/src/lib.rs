pub mod channel;
pub mod color;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod mapper;
pub mod scale;
pub mod spiral;

pub use channel::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use diagnostics::*;
pub use error::*;
pub use mapper::*;
pub use scale::*;
pub use spiral::*;
