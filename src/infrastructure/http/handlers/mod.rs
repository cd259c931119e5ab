//! HTTP Handlers

mod catalog;
mod ping;
mod profile;
mod tool;
mod voice;

pub use catalog::*;
pub use ping::*;
pub use profile::*;
pub use tool::*;
pub use voice::*;
