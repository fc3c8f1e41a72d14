// Session IDs

mod config;
mod id_generator;
mod issuer;
mod parse;

pub use config::*;
pub use id_generator::*;
pub use issuer::*;
pub use parse::*;
