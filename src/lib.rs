// Session ID generation for U2F authentication servers

pub mod log;
pub mod session;
pub mod utils;
