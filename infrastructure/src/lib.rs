mod logging;

pub mod endpoint;

pub use logging::*;
