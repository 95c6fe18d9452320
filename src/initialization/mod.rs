//! Resource initialization.
//!
//! Functions that set up the long-lived resources an audit run shares:
//! the logger and the DNS resolver.

mod logger;
mod resolver;

pub use logger::init_logger_with;
pub use resolver::init_resolver;
