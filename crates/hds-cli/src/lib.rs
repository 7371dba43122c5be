//! Library components of the `hds` command line tool.

pub mod http;
pub mod logging;
pub mod pipeline;
