pub mod config;
pub mod error;
pub mod logging;

pub mod fs_util;
pub mod json_prop;
pub mod net;
pub mod peer;
pub mod url_resolve;

pub use error::UtilError;
