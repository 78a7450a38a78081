//! Value types exchanged with file services.

pub mod credentials;
pub mod file_info;

pub use credentials::Credentials;
pub use file_info::FileInfo;
