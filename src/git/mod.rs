//! Version-control operations, run through the system `git` binary.

pub mod gateway;
pub mod status;

pub use gateway::{GitCli, RepositoryGateway};
pub use status::parse_porcelain_paths;
