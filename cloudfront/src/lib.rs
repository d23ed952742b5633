pub mod artifact;
pub mod client;
pub mod patch;
pub mod patcher;
pub mod report;
pub mod resource;
