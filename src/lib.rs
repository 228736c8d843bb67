pub mod common;
pub mod configs;
pub mod download;
pub mod pipeline;
pub mod sources;
pub mod throttle;
