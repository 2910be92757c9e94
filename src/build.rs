mod builder;
mod content;
mod document;
pub mod markdown;
mod paths;
pub mod pipeline;
pub mod render;

pub use builder::Builder;
pub use paths::base_path_from_config;
