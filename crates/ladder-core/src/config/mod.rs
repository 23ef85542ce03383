pub mod defaults;

mod progression_config;

pub use progression_config::ProgressionConfig;
