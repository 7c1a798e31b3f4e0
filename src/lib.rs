#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod assembly;
pub mod builder;
pub mod bundle;
pub mod config;
pub mod discovery;
pub mod models;
pub mod probe;
pub mod selection;

pub use builder::AssetBundler;
pub use bundle::{Concatenator, EmissionError, Minifier};
pub use config::BundlerConfig;
pub use models::BundleSources;
pub use selection::ExclusionSet;
