pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::FileCatalogSource;
pub use config::{ServerSettings, TomlConfig};
pub use crate::core::{Catalog, CatalogSource, ConfigProvider, Course, CourseDetail, YearGroup};
pub use server::{build_router, serve, serve_listener};
pub use utils::error::{CatalogError, Result};
