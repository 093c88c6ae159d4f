pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use crate::adapters::{LocalCatalogSource, StaticCatalogSource};
pub use crate::config::{OutputFormat, Settings};
pub use crate::core::catalog::{load_catalog, Catalog};
pub use crate::core::derived::Derived;
pub use crate::core::observable::{Readable, Subscription, Writable};
pub use crate::core::resolver::{resolve, ActiveCourse, CourseResolver};
pub use crate::core::selection::ActiveSelection;
pub use crate::core::view::CourseView;
pub use crate::domain::model::Course;
pub use crate::utils::error::{CourseMapError, Result};
