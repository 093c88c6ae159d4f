pub mod catalog;
pub mod derived;
pub mod observable;
pub mod resolver;
pub mod selection;
pub mod view;

pub use crate::domain::model::Course;
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
