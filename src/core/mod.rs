pub mod catalog;
pub mod collation;
pub mod query;

pub use crate::domain::model::{Catalog, Course, CourseDetail, Level, YearGroup};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
