pub mod etl;
pub mod pipeline;

pub use crate::domain::mapping::FieldMapping;
pub use crate::domain::model::{OutputRow, Record, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
