pub mod binder;
pub mod registry;
pub mod safety;
pub mod sort;
pub mod type_mapper;

pub use crate::domain::model::{FieldShape, NativeType, RecordShape, StructTag};
pub use crate::domain::ports::{Resource, Shaped};
pub use crate::domain::types::Type;
pub use crate::utils::error::Result;
