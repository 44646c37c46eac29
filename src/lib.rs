pub mod config;
pub mod core;
pub mod domain;
pub mod resources;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{BindMode, CliConfig};

pub use crate::config::toml_config::BinderConfig;
pub use crate::core::binder::{
    bind_by_lowercase_name, bind_by_tag, bind_types, Binder, NameMapping, TypeMapping,
};
pub use crate::core::registry::Registry;
pub use crate::core::safety::check_safe;
pub use crate::core::sort::sort_by_canonical_form;
pub use crate::core::type_mapper::map_type;
pub use crate::domain::model::{FieldShape, FloatKind, IntKind, NativeType, RecordShape, StructTag};
pub use crate::domain::ports::{Resource, Shaped};
pub use crate::domain::types::Type;
pub use crate::utils::error::{BindError, Result};
