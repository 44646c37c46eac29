use crate::config::toml_config::BinderConfig;
use crate::core::type_mapper::{map_type_with_tag, DEFAULT_TAG_KEY};
use crate::domain::model::{FieldShape, NativeType, RecordShape};
use crate::domain::types::Type;
use crate::utils::error::{BindError, Result};
use std::collections::HashMap;

/// External property name to native field name.
pub type NameMapping = HashMap<String, String>;

/// External property name to domain type.
pub type TypeMapping = HashMap<String, Type>;

/// Builds name and type mappings for record shapes. Holds no state beyond
/// the tag key it recognises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binder {
    tag_key: String,
}

impl Default for Binder {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_KEY)
    }
}

impl Binder {
    pub fn new(tag_key: impl Into<String>) -> Self {
        Self {
            tag_key: tag_key.into(),
        }
    }

    pub fn from_config(config: &BinderConfig) -> Self {
        Self::new(config.tag_key())
    }

    pub fn tag_key(&self) -> &str {
        &self.tag_key
    }

    /// Fields with a non-empty tag, keyed by the tag value.
    pub fn bind_by_tag(&self, shape: &RecordShape) -> Result<NameMapping> {
        let mut mapping = NameMapping::new();

        for field in &shape.fields {
            if !field.is_exported() {
                continue;
            }
            let alias = match field.tag.lookup(&self.tag_key) {
                Some(alias) if !alias.is_empty() => alias,
                _ => continue,
            };
            if let Some(first) = mapping.get(&alias) {
                tracing::warn!(
                    "{}: tag `{}` used by both {} and {}",
                    shape.name,
                    alias,
                    first,
                    field.name
                );
                return Err(BindError::DuplicateBinding {
                    name: alias,
                    first: first.clone(),
                    second: field.name.clone(),
                });
            }
            mapping.insert(alias, field.name.clone());
        }

        tracing::debug!("{}: {} tagged field(s)", shape.name, mapping.len());
        Ok(mapping)
    }

    /// Every exported field that is not hidden by an empty tag, keyed by
    /// its ASCII lower-cased name. Embedded records count as fields named
    /// after their type.
    pub fn bind_by_lowercase_name(&self, shape: &RecordShape) -> Result<NameMapping> {
        let mapping = self
            .lowercase_fields(shape)?
            .into_iter()
            .map(|(key, field)| (key, field.name.clone()))
            .collect::<NameMapping>();

        tracing::debug!("{}: {} bindable field(s)", shape.name, mapping.len());
        Ok(mapping)
    }

    /// Lower-case binding composed with the type mapper. Capability markers
    /// carry no state and are left out. Any unsupported field fails the
    /// whole mapping.
    pub fn bind_types(&self, shape: &RecordShape) -> Result<TypeMapping> {
        let mut mapping = TypeMapping::new();

        for (key, field) in self.lowercase_fields(shape)? {
            if field.ty.is_trait_marker() {
                tracing::debug!("{}: skipping capability marker {}", shape.name, field.name);
                continue;
            }
            let ty = map_type_with_tag(&field.ty, &self.tag_key).map_err(|e| {
                tracing::debug!("{}: cannot map field {}: {}", shape.name, field.name, e);
                e.in_field(&field.name)
            })?;
            mapping.insert(key, ty);
        }

        Ok(mapping)
    }

    pub fn map_type(&self, native: &NativeType) -> Result<Type> {
        map_type_with_tag(native, &self.tag_key)
    }

    fn lowercase_fields<'s>(
        &self,
        shape: &'s RecordShape,
    ) -> Result<Vec<(String, &'s FieldShape)>> {
        let mut fields: Vec<(String, &FieldShape)> = Vec::with_capacity(shape.fields.len());

        for field in &shape.fields {
            if field.tag.lookup(&self.tag_key).is_some_and(|alias| alias.is_empty()) {
                continue;
            }
            if !field.is_exported() {
                continue;
            }

            let key = field.name.to_ascii_lowercase();
            if let Some((_, first)) = fields.iter().find(|(k, _)| *k == key) {
                tracing::warn!(
                    "{}: fields {} and {} both bind as `{}`",
                    shape.name,
                    first.name,
                    field.name,
                    key
                );
                return Err(BindError::DuplicateBinding {
                    name: key,
                    first: first.name.clone(),
                    second: field.name.clone(),
                });
            }
            fields.push((key, field));
        }

        Ok(fields)
    }
}

pub fn bind_by_tag(shape: &RecordShape) -> Result<NameMapping> {
    Binder::default().bind_by_tag(shape)
}

pub fn bind_by_lowercase_name(shape: &RecordShape) -> Result<NameMapping> {
    Binder::default().bind_by_lowercase_name(shape)
}

pub fn bind_types(shape: &RecordShape) -> Result<TypeMapping> {
    Binder::default().bind_types(shape)
}
