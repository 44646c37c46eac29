use crate::core::binder::{Binder, NameMapping, TypeMapping};
use crate::core::safety::check_safe;
use crate::domain::ports::Resource;
use crate::utils::error::{BindError, Result};
use std::collections::BTreeMap;

pub type ResourceFactory = fn() -> Box<dyn Resource>;

/// Resource kinds known to the caller. Every kind passes the structural
/// safety check before it is accepted.
pub struct Registry {
    binder: Binder,
    kinds: BTreeMap<String, ResourceFactory>,
}

impl Registry {
    pub fn new(binder: Binder) -> Self {
        Self {
            binder,
            kinds: BTreeMap::new(),
        }
    }

    pub fn binder(&self) -> &Binder {
        &self.binder
    }

    pub fn register(&mut self, kind: &str, factory: ResourceFactory) -> Result<()> {
        if self.kinds.contains_key(kind) {
            return Err(BindError::DuplicateKind {
                kind: kind.to_string(),
            });
        }

        let shape = factory().shape();
        if let Err(e) = check_safe(&shape) {
            tracing::warn!("refusing to register kind {}: {}", kind, e);
            return Err(e);
        }

        self.kinds.insert(kind.to_string(), factory);
        tracing::info!("registered resource kind {} ({})", kind, shape.name);
        Ok(())
    }

    pub fn new_resource(&self, kind: &str) -> Result<Box<dyn Resource>> {
        self.kinds
            .get(kind)
            .map(|factory| factory())
            .ok_or_else(|| BindError::UnknownKind {
                kind: kind.to_string(),
            })
    }

    /// Registered kinds in lexical order.
    pub fn kinds(&self) -> Vec<&str> {
        self.kinds.keys().map(String::as_str).collect()
    }

    pub fn lang_field_names(&self, kind: &str) -> Result<NameMapping> {
        let res = self.new_resource(kind)?;
        self.binder.bind_by_lowercase_name(&res.shape())
    }

    pub fn tag_field_names(&self, kind: &str) -> Result<NameMapping> {
        let res = self.new_resource(kind)?;
        self.binder.bind_by_tag(&res.shape())
    }

    pub fn lang_field_types(&self, kind: &str) -> Result<TypeMapping> {
        let res = self.new_resource(kind)?;
        self.binder.bind_types(&res.shape())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Binder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FieldShape, NativeType, RecordShape};

    struct Plain;

    impl Resource for Plain {
        fn kind(&self) -> &str {
            "plain"
        }

        fn name(&self) -> &str {
            "plain1"
        }

        fn shape(&self) -> RecordShape {
            RecordShape::new("PlainRes").field(FieldShape::new("Value", NativeType::Str))
        }
    }

    struct Unsafe;

    impl Resource for Unsafe {
        fn kind(&self) -> &str {
            "unsafe"
        }

        fn name(&self) -> &str {
            "unsafe1"
        }

        fn shape(&self) -> RecordShape {
            let inner = RecordShape::new("Inner").field(FieldShape::new("hidden", NativeType::Bool));
            RecordShape::new("UnsafeRes").field(FieldShape::new("Inner", inner.into_type()))
        }
    }

    fn plain() -> Box<dyn Resource> {
        Box::new(Plain)
    }

    fn unsafe_res() -> Box<dyn Resource> {
        Box::new(Unsafe)
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::default();
        registry.register("plain", plain).unwrap();

        assert_eq!(registry.kinds(), vec!["plain"]);
        assert_eq!(registry.new_resource("plain").unwrap().name(), "plain1");
        assert_eq!(
            registry.lang_field_names("plain").unwrap().get("value").map(String::as_str),
            Some("Value")
        );
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = Registry::default();
        registry.register("plain", plain).unwrap();
        assert!(matches!(
            registry.register("plain", plain),
            Err(BindError::DuplicateKind { .. })
        ));
    }

    #[test]
    fn test_register_rejects_unsafe_shapes() {
        let mut registry = Registry::default();
        match registry.register("unsafe", unsafe_res) {
            Err(BindError::UnexportedField { field, .. }) => assert_eq!(field, "hidden"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(registry.kinds().is_empty());
    }

    #[test]
    fn test_unknown_kind() {
        let registry = Registry::default();
        assert!(matches!(
            registry.lang_field_types("missing"),
            Err(BindError::UnknownKind { .. })
        ));
    }
}
