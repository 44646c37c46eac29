use crate::domain::model::{FieldShape, RecordShape};
use crate::domain::ports::Resource;
use crate::resources::traits;

pub const KIND: &str = "noop";

/// A resource that does nothing. Useful as a graph placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoopRes {
    pub name: String,
    pub comment: String,
}

impl NoopRes {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: String::new(),
        }
    }
}

impl Resource for NoopRes {
    fn kind(&self) -> &str {
        KIND
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn shape(&self) -> RecordShape {
        RecordShape::new("NoopRes")
            .embed(traits::base())
            .embed(traits::groupable())
            .embed(traits::refreshable())
            .field(FieldShape::of::<String>("Comment").tagged(r#"lang:"comment" yaml:"comment""#))
    }
}

pub fn factory() -> Box<dyn Resource> {
    Box::new(NoopRes::default())
}
