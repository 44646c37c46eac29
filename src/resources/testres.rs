use crate::domain::model::{FieldShape, FloatKind, NativeType, RecordShape};
use crate::domain::ports::Resource;
use crate::resources::traits;
use std::collections::HashMap;

pub const KIND: &str = "test";

/// A resource declaring one field of every native kind the binder knows,
/// including the complex and interface kinds the type mapper rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestRes {
    pub name: String,
}

impl TestRes {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

fn mixed_struct() -> RecordShape {
    let nested = RecordShape::new("SomeStruct")
        .field(FieldShape::of::<bool>("SomeNestedBool"))
        .field(FieldShape::of::<String>("SomeNestedStr"));

    let embedded = RecordShape::new("SomeEmbeddedStruct")
        .field(FieldShape::of::<bool>("SomeEmbeddedBool"))
        .field(FieldShape::of::<String>("SomeEmbeddedStr"));

    RecordShape::new("MixedStruct")
        .field(FieldShape::of::<bool>("SomeBool"))
        .field(FieldShape::of::<String>("SomeStr"))
        .field(FieldShape::of::<isize>("SomeInt"))
        .field(FieldShape::of::<f64>("SomeFloat"))
        .field(FieldShape::new("SomeStruct", nested.into_type()))
        .field(FieldShape::new(
            "SomeEmbeddedStructPtr",
            NativeType::ptr(embedded.into_type()),
        ))
}

impl Resource for TestRes {
    fn kind(&self) -> &str {
        KIND
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn shape(&self) -> RecordShape {
        RecordShape::new("TestRes")
            .embed(traits::base())
            .embed(traits::groupable())
            .embed(traits::refreshable())
            .embed(traits::sendable())
            .embed(traits::recvable())
            .field(FieldShape::of::<bool>("Bool"))
            .field(FieldShape::of::<String>("Str"))
            .field(FieldShape::of::<isize>("Int"))
            .field(FieldShape::of::<i8>("Int8"))
            .field(FieldShape::of::<i16>("Int16"))
            .field(FieldShape::of::<i32>("Int32"))
            .field(FieldShape::of::<i64>("Int64"))
            .field(FieldShape::of::<usize>("Uint"))
            .field(FieldShape::of::<u8>("Uint8"))
            .field(FieldShape::of::<u16>("Uint16"))
            .field(FieldShape::of::<u32>("Uint32"))
            .field(FieldShape::of::<u64>("Uint64"))
            .field(FieldShape::of::<u8>("Byte"))
            .field(FieldShape::of::<char>("Rune"))
            .field(FieldShape::of::<f32>("Float32"))
            .field(FieldShape::of::<f64>("Float64"))
            .field(FieldShape::new("Complex64", NativeType::Complex(FloatKind::F32)))
            .field(FieldShape::new("Complex128", NativeType::Complex(FloatKind::F64)))
            .field(FieldShape::of::<Option<bool>>("BoolPtr"))
            .field(FieldShape::of::<Option<String>>("StringPtr"))
            .field(FieldShape::of::<Option<i64>>("Int64Ptr"))
            .field(FieldShape::of::<Option<i8>>("Int8Ptr"))
            .field(FieldShape::of::<Option<u8>>("Uint8Ptr"))
            .field(FieldShape::of::<Option<Box<Box<i8>>>>("Int8PtrPtrPtr"))
            .field(FieldShape::of::<Vec<String>>("SliceString"))
            .field(FieldShape::of::<HashMap<i64, f64>>("MapIntFloat"))
            .field(FieldShape::new("MixedStruct", mixed_struct().into_type()))
            .field(FieldShape::new("Interface", NativeType::Interface("Any".to_string())))
            .field(FieldShape::of::<String>("AnotherStr").tagged(r#"lang:"anotherstr" yaml:"anotherstr""#))
            .field(FieldShape::of::<bool>("ValidateBool").tagged(r#"lang:"validatebool" yaml:"validate_bool""#))
            .field(FieldShape::of::<String>("ValidateError").tagged(r#"lang:"validateerror" yaml:"validate_error""#))
            .field(FieldShape::of::<bool>("AlwaysGroup").tagged(r#"lang:"alwaysgroup" yaml:"always_group""#))
            .field(FieldShape::of::<bool>("CompareFail").tagged(r#"lang:"comparefail" yaml:"compare_fail""#))
            .field(FieldShape::of::<String>("SendValue").tagged(r#"lang:"sendvalue" yaml:"send_value""#))
            .field(FieldShape::of::<String>("Comment").tagged(r#"lang:"comment" yaml:"comment""#))
    }
}

pub fn factory() -> Box<dyn Resource> {
    Box::new(TestRes::default())
}
