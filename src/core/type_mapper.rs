use crate::domain::model::{NativeType, RecordShape};
use crate::domain::types::Type;
use crate::utils::error::{BindError, Result};

pub const DEFAULT_TAG_KEY: &str = "lang";

/// Maps a native type onto the domain type vocabulary, using the default
/// tag key to decide which nested struct fields are hidden.
pub fn map_type(native: &NativeType) -> Result<Type> {
    map_type_with_tag(native, DEFAULT_TAG_KEY)
}

pub fn map_type_with_tag(native: &NativeType, tag_key: &str) -> Result<Type> {
    match native {
        NativeType::Bool => Ok(Type::Bool),
        NativeType::Str => Ok(Type::Str),
        // widths and signedness are erased
        NativeType::Int(_) | NativeType::Char => Ok(Type::Int),
        NativeType::Float(_) => Ok(Type::Float),
        NativeType::Ptr(inner) => map_type_with_tag(inner, tag_key),
        NativeType::Array(elem, _) | NativeType::Slice(elem) => {
            Ok(Type::list(map_type_with_tag(elem, tag_key)?))
        }
        NativeType::Map(key, value) => {
            let key = map_type_with_tag(key, tag_key)?;
            let value = map_type_with_tag(value, tag_key)?;
            Ok(Type::map(key, value))
        }
        NativeType::Struct(shape) => map_struct(shape, tag_key),
        NativeType::Complex(_) | NativeType::Interface(_) | NativeType::Opaque(_) => {
            Err(BindError::UnsupportedType {
                field: String::new(),
                native: native.to_string(),
            })
        }
    }
}

/// Members are the exported, non-hidden fields, named by their lower-cased
/// field name. Tag values do not rename struct members.
fn map_struct(shape: &RecordShape, tag_key: &str) -> Result<Type> {
    let mut members: Vec<(String, Type)> = Vec::with_capacity(shape.fields.len());
    let mut sources: Vec<&str> = Vec::with_capacity(shape.fields.len());

    for field in &shape.fields {
        if !field.is_exported() || field.ty.is_trait_marker() {
            continue;
        }
        if field.tag.lookup(tag_key).is_some_and(|alias| alias.is_empty()) {
            continue;
        }

        let member = field.name.to_ascii_lowercase();
        if let Some(pos) = members.iter().position(|(name, _)| *name == member) {
            return Err(BindError::DuplicateBinding {
                name: member,
                first: sources[pos].to_string(),
                second: field.name.clone(),
            });
        }

        let ty = map_type_with_tag(&field.ty, tag_key).map_err(|e| e.in_field(&field.name))?;
        members.push((member, ty));
        sources.push(&field.name);
    }

    Ok(Type::Struct(members))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FieldShape, FloatKind, IntKind};

    #[test]
    fn test_primitives() {
        assert_eq!(map_type(&NativeType::Bool).unwrap(), Type::Bool);
        assert_eq!(map_type(&NativeType::Str).unwrap(), Type::Str);
        assert_eq!(map_type(&NativeType::Char).unwrap(), Type::Int);
        assert_eq!(
            map_type(&NativeType::Float(FloatKind::F32)).unwrap(),
            Type::Float
        );
    }

    #[test]
    fn test_every_integer_kind_is_int() {
        let kinds = [
            IntKind::I8,
            IntKind::I16,
            IntKind::I32,
            IntKind::I64,
            IntKind::Isize,
            IntKind::U8,
            IntKind::U16,
            IntKind::U32,
            IntKind::U64,
            IntKind::Usize,
        ];
        for kind in kinds {
            assert_eq!(map_type(&NativeType::Int(kind)).unwrap(), Type::Int);
        }
    }

    #[test]
    fn test_array_maps_like_slice() {
        let arr = NativeType::array(NativeType::Bool, 3);
        assert_eq!(map_type(&arr).unwrap(), Type::list(Type::Bool));
    }

    #[test]
    fn test_map_fails_when_value_unsupported() {
        let ty = NativeType::map(
            NativeType::Str,
            NativeType::Interface("Any".to_string()),
        );
        match map_type(&ty) {
            Err(BindError::UnsupportedType { native, .. }) => assert_eq!(native, "dyn Any"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_struct_member_rules() {
        let shape = RecordShape::new("Inner")
            .field(FieldShape::new("Visible", NativeType::Bool).tagged(r#"lang:"renamed""#))
            .field(FieldShape::new("Hidden", NativeType::Str).tagged(r#"lang:"""#))
            .field(FieldShape::new("private", NativeType::Str))
            .embed(RecordShape::trait_marker("Base"));

        let ty = map_type(&shape.into_type()).unwrap();
        assert_eq!(ty, Type::Struct(vec![("visible".to_string(), Type::Bool)]));
    }

    #[test]
    fn test_struct_member_collision() {
        let shape = RecordShape::new("Inner")
            .field(FieldShape::new("DoubleWord", NativeType::Bool))
            .field(FieldShape::new("Doubleword", NativeType::Str));

        match map_type(&shape.into_type()) {
            Err(BindError::DuplicateBinding { name, first, second }) => {
                assert_eq!(name, "doubleword");
                assert_eq!(first, "DoubleWord");
                assert_eq!(second, "Doubleword");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_nested_unsupported_reports_path() {
        let inner = RecordShape::new("Inner")
            .field(FieldShape::new("Value", NativeType::Complex(FloatKind::F64)));
        let outer = RecordShape::new("Outer")
            .field(FieldShape::new("Inner", NativeType::ptr(inner.into_type())));

        match map_type(&outer.into_type()) {
            Err(BindError::UnsupportedType { field, native }) => {
                assert_eq!(field, "Inner.Value");
                assert_eq!(native, "Complex<f64>");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_custom_tag_key_hides_nested_fields() {
        let shape = RecordShape::new("Inner")
            .field(FieldShape::new("A", NativeType::Bool).tagged(r#"cfg:"""#))
            .field(FieldShape::new("B", NativeType::Bool).tagged(r#"lang:"""#));

        let ty = map_type_with_tag(&shape.into_type(), "cfg").unwrap();
        assert_eq!(ty, Type::Struct(vec![("b".to_string(), Type::Bool)]));
    }
}
