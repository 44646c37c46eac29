use crate::domain::model::{NativeType, RecordShape};
use crate::utils::error::{BindError, Result};

/// Checks that no exported field of `shape` reaches a struct holding a
/// private field. Shapes that fail must not be duplicated structurally, so
/// registration refuses them.
pub fn check_safe(shape: &RecordShape) -> Result<()> {
    for field in &shape.fields {
        if field.ty.is_trait_marker() {
            continue;
        }
        // top-level private fields are never duplicated
        if !field.is_exported() {
            continue;
        }
        struct_check(&field.ty)?;
    }

    Ok(())
}

fn struct_check(ty: &NativeType) -> Result<()> {
    match ty {
        NativeType::Array(elem, _) | NativeType::Slice(elem) => struct_check(elem),
        NativeType::Map(key, value) => {
            struct_check(key)?;
            struct_check(value)
        }
        NativeType::Ptr(inner) => struct_check(inner),
        NativeType::Struct(nested) => {
            for field in &nested.fields {
                if !field.is_exported() {
                    return Err(BindError::UnexportedField {
                        field: field.name.clone(),
                        record: nested.name.clone(),
                    });
                }
                struct_check(&field.ty)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FieldShape;

    fn leaky() -> RecordShape {
        RecordShape::new("Leaky")
            .field(FieldShape::new("Open", NativeType::Bool))
            .field(FieldShape::new("closed", NativeType::Str))
    }

    #[test]
    fn test_flat_record_is_safe() {
        let shape = RecordShape::new("Flat")
            .field(FieldShape::new("Name", NativeType::Str))
            .field(FieldShape::new("private", NativeType::Bool));
        assert!(check_safe(&shape).is_ok());
    }

    #[test]
    fn test_private_top_level_struct_is_ignored() {
        let shape = RecordShape::new("Outer").field(FieldShape::new("inner", leaky().into_type()));
        assert!(check_safe(&shape).is_ok());
    }

    #[test]
    fn test_private_nested_field_through_containers() {
        let wrapped = [
            leaky().into_type(),
            NativeType::ptr(NativeType::ptr(leaky().into_type())),
            NativeType::slice(leaky().into_type()),
            NativeType::array(leaky().into_type(), 2),
            NativeType::map(leaky().into_type(), NativeType::Bool),
            NativeType::map(NativeType::Str, leaky().into_type()),
        ];

        for ty in wrapped {
            let shape = RecordShape::new("Outer").field(FieldShape::new("Field", ty.clone()));
            match check_safe(&shape) {
                Err(BindError::UnexportedField { field, record }) => {
                    assert_eq!(field, "closed", "via {}", ty);
                    assert_eq!(record, "Leaky");
                }
                other => panic!("expected failure via {}, got {:?}", ty, other),
            }
        }
    }

    #[test]
    fn test_trait_markers_are_skipped() {
        let mut marker = RecordShape::trait_marker("Base");
        marker.fields.push(FieldShape::new("state", NativeType::Bool));

        let shape = RecordShape::new("Res").embed(marker);
        assert!(check_safe(&shape).is_ok());
    }
}
