use crate::domain::model::{FloatKind, IntKind, NativeType, RecordShape};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// Rust types that can describe themselves as a `NativeType`.
pub trait Shaped {
    fn native_type() -> NativeType;
}

/// A resource exposes its declared shape and a canonical string form.
pub trait Resource {
    fn kind(&self) -> &str;

    fn name(&self) -> &str;

    fn shape(&self) -> RecordShape;

    fn canonical_form(&self) -> String {
        format!("{}[{}]", self.kind(), self.name())
    }
}

macro_rules! impl_resource_for_handle {
    ($($handle:ident),*) => {
        $(
            impl<T: Resource + ?Sized> Resource for $handle<T> {
                fn kind(&self) -> &str {
                    (**self).kind()
                }

                fn name(&self) -> &str {
                    (**self).name()
                }

                fn shape(&self) -> RecordShape {
                    (**self).shape()
                }

                fn canonical_form(&self) -> String {
                    (**self).canonical_form()
                }
            }
        )*
    };
}

impl_resource_for_handle!(Box, Rc, Arc);

impl<T: Resource + ?Sized> Resource for &T {
    fn kind(&self) -> &str {
        (**self).kind()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn shape(&self) -> RecordShape {
        (**self).shape()
    }

    fn canonical_form(&self) -> String {
        (**self).canonical_form()
    }
}

macro_rules! impl_shaped {
    ($($ty:ty => $native:expr),* $(,)?) => {
        $(
            impl Shaped for $ty {
                fn native_type() -> NativeType {
                    $native
                }
            }
        )*
    };
}

impl_shaped! {
    bool => NativeType::Bool,
    String => NativeType::Str,
    i8 => NativeType::Int(IntKind::I8),
    i16 => NativeType::Int(IntKind::I16),
    i32 => NativeType::Int(IntKind::I32),
    i64 => NativeType::Int(IntKind::I64),
    isize => NativeType::Int(IntKind::Isize),
    u8 => NativeType::Int(IntKind::U8),
    u16 => NativeType::Int(IntKind::U16),
    u32 => NativeType::Int(IntKind::U32),
    u64 => NativeType::Int(IntKind::U64),
    usize => NativeType::Int(IntKind::Usize),
    char => NativeType::Char,
    f32 => NativeType::Float(FloatKind::F32),
    f64 => NativeType::Float(FloatKind::F64),
}

impl<T: Shaped> Shaped for Box<T> {
    fn native_type() -> NativeType {
        NativeType::ptr(T::native_type())
    }
}

// Optional values are nullable indirection.
impl<T: Shaped> Shaped for Option<T> {
    fn native_type() -> NativeType {
        NativeType::ptr(T::native_type())
    }
}

impl<T: Shaped> Shaped for Vec<T> {
    fn native_type() -> NativeType {
        NativeType::slice(T::native_type())
    }
}

impl<T: Shaped, const N: usize> Shaped for [T; N] {
    fn native_type() -> NativeType {
        NativeType::array(T::native_type(), N)
    }
}

impl<K: Shaped, V: Shaped, S> Shaped for HashMap<K, V, S> {
    fn native_type() -> NativeType {
        NativeType::map(K::native_type(), V::native_type())
    }
}

impl<K: Shaped, V: Shaped> Shaped for BTreeMap<K, V> {
    fn native_type() -> NativeType {
        NativeType::map(K::native_type(), V::native_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name: String,
    }

    impl Resource for Probe {
        fn kind(&self) -> &str {
            "probe"
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn shape(&self) -> RecordShape {
            RecordShape::new("Probe")
        }
    }

    #[test]
    fn test_shaped_containers() {
        assert_eq!(
            <Option<Box<i8>>>::native_type(),
            NativeType::ptr(NativeType::ptr(NativeType::Int(IntKind::I8)))
        );
        assert_eq!(
            <HashMap<i64, f64>>::native_type(),
            NativeType::map(
                NativeType::Int(IntKind::I64),
                NativeType::Float(FloatKind::F64)
            )
        );
        assert_eq!(
            <[u8; 4]>::native_type(),
            NativeType::array(NativeType::Int(IntKind::U8), 4)
        );
    }

    #[test]
    fn test_canonical_form_through_handles() {
        let probe = Probe {
            name: "one".to_string(),
        };
        assert_eq!(probe.canonical_form(), "probe[one]");

        let boxed: Box<dyn Resource> = Box::new(Probe {
            name: "two".to_string(),
        });
        assert_eq!(boxed.canonical_form(), "probe[two]");

        let shared: Arc<dyn Resource> = Arc::new(probe);
        assert_eq!((&shared).canonical_form(), "probe[one]");
    }
}
