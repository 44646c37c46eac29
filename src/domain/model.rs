use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    F32,
    F64,
}

/// The declared type of a record field, as seen by the binder.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeType {
    Bool,
    Str,
    Int(IntKind),
    /// Character code point.
    Char,
    Float(FloatKind),
    /// Complex number whose parts are of the given float width.
    Complex(FloatKind),
    Ptr(Box<NativeType>),
    Array(Box<NativeType>, usize),
    Slice(Box<NativeType>),
    Map(Box<NativeType>, Box<NativeType>),
    Struct(RecordShape),
    /// Dynamically dispatched value (`dyn Name`).
    Interface(String),
    /// Functions, channels and anything else without a domain equivalent.
    Opaque(String),
}

impl NativeType {
    pub fn ptr(inner: NativeType) -> Self {
        NativeType::Ptr(Box::new(inner))
    }

    pub fn slice(elem: NativeType) -> Self {
        NativeType::Slice(Box::new(elem))
    }

    pub fn array(elem: NativeType, len: usize) -> Self {
        NativeType::Array(Box::new(elem), len)
    }

    pub fn map(key: NativeType, value: NativeType) -> Self {
        NativeType::Map(Box::new(key), Box::new(value))
    }

    /// True for a record type tagged as a capability marker. Indirection is
    /// not looked through.
    pub fn is_trait_marker(&self) -> bool {
        matches!(self, NativeType::Struct(shape) if shape.marker)
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
            IntKind::Isize => "isize",
            IntKind::U8 => "u8",
            IntKind::U16 => "u16",
            IntKind::U32 => "u32",
            IntKind::U64 => "u64",
            IntKind::Usize => "usize",
        };
        f.write_str(name)
    }
}

impl fmt::Display for FloatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatKind::F32 => f.write_str("f32"),
            FloatKind::F64 => f.write_str("f64"),
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeType::Bool => write!(f, "bool"),
            NativeType::Str => write!(f, "String"),
            NativeType::Int(kind) => write!(f, "{kind}"),
            NativeType::Char => write!(f, "char"),
            NativeType::Float(kind) => write!(f, "{kind}"),
            NativeType::Complex(kind) => write!(f, "Complex<{kind}>"),
            NativeType::Ptr(inner) => write!(f, "*{inner}"),
            NativeType::Array(elem, len) => write!(f, "[{elem}; {len}]"),
            NativeType::Slice(elem) => write!(f, "Vec<{elem}>"),
            NativeType::Map(k, v) => write!(f, "Map<{k}, {v}>"),
            NativeType::Struct(shape) => write!(f, "{}", shape.name),
            NativeType::Interface(name) => write!(f, "dyn {name}"),
            NativeType::Opaque(name) => write!(f, "{name}"),
        }
    }
}

/// The declared structure of a record type.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordShape {
    pub name: String,
    pub fields: Vec<FieldShape>,
    /// Set for stateless capability markers (`Base`, `Groupable`, ...).
    pub marker: bool,
}

impl RecordShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            marker: false,
        }
    }

    pub fn trait_marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            marker: true,
        }
    }

    pub fn field(mut self, field: FieldShape) -> Self {
        self.fields.push(field);
        self
    }

    pub fn embed(self, shape: RecordShape) -> Self {
        self.field(FieldShape::embed(shape))
    }

    pub fn field_named(&self, name: &str) -> Option<&FieldShape> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn into_type(self) -> NativeType {
        NativeType::Struct(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    pub name: String,
    pub ty: NativeType,
    pub tag: StructTag,
    pub embedded: bool,
}

impl FieldShape {
    pub fn new(name: impl Into<String>, ty: NativeType) -> Self {
        Self {
            name: name.into(),
            ty,
            tag: StructTag::default(),
            embedded: false,
        }
    }

    /// Declares a field from a Rust type.
    pub fn of<T: crate::domain::ports::Shaped>(name: impl Into<String>) -> Self {
        Self::new(name, T::native_type())
    }

    /// An embedded record is a field named after its type.
    pub fn embed(shape: RecordShape) -> Self {
        Self {
            name: shape.name.clone(),
            ty: NativeType::Struct(shape),
            tag: StructTag::default(),
            embedded: true,
        }
    }

    pub fn tagged(mut self, raw: &str) -> Self {
        self.tag = StructTag::new(raw);
        self
    }

    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }
}

/// Exported names start with an upper-case character.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Raw field annotation in the conventional `key:"value" other:"value"` form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructTag(String);

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"([^\s:"]+):"((?:[^"\\]|\\.)*)""#).expect("tag pattern is a valid regex")
    })
}

impl StructTag {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `None` when `key` is absent, `Some("")` when it is present but empty.
    pub fn lookup(&self, key: &str) -> Option<String> {
        tag_pattern()
            .captures_iter(&self.0)
            .find(|caps| &caps[1] == key)
            .map(|caps| unescape(&caps[2]))
    }
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_lookup() {
        let tag = StructTag::new(r#"lang:"alpha" yaml:"nope""#);
        assert_eq!(tag.lookup("lang").as_deref(), Some("alpha"));
        assert_eq!(tag.lookup("yaml").as_deref(), Some("nope"));
        assert_eq!(tag.lookup("json"), None);
    }

    #[test]
    fn test_tag_lookup_empty_and_escaped() {
        let tag = StructTag::new(r#"lang:"" doc:"say \"hi\"""#);
        assert_eq!(tag.lookup("lang").as_deref(), Some(""));
        assert_eq!(tag.lookup("doc").as_deref(), Some(r#"say "hi""#));
        assert_eq!(StructTag::default().lookup("lang"), None);
    }

    #[test]
    fn test_tag_key_must_match_whole_key() {
        let tag = StructTag::new(r#"golang:"x""#);
        assert_eq!(tag.lookup("lang"), None);
        assert_eq!(tag.lookup("golang").as_deref(), Some("x"));
    }

    #[test]
    fn test_is_exported() {
        assert!(is_exported("Alpha"));
        assert!(is_exported("IAmACamel"));
        assert!(!is_exported("skipMe"));
        assert!(!is_exported("_hidden"));
        assert!(!is_exported(""));
    }

    #[test]
    fn test_embed_uses_type_name() {
        let field = FieldShape::embed(RecordShape::trait_marker("Base"));
        assert_eq!(field.name, "Base");
        assert!(field.embedded);
        assert!(field.ty.is_trait_marker());
        assert!(!NativeType::ptr(field.ty.clone()).is_trait_marker());
    }

    #[test]
    fn test_native_type_display() {
        let ty = NativeType::map(
            NativeType::Int(IntKind::I64),
            NativeType::slice(NativeType::ptr(NativeType::Float(FloatKind::F32))),
        );
        assert_eq!(ty.to_string(), "Map<i64, Vec<*f32>>");
        assert_eq!(NativeType::Complex(FloatKind::F64).to_string(), "Complex<f64>");
    }
}
