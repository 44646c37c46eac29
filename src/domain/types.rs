//! Types of the configuration language that native fields are mapped onto.

use crate::utils::error::{BindError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Bool,
    Str,
    Int,
    Float,
    List(Box<Type>),
    Map(Box<Type>, Box<Type>),
    /// Members keep their declaration order.
    Struct(Vec<(String, Type)>),
}

impl Type {
    pub fn list(elem: Type) -> Self {
        Type::List(Box::new(elem))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map(Box::new(key), Box::new(value))
    }

    pub fn member(&self, name: &str) -> Option<&Type> {
        match self {
            Type::Struct(members) => members.iter().find(|(n, _)| n == name).map(|(_, t)| t),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => write!(f, "bool"),
            Type::Str => write!(f, "str"),
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::List(elem) => write!(f, "[]{elem}"),
            Type::Map(k, v) => write!(f, "map{{{k}: {v}}}"),
            Type::Struct(members) => {
                write!(f, "struct{{")?;
                for (i, (name, ty)) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{name} {ty}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Type {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parser = TypeParser { input: s, rest: s };
        let ty = parser.parse_type()?;
        parser.skip_ws();
        if !parser.rest.is_empty() {
            return Err(parser.error(format!("unexpected trailing input `{}`", parser.rest)));
        }
        Ok(ty)
    }
}

struct TypeParser<'a> {
    input: &'a str,
    rest: &'a str,
}

impl<'a> TypeParser<'a> {
    fn error(&self, reason: impl Into<String>) -> BindError {
        BindError::TypeParse {
            input: self.input.to_string(),
            reason: reason.into(),
        }
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn expect(&mut self, token: &str) -> Result<()> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{}`", token)))
        }
    }

    fn ident(&mut self) -> Result<&'a str> {
        self.skip_ws();
        let end = self
            .rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(self.rest.len());
        if end == 0 {
            return Err(self.error("expected an identifier"));
        }
        let (ident, rest) = self.rest.split_at(end);
        self.rest = rest;
        Ok(ident)
    }

    fn parse_type(&mut self) -> Result<Type> {
        if self.eat("[]") {
            return Ok(Type::list(self.parse_type()?));
        }

        match self.ident()? {
            "bool" => Ok(Type::Bool),
            "str" => Ok(Type::Str),
            "int" => Ok(Type::Int),
            "float" => Ok(Type::Float),
            "map" => {
                self.expect("{")?;
                let key = self.parse_type()?;
                self.expect(":")?;
                let value = self.parse_type()?;
                self.expect("}")?;
                Ok(Type::map(key, value))
            }
            "struct" => self.parse_struct(),
            other => Err(self.error(format!("unknown type `{}`", other))),
        }
    }

    fn parse_struct(&mut self) -> Result<Type> {
        self.expect("{")?;
        let mut members: Vec<(String, Type)> = Vec::new();
        if self.eat("}") {
            return Ok(Type::Struct(members));
        }
        loop {
            let name = self.ident()?;
            if members.iter().any(|(n, _)| n == name) {
                return Err(self.error(format!("duplicate struct member `{}`", name)));
            }
            let ty = self.parse_type()?;
            members.push((name.to_string(), ty));
            if self.eat(";") {
                continue;
            }
            self.expect("}")?;
            return Ok(Type::Struct(members));
        }
    }
}
