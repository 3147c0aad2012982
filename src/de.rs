//! Binding of a validated token sequence onto Rust values.
//!
//! This module provides the [`Deserializer`] that drives serde over the tokens
//! produced by [`crate::tokenize`].
//!
//! ## Overview
//!
//! Binding happens in two steps:
//!
//! - **Tree building**: an explicit [`Cursor`] walks the tokens once and builds
//!   a tree of objects, arrays and scalar tokens. Repeated keys, dotted paths
//!   and nested blocks for the same key are merged here.
//! - **Binding**: serde's derive-generated visitors pull fields out of the
//!   tree. Field names resolve by exact match, then by `#[serde(alias)]`.
//!   Unknown keys are skipped unless strict mode is on.
//!
//! Scalars are converted on demand, so `port = 8080` binds to a `u16` field, a
//! `String` field or a `serde_json::Value` alike.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_hocon::from_str;
//! use std::time::Duration;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server { port: u16, timeout: Duration }
//!
//! let server: Server = from_str("port = 8080\ntimeout = 10 seconds").unwrap();
//! assert_eq!(server, Server { port: 8080, timeout: Duration::from_secs(10) });
//! ```

use crate::lexer::{duration_nanos, tokenize};
use crate::options::HoconOptions;
use crate::token::{Location, Token, TokenKind};
use crate::validate::validate;
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::de::{self, IntoDeserializer};
use std::borrow::Cow;

/// The HOCON deserializer.
///
/// Owns (or borrows) a validated token sequence. Created via
/// [`Deserializer::from_str`] or [`Deserializer::from_tokens`].
///
/// The document root is always an object: it binds to structs, maps,
/// [`crate::Value`] and single-key enums, never to a scalar or a sequence.
#[derive(Debug)]
pub struct Deserializer<'a> {
    tokens: Cow<'a, [Token]>,
    options: HoconOptions,
}

impl<'a> Deserializer<'a> {
    /// Tokenizes and validates `input`.
    ///
    /// # Errors
    ///
    /// Returns any lexical or structural error in the document.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &str) -> Result<Self> {
        let tokens = tokenize(input)?;
        validate(&tokens)?;
        Ok(Deserializer {
            tokens: Cow::Owned(tokens),
            options: HoconOptions::default(),
        })
    }

    /// Wraps an existing token sequence after validating it.
    ///
    /// # Errors
    ///
    /// Returns any structural error in the sequence.
    pub fn from_tokens(tokens: &'a [Token]) -> Result<Self> {
        validate(tokens)?;
        Ok(Deserializer {
            tokens: Cow::Borrowed(tokens),
            options: HoconOptions::default(),
        })
    }

    #[must_use]
    pub fn with_options(mut self, options: HoconOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn root(&self) -> Result<NodeDeserializer<'_>> {
        let node = Cursor::new(&self.tokens).document()?;
        if let Node::Object { fields, .. } = &node {
            tracing::debug!(fields = fields.len(), strict = self.options.strict, "document tree built");
        }
        Ok(NodeDeserializer::new(node, self.options))
    }
}

/// An explicit position in an immutable token sequence.
///
/// Each nested block or array is parsed by a recursive call that advances the
/// same cursor; nothing else holds a view into the tokens.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    pub(crate) fn new(tokens: &'t [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    #[allow(clippy::should_implement_trait)]
    fn next(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn skip_while(&mut self, skip: impl Fn(TokenKind) -> bool) {
        while self.peek().is_some_and(|token| skip(token.kind)) {
            self.pos += 1;
        }
    }

    /// Skips newlines and commas, which separate statements and elements alike.
    fn skip_separators(&mut self) {
        self.skip_while(|kind| matches!(kind, TokenKind::NewLine | TokenKind::Comma));
    }

    fn skip_newlines(&mut self) {
        self.skip_while(|kind| kind == TokenKind::NewLine);
    }

    /// Parses the whole sequence as the root object.
    pub(crate) fn document(&mut self) -> Result<Node<'t>> {
        self.object(Location::default(), false)
    }

    fn object(&mut self, at: Location, nested: bool) -> Result<Node<'t>> {
        let mut fields = IndexMap::new();
        loop {
            self.skip_separators();
            let Some(token) = self.next() else {
                return if nested {
                    Err(Error::unbalanced(at))
                } else {
                    Ok(Node::Object { at, fields })
                };
            };

            match token.kind {
                TokenKind::RightBrace if nested => return Ok(Node::Object { at, fields }),
                TokenKind::Key | TokenKind::Text => {
                    let path = key_path(token)?;
                    let node = self.field_value(token)?;
                    insert(&mut fields, token, &path, node);
                }
                TokenKind::Identifier => {
                    return Err(Error::invalid_token(token.location, &token.value))
                }
                kind => {
                    return Err(Error::syntax(
                        token.location,
                        &format!("expected a key, found {}", kind),
                    ))
                }
            }
        }
    }

    /// Parses what follows a key: `= value`, `: value` or `{ block }`.
    fn field_value(&mut self, key: &'t Token) -> Result<Node<'t>> {
        match self.next() {
            Some(token) if token.kind.is_assignment() => {
                self.skip_newlines();
                self.value(token.location)
            }
            Some(token) if token.kind == TokenKind::LeftBrace => {
                self.object(token.location, true)
            }
            Some(token) => Err(Error::syntax(
                token.location,
                &format!(
                    "expected `=`, `:` or `{{` after key `{}`, found {}",
                    key.value, token.kind
                ),
            )),
            None => Err(Error::syntax(
                key.location,
                &format!("key `{}` has no value", key.value),
            )),
        }
    }

    fn value(&mut self, after: Location) -> Result<Node<'t>> {
        match self.next() {
            Some(token) if token.kind.is_value() => Ok(Node::Scalar(token)),
            Some(token) if token.kind == TokenKind::LeftBrace => {
                self.object(token.location, true)
            }
            Some(token) if token.kind == TokenKind::LeftBracket => self.array(token.location),
            Some(token) => Err(Error::syntax(
                token.location,
                &format!("expected a value, found {}", token.kind),
            )),
            None => Err(Error::syntax(after, "expected a value, found end of input")),
        }
    }

    fn array(&mut self, at: Location) -> Result<Node<'t>> {
        let mut elements = Vec::new();
        loop {
            self.skip_separators();
            let Some(token) = self.next() else {
                return Err(Error::unbalanced(at));
            };
            let element = match token.kind {
                TokenKind::RightBracket => return Ok(Node::Array { at, elements }),
                TokenKind::LeftBrace => self.object(token.location, true)?,
                TokenKind::LeftBracket => self.array(token.location)?,
                kind if kind.is_value() => Node::Scalar(token),
                kind => {
                    return Err(Error::syntax(
                        token.location,
                        &format!("unexpected {} in array", kind),
                    ))
                }
            };
            elements.push(element);
        }
    }
}

/// Splits a key into path segments. Quoted keys are a single segment.
fn key_path(token: &Token) -> Result<Vec<&str>> {
    if token.kind == TokenKind::Text {
        return Ok(vec![token.value.as_str()]);
    }
    let path: Vec<&str> = token.value.split('.').collect();
    if path.iter().any(|segment| segment.is_empty()) {
        return Err(Error::invalid_token(token.location, &token.value));
    }
    Ok(path)
}

/// Inserts `node` at `path`, merging objects and replacing everything else.
fn insert<'t>(
    fields: &mut IndexMap<&'t str, Field<'t>>,
    key: &'t Token,
    path: &[&'t str],
    node: Node<'t>,
) {
    let Some((&name, rest)) = path.split_first() else {
        return;
    };

    if !rest.is_empty() {
        let field = fields.entry(name).or_insert_with(|| Field {
            key,
            node: Node::empty_object(key.location),
        });
        if !matches!(field.node, Node::Object { .. }) {
            *field = Field {
                key,
                node: Node::empty_object(key.location),
            };
        }
        if let Node::Object { fields: inner, .. } = &mut field.node {
            insert(inner, key, rest, node);
        }
        return;
    }

    if let Some(Field {
        node: Node::Object { fields: existing, .. },
        ..
    }) = fields.get_mut(name)
    {
        if let Node::Object { fields: incoming, .. } = node {
            for (child, field) in incoming {
                insert(existing, field.key, &[child], field.node);
            }
            return;
        }
    }
    fields.insert(name, Field { key, node });
}

/// A parsed document node. Scalars keep a reference to their token.
#[derive(Debug, Clone)]
pub(crate) enum Node<'t> {
    Scalar(&'t Token),
    Array {
        at: Location,
        elements: Vec<Node<'t>>,
    },
    Object {
        at: Location,
        fields: IndexMap<&'t str, Field<'t>>,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct Field<'t> {
    /// The key token that (last) introduced this field.
    key: &'t Token,
    node: Node<'t>,
}

impl<'t> Node<'t> {
    fn empty_object(at: Location) -> Self {
        Node::Object {
            at,
            fields: IndexMap::new(),
        }
    }

    fn location(&self) -> Location {
        match self {
            Node::Scalar(token) => token.location,
            Node::Array { at, .. } | Node::Object { at, .. } => *at,
        }
    }

    fn text(&self) -> &str {
        match self {
            Node::Scalar(token) => &token.value,
            Node::Array { .. } => "[...]",
            Node::Object { .. } => "{...}",
        }
    }
}

/// Converts a scalar token to any Rust integer type, checking the range.
fn integer<T: TryFrom<i128>>(token: &Token, expected: &str) -> Result<T> {
    let parsed = match token.kind {
        TokenKind::Integer | TokenKind::Duration | TokenKind::Size | TokenKind::Text => {
            token.value.parse::<i128>().ok()
        }
        _ => None,
    };
    parsed
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| Error::conversion(token.location, &token.value, expected))
}

fn float(token: &Token, expected: &str) -> Result<f64> {
    let parsed = match token.kind {
        TokenKind::Boolean => None,
        _ => token.value.parse::<f64>().ok(),
    };
    parsed.ok_or_else(|| Error::conversion(token.location, &token.value, expected))
}

/// Resolves a scalar to a whole number of nanoseconds.
///
/// Duration tokens are already normalized, bare integers count as nanoseconds
/// and quoted text may spell a duration literal.
fn nanoseconds(token: &Token) -> Result<u64> {
    let nanos = match token.kind {
        TokenKind::Duration | TokenKind::Integer => token.value.parse::<u64>().ok(),
        TokenKind::Text => duration_nanos(&token.value).flatten(),
        _ => None,
    };
    nanos.ok_or_else(|| Error::conversion(token.location, &token.value, "duration"))
}

/// Binds one node of the document tree.
struct NodeDeserializer<'t> {
    node: Node<'t>,
    options: HoconOptions,
    /// Name and key location of the field this node is the value of.
    field: Option<(&'t str, Location)>,
}

impl<'t> NodeDeserializer<'t> {
    fn new(node: Node<'t>, options: HoconOptions) -> Self {
        NodeDeserializer {
            node,
            options,
            field: None,
        }
    }

    fn mismatch(&self, expected: &str) -> Error {
        Error::conversion(self.node.location(), self.node.text(), expected)
    }

    fn scalar(&self, expected: &str) -> Result<&'t Token> {
        match self.node {
            Node::Scalar(token) => Ok(token),
            _ => Err(self.mismatch(expected)),
        }
    }
}

macro_rules! deserialize_integer {
    ($($method:ident => $visit:ident: $ty:ty,)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                let token = self.scalar(stringify!($ty))?;
                visitor.$visit(integer::<$ty>(token, stringify!($ty))?)
            }
        )*
    };
}

impl<'de, 't> de::Deserializer<'de> for NodeDeserializer<'t> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let options = self.options;
        match self.node {
            Node::Scalar(token) => match token.kind {
                TokenKind::Boolean if token.value == "true" => visitor.visit_bool(true),
                TokenKind::Boolean if token.value == "false" => visitor.visit_bool(false),
                TokenKind::Integer => match token.value.parse::<i64>() {
                    Ok(n) => visitor.visit_i64(n),
                    Err(_) => visitor.visit_str(&token.value),
                },
                TokenKind::Float => visitor.visit_f64(float(token, "f64")?),
                TokenKind::Duration | TokenKind::Size => {
                    visitor.visit_u64(integer::<u64>(token, "u64")?)
                }
                _ => visitor.visit_str(&token.value),
            },
            Node::Array { elements, .. } => visitor.visit_seq(ElementsAccess::new(elements, options)),
            Node::Object { fields, .. } => visitor.visit_map(FieldsAccess::new(fields, options)),
        }
    }

    deserialize_integer! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let token = self.scalar("bool")?;
        match token.value.as_str() {
            "true" => visitor.visit_bool(true),
            "false" => visitor.visit_bool(false),
            other => Err(Error::conversion(token.location, other, "bool")),
        }
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let token = self.scalar("f32")?;
        visitor.visit_f32(float(token, "f32")? as f32)
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let token = self.scalar("f64")?;
        visitor.visit_f64(float(token, "f64")?)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let token = self.scalar("char")?;
        let mut chars = token.value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => visitor.visit_char(ch),
            _ => Err(Error::conversion(token.location, &token.value, "char")),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_str(&self.scalar("string")?.value)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.node {
            Node::Scalar(token) => visitor.visit_bytes(token.value.as_bytes()),
            _ => self.deserialize_seq(visitor),
        }
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(self.mismatch("unit"))
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.node {
            Node::Array { elements, .. } => {
                visitor.visit_seq(ElementsAccess::new(elements, self.options))
            }
            _ => Err(self.mismatch("array")),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.node {
            Node::Object { fields, .. } => visitor.visit_map(FieldsAccess::new(fields, self.options)),
            _ => Err(self.mismatch("object")),
        }
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        // std::time::Duration is a `{ secs, nanos }` struct to serde.
        if name == "Duration" && fields == ["secs", "nanos"] {
            if let Node::Scalar(token) = self.node {
                let nanos = nanoseconds(token)?;
                let parts = [nanos / 1_000_000_000, nanos % 1_000_000_000];
                return visitor
                    .visit_seq(de::value::SeqDeserializer::<_, Error>::new(parts.into_iter()));
            }
        }
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let options = self.options;
        match self.node {
            Node::Scalar(token) => visitor.visit_enum(
                IntoDeserializer::<Error>::into_deserializer(token.value.as_str()),
            ),
            Node::Object { at, fields } if fields.len() == 1 => {
                match fields.into_iter().next() {
                    Some((variant, field)) => visitor.visit_enum(EnumDeserializer {
                        variant,
                        field,
                        options,
                    }),
                    None => Err(Error::conversion(at, "{...}", "enum")),
                }
            }
            _ => Err(self.mismatch("enum")),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if let Some((name, at)) = self.field {
            if self.options.strict {
                tracing::debug!(field = name, %at, "unknown key rejected in strict mode");
                return Err(Error::unknown_field(at, name));
            }
            tracing::trace!(field = name, %at, "unknown key skipped");
        }
        visitor.visit_unit()
    }
}

struct ElementsAccess<'t> {
    iter: std::vec::IntoIter<Node<'t>>,
    options: HoconOptions,
}

impl<'t> ElementsAccess<'t> {
    fn new(elements: Vec<Node<'t>>, options: HoconOptions) -> Self {
        ElementsAccess {
            iter: elements.into_iter(),
            options,
        }
    }
}

impl<'de, 't> de::SeqAccess<'de> for ElementsAccess<'t> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(node) => seed
                .deserialize(NodeDeserializer::new(node, self.options))
                .map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct FieldsAccess<'t> {
    iter: indexmap::map::IntoIter<&'t str, Field<'t>>,
    pending: Option<(&'t str, Field<'t>)>,
    options: HoconOptions,
}

impl<'t> FieldsAccess<'t> {
    fn new(fields: IndexMap<&'t str, Field<'t>>, options: HoconOptions) -> Self {
        FieldsAccess {
            iter: fields.into_iter(),
            pending: None,
            options,
        }
    }
}

impl<'de, 't> de::MapAccess<'de> for FieldsAccess<'t> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((name, field)) => {
                self.pending = Some((name, field));
                seed.deserialize(IntoDeserializer::<Error>::into_deserializer(name))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.pending.take() {
            Some((name, field)) => seed.deserialize(NodeDeserializer {
                node: field.node,
                options: self.options,
                field: Some((name, field.key.location)),
            }),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer<'t> {
    variant: &'t str,
    field: Field<'t>,
    options: HoconOptions,
}

impl<'de, 't> de::EnumAccess<'de> for EnumDeserializer<'t> {
    type Error = Error;
    type Variant = VariantDeserializer<'t>;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(IntoDeserializer::<Error>::into_deserializer(self.variant))?;
        Ok((
            variant,
            VariantDeserializer {
                node: NodeDeserializer::new(self.field.node, self.options),
            },
        ))
    }
}

struct VariantDeserializer<'t> {
    node: NodeDeserializer<'t>,
}

impl<'de, 't> de::VariantAccess<'de> for VariantDeserializer<'t> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match &self.node.node {
            Node::Object { fields, .. } if fields.is_empty() => Ok(()),
            _ => Err(self.node.mismatch("unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.node)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_seq(self.node, visitor)
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_map(self.node, visitor)
    }
}

macro_rules! reject_root {
    ($($method:ident => $what:literal,)*) => {
        $(
            fn $method<V>(self, _visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                Err(Error::invalid_target(concat!("a document cannot bind to ", $what)))
            }
        )*
    };
}

impl<'de, 'a> de::Deserializer<'de> for &mut Deserializer<'a> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_any(self.root()?, visitor)
    }

    reject_root! {
        deserialize_bool => "a bool",
        deserialize_i8 => "an integer",
        deserialize_i16 => "an integer",
        deserialize_i32 => "an integer",
        deserialize_i64 => "an integer",
        deserialize_i128 => "an integer",
        deserialize_u8 => "an integer",
        deserialize_u16 => "an integer",
        deserialize_u32 => "an integer",
        deserialize_u64 => "an integer",
        deserialize_u128 => "an integer",
        deserialize_f32 => "a float",
        deserialize_f64 => "a float",
        deserialize_char => "a char",
        deserialize_str => "a string",
        deserialize_string => "a string",
        deserialize_bytes => "bytes",
        deserialize_byte_buf => "bytes",
        deserialize_unit => "unit",
        deserialize_seq => "a sequence",
        deserialize_identifier => "an identifier",
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_map(self.root()?, visitor)
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_map(self.root()?, visitor)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_enum(self.root()?, name, variants, visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }
}
