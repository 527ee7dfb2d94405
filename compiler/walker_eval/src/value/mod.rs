//! Runtime values.
//!
//! Every value exclusively owns its buffers; `Clone` is a deep copy. Code
//! values (`Function`, `Expression`, `Macro`) hold a [`CodePtr`] into
//! program text and own nothing.
//!
//! Conversions never fail. The `to_*` forms substitute zero for malformed
//! text; the `parse_*` forms return `None` so callers can tell the
//! difference (index selection relies on this).

mod list;
pub(crate) mod number;
mod text;

pub use list::List;
pub use text::Text;

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::source::CodePtr;
use number::{format_f64, integral_i64, parse_f64, parse_i64, parse_u64};

/// The three callable code kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CodeKind {
    /// Runs in a fresh scope level.
    Function,
    /// Runs in a fresh scope level, evaluated as an expression.
    Expression,
    /// Runs in the caller's scope level.
    Macro,
}

/// A callable: kind plus where its body starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodeRef {
    pub kind: CodeKind,
    pub entry: CodePtr,
}

impl CodeRef {
    pub const fn new(kind: CodeKind, entry: CodePtr) -> Self {
        CodeRef { kind, entry }
    }

    /// Whether a call pushes a scope level.
    #[inline]
    pub fn is_scoped(self) -> bool {
        self.kind != CodeKind::Macro
    }
}

/// A file named by path. Each operation reopens the file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileHandle {
    pub path: Text,
}

/// A Walker runtime value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    None,
    String(Text),
    Number(f64),
    Integer(i64),
    UInteger(u64),
    Boolean(bool),
    Function(CodePtr),
    Expression(CodePtr),
    Macro(CodePtr),
    Array(List),
    Error(Text),
    FileText(FileHandle),
    FileBinary(FileHandle),
}

impl Value {
    pub fn string(text: impl Into<Text>) -> Self {
        Value::String(text.into())
    }

    pub fn error(text: impl Into<Text>) -> Self {
        Value::Error(text.into())
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    pub fn from_code(code: CodeRef) -> Self {
        match code.kind {
            CodeKind::Function => Value::Function(code.entry),
            CodeKind::Expression => Value::Expression(code.entry),
            CodeKind::Macro => Value::Macro(code.entry),
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// The callable this value refers to, if any.
    pub fn code_ref(&self) -> Option<CodeRef> {
        match *self {
            Value::Function(at) => Some(CodeRef::new(CodeKind::Function, at)),
            Value::Expression(at) => Some(CodeRef::new(CodeKind::Expression, at)),
            Value::Macro(at) => Some(CodeRef::new(CodeKind::Macro, at)),
            _ => None,
        }
    }

    /// Name reported by `type`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::String(_) => "string",
            Value::Number(_) => "number (f64)",
            Value::Integer(_) => "integer (i64)",
            Value::UInteger(_) => "unsigned integer (u64)",
            Value::Boolean(_) => "boolean",
            Value::Function(_) => "function",
            Value::Expression(_) => "expression",
            Value::Macro(_) => "macro",
            Value::Array(_) => "array",
            Value::Error(_) => "error (string)",
            Value::FileText(_) => "file (text)",
            Value::FileBinary(_) => "file (binary)",
        }
    }

    /// Release owned buffers and reset to `None`.
    #[inline]
    pub fn clear(&mut self) {
        *self = Value::None;
    }

    /// Convert to `String` in place.
    ///
    /// Integral numbers print without a fractional part. Arrays, code
    /// values and `None` become the empty string; an array's elements are
    /// dropped in the process.
    pub fn stringify(&mut self) {
        if !matches!(self, Value::String(_)) {
            let text = std::mem::take(self).into_text();
            *self = Value::String(text);
        }
    }

    /// Stringify in place and hand the text to `edit`.
    pub fn edit_text(&mut self, edit: impl FnOnce(&mut Text)) {
        let mut text = std::mem::take(self).into_text();
        edit(&mut text);
        *self = Value::String(text);
    }

    /// Stringify and take the text, leaving `None`.
    pub fn take_text(&mut self) -> Text {
        std::mem::take(self).into_text()
    }

    pub fn into_text(self) -> Text {
        match self {
            Value::String(text) | Value::Error(text) => text,
            Value::Number(n) => match integral_i64(n) {
                Some(i) => Text::from(i.to_string()),
                None => Text::from(format_f64(n)),
            },
            Value::Integer(i) => Text::from(i.to_string()),
            Value::UInteger(u) => Text::from(u.to_string()),
            Value::Boolean(b) => Text::from(if b { "1" } else { "0" }),
            Value::FileText(file) | Value::FileBinary(file) => file.path,
            Value::None
            | Value::Function(_)
            | Value::Expression(_)
            | Value::Macro(_)
            | Value::Array(_) => Text::new(),
        }
    }

    /// Stringify, then mark as `Error`. Errors are left as they are.
    #[must_use]
    pub fn into_error(self) -> Value {
        match self {
            Value::Error(_) => self,
            other => Value::Error(other.into_text()),
        }
    }

    /// Checked numeric view. Only text can fail to parse.
    pub fn parse_number(&self) -> Option<f64> {
        match self {
            Value::String(text) => parse_f64(text.as_bytes()),
            Value::Number(n) => Some(*n),
            Value::Integer(i) => Some(*i as f64),
            Value::UInteger(u) => Some(*u as f64),
            Value::Boolean(b) => Some(f64::from(u8::from(*b))),
            _ => Some(0.0),
        }
    }

    pub fn to_number(&self) -> f64 {
        self.parse_number().unwrap_or(0.0)
    }

    /// Checked signed view. Numbers truncate toward zero.
    pub fn parse_integer(&self) -> Option<i64> {
        match self {
            Value::String(text) => parse_i64(text.as_bytes()),
            Value::Number(n) => Some(*n as i64),
            Value::Integer(i) => Some(*i),
            Value::UInteger(u) => Some(*u as i64),
            Value::Boolean(b) => Some(i64::from(*b)),
            _ => Some(0),
        }
    }

    pub fn to_integer(&self) -> i64 {
        self.parse_integer().unwrap_or(0)
    }

    /// Checked unsigned view. Negative numbers and NaN fail.
    pub fn parse_unsigned(&self) -> Option<u64> {
        match self {
            Value::String(text) => parse_u64(text.as_bytes()),
            Value::Number(n) => (*n >= 0.0).then_some(*n as u64),
            Value::Integer(i) => u64::try_from(*i).ok(),
            Value::UInteger(u) => Some(*u),
            Value::Boolean(b) => Some(u64::from(*b)),
            _ => Some(0),
        }
    }

    pub fn to_unsigned(&self) -> u64 {
        self.parse_unsigned().unwrap_or(0)
    }

    /// Truthiness. Text is false when it is numeric zero or blank.
    pub fn to_boolean(&self) -> bool {
        match self {
            Value::None => false,
            Value::String(text) => match parse_f64(text.as_bytes()) {
                Some(n) => n != 0.0,
                None => !text.as_bytes().iter().all(|&b| b == b' ' || b == b'\t'),
            },
            Value::Number(n) => *n != 0.0,
            Value::Integer(i) => *i != 0,
            Value::UInteger(u) => *u != 0,
            Value::Boolean(b) => *b,
            Value::Function(_)
            | Value::Expression(_)
            | Value::Macro(_)
            | Value::Array(_)
            | Value::Error(_)
            | Value::FileText(_)
            | Value::FileBinary(_) => true,
        }
    }

    /// Order two values the way `=`, `!=` and the relational operators do.
    ///
    /// Numerically when both sides are numeric (text that parses, or a
    /// numeric kind), otherwise by the bytes of their text. `None` only
    /// when a NaN is involved.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => Some(self.text_view().cmp(&other.text_view())),
        }
    }

    fn numeric(&self) -> Option<f64> {
        match self {
            Value::String(text) => parse_f64(text.as_bytes()),
            Value::Number(_) | Value::Integer(_) | Value::UInteger(_) | Value::Boolean(_) => {
                self.parse_number()
            }
            _ => None,
        }
    }

    /// Stringified bytes without consuming `self`.
    fn text_view(&self) -> Cow<'_, [u8]> {
        match self {
            Value::String(text) | Value::Error(text) => Cow::Borrowed(text.as_bytes()),
            other => Cow::Owned(other.clone().into_text().into_bytes()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

#[cfg(test)]
mod tests;
