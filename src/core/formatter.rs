//! Tags, message bodies and format arguments

use super::caller::CallerFrame;
use super::printf::FloatValue;
use std::fmt;

pub use super::printf::render;

/// Prefix of every tag handed to the platform sink
pub const TAG_PREFIX: &str = "FYZ:";

/// A single argument substituted into a format string
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Str(String),
    /// Signed integer and the bit width of its source type. `%x` and `%o`
    /// print a negative value as the two's complement of that width.
    Int { value: i64, bits: u32 },
    Uint(u64),
    Float(f64),
    Float32(f32),
    Bool(bool),
    Char(char),
    Null,
}

impl FormatArg {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            FormatArg::Str(_) => "a string",
            FormatArg::Int { .. } | FormatArg::Uint(_) => "an integer",
            FormatArg::Float(_) | FormatArg::Float32(_) => "a float",
            FormatArg::Bool(_) => "a boolean",
            FormatArg::Char(_) => "a char",
            FormatArg::Null => "null",
        }
    }

    pub(crate) fn as_float(&self) -> Option<FloatValue> {
        match self {
            FormatArg::Float(v) => Some(FloatValue::from_f64(*v)),
            FormatArg::Float32(v) => Some(FloatValue::from_f32(*v)),
            _ => None,
        }
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Str(s) => f.write_str(s),
            FormatArg::Int { value, .. } => write!(f, "{}", value),
            FormatArg::Uint(v) => write!(f, "{}", v),
            // 1.0, 1.0E20, Infinity
            FormatArg::Float(v) => write!(f, "{}", FloatValue::from_f64(*v)),
            FormatArg::Float32(v) => write!(f, "{}", FloatValue::from_f32(*v)),
            FormatArg::Bool(v) => write!(f, "{}", v),
            FormatArg::Char(c) => write!(f, "{}", c),
            FormatArg::Null => f.write_str("null"),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for FormatArg {
                fn from(value: $source) -> Self {
                    FormatArg::$variant(value as $target)
                }
            }
        )+
    };
}

macro_rules! impl_from_signed {
    ($($source:ty),+) => {
        $(
            impl From<$source> for FormatArg {
                fn from(value: $source) -> Self {
                    FormatArg::Int {
                        value: value as i64,
                        bits: <$source>::BITS,
                    }
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from!(Uint as u64: u8, u16, u32, u64, usize);

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        FormatArg::Float(value)
    }
}

impl From<f32> for FormatArg {
    fn from(value: f32) -> Self {
        FormatArg::Float32(value)
    }
}

impl From<bool> for FormatArg {
    fn from(value: bool) -> Self {
        FormatArg::Bool(value)
    }
}

impl From<char> for FormatArg {
    fn from(value: char) -> Self {
        FormatArg::Char(value)
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        FormatArg::Str(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        FormatArg::Str(value)
    }
}

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        FormatArg::Str(value.clone())
    }
}

impl<T: Into<FormatArg>> From<Option<T>> for FormatArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(FormatArg::Null, Into::into)
    }
}

/// `"FYZ:<simple type name>"` for the frame's declaring type.
///
/// Both `::` and `.` are treated as separators, and trailing generic
/// arguments are dropped: `my_app::Cache<String>` yields `FYZ:Cache`.
pub fn build_tag(frame: &CallerFrame) -> String {
    format!("{}{}", TAG_PREFIX, simple_type_name(&frame.type_name))
}

/// `"[<thread>] <method> : <text>"`
pub fn build_message(frame: &CallerFrame, rendered: &str) -> String {
    format!(
        "[{}] {} : {}",
        current_thread_name(),
        frame.method_name,
        rendered
    )
}

/// Name of the current thread, or its id when it has none
pub fn current_thread_name() -> String {
    let thread = std::thread::current();
    match thread.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", thread.id()),
    }
}

fn simple_type_name(type_name: &str) -> &str {
    let without_generics = match type_name.find('<') {
        Some(idx) if idx > 0 => &type_name[..idx],
        _ => type_name,
    };
    let start = match (without_generics.rfind("::"), without_generics.rfind('.')) {
        (Some(colons), Some(dot)) => (colons + 2).max(dot + 1),
        (Some(colons), None) => colons + 2,
        (None, Some(dot)) => dot + 1,
        (None, None) => 0,
    };
    &without_generics[start..]
}
