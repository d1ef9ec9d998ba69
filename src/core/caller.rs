//! Caller resolution
//!
//! A [`CallerFrame`] identifies the code that invoked the logging facade. Frames
//! are captured at the call site by [`caller_frame!`](crate::caller_frame) and
//! the resolver walks them innermost first, skipping the facility's own frames.

use super::logger::Logger;

/// Method name used by the synthetic frame returned when nothing outside the
/// facility could be found.
pub const UNRESOLVED_METHOD: &str = "resolve_caller";

/// The resolved identity of the code that invoked the logger
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerFrame {
    pub type_name: String,
    pub method_name: String,
}

impl CallerFrame {
    pub fn new(type_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            method_name: method_name.into(),
        }
    }

    /// Build a frame from a function path such as `my_app::net::Client::connect`.
    ///
    /// The last path segment becomes the method name and everything before it
    /// the declaring type (or module). Closure segments are skipped so a log
    /// call inside a closure reports the enclosing function, and qualified
    /// paths like `<my_app::Widget as Trait>::draw` report the implementing type.
    pub fn from_function_path(path: &str) -> Self {
        let segments: Vec<&str> = split_path(path)
            .into_iter()
            .filter(|segment| *segment != "{{closure}}")
            .collect();

        match segments.split_last() {
            Some((method, parents)) if !parents.is_empty() => {
                let type_name = unqualify(&parents.join("::")).to_string();
                Self::new(type_name, *method)
            }
            Some((method, _)) => Self::new(*method, *method),
            None => Self::unresolved(),
        }
    }

    /// Path of the function enclosing `marker`, a nested fn item declared at
    /// the call site. Used by [`caller_frame!`](crate::caller_frame).
    #[doc(hidden)]
    pub fn from_marker_path(marker_path: &str) -> Self {
        let enclosing = match split_last_segment(marker_path) {
            Some((parent, _)) => parent,
            None => marker_path,
        };
        Self::from_function_path(enclosing)
    }

    /// Synthetic frame naming the facility itself
    pub fn unresolved() -> Self {
        Self::new(facility_type_name(), UNRESOLVED_METHOD)
    }

    /// Whether this frame belongs to the logging facility
    pub fn is_facility(&self) -> bool {
        self.type_name.starts_with(facility_type_name())
    }
}

/// Fully qualified name of the facade type; frames under it are skipped.
pub fn facility_type_name() -> &'static str {
    std::any::type_name::<Logger>()
}

/// Walk `frames` innermost first and return the first one outside the facility.
///
/// Never fails: when every frame belongs to the facility the synthetic
/// [`CallerFrame::unresolved`] frame is returned.
pub fn resolve_caller<I>(frames: I) -> CallerFrame
where
    I: IntoIterator<Item = CallerFrame>,
{
    frames
        .into_iter()
        .find(|frame| !frame.is_facility())
        .unwrap_or_else(CallerFrame::unresolved)
}

/// Split a Rust path on `::`, ignoring separators nested inside `<...>`.
fn split_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let bytes = path.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments.retain(|segment| !segment.is_empty());
    segments
}

fn split_last_segment(path: &str) -> Option<(&str, &str)> {
    let segments = split_path(path);
    let last = *segments.last()?;
    if segments.len() < 2 {
        return None;
    }
    let parent_len = path.len() - last.len() - 2;
    Some((&path[..parent_len], last))
}

/// `<a::B as c::T>` and `<a::B>` both become `a::B`.
fn unqualify(type_name: &str) -> &str {
    match type_name.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
        Some(inner) => match inner.find(" as ") {
            Some(idx) => &inner[..idx],
            None => inner,
        },
        None => type_name,
    }
}
