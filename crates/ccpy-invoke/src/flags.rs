//! ---
//! ccpy_section: "02-invocation"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Keyword flag model and cc-check invocation."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
use indexmap::IndexMap;

/// Value attached to a keyword flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
    /// Omitted from the command line entirely.
    Null,
}

impl FlagValue {
    /// Value token following the flag, if any.
    ///
    /// `false` renders as `False` so the argv matches the Python wrapper's `str(False)`.
    fn value_token(&self) -> Option<String> {
        match self {
            FlagValue::Bool(true) | FlagValue::Null => None,
            FlagValue::Bool(false) => Some("False".to_owned()),
            FlagValue::Text(text) => Some(text.clone()),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Text(value.to_owned())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::Text(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Text(value.to_string())
    }
}

impl From<u64> for FlagValue {
    fn from(value: u64) -> Self {
        FlagValue::Text(value.to_string())
    }
}

impl From<usize> for FlagValue {
    fn from(value: usize) -> Self {
        FlagValue::Text(value.to_string())
    }
}

impl<T: Into<FlagValue>> From<Option<T>> for FlagValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FlagValue::Null)
    }
}

/// Ordered keyword flags forwarded to the binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    entries: IndexMap<String, FlagValue>,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a flag. Replacing keeps the original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FlagValue>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Command-line tokens for every non-null flag, in insertion order.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.entries.len() * 2);
        for (key, value) in &self.entries {
            if *value == FlagValue::Null {
                continue;
            }
            args.push(flag_name(key));
            if let Some(token) = value.value_token() {
                args.push(token);
            }
        }
        args
    }
}

/// `dry_run` becomes `--dry-run`.
pub fn flag_name(key: &str) -> String {
    format!("--{}", key.replace('_', "-"))
}
