//! Typed option slots shared by export and import requests.
//!
//! Each operation declares a static table of [`OptionSpec`]s. An
//! [`OptionSet`] holds one [`OptionValue`] per entry of that table, so an
//! option is either explicitly set (to `false`, an empty string, ...) or
//! left [`OptionValue::Unset`] and never sent, letting the server apply its
//! own default.

use super::error::{Error, Result};

/// The value held by one option slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionValue {
    #[default]
    Unset,
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl OptionValue {
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    const fn kind(&self) -> Option<OptionKind> {
        match self {
            Self::Unset => None,
            Self::Bool(_) => Some(OptionKind::Bool),
            Self::Str(_) => Some(OptionKind::Str),
            Self::List(_) => Some(OptionKind::List),
        }
    }

    /// Trims strings and list elements and drops empty elements. A blank
    /// string or a list with nothing left becomes `Unset`.
    fn normalized(self) -> Self {
        match self {
            Self::Str(value) => {
                let value = value.trim();
                if value.is_empty() {
                    Self::Unset
                } else {
                    Self::Str(value.to_string())
                }
            }
            Self::List(values) => {
                let values: Vec<String> = values
                    .iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .map(ToString::to_string)
                    .collect();
                if values.is_empty() {
                    Self::Unset
                } else {
                    Self::List(values)
                }
            }
            other => other,
        }
    }

    /// Renders the value for the request body. `None` means the field is omitted.
    pub fn to_wire(&self) -> Option<String> {
        match self {
            Self::Unset => None,
            Self::Bool(enabled) => Some(bool_string(*enabled).to_string()),
            Self::Str(value) => Some(value.clone()),
            Self::List(values) => Some(list_literal(values)),
        }
    }

    /// Parses a raw flag value according to `kind`.
    ///
    /// Booleans accept `1/0/t/f/true/false` in any case, lists are comma
    /// separated. An empty input yields `Unset`.
    pub fn parse(field: &str, kind: OptionKind, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::Unset);
        }
        match kind {
            OptionKind::Bool => parse_bool(raw)
                .map(Self::Bool)
                .ok_or_else(|| Error::invalid(field, format!("expected 0/1, got '{raw}'"))),
            OptionKind::Str => Ok(Self::Str(raw.to_string())),
            OptionKind::List => Ok(Self::List(
                raw.split(',').map(ToString::to_string).collect(),
            )),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<&[&str]> for OptionValue {
    fn from(values: &[&str]) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

/// The value kind an option slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    Str,
    List,
}

/// Static description of one option slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Field name in the request body.
    pub name: &'static str,
    pub kind: OptionKind,
    /// Closed set of accepted values, if the API restricts them.
    pub allowed: Option<&'static [&'static str]>,
}

impl OptionSpec {
    pub const fn bool(name: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Bool,
            allowed: None,
        }
    }

    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Str,
            allowed: None,
        }
    }

    pub const fn list(name: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::List,
            allowed: None,
        }
    }

    pub const fn restricted(self, allowed: &'static [&'static str]) -> Self {
        Self {
            allowed: Some(allowed),
            ..self
        }
    }

    /// Checks kind and closed-set membership of an already normalized value.
    fn validate(&self, value: &OptionValue) -> Result<()> {
        if let Some(kind) = value.kind()
            && kind != self.kind
        {
            return Err(Error::invalid(
                self.name,
                format!("expected a {:?} value, got {kind:?}", self.kind),
            ));
        }
        // The list literal has no escape for its quote character.
        if let OptionValue::List(values) = value
            && let Some(quoted) = values.iter().find(|v| v.contains('\''))
        {
            return Err(Error::invalid(
                self.name,
                format!("list element '{quoted}' must not contain a single quote"),
            ));
        }
        let Some(allowed) = self.allowed else {
            return Ok(());
        };
        let rejected = match value {
            OptionValue::Str(v) => (!allowed.contains(&v.as_str())).then(|| v.clone()),
            OptionValue::List(values) => values
                .iter()
                .find(|v| !allowed.contains(&v.as_str()))
                .cloned(),
            OptionValue::Unset | OptionValue::Bool(_) => None,
        };
        match rejected {
            Some(got) => Err(Error::NotAllowed {
                field: self.name,
                allowed,
                got,
            }),
            None => Ok(()),
        }
    }
}

/// One value slot per entry of a static spec table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    specs: &'static [OptionSpec],
    values: Vec<OptionValue>,
}

impl OptionSet {
    pub fn new(specs: &'static [OptionSpec]) -> Self {
        Self {
            specs,
            values: vec![OptionValue::Unset; specs.len()],
        }
    }

    fn index(&self, name: &str) -> Result<usize> {
        self.specs
            .iter()
            .position(|spec| spec.name == name)
            .ok_or_else(|| Error::invalid(name, "unknown option"))
    }

    /// Validates and stores `value`. On failure the slot keeps its previous value.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<()> {
        let index = self.index(name)?;
        let value = value.into().normalized();
        self.specs[index].validate(&value)?;
        self.values[index] = value;
        Ok(())
    }

    /// Parses a raw string for the named slot and stores it.
    pub fn set_raw(&mut self, name: &str, raw: &str) -> Result<()> {
        let index = self.index(name)?;
        let value = OptionValue::parse(name, self.specs[index].kind, raw)?;
        self.set(name, value)
    }

    pub fn unset(&mut self, name: &str) -> Result<()> {
        let index = self.index(name)?;
        self.values[index] = OptionValue::Unset;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.index(name).ok().map(|index| &self.values[index])
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(OptionValue::is_set)
    }

    /// Set options as wire pairs, in table order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        self.specs
            .iter()
            .zip(&self.values)
            .filter_map(|(spec, value)| value.to_wire().map(|wire| (spec.name, wire)))
    }
}

const fn bool_string(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0" }
}

fn list_literal(values: &[String]) -> String {
    format!("['{}']", values.join("','"))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}
