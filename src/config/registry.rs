//! The ordered table of declared options.

use std::collections::HashSet;

use super::defaults;
use super::error::RegistryError;
use super::value::{OptionKind, OptionValue};

/// Declaration of a single option.
///
/// The option's kind is taken from its default value, so a descriptor can
/// never carry a default of the wrong type.
///
/// # Example
///
/// ```
/// use render_opts::config::{OptionKind, OptionSpec};
///
/// let spec = OptionSpec::int("nthreads", 0).with_alias("n");
/// assert_eq!(spec.kind(), OptionKind::Int);
/// assert!(spec.answers_to("n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    name: String,
    aliases: Vec<String>,
    field: String,
    default: OptionValue,
}

impl OptionSpec {
    /// Declares an option with the given canonical name and default value.
    #[must_use]
    pub fn new(name: impl Into<String>, default: OptionValue) -> Self {
        let name = name.into();
        Self {
            field: name.clone(),
            name,
            aliases: Vec::new(),
            default,
        }
    }

    /// Declares an integer option.
    #[must_use]
    pub fn int(name: impl Into<String>, default: i32) -> Self {
        Self::new(name, OptionValue::Int(default))
    }

    /// Declares a string option.
    #[must_use]
    pub fn string(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(name, OptionValue::Str(default.into()))
    }

    /// Declares a boolean option.
    #[must_use]
    pub fn flag(name: impl Into<String>, default: bool) -> Self {
        Self::new(name, OptionValue::Bool(default))
    }

    /// Declares a single-character option.
    #[must_use]
    pub fn character(name: impl Into<String>, default: char) -> Self {
        Self::new(name, OptionValue::Char(default))
    }

    /// Adds an alternate name.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Stores the option under a configuration field other than its name.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternate names, in declaration order.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Configuration field the value is stored under.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Semantic type.
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        self.default.kind()
    }

    /// Default value.
    #[must_use]
    pub const fn default_value(&self) -> &OptionValue {
        &self.default
    }

    /// Returns true if `name` is the canonical name or one of the aliases.
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    /// Canonical name followed by the aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// A registry entry: a declaration plus its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSlot {
    spec: OptionSpec,
    value: OptionValue,
}

impl OptionSlot {
    fn new(spec: OptionSpec) -> Self {
        Self {
            value: spec.default.clone(),
            spec,
        }
    }

    /// The option's declaration.
    #[must_use]
    pub const fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    /// The option's current value.
    #[must_use]
    pub const fn value(&self) -> &OptionValue {
        &self.value
    }

    /// Semantic type.
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        self.spec.kind()
    }
}

/// Ordered table of options.
///
/// Lookups try entries in declaration order and stop at the first one whose
/// canonical name or alias matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    slots: Vec<OptionSlot>,
}

impl Registry {
    /// Builds a registry from option declarations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any name or alias is empty
    /// - Two options share a name or alias
    /// - Two options share a configuration field
    pub fn new<I>(specs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = OptionSpec>,
    {
        let mut names = HashSet::new();
        let mut fields = HashSet::new();
        let mut slots = Vec::new();

        for spec in specs {
            for name in spec.names() {
                if name.is_empty() {
                    return Err(RegistryError::EmptyName);
                }
                if !names.insert(name.to_string()) {
                    return Err(RegistryError::DuplicateName {
                        name: name.to_string(),
                    });
                }
            }

            if !fields.insert(spec.field.clone()) {
                return Err(RegistryError::DuplicateField {
                    field: spec.field.clone(),
                });
            }

            slots.push(OptionSlot::new(spec));
        }

        Ok(Self { slots })
    }

    /// Builds the registry of the renderer's built-in options.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table in [`defaults::options`] declares a name
    /// or field twice.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(defaults::options()).expect("built-in option table must be valid")
    }

    /// Returns the first option answering to `name`, with its index.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<(usize, &OptionSlot)> {
        self.slots
            .iter()
            .enumerate()
            .find(|(_, slot)| slot.spec.answers_to(name))
    }

    /// Returns the entry at `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&OptionSlot> {
        self.slots.get(index)
    }

    /// Returns the entry stored under configuration field `field`.
    #[must_use]
    pub fn by_field(&self, field: &str) -> Option<&OptionSlot> {
        self.slots.iter().find(|slot| slot.spec.field == field)
    }

    /// Replaces the value at `index`.
    ///
    /// Values of a different kind than the slot's declaration are ignored;
    /// the coercer always produces a value of the declared kind.
    pub(crate) fn assign(&mut self, index: usize, value: OptionValue) {
        if let Some(slot) = self.slots.get_mut(index) {
            debug_assert_eq!(slot.kind(), value.kind());
            if slot.kind() == value.kind() {
                slot.value = value;
            }
        }
    }

    /// Iterates over entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionSlot> {
        self.slots.iter()
    }

    /// Number of declared options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no options are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a OptionSlot;
    type IntoIter = std::slice::Iter<'a, OptionSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
