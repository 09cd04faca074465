//! Per-field binding directives.
//!
//! A directive is read from a field's annotation string, a comma-separated
//! list such as `"nickname,required,default=bob"`:
//!
//! - the first token overrides the lookup key (empty keeps the field name),
//! - the token `required` anywhere in the list marks the field required,
//! - the first `default=<value>` token supplies a default.
//!
//! Unknown tokens are ignored.

const REQUIRED: &str = "required";
const DEFAULT_PREFIX: &str = "default=";

/// Parsed form of a field annotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Lookup key override; empty when the annotation names none.
    pub name: &'a str,
    pub required: bool,
    /// Raw default literal, coerced into the field type when applied.
    pub default: Option<&'a str>,
}

impl<'a> Directive<'a> {
    pub fn parse(tag: &'a str) -> Self {
        let mut tokens = tag.split(',');
        let name = tokens.next().unwrap_or_default();

        let mut required = name == REQUIRED;
        let mut default = name.strip_prefix(DEFAULT_PREFIX);
        for token in tokens {
            required |= token == REQUIRED;
            if default.is_none() {
                default = token.strip_prefix(DEFAULT_PREFIX);
            }
        }

        Self {
            name,
            required,
            default: default.filter(|value| !value.is_empty()),
        }
    }

    /// Returns the key to look up for a field declared as `declared`.
    pub fn key(&self, declared: &'a str) -> &'a str {
        if self.name.is_empty() {
            declared
        } else {
            self.name
        }
    }
}
