//! Semantic scope edits applied before color remapping.
//!
//! Each patch targets one rule by `name` in the top-level `settings` array.
//! Patches are conditional on the scope having its expected prior shape, so
//! running them a second time is a no-op. A missing target is drift in the
//! upstream theme, not an error; it only lowers the returned edit count.

use plist::Value;
use tracing::debug;

use crate::error::ConvertError;
use crate::models::ThemeDocument;

/// How a rule's scope string is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeEdit {
    /// Replace the whole scope when it contains (or equals) `expected`.
    Replace {
        /// Scope text that must be present
        expected: &'static str,
        /// New full scope string
        replacement: &'static str,
    },
    /// Replace every occurrence of `from` inside the scope with `to`.
    Substitute {
        /// Substring to rename
        from: &'static str,
        /// New substring
        to: &'static str,
    },
}

impl ScopeEdit {
    /// Returns the edited scope, or `None` when the edit does not apply.
    #[must_use]
    pub fn apply(&self, scope: &str) -> Option<String> {
        match *self {
            Self::Replace {
                expected,
                replacement,
            } => {
                if !scope.contains(expected) || scope == replacement {
                    return None;
                }
                Some(replacement.to_string())
            }
            Self::Substitute { from, to } => {
                if !scope.contains(from) {
                    return None;
                }
                let edited = scope.replace(from, to);
                (edited != scope).then_some(edited)
            }
        }
    }
}

/// A named edit against one rule of the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticPatch {
    /// Value of the rule's `name` field
    pub rule_name: &'static str,
    /// Edit applied to the rule's `scope` field
    pub edit: ScopeEdit,
}

/// The scope edits that turn TwoDark's rules into TwoLight's.
pub const SEMANTIC_PATCHES: [SemanticPatch; 3] = [
    // Classes: also color bare entity names
    SemanticPatch {
        rule_name: "Classes",
        edit: ScopeEdit::Replace {
            expected: "support.class, entity.name.class, entity.name.type.class",
            replacement: "support.class, entity.name.class, entity.name.type.class, entity.name",
        },
    },
    // Headings: exclude the markdown html scope
    SemanticPatch {
        rule_name: "Headings",
        edit: ScopeEdit::Replace {
            expected: "markup.heading punctuation.definition.heading, entity.name.section",
            replacement: "markup.heading punctuation.definition.heading, entity.name.section, markup.heading - text.html.markdown",
        },
    },
    // Json key: follow the renamed JSON grammar scope
    SemanticPatch {
        rule_name: "Json key",
        edit: ScopeEdit::Substitute {
            from: "meta.structure.dictionary.json",
            to: "meta.mapping.key.json",
        },
    },
];

/// Applies [`SEMANTIC_PATCHES`] to the theme's rule list.
///
/// Returns the number of rules edited (0..=3).
pub fn apply_semantic_patches(theme: &mut ThemeDocument) -> Result<usize, ConvertError> {
    apply_patches(theme, &SEMANTIC_PATCHES)
}

/// Applies `patches` in order to the theme's rule list.
///
/// For each patch only the first rule that is actually edited counts; later
/// rules with the same name are left alone.
pub fn apply_patches(
    theme: &mut ThemeDocument,
    patches: &[SemanticPatch],
) -> Result<usize, ConvertError> {
    let rules = theme.settings_mut()?;
    let mut edits = 0;

    for patch in patches {
        let patched = rules
            .iter_mut()
            .filter_map(Value::as_dictionary_mut)
            .any(|rule| {
                if rule.get("name").and_then(Value::as_string) != Some(patch.rule_name) {
                    return false;
                }
                let Some(scope) = rule.get("scope").and_then(Value::as_string) else {
                    return false;
                };
                match patch.edit.apply(scope) {
                    Some(new_scope) => {
                        rule.insert("scope".to_string(), Value::String(new_scope));
                        true
                    }
                    None => false,
                }
            });

        if patched {
            edits += 1;
        } else {
            debug!(rule = patch.rule_name, "semantic patch target not found or already applied");
        }
    }

    Ok(edits)
}
