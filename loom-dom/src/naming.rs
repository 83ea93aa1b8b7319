//! Naming policies mapping logical names to emitted identifiers.
//!
//! A declaration's own name is its logical key (used for lookups such as the
//! field map); the naming policy decides the identifier that is actually
//! written into the target model. The two may differ.

use std::{fmt, sync::Arc};

use loom_core::{MemberAttributes, to_camel_case, to_pascal_case};

/// Maps a raw name plus member attributes to an emitted identifier.
///
/// Implementations must be pure and deterministic.
pub trait NamingPolicy: fmt::Debug + Send + Sync {
    /// Normalize the name of a member (field, property, method, ...).
    fn normalize_member(&self, name: &str, attributes: MemberAttributes) -> String;

    /// Normalize the name of a type.
    fn normalize_type(&self, name: &str) -> String {
        name.to_string()
    }
}

/// A naming policy shared by every declaration of a build session.
pub type SharedNamingPolicy = Arc<dyn NamingPolicy>;

/// Table-driven naming policy.
///
/// Defines how member names are cased by visibility and which words must
/// be escaped.
#[derive(Clone, Copy)]
pub struct NameConformer {
    /// Transform for non-private members (e.g., "first_name" -> "FirstName").
    pub public_member: fn(&str) -> String,
    /// Transform for private members (e.g., "FirstName" -> "firstName").
    pub private_member: fn(&str) -> String,
    /// Reserved words of the target language.
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "@class").
    pub escape_reserved: fn(&str) -> String,
}

impl NameConformer {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Wrap this conformer for sharing across a declaration tree.
    pub fn shared(self) -> SharedNamingPolicy {
        Arc::new(self)
    }
}

impl fmt::Debug for NameConformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameConformer")
            .field("reserved_words", &self.reserved_words.len())
            .finish_non_exhaustive()
    }
}

impl NamingPolicy for NameConformer {
    /// Names made only of separators (`_`, `-`) have no cased form and are
    /// kept as written.
    fn normalize_member(&self, name: &str, attributes: MemberAttributes) -> String {
        let transformed = if attributes.visibility.is_private() {
            (self.private_member)(name)
        } else {
            (self.public_member)(name)
        };
        if transformed.is_empty() {
            self.safe_name(name)
        } else {
            self.safe_name(&transformed)
        }
    }

    fn normalize_type(&self, name: &str) -> String {
        self.safe_name(name)
    }
}

impl Default for NameConformer {
    fn default() -> Self {
        CSHARP_NAMING
    }
}

fn escape_with_at(name: &str) -> String {
    format!("@{}", name)
}

/// C# naming: PascalCase public members, camelCase private members.
pub const CSHARP_NAMING: NameConformer = NameConformer {
    public_member: to_pascal_case,
    private_member: to_camel_case,
    reserved_words: &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this",
        "throw", "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort",
        "using", "virtual", "void", "volatile", "while",
    ],
    escape_reserved: escape_with_at,
};

/// Identity policy: every name is emitted exactly as declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl Verbatim {
    /// Wrap for sharing across a declaration tree.
    pub fn shared() -> SharedNamingPolicy {
        Arc::new(Self)
    }
}

impl NamingPolicy for Verbatim {
    fn normalize_member(&self, name: &str, _attributes: MemberAttributes) -> String {
        name.to_string()
    }
}
