//! Visibility and modifier flags for declarations.

use serde::Serialize;

/// Access level of a type or member.
///
/// The default is [`Visibility::Private`], the most restrictive level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible everywhere.
    Public,
    /// Visible to the declaring type and its subclasses.
    Protected,
    /// Visible within the same assembly.
    Internal,
    /// Visible to subclasses or within the same assembly.
    ProtectedInternal,
    /// Visible only to the declaring type.
    #[default]
    Private,
}

impl Visibility {
    /// Check if this is a public visibility.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Check if this is a private visibility.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }

    /// The C# keyword(s) for this access level.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::ProtectedInternal => "protected internal",
            Self::Private => "private",
        }
    }
}

/// Visibility plus scope modifiers of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct MemberAttributes {
    /// Access level.
    pub visibility: Visibility,
    /// `static` member.
    pub is_static: bool,
    /// `abstract` member.
    pub is_abstract: bool,
    /// `override` member.
    pub is_override: bool,
    /// `sealed` member or class.
    pub is_sealed: bool,
    /// `const` field.
    pub is_const: bool,
    /// `new` member hiding an inherited one.
    pub is_new: bool,
}

impl MemberAttributes {
    /// Private with no modifiers.
    pub const PRIVATE: Self = Self::with_visibility(Visibility::Private);

    /// Public with no modifiers.
    pub const PUBLIC: Self = Self::with_visibility(Visibility::Public);

    /// Create attributes with the given visibility and no modifiers.
    pub const fn with_visibility(visibility: Visibility) -> Self {
        Self {
            visibility,
            is_static: false,
            is_abstract: false,
            is_override: false,
            is_sealed: false,
            is_const: false,
            is_new: false,
        }
    }

    /// Set the visibility.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark as static.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as abstract.
    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark as override.
    pub fn override_(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// Mark as sealed.
    pub fn sealed(mut self) -> Self {
        self.is_sealed = true;
        self
    }

    /// Mark as const.
    pub fn const_(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// Mark as hiding an inherited member.
    pub fn new_(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Check if the access level is public.
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// Modifier keywords in C# declaration order, visibility first.
    pub fn keywords(&self) -> Vec<&'static str> {
        let mut words = vec![self.visibility.keyword()];
        if self.is_new {
            words.push("new");
        }
        if self.is_const {
            words.push("const");
        } else if self.is_static {
            words.push("static");
        }
        if self.is_abstract {
            words.push("abstract");
        }
        if self.is_sealed {
            words.push("sealed");
        }
        if self.is_override {
            words.push("override");
        }
        words
    }
}

impl From<Visibility> for MemberAttributes {
    fn from(visibility: Visibility) -> Self {
        Self::with_visibility(visibility)
    }
}
