//! The declaration base shared by classes and members.

use std::fmt;

use loom_core::MemberAttributes;

use crate::{
    doc::Documentation,
    error::{Result, require_name},
    expr::Expression,
    naming::SharedNamingPolicy,
    target::{CodeAttribute, CodeAttributeArgument, CodeMember, CodeMemberKind},
    types::TypeReference,
};

/// A custom attribute node, e.g. `[Serializable]` or `[Category("Data")]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAttribute {
    attribute_type: TypeReference,
    arguments: Vec<(Option<String>, Expression)>,
}

impl CustomAttribute {
    /// Create an attribute with no arguments.
    pub fn new(attribute_type: impl Into<TypeReference>) -> Self {
        Self {
            attribute_type: attribute_type.into(),
            arguments: Vec::new(),
        }
    }

    /// Add a positional argument.
    pub fn arg(mut self, value: Expression) -> Self {
        self.arguments.push((None, value));
        self
    }

    /// Add a named argument.
    pub fn named(mut self, name: impl Into<String>, value: Expression) -> Self {
        self.arguments.push((Some(name.into()), value));
        self
    }

    /// Lower to a target attribute.
    pub fn lower(&self) -> CodeAttribute {
        CodeAttribute {
            attribute_type: self.attribute_type.resolve(),
            arguments: self
                .arguments
                .iter()
                .map(|(name, value)| CodeAttributeArgument {
                    name: name.clone(),
                    value: value.lower(),
                })
                .collect(),
        }
    }
}

/// A named, documented, attributed node.
///
/// The name is fixed at construction and is the logical key of the
/// declaration; the naming policy decides the emitted identifier.
#[derive(Clone)]
pub struct Declaration {
    name: String,
    conformer: SharedNamingPolicy,
    doc: Documentation,
    attributes: MemberAttributes,
    custom_attributes: Vec<CustomAttribute>,
}

impl Declaration {
    /// Create a declaration with default (private) attributes.
    pub fn new(name: impl Into<String>, conformer: SharedNamingPolicy) -> Result<Self> {
        Ok(Self {
            name: require_name("name", name)?,
            conformer,
            doc: Documentation::new(),
            attributes: MemberAttributes::default(),
            custom_attributes: Vec::new(),
        })
    }

    /// The logical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The naming policy.
    pub fn conformer(&self) -> &SharedNamingPolicy {
        &self.conformer
    }

    /// Documentation.
    pub fn doc(&self) -> &Documentation {
        &self.doc
    }

    /// Documentation, for editing.
    pub fn doc_mut(&mut self) -> &mut Documentation {
        &mut self.doc
    }

    /// Visibility and modifiers.
    pub fn attributes(&self) -> MemberAttributes {
        self.attributes
    }

    /// Replace visibility and modifiers.
    pub fn set_attributes(&mut self, attributes: MemberAttributes) {
        self.attributes = attributes;
    }

    /// Custom attributes in insertion order.
    pub fn custom_attributes(&self) -> &[CustomAttribute] {
        &self.custom_attributes
    }

    /// Append a custom attribute.
    pub fn add_custom_attribute(&mut self, attribute: CustomAttribute) {
        self.custom_attributes.push(attribute);
    }

    /// The identifier this declaration is emitted under as a member.
    pub fn emitted_name(&self) -> String {
        self.conformer.normalize_member(&self.name, self.attributes)
    }

    /// Lower the common member metadata around kind-specific data.
    pub(crate) fn lower_member(&self, kind: CodeMemberKind) -> CodeMember {
        self.lower_member_with_doc(&self.doc, kind)
    }

    /// Like [`Declaration::lower_member`], with documentation prepared by the caller.
    pub(crate) fn lower_member_with_doc(
        &self,
        doc: &Documentation,
        kind: CodeMemberKind,
    ) -> CodeMember {
        CodeMember {
            name: self.emitted_name(),
            attributes: self.attributes,
            comments: doc.lower(),
            custom_attributes: self.lower_custom_attributes(),
            kind,
        }
    }

    pub(crate) fn lower_custom_attributes(&self) -> Vec<CodeAttribute> {
        self.custom_attributes
            .iter()
            .map(CustomAttribute::lower)
            .collect()
    }
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("doc", &self.doc)
            .field("custom_attributes", &self.custom_attributes)
            .finish_non_exhaustive()
    }
}

/// Access to the [`Declaration`] part of a node, with builder helpers.
pub trait Declared {
    /// The declaration data.
    fn declaration(&self) -> &Declaration;

    /// The declaration data, for editing.
    fn declaration_mut(&mut self) -> &mut Declaration;

    /// The logical name.
    fn name(&self) -> &str {
        self.declaration().name()
    }

    /// The full name. Defaults to the logical name.
    fn full_name(&self) -> String {
        self.name().to_string()
    }

    /// A reference to this declaration as a type.
    fn type_reference(&self) -> TypeReference {
        TypeReference::Declared(self.full_name())
    }

    /// Documentation, for editing.
    fn doc_mut(&mut self) -> &mut Documentation {
        self.declaration_mut().doc_mut()
    }

    /// Set the documentation summary.
    fn with_summary(mut self, text: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.doc_mut().set_summary(text);
        self
    }

    /// Set visibility and modifiers.
    fn with_attributes(mut self, attributes: impl Into<MemberAttributes>) -> Self
    where
        Self: Sized,
    {
        self.declaration_mut().set_attributes(attributes.into());
        self
    }

    /// Append a custom attribute.
    fn with_custom_attribute(mut self, attribute: CustomAttribute) -> Self
    where
        Self: Sized,
    {
        self.declaration_mut().add_custom_attribute(attribute);
        self
    }
}

impl Declared for Declaration {
    fn declaration(&self) -> &Declaration {
        self
    }

    fn declaration_mut(&mut self) -> &mut Declaration {
        self
    }
}

/// A declaration owned by a type.
///
/// Records the declaring type's full name as a lookup key; there is no
/// pointer back into the owning class.
#[derive(Debug, Clone)]
pub struct MemberDeclaration {
    declaration: Declaration,
    declaring_type: String,
}

impl MemberDeclaration {
    /// Create a member of `declaring_type`.
    pub fn new(
        name: impl Into<String>,
        declaring_type: impl Into<String>,
        conformer: SharedNamingPolicy,
    ) -> Result<Self> {
        Ok(Self {
            declaration: Declaration::new(name, conformer)?,
            declaring_type: require_name("declaring_type", declaring_type)?,
        })
    }

    /// Full name of the declaring type.
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }
}

impl Declared for MemberDeclaration {
    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn declaration_mut(&mut self) -> &mut Declaration {
        &mut self.declaration
    }

    fn full_name(&self) -> String {
        format!("{}.{}", self.declaring_type, self.declaration.name())
    }
}

#[cfg(test)]
mod tests {
    use loom_core::Visibility;

    use super::*;
    use crate::naming::{CSHARP_NAMING, Verbatim};

    #[test]
    fn test_requires_name() {
        let err = Declaration::new("", Verbatim::shared()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_defaults() {
        let decl = Declaration::new("count", Verbatim::shared()).unwrap();
        assert_eq!(decl.name(), "count");
        assert_eq!(decl.full_name(), "count");
        assert_eq!(decl.attributes(), MemberAttributes::PRIVATE);
        assert!(decl.doc().is_empty());
        assert!(decl.custom_attributes().is_empty());
    }

    #[test]
    fn test_emitted_name_differs_from_logical_name() {
        let decl = Declaration::new("item_count", CSHARP_NAMING.shared())
            .unwrap()
            .with_attributes(Visibility::Public);
        assert_eq!(decl.name(), "item_count");
        assert_eq!(decl.emitted_name(), "ItemCount");
    }

    #[test]
    fn test_member_full_name() {
        let member = MemberDeclaration::new("Add", "Acme.Bag", Verbatim::shared()).unwrap();
        assert_eq!(member.declaring_type(), "Acme.Bag");
        assert_eq!(member.full_name(), "Acme.Bag.Add");
        assert_eq!(
            member.type_reference(),
            TypeReference::Declared("Acme.Bag.Add".into())
        );
    }

    #[test]
    fn test_custom_attribute_lowering() {
        let attr = CustomAttribute::new(TypeReference::named("Category"))
            .arg(Expression::string("Data"))
            .named("Order", Expression::int(1));
        let lowered = attr.lower();
        assert_eq!(lowered.attribute_type.base_type, "Category");
        assert_eq!(lowered.arguments.len(), 2);
        assert_eq!(lowered.arguments[1].name.as_deref(), Some("Order"));
    }
}
