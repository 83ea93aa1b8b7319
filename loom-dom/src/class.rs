//! Namespaces and classes.

use indexmap::IndexMap;
use loom_core::MemberAttributes;
use tracing::debug;

use crate::{
    collections::{FieldDeclarationMap, TypeCollection},
    declaration::{Declaration, Declared, MemberDeclaration},
    error::{Error, Result, require_name},
    expr::Expression,
    member::{
        ConstructorDeclaration, EventDeclaration, FieldDeclaration, IndexerDeclaration, Member,
        MethodDeclaration, PropertyDeclaration,
    },
    naming::SharedNamingPolicy,
    stmt::Statement,
    target::{CodeNamespace, CodeTypeDeclaration},
    types::{SystemType, TypeReference},
};

/// A class: fields, other members, a base class, and interfaces.
#[derive(Debug, Clone)]
pub struct ClassDeclaration {
    declaration: Declaration,
    namespace: String,
    parent: Option<TypeReference>,
    interfaces: TypeCollection,
    fields: FieldDeclarationMap,
    members: Vec<Member>,
}

impl ClassDeclaration {
    /// Create a public class in `namespace` (may be empty).
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        conformer: SharedNamingPolicy,
    ) -> Result<Self> {
        let mut declaration = Declaration::new(name, conformer)?;
        declaration.set_attributes(MemberAttributes::PUBLIC);
        Ok(Self {
            declaration,
            namespace: namespace.into(),
            parent: None,
            interfaces: TypeCollection::new(),
            fields: FieldDeclarationMap::new(),
            members: Vec::new(),
        })
    }

    /// Name of the enclosing namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Base class, if any.
    pub fn parent(&self) -> Option<&TypeReference> {
        self.parent.as_ref()
    }

    pub fn set_parent(&mut self, parent: impl Into<TypeReference>) {
        self.parent = Some(parent.into());
    }

    pub fn with_parent(mut self, parent: impl Into<TypeReference>) -> Self {
        self.set_parent(parent);
        self
    }

    pub fn interfaces(&self) -> &TypeCollection {
        &self.interfaces
    }

    pub fn interfaces_mut(&mut self) -> &mut TypeCollection {
        &mut self.interfaces
    }

    pub fn fields(&self) -> &FieldDeclarationMap {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldDeclarationMap {
        &mut self.fields
    }

    /// Non-field members in insertion order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// First non-field member with the logical name `name`.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }

    fn bind(&self, name: impl Into<String>) -> Result<MemberDeclaration> {
        MemberDeclaration::new(
            name,
            self.full_name(),
            self.declaration.conformer().clone(),
        )
    }

    /// A private field of this class. Not added until [`ClassDeclaration::add_field`].
    pub fn field(
        &self,
        name: impl Into<String>,
        field_type: impl Into<TypeReference>,
    ) -> Result<FieldDeclaration> {
        Ok(FieldDeclaration::new(self.bind(name)?, field_type))
    }

    /// A public property of this class with no accessors.
    pub fn property(
        &self,
        name: impl Into<String>,
        property_type: impl Into<TypeReference>,
    ) -> Result<PropertyDeclaration> {
        Ok(PropertyDeclaration::new(self.bind(name)?, property_type))
    }

    /// A public property wrapping `field`, with the same logical name.
    ///
    /// The getter returns `this.<field>`, the setter assigns `value` to it.
    /// With `check_non_null` the setter first throws
    /// `ArgumentNullException` when `value` is null and documents it.
    pub fn property_for_field(
        &self,
        field: &FieldDeclaration,
        get: bool,
        set: bool,
        check_non_null: bool,
    ) -> Result<PropertyDeclaration> {
        let mut property = self.property(field.name(), field.field_type().clone())?;
        let storage = || Expression::this().field(field.declaration().emitted_name());

        if get {
            property.get_mut().ret(storage());
        }
        if set {
            if check_non_null {
                property.set_mut().push(Statement::if_(
                    Expression::value().identity_eq(Expression::null()),
                    [Statement::throw(Expression::new_object(
                        SystemType::ARGUMENT_NULL_EXCEPTION,
                        [Expression::string("value")],
                    ))],
                ));
                property
                    .accessors_mut()
                    .add_set_exception(SystemType::ARGUMENT_NULL_EXCEPTION, "value is null");
            }
            property.set_mut().assign(storage(), Expression::value());
        }
        Ok(property)
    }

    /// A public event of this class.
    pub fn event(
        &self,
        name: impl Into<String>,
        event_type: impl Into<TypeReference>,
    ) -> Result<EventDeclaration> {
        Ok(EventDeclaration::new(self.bind(name)?, event_type))
    }

    /// A public void method of this class.
    pub fn method(&self, name: impl Into<String>) -> Result<MethodDeclaration> {
        Ok(MethodDeclaration::new(self.bind(name)?))
    }

    /// A public indexer of this class.
    pub fn indexer(&self, item_type: impl Into<TypeReference>) -> Result<IndexerDeclaration> {
        Ok(IndexerDeclaration::new(
            self.bind(IndexerDeclaration::NAME)?,
            item_type,
        ))
    }

    /// A public parameterless constructor of this class.
    pub fn constructor(&self) -> Result<ConstructorDeclaration> {
        Ok(ConstructorDeclaration::new(
            self.bind(self.declaration.name())?,
        ))
    }

    /// Add a field to the field map.
    ///
    /// Fails with a duplicate key when the field's logical name is taken, or
    /// when its emitted name clashes with another member's.
    pub fn add_field(&mut self, field: FieldDeclaration) -> Result<&mut FieldDeclaration> {
        self.check_owner(field.declaring_type(), field.name())?;
        if !self.fields.contains(field.name()) {
            self.check_emitted_name(&field.declaration().emitted_name(), false)?;
        }
        self.fields.add(field)
    }

    /// Add any member. Fields go to the field map, the rest keep insertion order.
    ///
    /// Methods may share an emitted name with other methods. Any other clash
    /// of emitted names is a duplicate key.
    pub fn add_member(&mut self, member: impl Into<Member>) -> Result<()> {
        let member: Member = member.into();
        match member {
            Member::Field(field) => self.add_field(field).map(|_| ()),
            member => {
                self.check_owner(member.declaring_type(), member.name())?;
                if let Some(emitted) = member.emitted_name() {
                    self.check_emitted_name(&emitted, matches!(member, Member::Method(_)))?;
                }
                self.members.push(member);
                Ok(())
            }
        }
    }

    fn check_emitted_name(&self, emitted: &str, is_method: bool) -> Result<()> {
        let field_clash = self
            .fields
            .values()
            .any(|field| field.declaration().emitted_name() == emitted);
        let member_clash = self.members.iter().any(|member| {
            let overload = is_method && matches!(member, Member::Method(_));
            !overload && member.emitted_name().as_deref() == Some(emitted)
        });
        if field_clash || member_clash {
            Err(Error::duplicate_key(emitted, "class"))
        } else {
            Ok(())
        }
    }

    fn check_owner(&self, owner: &str, member: &str) -> Result<()> {
        let target = self.full_name();
        if owner == target {
            Ok(())
        } else {
            Err(Error::ForeignMember {
                member: member.to_string(),
                owner: owner.to_string(),
                target,
            })
        }
    }

    /// Lower to a target class: fields first, then the other members.
    pub fn lower(&self) -> CodeTypeDeclaration {
        debug!(
            class = %self.full_name(),
            fields = self.fields.len(),
            members = self.members.len(),
            "lowering class"
        );
        let base_types = self
            .parent
            .iter()
            .chain(self.interfaces.iter())
            .map(TypeReference::resolve)
            .collect();
        let members = self
            .fields
            .values()
            .map(FieldDeclaration::lower)
            .chain(self.members.iter().map(Member::lower))
            .collect();

        CodeTypeDeclaration {
            name: self
                .declaration
                .conformer()
                .normalize_type(self.declaration.name()),
            attributes: self.declaration.attributes(),
            comments: self.declaration.doc().lower(),
            custom_attributes: self.declaration.lower_custom_attributes(),
            base_types,
            members,
        }
    }
}

impl Declared for ClassDeclaration {
    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn declaration_mut(&mut self) -> &mut Declaration {
        &mut self.declaration
    }

    fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.declaration.name().to_string()
        } else {
            format!("{}.{}", self.namespace, self.declaration.name())
        }
    }
}

/// A namespace: imports and uniquely named classes.
#[derive(Debug, Clone)]
pub struct NamespaceDeclaration {
    name: String,
    conformer: SharedNamingPolicy,
    imports: Vec<String>,
    classes: IndexMap<String, ClassDeclaration>,
}

impl NamespaceDeclaration {
    pub fn new(name: impl Into<String>, conformer: SharedNamingPolicy) -> Result<Self> {
        Ok(Self {
            name: require_name("namespace", name)?,
            conformer,
            imports: Vec::new(),
            classes: IndexMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conformer(&self) -> &SharedNamingPolicy {
        &self.conformer
    }

    /// Import a namespace. Repeated imports are ignored.
    pub fn add_import(&mut self, import: impl Into<String>) {
        let import = import.into();
        if !self.imports.contains(&import) {
            self.imports.push(import);
        }
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// A class in this namespace. Not added until [`NamespaceDeclaration::add_class`].
    pub fn class(&self, name: impl Into<String>) -> Result<ClassDeclaration> {
        ClassDeclaration::new(name, self.name.clone(), self.conformer.clone())
    }

    /// Add a class created for this namespace. Class names are unique.
    pub fn add_class(&mut self, class: ClassDeclaration) -> Result<&mut ClassDeclaration> {
        if class.namespace() != self.name {
            return Err(Error::ForeignMember {
                member: class.name().to_string(),
                owner: class.namespace().to_string(),
                target: self.name.clone(),
            });
        }
        let key = class.name().to_string();
        if self.classes.contains_key(&key) {
            return Err(Error::duplicate_key(key, "namespace"));
        }
        debug!(namespace = %self.name, class = %key, "adding class");
        Ok(self.classes.entry(key).or_insert(class))
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.classes.values()
    }

    pub fn class_named(&self, name: &str) -> Option<&ClassDeclaration> {
        self.classes.get(name)
    }

    pub fn class_named_mut(&mut self, name: &str) -> Option<&mut ClassDeclaration> {
        self.classes.get_mut(name)
    }

    /// Lower every class, in insertion order.
    pub fn lower(&self) -> CodeNamespace {
        CodeNamespace {
            name: self.name.clone(),
            imports: self.imports.clone(),
            types: self.classes.values().map(ClassDeclaration::lower).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        naming::CSHARP_NAMING,
        target::{CodeExpression, CodeMemberKind, CodeStatement},
    };

    fn namespace() -> NamespaceDeclaration {
        NamespaceDeclaration::new("Acme.Model", CSHARP_NAMING.shared()).unwrap()
    }

    #[test]
    fn test_class_full_name_and_reference() {
        let class = namespace().class("Customer").unwrap();
        assert_eq!(class.full_name(), "Acme.Model.Customer");
        assert_eq!(class.type_reference().name(), "Customer");
        assert!(class.declaration().attributes().is_public());
    }

    #[test]
    fn test_fields_lower_before_members() {
        let mut class = namespace().class("Customer").unwrap();
        let method = class.method("Validate").unwrap();
        class.add_member(method).unwrap();
        let field = class.field("name", SystemType::STRING).unwrap();
        class.add_member(field).unwrap();

        let lowered = class.lower();
        let names: Vec<_> = lowered.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["name", "Validate"]);
        assert_eq!(class.fields().len(), 1);
        assert_eq!(class.members().len(), 1);
    }

    #[test]
    fn test_base_types_parent_first() {
        let mut class = namespace()
            .class("Orders")
            .unwrap()
            .with_parent(SystemType::COLLECTION_BASE);
        class.interfaces_mut().add(TypeReference::named("IDisposable"));

        let bases: Vec<_> = class
            .lower()
            .base_types
            .into_iter()
            .map(|t| t.base_type)
            .collect();
        assert_eq!(bases, vec!["System.Collections.CollectionBase", "IDisposable"]);
    }

    #[test]
    fn test_foreign_member_rejected() {
        let ns = namespace();
        let customer = ns.class("Customer").unwrap();
        let mut order = ns.class("Order").unwrap();

        let method = customer.method("Save").unwrap();
        let err = order.add_member(method).unwrap_err();
        assert!(matches!(err, Error::ForeignMember { .. }));
        assert!(order.members().is_empty());
    }

    #[test]
    fn test_emitted_name_clash_rejected() {
        let mut class = namespace().class("Customer").unwrap();
        let first = class.field("first_name", SystemType::STRING).unwrap();
        class.add_field(first).unwrap();

        let second = class.field("firstName", SystemType::STRING).unwrap();
        let err = class.add_field(second).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateKey { ref key, container: "class" } if key == "firstName"
        ));
        assert_eq!(class.fields().len(), 1);

        let property = class.property("FirstName", SystemType::STRING).unwrap();
        class.add_member(property).unwrap();
        let event = class.event("first_name", SystemType::EVENT_HANDLER).unwrap();
        assert!(class.add_member(event).unwrap_err().is_duplicate_key());
        assert_eq!(class.members().len(), 1);
    }

    #[test]
    fn test_methods_may_overload() {
        let mut class = namespace().class("Customer").unwrap();
        let save = class.method("Save").unwrap();
        class.add_member(save).unwrap();
        let overload = class.method("save").unwrap();
        class.add_member(overload).unwrap();
        assert_eq!(class.members().len(), 2);

        let property = class.property("Save", SystemType::BOOLEAN).unwrap();
        assert!(class.add_member(property).unwrap_err().is_duplicate_key());
    }

    #[test]
    fn test_property_for_field_with_null_check() {
        let mut class = namespace().class("Customer").unwrap();
        let field = class.field("name", SystemType::STRING).unwrap();
        let property = class.property_for_field(&field, true, true, true).unwrap();
        class.add_field(field).unwrap();

        let lowered = property.lower();
        assert_eq!(lowered.name, "Name");
        let CodeMemberKind::Property {
            has_get,
            has_set,
            get_statements,
            set_statements,
            ..
        } = lowered.kind
        else {
            panic!("expected property");
        };
        assert!(has_get && has_set);
        assert!(matches!(
            &get_statements[0],
            CodeStatement::MethodReturn(Some(CodeExpression::FieldReference { field_name, .. }))
                if field_name == "name"
        ));
        assert_eq!(set_statements.len(), 2);
        assert!(matches!(set_statements[0], CodeStatement::Condition { .. }));
        assert!(lowered
            .comments
            .iter()
            .any(|c| c.text.contains("set property, value is null")));
    }

    #[test]
    fn test_read_only_property_for_field() {
        let class = namespace().class("Customer").unwrap();
        let field = class.field("id", SystemType::INT32).unwrap();
        let property = class.property_for_field(&field, true, false, false).unwrap();
        assert!(property.accessors().has_get());
        assert!(!property.accessors().has_set());
    }

    #[test]
    fn test_duplicate_class_rejected() {
        let mut ns = namespace();
        let first = ns.class("Customer").unwrap();
        ns.add_class(first).unwrap();
        let second = ns.class("Customer").unwrap();
        assert!(ns.add_class(second).unwrap_err().is_duplicate_key());
        assert_eq!(ns.classes().count(), 1);
    }

    #[test]
    fn test_namespace_lowering() {
        let mut ns = namespace();
        ns.add_import("System");
        ns.add_import("System");
        let class = ns.class("Customer").unwrap();
        let ctor = class.constructor().unwrap();
        ns.add_class(class).unwrap().add_member(ctor).unwrap();

        let lowered = ns.lower();
        assert_eq!(lowered.imports, vec!["System"]);
        let customer = lowered.find_type("Customer").unwrap();
        assert!(customer.find_member("Customer").is_some());
    }
}
