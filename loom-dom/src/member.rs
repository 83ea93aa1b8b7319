//! Member declarations and their lowering.
//!
//! [`Member`] is the closed set of member kinds a class can hold. Lowering
//! is an exhaustive match that fills the common metadata (name, attributes,
//! documentation, custom attributes) and then the kind-specific body.

use loom_core::MemberAttributes;
use tracing::trace;

use crate::{
    declaration::{Declaration, Declared, MemberDeclaration},
    doc::{Documentation, ThrownException},
    error::{Error, Result, require_name},
    expr::Expression,
    stmt::StatementList,
    target::{CodeMember, CodeMemberKind, CodeParameter, CodeStatement},
    types::TypeReference,
};

macro_rules! impl_declared {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Declared for $ty {
                fn declaration(&self) -> &Declaration {
                    self.member.declaration()
                }

                fn declaration_mut(&mut self) -> &mut Declaration {
                    self.member.declaration_mut()
                }

                fn full_name(&self) -> String {
                    self.member.full_name()
                }
            }

            impl $ty {
                /// Full name of the declaring type.
                pub fn declaring_type(&self) -> &str {
                    self.member.declaring_type()
                }
            }
        )+
    };
}

/// A parameter of a method, constructor, or indexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDeclaration {
    name: String,
    parameter_type: TypeReference,
    by_ref: bool,
}

impl ParameterDeclaration {
    /// Create a by-value parameter.
    pub fn new(parameter_type: impl Into<TypeReference>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: require_name("parameter", name)?,
            parameter_type: parameter_type.into(),
            by_ref: false,
        })
    }

    /// Pass this parameter by reference.
    pub fn by_ref(mut self) -> Self {
        self.by_ref = true;
        self
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter type.
    pub fn parameter_type(&self) -> &TypeReference {
        &self.parameter_type
    }

    /// Whether the parameter is passed by reference.
    pub fn is_by_ref(&self) -> bool {
        self.by_ref
    }

    /// Lower to a target parameter.
    pub fn lower(&self) -> CodeParameter {
        CodeParameter {
            name: self.name.clone(),
            parameter_type: self.parameter_type.resolve(),
            by_ref: self.by_ref,
        }
    }
}

/// An ordered parameter list with an optional return type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    parameters: Vec<ParameterDeclaration>,
    return_type: Option<TypeReference>,
}

impl Signature {
    /// Create an empty signature returning nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter and return a copy for building argument references.
    pub fn add_param(
        &mut self,
        parameter_type: impl Into<TypeReference>,
        name: impl Into<String>,
        by_ref: bool,
    ) -> Result<ParameterDeclaration> {
        let mut param = ParameterDeclaration::new(parameter_type, name)?;
        param.by_ref = by_ref;
        self.push(param.clone())?;
        Ok(param)
    }

    /// Append a parameter. Parameter names must be unique.
    pub fn push(&mut self, param: ParameterDeclaration) -> Result<()> {
        if self.parameters.iter().any(|p| p.name == param.name) {
            return Err(Error::duplicate_key(param.name, "signature"));
        }
        self.parameters.push(param);
        Ok(())
    }

    /// Parameters in order.
    pub fn parameters(&self) -> &[ParameterDeclaration] {
        &self.parameters
    }

    /// Return type, `None` for void.
    pub fn return_type(&self) -> Option<&TypeReference> {
        self.return_type.as_ref()
    }

    /// Set the return type.
    pub fn set_return_type(&mut self, return_type: impl Into<TypeReference>) {
        self.return_type = Some(return_type.into());
    }

    fn lower_parameters(&self) -> Vec<CodeParameter> {
        self.parameters
            .iter()
            .map(ParameterDeclaration::lower)
            .collect()
    }
}

/// Get and set bodies with the exceptions each may throw.
///
/// An accessor is present iff its body is non-empty. Only present
/// accessors are emitted, and only their exceptions are documented.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Accessors {
    get: StatementList,
    set: StatementList,
    get_exceptions: Vec<ThrownException>,
    set_exceptions: Vec<ThrownException>,
}

struct LoweredAccessors {
    has_get: bool,
    has_set: bool,
    get_statements: Vec<CodeStatement>,
    set_statements: Vec<CodeStatement>,
}

impl Accessors {
    /// The get body.
    pub fn get(&self) -> &StatementList {
        &self.get
    }

    /// The get body, for appending.
    pub fn get_mut(&mut self) -> &mut StatementList {
        &mut self.get
    }

    /// The set body.
    pub fn set(&self) -> &StatementList {
        &self.set
    }

    /// The set body, for appending.
    pub fn set_mut(&mut self) -> &mut StatementList {
        &mut self.set
    }

    /// Exceptions thrown by the getter.
    pub fn get_exceptions(&self) -> &[ThrownException] {
        &self.get_exceptions
    }

    /// Exceptions thrown by the setter.
    pub fn set_exceptions(&self) -> &[ThrownException] {
        &self.set_exceptions
    }

    /// Document an exception thrown by the getter.
    pub fn add_get_exception(
        &mut self,
        exception_type: impl Into<TypeReference>,
        description: impl Into<String>,
    ) {
        self.get_exceptions
            .push(ThrownException::new(exception_type, description));
    }

    /// Document an exception thrown by the setter.
    pub fn add_set_exception(
        &mut self,
        exception_type: impl Into<TypeReference>,
        description: impl Into<String>,
    ) {
        self.set_exceptions
            .push(ThrownException::new(exception_type, description));
    }

    /// Whether the getter is present.
    pub fn has_get(&self) -> bool {
        !self.get.is_empty()
    }

    /// Whether the setter is present.
    pub fn has_set(&self) -> bool {
        !self.set.is_empty()
    }

    fn lower(&self, doc: &mut Documentation, kind: &str) -> LoweredAccessors {
        let mut lowered = LoweredAccessors {
            has_get: false,
            has_set: false,
            get_statements: Vec::new(),
            set_statements: Vec::new(),
        };
        if self.has_get() {
            for ex in &self.get_exceptions {
                doc.add_exception(
                    ex.exception_type.clone(),
                    format!("get {}, {}", kind, ex.description),
                );
            }
            lowered.get_statements = self.get.lower();
            lowered.has_get = true;
        }
        if self.has_set() {
            for ex in &self.set_exceptions {
                doc.add_exception(
                    ex.exception_type.clone(),
                    format!("set {}, {}", kind, ex.description),
                );
            }
            lowered.set_statements = self.set.lower();
            lowered.has_set = true;
        }
        lowered
    }
}

/// A field.
#[derive(Debug, Clone)]
pub struct FieldDeclaration {
    member: MemberDeclaration,
    field_type: TypeReference,
    init: Option<Expression>,
}

impl FieldDeclaration {
    /// Create a private field.
    pub fn new(member: MemberDeclaration, field_type: impl Into<TypeReference>) -> Self {
        Self {
            member,
            field_type: field_type.into(),
            init: None,
        }
    }

    /// Set the initializer.
    pub fn with_init(mut self, init: Expression) -> Self {
        self.init = Some(init);
        self
    }

    /// Field type.
    pub fn field_type(&self) -> &TypeReference {
        &self.field_type
    }

    /// Initializer, if any.
    pub fn init(&self) -> Option<&Expression> {
        self.init.as_ref()
    }

    /// Lower to a target field.
    pub fn lower(&self) -> CodeMember {
        self.declaration().lower_member(CodeMemberKind::Field {
            field_type: self.field_type.resolve(),
            init: self.init.as_ref().map(Expression::lower),
        })
    }
}

/// A property with optional get and set bodies.
#[derive(Debug, Clone)]
pub struct PropertyDeclaration {
    member: MemberDeclaration,
    property_type: TypeReference,
    accessors: Accessors,
}

impl PropertyDeclaration {
    /// Create a public property with no accessors.
    pub fn new(mut member: MemberDeclaration, property_type: impl Into<TypeReference>) -> Self {
        member
            .declaration_mut()
            .set_attributes(MemberAttributes::PUBLIC);
        Self {
            member,
            property_type: property_type.into(),
            accessors: Accessors::default(),
        }
    }

    /// Property type.
    pub fn property_type(&self) -> &TypeReference {
        &self.property_type
    }

    /// Accessor bodies and exceptions.
    pub fn accessors(&self) -> &Accessors {
        &self.accessors
    }

    /// Accessor bodies and exceptions, for editing.
    pub fn accessors_mut(&mut self) -> &mut Accessors {
        &mut self.accessors
    }

    /// The get body, for appending.
    pub fn get_mut(&mut self) -> &mut StatementList {
        self.accessors.get_mut()
    }

    /// The set body, for appending.
    pub fn set_mut(&mut self) -> &mut StatementList {
        self.accessors.set_mut()
    }

    /// Lower to a target property.
    ///
    /// Exceptions of present accessors are added to a copy of the
    /// documentation; the declaration itself is not modified.
    pub fn lower(&self) -> CodeMember {
        let mut doc = self.declaration().doc().clone();
        let accessors = self.accessors.lower(&mut doc, "property");
        self.declaration().lower_member_with_doc(
            &doc,
            CodeMemberKind::Property {
                property_type: self.property_type.resolve(),
                has_get: accessors.has_get,
                has_set: accessors.has_set,
                get_statements: accessors.get_statements,
                set_statements: accessors.set_statements,
            },
        )
    }
}

/// An indexer (`this[...]`).
#[derive(Debug, Clone)]
pub struct IndexerDeclaration {
    member: MemberDeclaration,
    item_type: TypeReference,
    signature: Signature,
    accessors: Accessors,
}

impl IndexerDeclaration {
    /// Logical name of every indexer.
    pub const NAME: &'static str = "Item";

    /// Create a public indexer with no parameters and no accessors.
    pub fn new(mut member: MemberDeclaration, item_type: impl Into<TypeReference>) -> Self {
        member
            .declaration_mut()
            .set_attributes(MemberAttributes::PUBLIC);
        Self {
            member,
            item_type: item_type.into(),
            signature: Signature::new(),
            accessors: Accessors::default(),
        }
    }

    /// Item type.
    pub fn item_type(&self) -> &TypeReference {
        &self.item_type
    }

    /// Index parameters.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Index parameters, for editing.
    pub fn signature_mut(&mut self) -> &mut Signature {
        &mut self.signature
    }

    /// Accessor bodies and exceptions.
    pub fn accessors(&self) -> &Accessors {
        &self.accessors
    }

    /// Accessor bodies and exceptions, for editing.
    pub fn accessors_mut(&mut self) -> &mut Accessors {
        &mut self.accessors
    }

    /// The get body, for appending.
    pub fn get_mut(&mut self) -> &mut StatementList {
        self.accessors.get_mut()
    }

    /// The set body, for appending.
    pub fn set_mut(&mut self) -> &mut StatementList {
        self.accessors.set_mut()
    }

    /// Lower to a target indexer.
    pub fn lower(&self) -> CodeMember {
        let mut doc = self.declaration().doc().clone();
        let accessors = self.accessors.lower(&mut doc, "indexer");
        self.declaration().lower_member_with_doc(
            &doc,
            CodeMemberKind::Indexer {
                item_type: self.item_type.resolve(),
                parameters: self.signature.lower_parameters(),
                has_get: accessors.has_get,
                has_set: accessors.has_set,
                get_statements: accessors.get_statements,
                set_statements: accessors.set_statements,
            },
        )
    }
}

/// An event.
#[derive(Debug, Clone)]
pub struct EventDeclaration {
    member: MemberDeclaration,
    event_type: TypeReference,
}

impl EventDeclaration {
    /// Create a public event.
    pub fn new(mut member: MemberDeclaration, event_type: impl Into<TypeReference>) -> Self {
        member
            .declaration_mut()
            .set_attributes(MemberAttributes::PUBLIC);
        Self {
            member,
            event_type: event_type.into(),
        }
    }

    /// Event handler type.
    pub fn event_type(&self) -> &TypeReference {
        &self.event_type
    }

    /// Lower to a target event.
    pub fn lower(&self) -> CodeMember {
        self.declaration().lower_member(CodeMemberKind::Event {
            event_type: self.event_type.resolve(),
        })
    }
}

/// A method with a signature and a body.
#[derive(Debug, Clone)]
pub struct MethodDeclaration {
    member: MemberDeclaration,
    signature: Signature,
    body: StatementList,
}

impl MethodDeclaration {
    /// Create a public void method with no parameters.
    pub fn new(mut member: MemberDeclaration) -> Self {
        member
            .declaration_mut()
            .set_attributes(MemberAttributes::PUBLIC);
        Self {
            member,
            signature: Signature::new(),
            body: StatementList::new(),
        }
    }

    /// Parameters and return type.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Parameters and return type, for editing.
    pub fn signature_mut(&mut self) -> &mut Signature {
        &mut self.signature
    }

    /// The body.
    pub fn body(&self) -> &StatementList {
        &self.body
    }

    /// The body, for appending.
    pub fn body_mut(&mut self) -> &mut StatementList {
        &mut self.body
    }

    /// Lower to a target method.
    pub fn lower(&self) -> CodeMember {
        self.declaration().lower_member(CodeMemberKind::Method {
            return_type: self.signature.return_type().map(TypeReference::resolve),
            parameters: self.signature.lower_parameters(),
            statements: self.body.lower(),
        })
    }
}

/// A constructor.
#[derive(Debug, Clone)]
pub struct ConstructorDeclaration {
    member: MemberDeclaration,
    signature: Signature,
    base_arguments: Vec<Expression>,
    body: StatementList,
}

impl ConstructorDeclaration {
    /// Create a public parameterless constructor.
    pub fn new(mut member: MemberDeclaration) -> Self {
        member
            .declaration_mut()
            .set_attributes(MemberAttributes::PUBLIC);
        Self {
            member,
            signature: Signature::new(),
            base_arguments: Vec::new(),
            body: StatementList::new(),
        }
    }

    /// Pass `argument` to the base constructor.
    pub fn with_base_argument(mut self, argument: Expression) -> Self {
        self.base_arguments.push(argument);
        self
    }

    /// Parameters.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Parameters, for editing.
    pub fn signature_mut(&mut self) -> &mut Signature {
        &mut self.signature
    }

    /// The body.
    pub fn body(&self) -> &StatementList {
        &self.body
    }

    /// The body, for appending.
    pub fn body_mut(&mut self) -> &mut StatementList {
        &mut self.body
    }

    /// Lower to a target constructor, named after the declaring class.
    pub fn lower(&self) -> CodeMember {
        let mut member = self.declaration().lower_member(CodeMemberKind::Constructor {
            parameters: self.signature.lower_parameters(),
            base_arguments: self.base_arguments.iter().map(Expression::lower).collect(),
            statements: self.body.lower(),
        });
        member.name = self
            .declaration()
            .conformer()
            .normalize_type(self.declaration().name());
        member
    }
}

impl_declared!(
    FieldDeclaration,
    PropertyDeclaration,
    IndexerDeclaration,
    EventDeclaration,
    MethodDeclaration,
    ConstructorDeclaration,
);

/// Any member a class can hold.
#[derive(Debug, Clone)]
pub enum Member {
    Field(FieldDeclaration),
    Property(PropertyDeclaration),
    Indexer(IndexerDeclaration),
    Event(EventDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
}

impl Member {
    /// The logical member name.
    pub fn name(&self) -> &str {
        self.declared().name()
    }

    /// Full name of the declaring type.
    pub fn declaring_type(&self) -> &str {
        match self {
            Self::Field(m) => m.declaring_type(),
            Self::Property(m) => m.declaring_type(),
            Self::Indexer(m) => m.declaring_type(),
            Self::Event(m) => m.declaring_type(),
            Self::Method(m) => m.declaring_type(),
            Self::Constructor(m) => m.declaring_type(),
        }
    }

    /// The identifier this member is emitted under.
    ///
    /// `None` for constructors and indexers, which take their emitted form
    /// from the class and from `this[...]`.
    pub fn emitted_name(&self) -> Option<String> {
        match self {
            Self::Indexer(_) | Self::Constructor(_) => None,
            member => Some(member.declared().emitted_name()),
        }
    }

    /// Short label of the member kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::Property(_) => "property",
            Self::Indexer(_) => "indexer",
            Self::Event(_) => "event",
            Self::Method(_) => "method",
            Self::Constructor(_) => "constructor",
        }
    }

    fn declared(&self) -> &Declaration {
        match self {
            Self::Field(m) => m.declaration(),
            Self::Property(m) => m.declaration(),
            Self::Indexer(m) => m.declaration(),
            Self::Event(m) => m.declaration(),
            Self::Method(m) => m.declaration(),
            Self::Constructor(m) => m.declaration(),
        }
    }

    /// Lower to a target member.
    pub fn lower(&self) -> CodeMember {
        trace!(kind = self.kind(), name = self.name(), "lowering member");
        match self {
            Self::Field(m) => m.lower(),
            Self::Property(m) => m.lower(),
            Self::Indexer(m) => m.lower(),
            Self::Event(m) => m.lower(),
            Self::Method(m) => m.lower(),
            Self::Constructor(m) => m.lower(),
        }
    }
}

macro_rules! impl_from_member {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Member {
                fn from(member: $ty) -> Self {
                    Self::$variant(member)
                }
            }
        )+
    };
}

impl_from_member!(
    Field => FieldDeclaration,
    Property => PropertyDeclaration,
    Indexer => IndexerDeclaration,
    Event => EventDeclaration,
    Method => MethodDeclaration,
    Constructor => ConstructorDeclaration,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        naming::{CSHARP_NAMING, Verbatim},
        target::{CodeComment, CodeExpression},
        types::SystemType,
    };

    fn member(name: &str) -> MemberDeclaration {
        MemberDeclaration::new(name, "Acme.Customer", CSHARP_NAMING.shared()).unwrap()
    }

    fn exception_lines(member: &CodeMember) -> Vec<&str> {
        member
            .comments
            .iter()
            .map(|c| c.text.as_str())
            .filter(|t| t.starts_with("<exception"))
            .collect()
    }

    #[test]
    fn test_field_lowering() {
        let field = FieldDeclaration::new(member("FirstName"), TypeReference::named("String"))
            .with_summary("The first name.");
        let lowered = field.lower();

        assert_eq!(lowered.name, "firstName");
        assert_eq!(lowered.attributes, MemberAttributes::PRIVATE);
        assert_eq!(lowered.comments[0], CodeComment::doc("<summary>"));
        match lowered.kind {
            CodeMemberKind::Field { field_type, init } => {
                assert_eq!(field_type.base_type, "String");
                assert!(init.is_none());
            }
            other => panic!("expected field, got {:?}", other),
        }
    }

    #[test]
    fn test_property_get_only() {
        let mut property = PropertyDeclaration::new(member("name"), TypeReference::named("String"));
        property
            .get_mut()
            .ret(Expression::this().field("name"));
        property
            .accessors_mut()
            .add_get_exception(SystemType::ARGUMENT_NULL_EXCEPTION, "name is unset");
        property
            .accessors_mut()
            .add_set_exception(SystemType::ARGUMENT_NULL_EXCEPTION, "value is null");

        let lowered = property.lower();
        assert_eq!(lowered.name, "Name");
        assert_eq!(
            exception_lines(&lowered),
            vec![
                "<exception cref=\"System.ArgumentNullException\">get property, name is unset</exception>"
            ]
        );
        match lowered.kind {
            CodeMemberKind::Property {
                has_get,
                has_set,
                get_statements,
                set_statements,
                ..
            } => {
                assert!(has_get);
                assert!(!has_set);
                assert_eq!(get_statements.len(), 1);
                assert!(set_statements.is_empty());
            }
            other => panic!("expected property, got {:?}", other),
        }
    }

    #[test]
    fn test_property_without_accessors_is_inert() {
        let property = PropertyDeclaration::new(member("name"), TypeReference::named("String"));
        let lowered = property.lower();
        assert!(lowered.comments.is_empty());
        assert!(matches!(
            lowered.kind,
            CodeMemberKind::Property {
                has_get: false,
                has_set: false,
                ..
            }
        ));
    }

    #[test]
    fn test_property_lowering_does_not_touch_documentation() {
        let mut property = PropertyDeclaration::new(member("name"), TypeReference::named("String"));
        property.set_mut().assign(Expression::this().field("name"), Expression::value());
        property
            .accessors_mut()
            .add_set_exception(SystemType::ARGUMENT_NULL_EXCEPTION, "value is null");

        let first = property.lower();
        let second = property.lower();
        assert_eq!(first, second);
        assert_eq!(exception_lines(&first).len(), 1);
        assert!(property.declaration().doc().exceptions().is_empty());
    }

    #[test]
    fn test_event_defaults_to_public() {
        let event = EventDeclaration::new(member("changed"), SystemType::EVENT_HANDLER);
        let lowered = event.lower();
        assert_eq!(lowered.name, "Changed");
        assert!(lowered.attributes.is_public());
        assert_eq!(
            lowered.kind,
            CodeMemberKind::Event {
                event_type: crate::target::CodeTypeReference::new("System.EventHandler")
            }
        );
    }

    #[test]
    fn test_method_signature_order() {
        let mut method = MethodDeclaration::new(member("Add"));
        let key = method
            .signature_mut()
            .add_param(TypeReference::named("string"), "key", false)
            .unwrap();
        let value = method
            .signature_mut()
            .add_param(TypeReference::named("Int32"), "value", true)
            .unwrap();
        method
            .body_mut()
            .add(Expression::this().method("Store").invoke_params([&key, &value]));

        let lowered = method.lower();
        match lowered.kind {
            CodeMemberKind::Method {
                return_type,
                parameters,
                statements,
            } => {
                assert!(return_type.is_none());
                let names: Vec<_> = parameters.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, vec!["key", "value"]);
                assert!(!parameters[0].by_ref);
                assert!(parameters[1].by_ref);
                assert!(matches!(
                    &statements[0],
                    CodeStatement::Expression(CodeExpression::MethodInvoke { arguments, .. })
                        if arguments.len() == 2
                ));
            }
            other => panic!("expected method, got {:?}", other),
        }
    }

    #[test]
    fn test_signature_rejects_duplicate_parameter() {
        let mut signature = Signature::new();
        signature
            .add_param(TypeReference::named("int"), "x", false)
            .unwrap();
        let err = signature
            .add_param(TypeReference::named("int"), "x", false)
            .unwrap_err();
        assert!(err.is_duplicate_key());
        assert_eq!(signature.parameters().len(), 1);
    }

    #[test]
    fn test_parameter_requires_name() {
        assert!(ParameterDeclaration::new(TypeReference::named("int"), "").is_err());
    }

    #[test]
    fn test_indexer_exceptions_use_indexer_prefix() {
        let mut indexer = IndexerDeclaration::new(
            MemberDeclaration::new(IndexerDeclaration::NAME, "Bag", Verbatim::shared()).unwrap(),
            TypeReference::named("Int32"),
        );
        let key = indexer
            .signature_mut()
            .add_param(TypeReference::named("string"), "key", false)
            .unwrap();
        indexer
            .get_mut()
            .ret(Expression::this().prop("Dictionary").item(Expression::arg(&key)));
        indexer
            .accessors_mut()
            .add_get_exception(TypeReference::named("KeyNotFoundException"), "missing key");

        let lowered = indexer.lower();
        assert_eq!(
            exception_lines(&lowered),
            vec!["<exception cref=\"KeyNotFoundException\">get indexer, missing key</exception>"]
        );
        assert!(matches!(
            lowered.kind,
            CodeMemberKind::Indexer {
                has_get: true,
                has_set: false,
                ref parameters,
                ..
            } if parameters.len() == 1
        ));
    }

    #[test]
    fn test_constructor_named_after_class() {
        let ctor = ConstructorDeclaration::new(member("Customer"))
            .with_base_argument(Expression::int(16));
        let lowered = ctor.lower();
        assert_eq!(lowered.name, "Customer");
        assert!(matches!(
            lowered.kind,
            CodeMemberKind::Constructor { ref base_arguments, .. } if base_arguments.len() == 1
        ));
    }

    #[test]
    fn test_member_enum_dispatch() {
        let member: Member = MethodDeclaration::new(member("Clear")).into();
        assert_eq!(member.kind(), "method");
        assert_eq!(member.name(), "Clear");
        assert_eq!(member.declaring_type(), "Acme.Customer");
        assert_eq!(member.lower().name, "Clear");
    }
}
