//! The target code model that lowering produces.
//!
//! These nodes are plain data: lowering builds them once and hands them to
//! a consumer (a renderer, a serializer, a compiler front end). Nothing in
//! the declaration tree keeps a reference into them.

use loom_core::MemberAttributes;
use serde::Serialize;

/// A reference to a type by its emitted name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CodeTypeReference {
    /// Fully qualified or simple type name.
    pub base_type: String,
}

impl CodeTypeReference {
    /// Create a type reference.
    pub fn new(base_type: impl Into<String>) -> Self {
        Self {
            base_type: base_type.into(),
        }
    }
}

/// A comment attached to a member or emitted as a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeComment {
    /// Comment text, one line.
    pub text: String,
    /// Whether this is a documentation comment.
    pub doc: bool,
}

impl CodeComment {
    /// Create a plain comment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            doc: false,
        }
    }

    /// Create a documentation comment.
    pub fn doc(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            doc: true,
        }
    }
}

/// A custom attribute applied to a declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeAttribute {
    /// Attribute type.
    pub attribute_type: CodeTypeReference,
    /// Arguments in order.
    pub arguments: Vec<CodeAttributeArgument>,
}

/// An attribute argument, positional when `name` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeAttributeArgument {
    /// Argument name for named arguments.
    pub name: Option<String>,
    /// Argument value.
    pub value: CodeExpression,
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeLiteral {
    /// `null`.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// String literal.
    String(String),
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeBinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    IdentityEquality,
    IdentityInequality,
    ValueEquality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    BooleanAnd,
    BooleanOr,
}

impl CodeBinaryOperator {
    /// The C# token for this operator.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulus => "%",
            Self::IdentityEquality | Self::ValueEquality => "==",
            Self::IdentityInequality => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::BooleanAnd => "&&",
            Self::BooleanOr => "||",
        }
    }
}

/// Target expression nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeExpression {
    /// `((T)(expression))`.
    Cast {
        target_type: CodeTypeReference,
        expression: Box<CodeExpression>,
    },
    /// `target.method`, the callee of an invocation.
    MethodReference {
        target: Box<CodeExpression>,
        method_name: String,
    },
    /// `method(arguments)`.
    MethodInvoke {
        method: Box<CodeExpression>,
        arguments: Vec<CodeExpression>,
    },
    /// A reference to a method parameter.
    ArgumentReference { parameter_name: String },
    /// `this`.
    ThisReference,
    /// The implicit `value` of a property setter.
    PropertySetValueReference,
    /// `target.property`.
    PropertyReference {
        target: Box<CodeExpression>,
        property_name: String,
    },
    /// `target.field`.
    FieldReference {
        target: Box<CodeExpression>,
        field_name: String,
    },
    /// `target[indices]`.
    Indexer {
        target: Box<CodeExpression>,
        indices: Vec<CodeExpression>,
    },
    /// A literal.
    Primitive(CodeLiteral),
    /// A local variable.
    VariableReference { variable_name: String },
    /// `(left op right)`.
    BinaryOperator {
        left: Box<CodeExpression>,
        operator: CodeBinaryOperator,
        right: Box<CodeExpression>,
    },
    /// `new T(arguments)`.
    ObjectCreate {
        create_type: CodeTypeReference,
        arguments: Vec<CodeExpression>,
    },
}

/// Target statement nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeStatement {
    /// An expression evaluated for its side effects.
    Expression(CodeExpression),
    /// `left = right;`.
    Assign {
        left: CodeExpression,
        right: CodeExpression,
    },
    /// `return;` or `return expression;`.
    MethodReturn(Option<CodeExpression>),
    /// `for (init; test; increment) { statements }`.
    Iteration {
        init: Option<Box<CodeStatement>>,
        test: CodeExpression,
        increment: Option<Box<CodeStatement>>,
        statements: Vec<CodeStatement>,
    },
    /// `T name = init;`.
    VariableDeclaration {
        variable_type: CodeTypeReference,
        name: String,
        init: Option<CodeExpression>,
    },
    /// `if (condition) { ... } else { ... }`.
    Condition {
        condition: CodeExpression,
        true_statements: Vec<CodeStatement>,
        false_statements: Vec<CodeStatement>,
    },
    /// `throw expression;`.
    ThrowException(CodeExpression),
    /// A comment line.
    Comment(CodeComment),
}

/// A method, constructor, or indexer parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeParameter {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub parameter_type: CodeTypeReference,
    /// Passed by reference.
    pub by_ref: bool,
}

/// A type member with its common metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeMember {
    /// Emitted member name.
    pub name: String,
    /// Visibility and modifiers.
    pub attributes: MemberAttributes,
    /// Documentation and comments, in order.
    pub comments: Vec<CodeComment>,
    /// Custom attributes, in order.
    pub custom_attributes: Vec<CodeAttribute>,
    /// Kind-specific data.
    pub kind: CodeMemberKind,
}

/// Kind-specific member data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CodeMemberKind {
    Field {
        field_type: CodeTypeReference,
        init: Option<CodeExpression>,
    },
    Property {
        property_type: CodeTypeReference,
        has_get: bool,
        has_set: bool,
        get_statements: Vec<CodeStatement>,
        set_statements: Vec<CodeStatement>,
    },
    Indexer {
        item_type: CodeTypeReference,
        parameters: Vec<CodeParameter>,
        has_get: bool,
        has_set: bool,
        get_statements: Vec<CodeStatement>,
        set_statements: Vec<CodeStatement>,
    },
    Event {
        event_type: CodeTypeReference,
    },
    Method {
        return_type: Option<CodeTypeReference>,
        parameters: Vec<CodeParameter>,
        statements: Vec<CodeStatement>,
    },
    Constructor {
        parameters: Vec<CodeParameter>,
        base_arguments: Vec<CodeExpression>,
        statements: Vec<CodeStatement>,
    },
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeTypeDeclaration {
    /// Emitted class name.
    pub name: String,
    /// Visibility and modifiers.
    pub attributes: MemberAttributes,
    /// Documentation and comments.
    pub comments: Vec<CodeComment>,
    /// Custom attributes.
    pub custom_attributes: Vec<CodeAttribute>,
    /// Base class first, then implemented interfaces.
    pub base_types: Vec<CodeTypeReference>,
    /// Members in emission order.
    pub members: Vec<CodeMember>,
}

/// A namespace with its imports and types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeNamespace {
    /// Namespace name.
    pub name: String,
    /// Imported namespaces.
    pub imports: Vec<String>,
    /// Types in declaration order.
    pub types: Vec<CodeTypeDeclaration>,
}

impl CodeNamespace {
    /// Find a type by emitted name.
    pub fn find_type(&self, name: &str) -> Option<&CodeTypeDeclaration> {
        self.types.iter().find(|t| t.name == name)
    }
}

impl CodeTypeDeclaration {
    /// Find a member by emitted name.
    pub fn find_member(&self, name: &str) -> Option<&CodeMember> {
        self.members.iter().find(|m| m.name == name)
    }
}
