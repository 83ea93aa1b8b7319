//! Expression trees.
//!
//! [`Expression`] is a closed set of variants. Every node owns its children,
//! so a tree is never shared between two parents, and each variant lowers to
//! exactly one [`CodeExpression`].
//!
//! # Example
//!
//! ```
//! use loom_dom::{Expression, TypeReference};
//!
//! // ((Int32)(this.Dictionary[key]))
//! let expr = Expression::this()
//!     .prop("Dictionary")
//!     .item(Expression::var("key"))
//!     .cast(TypeReference::named("Int32"));
//! assert!(matches!(expr, Expression::Cast(_)));
//! ```

use crate::{
    declaration::Declared,
    member::{MethodDeclaration, ParameterDeclaration},
    target::{CodeBinaryOperator, CodeExpression, CodeLiteral},
    types::TypeReference,
};

/// `((T)(expression))`.
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpression {
    target_type: TypeReference,
    expression: Box<Expression>,
}

impl CastExpression {
    /// Cast `expression` to `target_type`.
    pub fn new(target_type: impl Into<TypeReference>, expression: Expression) -> Self {
        Self {
            target_type: target_type.into(),
            expression: Box::new(expression),
        }
    }

    /// The type cast to.
    pub fn target_type(&self) -> &TypeReference {
        &self.target_type
    }

    /// The inner expression.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    fn lower(&self) -> CodeExpression {
        CodeExpression::Cast {
            target_type: self.target_type.resolve(),
            expression: Box::new(self.expression.lower()),
        }
    }
}

/// A method on a target expression, ready to be invoked.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodReferenceExpression {
    target: Box<Expression>,
    method_name: String,
}

impl MethodReferenceExpression {
    /// Reference a declared method on `target`.
    ///
    /// The emitted name of the method is captured at this point.
    pub fn new(target: Expression, method: &MethodDeclaration) -> Self {
        Self::named(target, method.declaration().emitted_name())
    }

    /// Reference a method by its emitted name.
    pub fn named(target: Expression, method_name: impl Into<String>) -> Self {
        Self {
            target: Box::new(target),
            method_name: method_name.into(),
        }
    }

    /// The expression the method is called on.
    pub fn target(&self) -> &Expression {
        &self.target
    }

    /// The emitted method name.
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Invoke with no arguments.
    pub fn invoke(self) -> MethodInvokeExpression {
        MethodInvokeExpression {
            method: self,
            arguments: Vec::new(),
        }
    }

    /// Invoke with explicit argument expressions.
    pub fn invoke_with(
        self,
        arguments: impl IntoIterator<Item = Expression>,
    ) -> MethodInvokeExpression {
        MethodInvokeExpression {
            method: self,
            arguments: arguments.into_iter().collect(),
        }
    }

    /// Invoke forwarding each parameter as an argument, in order.
    pub fn invoke_params<'a>(
        self,
        parameters: impl IntoIterator<Item = &'a ParameterDeclaration>,
    ) -> MethodInvokeExpression {
        self.invoke_with(parameters.into_iter().map(Expression::arg))
    }

    fn lower(&self) -> CodeExpression {
        CodeExpression::MethodReference {
            target: Box::new(self.target.lower()),
            method_name: self.method_name.clone(),
        }
    }
}

/// `method(arguments)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodInvokeExpression {
    method: MethodReferenceExpression,
    arguments: Vec<Expression>,
}

impl MethodInvokeExpression {
    /// The invoked method.
    pub fn method(&self) -> &MethodReferenceExpression {
        &self.method
    }

    /// Arguments in order.
    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }

    fn lower(&self) -> CodeExpression {
        CodeExpression::MethodInvoke {
            method: Box::new(self.method.lower()),
            arguments: self.arguments.iter().map(Expression::lower).collect(),
        }
    }
}

/// A reference to a parameter of the enclosing member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentReferenceExpression {
    parameter_name: String,
}

impl ArgumentReferenceExpression {
    /// Reference `parameter`.
    pub fn new(parameter: &ParameterDeclaration) -> Self {
        Self {
            parameter_name: parameter.name().to_string(),
        }
    }

    /// The referenced parameter name.
    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Type cast.
    Cast(CastExpression),
    /// Method reference (the callee of an invocation).
    MethodReference(MethodReferenceExpression),
    /// Method invocation.
    MethodInvoke(MethodInvokeExpression),
    /// Parameter reference.
    ArgumentReference(ArgumentReferenceExpression),
    /// `this`.
    This,
    /// The implicit `value` of a setter.
    Value,
    /// `target.name` for a property.
    PropertyReference {
        /// Owner expression.
        target: Box<Expression>,
        /// Emitted property name.
        name: String,
    },
    /// `target.name` for a field.
    FieldReference {
        /// Owner expression.
        target: Box<Expression>,
        /// Emitted field name.
        name: String,
    },
    /// `target[indices]`.
    Indexer {
        /// Indexed expression.
        target: Box<Expression>,
        /// Index expressions.
        indices: Vec<Expression>,
    },
    /// A literal.
    Primitive(CodeLiteral),
    /// A local variable.
    Variable(String),
    /// `(left op right)`.
    Binary {
        /// Left operand.
        left: Box<Expression>,
        /// Operator.
        operator: CodeBinaryOperator,
        /// Right operand.
        right: Box<Expression>,
    },
    /// `new T(arguments)`.
    ObjectCreate {
        /// Created type.
        create_type: TypeReference,
        /// Constructor arguments.
        arguments: Vec<Expression>,
    },
}

impl Expression {
    /// `this`.
    pub fn this() -> Self {
        Self::This
    }

    /// The setter's `value`.
    pub fn value() -> Self {
        Self::Value
    }

    /// Reference a parameter.
    pub fn arg(parameter: &ParameterDeclaration) -> Self {
        Self::ArgumentReference(ArgumentReferenceExpression::new(parameter))
    }

    /// `null`.
    pub fn null() -> Self {
        Self::Primitive(CodeLiteral::Null)
    }

    /// Boolean literal.
    pub fn bool(v: bool) -> Self {
        Self::Primitive(CodeLiteral::Bool(v))
    }

    /// Integer literal.
    pub fn int(v: i64) -> Self {
        Self::Primitive(CodeLiteral::Int(v))
    }

    /// String literal.
    pub fn string(v: impl Into<String>) -> Self {
        Self::Primitive(CodeLiteral::String(v.into()))
    }

    /// Local variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// `new T(arguments)`.
    pub fn new_object(
        create_type: impl Into<TypeReference>,
        arguments: impl IntoIterator<Item = Expression>,
    ) -> Self {
        Self::ObjectCreate {
            create_type: create_type.into(),
            arguments: arguments.into_iter().collect(),
        }
    }

    /// `self.name` as a property.
    pub fn prop(self, name: impl Into<String>) -> Self {
        Self::PropertyReference {
            target: Box::new(self),
            name: name.into(),
        }
    }

    /// `self.name` as a field.
    pub fn field(self, name: impl Into<String>) -> Self {
        Self::FieldReference {
            target: Box::new(self),
            name: name.into(),
        }
    }

    /// `self[index]`.
    pub fn item(self, index: Expression) -> Self {
        Self::Indexer {
            target: Box::new(self),
            indices: vec![index],
        }
    }

    /// `self.name` as a method to invoke.
    pub fn method(self, name: impl Into<String>) -> MethodReferenceExpression {
        MethodReferenceExpression::named(self, name)
    }

    /// Cast `self` to `target_type`.
    pub fn cast(self, target_type: impl Into<TypeReference>) -> Self {
        Self::Cast(CastExpression::new(target_type, self))
    }

    /// `(self op right)`.
    pub fn binary(self, operator: CodeBinaryOperator, right: Expression) -> Self {
        Self::Binary {
            left: Box::new(self),
            operator,
            right: Box::new(right),
        }
    }

    /// `(self == right)` by reference identity.
    pub fn identity_eq(self, right: Expression) -> Self {
        self.binary(CodeBinaryOperator::IdentityEquality, right)
    }

    /// `(self < right)`.
    pub fn lt(self, right: Expression) -> Self {
        self.binary(CodeBinaryOperator::LessThan, right)
    }

    /// Lower to a target expression.
    pub fn lower(&self) -> CodeExpression {
        match self {
            Self::Cast(cast) => cast.lower(),
            Self::MethodReference(method) => method.lower(),
            Self::MethodInvoke(invoke) => invoke.lower(),
            Self::ArgumentReference(arg) => CodeExpression::ArgumentReference {
                parameter_name: arg.parameter_name.clone(),
            },
            Self::This => CodeExpression::ThisReference,
            Self::Value => CodeExpression::PropertySetValueReference,
            Self::PropertyReference { target, name } => CodeExpression::PropertyReference {
                target: Box::new(target.lower()),
                property_name: name.clone(),
            },
            Self::FieldReference { target, name } => CodeExpression::FieldReference {
                target: Box::new(target.lower()),
                field_name: name.clone(),
            },
            Self::Indexer { target, indices } => CodeExpression::Indexer {
                target: Box::new(target.lower()),
                indices: indices.iter().map(Expression::lower).collect(),
            },
            Self::Primitive(literal) => CodeExpression::Primitive(literal.clone()),
            Self::Variable(name) => CodeExpression::VariableReference {
                variable_name: name.clone(),
            },
            Self::Binary {
                left,
                operator,
                right,
            } => CodeExpression::BinaryOperator {
                left: Box::new(left.lower()),
                operator: *operator,
                right: Box::new(right.lower()),
            },
            Self::ObjectCreate {
                create_type,
                arguments,
            } => CodeExpression::ObjectCreate {
                create_type: create_type.resolve(),
                arguments: arguments.iter().map(Expression::lower).collect(),
            },
        }
    }
}

impl From<CastExpression> for Expression {
    fn from(expr: CastExpression) -> Self {
        Self::Cast(expr)
    }
}

impl From<MethodReferenceExpression> for Expression {
    fn from(expr: MethodReferenceExpression) -> Self {
        Self::MethodReference(expr)
    }
}

impl From<MethodInvokeExpression> for Expression {
    fn from(expr: MethodInvokeExpression) -> Self {
        Self::MethodInvoke(expr)
    }
}

impl From<ArgumentReferenceExpression> for Expression {
    fn from(expr: ArgumentReferenceExpression) -> Self {
        Self::ArgumentReference(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SystemType;

    fn param(name: &str) -> ParameterDeclaration {
        ParameterDeclaration::new(TypeReference::named("Int32"), name).unwrap()
    }

    #[test]
    fn test_cast_lowering() {
        let expr = Expression::this().prop("Dictionary").cast(SystemType::INT32);
        match expr.lower() {
            CodeExpression::Cast {
                target_type,
                expression,
            } => {
                assert_eq!(target_type.base_type, "System.Int32");
                assert!(matches!(*expression, CodeExpression::PropertyReference { .. }));
            }
            other => panic!("expected cast, got {:?}", other),
        }
    }

    #[test]
    fn test_invoke_without_arguments() {
        let call = Expression::this().method("Clear").invoke();
        assert_eq!(call.method().method_name(), "Clear");
        assert!(call.arguments().is_empty());
    }

    #[test]
    fn test_invoke_with_expressions() {
        let call = Expression::this()
            .method("Add")
            .invoke_with([Expression::int(1), Expression::string("a")]);
        assert_eq!(call.arguments().len(), 2);
        assert_eq!(call.arguments()[0], Expression::int(1));
    }

    #[test]
    fn test_invoke_params_preserves_order() {
        let params = [param("a"), param("b"), param("c")];
        let call = Expression::this().method("Forward").invoke_params(&params);

        let names: Vec<&str> = call
            .arguments()
            .iter()
            .map(|arg| match arg {
                Expression::ArgumentReference(r) => r.parameter_name(),
                other => panic!("expected argument reference, got {:?}", other),
            })
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_leaf_lowering() {
        assert_eq!(Expression::this().lower(), CodeExpression::ThisReference);
        assert_eq!(
            Expression::value().lower(),
            CodeExpression::PropertySetValueReference
        );
        assert_eq!(
            Expression::arg(&param("key")).lower(),
            CodeExpression::ArgumentReference {
                parameter_name: "key".into()
            }
        );
    }

    #[test]
    fn test_lowering_is_repeatable() {
        let expr = Expression::this()
            .field("count")
            .lt(Expression::int(10))
            .cast(SystemType::BOOLEAN);
        assert_eq!(expr.lower(), expr.lower());
    }
}
