//! Statement trees.
//!
//! Each [`Statement`] lowers to zero, one, or many [`CodeStatement`]s,
//! appended in order to an output list.

use crate::{
    error::{Error, Result},
    expr::Expression,
    target::{CodeComment, CodeStatement},
    types::TypeReference,
};

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its side effects.
    Expression(Expression),
    /// `left = right;`.
    Assign {
        /// Assigned location.
        left: Expression,
        /// Assigned value.
        right: Expression,
    },
    /// `return;` or `return value;`.
    Return(Option<Expression>),
    /// `for` loop.
    Iteration(IterationStatement),
    /// `T name = init;`.
    Variable {
        /// Variable type.
        variable_type: TypeReference,
        /// Variable name.
        name: String,
        /// Initial value.
        init: Option<Expression>,
    },
    /// `if`/`else`.
    Condition {
        /// Tested expression.
        condition: Expression,
        /// Statements run when true.
        then_branch: StatementList,
        /// Statements run when false.
        else_branch: StatementList,
    },
    /// `throw expression;`.
    Throw(Expression),
    /// A comment line.
    Comment(String),
    /// Statements spliced into the enclosing list.
    Block(StatementList),
}

impl Statement {
    /// Create an expression statement.
    pub fn expr(expression: impl Into<Expression>) -> Self {
        Self::Expression(expression.into())
    }

    /// Create an assignment.
    pub fn assign(left: Expression, right: Expression) -> Self {
        Self::Assign { left, right }
    }

    /// Create a return statement.
    pub fn ret(value: impl Into<Expression>) -> Self {
        Self::Return(Some(value.into()))
    }

    /// Create an empty return statement.
    pub fn ret_void() -> Self {
        Self::Return(None)
    }

    /// Create a variable declaration.
    pub fn var(
        variable_type: impl Into<TypeReference>,
        name: impl Into<String>,
        init: Option<Expression>,
    ) -> Self {
        Self::Variable {
            variable_type: variable_type.into(),
            name: name.into(),
            init,
        }
    }

    /// Create an if statement.
    pub fn if_(condition: Expression, then_branch: impl Into<StatementList>) -> Self {
        Self::Condition {
            condition,
            then_branch: then_branch.into(),
            else_branch: StatementList::new(),
        }
    }

    /// Create an if-else statement.
    pub fn if_else(
        condition: Expression,
        then_branch: impl Into<StatementList>,
        else_branch: impl Into<StatementList>,
    ) -> Self {
        Self::Condition {
            condition,
            then_branch: then_branch.into(),
            else_branch: else_branch.into(),
        }
    }

    /// Create a throw statement.
    pub fn throw(exception: Expression) -> Self {
        Self::Throw(exception)
    }

    /// Create a comment.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    /// Create a block of statements.
    pub fn block(statements: impl Into<StatementList>) -> Self {
        Self::Block(statements.into())
    }

    /// Number of target statements this statement lowers to.
    pub fn lowered_len(&self) -> usize {
        match self {
            Self::Block(list) => list.iter().map(Statement::lowered_len).sum(),
            _ => 1,
        }
    }

    /// Lower into `out`, appending in order.
    pub fn lower_into(&self, out: &mut Vec<CodeStatement>) {
        match self {
            Self::Expression(expr) => out.push(CodeStatement::Expression(expr.lower())),
            Self::Assign { left, right } => out.push(CodeStatement::Assign {
                left: left.lower(),
                right: right.lower(),
            }),
            Self::Return(value) => {
                out.push(CodeStatement::MethodReturn(value.as_ref().map(Expression::lower)))
            }
            Self::Iteration(iteration) => out.push(iteration.lower()),
            Self::Variable {
                variable_type,
                name,
                init,
            } => out.push(CodeStatement::VariableDeclaration {
                variable_type: variable_type.resolve(),
                name: name.clone(),
                init: init.as_ref().map(Expression::lower),
            }),
            Self::Condition {
                condition,
                then_branch,
                else_branch,
            } => out.push(CodeStatement::Condition {
                condition: condition.lower(),
                true_statements: then_branch.lower(),
                false_statements: else_branch.lower(),
            }),
            Self::Throw(expr) => out.push(CodeStatement::ThrowException(expr.lower())),
            Self::Comment(text) => out.push(CodeStatement::Comment(CodeComment::plain(text))),
            Self::Block(list) => list.lower_into(out),
        }
    }

    /// Lower to a fresh list.
    pub fn lower(&self) -> Vec<CodeStatement> {
        let mut out = Vec::with_capacity(self.lowered_len());
        self.lower_into(&mut out);
        out
    }
}

impl From<IterationStatement> for Statement {
    fn from(iteration: IterationStatement) -> Self {
        Self::Iteration(iteration)
    }
}

/// An ordered, append-only statement sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatementList(Vec<Statement>);

impl StatementList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement.
    pub fn push(&mut self, statement: impl Into<Statement>) -> &mut Self {
        self.0.push(statement.into());
        self
    }

    /// Append an expression statement.
    pub fn add(&mut self, expression: impl Into<Expression>) -> &mut Self {
        self.push(Statement::expr(expression))
    }

    /// Append a return statement.
    pub fn ret(&mut self, value: impl Into<Expression>) -> &mut Self {
        self.push(Statement::ret(value))
    }

    /// Append an assignment.
    pub fn assign(&mut self, left: Expression, right: Expression) -> &mut Self {
        self.push(Statement::assign(left, right))
    }

    /// Number of statements (not lowered statements).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the list has no statements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.0.iter()
    }

    /// Lower every statement into `out`, in insertion order.
    pub fn lower_into(&self, out: &mut Vec<CodeStatement>) {
        for statement in &self.0 {
            statement.lower_into(out);
        }
    }

    /// Lower to a fresh list.
    pub fn lower(&self) -> Vec<CodeStatement> {
        let mut out = Vec::new();
        self.lower_into(&mut out);
        out
    }
}

impl From<Vec<Statement>> for StatementList {
    fn from(statements: Vec<Statement>) -> Self {
        Self(statements)
    }
}

impl<const N: usize> From<[Statement; N]> for StatementList {
    fn from(statements: [Statement; N]) -> Self {
        Self(statements.into())
    }
}

impl FromIterator<Statement> for StatementList {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a StatementList {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A `for` loop with optional init and increment clauses.
///
/// Init and increment each lower into a single slot of the target loop, so
/// each must lower to exactly one target statement. This is checked on
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationStatement {
    init: Option<Box<Statement>>,
    test: Expression,
    increment: Option<Box<Statement>>,
    body: StatementList,
}

impl IterationStatement {
    /// Create a loop with an empty body.
    pub fn new(
        init: Option<Statement>,
        test: Expression,
        increment: Option<Statement>,
    ) -> Result<Self> {
        check_clause("init", init.as_ref())?;
        check_clause("increment", increment.as_ref())?;
        Ok(Self {
            init: init.map(Box::new),
            test,
            increment: increment.map(Box::new),
            body: StatementList::new(),
        })
    }

    /// Replace the body.
    pub fn with_body(mut self, body: impl Into<StatementList>) -> Self {
        self.body = body.into();
        self
    }

    /// The init clause.
    pub fn init(&self) -> Option<&Statement> {
        self.init.as_deref()
    }

    /// The loop condition.
    pub fn test(&self) -> &Expression {
        &self.test
    }

    /// The increment clause.
    pub fn increment(&self) -> Option<&Statement> {
        self.increment.as_deref()
    }

    /// The loop body.
    pub fn body(&self) -> &StatementList {
        &self.body
    }

    /// The loop body, for appending statements.
    pub fn body_mut(&mut self) -> &mut StatementList {
        &mut self.body
    }

    fn lower(&self) -> CodeStatement {
        CodeStatement::Iteration {
            init: self.init.as_deref().and_then(lower_clause),
            test: self.test.lower(),
            increment: self.increment.as_deref().and_then(lower_clause),
            statements: self.body.lower(),
        }
    }
}

/// A clause must lower to exactly one statement that a `for` header can
/// hold: an expression or assignment, or in the init a variable declaration.
fn check_clause(clause: &'static str, statement: Option<&Statement>) -> Result<()> {
    let Some(statement) = statement else {
        return Ok(());
    };
    let lowered = statement.lower();
    let [single] = lowered.as_slice() else {
        return Err(Error::AmbiguousLoopClause {
            clause,
            count: lowered.len(),
        });
    };
    match single {
        CodeStatement::Expression(_) | CodeStatement::Assign { .. } => Ok(()),
        CodeStatement::VariableDeclaration { .. } if clause == "init" => Ok(()),
        other => Err(Error::invalid_argument(
            clause,
            format!("{} cannot appear in a loop header", statement_kind(other)),
        )),
    }
}

fn statement_kind(statement: &CodeStatement) -> &'static str {
    match statement {
        CodeStatement::Expression(_) => "an expression",
        CodeStatement::Assign { .. } => "an assignment",
        CodeStatement::VariableDeclaration { .. } => "a variable declaration",
        CodeStatement::MethodReturn(_) => "a return",
        CodeStatement::Iteration { .. } => "a loop",
        CodeStatement::Condition { .. } => "a condition",
        CodeStatement::ThrowException(_) => "a throw",
        CodeStatement::Comment(_) => "a comment",
    }
}

fn lower_clause(statement: &Statement) -> Option<Box<CodeStatement>> {
    statement.lower().into_iter().next().map(Box::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::CodeExpression;

    fn counter_init() -> Statement {
        Statement::var(TypeReference::named("int"), "i", Some(Expression::int(0)))
    }

    fn counter_increment() -> Statement {
        Statement::assign(
            Expression::var("i"),
            Expression::var("i").binary(
                crate::target::CodeBinaryOperator::Add,
                Expression::int(1),
            ),
        )
    }

    #[test]
    fn test_iteration_without_clauses() {
        let test = Expression::var("i").lt(Expression::int(10));
        let mut iteration = IterationStatement::new(None, test, None).unwrap();
        iteration
            .body_mut()
            .push(Statement::comment("first"))
            .push(Statement::comment("second"));

        let lowered = Statement::from(iteration).lower();
        assert_eq!(lowered.len(), 1);
        match &lowered[0] {
            CodeStatement::Iteration {
                init,
                increment,
                statements,
                ..
            } => {
                assert!(init.is_none());
                assert!(increment.is_none());
                assert_eq!(
                    statements,
                    &vec![
                        CodeStatement::Comment(CodeComment::plain("first")),
                        CodeStatement::Comment(CodeComment::plain("second")),
                    ]
                );
            }
            other => panic!("expected iteration, got {:?}", other),
        }
    }

    #[test]
    fn test_iteration_with_clauses() {
        let iteration = IterationStatement::new(
            Some(counter_init()),
            Expression::var("i").lt(Expression::int(10)),
            Some(counter_increment()),
        )
        .unwrap();

        match iteration.lower() {
            CodeStatement::Iteration {
                init: Some(init),
                increment: Some(increment),
                test,
                ..
            } => {
                assert!(matches!(*init, CodeStatement::VariableDeclaration { .. }));
                assert!(matches!(*increment, CodeStatement::Assign { .. }));
                assert!(matches!(test, CodeExpression::BinaryOperator { .. }));
            }
            other => panic!("expected iteration with clauses, got {:?}", other),
        }
    }

    #[test]
    fn test_iteration_rejects_clauses_without_header_form() {
        let test = || Expression::var("i").lt(Expression::int(10));
        let rejected = [
            Statement::comment("x"),
            Statement::ret(Expression::int(0)),
            Statement::throw(Expression::this()),
            Statement::block([Statement::comment("only")]),
        ];
        for clause in rejected {
            let err = IterationStatement::new(Some(clause.clone()), test(), None).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument { argument: "init", .. }));
            let err = IterationStatement::new(None, test(), Some(clause)).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument { argument: "increment", .. }));
        }

        let err = IterationStatement::new(None, test(), Some(counter_init())).unwrap_err();
        assert!(err.is_invalid_argument());

        let wrapped = Statement::block([counter_increment()]);
        assert!(IterationStatement::new(Some(counter_init()), test(), Some(wrapped)).is_ok());
    }

    #[test]
    fn test_iteration_rejects_multi_statement_init() {
        let init = Statement::block([counter_init(), counter_init()]);
        let err = IterationStatement::new(Some(init), Expression::bool(true), None).unwrap_err();
        assert_eq!(
            err,
            Error::AmbiguousLoopClause {
                clause: "init",
                count: 2
            }
        );
    }

    #[test]
    fn test_iteration_rejects_empty_increment() {
        let increment = Statement::block(StatementList::new());
        let err =
            IterationStatement::new(None, Expression::bool(true), Some(increment)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_block_flattens_in_order() {
        let block = Statement::block([
            Statement::comment("a"),
            Statement::block([Statement::comment("b"), Statement::comment("c")]),
            Statement::block(StatementList::new()),
        ]);
        assert_eq!(block.lowered_len(), 3);
        let texts: Vec<String> = block
            .lower()
            .into_iter()
            .map(|s| match s {
                CodeStatement::Comment(c) => c.text,
                other => panic!("expected comment, got {:?}", other),
            })
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_statement_list_helpers() {
        let mut list = StatementList::new();
        list.add(Expression::this().method("Clear").invoke())
            .assign(Expression::var("x"), Expression::int(1))
            .ret(Expression::var("x"));
        assert_eq!(list.len(), 3);

        let lowered = list.lower();
        assert!(matches!(lowered[0], CodeStatement::Expression(_)));
        assert!(matches!(lowered[1], CodeStatement::Assign { .. }));
        assert!(matches!(lowered[2], CodeStatement::MethodReturn(Some(_))));
    }
}
