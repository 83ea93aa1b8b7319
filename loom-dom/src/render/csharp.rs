//! C# text rendering of the target code model.

use super::{CodeBuilder, Indent};
use crate::target::{
    CodeAttribute, CodeComment, CodeExpression, CodeLiteral, CodeMember, CodeMemberKind,
    CodeNamespace, CodeParameter, CodeStatement, CodeTypeDeclaration,
};

/// Renders lowered namespaces as C# source.
///
/// Braces go on their own line and members are separated by a blank line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer {
    indent: Indent,
}

impl CSharpRenderer {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    /// Render a namespace with its imports and types.
    pub fn render_namespace(&self, namespace: &CodeNamespace) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        for import in &namespace.imports {
            builder.push_line(&format!("using {};", import));
        }
        if !namespace.imports.is_empty() {
            builder.push_blank();
        }
        builder.push_line(&format!("namespace {}", namespace.name)).push_open();
        for (i, ty) in namespace.types.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            self.write_type(&mut builder, ty);
        }
        builder.push_close();
        builder.build()
    }

    /// Render a single class.
    pub fn render_type(&self, ty: &CodeTypeDeclaration) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        self.write_type(&mut builder, ty);
        builder.build()
    }

    /// Render an expression.
    pub fn render_expression(&self, expr: &CodeExpression) -> String {
        match expr {
            CodeExpression::Cast {
                target_type,
                expression,
            } => format!(
                "(({})({}))",
                target_type.base_type,
                self.render_expression(expression)
            ),
            CodeExpression::MethodReference {
                target,
                method_name,
            } => format!("{}.{}", self.render_expression(target), method_name),
            CodeExpression::MethodInvoke { method, arguments } => format!(
                "{}({})",
                self.render_expression(method),
                self.render_list(arguments)
            ),
            CodeExpression::ArgumentReference { parameter_name } => parameter_name.clone(),
            CodeExpression::ThisReference => "this".to_string(),
            CodeExpression::PropertySetValueReference => "value".to_string(),
            CodeExpression::PropertyReference {
                target,
                property_name: name,
            }
            | CodeExpression::FieldReference {
                target,
                field_name: name,
            } => format!("{}.{}", self.render_expression(target), name),
            CodeExpression::Indexer { target, indices } => format!(
                "{}[{}]",
                self.render_expression(target),
                self.render_list(indices)
            ),
            CodeExpression::Primitive(literal) => render_literal(literal),
            CodeExpression::VariableReference { variable_name } => variable_name.clone(),
            CodeExpression::BinaryOperator {
                left,
                operator,
                right,
            } => format!(
                "({} {} {})",
                self.render_expression(left),
                operator.token(),
                self.render_expression(right)
            ),
            CodeExpression::ObjectCreate {
                create_type,
                arguments,
            } => format!(
                "new {}({})",
                create_type.base_type,
                self.render_list(arguments)
            ),
        }
    }

    fn render_list(&self, exprs: &[CodeExpression]) -> String {
        exprs
            .iter()
            .map(|e| self.render_expression(e))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn write_type(&self, b: &mut CodeBuilder, ty: &CodeTypeDeclaration) {
        write_comments(b, &ty.comments);
        self.write_custom_attributes(b, &ty.custom_attributes);
        let mut header = format!("{} class {}", ty.attributes.keywords().join(" "), ty.name);
        if !ty.base_types.is_empty() {
            let bases: Vec<_> = ty.base_types.iter().map(|t| t.base_type.as_str()).collect();
            header.push_str(" : ");
            header.push_str(&bases.join(", "));
        }
        b.push_line(&header).push_open();
        for (i, member) in ty.members.iter().enumerate() {
            if i > 0 {
                b.push_blank();
            }
            self.write_member(b, member);
        }
        b.push_close();
    }

    fn write_custom_attributes(&self, b: &mut CodeBuilder, attributes: &[CodeAttribute]) {
        for attribute in attributes {
            let args: Vec<_> = attribute
                .arguments
                .iter()
                .map(|arg| match &arg.name {
                    Some(name) => format!("{} = {}", name, self.render_expression(&arg.value)),
                    None => self.render_expression(&arg.value),
                })
                .collect();
            if args.is_empty() {
                b.push_line(&format!("[{}]", attribute.attribute_type.base_type));
            } else {
                b.push_line(&format!(
                    "[{}({})]",
                    attribute.attribute_type.base_type,
                    args.join(", ")
                ));
            }
        }
    }

    fn write_member(&self, b: &mut CodeBuilder, member: &CodeMember) {
        write_comments(b, &member.comments);
        self.write_custom_attributes(b, &member.custom_attributes);
        let modifiers = member.attributes.keywords().join(" ");

        match &member.kind {
            CodeMemberKind::Field { field_type, init } => match init {
                Some(init) => b.push_line(&format!(
                    "{} {} {} = {};",
                    modifiers,
                    field_type.base_type,
                    member.name,
                    self.render_expression(init)
                )),
                None => b.push_line(&format!(
                    "{} {} {};",
                    modifiers, field_type.base_type, member.name
                )),
            },
            CodeMemberKind::Property {
                property_type,
                has_get,
                has_set,
                get_statements,
                set_statements,
            } => {
                b.push_line(&format!(
                    "{} {} {}",
                    modifiers, property_type.base_type, member.name
                ));
                self.write_accessors(
                    b,
                    (*has_get).then_some(get_statements.as_slice()),
                    (*has_set).then_some(set_statements.as_slice()),
                )
            }
            CodeMemberKind::Indexer {
                item_type,
                parameters,
                has_get,
                has_set,
                get_statements,
                set_statements,
            } => {
                b.push_line(&format!(
                    "{} {} this[{}]",
                    modifiers,
                    item_type.base_type,
                    render_parameters(parameters)
                ));
                self.write_accessors(
                    b,
                    (*has_get).then_some(get_statements.as_slice()),
                    (*has_set).then_some(set_statements.as_slice()),
                )
            }
            CodeMemberKind::Event { event_type } => b.push_line(&format!(
                "{} event {} {};",
                modifiers, event_type.base_type, member.name
            )),
            CodeMemberKind::Method {
                return_type,
                parameters,
                statements,
            } => {
                let return_type = return_type
                    .as_ref()
                    .map_or("void", |t| t.base_type.as_str());
                b.push_line(&format!(
                    "{} {} {}({})",
                    modifiers,
                    return_type,
                    member.name,
                    render_parameters(parameters)
                ));
                self.write_body(b, statements)
            }
            CodeMemberKind::Constructor {
                parameters,
                base_arguments,
                statements,
            } => {
                b.push_line(&format!(
                    "{} {}({})",
                    modifiers,
                    member.name,
                    render_parameters(parameters)
                ));
                if !base_arguments.is_empty() {
                    b.push_indent()
                        .push_line(&format!(": base({})", self.render_list(base_arguments)))
                        .push_dedent();
                }
                self.write_body(b, statements)
            }
        };
    }

    fn write_accessors<'b>(
        &self,
        b: &'b mut CodeBuilder,
        get: Option<&[CodeStatement]>,
        set: Option<&[CodeStatement]>,
    ) -> &'b mut CodeBuilder {
        b.push_open();
        if let Some(statements) = get {
            b.push_line("get");
            self.write_body(b, statements);
        }
        if let Some(statements) = set {
            b.push_line("set");
            self.write_body(b, statements);
        }
        b.push_close()
    }

    fn write_body<'b>(
        &self,
        b: &'b mut CodeBuilder,
        statements: &[CodeStatement],
    ) -> &'b mut CodeBuilder {
        b.push_open();
        for statement in statements {
            self.write_statement(b, statement);
        }
        b.push_close()
    }

    fn write_statement(&self, b: &mut CodeBuilder, statement: &CodeStatement) {
        match statement {
            CodeStatement::Iteration {
                init,
                test,
                increment,
                statements,
            } => {
                let init = init.as_deref().map(|s| self.render_inline(s));
                let increment = increment.as_deref().map(|s| self.render_inline(s));
                b.push_line(&format!(
                    "for ({}; {}; {})",
                    init.unwrap_or_default(),
                    self.render_expression(test),
                    increment.unwrap_or_default()
                ));
                self.write_body(b, statements);
            }
            CodeStatement::Condition {
                condition,
                true_statements,
                false_statements,
            } => {
                b.push_line(&format!("if ({})", self.render_expression(condition)));
                self.write_body(b, true_statements);
                if !false_statements.is_empty() {
                    b.push_line("else");
                    self.write_body(b, false_statements);
                }
            }
            CodeStatement::MethodReturn(None) => {
                b.push_line("return;");
            }
            CodeStatement::MethodReturn(Some(value)) => {
                b.push_line(&format!("return {};", self.render_expression(value)));
            }
            CodeStatement::ThrowException(exception) => {
                b.push_line(&format!("throw {};", self.render_expression(exception)));
            }
            CodeStatement::Comment(comment) => {
                write_comments(b, std::slice::from_ref(comment));
            }
            simple => {
                b.push_line(&format!("{};", self.render_inline(simple)));
            }
        }
    }

    /// A statement as it appears inside a `for` header, without the semicolon.
    fn render_inline(&self, statement: &CodeStatement) -> String {
        match statement {
            CodeStatement::Expression(expr) => self.render_expression(expr),
            CodeStatement::Assign { left, right } => format!(
                "{} = {}",
                self.render_expression(left),
                self.render_expression(right)
            ),
            CodeStatement::VariableDeclaration {
                variable_type,
                name,
                init: Some(init),
            } => format!(
                "{} {} = {}",
                variable_type.base_type,
                name,
                self.render_expression(init)
            ),
            CodeStatement::VariableDeclaration {
                variable_type,
                name,
                init: None,
            } => format!("{} {}", variable_type.base_type, name),
            CodeStatement::MethodReturn(_)
            | CodeStatement::Iteration { .. }
            | CodeStatement::Condition { .. }
            | CodeStatement::ThrowException(_)
            | CodeStatement::Comment(_) => String::new(),
        }
    }
}

fn write_comments(b: &mut CodeBuilder, comments: &[CodeComment]) {
    for comment in comments {
        let prefix = if comment.doc { "///" } else { "//" };
        b.push_comment(prefix, &comment.text);
    }
}

fn render_parameters(parameters: &[CodeParameter]) -> String {
    parameters
        .iter()
        .map(|p| {
            if p.by_ref {
                format!("ref {} {}", p.parameter_type.base_type, p.name)
            } else {
                format!("{} {}", p.parameter_type.base_type, p.name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_literal(literal: &CodeLiteral) -> String {
    match literal {
        CodeLiteral::Null => "null".to_string(),
        CodeLiteral::Bool(v) => v.to_string(),
        CodeLiteral::Int(v) => v.to_string(),
        CodeLiteral::String(s) => {
            let mut out = String::with_capacity(s.len() + 2);
            out.push('"');
            for c in s.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    '\u{85}' | '\u{2028}' | '\u{2029}' => {
                        out.push_str(&format!("\\u{:04x}", u32::from(c)));
                    }
                    c => out.push(c),
                }
            }
            out.push('"');
            out
        }
    }
}
