//! Declarative code-model builder for loom.
//!
//! Build a tree of declarations, expressions and statements, then lower it
//! to the plain-data target model in [`target`] and render it with
//! [`render::CSharpRenderer`] or serialize it with serde.
//!
//! # Module Organization
//!
//! - [`naming`] - Naming policies applied to emitted identifiers
//! - [`doc`] - Summary, remarks and exception documentation
//! - [`types`] - Type references and host types
//! - [`expr`], [`stmt`] - Expression and statement trees
//! - [`declaration`], [`member`], [`class`] - Declarations and their lowering
//! - [`collections`] - Field map and type collection
//! - [`target`] - The target code model
//! - [`render`] - C# rendering of the target model
//!
//! # Example
//!
//! ```
//! use loom_dom::{CSHARP_NAMING, NamespaceDeclaration, SystemType};
//! use loom_dom::render::CSharpRenderer;
//!
//! let mut ns = NamespaceDeclaration::new("Acme.Model", CSHARP_NAMING.shared()).unwrap();
//! let mut class = ns.class("Customer").unwrap();
//! let field = class.field("name", SystemType::STRING).unwrap();
//! let property = class.property_for_field(&field, true, true, false).unwrap();
//! class.add_field(field).unwrap();
//! class.add_member(property).unwrap();
//! ns.add_class(class).unwrap();
//!
//! let source = CSharpRenderer::default().render_namespace(&ns.lower());
//! assert!(source.contains("public System.String Name"));
//! ```

pub mod class;
pub mod collections;
pub mod declaration;
pub mod doc;
mod error;
pub mod expr;
pub mod member;
pub mod naming;
pub mod render;
pub mod stmt;
pub mod target;
pub mod types;

pub use class::{ClassDeclaration, NamespaceDeclaration};
pub use collections::{FieldDeclarationMap, TypeCollection, TypeEnumerator};
pub use declaration::{CustomAttribute, Declaration, Declared, MemberDeclaration};
pub use doc::{Documentation, ThrownException};
pub use error::{Error, Result};
pub use expr::{
    ArgumentReferenceExpression, CastExpression, Expression, MethodInvokeExpression,
    MethodReferenceExpression,
};
pub use loom_core::{MemberAttributes, Visibility};
pub use member::{
    Accessors, ConstructorDeclaration, EventDeclaration, FieldDeclaration, IndexerDeclaration,
    Member, MethodDeclaration, ParameterDeclaration, PropertyDeclaration, Signature,
};
pub use naming::{CSHARP_NAMING, NameConformer, NamingPolicy, SharedNamingPolicy, Verbatim};
pub use stmt::{IterationStatement, Statement, StatementList};
pub use types::{HostType, HostTypeHandle, SystemType, TypeReference};
