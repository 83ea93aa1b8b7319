//! Text rendering of the target code model.

mod code_builder;
mod csharp;
mod indent;

pub use code_builder::CodeBuilder;
pub use csharp::CSharpRenderer;
pub use indent::Indent;
