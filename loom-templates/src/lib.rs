//! Class templates for loom.
//!
//! A [`Template`] adds generated classes to a
//! [`NamespaceDeclaration`](loom_dom::NamespaceDeclaration). Templates can be
//! configured in code or loaded from a TOML [`Manifest`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod data;
mod dictionary;
mod error;
mod manifest;

pub use data::DataTemplate;
pub use dictionary::DictionaryTemplate;
pub use error::{Error, Result, SourceContext};
pub use manifest::{DataConfig, DictionaryConfig, Manifest, NamespaceConfig, parse_manifest};

/// A generator of classes into a namespace.
pub trait Template {
    /// Add the generated classes to `namespace`.
    ///
    /// On error the namespace is left without the class being generated.
    fn generate(
        &mut self,
        namespace: &mut loom_dom::NamespaceDeclaration,
    ) -> loom_dom::Result<()>;
}
