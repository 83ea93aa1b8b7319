//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use tracing::debug;

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

/// Default manifest filename.
pub(crate) const DEFAULT_FILENAME: &str = "loom.toml";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a manifest file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a manifest from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate_manifest(&manifest, ParseContext::new(&source))?;
    debug!(
        filename,
        data = manifest.data.len(),
        dictionary = manifest.dictionary.len(),
        "parsed manifest"
    );
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: ParseContext<'_>) -> Result<()> {
    ctx.validate_type_name(&manifest.namespace.name, "namespace")?;
    for import in &manifest.namespace.imports {
        ctx.validate_type_name(import, "import")?;
    }

    for data in &manifest.data {
        if let Some(name) = &data.name {
            ctx.validate_name(name, "data class")?;
        }
        let data_ctx = ctx.within(data.name.as_deref().unwrap_or("data"));
        for (field, type_name) in &data.fields {
            data_ctx.validate_name(field, "field")?;
            data_ctx.validate_type_name(type_name, "field type")?;
        }
    }

    for dictionary in &manifest.dictionary {
        if let Some(key) = &dictionary.key {
            ctx.validate_type_name(key, "key type")?;
        }
        if let Some(value) = &dictionary.value {
            ctx.validate_type_name(value, "value type")?;
        }
        if !(dictionary.item_get
            || dictionary.item_set
            || dictionary.add
            || dictionary.contains
            || dictionary.remove)
        {
            return Err(ctx.source_context().validation_error(
                "dictionary template has every member disabled",
                dictionary.key.as_deref().and_then(|k| ctx.find_span(k)),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let manifest: Manifest = r#"
            [namespace]
            name = "Acme.Model"
        "#
        .parse()
        .unwrap();
        assert_eq!(manifest.namespace.name, "Acme.Model");
        assert!(manifest.namespace.imports.is_empty());
        assert_eq!(manifest.template_count(), 0);
    }

    #[test]
    fn test_dictionary_toggles_default_true() {
        let manifest: Manifest = r#"
            [namespace]
            name = "Acme"

            [[dictionary]]
            key = "string"
            value = "Int32"
            remove = false
        "#
        .parse()
        .unwrap();
        let dictionary = &manifest.dictionary[0];
        assert!(dictionary.item_get && dictionary.item_set);
        assert!(dictionary.add && dictionary.contains);
        assert!(!dictionary.remove);
    }

    #[test]
    fn test_data_fields() {
        let manifest: Manifest = r#"
            [namespace]
            name = "Acme"

            [[data]]
            name = "Customer"
            read_only = true

            [data.fields]
            id = "Int32"
            email = "System.String"
        "#
        .parse()
        .unwrap();
        let data = &manifest.data[0];
        assert!(data.read_only);
        assert_eq!(data.fields.len(), 2);
        assert_eq!(data.fields["email"], "System.String");
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Manifest::from_str_with_filename("[namespace\nname = 1", "bad.toml").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Manifest::from_str(
            r#"
            [namespace]
            name = "Acme"
            colour = "blue"
        "#,
        );
        assert!(matches!(result.map_err(|e| *e), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_invalid_field_name() {
        let err = Manifest::from_str(
            r#"
            [namespace]
            name = "Acme"

            [[data]]
            name = "Customer"
            fields = { "first-name" = "String" }
        "#,
        )
        .unwrap_err();
        match *err {
            Error::InvalidIdentifier { name, context, span, .. } => {
                assert_eq!(name, "first-name");
                assert_eq!(context, "field in 'Customer'");
                assert!(span.is_some());
            }
            other => panic!("expected invalid identifier, got {:?}", other),
        }
    }

    #[test]
    fn test_separator_only_field_name_rejected() {
        let err = Manifest::from_str(
            r#"
            [namespace]
            name = "Acme"

            [[data]]
            name = "Customer"
            [data.fields]
            _ = "Int32"
        "#,
        )
        .unwrap_err();
        match *err {
            Error::InvalidIdentifier { name, context, .. } => {
                assert_eq!(name, "_");
                assert_eq!(context, "field in 'Customer'");
            }
            other => panic!("expected invalid identifier, got {:?}", other),
        }
    }

    #[test]
    fn test_dotted_namespace_segments_validated() {
        assert!(Manifest::from_str("[namespace]\nname = \"Acme..Model\"").is_err());
        assert!(Manifest::from_str("[namespace]\nname = \"Acme.Model\"").is_ok());
    }

    #[test]
    fn test_all_members_disabled() {
        let err = Manifest::from_str(
            r#"
            [namespace]
            name = "Acme"

            [[dictionary]]
            key = "string"
            value = "Int32"
            item_get = false
            item_set = false
            add = false
            contains = false
            remove = false
        "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Manifest::from_file("/nonexistent/loom.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
