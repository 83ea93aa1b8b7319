//! Rendering tests for generated template classes.

use std::str::FromStr;

use loom_dom::{
    CSHARP_NAMING, Declared, NamespaceDeclaration, TypeReference, render::CSharpRenderer,
    target::CodeMemberKind,
};
use loom_templates::{DataTemplate, DictionaryTemplate, Error, Manifest, Template};

fn namespace(name: &str) -> NamespaceDeclaration {
    NamespaceDeclaration::new(name, CSHARP_NAMING.shared()).unwrap()
}

#[test]
fn test_dictionary_template_renders() {
    let mut ns = namespace("Acme.Collections");
    let mut template = DictionaryTemplate::new()
        .with_key(TypeReference::named("string"))
        .with_value(TypeReference::named("Int32"));
    template.generate(&mut ns).unwrap();

    let source = CSharpRenderer::default().render_namespace(&ns.lower());
    insta::assert_snapshot!(source, @r"
namespace Acme.Collections
{
    public class stringInt32Dictionary : System.Collections.DictionaryBase
    {
        public stringInt32Dictionary()
        {
        }

        public Int32 this[string key]
        {
            get
            {
                return ((Int32)(this.Dictionary[key]));
            }
            set
            {
                this.Dictionary[key] = value;
            }
        }

        public void Add(string key, Int32 value)
        {
            this.Dictionary.Add(key, value);
        }

        public System.Boolean Contains(string key)
        {
            return this.Dictionary.Contains(key);
        }

        public void Remove(string key)
        {
            this.Dictionary.Remove(key);
        }
    }
}
");
}

#[test]
fn test_dictionary_template_without_value_produces_nothing() {
    let mut ns = namespace("Acme.Collections");
    let mut template = DictionaryTemplate::new().with_key(TypeReference::named("string"));

    let err = template.generate(&mut ns).unwrap_err();
    assert!(err.is_configuration());
    assert!(ns.lower().types.is_empty());
}

#[test]
fn test_data_template_lowers_fields_then_properties() {
    let mut ns = namespace("Acme.Model");
    let mut template = DataTemplate::new()
        .with_name("Order")
        .with_field("id", "Int32")
        .with_field("total", "Decimal");
    template.generate(&mut ns).unwrap();

    let lowered = ns.lower();
    let order = lowered.find_type("OrderData").unwrap();
    let names: Vec<_> = order.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["id", "total", "Id", "Total"]);
    assert!(matches!(order.members[0].kind, CodeMemberKind::Field { .. }));
    assert!(matches!(
        order.members[3].kind,
        CodeMemberKind::Property {
            has_get: true,
            has_set: true,
            ..
        }
    ));
}

#[test]
fn test_manifest_generates_namespace() {
    let manifest = Manifest::from_str(
        r#"
        [namespace]
        name = "Acme.Model"
        imports = ["System", "System.Collections"]

        [[data]]
        name = "Customer"
        [data.fields]
        name = "String"

        [[dictionary]]
        key = "string"
        value = "CustomerData"
        item_set = false
        "#,
    )
    .unwrap();

    let ns = manifest.generate().unwrap();
    let names: Vec<_> = ns.classes().map(|c| c.declaration().name()).collect();
    assert_eq!(names, vec!["CustomerData", "stringCustomerDataDictionary"]);

    let lowered = ns.lower();
    let source = CSharpRenderer::default().render_namespace(&lowered);
    assert!(source.starts_with("using System;\nusing System.Collections;\n\nnamespace Acme.Model\n"));
    assert!(source.contains("public CustomerData this[string key]"));

    let dictionary = lowered.find_type("stringCustomerDataDictionary").unwrap();
    assert!(matches!(
        dictionary.find_member("Item").unwrap().kind,
        CodeMemberKind::Indexer {
            has_get: true,
            has_set: false,
            ..
        }
    ));
}

#[test]
fn test_manifest_missing_data_name_is_generation_error() {
    let manifest = Manifest::from_str(
        r#"
        [namespace]
        name = "Acme.Model"

        [[data]]
        read_only = true
        "#,
    )
    .unwrap();

    let err = manifest.generate().unwrap_err();
    assert!(err.is_generation());
    assert!(err.dom_error().is_some_and(|e| e.is_configuration()));
}

#[test]
fn test_manifest_duplicate_class_is_generation_error() {
    let manifest = Manifest::from_str(
        r#"
        [namespace]
        name = "Acme.Model"

        [[data]]
        name = "Customer"

        [[data]]
        name = "Customer"
        "#,
    )
    .unwrap();

    match *manifest.generate().unwrap_err() {
        Error::Generation { source } => assert!(source.is_duplicate_key()),
        other => panic!("expected generation error, got {:?}", other),
    }
}
