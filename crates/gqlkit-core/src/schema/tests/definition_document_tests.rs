use crate::loc;
use crate::nullability::NonNullDefaults;
use crate::nullability::NullabilitySource;
use crate::schema::DefinitionFileError;
use crate::schema::SchemaBuildError;
use crate::Schema;
use crate::SchemaBuilder;
use crate::Value;
use std::io::Write;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Box<SchemaBuildError>>;

const ECHO_DOCUMENT: &str = r#"{
    "nonNullDefaults": { "input": false, "output": false },
    "types": [
        {
            "kind": "object",
            "name": "Query",
            "description": "Entry points.",
            "nonNullDefaults": { "input": true, "output": true },
            "fields": [
                {
                    "name": "echo",
                    "type": "String",
                    "args": [
                        { "name": "message", "type": { "nullable": "String" }, "default": "hi" },
                        { "name": "suffix", "type": { "nullable": "String" }, "default": null },
                        { "name": "times", "type": "Int" }
                    ]
                },
                {
                    "name": "legacyEcho",
                    "type": { "nullable": "String" },
                    "deprecationReason": "Use `echo`."
                }
            ]
        },
        {
            "kind": "enum",
            "name": "Mood",
            "values": ["HAPPY", { "name": "GRUMPY", "deprecationReason": "Cheer up." }]
        },
        { "kind": "scalar", "name": "DateTime", "description": "ISO-8601." },
        {
            "kind": "inputObject",
            "name": "EchoOptions",
            "fields": [
                { "name": "mood", "type": "Mood", "default": "HAPPY" },
                { "name": "tags", "type": { "list": { "nonNull": "String" } } }
            ]
        }
    ]
}"#;

fn load(content: &str) -> Result<Schema> {
    Ok(SchemaBuilder::new().load_definition_str(None, content)?.build()?)
}

#[test]
fn documents_declare_every_configuration_layer() -> Result<()> {
    let schema = load(ECHO_DOCUMENT)?;
    let echo = schema.query_type().field("echo").expect("echo field");

    assert_eq!(echo.type_annotation().to_string(), "String!");
    assert_eq!(echo.type_annotation().nullability_source(), NullabilitySource::TypeDefaults);

    let message = echo.parameter("message").expect("message");
    assert_eq!(message.type_annotation().to_string(), "String");
    assert_eq!(
        message.type_annotation().nullability_source(),
        NullabilitySource::ExplicitWrapper,
    );
    assert_eq!(message.default_value(), Some(&Value::from("hi")));

    let times = echo.parameter("times").expect("times");
    assert_eq!(times.type_annotation().to_string(), "Int!");
    assert!(times.is_required());

    let legacy = schema.query_type().field("legacyEcho").expect("legacyEcho field");
    assert_eq!(legacy.deprecation_reason(), Some("Use `echo`."));
    assert!(legacy.type_annotation().nullable());

    let options = schema.get_type("EchoOptions")
        .and_then(|type_| type_.as_input_object())
        .expect("EchoOptions input type");
    assert_eq!(
        options.field("tags").expect("tags").type_annotation().to_string(),
        "[String!]",
    );

    Ok(())
}

#[test]
fn explicit_null_default_is_distinct_from_no_default() -> Result<()> {
    let schema = load(ECHO_DOCUMENT)?;
    let echo = schema.query_type().field("echo").expect("echo field");

    let suffix = echo.parameter("suffix").expect("suffix");
    assert_eq!(suffix.default_value(), Some(&Value::Null));
    assert_eq!(suffix.coerce_input(None), Ok(Some(Value::Null)));

    let times = echo.parameter("times").expect("times");
    assert_eq!(times.default_value(), None);

    Ok(())
}

#[test]
fn definitions_carry_document_locations() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_definition_str(Some(PathBuf::from("echo.json")), ECHO_DOCUMENT)?
        .build()?;
    let echo = schema.query_type().field("echo").expect("echo field");

    assert_eq!(
        schema.query_type().def_location().to_string(),
        "echo.json#/types/0",
    );
    assert_eq!(
        echo.parameter("times").expect("times").def_location().to_string(),
        "echo.json#/types/0/fields/0/args/2",
    );
    assert_eq!(
        echo.type_annotation().ref_location(),
        &loc::SourceLocation::document("echo.json")
            .child("types")
            .child(0)
            .child("fields")
            .child(0)
            .child("type"),
    );

    Ok(())
}

#[test]
fn enum_values_accept_both_forms() -> Result<()> {
    let schema = load(ECHO_DOCUMENT)?;
    let mood = schema.get_type("Mood")
        .and_then(|type_| type_.as_enum())
        .expect("Mood enum");

    assert_eq!(mood.values().len(), 2);
    assert_eq!(
        mood.value("GRUMPY").and_then(|value| value.deprecation_reason()),
        Some("Cheer up."),
    );

    Ok(())
}

#[test]
fn unknown_keys_are_rejected() {
    let result = SchemaBuilder::new().load_definition_str(
        None,
        r#"{ "types": [ { "kind": "scalar", "name": "Url", "format": "uri" } ] }"#,
    );
    assert!(matches!(result, Err(SchemaBuildError::DefinitionParseError { .. })));

    let result = SchemaBuilder::new().load_definition_str(
        None,
        r#"{ "nonNullDefaults": { "inputs": true } }"#,
    );
    assert!(matches!(result, Err(SchemaBuildError::DefinitionParseError { .. })));

    let result = SchemaBuilder::new().load_definition_str(
        None,
        r#"{ "types": [ {
            "kind": "enum",
            "name": "Mood",
            "values": [ { "name": "GRUMPY", "deprecated": "Cheer up." } ]
        } ] }"#,
    );
    assert!(matches!(result, Err(SchemaBuildError::DefinitionParseError { .. })));
}

#[test]
fn unknown_type_kinds_are_rejected() {
    let result = SchemaBuilder::new().load_definition_str(
        None,
        r#"{ "types": [ { "kind": "union", "name": "Thing" } ] }"#,
    );
    assert!(matches!(
        result,
        Err(SchemaBuildError::DefinitionParseError { ref file, .. })
            if file.to_str() == Some("str://0")
    ));
}

#[test]
fn definition_files_are_loaded_from_disk() -> Result<()> {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(ECHO_DOCUMENT.as_bytes()).expect("write temp file");

    let schema = SchemaBuilder::new()
        .load_definition_file(file.path())?
        .build()?;

    assert_eq!(*schema.non_null_defaults(), NonNullDefaults::ALL_NULLABLE);
    assert_eq!(schema.query_type().def_location().file(), Some(file.path()));

    Ok(())
}

#[test]
fn missing_definition_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing_path = dir.path().join("missing.json");

    let result = SchemaBuilder::new().load_definition_file(&missing_path);

    assert_eq!(
        result.err(),
        Some(SchemaBuildError::DefinitionFileReadError(Box::new(
            DefinitionFileError::NotAFile { file_path: missing_path },
        ))),
    );
}

#[test]
fn byte_order_mark_is_ignored() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"\xEF\xBB\xBF").expect("write BOM");
    file.write_all(ECHO_DOCUMENT.as_bytes()).expect("write temp file");

    let schema = SchemaBuilder::new()
        .load_definition_file(file.path())?
        .build()?;
    assert!(schema.query_type().field("echo").is_some());

    Ok(())
}

#[test]
fn non_utf8_definition_file_is_reported() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(&[0x7B, 0xFF, 0x7D]).expect("write temp file");

    let result = SchemaBuilder::new().load_definition_file(file.path());

    assert!(matches!(
        result,
        Err(SchemaBuildError::DefinitionFileReadError(ref err))
            if matches!(**err, DefinitionFileError::InvalidUtf8 { .. })
                && err.file_path() == file.path()
    ));
}
