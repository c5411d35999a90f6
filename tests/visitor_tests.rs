// tests/visitor_tests.rs

use std::collections::HashMap;

use lucene2sql::{as_string, translate_to_sql, used_columns, AliasResolver, Schema, Statement};

fn translate(query: &str) -> Statement {
    let fields = vec!["title".to_string(), "text".to_string()];
    translate_to_sql(query, &fields, &Schema::default())
}

// ============================================================================
// Alias resolution
// ============================================================================

#[test]
fn test_aliases_rewrite_column_refs() {
    let mut aliases = HashMap::new();
    aliases.insert("title".to_string(), "doc_title".to_string());
    let resolver = AliasResolver::new(aliases);

    let statement = resolver.rewrite(&translate("title:jakarta AND status:active"));
    assert_eq!(
        as_string(&statement),
        r#"("doc_title" = 'jakarta' AND "status" = 'active')"#
    );

    // default-field broadcasts are rewritten too
    let broadcast = resolver.rewrite(&translate("jakarta"));
    assert_eq!(
        as_string(&broadcast),
        r#"("doc_title" = 'jakarta' OR "text" = 'jakarta')"#
    );
}

#[test]
fn test_empty_alias_table_is_identity() {
    let resolver = AliasResolver::new(HashMap::new());
    let statement = translate("host.name:(active AND NOT pending) mod_date:[1 TO 5]");
    assert_eq!(resolver.rewrite(&statement), statement);
}

#[test]
fn test_rewrite_reaches_nested_nodes() {
    let mut aliases = HashMap::new();
    aliases.insert("a".to_string(), "b".to_string());
    let resolver = AliasResolver::new(aliases);

    let statement = Statement::parenthesized(Statement::function(
        "lower",
        vec![Statement::prefix("NOT", vec![Statement::column("a")])],
    ));
    assert_eq!(as_string(&resolver.rewrite(&statement)), r#"(lower(NOT ("b")))"#);
}

#[test]
fn test_aliases_do_not_chain() {
    let mut aliases = HashMap::new();
    aliases.insert("a".to_string(), "b".to_string());
    aliases.insert("b".to_string(), "c".to_string());
    let resolver = AliasResolver::new(aliases);

    let statement = resolver.rewrite(&Statement::column("a"));
    assert_eq!(as_string(&statement), r#""b""#);
}

// ============================================================================
// Used columns
// ============================================================================

#[test]
fn test_used_columns_in_traversal_order() {
    let statement = translate("status:active jakarta");
    assert_eq!(used_columns(&statement), vec!["status", "title", "text"]);
}

#[test]
fn test_used_columns_deduplicates() {
    let statement = translate("jakarta apache website");
    assert_eq!(used_columns(&statement), vec!["title", "text"]);
}

#[test]
fn test_used_columns_sees_exists_and_ranges() {
    let statement = translate("_exists_:sensor reading:[1 TO 5]");
    assert_eq!(used_columns(&statement), vec!["sensor", "reading"]);
}

#[test]
fn test_constant_predicates_use_no_columns() {
    assert_eq!(used_columns(&translate("")), Vec::<String>::new());
    assert_eq!(used_columns(&translate("title:")), Vec::<String>::new());
}

// ============================================================================
// Schema deserialization (the CLI's config format)
// ============================================================================

#[test]
fn test_schema_from_json() {
    let schema: Schema = serde_json::from_str(
        r#"{
            "fields": {
                "age": {
                    "property_name": "age",
                    "internal_property_name": "foo"
                }
            }
        }"#,
    )
    .expect("schema should deserialize");

    assert_eq!(schema.resolve("age"), Some("foo"));
    assert_eq!(schema.resolve("title"), None);
}

#[test]
fn test_alias_table_from_json() {
    let resolver: AliasResolver =
        serde_json::from_str(r#"{"title": "doc_title"}"#).expect("aliases should deserialize");
    assert_eq!(resolver.resolve("title"), Some("doc_title"));
    assert_eq!(resolver.resolve("text"), None);
}
