use clon::{
    OutputFormat, Value,
    cli::{CliError, GenerateOptions, execute_generate},
    input::{InputError, join_lines, parse_lines, parse_reader},
    output::{render_forest, to_json, to_json_pretty, to_yaml, value_to_json},
    parse_str,
};
use serde_json::json;

fn produce(input: &str) -> Vec<Value> {
    parse_str(input)
        .unwrap()
        .iter()
        .map(|root| root.produce())
        .collect()
}

fn generate(expressions: &[&str], format: OutputFormat) -> Result<String, CliError> {
    execute_generate(&GenerateOptions {
        expressions: expressions.iter().map(|s| s.to_string()).collect(),
        input: None,
        format,
    })
}

// ============================================================================
// Line aggregation
// ============================================================================

#[test]
fn test_join_lines_trims_and_joins() {
    assert_eq!(join_lines(["a=1", "  b=2  ", "\tc=3"]), "a=1 b=2 c=3");
    assert_eq!(join_lines(Vec::<String>::new()), "");
}

#[test]
fn test_arguments_split_anywhere() {
    // a shell splits `user = { name=foo }` into separate arguments
    let forest = parse_lines(["user", "=", "{", "name=foo", "age=:30", "}"]).unwrap();
    assert_eq!(
        value_to_json(forest[0].produce()),
        json!({"user": {"name": "foo", "age": 30}})
    );
}

#[test]
fn test_parse_reader_joins_lines() {
    let text = "kind = Service\nmetadata.name = web\n\n  metadata.namespace = default  \n";
    let forest = parse_reader(text.as_bytes()).unwrap();
    assert_eq!(
        value_to_json(forest[0].produce()),
        json!({"kind": "Service", "metadata": {"name": "web", "namespace": "default"}})
    );
}

#[test]
fn test_parse_reader_reports_parse_errors() {
    let err = parse_reader("a=[1\n2".as_bytes()).unwrap_err();
    match err {
        InputError::Parse(e) => {
            assert_eq!(e.input, "a=[1 2");
            assert_eq!(e.position, 6);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_quoted_literal_spanning_lines_is_joined() {
    let forest = parse_reader("a=\"x\n y\"".as_bytes()).unwrap();
    assert_eq!(value_to_json(forest[0].produce()), json!({"a": "x y"}));
}

// ============================================================================
// Value conversion and rendering
// ============================================================================

#[test]
fn test_value_to_json_types() {
    let values = produce("s=x i=:1 f=:1.5 t=:true n=:null arr=[:1 b] o={k=v}");
    assert_eq!(
        value_to_json(values[0].clone()),
        json!({
            "s": "x",
            "i": 1,
            "f": 1.5,
            "t": true,
            "n": null,
            "arr": [1, "b"],
            "o": {"k": "v"}
        })
    );
}

#[test]
fn test_non_finite_float_becomes_null() {
    assert_eq!(value_to_json(Value::Float(f64::NAN)), serde_json::Value::Null);
    assert_eq!(to_json(&produce("a=:inf")[0]).unwrap(), r#"{"a":null}"#);
}

#[test]
fn test_compact_json_keeps_field_order() {
    let values = produce("z=1 a=2 m.b=3 m.a=4");
    assert_eq!(
        to_json(&values[0]).unwrap(),
        r#"{"z":"1","a":"2","m":{"b":"3","a":"4"}}"#
    );
}

#[test]
fn test_pretty_json_uses_three_spaces() {
    let values = produce("a.b=:1 c=[x]");
    let expected = "{\n   \"a\": {\n      \"b\": 1\n   },\n   \"c\": [\n      \"x\"\n   ]\n}";
    assert_eq!(to_json_pretty(&values[0]).unwrap(), expected);
}

#[test]
fn test_yaml_rendering() {
    let values = produce("kind=Service metadata.name=bb metadata.port=:80 tags=[a b]");
    let expected = "kind: Service\nmetadata:\n  name: bb\n  port: 80\ntags:\n- a\n- b\n";
    assert_eq!(to_yaml(&values[0]).unwrap(), expected);
}

#[test]
fn test_yaml_quotes_ambiguous_strings() {
    let values = produce("a=true b=:true c=42");
    let yaml = to_yaml(&values[0]).unwrap();
    assert!(yaml.contains("a: 'true'"), "{}", yaml);
    assert!(yaml.contains("b: true"), "{}", yaml);
    assert!(yaml.contains("c: '42'"), "{}", yaml);
}

#[test]
fn test_render_forest_json() {
    let forest = parse_str("{a=1} [:1]").unwrap();
    let out = render_forest(&forest, OutputFormat::Json).unwrap();
    assert_eq!(out, "{\n   \"a\": \"1\"\n}\n[\n   1\n]\n");
}

#[test]
fn test_render_forest_yaml_separates_documents() {
    let forest = parse_str("{a=1} {b=2}").unwrap();
    let out = render_forest(&forest, OutputFormat::Yaml).unwrap();
    assert_eq!(out, "a: '1'\n---\nb: '2'\n");
}

// ============================================================================
// CLI operations
// ============================================================================

#[test]
fn test_generate_json() {
    let out = generate(&["name=foo", "age=:30"], OutputFormat::Json).unwrap();
    assert_eq!(out, "{\n   \"name\": \"foo\",\n   \"age\": 30\n}\n");
}

#[test]
fn test_generate_yaml() {
    let out = generate(&["kind=Service", "metadata.name=web"], OutputFormat::Yaml).unwrap();
    assert_eq!(out, "kind: Service\nmetadata:\n  name: web\n");
}

#[test]
fn test_generate_reports_parse_error() {
    let err = generate(&["a=:nope"], OutputFormat::Json).unwrap_err();
    assert!(matches!(err, CliError::Parse(_)));
    assert_eq!(
        err.to_string(),
        "Parse error: invalid raw literal \"nope\": isn't any of true, false, null or a numeric\na=:nope\n  ^"
    );
}

#[test]
fn test_generate_from_piped_input() {
    let out = execute_generate(&GenerateOptions {
        expressions: vec![],
        input: Some("[1 2]\n{a=b}\n".into()),
        format: OutputFormat::Json,
    })
    .unwrap();
    assert_eq!(out, "[\n   \"1\",\n   \"2\"\n]\n{\n   \"a\": \"b\"\n}\n");
}

#[test]
fn test_generate_is_repeatable() {
    let args = ["a.b=1", "a.c=[x=1 y]", "d=:2.5"];
    let first = generate(&args, OutputFormat::Json).unwrap();
    let second = generate(&args, OutputFormat::Json).unwrap();
    assert_eq!(first, second);
}
