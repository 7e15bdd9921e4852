use doclink::typespec::*;

fn parse(input: &str) -> Vec<TypeNode> {
    TypeParser::new()
        .parse(input)
        .unwrap_or_else(|e| panic!("failed to parse '{}': {}", input, e))
}

#[test]
fn test_empty_input_yields_empty_list() {
    let parser = TypeParser::new();
    assert_eq!(parser.parse("").unwrap(), Vec::<TypeNode>::new());
    assert_eq!(parser.parse("   ").unwrap(), Vec::<TypeNode>::new());
    assert_eq!(parser.parse_optional(None).unwrap(), Vec::<TypeNode>::new());
}

#[test]
fn test_basic_type_is_trimmed() {
    assert_eq!(parse("  String "), vec![TypeNode::basic("String")]);
}

#[test]
fn test_top_level_list_keeps_source_order() {
    assert_eq!(
        parse("String, Integer, nil"),
        vec![
            TypeNode::basic("String"),
            TypeNode::basic("Integer"),
            TypeNode::basic("nil"),
        ]
    );
}

#[test]
fn test_parameterized_type() {
    assert_eq!(
        parse("Array<String>"),
        vec![TypeNode::Parameterized {
            name: "Array".to_string(),
            items: vec![TypeNode::basic("String")],
            ordered: false,
        }]
    );
}

#[test]
fn test_parameterized_type_with_alternatives() {
    assert_eq!(
        parse("Array<String, Symbol>"),
        vec![TypeNode::parameterized(
            "Array",
            vec![TypeNode::basic("String"), TypeNode::basic("Symbol")]
        )]
    );
}

#[test]
fn test_nested_parameterized_types() {
    assert_eq!(
        parse("Array<Array<Integer>>"),
        vec![TypeNode::parameterized(
            "Array",
            vec![TypeNode::parameterized(
                "Array",
                vec![TypeNode::basic("Integer")]
            )]
        )]
    );
}

#[test]
fn test_mapping_type_with_two_parameters_is_key_value() {
    assert_eq!(
        parse("Hash<String, Symbol>"),
        vec![TypeNode::KeyValue {
            name: "Hash".to_string(),
            keys: vec![TypeNode::basic("String")],
            values: vec![TypeNode::basic("Symbol")],
        }]
    );
}

#[test]
fn test_fat_arrow_key_value_keeps_unpaired_lists() {
    assert_eq!(
        parse("Hash<String, Symbol => Integer, Float, nil>"),
        vec![TypeNode::key_value(
            "Hash",
            vec![TypeNode::basic("String"), TypeNode::basic("Symbol")],
            vec![
                TypeNode::basic("Integer"),
                TypeNode::basic("Float"),
                TypeNode::basic("nil"),
            ]
        )]
    );
}

#[test]
fn test_brace_key_value_form() {
    assert_eq!(
        parse("Hash{Symbol => Array<String>}"),
        vec![TypeNode::key_value(
            "Hash",
            vec![TypeNode::basic("Symbol")],
            vec![TypeNode::parameterized(
                "Array",
                vec![TypeNode::basic("String")]
            )]
        )]
    );
}

#[test]
fn test_bare_parenthesised_list_is_ordered() {
    let nodes = parse("(String, Integer)");
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        TypeNode::Parameterized { items, ordered, .. } => {
            assert!(*ordered, "parenthesised list must be ordered");
            assert_eq!(
                items,
                &vec![TypeNode::basic("String"), TypeNode::basic("Integer")]
            );
        }
        other => panic!("expected Parameterized, got {:?}", other),
    }
}

#[test]
fn test_named_parenthesised_list_is_ordered() {
    assert_eq!(
        parse("Array(String, Symbol)"),
        vec![TypeNode::ordered(
            "Array",
            vec![TypeNode::basic("String"), TypeNode::basic("Symbol")]
        )]
    );
}

#[test]
fn test_tuple_marker_is_ordered() {
    assert_eq!(
        parse("Tuple<String, Integer>"),
        vec![TypeNode::ordered(
            "Tuple",
            vec![TypeNode::basic("String"), TypeNode::basic("Integer")]
        )]
    );
}

#[test]
fn test_bare_angle_list_uses_default_collection() {
    assert_eq!(
        parse("<String>"),
        vec![TypeNode::parameterized(
            "Array",
            vec![TypeNode::basic("String")]
        )]
    );
}

#[test]
fn test_duck_types_and_setters_are_identifiers() {
    assert_eq!(
        parse("#to_s, #name="),
        vec![TypeNode::basic("#to_s"), TypeNode::basic("#name=")]
    );
}

#[test]
fn test_namespaced_identifiers_are_kept_whole() {
    assert_eq!(
        parse("Array<Foo::Bar>"),
        vec![TypeNode::parameterized(
            "Array",
            vec![TypeNode::basic("Foo::Bar")]
        )]
    );
}

#[test]
fn test_custom_grammar_options() {
    let parser = TypeParser::with_options(GrammarOptions {
        mapping_types: vec!["Map".to_string()],
        tuple_markers: vec!["Pair".to_string()],
        default_collection: "List".to_string(),
    });

    assert_eq!(
        parser.parse("Map<String, Integer>").unwrap(),
        vec![TypeNode::key_value(
            "Map",
            vec![TypeNode::basic("String")],
            vec![TypeNode::basic("Integer")]
        )]
    );
    assert_eq!(
        parser.parse("Hash<String, Integer>").unwrap(),
        vec![TypeNode::parameterized(
            "Hash",
            vec![TypeNode::basic("String"), TypeNode::basic("Integer")]
        )]
    );
    assert_eq!(
        parser.parse("Pair<A, B>").unwrap(),
        vec![TypeNode::ordered(
            "Pair",
            vec![TypeNode::basic("A"), TypeNode::basic("B")]
        )]
    );
    assert_eq!(
        parser.parse("(A)").unwrap(),
        vec![TypeNode::ordered("List", vec![TypeNode::basic("A")])]
    );
}

#[test]
fn test_parsing_is_deterministic() {
    let parser = TypeParser::new();
    let input = "Hash{Symbol => Array(String, Integer)}, nil";
    let first = parser.parse(input).unwrap();
    let second = parser.parse(input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_input_reports_offending_string() {
    let parser = TypeParser::new();
    for input in ["Array<String", "Array<>", "Hash{String}", "String,", "String>"] {
        let err = parser
            .parse(input)
            .expect_err(&format!("'{}' should not parse", input));
        assert_eq!(err.input, input);
        assert!(err.to_string().contains(input));
    }
}

#[test]
fn test_operator_method_names_collide_with_delimiters() {
    let parser = TypeParser::new();
    assert!(parser.parse("Array<#<=>>").is_err());
}

#[test]
fn test_deeply_nested_specifier_is_an_error() {
    let parser = TypeParser::new();
    let input = format!("{}String{}", "Array<".repeat(1000), ">".repeat(1000));
    let err = parser.parse(&input).expect_err("nesting past the limit should not parse");
    assert_eq!(err.input, input);
    assert_eq!(err.message, "type specifier nested too deeply");
    assert!(parser.parse_or_warn(&input).is_empty());
}

#[test]
fn test_nesting_within_limit_parses() {
    let depth = doclink::typespec::grammar::MAX_DEPTH;
    let input = format!("{}String{}", "Array<".repeat(depth), ">".repeat(depth));
    let nodes = parse(&input);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].to_string(), input);
}

#[test]
fn test_long_list_keeps_every_entry() {
    let input = vec!["String"; 10_000].join(", ");
    let nodes = parse(&input);
    assert_eq!(nodes.len(), 10_000);
    assert!(nodes.iter().all(|n| *n == TypeNode::basic("String")));
}

#[test]
fn test_lenient_parse_returns_empty_on_error() {
    let parser = TypeParser::new();
    assert!(parser.parse_or_warn("Array<String").is_empty());
    assert_eq!(parser.parse_or_warn("String"), vec![TypeNode::basic("String")]);
}

#[test]
fn test_display_renders_canonical_text() {
    let nodes = parse("Hash<String, Symbol>, Array(String, Integer), Array< Foo >");
    assert_eq!(
        display_list(&nodes),
        "Hash{String => Symbol}, Array(String, Integer), Array<Foo>"
    );
}

#[test]
fn test_serializes_with_kind_tag() {
    let nodes = parse("Array<String>");
    let json = serde_json::to_value(&nodes).unwrap();
    assert_eq!(json[0]["kind"], "parameterized");
    assert_eq!(json[0]["name"], "Array");
    assert_eq!(json[0]["ordered"], false);
    assert_eq!(json[0]["items"][0]["kind"], "basic");
    assert_eq!(json[0]["items"][0]["name"], "String");
}

#[test]
fn test_every_rule_has_a_name() {
    let names: Vec<&str> = Rule::ALL.iter().map(|r| r.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "type_list",
            "parameterized_type",
            "ordered_type",
            "key_value_type",
            "identifier_with_whitespace",
        ]
    );
}
