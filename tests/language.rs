use gscript::lexer::tokenize;
use gscript::parser::parse;
use gscript::{run_source, Config, ErrorKind, GscriptError, Interpreter, Value};

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    match run_source(src, Config::default(), &mut out) {
        Ok(errors) if errors.is_empty() => {}
        Ok(errors) => panic!("Script reported errors: {errors:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
    String::from_utf8(out).expect("output is UTF-8")
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output_of(src), expected, "script:\n{src}");
}

fn assert_failure(src: &str) -> GscriptError {
    match run_source(src, Config::default(), Vec::new()) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn global(src: &str, name: &str) -> Option<Value> {
    let program = parse(&tokenize(src)).unwrap_or_else(|e| panic!("Parse failed: {e}"));
    let mut interp = Interpreter::new(Config::default(), Vec::new());
    interp
        .run(&program)
        .unwrap_or_else(|e| panic!("Script failed: {e}"));
    interp.variable(name).cloned()
}

#[test]
fn arithmetic_follows_usual_precedence() {
    assert_output("print(2 + 3 * 4);", "14\n");
    assert_output("print((2 + 3) * 4);", "20\n");
    assert_output("print(8 / 4 / 2, 10 - 2 - 3);", "1 5\n");
}

#[test]
fn assignment_then_read() {
    assert_eq!(global("x = 5; y = x + 1;", "y"), Some(Value::Number(6.0)));
}

#[test]
fn unbound_identifier_reads_as_zero() {
    assert_eq!(global("z = y + 1;", "z"), Some(Value::Number(1.0)));
}

#[test]
fn return_short_circuits_the_function() {
    let src = "function f(n) { if (n < 0) { return -1; } return n; } r = f(-5); s = f(4);";
    assert_eq!(global(src, "r"), Some(Value::Number(-1.0)));
    assert_eq!(global(src, "s"), Some(Value::Number(4.0)));
}

#[test]
fn recursion_with_snapshot_environments() {
    let src = "
        function factorial(n) {
            if (n <= 0) { return 1; }
            return n * factorial(n - 1);
        }
        n = 42;
        a = factorial(0);
        b = factorial(3);
    ";
    assert_eq!(global(src, "a"), Some(Value::Number(1.0)));
    assert_eq!(global(src, "b"), Some(Value::Number(6.0)));
    assert_eq!(global(src, "n"), Some(Value::Number(42.0)));
}

#[test]
fn parsing_twice_gives_identical_trees() {
    let src = "function g(a) { while (a > 0) { a = a - 1; } return a; } x = g(3); g(1), 4;";
    let first = parse(&tokenize(src)).unwrap();
    let second = parse(&tokenize(src)).unwrap();
    assert_eq!(first.statements, second.statements);
}

#[test]
fn malformed_assignment_is_a_positioned_syntax_error() {
    let err = assert_failure("x = ;");
    assert_eq!(err.code(), "E_SYNTAX");
    assert!(matches!(err.kind, ErrorKind::Syntax { position: 2, .. }));
}

#[test]
fn syntax_errors_abort_before_anything_runs() {
    let mut out = Vec::new();
    let err = run_source("print(1); x = ;", Config::default(), &mut out).unwrap_err();
    assert_eq!(err.code(), "E_SYNTAX");
    assert!(out.is_empty());
}

#[test]
fn undefined_function_is_reported() {
    let err = assert_failure("missing(1, 2);");
    assert!(matches!(err.kind, ErrorKind::UndefinedFunction { ref name } if name == "missing"));
}

#[test]
fn loops_and_conditionals() {
    assert_output(
        "for (i = 0; i < 5; i = i + 1) { if (i == 2) { print(\"two\"); } else { print(i); } }",
        "0\n1\ntwo\n3\n4\n",
    );
    assert_output("i = 3; while (i > 0) { print(i); i = i - 1; }", "3\n2\n1\n");
}

#[test]
fn comments_and_keyword_prefixes() {
    assert_output(
        "// leading comment\nformat = 2; // trailing\niffy = 3;\nprint(format + iffy);",
        "5\n",
    );
}

#[test]
fn unrecognized_characters_are_rejected() {
    let err = assert_failure("x = 1 # 2;");
    assert!(err.to_string().starts_with("unrecognized character '#'"));
}

#[test]
fn top_level_return_is_a_syntax_error() {
    assert_eq!(assert_failure("return 3;").code(), "E_SYNTAX");
}

#[test]
fn division_by_zero_is_an_arithmetic_error() {
    assert_eq!(assert_failure("x = 4 / (2 - 2);").code(), "E_ARITHMETIC");
}

#[test]
fn keep_going_collects_every_runtime_error() {
    let config = Config {
        continue_on_error: true,
        ..Config::default()
    };
    let mut out = Vec::new();
    let errors = run_source(
        "print(1); x = 1 / 0; print(2); y = nope(); print(3);",
        config,
        &mut out,
    )
    .unwrap();

    assert_eq!(errors.len(), 2);
    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n");
}

#[test]
fn call_depth_limit_is_configurable() {
    let config = Config {
        max_call_depth: 5,
        ..Config::default()
    };
    let src = "function down(n) { if (n == 0) { return 0; } return down(n - 1); }";

    assert!(run_source(&format!("{src} x = down(4);"), config.clone(), Vec::new()).is_ok());

    let err = run_source(&format!("{src} x = down(5);"), config, Vec::new()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::RecursionLimit { limit: 5 });
}

const COUNT_DOWN: &str =
    "function f(n) { if (n == 0) { return 0; } return 1 + f(n - 1); }";

#[test]
fn recursion_up_to_the_default_limit_succeeds() {
    let deepest = Config::default().max_call_depth - 1;
    let src = format!("{COUNT_DOWN} x = f({deepest});");
    assert_eq!(global(&src, "x"), Some(Value::Number(deepest as f64)));
}

#[test]
fn recursion_past_the_default_limit_is_an_error() {
    let limit = Config::default().max_call_depth;
    let err = assert_failure("function f(n) { return 1 + f(n + 1); } x = f(0);");
    assert_eq!(err.kind, ErrorKind::RecursionLimit { limit });

    let err = assert_failure(&format!("{COUNT_DOWN} x = f({limit});"));
    assert_eq!(err.kind, ErrorKind::RecursionLimit { limit });
}

#[test]
fn raised_call_depth_limit_is_reachable() {
    let config = Config {
        max_call_depth: 2_000,
        ..Config::default()
    };
    let mut out = Vec::new();
    let src = format!("{COUNT_DOWN} print(f(1999));");
    run_source(&src, config, &mut out).unwrap();
    assert_eq!(out, b"1999\n");
}

#[test]
fn very_long_operator_chains_evaluate() {
    let terms = 50_000;
    let src = format!("x = 1{};", " + 1".repeat(terms - 1));
    assert_eq!(global(&src, "x"), Some(Value::Number(terms as f64)));

    let src = format!("function id(v) {{ return v; }} print(id(0{}));", " - 2 * 1".repeat(terms));
    assert_output(&src, &format!("{}\n", -2 * terms as i64));
}

#[test]
fn nesting_limit_comes_from_config() {
    let config = Config {
        max_nesting: 4,
        ..Config::default()
    };
    let err = run_source("x = ((((((1))))));", config, Vec::new()).unwrap_err();
    assert_eq!(err.code(), "E_RECURSION_LIMIT");
}

#[test]
fn ast_serializes_to_json() {
    let program = parse(&tokenize("x = f(1) + 2;")).unwrap();
    let json = serde_json::to_value(&program.statements).unwrap();

    assert_eq!(json[0]["Assign"]["name"], "x");
    assert_eq!(json[0]["Assign"]["value"]["Binary"]["op"], "Add");
    assert_eq!(json[0]["Assign"]["value"]["Binary"]["left"]["Call"]["name"], "f");
}
