use pascal_rs::{
    calculate, interpret, new_interpreter, Error, LexError, Lexer, Object, Parser, Printer,
};
use pretty_assertions::assert_eq;

#[test]
fn arithmetic_matches_precedence_rules() {
    let tests = vec![
        ("7 + 3 * (10 / (12 / (3 + 1) - 1))", Object::Real(22.0)),
        ("--5", Object::Integer(5)),
        ("-+-5", Object::Integer(5)),
        ("9 - 5 - 2", Object::Integer(2)),
        ("2 * 3 + 4 * 5", Object::Integer(26)),
        ("14 DIV 4 * 2", Object::Integer(6)),
    ];

    for (input, expected) in tests {
        assert_eq!(calculate(input), Ok(expected), "input: {input}");
    }
}

#[test]
fn full_program() {
    let env = interpret("PROGRAM Part; VAR a, b: INTEGER; BEGIN a := 2; b := a + 10 END.").unwrap();
    assert_eq!(env.get("a"), Some(Object::Integer(2)));
    assert_eq!(env.get("b"), Some(Object::Integer(12)));
}

#[test]
fn case_insensitive_identifiers() {
    let env = interpret("program Case; begin Total := 40; Answer := TOTAL + 2 end.").unwrap();
    assert_eq!(env.get("answer"), Some(Object::Integer(42)));
}

#[test]
fn deep_nesting_is_an_error() {
    let tests = vec![
        format!("{}1{}", "(".repeat(500), ")".repeat(500)),
        format!("{}5", "-".repeat(200_000)),
        format!("1{}", " - 1".repeat(10_000)),
    ];

    for input in tests {
        match calculate(&input) {
            Err(Error::MaxDepth { depth, max_depth }) => assert!(depth > max_depth),
            other => panic!("expected max depth error, found {:?}", other),
        }
    }

    let mut engine = new_interpreter();
    let program = format!("PROGRAM p; BEGIN x := {}1{} END.", "(".repeat(500), ")".repeat(500));
    assert!(engine.run(&program).is_err());
    assert!(engine.run("PROGRAM p; BEGIN x := (((1))) END.").is_ok());
}

#[test]
fn real_overflow_is_an_error() {
    let literal = format!("1{}.0", "0".repeat(400));
    assert!(matches!(
        calculate(&literal),
        Err(Error::Lex(LexError::InvalidNumber { .. }))
    ));

    let huge = format!("1{}.0", "0".repeat(300));
    assert_eq!(calculate(&format!("{huge} * {huge}")), Err(Error::Overflow));
}

#[test]
fn error_kinds() {
    let tests: Vec<(&str, fn(&Error) -> bool)> = vec![
        ("PROGRAM e; BEGIN a := b END.", |err| {
            matches!(err, Error::Name(name) if name == "b")
        }),
        ("PROGRAM e; BEGIN a := 1 / 0 END.", |err| {
            matches!(err, Error::DivisionByZero)
        }),
        ("PROGRAM e; BEGIN a := 1 .", |err| {
            matches!(err, Error::Syntax { .. })
        }),
        ("PROGRAM e; BEGIN a := 1 # 2 END.", |err| {
            matches!(
                err,
                Error::Lex(LexError::UnexpectedChar { found: '#', .. })
            )
        }),
        ("PROGRAM e; { open BEGIN END.", |err| {
            matches!(err, Error::Lex(LexError::UnterminatedComment { .. }))
        }),
    ];

    for (input, check) in tests {
        match interpret(input) {
            Ok(env) => panic!("no error returned for {input}: {env}"),
            Err(err) => assert!(check(&err), "unexpected error for {input}: {err}"),
        }
    }
}

#[test]
fn reparsing_yields_identical_tree() {
    let input = r#"
        PROGRAM Same;
        VAR x: REAL; i: INTEGER;
        BEGIN
            i := 3;
            x := -(i + 1.5) / 2;
            BEGIN ; END
        END.
    "#;

    let first = Parser::new(Lexer::new(input)).unwrap().parse().unwrap();
    let second = Parser::new(Lexer::new(input)).unwrap().parse().unwrap();
    assert_eq!(first, second);
    assert_eq!(Printer::render(&first), Printer::render(&second));
}

#[test]
fn engine_output() {
    let mut engine = new_interpreter();
    let output = engine
        .run("PROGRAM Out; VAR x, y: INTEGER; BEGIN y := 7 / 2; x := 7 DIV 2 END.")
        .unwrap();
    assert_eq!(output, "x = 3\ny = 3.5");
}
