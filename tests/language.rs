use idk::{
    config::Options,
    error::{Error, EvaluatorError, LexerError, ParserError, SyntaxError},
    interpreter::{
        evaluator::{core::Evaluated, operator::MAX_RANGE_LENGTH},
        session::{Prompt, Session},
        value::core::Value,
    },
    run_source,
};

fn run_with(src: &str, options: &Options) -> Result<String, Error> {
    let mut out = Vec::new();
    run_source(src, options, &mut out)?;
    Ok(String::from_utf8(out).expect("output is valid UTF-8"))
}

fn run(src: &str) -> Result<String, Error> {
    run_with(src, &Options::default())
}

fn assert_output(src: &str, expected: &str) {
    match run(src) {
        Ok(out) => assert_eq!(out, expected, "unexpected output for:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(out) => panic!("Script succeeded but was expected to fail, printed:\n{out}"),
        Err(e) => e,
    }
}

#[test]
fn assignment_and_print() {
    assert_output("x := 5\nprint x", "5\n");
    assert_output("b := true\nprint b", "true\n");
    assert_output("c := 'z'\nprint c", "z\n");
    assert_output("print false", "false\n");
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("print 2 + 3 * 4", "14\n");
    assert_output("print 10 - 2 - 3", "5\n");
    assert_output("print 8 / 2 / 2", "2\n");
    assert_output("x := 6\ny := x * x - 1\nprint y", "35\n");
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("print 7 / 2", "3\n");
    assert_output("print -7 / 2", "-3\n");
    assert_output("print 7 / -2", "-3\n");
}

#[test]
fn chars_and_bools_are_numeric_in_arithmetic() {
    assert_output("print 'a' + 1", "98\n");
    assert_output("print true + true", "2\n");
    assert_output("print 'b' > 'a'", "true\n");
}

#[test]
fn comparisons_and_logic() {
    assert_output("print 3 >= 3", "true\n");
    assert_output("print 3 < 3", "false\n");
    assert_output("print 1 = 1 and 2 = 3", "false\n");
    assert_output("print true and false or true", "true\n");
    assert_output("print true xor true", "false\n");
    assert_output("print not 1 > 2", "true\n");
}

#[test]
fn ranges() {
    assert_output("print 1 .. 5", "1, 2, 3, 4\n");
    assert_output("print 1 ..= 5", "1, 2, 3, 4, 5\n");
    assert_output("print 5 .. 1", "5, 4, 3, 2\n");
    assert_output("print 3 ..= 3", "3\n");
    assert_output("print 1..=3", "1, 2, 3\n");
    assert_output("r := 2 .. -1\nprint r", "2, 1, 0\n");
}

#[test]
fn exclusive_range_with_equal_endpoints_fails() {
    let err = assert_failure("x := 1\nprint 3 .. 3");
    assert!(matches!(err, Error::Evaluator(EvaluatorError::EmptyRange { line: 2 })));
}

#[test]
fn oversized_ranges_fail_instead_of_allocating() {
    let err = assert_failure("x := -9223372036854775808 ..= 9223372036854775807");
    assert!(matches!(err, Error::Evaluator(EvaluatorError::RangeTooLarge { line: 1, .. })));

    let err = assert_failure("print 1\nfor 0 .. 1000000000000\nprint _it\nend");
    assert!(matches!(err,
                     Error::Evaluator(EvaluatorError::RangeTooLarge { length: 1_000_000_000_000,
                                                                      limit: MAX_RANGE_LENGTH,
                                                                      line: 2 })));

    let limit = i64::try_from(MAX_RANGE_LENGTH).unwrap();
    assert!(matches!(assert_failure(&format!("r := 0 ..= {limit}")),
                     Error::Evaluator(EvaluatorError::RangeTooLarge { length: 16_777_217, .. })));
}

#[test]
fn oversized_ranges_leave_the_session_usable() {
    let mut session = Session::new(Options::default());
    let mut out = Vec::new();

    session.submit("a := 1", &mut out).unwrap();
    assert!(session.submit("b := 0 .. 9223372036854775807", &mut out).is_err());
    session.submit("print a", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n");
}

#[test]
fn membership() {
    assert_output("print 3 in 1 .. 5", "true\n");
    assert_output("print 5 in 1 .. 5", "false\n");
    assert_output("r := 1 ..= 5\nprint 5 in r", "true\n");
}

#[test]
fn for_loops_bind_it() {
    assert_output("for i in 1 ..= 3\nprint _it\nend", "1\n2\n3\n");
    assert_output("for 3 .. 0\nprint _it\nend", "3\n2\n1\n");
}

#[test]
fn for_loops_bind_named_variable() {
    assert_output("for i in 1 ..= 3\nprint i * 10\nend", "10\n20\n30\n");
}

#[test]
fn if_else() {
    assert_output("if 2 > 1\nprint 1\nelse\nprint 0\nend", "1\n");
    assert_output("if 1 > 2\nprint 1\nelse\nprint 0\nend", "0\n");
    assert_output("if 1 > 2\nprint 1\nend\nprint 2", "2\n");
}

#[test]
fn else_if_chains() {
    let src = "x := 5
if x < 3
print 'a'
else if x < 7
print 'b'
else
print 'c'
end";
    assert_output(src, "b\n");
}

#[test]
fn nested_blocks() {
    let src = "for 1 ..= 4
if _it > 2
print _it
else
if _it = 1
print 'x'
end
end
end";
    assert_output(src, "x\n3\n4\n");
}

#[test]
fn block_assignments_are_local() {
    let src = "for 1 ..= 2
y := _it * 10
print y
end";
    assert_output(src, "10\n20\n");

    let err = assert_failure(&format!("{src}\nprint y"));
    assert!(matches!(err, Error::Evaluator(EvaluatorError::UnknownVariable { line: 5, .. })));
}

#[test]
fn comments_and_blank_lines() {
    assert_output("// setup\n\nx := 1 // one\n\nprint x", "1\n");
}

#[test]
fn double_assignment_is_a_parse_error() {
    let err = assert_failure("x := 1\ny := 2\nx := 3");
    assert!(matches!(err, Error::Parser(ParserError::DoubleAssignment { line: 3, .. })));
    assert!(err.to_string().starts_with("Parser error in line 3:"));

    let err = assert_failure("for 1 .. 3\ny := _it\nend\ny := 1");
    assert!(matches!(err, Error::Parser(ParserError::DoubleAssignment { line: 4, .. })));
}

#[test]
fn parse_errors() {
    let cases: &[(&str, usize)] = &[("x y := 1", 1),
                                    ("x print 1", 1),
                                    ("1 + 2", 1),
                                    ("x := 1\nend", 2),
                                    ("else", 1),
                                    ("if true\nprint 1", 1),
                                    ("while true\nend", 1),
                                    ("print", 1),
                                    ("x := 1 +", 1),
                                    ("x := 1 := 2", 1),
                                    ("for 5\nprint 1\nend", 1),
                                    ("if true\nprint 1\nend true", 3),
                                    ("if true\nprint 1\nelse\nprint 2\nelse\nprint 3\nend", 5),
                                    ("x := 1 2", 1)];

    for (src, line) in cases {
        match run(src) {
            Err(Error::Parser(e)) => assert_eq!(e.line(), *line, "wrong line for:\n{src}"),
            other => panic!("expected a parser error for:\n{src}\ngot {other:?}"),
        }
    }
}

#[test]
fn lexer_errors() {
    let err = assert_failure("x := 1  + 2");
    assert!(matches!(err, Error::Lexer(LexerError::EmptyToken { line: 1 })));

    let err = assert_failure("x := 1\ny := 99999999999999999999");
    assert!(matches!(err, Error::Lexer(LexerError::LiteralTooLarge { line: 2, .. })));
}

#[test]
fn runtime_errors() {
    assert!(matches!(assert_failure("print z"),
                     Error::Evaluator(EvaluatorError::UnknownVariable { line: 1, .. })));
    assert!(matches!(assert_failure("print 1 / 0"),
                     Error::Evaluator(EvaluatorError::DivisionByZero { line: 1 })));
    assert!(matches!(assert_failure("print 9223372036854775807 + 1"),
                     Error::Evaluator(EvaluatorError::Overflow { line: 1 })));
}

#[test]
fn checker_rejects_bad_argument_types() {
    let err = assert_failure("if 5\nprint 1\nend");
    assert!(matches!(err, Error::Syntax(SyntaxError::WrongKeywordArgument { line: 1, .. })));

    let err = assert_failure("print true = 1 .. 3");
    assert!(matches!(err, Error::Syntax(SyntaxError::WrongOperatorArguments { line: 1, .. })));

    let err = assert_failure("print not 5");
    assert!(matches!(err, Error::Syntax(_)));
}

#[test]
fn skipping_the_checker_defers_errors_to_evaluation() {
    let unchecked = Options::unchecked();

    match run_with("if 5\nprint 1\nend", &unchecked) {
        Err(Error::Evaluator(EvaluatorError::ExpectedBoolean { found: "int", line: 1 })) => {},
        other => panic!("expected a runtime boolean error, got {other:?}"),
    }

    assert!(matches!(run_with("print true = 1 .. 3", &unchecked),
                     Err(Error::Evaluator(EvaluatorError::TypeError { line: 1, .. }))));

    match run_with("print not 5", &unchecked) {
        Err(Error::Evaluator(EvaluatorError::ExpectedBoolean { found: "int", line: 1 })) => {},
        other => panic!("expected a runtime boolean error for 'not', got {other:?}"),
    }

    // Words are accepted by the checker, so only evaluation can reject them.
    assert!(matches!(run("x := 5\nif x\nprint 1\nend"),
                     Err(Error::Evaluator(EvaluatorError::ExpectedBoolean { line: 2, .. }))));
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut out = Vec::new();
    let result = run_source("print 1\nprint nope\nprint 2", &Options::default(), &mut out);

    assert!(result.is_err());
    assert_eq!(out, b"1\n");
}

#[test]
fn history_records_every_top_level_statement() {
    let history = run_source("x := 2\nx + 1\nprint x\nif x > 1\nprint 0\nend\nfor 0 .. 3\nend",
                             &Options::default(),
                             &mut Vec::new()).expect("program runs");

    assert_eq!(history,
               vec![Evaluated::Assignment { name:  "x".into(),
                                            value: Value::Int(2),
                                            line:  1, },
                    Evaluated::Value { value: Value::Int(3),
                                       line:  2, },
                    Evaluated::Print { value: Value::Int(2),
                                       line:  3, },
                    Evaluated::If { condition: true,
                                    line:      4, },
                    Evaluated::For { iterations: 3,
                                     line:       7, }]);
}

#[test]
fn session_prompts_and_accumulates() {
    let mut session = Session::new(Options::default());
    let mut out = Vec::new();

    assert_eq!(session.prompt(), Prompt::Statement);
    assert_eq!(session.submit("x := 1", &mut out).unwrap(), Prompt::Statement);
    assert_eq!(session.submit("print x", &mut out).unwrap(), Prompt::Statement);
    assert_eq!(session.submit("y := x + 1", &mut out).unwrap(), Prompt::Statement);
    assert_eq!(session.submit("if y > 1", &mut out).unwrap(), Prompt::Continuation);
    assert_eq!(session.prompt(), Prompt::Continuation);
    assert_eq!(session.submit("", &mut out).unwrap(), Prompt::Continuation);
    assert_eq!(session.submit("print y", &mut out).unwrap(), Prompt::Continuation);
    assert_eq!(session.submit("end", &mut out).unwrap(), Prompt::Statement);

    // Earlier prints are not replayed when the program is re-run.
    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n");
    assert_eq!(session.context().history().len(), 3);
}

#[test]
fn session_replays_blocks_from_earlier_inputs() {
    let mut session = Session::new(Options::default());
    let mut out = Vec::new();

    session.submit("for 1 ..= 2", &mut out).unwrap();
    session.submit("print _it", &mut out).unwrap();
    session.submit("end", &mut out).unwrap();
    session.submit("z := 0", &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n1\n2\n");
}

#[test]
fn session_discards_failed_statements() {
    let mut session = Session::new(Options::default());
    let mut out = Vec::new();

    session.submit("a := 1", &mut out).unwrap();
    let err = session.submit("b := nope", &mut out).unwrap_err();
    assert!(matches!(err, Error::Evaluator(EvaluatorError::UnknownVariable { line: 2, .. })));

    // The failed assignment left no trace, so `b` can be assigned again.
    session.submit("b := a + 1", &mut out).unwrap();
    session.submit("print b", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2\n");

    assert!(session.submit("a := 5", &mut Vec::new()).is_err());
    assert!(session.submit("end", &mut Vec::new()).is_err());
    assert_eq!(session.prompt(), Prompt::Statement);
}
