use idk::{
    config::Options,
    interpreter::{
        checker::check_syntax,
        evaluator::core::Context,
        lexer::{SourceLine, tokenize_line},
        parser::core::parse,
    },
    parse_source, run_source,
};
use proptest::prelude::*;

fn output(src: &str) -> String {
    let mut out = Vec::new();
    run_source(src, &Options::default(), &mut out).unwrap_or_else(|e| panic!("{src}: {e}"));
    String::from_utf8(out).expect("output is valid UTF-8")
}

proptest! {
    #[test]
    fn division_truncates_toward_zero(a in -10_000i64..10_000, b in -100i64..100) {
        prop_assume!(b != 0);
        prop_assert_eq!(output(&format!("print {a} / {b}")), format!("{}\n", a / b));
    }

    #[test]
    fn range_lengths(start in -50i64..50, end in -50i64..50) {
        prop_assume!(start != end);
        let distance = usize::try_from((end - start).unsigned_abs()).unwrap();

        let exclusive = Context::eval_range(start, end, false, 1).unwrap();
        let inclusive = Context::eval_range(start, end, true, 1).unwrap();

        prop_assert_eq!(exclusive.len(), distance);
        prop_assert_eq!(inclusive.len(), distance + 1);
        prop_assert_eq!(exclusive.first(), Some(&start));
        prop_assert_eq!(inclusive.last(), Some(&end));
    }

    #[test]
    fn for_loops_run_once_per_element(start in -20i64..20, end in -20i64..20) {
        prop_assume!(start != end);
        let printed = output(&format!("for {start} .. {end}\nprint _it\nend"));
        let expected = Context::eval_range(start, end, false, 1).unwrap();

        prop_assert_eq!(printed.lines().count(), expected.len());
    }

    #[test]
    fn checker_is_idempotent(a in any::<i64>(), b in any::<bool>(), c in proptest::char::range('a', 'z')) {
        let src = format!("x := {a}\ny := {b} and x > '{c}'\nif y\nprint x + 1\nend\nprint not {a}");
        let Ok(program) = parse_source(&src, &Options::unchecked()) else {
            return Ok(());
        };
        let first = check_syntax(&program).map_err(|e| e.to_string());
        let second = check_syntax(&program).map_err(|e| e.to_string());

        prop_assert_eq!(first, second);
    }

    #[test]
    fn lexer_never_panics(line in "\\PC{0,40}") {
        let _ = tokenize_line(&line, 1);
    }

    #[test]
    fn parser_never_panics(lines in proptest::collection::vec("[a-z0-9 :=+*/<>.'_-]{0,20}", 0..8)) {
        let tokenized: Vec<_> = lines.iter()
                                     .enumerate()
                                     .filter_map(|(i, l)| tokenize_line(l, i + 1).ok().map(|t| (i + 1, t)))
                                     .filter(|(_, t)| !t.is_empty())
                                     .map(|(number, tokens)| SourceLine { number, tokens })
                                     .collect();
        let _ = parse(&tokenized);
    }
}
