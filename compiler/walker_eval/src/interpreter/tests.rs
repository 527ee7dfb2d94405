#![allow(clippy::unwrap_used, clippy::expect_used)]


use super::*;
use crate::print_handler::buffer_handler;
use crate::value::Value;

fn interp() -> Interpreter {
    Interpreter::builder()
        .print_handler(buffer_handler())
        .input(crate::input_handler::empty_input())
        .seed(7)
        .build()
}

fn run(program: &str) -> Value {
    interp().eval(program).unwrap()
}

mod scanning {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_a_string() {
        assert_eq!(run("hello"), Value::string("hello"));
    }

    #[test]
    fn empty_program_is_none() {
        assert_eq!(run(""), Value::None);
    }

    #[test]
    fn escapes_make_structure_literal() {
        assert_eq!(run(r"a\{b\;c\}d"), Value::string("a{b;c}d"));
    }

    #[test]
    fn trailing_escape_ends_text() {
        assert_eq!(run("ab\\"), Value::string("ab"));
    }

    #[test]
    fn unconsumed_siblings_are_not_evaluated() {
        let mut interp = interp();
        let value = interp.eval("{#;{println;side effect}}").unwrap();
        assert_eq!(value, Value::None);
        assert_eq!(interp.output(), "");
    }

    #[test]
    fn frames_are_balanced_after_a_run() {
        let mut interp = interp();
        interp.eval("a{+;1;{*;2;3}}b").unwrap();
        assert_eq!(interp.frames.depth(), 1);
        assert_eq!(interp.scopes.depth(), 1);
        assert!(interp.args.is_empty());
    }

    #[test]
    fn unknown_head_without_siblings_is_none() {
        assert_eq!(run("{nothing here}"), Value::None);
    }

    #[test]
    fn unterminated_block_ends_at_end_of_text() {
        assert_eq!(run("{+;1;2"), Value::Number(3.0));
    }
}

mod pure_text {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pure_keeps_nested_structure() {
        assert_eq!(run("{pure;{+;1;2}}"), Value::string("{+;1;2}"));
    }

    #[test]
    fn pure_stops_at_sibling_boundary() {
        assert_eq!(run("{pure;ab;cd}"), Value::string("ab"));
    }
}

mod unwinding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn caught_error_resumes_after_the_failed_block() {
        assert_eq!(run("{try;{throw;x}}more"), Value::string("xmore"));
    }

    #[test]
    fn error_inside_nested_siblings_unwinds_everything() {
        let mut interp = interp();
        let err = interp.eval("{+;1;{+;{throw;bad};2}}").unwrap_err();
        assert_eq!(err.to_string(), "uncaught error: bad");
        assert_eq!(interp.frames.depth(), 1);
    }

    #[test]
    fn return_at_top_level_ends_the_run() {
        assert_eq!(run("{return;5}ignored"), Value::string("5"));
        assert_eq!(run("{return;{+;2;3}}ignored"), Value::Number(5.0));
    }

    #[test]
    fn failed_argument_binding_leaves_no_trace() {
        let mut interp = interp();
        let value = interp
            .eval("{fun;g;{println;called}}{fun;outer;{try;{g;x;{throw;bad}}}{args;length}}{outer;a;b}")
            .unwrap();
        assert_eq!(value, Value::string("bad2"));
        assert_eq!(interp.output(), "");
        assert_eq!(interp.scopes.depth(), 1);
        assert!(interp.args.is_empty());
    }

    #[test]
    fn scopes_and_args_are_restored_after_an_error() {
        let mut interp = interp();
        let err = interp.eval("{fun;boom;{throw;{args;0}}}{boom;7}");
        assert!(err.is_err());
        assert_eq!(interp.scopes.depth(), 1);
        assert!(interp.args.is_empty());
    }
}

mod stale_code {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn code_from_a_released_text_yields_none() {
        let mut interp = interp();
        // `w` runs text owned by a scope level that is popped on return,
        // so the function value it returns points into released text.
        let value = interp
            .eval("{let;g;{w;{pure;{f;{+;1;1}}}}}{g;call}")
            .unwrap();
        assert_eq!(value, Value::None);
    }
}

mod configuration {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn args_are_prebound_as_strings() {
        let mut interp = Interpreter::builder()
            .print_handler(buffer_handler())
            .args(vec!["a".into(), "b".into()])
            .build();
        assert_eq!(interp.eval("{args;1}").unwrap(), Value::string("b"));
        assert_eq!(interp.eval("{args;length}").unwrap(), Value::UInteger(2));
    }

    #[test]
    fn definitions_survive_between_runs() {
        let mut interp = interp();
        interp.eval("{fun;twice;{*;{args;0};2}}").unwrap();
        assert_eq!(interp.eval("{twice;4}").unwrap(), Value::Number(8.0));
    }

    #[test]
    fn seeded_rand_is_deterministic() {
        let a = run("{rand}");
        let b = run("{rand}");
        assert_eq!(a, b);
        assert!(matches!(a, Value::UInteger(n) if n < 1 << 31));
    }

    #[test]
    fn rand_draws_stay_in_range_and_vary() {
        let mut interp = interp();
        let draws: Vec<u64> = (0..64)
            .map(|_| match interp.eval("{rand}").unwrap() {
                Value::UInteger(n) => n,
                other => panic!("expected an unsigned draw, got {other:?}"),
            })
            .collect();
        assert!(draws.iter().all(|&n| n < 1 << 31));
        assert!(draws.iter().any(|&n| n != draws[0]));
    }

    #[test]
    fn different_seeds_give_different_draws() {
        let draw = |seed| {
            Interpreter::builder()
                .print_handler(buffer_handler())
                .seed(seed)
                .build()
                .eval("{rand}{rand}")
                .unwrap()
        };
        assert_eq!(draw(11), draw(11));
        assert_ne!(draw(11), draw(12));
    }
}
