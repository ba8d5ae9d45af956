#![allow(dead_code)]

use leona::{Program, format, parse_str, tokenize};

/// Run a program and return the printed lines.
pub fn output_lines(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    leona::run(input, &mut out).expect("run failed");
    String::from_utf8(out)
        .expect("output is utf-8")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Helper: lex, re-serialize, lex again, assert the same kinds on the
/// same lines.
pub fn assert_token_roundtrip(input: &str) {
    let first = tokenize(input).expect("tokenize failed");
    let text = leona::format_tokens(&first);
    let second = tokenize(&text).unwrap_or_else(|| {
        panic!("canonical text has no tokens\n--- canonical ---\n{text}")
    });

    let strip = |tokens: &[leona::Token]| -> Vec<_> {
        tokens.iter().map(|t| (t.kind.clone(), t.span.line)).collect()
    };
    assert_eq!(
        strip(&first),
        strip(&second),
        "token round-trip mismatch\n--- input ---\n{input}\n--- canonical ---\n{text}"
    );
}

/// Helper: format a program, parse it back, assert equality.
pub fn assert_program_roundtrip(original: &Program) {
    let formatted = format(original);
    let parsed = parse_str(&formatted)
        .unwrap_or_else(|e| {
            panic!(
                "failed to re-parse formatted output: {e}\n\
                 --- formatted ---\n{formatted}"
            )
        })
        .expect("formatted output contains a program");

    assert_eq!(
        original, &parsed,
        "program mismatch\n--- formatted ---\n{formatted}"
    );
}
