use nim_callgrind::demangle::SymbolTable;
use nim_callgrind::output::{rewrite, rewrite_line};
use nim_callgrind::parser::extract_function_symbols;
use pretty_assertions::assert_eq;

const TRACE: &str = "\
version: 1
creator: callgrind-3.22.0
events: Ir

fl=(1) /src/app.nim
fn=(1) main
16 4
cfn=2 newFoo_moduleZfile_123(NimStringV2, int)
calls=1 0
16 120

fn=2 newFoo_moduleZfile_123(NimStringV2, int)
3 40
cfn=(3) 0x0000000000401000
calls=2 0
3 8
";

fn demangle(trace: &str) -> String {
    let (table, _) = SymbolTable::build(extract_function_symbols(trace.lines()));
    let mut output = Vec::new();
    rewrite(trace.as_bytes(), &mut output, &table).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_rewrite_trace() {
    let output = demangle(TRACE);
    let expected = TRACE.replace(
        "newFoo_moduleZfile_123(NimStringV2, int)",
        "newFoo(string, int) [module.file] []",
    );

    assert_eq!(output, expected);
}

#[test]
fn test_line_count_preserved() {
    let output = demangle(TRACE);
    assert_eq!(output.lines().count(), TRACE.lines().count());
}

#[test]
fn test_non_function_lines_verbatim() {
    let output = demangle(TRACE);

    for (original, rewritten) in TRACE.lines().zip(output.lines()) {
        if !original.contains("fn=") {
            assert_eq!(original, rewritten);
        }
    }
}

#[test]
fn test_unclassified_symbols_untouched() {
    let trace = "fn=Foo_module123Z456(tySequence_int*)\ncfn=Bar_other9Z1()\n";
    assert_eq!(demangle(trace), trace);
}

#[test]
fn test_longer_symbol_replaced_first() {
    let short = "f_aZb_1(int)";
    let long = "f_aZb_1(int)[hot]";
    let (table, _) = SymbolTable::build([short, long]);

    assert_eq!(
        rewrite_line(&format!("fn=(1) {}", long), &table),
        "fn=(1) f(int) [a.b] [hot]"
    );
    assert_eq!(
        rewrite_line(&format!("fn=(2) {}", short), &table),
        "fn=(2) f(int) [a.b] []"
    );
}

#[test]
fn test_all_occurrences_replaced() {
    let raw = "g_aZb_2(int)";
    let (table, _) = SymbolTable::build([raw]);

    let line = format!("cfn=(4) {} calls {} again {}", raw, raw, raw);
    let rewritten = rewrite_line(&line, &table);

    assert_eq!(rewritten.matches("g(int) [a.b] []").count(), 3);
    assert!(!rewritten.contains(raw));
}
