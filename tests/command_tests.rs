use nim_callgrind::commands::{execute_demangle, validate_args, DemangleArgs};
use nim_callgrind::output::read_symbol_table;
use std::path::PathBuf;

const TRACE: &str = "\
events: Ir
fn=1 eq_systemZstrs_3(NimStringV2, NimStringV2)
0 12
cfn=2 foo_aZbx9y(int)
calls=1 0
";

fn write_trace(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("callgrind.out");
    std::fs::write(&path, TRACE).unwrap();
    path
}

#[test]
fn test_validate_args_valid() {
    let dir = tempfile::tempdir().unwrap();
    let args = DemangleArgs {
        input: write_trace(&dir),
        output: dir.path().join("out.txt"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let args = DemangleArgs {
        input: dir.path().join("missing.out"),
        output: dir.path().join("out.txt"),
        ..Default::default()
    };

    let err = validate_args(&args).unwrap_err();
    assert!(err.to_string().starts_with("Can't open file:"));
}

#[test]
fn test_validate_args_input_is_directory() {
    let dir = tempfile::tempdir().unwrap();
    let args = DemangleArgs {
        input: dir.path().to_path_buf(),
        output: dir.path().join("out.txt"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_same_input_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_trace(&dir);
    let args = DemangleArgs {
        output: input.clone(),
        input,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_symbols_same_as_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.txt");
    let args = DemangleArgs {
        input: write_trace(&dir),
        symbols: Some(output.clone()),
        output,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_symbols_same_as_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_trace(&dir);
    let args = DemangleArgs {
        symbols: Some(input.clone()),
        input,
        output: dir.path().join("out.txt"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_demangle_with_summary() {
    let dir = tempfile::tempdir().unwrap();
    let args = DemangleArgs {
        input: write_trace(&dir),
        output: dir.path().join("out.txt"),
        symbols: None,
        print_summary: true,
    };

    let summary = execute_demangle(args.clone()).unwrap();

    assert_eq!(summary.table.distinct, 2);
    assert_eq!(summary.rewrite.changed_lines, 1);
    assert!(args.output.exists());
}

#[test]
fn test_execute_demangle() {
    let dir = tempfile::tempdir().unwrap();
    let args = DemangleArgs {
        input: write_trace(&dir),
        output: dir.path().join("out/callgrind.demangled"),
        symbols: Some(dir.path().join("symbols.json")),
        print_summary: false,
    };

    let summary = execute_demangle(args.clone()).unwrap();

    let output = std::fs::read_to_string(&args.output).unwrap();
    assert_eq!(
        output,
        "events: Ir\n\
         fn=1 eq(string, string) [system.strs] []\n\
         0 12\n\
         cfn=2 foo_aZbx9y(int)\n\
         calls=1 0\n"
    );

    assert_eq!(summary.rewrite.lines, 5);
    assert_eq!(summary.rewrite.function_lines, 2);
    assert_eq!(summary.rewrite.substitutions, 1);
    assert_eq!(summary.table.decoded, 1);
    assert_eq!(summary.table.undecodable, 1);

    let table = read_symbol_table(args.symbols.unwrap()).unwrap();
    assert_eq!(table.len(), 1);
}
