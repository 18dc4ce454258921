//! Whole-program parsing tests

use eir_common::{Severity, ValueType};
use eir_frontend::{BinaryOp, CompareKind, Frontend, Global, InstrKind, Instruction};
use indoc::indoc;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_simple_main() {
    let source = indoc! {"
        func @main() -> i32 {
          %0 = const i32 5
          %1 = const i32 7
          %2 = add i32 %0 %1
          ret %2
        }
    "};

    let program = Frontend::parse_source(source);
    assert!(program.globals.is_empty());
    assert_eq!(program.functions.len(), 1);

    let main = &program.functions[0];
    assert_eq!(main.name, "main");
    assert_eq!(main.return_type, ValueType::I32);
    assert_eq!(
        main.instructions,
        vec![
            Instruction::constant(0, ValueType::I32, 5),
            Instruction::constant(1, ValueType::I32, 7),
            Instruction::binary(BinaryOp::Add, ValueType::I32, 2, 0, 1),
            Instruction::ret(Some(2)),
        ]
    );
}

#[test]
fn test_parse_hello_world() {
    let source = indoc! {r#"
        @msg = c"Hello, world!"

        func @main() -> i32 {
          puts @msg
          %0 = const i32 0
          ret %0
        }
    "#};

    let parsed = Frontend::parse_named_source(source, "hello.ir");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.program.globals, vec![Global::string("msg", "Hello, world!")]);
    assert_eq!(parsed.program.functions[0].instructions[0], Instruction::puts("msg"));
}

#[test]
fn test_parse_loop_with_calls() {
    let source = indoc! {"
        ; count down from ten
        func @step(%0) -> i32 {
          %1 = const i32 1
          %2 = sub i32 %0 %1
          ret %2
        }

        func @main() -> i32 {
          %0 = const i32 10
          %1 = const i32 0
        loop:
          %2 = gt i32 %0 %1
          if_goto %2 body
          goto done
        body:
          %0 = call @step(%0)
          goto loop
        done:
          ret %0
        }
    "};

    let parsed = Frontend::parse_named_source(source, "loop.ir");
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);

    let program = parsed.program;
    assert_eq!(program.functions.len(), 2);
    assert_eq!(program.instruction_count(), 14);

    let main = program.functions.iter().find(|f| f.name == "main").unwrap();
    let kinds: Vec<InstrKind> = main.instructions.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            InstrKind::Const,
            InstrKind::Const,
            InstrKind::Label,
            InstrKind::Compare(CompareKind::Gt),
            InstrKind::IfGoto,
            InstrKind::Goto,
            InstrKind::Label,
            InstrKind::Call,
            InstrKind::Goto,
            InstrKind::Label,
            InstrKind::Ret,
        ]
    );
    assert_eq!(main.instructions[7], Instruction::call(Some(0), "step", &[0]));
}

#[test]
fn test_damaged_program_still_parses() {
    let source = indoc! {"
        func @main() -> i32 {
          %0 = const i32 1
          %1 = add i32 %0
          %2 = ge i32 %0 %0
          garbage here
          ret %0
        }
    "};

    let parsed = Frontend::parse_named_source(source, "damaged.ir");
    let main = &parsed.program.functions[0];

    assert_eq!(main.instructions.len(), 4);
    assert_eq!(main.instructions[1].kind, InstrKind::Unknown);
    assert_eq!(main.instructions[2].kind, InstrKind::Unknown);
    assert_eq!(main.instructions[3], Instruction::ret(Some(0)));

    assert_eq!(parsed.diagnostics.len(), 3);
    assert!(parsed.diagnostics.iter().all(|d| d.severity == Severity::Warning));
    assert_eq!(parsed.diagnostics[2].location.line, 5);
}

#[test]
fn test_display_reparses_to_same_program() {
    let source = indoc! {r#"
        @greeting = c"hi"
        @limit = i32 3
        func @main() -> i32 {
          %0 = const i32 4
          %1 = const i32 3
          %2 = mod i32 %0 %1
          %3 = lt i32 %2 %1
          puts @greeting
          ret %2
        }
    "#};

    let program = Frontend::parse_source(source);
    let reparsed = Frontend::parse_source(&program.to_string());
    assert_eq!(program, reparsed);
}

#[test]
fn test_parse_missing_file() {
    let err = Frontend::parse_file(std::path::Path::new("/definitely/not/here.ir")).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.ir"));
}

#[test]
fn test_parse_file_with_latin1_bytes() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("latin1.ir");
    let mut bytes = b"@msg = c\"caf\xE9\"\n".to_vec();
    bytes.extend_from_slice(b"func @main() -> i32 {\nputs @msg\nret\n}\n");
    std::fs::write(&path, bytes).unwrap();

    let parsed = Frontend::parse_file(&path).unwrap();
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.program.globals, vec![Global::string("msg", "caf\u{FFFD}")]);
    assert_eq!(parsed.program.functions[0].instructions.len(), 2);
}
