mod common;

use c10asm::{Assembler, Error};
use common::{assemble, fail, run, MemLoader};

#[test]
fn labels_and_relative_jumps() {
    let out = assemble(&[(
        "main.asm",
        "; demo program
start
    LDI 5
    NOP

loop          ; spin
    JMP loop
    JZ start
",
    )]);
    assert_eq!(
        out,
        vec![
            "0000      ; start",
            "0000  8905;     LDI 5",
            "0001  1F80;     NOP",
            "0002      ; loop",
            "0002  C002;     JMP loop",
            "0003  9FFC;     JZ start",
            "",
        ]
    );
}

#[test]
fn forward_reference() {
    let out = assemble(&[(
        "main.asm",
        "    JNZ done
    NOP
    NOP
done
    RTS
",
    )]);
    assert_eq!(out[0], "0000  9C02;     JNZ done");
    assert_eq!(out[3], "0003      ; done");
}

#[test]
fn long_jump_to_absolute_ten() {
    let out = assemble(&[(
        "main.asm",
        "    JMP ten
.org 10
ten
    NOP
",
    )]);
    assert_eq!(out[0], "0000  C00A;     JMP ten");
    assert_eq!(out[1], "000A      ; ten");
    assert_eq!(out[2], "000A  1F80;     NOP");
}

#[test]
fn data_segment_and_indexed() {
    let out = assemble(&[(
        "main.asm",
        ".dseg
buf 16
count 1
.cseg
.org 32
main
    LDD count
    LD S+ buf
    ADD X,7
    ADD S 7
    ADD 3
    ST -X, count
    LD X 0
",
    )]);
    assert_eq!(
        out,
        vec![
            "0020      ; main",
            "0020  8010;     LDD count",
            "0021  9200;     LD S+ buf",
            "0022  6907;     ADD X,7",
            "0023  6A07;     ADD S 7",
            "0024  6803;     ADD 3",
            "0025  AE10;     ST -X, count",
            "0026  9700;     LD X 0",
            "",
        ]
    );
}

#[test]
fn instruction_pointer() {
    let out = assemble(&[(
        "main.asm",
        ".org 5
    JMP .IP
    JZ .IP
",
    )]);
    assert_eq!(out[0], "0005  C005;     JMP .IP");
    assert_eq!(out[1], "0006  9FFF;     JZ .IP");
}

#[test]
fn include_shares_cursors_and_restores_segment() {
    let files = [
        (
            "main.asm",
            "    NOP
.dseg
var 2
.include lib.asm
other 3
.cseg
    JMP sub
",
        ),
        (
            "lib.asm",
            "sub
    RTS
.dseg
libvar 4
",
        ),
    ];
    let out = assemble(&files);
    assert_eq!(
        out,
        vec![
            "0000  1F80;     NOP",
            "0001      ; sub",
            "0001  1F00;     RTS",
            "0002  C001;     JMP sub",
            "",
        ]
    );

    let mut asm = Assembler::new(MemLoader::new(&files), "main.asm");
    asm.assemble(&mut Vec::<String>::new()).unwrap();
    let data = asm.data_symbols();
    assert_eq!(data.get_val("var"), Some(0));
    assert_eq!(data.get_val("libvar"), Some(2));
    assert_eq!(data.get_val("other"), Some(6));
    let sub = asm.code_symbols().get("sub").unwrap();
    assert_eq!(sub.addr, 1);
    assert_eq!(sub.location, ("lib.asm".to_string(), 1));
}

#[test]
fn idempotent() {
    let files = [
        ("main.asm", "start\n    LDI 1\n.include lib.asm\n    JMP start\n"),
        ("lib.asm", "helper\n    RTS\n"),
    ];
    assert_eq!(assemble(&files), assemble(&files));
}

#[test]
fn label_lines_match_symbol_table() {
    let files = [(
        "main.asm",
        "a\n    NOP\n.org 40\nb\n    NOP\n    NOP\nc\n\n; gap\n    NOP\nd\n",
    )];
    let out = assemble(&files);
    let mut asm = Assembler::new(MemLoader::new(&files), "main.asm");
    asm.assemble(&mut Vec::<String>::new()).unwrap();
    for (name, sym) in asm.code_symbols().iter() {
        let line = format!("{:04X}      ; {}", sym.addr, name);
        assert!(out.contains(&line), "{}", line);
    }
}

#[test]
fn missing_entry_is_a_startup_error() {
    let mut asm = Assembler::new(MemLoader::new(&[]), "main.asm");
    let diag = asm.assemble(&mut Vec::<String>::new()).unwrap_err();
    assert!(diag.location.is_none());
    assert!(matches!(diag.error, Error::FileNotFound(ref p) if p == "main.asm"));
}

// ----------------------------------------------------------------------------
// Fatal errors

#[test]
fn duplicate_label_across_include() {
    let (file, line, err) = fail(&[
        ("main.asm", "    NOP\nstart\n    NOP\n.include lib.asm\n"),
        ("lib.asm", "    RTS\nstart\n"),
    ]);
    assert_eq!((file.as_str(), line), ("lib.asm", 2));
    assert!(matches!(err, Error::RedefinedLabel(ref n) if n == "start"));
}

#[test]
fn duplicate_label_after_include() {
    let (file, line, err) = fail(&[
        ("main.asm", ".include lib.asm\n    NOP\nstart\n"),
        ("lib.asm", "start\n    RTS\n"),
    ]);
    assert_eq!((file.as_str(), line), ("main.asm", 3));
    assert!(matches!(err, Error::RedefinedLabel(_)));
}

#[test]
fn duplicate_variable() {
    let (file, line, err) = fail(&[("main.asm", ".dseg\nbuf 1\nbuf 2\n")]);
    assert_eq!((file.as_str(), line), ("main.asm", 3));
    assert!(matches!(err, Error::RedefinedVariable(_)));
}

#[test]
fn invalid_names() {
    let (_, line, err) = fail(&[("main.asm", "    NOP\n1234\n")]);
    assert_eq!(line, 2);
    assert!(matches!(err, Error::InvalidStatement(ref n) if n == "1234"));

    let (_, line, err) = fail(&[("main.asm", ".dseg\nmy_var 2\n")]);
    assert_eq!(line, 2);
    assert!(matches!(err, Error::InvalidStatement(_)));
}

#[test]
fn invalid_variable_length() {
    for src in [".dseg\nbuf\n", ".dseg\nbuf many\n", ".dseg\nbuf -1\n"] {
        let (_, line, err) = fail(&[("main.asm", src)]);
        assert_eq!(line, 2, "{}", src);
        assert!(matches!(err, Error::InvalidLength), "{}", src);
    }
}

#[test]
fn indented_line_in_data_segment() {
    let (_, line, err) = fail(&[("main.asm", "    NOP\n.dseg\n    NOP\n")]);
    assert_eq!(line, 3);
    assert!(matches!(err, Error::IndentedData));
}

#[test]
fn pseudo_op_errors() {
    let (_, line, err) = fail(&[("main.asm", "    NOP\n.word 1\n")]);
    assert_eq!(line, 2);
    assert!(matches!(err, Error::UnknownPseudoOp(ref op) if op == ".word"));

    let (_, line, err) = fail(&[("main.asm", ".dseg\n.org 10\n")]);
    assert_eq!(line, 2);
    assert!(matches!(err, Error::OrgInData));

    let (_, line, err) = fail(&[("main.asm", ".org ten\n")]);
    assert_eq!(line, 1);
    assert!(matches!(err, Error::NonNumericArgument(..)));
}

#[test]
fn include_errors() {
    let (file, line, err) = fail(&[("main.asm", "    NOP\n.include nope.asm\n")]);
    assert_eq!((file.as_str(), line), ("main.asm", 2));
    assert!(matches!(err, Error::FileNotFound(ref p) if p == "nope.asm"));

    let (_, line, err) = fail(&[("main.asm", "\n.include main.asm\n")]);
    assert_eq!(line, 2);
    assert!(matches!(err, Error::SelfInclude(_)));

    let (file, line, err) = fail(&[
        ("main.asm", ".include a.asm\n"),
        ("a.asm", "    NOP\n.include b.asm\n"),
        ("b.asm", "    NOP\n"),
    ]);
    assert_eq!((file.as_str(), line), ("a.asm", 2));
    assert!(matches!(err, Error::NestedInclude));
}

#[test]
fn second_include_is_allowed() {
    let out = assemble(&[
        ("main.asm", ".include a.asm\n.include b.asm\n"),
        ("a.asm", "    NOP\n"),
        ("b.asm", "    RTS\n"),
    ]);
    assert_eq!(out, vec!["0000  1F80;     NOP", "0001  1F00;     RTS", ""]);
}

#[test]
fn encoding_errors_carry_location() {
    let (file, line, err) = fail(&[
        ("main.asm", ".include lib.asm\n    NOP\n    HALT\n"),
        ("lib.asm", "    RTS\n"),
    ]);
    assert_eq!((file.as_str(), line), ("main.asm", 3));
    assert!(matches!(err, Error::UnknownOpcode(ref op) if op == "HALT"));

    let (file, line, err) = fail(&[
        ("main.asm", ".include lib.asm\n"),
        ("lib.asm", "    NOP 1\n"),
    ]);
    assert_eq!((file.as_str(), line), ("lib.asm", 1));
    assert!(matches!(err, Error::Arity(_, "no arguments")));

    let (_, line, err) = fail(&[("main.asm", "    ADD Y,7\n")]);
    assert_eq!(line, 1);
    assert!(matches!(err, Error::AluRegister(_)));

    let (_, _, err) = fail(&[("main.asm", "    LD SX 0\n")]);
    assert!(matches!(err, Error::InvalidArgument(ref a) if a == "SX"));

    let (_, _, err) = fail(&[("main.asm", "    LDI nowhere\n")]);
    assert!(matches!(err, Error::InvalidArgument(ref a) if a == "nowhere"));
}

#[test]
fn range_errors() {
    let (_, line, err) = fail(&[("main.asm", "    LDI 255\n    LDI 256\n")]);
    assert_eq!(line, 2);
    assert!(matches!(err, Error::OutOfRange(_)));

    let (_, line, err) = fail(&[("main.asm", "    JMP 8191\n    JMP 8192\n")]);
    assert_eq!(line, 2);
    assert!(matches!(err, Error::OutOfRange(_)));

    let (_, _, err) = fail(&[("main.asm", ".org 300\nfar\n.org 0\n    JZ far\n")]);
    assert!(matches!(err, Error::OutOfRange(ref a) if a == "far"));
}

#[test]
fn symbol_errors_win_over_encoding_errors() {
    let (_, line, err) = fail(&[("main.asm", "    HALT\nx\nx\n")]);
    assert_eq!(line, 3);
    assert!(matches!(err, Error::RedefinedLabel(_)));
}

#[test]
fn output_before_the_error_stays() {
    let (out, result) = run(&[("main.asm", "    NOP\n    RTS\n    HALT\n    NOP\n")]);
    assert!(result.is_err());
    assert_eq!(out, vec!["0000  1F80;     NOP", "0001  1F00;     RTS"]);
}

#[test]
fn separators_alone_are_rejected() {
    let (out, result) = run(&[("main.asm", "    NOP\n    ,\nhere\n    JMP here\n")]);
    assert!(out.is_empty());
    let diag = result.unwrap_err();
    assert_eq!(diag.location.unwrap().line, 2);
    assert!(matches!(diag.error, Error::UnknownOpcode(ref op) if op == ","));
}

#[test]
fn last_word_of_code_space() {
    let out = assemble(&[("main.asm", ".org 65535\n    NOP\n")]);
    assert_eq!(out, vec!["FFFF  1F80;     NOP", ""]);

    let out = assemble(&[("main.asm", ".org 65535\n    NOP\n.org 0\n    RTS\n")]);
    assert_eq!(out, vec!["FFFF  1F80;     NOP", "0000  1F00;     RTS", ""]);

    let (_, line, err) = fail(&[("main.asm", ".org 65535\n    NOP\n    RTS\n")]);
    assert_eq!(line, 3);
    assert!(matches!(err, Error::AddressOverflow));

    let (_, line, err) = fail(&[("main.asm", ".org 65535\n    NOP\nend\n")]);
    assert_eq!(line, 3);
    assert!(matches!(err, Error::AddressOverflow));
}
