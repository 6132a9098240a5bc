use ipparse::config::Config;
use ipparse::error::Error;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn read_sample(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("corpora")
        .join("samples")
        .join(name);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    // Normalize line endings for cross-platform comparison
    text.replace("\r\n", "\n")
}

fn assert_parity(stem: &str) {
    let input = read_sample(&format!("{}.ippcode23", stem));
    let expected = read_sample(&format!("{}.xml", stem));
    let result = ipparse::compile(&input, &Config::default()).unwrap();
    assert_eq!(result, expected);
}

fn compile(src: &str) -> Result<String, Error> {
    ipparse::compile(src, &Config::default())
}

fn exit_code(src: &str) -> i32 {
    compile(src).unwrap_err().exit_code()
}

#[test]
fn test_countdown_parity() {
    assert_parity("countdown");
}

#[test]
fn test_frames_parity() {
    assert_parity("frames");
}

#[test]
fn test_header_only_parity() {
    assert_parity("header_only");
}

#[test]
fn test_scenario_single_defvar() {
    let out = compile(".IPPcode23\nDEFVAR GF@x").unwrap();
    assert_eq!(
        out,
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<program language=\"IPPcode23\">\n",
            "  <instruction order=\"1\" opcode=\"DEFVAR\">\n",
            "    <arg1 type=\"var\">GF@x</arg1>\n",
            "  </instruction>\n",
            "</program>\n",
        )
    );
}

#[test]
fn test_scenario_error_codes() {
    assert_eq!(exit_code("DEFVAR GF@x"), 21);
    assert_eq!(exit_code(".IPPcode23\nFOOBAR"), 22);
    assert_eq!(exit_code(".IPPcode23\nMOVE GF@x"), 23);
}

#[test]
fn test_scenario_empty_string() {
    let out = compile(".IPPcode23\nPUSHS string@").unwrap();
    assert!(out.contains("<arg1 type=\"string\"/>"));
}

#[test]
fn test_scenario_comment_and_blank_lines() {
    let out = compile(".IPPcode23\n# just a comment\n\nBREAK").unwrap();
    assert!(out.contains("<instruction order=\"1\" opcode=\"BREAK\"/>"));
    assert!(!out.contains("order=\"2\""));
}

#[test]
fn test_order_ignores_interspersed_comments() {
    let out = compile(".IPPcode23\n\n# a\nBREAK\n\n\n# b\n   \nBREAK # c\n#\nBREAK\n").unwrap();
    for n in 1..=3 {
        assert!(out.contains(&format!("order=\"{}\" opcode=\"BREAK\"", n)));
    }
    assert!(!out.contains("order=\"4\""));
}

#[test]
fn test_comment_and_whitespace_idempotence() {
    let plain = compile(".IPPcode23\nMOVE GF@x int@1\nWRITE GF@x\n").unwrap();
    let noisy = compile(
        "  .IPPcode23 # hello\n\t MOVE   GF@x\tint@1   # set\n   WRITE GF@x#print\t\n",
    )
    .unwrap();
    assert_eq!(plain, noisy);
}

#[test]
fn test_header_flexibility() {
    let bare = compile(".IPPcode23\nBREAK").unwrap();
    let commented = compile(".IPPcode23 # note\nBREAK").unwrap();
    let lowercase = compile(".ippcode23\nBREAK").unwrap();
    assert_eq!(bare, commented);
    assert_eq!(bare, lowercase);
}

#[test]
fn test_case_insensitive_opcodes() {
    let out = compile(".IPPcode23\njumpifneq Loop LF@a string@x\n").unwrap();
    assert!(out.contains("opcode=\"JUMPIFNEQ\""));
    // operands keep their case
    assert!(out.contains("<arg1 type=\"label\">Loop</arg1>"));
}

#[test]
fn test_operand_errors() {
    for src in [
        ".IPPcode23\nDEFVAR x",
        ".IPPcode23\nDEFVAR GF@1x",
        ".IPPcode23\nDEFVAR gf@x",
        ".IPPcode23\nPUSHS float@1.5",
        ".IPPcode23\nPUSHS int@one",
        ".IPPcode23\nPUSHS bool@True",
        ".IPPcode23\nPUSHS nil@",
        ".IPPcode23\nPUSHS string@bad\\1",
        ".IPPcode23\nREAD GF@x float",
        ".IPPcode23\nJUMP GF@x",
        ".IPPcode23\nLABEL 1st",
        ".IPPcode23\nWRITE string@a\u{7}b\u{0}c",
    ] {
        assert_eq!(exit_code(src), 23, "{}", src);
    }
}

#[test]
fn test_first_error_decides_code() {
    // unknown opcode on line 2 is reported before the bad operand on line 3
    assert_eq!(exit_code(".IPPcode23\nNOPE\nDEFVAR x"), 22);
    assert_eq!(exit_code(".IPPcode23\nDEFVAR x\nNOPE"), 23);
    // header checked before anything else
    assert_eq!(exit_code("NOPE\n.IPPcode23"), 21);
}

#[test]
fn test_missing_header_variants() {
    assert_eq!(exit_code(""), 21);
    assert_eq!(exit_code("\n\n# comment only\n"), 21);
    assert_eq!(exit_code(".IPPcode22\nBREAK"), 21);
    assert_eq!(exit_code(".IPPcode23x\nBREAK"), 21);
}

#[test]
fn test_symbol_variable_renders_like_variable() {
    let out = compile(".IPPcode23\nMOVE GF@a TF@b\n").unwrap();
    assert!(out.contains("<arg1 type=\"var\">GF@a</arg1>"));
    assert!(out.contains("<arg2 type=\"var\">TF@b</arg2>"));
}

#[test]
fn test_unicode_lookalike_opcode_rejected() {
    assert_eq!(exit_code(".IPPcode23\n\u{131}nt2char GF@c int@65"), 22);
}

#[test]
fn test_string_with_at_sign() {
    let out = compile(".IPPcode23\nWRITE string@user@host\n").unwrap();
    assert!(out.contains("<arg1 type=\"string\">user@host</arg1>"));
}
