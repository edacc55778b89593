use smasm::{assemble, csource, Program};

fn compile(src: &str) -> Program {
    let doc: serde_yaml::Value = serde_yaml::from_str(src).unwrap();
    assemble(&doc).unwrap()
}

fn emit(src: &str) -> Vec<String> {
    csource::emit(&compile(src)).unwrap()
}

#[test]
fn push_and_halt() {
    assert_eq!(
        emit("- start: push 5\n- halt"),
        vec![
            "#define start 0",
            "LSHIFT(0, SM_OP_SHIFT) | SM_INSN_PUSH,",
            "LSHIFT(5, SM_OP_SHIFT) | SM_INSN__PUSH,",
            "SM_INSN_HALT,",
            "LSHIFT(1, SM_OP_SHIFT) | SM_INSN_LINK,",
            "LSHIFT(1, SM_OP_SHIFT) | SM_INSN_LINK,",
        ]
    );
}

#[test]
fn blocks_are_indented() {
    assert_eq!(
        emit("- - dup"),
        vec![
            "LSHIFT(1, SM_OP_SHIFT) | SM_INSN_BRA,",
            "  SM_INSN_DUP,",
            "LSHIFT(1, SM_OP_SHIFT) | SM_INSN_KET,",
            "LSHIFT(1, SM_OP_SHIFT) | SM_INSN_LINK,",
            "LSHIFT(1, SM_OP_SHIFT) | SM_INSN_LINK,",
        ]
    );
}

#[test]
fn trap_renders_by_name() {
    assert_eq!(
        emit("- trap SETDOT")[0],
        "LSHIFT(TRAP_SETDOT, SM_OP_SHIFT) | SM_INSN_TRAP,"
    );
}

#[test]
fn float_renders_split_bit_pattern() {
    // 1.0f32 == 0x3F800000
    let lines = emit("- float 1.0");
    assert_eq!(lines[0], "LSHIFT(0x3F8000, SM_OP_SHIFT) | SM_INSN_FLOAT,");
    assert_eq!(lines[1], "LSHIFT(0x0, SM_OP_SHIFT) | SM_INSN__FLOAT,");
}

#[test]
fn label_operands_render_symbolically() {
    assert_eq!(
        emit("- push end\n- int end\n- end: halt"),
        vec![
            "#define end 3",
            "LSHIFT(end >> SM_OP_SHIFT, SM_OP_SHIFT) | SM_INSN_PUSH,",
            "LSHIFT(end & SM_OP_MASK, SM_OP_SHIFT) | SM_INSN__PUSH,",
            "LSHIFT(end, SM_OP_SHIFT) | SM_INSN_INT,",
            "SM_INSN_HALT,",
            "LSHIFT(1, SM_OP_SHIFT) | SM_INSN_LINK,",
            "LSHIFT(1, SM_OP_SHIFT) | SM_INSN_LINK,",
        ]
    );
}

#[test]
fn word_lines_match_binary_word_count() {
    let src = "- begin: push 70000\n- float 2.5\n- - int 7\n  - trap CLEARSCREEN\n- halt";
    let prog = compile(src);
    let words = prog.words().unwrap();
    let lines = csource::emit(&prog).unwrap();
    let word_lines: Vec<_> = lines.iter().filter(|s| !s.starts_with("#define")).collect();
    assert_eq!(word_lines.len(), words.len());
    assert_eq!(words.len() as u32, prog.nwords);
}
