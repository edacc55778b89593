use arch::word::Uword;
use color_print::cprintln;

use crate::assemble::Program;

/// Print the assembled listing: word offset, word bytes, instruction,
/// with label lines interleaved.
pub fn print_dump(prog: &Program) {
    println!("-------+-------------+--------------------------------");
    for line in &prog.lines {
        for (name, _) in prog.labels.iter().filter(|(_, pc)| **pc == line.pc) {
            cprintln!("       |             | <g>{}:</>", name);
        }
        let indent = "  ".repeat(line.depth);
        match line.code.resolve(&prog.labels) {
            Ok(insns) => {
                for (i, insn) in insns.iter().enumerate() {
                    let word = insn.pack() as Uword;
                    println!(
                        "[{:04X}] | {:02X} {:02X} {:02X} {:02X} | {}{}",
                        line.pc + i as Uword,
                        (word >> 24) & 0xFF,
                        (word >> 16) & 0xFF,
                        (word >> 8) & 0xFF,
                        word & 0xFF,
                        indent,
                        insn.cformat()
                    );
                }
            }
            Err(_) => {
                cprintln!(
                    "[{:04X}] | <r,s>!! !! !! !!</> | {}{}",
                    line.pc,
                    indent,
                    line.code.cformat()
                );
            }
        }
    }
    println!("-------+-------------+--------------------------------");
}
