use arch::inst::Inst;

use crate::parser::{Addr, Line, Stmt};
use crate::symbols::SymbolTable;

/// Resolve a statement against the completed symbol table. Blank lines,
/// labels and invalid lines resolve to `None`.
///
/// Panics if a symbolic address is missing from the table: the resolver
/// binds every referenced name before encoding starts, so a miss here is a
/// bug in the assembler, not in the source program.
pub fn resolve(stmt: &Stmt, table: &SymbolTable) -> Option<Inst> {
    match stmt {
        Stmt::AInst(Addr::Num(n)) => Some(Inst::At(*n)),
        Stmt::AInst(Addr::Sym(name)) => {
            let addr = table
                .get(name)
                .unwrap_or_else(|| panic!("unresolved symbol `{name}`"));
            Some(Inst::At(addr))
        }
        Stmt::CInst { dest, comp, jump } => Some(Inst::Comp {
            dest: *dest,
            comp: *comp,
            jump: *jump,
        }),
        Stmt::Blank | Stmt::Label(_) | Stmt::Err(_) => None,
    }
}

/// One 16-character binary word, or `None` for statements that emit nothing.
pub fn to_bin(stmt: &Stmt, table: &SymbolTable) -> Option<String> {
    resolve(stmt, table).map(|inst| format!("{:016b}", inst.to_bin()))
}

/// Encode a full record sequence, omitting non-emitting records and keeping
/// the order of the rest.
pub fn program(lines: &[Line], table: &SymbolTable) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| to_bin(&line.stmt, table))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;
    use crate::symbols;

    fn assemble(src: &str) -> Vec<String> {
        let mut lines = parse_source(src);
        let table = symbols::build(&mut lines);
        program(&lines, &table)
    }

    #[test]
    fn blank_and_label_emit_nothing() {
        assert_eq!(assemble("// only\n\n(LOOP)"), Vec::<String>::new());
    }

    #[test]
    fn numeric_address_word() {
        assert_eq!(assemble("@5"), vec!["0000000000000101"]);
    }

    #[test]
    fn symbolic_address_word() {
        // two variables ahead of it push `counter` to slot 18
        let out = assemble("@a\n@b\n@counter");
        assert_eq!(out[2], "0000000000010010");
    }

    #[test]
    fn builtin_symbol_word() {
        assert_eq!(assemble("@SCREEN"), vec!["0100000000000000"]);
    }

    #[test]
    fn compute_word() {
        assert_eq!(assemble("AM=D-A;JEQ"), vec!["1110010011101010"]);
    }

    #[test]
    fn add_two_and_three() {
        let src = "// init\n@2\nD=A\n@3\nD=D+A\n@0\nM=D";
        assert_eq!(
            assemble(src),
            vec![
                "0000000000000010",
                "1110110000010000",
                "0000000000000011",
                "1110000010010000",
                "0000000000000000",
                "1110001100001000",
            ]
        );
    }

    #[test]
    fn loop_with_label_and_variable() {
        let src = "@i\nM=0\n(LOOP)\n@i\nM=M+1\n@LOOP\n0;JMP";
        assert_eq!(
            assemble(src),
            vec![
                "0000000000010000",
                "1110101010001000",
                "0000000000010000",
                "1111110111001000",
                "0000000000000010",
                "1110101010000111",
            ]
        );
    }
}
