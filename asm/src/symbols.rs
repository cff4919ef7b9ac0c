use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::error::Error;
use crate::parser::{Addr, Line, Stmt};

/// First data-memory slot handed out to variables.
const VAR_BASE: u16 = 16;

/// Resolved name -> address mapping. Built once per run by [`build`],
/// read-only afterwards.
#[derive(Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    map: IndexMap<String, u16>,
}

impl SymbolTable {
    pub fn get(&self, name: &str) -> Option<u16> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// The resolved table as pretty JSON, for debugger consumption.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the symbol table for a full record sequence.
///
/// Lines that redefine a label are rewritten in place to carry the error;
/// resolution continues so every problem in the file is found in one run.
pub fn build(lines: &mut [Line]) -> SymbolTable {
    let (mut map, pending) = bind_labels(lines);
    allocate_variables(&mut map, pending);
    SymbolTable { map }
}

/// First pass: bind labels to their program-counter position, collect
/// symbolic address references that are not yet known.
fn bind_labels(lines: &mut [Line]) -> (IndexMap<String, u16>, IndexSet<String>) {
    let mut map = builtins();
    let mut pending: IndexSet<String> = IndexSet::new();
    let mut pc: u16 = 0;
    for line in lines.iter_mut() {
        match &line.stmt {
            Stmt::Label(name) if map.contains_key(name) => {
                line.stmt = Stmt::Err(Error::DuplicatedLabel);
            }
            Stmt::Label(name) => {
                // An earlier `@name` was a forward reference to this label,
                // not a variable.
                pending.shift_remove(name);
                map.insert(name.clone(), pc);
            }
            Stmt::AInst(Addr::Sym(name)) => {
                if !map.contains_key(name) {
                    pending.insert(name.clone());
                }
                pc += 1;
            }
            Stmt::AInst(Addr::Num(_)) | Stmt::CInst { .. } => pc += 1,
            Stmt::Blank | Stmt::Err(_) => {}
        }
    }
    (map, pending)
}

/// Second pass: anything still unresolved is a variable; hand out data
/// addresses in first-seen order.
fn allocate_variables(map: &mut IndexMap<String, u16>, pending: IndexSet<String>) {
    for (slot, name) in pending.into_iter().enumerate() {
        map.insert(name, VAR_BASE + slot as u16);
    }
}

/// Names every program can use without declaring them.
fn builtins() -> IndexMap<String, u16> {
    let mut map = IndexMap::new();
    for r in 0..16 {
        map.insert(format!("R{r}"), r);
    }
    for (addr, name) in ["SP", "LCL", "ARG", "THIS", "THAT"].into_iter().enumerate() {
        map.insert(name.to_string(), addr as u16);
    }
    map.insert("SCREEN".to_string(), 16384);
    map.insert("KBD".to_string(), 24576);
    map
}
