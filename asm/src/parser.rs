use arch::{comp::Comp, dest::Dest, jump::Jump};
use color_print::cformat;

use crate::error::Error;

// ----------------------------------------------------------------------------
// Line

/// One source line and what it parsed to.
#[derive(Debug)]
pub struct Line {
    idx: usize,
    raw: String,
    comment: Option<String>,
    pub stmt: Stmt,
}

impl Line {
    /// Parse one raw source line. Never fails for the caller: grammar
    /// violations are recorded as `Stmt::Err` so every line of the file can
    /// be checked in one run.
    pub fn parse(idx: usize, raw: &str) -> Self {
        let (code, comment) = match raw.split_once("//") {
            Some((code, comment)) => (code, Some(comment.to_string())),
            None => (raw, None),
        };
        let stmt = Stmt::parse(code.trim());
        Self {
            idx,
            raw: raw.to_string(),
            comment,
            stmt,
        }
    }

    /// 1-based line number.
    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// One listing row: line number, pc and binary word (for emitting
    /// statements), rendered statement, trailing comment.
    pub fn cformat(&self, word: Option<(u16, String)>) -> String {
        let (pc, bin) = match word {
            Some((pc, bin)) => (cformat!("<green>{:0>4X}</>", pc), bin),
            None => (" ".repeat(4), " ".repeat(16)),
        };
        let comment = match &self.comment {
            Some(c) => format!(" //{}", c),
            None => String::new(),
        };
        format!(
            "| {:>4} | {} | {} | {}{}",
            self.no(),
            pc,
            bin,
            self.stmt.cformat(),
            comment
        )
    }
}

/// Parse a whole source text, one `Line` per input line.
pub fn parse_source(src: &str) -> Vec<Line> {
    src.lines()
        .enumerate()
        .map(|(idx, raw)| Line::parse(idx, raw))
        .collect()
}

// ----------------------------------------------------------------------------
// Statement

/// What a source line means.
#[derive(Debug, PartialEq)]
pub enum Stmt {
    /// Nothing to assemble: blank or comment-only.
    Blank,
    /// `@value` — load an address into A.
    AInst(Addr),
    /// `[dest=]comp[;jump]` — compute.
    CInst {
        dest: Option<Dest>,
        comp: Comp,
        jump: Option<Jump>,
    },
    /// `(NAME)` — bind NAME to the current program counter.
    Label(String),
    /// The line matched no instruction shape.
    Err(Error),
}

impl Stmt {
    fn parse(code: &str) -> Stmt {
        if code.is_empty() {
            return Stmt::Blank;
        }
        if let Some(rest) = code.strip_prefix('@') {
            return match Addr::parse(rest) {
                Ok(addr) => Stmt::AInst(addr),
                Err(err) => Stmt::Err(err),
            };
        }
        if let Some(inner) = code.strip_prefix('(').and_then(|c| c.strip_suffix(')')) {
            let name = inner.trim();
            if name.is_empty() {
                return Stmt::Err(Error::EmptyLabel);
            }
            return Stmt::Label(name.to_string());
        }
        match Stmt::parse_cinst(code) {
            Ok(stmt) => stmt,
            Err(err) => Stmt::Err(err),
        }
    }

    fn parse_cinst(code: &str) -> Result<Stmt, Error> {
        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => (Some(dest.trim()), rest),
            None => (None, code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp.trim(), Some(jump.trim())),
            None => (rest.trim(), None),
        };
        let dest = dest
            .map(|s| {
                s.parse::<Dest>()
                    .map_err(|_| Error::UnknownDest(s.to_string()))
            })
            .transpose()?;
        let comp = comp
            .parse::<Comp>()
            .map_err(|_| Error::UnknownComp(comp.to_string()))?;
        let jump = jump
            .map(|s| {
                s.parse::<Jump>()
                    .map_err(|_| Error::UnknownJump(s.to_string()))
            })
            .transpose()?;
        Ok(Stmt::CInst { dest, comp, jump })
    }

    fn cformat(&self) -> String {
        match self {
            Stmt::Blank => String::new(),
            Stmt::AInst(addr) => addr.cformat(),
            Stmt::CInst { dest, comp, jump } => {
                let dest = dest
                    .map(|d| cformat!("<blue>{}=</>", d))
                    .unwrap_or_default();
                let jump = jump
                    .map(|j| cformat!("<green>;{}</>", j))
                    .unwrap_or_default();
                format!("{}{}{}", dest, cformat!("<red>{}</>", comp), jump)
            }
            Stmt::Label(name) => cformat!("<green>({})</>", name),
            Stmt::Err(_) => cformat!("<red,bold>! ERROR</>"),
        }
    }
}

// ----------------------------------------------------------------------------
// Address

/// Address operand of an A-instruction: a literal, or a symbol the resolver
/// turns into one.
#[derive(Debug, PartialEq)]
pub enum Addr {
    Num(u16),
    Sym(String),
}

impl Addr {
    fn parse(s: &str) -> Result<Addr, Error> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::EmptyAddress);
        }
        // A digit-led operand is always a literal, never a symbol.
        if s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<u16>() {
                Ok(n) => Ok(Addr::Num(n)),
                Err(_) => Err(Error::AddressRange(s.to_string())),
            };
        }
        Ok(Addr::Sym(s.to_string()))
    }

    fn cformat(&self) -> String {
        match self {
            Addr::Num(n) => cformat!("<red>@</><yellow>{}</>", n),
            Addr::Sym(s) => cformat!("<red>@</><cyan>{}</>", s),
        }
    }
}
