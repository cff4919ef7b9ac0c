use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Empty addresses are not permitted.")]
    EmptyAddress,

    #[error("Empty labels are not permitted.")]
    EmptyLabel,

    #[error("Address out of range: `{0}`")]
    AddressRange(String),

    #[error("Unknown destination: `{0}`")]
    UnknownDest(String),

    #[error("Unknown computation: `{0}`")]
    UnknownComp(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Duplicated label.")]
    DuplicatedLabel,
}

impl Error {
    /// Print the error with its source location and the offending line.
    pub fn print_diag(&self, path: &str, line_no: usize, source: &str) {
        cprintln!("<red,bold>error</>: {}", self);
        cprintln!("     <blue>--></> <underline>{}:{}</>", path, line_no);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_no, source);
        cprintln!("      <blue>|</>");
    }
}
