mod encode;
mod error;
mod parser;
mod symbols;

use color_print::{cformat, cprintln};
use std::io::Write;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file (defaults to the input with a `.hack` extension)
    #[clap(short, long)]
    output: Option<String>,

    /// Dump the assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Write the resolved symbol table as JSON next to the output
    #[clap(short, long)]
    sym: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    println!("1. Read and Parse Lines");
    println!("  < {}", &args.input);
    let src = std::fs::read_to_string(&args.input)
        .expect(&cformat!("<r,s>Failed to open file</>: {}", &args.input));
    let mut lines = parser::parse_source(&src);

    println!("2. Resolve Symbols");
    let table = symbols::build(&mut lines);

    let mut errors = 0;
    for line in &lines {
        if let parser::Stmt::Err(err) = &line.stmt {
            err.print_diag(&args.input, line.no(), line.raw());
            errors += 1;
        }
    }
    if errors > 0 {
        cprintln!(
            "<red,bold>error</>: {} invalid line(s), no output written",
            errors
        );
        std::process::exit(1);
    }

    println!("3. Generate Binary");
    let output = args.output.unwrap_or_else(|| default_output(&args.input));
    println!("  > {}", &output);
    let mut file = std::fs::File::create(&output)
        .expect(&cformat!("<r,s>Failed to create file</>: {}", &output));
    for word in encode::program(&lines, &table) {
        writeln!(file, "{}", word)
            .expect(&cformat!("<r,s>Failed to write file</>: {}", &output));
    }

    if args.sym {
        let path = format!("{}.sym", &output);
        println!("  > {}", &path);
        let json = table.to_json().expect("symbol table serializes");
        std::fs::write(&path, json)
            .expect(&cformat!("<r,s>Failed to write file</>: {}", &path));
    }

    if args.dump {
        let mut pc: u16 = 0;
        for line in &lines {
            let word = encode::to_bin(&line.stmt, &table).map(|bin| {
                let at = pc;
                pc += 1;
                (at, bin)
            });
            println!("{}", line.cformat(word));
        }
        println!("+------+------+------------------+----------------------");
    }
}

fn default_output(input: &str) -> String {
    let stem = input.strip_suffix(".asm").unwrap_or(input);
    format!("{stem}.hack")
}
