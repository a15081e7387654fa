use std::path::Path;

use color_print::{ceprintln, cformat};
use hackasm::{util, Error, SymbolKind};

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

    /// Output file [default: <INPUT>.hack]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Export the symbol table as YAML
    #[clap(short, long)]
    symbols: Option<String>,

    /// Do not print progress
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    let output = args.output.clone().unwrap_or_else(|| {
        Path::new(&args.input)
            .with_extension("hack")
            .to_string_lossy()
            .into_owned()
    });

    macro_rules! progress {
        ($($arg:tt)*) => {
            if !args.quiet {
                println!($($arg)*);
            }
        };
    }

    progress!("Hack Assembler");

    progress!("1. Read File");
    progress!("  < {}", args.input);
    let source = match read_source(&args.input) {
        Ok(source) => source,
        Err(err) => fail(&err),
    };

    progress!("2. Resolve Labels & Encode Instructions");
    let (words, symbols) = match hackasm::assemble_with_symbols(&source) {
        Ok(ok) => ok,
        Err(errors) => {
            for diag in errors.iter() {
                diag.print(&args.input);
            }
            ceprintln!(
                "<red,bold>error</>: could not assemble `{}` due to {} previous error(s)",
                args.input,
                errors.len()
            );
            std::process::exit(1);
        }
    };
    let count = |kind: SymbolKind| symbols.iter().filter(|(_, s)| s.kind == kind).count();
    progress!(
        "  {} instructions, {} labels, {} variables",
        words.len(),
        count(SymbolKind::Label),
        count(SymbolKind::Variable)
    );

    progress!("3. Write Binary");
    progress!("  > {}", output);
    if let Err(err) = write_binary(&output, &words) {
        fail(&err);
    }

    if let Some(path) = &args.symbols {
        progress!("  > {}", path);
        let exported = symbols
            .to_yaml()
            .and_then(|yaml| std::fs::write(path, yaml).map_err(|e| Error::FileWrite(path.clone(), e)));
        if let Err(err) = exported {
            fail(&err);
        }
    }

    if args.dump {
        util::print_dump(&args.input, &source, &words, &symbols);
    }
}

fn read_source(path: &str) -> Result<String, Error> {
    use std::io::Read;

    let mut file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    let mut source = String::new();
    file.read_to_string(&mut source)
        .map_err(|e| Error::FileRead(path.to_string(), e))?;
    Ok(source)
}

fn write_binary(path: &str, words: &[hackasm::Word]) -> Result<(), Error> {
    use std::io::Write;

    let file = std::fs::File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    let mut writer = std::io::BufWriter::new(file);
    for word in words {
        writeln!(writer, "{}", word).map_err(|e| Error::FileWrite(path.to_string(), e))?;
    }
    writer
        .flush()
        .map_err(|e| Error::FileWrite(path.to_string(), e))
}

fn fail(err: &Error) -> ! {
    let cause = std::error::Error::source(err)
        .map(|cause| cformat!(" <dim>({})</>", cause))
        .unwrap_or_default();
    ceprintln!("<red,bold>error</>: {}{}", err, cause);
    std::process::exit(1);
}
