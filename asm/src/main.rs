use c10asm::{util, Assembler, Diag, FsLoader, ObjectFile, ObjectSink};
use std::process::ExitCode;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Entry file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Object file
    #[clap(short, long, default_value = "a.obj")]
    output: String,

    /// Dump symbol tables
    #[clap(short, long)]
    dump: bool,

    /// Write symbol tables as YAML
    #[clap(short, long)]
    symbols: Option<String>,
}

fn main() -> ExitCode {
    use clap::Parser;

    env_logger::init();
    let args: Args = Args::parse();
    println!("Caltech10 Assembler");

    match run(&args) {
        Ok(()) => {
            println!("Assembler finished successfully!");
            ExitCode::SUCCESS
        }
        Err(diag) => {
            diag.print();
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Diag> {
    let mut asm = Assembler::new(FsLoader, &args.input);

    println!("1. Collect Symbols");
    println!("  < {}", args.input);
    let source = asm.collect_symbols()?;

    println!("2. Generate Object");
    println!("  > {}", args.output);
    let mut object = ObjectFile::create(&args.output)?;
    asm.generate(&source, &mut object)?;
    object.finalize()?;

    if args.dump {
        util::print_dump(asm.code_symbols(), asm.data_symbols());
    }
    if let Some(path) = &args.symbols {
        println!("  > {}", path);
        util::export_symbols(path, asm.code_symbols(), asm.data_symbols())?;
    }
    Ok(())
}
