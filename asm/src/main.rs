use std::io::Write;

use smasm::{csource, dump, include, Error};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input program
    #[clap(default_value = "main.sm.yaml")]
    input: String,

    /// Output binary file
    #[clap(short, long, default_value = "main.sm.bin")]
    output: String,

    /// Write the program as C source
    #[clap(short, long)]
    c_source: Option<String>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("SM32 Assembler");

    if let Err(err) = run(&args) {
        err.print_diag();
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    println!("1. Read Program");
    println!("  < {}", args.input);
    let text = std::fs::read_to_string(&args.input)
        .map_err(|err| Error::FileOpen(args.input.clone(), err))?;
    let doc: serde_yaml::Value = serde_yaml::from_str(&text)?;
    let doc = include::expand(doc)?;

    println!("2. Assemble");
    let prog = smasm::assemble(&doc)?;
    println!("  {} words, {} labels", prog.nwords, prog.labels.len());

    println!("3. Write Binary");
    println!("  > {}", args.output);
    let words = prog.words()?;
    let mut file = std::fs::File::create(&args.output)
        .map_err(|err| Error::FileCreate(args.output.clone(), err))?;
    for word in &words {
        file.write_all(&word.to_le_bytes())
            .map_err(|err| Error::FileWrite(args.output.clone(), err))?;
    }

    if let Some(path) = &args.c_source {
        println!("4. Write C Source");
        println!("  > {}", path);
        let lines = csource::emit(&prog)?;
        std::fs::write(path, lines.join("\n") + "\n")
            .map_err(|err| Error::FileWrite(path.clone(), err))?;
    }

    if args.dump {
        dump::print_dump(&prog);
    }

    Ok(())
}
