//! Grid VM command-line driver.
//!
//! This binary is the entry point for running programs. It performs:
//! 1. **Run:** Load an assembly program and an optional input grid, execute to halt, and
//!    print the final state and output grid.
//! 2. **Disassemble:** Print the normalised form of an assembly program with instruction
//!    indices.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::process;

use gridvm_core::config::{Config, Dialect};
use gridvm_core::isa::disasm;
use gridvm_core::isa::program::Program;
use gridvm_core::sim::loader;
use gridvm_core::sim::{RunOutcome, Simulator};
use gridvm_core::Grid;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(
    name = "gridvm",
    author,
    version,
    about = "Grid virtual machine",
    long_about = "Run a grid VM assembly program against an input grid.\n\nExamples:\n  gridvm run -f programs/copy.asm --input grid.txt\n  gridvm run -f - --dialect register < prog.asm\n  gridvm disasm -f programs/copy.asm"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it halts.
    Run(RunArgs),

    /// Print a program in normalised form.
    Disasm {
        /// Assembly file to disassemble (`-` for stdin).
        #[arg(short, long)]
        file: String,
    },
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Assembly file to execute (`-` for stdin).
    #[arg(short, long)]
    file: String,

    /// Input grid file (whitespace-separated rows). Defaults to all zeros.
    #[arg(short, long)]
    input: Option<String>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Operand dialect (overrides the config).
    #[arg(long, value_enum)]
    dialect: Option<DialectArg>,

    /// Grid side length (overrides the config).
    #[arg(long)]
    io_size: Option<usize>,

    /// Stop after this many steps (overrides the config).
    #[arg(long)]
    max_steps: Option<u64>,

    /// Log every executed instruction.
    #[arg(long)]
    trace: bool,

    /// Print execution statistics after the run.
    #[arg(long)]
    stats: bool,

    /// Print the final state, output grid and statistics as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DialectArg {
    Stack,
    Register,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Stack => Self::Stack,
            DialectArg::Register => Self::Register,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Disasm { file } => cmd_disasm(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn setup_tracing(trace: bool) {
    let level = if trace { Level::TRACE } else { Level::WARN };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

/// Loads the program, applies config overrides, runs to halt and prints the result.
///
/// A run stopped by the step limit still prints its final state, then exits with code 2.
fn cmd_run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dialect) = args.dialect {
        config.machine.dialect = dialect.into();
    }
    if let Some(io_size) = args.io_size {
        config.machine.io_size = io_size;
    }
    if args.max_steps.is_some() {
        config.general.max_steps = args.max_steps;
    }
    config.general.trace_instructions |= args.trace;
    config.validate()?;

    setup_tracing(config.general.trace_instructions);

    let program = read_program(&args.file)?;
    let input = match &args.input {
        Some(path) => loader::load_grid(path, config.machine.io_size)?,
        None => Grid::new(config.machine.io_size),
    };

    let mut sim = Simulator::from_config(program, input, &config)?;
    let outcome = sim.run()?;

    if args.json {
        let report = serde_json::json!({
            "state": sim.vm.state(),
            "output_grid": sim.vm.output_grid(),
            "stats": &sim.stats,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("VM state: {}\n", sim.vm.state());
        println!("Output grid:");
        print!("{}", sim.vm.output_grid());
        if args.stats {
            sim.stats.print();
        }
    }

    if let RunOutcome::StepLimit { steps } = outcome {
        eprintln!("\n[!] step limit reached after {steps} steps");
        process::exit(2);
    }
    Ok(())
}

fn cmd_disasm(file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let program = read_program(file)?;
    print!("{}", disasm::disassemble(&program));
    Ok(())
}

fn read_program(file: &str) -> Result<Program, Box<dyn std::error::Error>> {
    if file == "-" {
        let mut source = String::new();
        let _ = io::stdin().read_to_string(&mut source)?;
        Ok(loader::parse_program(&source)?)
    } else {
        Ok(loader::load_program(file)?)
    }
}
