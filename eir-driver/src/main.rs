//! EclipseIR Compiler Driver
//!
//! `eclipseir INPUT [-s ASM] [-o BINARY]` parses an IR file, writes AArch64
//! assembly and optionally hands it to a C compiler to build an executable.

mod cli;
mod pipeline;
mod toolchain;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::error;
use toolchain::Toolchain;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::init();
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let program = pipeline::parse_input(&cli.input, cli.strict)?;

    if cli.print_ir {
        print!("{}", program);
    }
    if let Some(path) = &cli.dump_ir_json {
        pipeline::dump_ir_json(path, &program)?;
    }

    pipeline::write_assembly_file(&cli.asm, &program, &cli.lowering_options())?;

    let Some(binary) = &cli.output else {
        println!("[Success] Assembly written to {}", cli.asm.display());
        return Ok(());
    };

    println!("[Building] {} -> {}", cli.asm.display(), binary.display());
    let toolchain = Toolchain::new(&cli.cc);
    match toolchain.assemble_and_link(&cli.asm, binary) {
        Ok(()) => println!("[Success] Binary created: ./{}", binary.display()),
        Err(e) => {
            println!("[Error] {} compilation failed.", toolchain.name());
            error!("{}", e);
            if cli.strict {
                return Err(e.into());
            }
        }
    }
    Ok(())
}
