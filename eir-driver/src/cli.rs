use clap::Parser;
use eir_backend::LoweringOptions;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eclipseir", version, about = "Compile EclipseIR text to AArch64 assembly")]
pub struct Cli {
    /// Input IR file
    pub input: PathBuf,

    /// Output assembly file
    #[arg(short = 's', long = "asm", value_name = "FILE", default_value = "output.s")]
    pub asm: PathBuf,

    /// Assemble and link the assembly into this binary
    #[arg(short, long, value_name = "BINARY")]
    pub output: Option<PathBuf>,

    /// C compiler used to assemble and link
    #[arg(long, value_name = "CC", default_value = "gcc")]
    pub cc: String,

    /// Fail on malformed lines, unlowerable instructions and toolchain errors
    #[arg(long)]
    pub strict: bool,

    /// Emit each IR instruction as a comment above its assembly
    #[arg(long)]
    pub annotate: bool,

    /// Print the parsed IR to stdout
    #[arg(long)]
    pub print_ir: bool,

    /// Write the parsed IR as JSON
    #[arg(long, value_name = "PATH")]
    pub dump_ir_json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn lowering_options(&self) -> LoweringOptions {
        LoweringOptions {
            strict: self.strict,
            annotate: self.annotate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["eclipseir", "prog.ir"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("prog.ir"));
        assert_eq!(cli.asm, PathBuf::from("output.s"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.cc, "gcc");
        assert_eq!(cli.lowering_options(), LoweringOptions::default());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "eclipseir", "prog.ir", "-s", "prog.s", "-o", "prog", "--cc", "clang",
            "--strict", "--annotate", "--print-ir", "--dump-ir-json", "prog.json", "-v",
        ])
        .unwrap();
        assert_eq!(cli.asm, PathBuf::from("prog.s"));
        assert_eq!(cli.output, Some(PathBuf::from("prog")));
        assert_eq!(cli.cc, "clang");
        assert!(cli.print_ir && cli.verbose);
        assert_eq!(cli.dump_ir_json, Some(PathBuf::from("prog.json")));
        assert_eq!(
            cli.lowering_options(),
            LoweringOptions {
                strict: true,
                annotate: true
            }
        );
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["eclipseir"]).is_err());
    }
}
