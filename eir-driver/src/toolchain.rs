//! External assembler/linker invocation

use eir_common::CompilerError;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;
use which::which;

/// A C compiler driver used to turn assembly into an executable
pub struct Toolchain {
    cc: String,
}

impl Toolchain {
    pub fn new(cc: &str) -> Self {
        Self { cc: cc.to_string() }
    }

    pub fn name(&self) -> &str {
        &self.cc
    }

    /// Find the compiler on `PATH`
    pub fn locate(&self) -> Result<PathBuf, CompilerError> {
        which(&self.cc).map_err(|e| CompilerError::Toolchain {
            message: format!("Could not find '{}' in PATH: {}", self.cc, e),
        })
    }

    /// Run `CC ASM -o BINARY`
    pub fn assemble_and_link(&self, asm: &Path, binary: &Path) -> Result<(), CompilerError> {
        let cc = self.locate()?;
        debug!("Running {} {} -o {}", cc.display(), asm.display(), binary.display());

        let output = Command::new(&cc)
            .arg(asm)
            .arg("-o")
            .arg(binary)
            .output()
            .map_err(|e| CompilerError::Toolchain {
                message: format!("Failed to run {}: {}", cc.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CompilerError::Toolchain {
                message: format!("{} exited with {}: {}", self.cc, output.status, stderr.trim()),
            });
        }
        Ok(())
    }
}
