//! AArch64 boot register value CLI.
//!
//! Prints the derived EL2-to-EL1 register programming values to standard
//! output, one `<NAME> = <decimal>` line per register, then exits 0. The
//! binary takes no arguments and reads no configuration; the output is
//! identical on every run.
//!
//! Diagnostic logging goes to stderr and is filtered with `RUST_LOG`
//! (default: warn), so it never perturbs the stdout contract.

use tracing_subscriber::EnvFilter;

use sysregs_core::BootRegisterReport;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    BootRegisterReport::compute().print();
}
