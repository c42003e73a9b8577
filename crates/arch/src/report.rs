//! Boot register value reporting.
//!
//! Snapshots the derived register programming values and renders them in the
//! fixed order downstream consumers expect:
//! 1. `HCR_RW`
//! 2. `SPSR_VALUE`
//! 3. `SCTLR_VALUE_MMU_DISABLED`
//!
//! Each line has the form `<NAME> = <decimal value>`. The report also derives
//! [`serde::Serialize`] so the values can be exported as JSON for external
//! tooling.

use std::fmt;

use serde::Serialize;

use crate::sysreg::{hcr, sctlr, spsr};

/// Snapshot of the three derived register-programming values.
///
/// Field order matches the textual output order. Construct with
/// [`BootRegisterReport::compute`]; the computation is pure constant
/// arithmetic and produces the same snapshot on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BootRegisterReport {
    /// HCR_EL2 value (RW bit only).
    pub hcr_rw: u64,
    /// SPSR_EL2 value (D/I/F masked, target mode EL1h).
    pub spsr_value: u64,
    /// SCTLR_EL1 value with the MMU disabled.
    pub sctlr_value_mmu_disabled: u64,
}

impl BootRegisterReport {
    /// Computes the report from the architectural constants.
    ///
    /// # Returns
    ///
    /// A snapshot of the three derived values. Emits a `tracing` debug event
    /// carrying the values for diagnostics.
    pub fn compute() -> Self {
        let report = Self {
            hcr_rw: hcr::HCR_RW,
            spsr_value: spsr::SPSR_VALUE,
            sctlr_value_mmu_disabled: sctlr::SCTLR_VALUE_MMU_DISABLED,
        };
        tracing::debug!(
            hcr_rw = report.hcr_rw,
            spsr_value = report.spsr_value,
            sctlr_value_mmu_disabled = report.sctlr_value_mmu_disabled,
            "derived boot register values"
        );
        report
    }

    /// Renders the report as its fixed three-line text form.
    ///
    /// # Returns
    ///
    /// A `String` containing one `<NAME> = <decimal>` line per value, each
    /// terminated by a newline, in the fixed output order.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Prints the report to standard output.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for BootRegisterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HCR_RW = {}", self.hcr_rw)?;
        writeln!(f, "SPSR_VALUE = {}", self.spsr_value)?;
        writeln!(
            f,
            "SCTLR_VALUE_MMU_DISABLED = {}",
            self.sctlr_value_mmu_disabled
        )
    }
}
