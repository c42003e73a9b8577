//! AArch64 EL2-to-EL1 boot register value library.
//!
//! This crate derives the programming values for the three system registers an
//! EL2 entry point writes before dropping into a kernel at EL1:
//! 1. **SCTLR_EL1:** System control with the MMU disabled (reserved bits, UMA,
//!    WFE/WFI trap control).
//! 2. **HCR_EL2:** Hypervisor configuration selecting AArch64 execution for EL1.
//! 3. **SPSR_EL2:** Saved program status with D/I/F masked and EL1h as the
//!    target mode for the `eret`.
//! 4. **Reporting:** A fixed-order textual report of the derived values for
//!    inspection and verification.
//!
//! Every value is a `u64` constant composed by bitwise OR of hardware-defined
//! fields; nothing here touches hardware or can fail at runtime.
//!
//! ```
//! use sysregs_core::BootRegisterReport;
//!
//! let report = BootRegisterReport::compute();
//! assert!(report.render().starts_with("HCR_RW = "));
//! ```

/// Fixed-order report of the derived register values.
pub mod report;
/// Per-register bit-field constants and derived programming values.
pub mod sysreg;

/// Snapshot of the three derived values; construct with [`BootRegisterReport::compute`].
pub use crate::report::BootRegisterReport;
