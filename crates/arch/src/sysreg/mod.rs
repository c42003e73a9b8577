//! AArch64 System Register Definitions.
//!
//! Defines the bit-field constants for the registers programmed during early
//! EL2-to-EL1 bring-up, one submodule per register:
//!
//! # Modules
//!
//! - `sctlr`: SCTLR_EL1 fields and the MMU-disabled programming value.
//! - `hcr`: HCR_EL2 execution-state control.
//! - `spsr`: SPSR_EL2 interrupt masks and target-mode field.
//!
//! Fields within a register never overlap in bit position; each derived value
//! is exactly the bitwise OR of its component fields. The `FIELDS` table in
//! each submodule lists the components by name for diagnostics and tests.

/// HCR_EL2 execution-state control for EL1.
pub mod hcr;
/// SCTLR_EL1 fields and the MMU-disabled value.
pub mod sctlr;
/// SPSR_EL2 interrupt masks and target exception level.
pub mod spsr;
