//! HCR_EL2 Field Constants.
//!
//! HCR_EL2 is the Hypervisor Configuration Register; it controls the execution
//! state and trapping behavior of the lower exception levels. Bring-up only
//! needs the RW bit, which selects AArch64 for EL1.

/// RW (bit 31): the execution state for EL1 is AArch64.
pub const HCR_RW: u64 = 1 << 31;

/// Component fields of the HCR_EL2 programming value as name/mask pairs.
pub const FIELDS: &[(&str, u64)] = &[("HCR_RW", HCR_RW)];
