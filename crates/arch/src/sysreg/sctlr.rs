//! SCTLR_EL1 Field Constants.
//!
//! SCTLR_EL1 is the System Control Register for EL1; it governs the MMU,
//! caches, and alignment checking for the kernel. Early boot programs it with
//! the MMU disabled (M bit clear) so the kernel starts with an identity view
//! of physical memory.
//!
//! The constants here are the component fields combined into
//! [`SCTLR_VALUE_MMU_DISABLED`].

/// Reserved bits that must be written as one: bits 29:28, 23:22, 20, and 11.
pub const SCTLR_RESERVED: u64 = (3 << 28) | (3 << 22) | (1 << 20) | (1 << 11);

/// UMA (bit 9): EL0 accesses to the DAIF interrupt masks do not trap.
pub const USER_MASK_ACCESS: u64 = 1 << 9;

/// nTWE (bit 18) and nTWI (bit 16): WFE and WFI executed at EL0 do not trap
/// to EL1.
pub const SCTLR_WFE_WFI_ENABLED: u64 = (1 << 18) | (1 << 16);

/// SCTLR_EL1 programming value for early boot with the MMU disabled.
///
/// The M bit (bit 0) is left clear; everything else is the OR of the reserved
/// bits, UMA, and the WFE/WFI trap controls.
pub const SCTLR_VALUE_MMU_DISABLED: u64 =
    SCTLR_RESERVED | USER_MASK_ACCESS | SCTLR_WFE_WFI_ENABLED;

/// Component fields of [`SCTLR_VALUE_MMU_DISABLED`] as name/mask pairs.
///
/// The masks are pairwise disjoint and OR together to the derived value.
pub const FIELDS: &[(&str, u64)] = &[
    ("SCTLR_RESERVED", SCTLR_RESERVED),
    ("USER_MASK_ACCESS", USER_MASK_ACCESS),
    ("SCTLR_WFE_WFI_ENABLED", SCTLR_WFE_WFI_ENABLED),
];
