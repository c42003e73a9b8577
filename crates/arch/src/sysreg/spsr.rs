//! SPSR_EL2 Field Constants.
//!
//! SPSR_EL2 holds the processor state restored by the `eret` that drops from
//! EL2 to EL1: the DAIF interrupt masks and the M[3:0] field naming the target
//! exception level and stack. The value here lands the kernel at EL1h with
//! debug, IRQ, and FIQ exceptions masked.

/// D, I, and F mask bits (bits 9, 7, and 6): debug, IRQ, and FIQ exceptions
/// stay masked across the `eret`.
pub const SPSR_MASK_ALL: u64 = 11 << 6;

/// M[3:0] = 0b0101: return to EL1 using the EL1 dedicated stack pointer (EL1h).
pub const SPSR_EL1: u64 = 5;

/// SPSR_EL2 programming value: interrupt masks plus the EL1h target mode.
pub const SPSR_VALUE: u64 = SPSR_MASK_ALL | SPSR_EL1;

/// Component fields of [`SPSR_VALUE`] as name/mask pairs.
///
/// The masks are pairwise disjoint and OR together to the derived value.
pub const FIELDS: &[(&str, u64)] = &[
    ("SPSR_MASK_ALL", SPSR_MASK_ALL),
    ("SPSR_EL1", SPSR_EL1),
];
