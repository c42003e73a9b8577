//! Unit tests for the SCTLR_EL1 field constants.
//!
//! Verifies that each field sits at its architecturally defined bit position
//! and that the MMU-disabled value is exactly the OR of its components.

use sysregs_core::sysreg::sctlr::*;

#[test]
fn test_reserved_bits_formula() {
    assert_eq!(
        SCTLR_RESERVED,
        (3 << 28) | (3 << 22) | (1 << 20) | (1 << 11),
        "Reserved bits should cover 29:28, 23:22, 20, and 11"
    );
}

#[test]
fn test_user_mask_access_is_bit_9() {
    assert_eq!(USER_MASK_ACCESS, 1 << 9, "UMA is bit 9");
}

#[test]
fn test_wfe_wfi_bits() {
    assert_eq!(
        SCTLR_WFE_WFI_ENABLED,
        (1 << 18) | (1 << 16),
        "nTWE is bit 18 and nTWI is bit 16"
    );
}

#[test]
fn test_mmu_disabled_value_is_or_of_components() {
    // Recompute the expected value from the raw bit patterns rather than the
    // named constants so a broken constant cannot hide behind itself.
    let expected: u64 =
        (3 << 28) | (3 << 22) | (1 << 20) | (1 << 11) | (1 << 9) | (1 << 18) | (1 << 16);
    assert_eq!(
        SCTLR_VALUE_MMU_DISABLED, expected,
        "MMU-disabled value should be the OR of reserved, UMA, and WFE/WFI bits"
    );
}

#[test]
fn test_mmu_bit_stays_clear() {
    assert_eq!(
        SCTLR_VALUE_MMU_DISABLED & 1,
        0,
        "M bit (bit 0) must stay clear in the MMU-disabled value"
    );
}

#[test]
fn test_fields_pairwise_disjoint() {
    for (i, &(name1, mask1)) in FIELDS.iter().enumerate() {
        for &(name2, mask2) in &FIELDS[i + 1..] {
            assert_eq!(
                mask1 & mask2,
                0,
                "Fields {name1} and {name2} should not overlap"
            );
        }
    }
}

#[test]
fn test_fields_or_to_derived_value() {
    let combined = FIELDS.iter().fold(0u64, |acc, &(_, mask)| acc | mask);
    assert_eq!(
        combined, SCTLR_VALUE_MMU_DISABLED,
        "FIELDS should OR together to the derived value"
    );
}
