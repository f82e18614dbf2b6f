#![cfg(feature = "conditional")]
//! Property-based tests for the forcing contracts of the conditional facade.
//!
//! ## Forcing Laws
//! - **Selection**: `get_or_else` forces exactly the producer its condition
//!   selects, never the other
//! - **Branch laziness**: `apply_or_else` forces its producers exactly when
//!   its condition holds, and its fallback exactly when it does not
//! - **Unconditional forcing**: `apply_either` forces its producer once on
//!   every path
//! - **Exclusive dispatch**: `run_else` invokes exactly one branch
//!
//! Using proptest, we generate random conditions and values to verify the
//! forcing counts across both branches.

use fnkit::conditional::{apply_either, apply_or_else, apply_or_else2, get_or_else, run_else};
use proptest::prelude::*;
use std::cell::Cell;

// =============================================================================
// Forcing Laws
// =============================================================================

proptest! {
    /// get_or_else forces exactly one of its two producers.
    #[test]
    fn prop_get_or_else_forces_exactly_the_selected_producer(
        condition in any::<bool>(),
        primary in any::<i32>(),
        fallback in any::<i32>(),
    ) {
        let primary_forcings = Cell::new(0_u32);
        let fallback_forcings = Cell::new(0_u32);

        let value = get_or_else(
            condition,
            || {
                primary_forcings.set(primary_forcings.get() + 1);
                primary
            },
            || {
                fallback_forcings.set(fallback_forcings.get() + 1);
                fallback
            },
        );

        if condition {
            prop_assert_eq!(value, primary);
            prop_assert_eq!((primary_forcings.get(), fallback_forcings.get()), (1, 0));
        } else {
            prop_assert_eq!(value, fallback);
            prop_assert_eq!((primary_forcings.get(), fallback_forcings.get()), (0, 1));
        }
    }

    /// apply_or_else forces its producer and function exactly when the
    /// condition holds, and its fallback exactly when it does not.
    #[test]
    fn prop_apply_or_else_branch_laziness(
        condition in any::<bool>(),
        input in any::<i32>(),
        fallback in any::<i32>(),
    ) {
        let producer_forcings = Cell::new(0_u32);
        let fallback_forcings = Cell::new(0_u32);

        let result = apply_or_else(
            condition,
            || {
                producer_forcings.set(producer_forcings.get() + 1);
                input
            },
            |n: i32| n.wrapping_mul(2),
            || {
                fallback_forcings.set(fallback_forcings.get() + 1);
                fallback
            },
        );

        if condition {
            prop_assert_eq!(result, input.wrapping_mul(2));
            prop_assert_eq!((producer_forcings.get(), fallback_forcings.get()), (1, 0));
        } else {
            prop_assert_eq!(result, fallback);
            prop_assert_eq!((producer_forcings.get(), fallback_forcings.get()), (0, 1));
        }
    }

    /// apply_or_else2 forces both producers or neither, never a mix.
    #[test]
    fn prop_apply_or_else2_forces_all_or_nothing(
        condition in any::<bool>(),
        first in any::<i32>(),
        second in any::<i32>(),
    ) {
        let forcings = Cell::new(0_u32);

        apply_or_else2(
            condition,
            || {
                forcings.set(forcings.get() + 1);
                first
            },
            || {
                forcings.set(forcings.get() + 1);
                second
            },
            |a: i32, b: i32| a.wrapping_add(b),
            || 0,
        );

        prop_assert_eq!(forcings.get(), if condition { 2 } else { 0 });
    }

    /// apply_either forces its producer exactly once on every path.
    #[test]
    fn prop_apply_either_always_forces_once(
        condition in any::<bool>(),
        input in any::<i32>(),
    ) {
        let forcings = Cell::new(0_u32);

        let result = apply_either(
            condition,
            || {
                forcings.set(forcings.get() + 1);
                input
            },
            |n: i32| n.wrapping_add(1),
            |n: i32| n.wrapping_sub(1),
        );

        prop_assert_eq!(forcings.get(), 1);
        let expected = if condition { input.wrapping_add(1) } else { input.wrapping_sub(1) };
        prop_assert_eq!(result, expected);
    }

    /// run_else invokes exactly one branch, never both, never neither.
    #[test]
    fn prop_run_else_invokes_exactly_one_branch(condition in any::<bool>()) {
        let primary = Cell::new(0_u32);
        let secondary = Cell::new(0_u32);

        run_else(
            || condition,
            || primary.set(primary.get() + 1),
            || secondary.set(secondary.get() + 1),
        );

        prop_assert_eq!(primary.get() + secondary.get(), 1);
        prop_assert_eq!(primary.get(), u32::from(condition));
    }
}
