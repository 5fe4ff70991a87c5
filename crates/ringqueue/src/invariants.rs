//! Debug assertion macros for ring queue invariants.
//!
//! These are only active in debug builds (`#[cfg(debug_assertions)]`), so
//! there is zero overhead in release builds.

// =============================================================================
// Bounded residency
// =============================================================================

/// Assert that the outtake never holds more than `capacity` values.
///
/// **Invariant**: `0 ≤ resident ≤ capacity`
///
/// Used in: `worker::admit()` after every admission
macro_rules! debug_assert_bounded_resident {
    ($resident:expr, $capacity:expr) => {
        debug_assert!(
            $resident <= $capacity,
            "bounded residency violated: {} resident values exceed capacity {}",
            $resident,
            $capacity
        )
    };
}

// =============================================================================
// Close at most once
// =============================================================================

/// Assert that the intake close flag flipped from open to closed exactly once.
///
/// **Invariant**: `try_close()` succeeds at most once per queue
///
/// Used in: `Intake::try_close()` after the swap
macro_rules! debug_assert_closed_once {
    ($was_closed:expr, $now_closed:expr) => {
        debug_assert!(
            !$was_closed && $now_closed,
            "close protocol violated: intake closed more than once"
        )
    };
}

// =============================================================================
// Drain before close
// =============================================================================

/// Assert that outtake is only closed after intake stopped delivering.
///
/// **Invariant**: `outtake closed → intake closed ∧ intake drained`
///
/// Used in: `worker::run()` right before closing the outtake
macro_rules! debug_assert_intake_drained {
    ($pending:expr) => {
        debug_assert!(
            $pending == 0,
            "drain-before-close violated: {} commands still pending on intake",
            $pending
        )
    };
}

pub(crate) use debug_assert_bounded_resident;
pub(crate) use debug_assert_closed_once;
pub(crate) use debug_assert_intake_drained;
