//! Structural self-checks for derived tables.
//!
//! Builders call [`debug_invariants!`](crate::debug_invariants) on their output
//! so a broken table is caught where it is produced, not three call sites later
//! inside a traversal. Release builds skip the checks unless the
//! `strict-invariants` or `check-invariants` feature is enabled.

use crate::mesh_error::MeshTopoError;

/// Trait for validating the structural invariants of a derived table.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first violation encountered.
    fn validate_invariants(&self) -> Result<(), MeshTopoError>;
}

/// Map a failed check onto [`MeshTopoError::InvariantViolation`].
#[inline]
pub(crate) fn ensure(cond: bool, msg: impl FnOnce() -> String) -> Result<(), MeshTopoError> {
    if cond {
        Ok(())
    } else {
        Err(MeshTopoError::InvariantViolation(msg()))
    }
}

/// Run a fallible check and panic with context on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
