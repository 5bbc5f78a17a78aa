use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Opaque token naming one storage generation of a [`Matrix`](crate::Matrix).
///
/// Every cursor captures the identity of the matrix that produced it. The
/// matrix issues a fresh identity whenever its storage is replaced, so a
/// cursor can later be checked against a matrix with
/// [`MatrixCursor::is_valid_with`](crate::MatrixCursor::is_valid_with).
/// Identities are never reused within a process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Identity(u64);

impl Identity {
    /// Identity carried by cursors that were not created from any matrix.
    pub const NONE: Identity = Identity(0);

    pub(crate) fn fresh() -> Self {
        Identity(NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed))
    }

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Identity(none)")
        } else {
            write!(f, "Identity(#{})", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_identities_are_unique() {
        let a = Identity::fresh();
        let b = Identity::fresh();
        assert_ne!(a, b);
        assert!(!a.is_none());
        assert!(!b.is_none());
    }

    #[test]
    fn default_is_none() {
        assert_eq!(Identity::default(), Identity::NONE);
        assert!(Identity::default().is_none());
    }
}
