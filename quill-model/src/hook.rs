//! Lifecycle hook dispatch.
//!
//! Routes a named hook point to the matching [`Kind`] slot. Slots default
//! to no-ops, so dispatch is unconditional.

use crate::{Kind, Record};

/// The lifecycle points a kind can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Hook {
    Booting,
    Booted,
    Saving,
    Inserting,
    Inserted,
    Saved,
}

/// Invokes the kind's slot for a hook point.
pub(crate) fn dispatch<K: Kind>(hook: Hook, record: &mut Record<K>) {
    match hook {
        Hook::Booting => K::booting(record),
        Hook::Booted => K::booted(record),
        Hook::Saving => K::saving(record),
        Hook::Inserting => K::inserting(record),
        Hook::Inserted => K::inserted(record),
        Hook::Saved => K::saved(record),
    }
}
