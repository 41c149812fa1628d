//! Per-type configuration for concrete record kinds.

use quill_store::FieldValue;

use crate::Record;

/// Configuration a concrete record type supplies to the layer.
///
/// Implement this on a marker type per logical entry kind. Everything
/// beyond [`NAME`](Kind::NAME) is optional — the defaults declare no
/// attributes, no hooks, and no computed fields:
///
/// ```
/// use quill_model::Kind;
///
/// struct Book;
///
/// impl Kind for Book {
///     const NAME: &'static str = "book";
///     const ATTRIBUTES: &'static [&'static str] = &["author", "isbn"];
/// }
/// ```
///
/// Hook slots are invoked unconditionally at fixed points of the record
/// lifecycle; the default bodies are no-ops, so a kind only writes the
/// slots it cares about. Hooks receive the record itself and may mutate it
/// (mutations made before boot completes do not mark the record dirty).
pub trait Kind: Sized {
    /// The registered kind name. Forced into the store's kind field on
    /// every save, overriding any caller-supplied value.
    const NAME: &'static str;

    /// Declared attribute names, fixed for the whole type. Must be
    /// disjoint from [`RESERVED_FIELDS`](crate::RESERVED_FIELDS); the
    /// collision is reported at hydration time.
    const ATTRIBUTES: &'static [&'static str] = &[];

    /// Runs first thing in every constructor, before the existence check.
    fn booting(record: &mut Record<Self>) {
        let _ = record;
    }

    /// Runs after hydration, while the record is still logically booting
    /// (dirty tracking is not yet armed).
    fn booted(record: &mut Record<Self>) {
        let _ = record;
    }

    /// Runs at the start of every save, before any store write.
    fn saving(record: &mut Record<Self>) {
        let _ = record;
    }

    /// Runs before the first insert of an unsaved record.
    fn inserting(record: &mut Record<Self>) {
        let _ = record;
    }

    /// Runs after the insert assigned the record its id.
    fn inserted(record: &mut Record<Self>) {
        let _ = record;
    }

    /// Runs after entry and attribute writes completed, before the dirty
    /// flag is cleared.
    fn saved(record: &mut Record<Self>) {
        let _ = record;
    }

    /// Computed-accessor fallback for [`Record::get`]: called for names
    /// that are not real fields. Return `None` for unknown names.
    fn computed(record: &Record<Self>, field: &str) -> Option<FieldValue> {
        let _ = (record, field);
        None
    }
}
