//! One-to-many relation lookup by attribute equality.

use quill_store::{ContentStore, QueryService};

use crate::{Kind, Record, RecordError, RecordResult, SELF_ID_ATTR};

impl<K: Kind> Record<K> {
    /// Finds every `R` whose `foreign_key` attribute equals this record's
    /// local-key value.
    ///
    /// Id-like local keys (`id`, `ID`, `post_id`, `_id`) resolve to this
    /// record's own id, which saved related records carry in their
    /// [`SELF_ID_ATTR`] attribute. Any other local key is read through the
    /// generic accessor and must name a real or computed field.
    pub fn has_many<R: Kind>(
        &self,
        store: &impl ContentStore,
        queries: &impl QueryService,
        foreign_key: &str,
        local_key: &str,
    ) -> RecordResult<Vec<Record<R>>> {
        let local_value = if matches!(local_key, "id" | "ID" | "post_id") || local_key == SELF_ID_ATTR
        {
            self.id().ok_or(RecordError::Unsaved)?.to_string()
        } else {
            self.get(local_key)
                .ok_or_else(|| RecordError::UnknownField(local_key.to_string()))?
                .to_string()
        };

        Record::<R>::where_eq(store, queries, foreign_key, local_value)
    }
}
