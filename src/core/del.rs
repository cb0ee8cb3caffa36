use crate::core::selection::SelectionSet;
use crate::db::pool::DbPool;
use crate::db::queries::delete_record;
use crate::errors::AppResult;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a single record and drop it from the selection.
    ///
    /// A missing id is not an error; the return value tells whether a row
    /// was removed.
    pub fn delete_one(pool: &mut DbPool, selection: &mut SelectionSet, id: i64) -> AppResult<bool> {
        let removed = delete_record(&pool.conn, id)?;
        selection.remove(id);
        Ok(removed)
    }

    /// Delete every selected record, then clear the selection.
    ///
    /// Works on a snapshot of the selection inside one transaction: either all
    /// deletes are committed and the selection is cleared, or nothing changes
    /// and the selection is kept. Returns the number of rows removed (ids that
    /// no longer existed are skipped silently).
    pub fn delete_selected(pool: &mut DbPool, selection: &mut SelectionSet) -> AppResult<usize> {
        let ids = selection.snapshot();

        let removed = pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let mut removed = 0;
            for id in &ids {
                if delete_record(&tx, *id)? {
                    removed += 1;
                }
            }
            tx.commit()?;
            Ok(removed)
        })?;

        selection.clear();
        tracing::debug!(selected = ids.len(), removed, "bulk delete");
        Ok(removed)
    }
}
