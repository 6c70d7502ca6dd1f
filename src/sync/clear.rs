use crate::errors::Result;
use crate::interfaces::ObjectStore;
use crate::utils::log_utils::Logger;

/// Delete every object in `bucket`, following continuation tokens until the
/// store reports the final page.
///
/// Returns how many objects were deleted. The first failing list or delete
/// call is returned as-is; objects already deleted stay deleted.
pub fn clear_bucket<S: ObjectStore + ?Sized>(
    store: &S,
    bucket: &str,
    logger: &Logger,
) -> Result<usize> {
    let mut deleted = 0;
    let mut token: Option<String> = None;

    loop {
        let page = store.list_objects(bucket, token.take())?;
        logger.debug(&format!(
            "Listed {} object(s) in {bucket} (more pages: {})",
            page.keys.len(),
            page.next_token.is_some()
        ));

        for key in &page.keys {
            store.delete_object(bucket, key)?;
            deleted += 1;
            logger.info(&format!("Deleted object: {key}"));
        }

        match page.next_token {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    logger.normal(&format!(
        "Cleared all objects from bucket: {bucket} ({deleted} deleted)"
    ));
    Ok(deleted)
}
