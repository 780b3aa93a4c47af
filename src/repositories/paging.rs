use crate::error::ContactResult;
use crate::models::PageRequest;
use crate::query::SearchQuery;
use sqlx::PgConnection;

/// Total match count and the identities on the requested page.
///
/// The two statements run one after the other without a shared snapshot, so
/// concurrent writes may make them disagree.
pub(crate) async fn fetch_page_ids(
    conn: &mut PgConnection,
    search: &SearchQuery,
    request: PageRequest,
) -> ContactResult<(i64, Vec<i32>)> {
    let mut count = search.count();
    let total = count
        .build_query_scalar::<i64>()
        .fetch_one(&mut *conn)
        .await?;

    let mut page = search.page(request);
    let ids = page
        .build_query_scalar::<i32>()
        .fetch_all(&mut *conn)
        .await?;

    tracing::debug!(
        total,
        returned = ids.len(),
        page = request.page,
        limit = request.limit,
        "Fetched page"
    );
    Ok((total, ids))
}
