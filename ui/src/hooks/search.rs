use std::rc::Rc;

use gospel_model::prelude::*;
use yew::prelude::*;
use yew_more_hooks::prelude::*;

use crate::backend::HymnService;
use crate::error::ApiError;
use crate::hooks::use_backend;

/// A single search request, as issued by the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HymnQuery {
    Paginated { page_num: usize, keyword: String },
    Random { keyword: String },
}

/// Outcome of a [`HymnQuery`], unified over both endpoints.
#[derive(Clone, Debug, PartialEq)]
pub enum HymnResponse {
    Page(Rc<Pagination<HymnSummary>>),
    Random(Rc<Vec<HymnSummary>>),
}

/// Run the query against the hymn service.
///
/// The `revision` distinguishes repeated identical searches; the service is
/// never cached, so every trigger issues a fresh request.
#[hook]
pub fn use_hymn_search(
    query: HymnQuery,
    revision: usize,
) -> UseAsyncHandleDeps<HymnResponse, ApiError> {
    let backend = use_backend();

    use_async_with_cloned_deps(
        move |(query, _)| async move {
            let service = HymnService::new(backend);
            match query {
                HymnQuery::Paginated { page_num, keyword } => service
                    .pagination(page_num, &keyword)
                    .await
                    .map(|page| HymnResponse::Page(Rc::new(page))),
                HymnQuery::Random { keyword } => service
                    .random_retrieve(&keyword)
                    .await
                    .map(|records| HymnResponse::Random(Rc::new(records))),
            }
        },
        (query, revision),
    )
}
