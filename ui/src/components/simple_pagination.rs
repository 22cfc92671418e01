use patternfly_yew::prelude::*;
use yew::prelude::*;

use gospel_model::pagination::DEFAULT_PAGE_SIZE;

#[derive(Clone, PartialEq, Properties)]
pub struct SimplePaginationProps {
    #[prop_or(PaginationPosition::Bottom)]
    pub position: PaginationPosition,

    pub total_records: Option<usize>,
    pub total_pages: usize,
    pub page: usize,
    pub on_page_change: Callback<(Navigation, usize)>,
}

/// Page navigation and page info for the result table.
///
/// The page size is fixed; the hymn service ignores any limit parameter.
#[function_component(SimplePagination)]
pub fn simple_pagination(props: &SimplePaginationProps) -> Html {
    let onnavigation = {
        let total_pages = props.total_pages;
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |nav: Navigation| {
            on_page_change.emit((nav, total_pages));
        })
    };

    html!(
        <Pagination
            position={props.position}
            total_entries={props.total_records}
            offset={(props.page - 1) * DEFAULT_PAGE_SIZE}
            selected_choice={DEFAULT_PAGE_SIZE}
            entries_per_page_choices={vec![DEFAULT_PAGE_SIZE]}
            onnavigation={onnavigation}
            onlimit={Callback::default()}
        />
    )
}
