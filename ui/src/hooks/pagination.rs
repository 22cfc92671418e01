use patternfly_yew::prelude::Navigation;
use yew::prelude::*;

/// Current page number plus the navigation callback feeding it.
#[derive(Clone, PartialEq)]
pub struct UsePaginationState {
    pub page: UseStateHandle<usize>,
    /// Takes the navigation event and the total number of pages.
    pub on_page_change: Callback<(Navigation, usize)>,
}

#[hook]
pub fn use_pagination_state() -> UsePaginationState {
    let page = use_state_eq(|| 1);

    let on_page_change = {
        let page = page.clone();

        Callback::from(move |(nav, total_pages): (Navigation, usize)| {
            let new_page = match nav {
                Navigation::First => 1,
                Navigation::Last => total_pages,
                Navigation::Next => *page + 1,
                Navigation::Previous => (*page).saturating_sub(1),
                Navigation::Page(new_page) => new_page,
            };
            page.set(new_page.max(1));
        })
    };

    UsePaginationState { page, on_page_change }
}
