use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gospel_model::prelude::{HymnSummary, Pagination};
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_more_hooks::prelude::*;

use crate::backend::HymnService;
use crate::components::hymn::{HymnResult, RowAction};
use crate::components::simple_pagination::SimplePagination;
use crate::hooks::{use_backend, use_hymn_search, use_pagination_state, HymnQuery, HymnResponse};
use crate::utils;

/// How long the loading overlay stays up after a search is triggered.
///
/// A fixed pacing delay, independent of the completion of the request itself.
const LOADING_OVERLAY_DELAY_MS: u32 = 3_300;

#[function_component(Index)]
pub fn index() -> Html {
    let backend = use_backend();
    let toaster = use_toaster().expect("Must be nested inside a ToastViewer");

    // the text in the input field
    let text = use_state_eq(|| utils::host_value("keywordInput").unwrap_or_default());

    // the active search
    let keyword = use_state_eq(|| (*text).clone());
    let random = use_state_eq(|| false);
    // bumped on every trigger, repeating a search always issues a fresh request
    let revision = use_state_eq(|| 0usize);

    let pagination = use_pagination_state();

    let query = use_memo(
        (*pagination.page, (*keyword).clone(), *random),
        |(page_num, keyword, random)| match random {
            true => HymnQuery::Random {
                keyword: keyword.clone(),
            },
            false => HymnQuery::Paginated {
                page_num: *page_num,
                keyword: keyword.clone(),
            },
        },
    );

    let search = use_hymn_search((*query).clone(), *revision);

    // the last successful result, kept through failures
    let records = use_state_eq(|| Rc::new(Vec::<HymnSummary>::new()));
    let page_meta = use_state_eq(|| None::<Rc<Pagination<HymnSummary>>>);

    {
        let records = records.clone();
        let page_meta = page_meta.clone();
        let toaster = toaster.clone();
        use_effect_with((*search).clone(), move |state| match state {
            UseAsyncState::Ready(Ok(HymnResponse::Page(page))) => {
                records.set(Rc::new(page.records.clone()));
                page_meta.set(Some(page.clone()));
            }
            UseAsyncState::Ready(Ok(HymnResponse::Random(list))) => {
                records.set(list.clone());
                page_meta.set(None);
            }
            UseAsyncState::Ready(Err(err)) => {
                toaster.toast(Toast {
                    r#type: AlertType::Danger,
                    title: err.to_string().into(),
                    ..Default::default()
                });
            }
            _ => {}
        });
    }

    // one-shot status message handed over by the hosting page
    {
        let toaster = toaster.clone();
        use_effect_with((), move |()| {
            if let Some(message) =
                utils::host_value("torokuMsgContainer").filter(|message| !message.is_empty())
            {
                toaster.toast(Toast {
                    r#type: AlertType::Info,
                    title: message.into(),
                    ..Default::default()
                });
            }
        });
    }

    let loading = use_state_eq(|| false);

    let table_ref = use_node_ref();
    {
        let table_ref = table_ref.clone();
        use_effect_with((*records).clone(), move |_| {
            utils::adjust_background_width(&table_ref);
        });
    }

    let onchange = use_callback(text.clone(), |new_text, text| text.set(new_text));

    let trigger = {
        let text = text.clone();
        let keyword = keyword.clone();
        let random = random.clone();
        let page = pagination.page.clone();
        let revision = revision.clone();
        let loading = loading.clone();
        let table_ref = table_ref.clone();

        Callback::from(move |to_random: bool| {
            utils::adjust_background_width(&table_ref);

            loading.set(true);
            {
                let loading = loading.clone();
                Timeout::new(LOADING_OVERLAY_DELAY_MS, move || loading.set(false)).forget();
            }

            keyword.set((*text).clone());
            random.set(to_random);
            page.set(1);
            revision.set(*revision + 1);
        })
    };

    let onsearch = {
        let trigger = trigger.clone();
        Callback::from(move |_: MouseEvent| trigger.emit(false))
    };
    let onrandom = {
        let trigger = trigger.clone();
        Callback::from(move |_: MouseEvent| trigger.emit(true))
    };
    let onsubmit = {
        let trigger = trigger.clone();
        Callback::from(move |_| trigger.emit(false))
    };

    let onaction = use_callback(backend.clone(), |action: RowAction, backend| match action {
        RowAction::OpenLink(link) => utils::open_in_new_tab(&link),
        RowAction::DownloadScore(id) => {
            match HymnService::new(backend.clone()).score_download_url(id) {
                Ok(url) => utils::open_in_new_tab(url.as_str()),
                Err(err) => log::warn!("Failed to resolve the score URL: {err}"),
            }
        }
    });

    html!(
        <>
            <PageSection sticky={[PageSectionSticky::Top]} variant={PageSectionVariant::Light}>
                <Grid gutter=true>
                    <GridItem cols={[4]}>
                        <Content>
                            <Title>{"Hymn search"}</Title>
                        </Content>
                    </GridItem>
                    <GridItem cols={[8]}>
                        <Split gutter=true>
                            <SplitItem fill=true>
                                <form {onsubmit}>
                                    // needed to trigger submit when pressing enter in the search field
                                    <input type="submit" hidden=true formmethod="dialog" />
                                    <SearchInput
                                        placeholder="Search hymns by name or lyrics"
                                        value={(*text).clone()}
                                        {onchange}
                                    />
                                </form>
                            </SplitItem>
                            <SplitItem>
                                <Button
                                    id="hymnSearchBtn"
                                    variant={ButtonVariant::Primary}
                                    label="Search"
                                    disabled={*loading}
                                    onclick={onsearch}
                                />
                            </SplitItem>
                            <SplitItem>
                                <Button
                                    id="randomSearchBtn"
                                    variant={ButtonVariant::Secondary}
                                    label="Random five"
                                    disabled={*loading}
                                    onclick={onrandom}
                                />
                            </SplitItem>
                        </Split>
                    </GridItem>
                </Grid>
            </PageSection>

            <PageSection variant={PageSectionVariant::Default} fill={PageSectionFill::Fill}>
                <HymnResult records={(*records).clone()} {onaction} table_ref={table_ref.clone()} />

                if let Some(page) = &*page_meta {
                    <SimplePagination
                        total_records={Some(page.total_records as usize)}
                        total_pages={page.total_pages as usize}
                        page={page.page_num}
                        on_page_change={pagination.on_page_change.clone()}
                    />
                }

                if *loading {
                    <>
                        <div id="loadingBackground" class="background loading-background"></div>
                        <div id="loadingContainer" class="loading-container">
                            <Spinner />
                        </div>
                    </>
                }
            </PageSection>
        </>
    )
}
