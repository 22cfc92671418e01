use std::rc::Rc;

use web_sys::RequestCache;
use yew::prelude::*;
use yew_more_hooks::hooks::r#async::*;

use crate::backend;
use crate::components::error::Error;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct BackendProperties {
    #[prop_or_default]
    pub children: Children,
    pub bootstrap_url: String,
}

/// Discover the hymn service and provide it as context.
///
/// Without a bootstrap document the service is expected on the page origin.
#[function_component(Backend)]
pub fn backend(props: &BackendProperties) -> Html {
    let bootstrap_url = props.bootstrap_url.clone();

    let backend = use_async_with_options(
        async move {
            log::info!("Discovering backend...");
            // reqwest cannot resolve a URL relative to the current page, gloo-net can
            let response = gloo_net::http::Request::get(&bootstrap_url)
                .cache(RequestCache::NoStore)
                .send()
                .await
                .map_err(|err| format!("Failed to load backend information: {err}"))?;

            let url = match response.ok() {
                true => {
                    let endpoints: backend::Endpoints = response
                        .json()
                        .await
                        .map_err(|err| format!("Failed to decode backend information: {err}"))?;
                    endpoints.url
                }
                false => origin()?,
            };

            log::info!("Backend: {url}");

            Ok::<_, String>(backend::Backend { url })
        },
        UseAsyncOptions::enable_auto(),
    );

    match &*backend {
        UseAsyncState::Pending | UseAsyncState::Processing => html!(),
        UseAsyncState::Ready(Err(err)) => html!(
            <Error title="Failure" err={err.clone()} />
        ),
        UseAsyncState::Ready(Ok(backend)) => html!(
            <ContextProvider<Rc<backend::Backend>> context={Rc::new(backend.clone())}>
                { for props.children.iter() }
            </ContextProvider<Rc<backend::Backend>>>
        ),
    }
}

fn origin() -> Result<url::Url, String> {
    let origin = gloo_utils::window()
        .location()
        .origin()
        .map_err(|_| "Failed to determine the page origin".to_string())?;

    url::Url::parse(&origin).map_err(|err| format!("Failed to parse the page origin: {err}"))
}
