use crate::components::backend::Backend;
use crate::console::Console;
use crate::pages::AppRoute;
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_nested_router::prelude::*;

const DEFAULT_BOOTSTRAP_URL: &str = "/endpoints/backend.json";

#[function_component(Application)]
pub fn app() -> Html {
    html!(
        <ToastViewer>
            <Backend bootstrap_url={DEFAULT_BOOTSTRAP_URL}>
                <Router<AppRoute>>
                    <Console />
                </Router<AppRoute>>
            </Backend>
        </ToastViewer>
    )
}
