use crate::pages::{self, AppRoute};
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_nested_router::prelude::Switch as RouterSwitch;

#[function_component(Console)]
pub fn console() -> Html {
    let brand = html!(
        <MastheadBrand>
            <Brand src="assets/brand/gospel.svg" alt="Logo" />
        </MastheadBrand>
    );

    html!(
        <Page {brand}>
            <RouterSwitch<AppRoute> render={render} default={html!(<pages::NotFound />)} />
        </Page>
    )
}

fn render(route: AppRoute) -> Html {
    match route {
        AppRoute::Index => html!(<pages::Index />),
    }
}
