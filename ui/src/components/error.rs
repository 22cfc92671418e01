use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct ErrorProperties {
    #[prop_or("Failure".into())]
    pub title: AttrValue,

    #[prop_or_default]
    pub err: String,
}

/// Full-screen error, for failures nothing else can recover from.
#[function_component(Error)]
pub fn error(props: &ErrorProperties) -> Html {
    html!(
        <Bullseye>
            <Content>
                <Title>{ props.title.clone() }</Title>
                <p>{ &props.err }</p>
            </Content>
        </Bullseye>
    )
}
