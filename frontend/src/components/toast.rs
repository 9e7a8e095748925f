use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<&'static str>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    match props.message {
        Some(message) => html! {
            <div class="toast" role="status" aria-live="polite">
                {message}
            </div>
        },
        None => html! {},
    }
}
