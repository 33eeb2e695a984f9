use leptos::prelude::*;

/// Page banner: optional title, then whatever is nested inside.
#[component]
pub fn Header(
    /// Banner title, rendered only when given
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <header>
            {move || title.get().map(|t| view! { <h1>{t}</h1> })}
            {children.map(|children| children())}
        </header>
    }
}
