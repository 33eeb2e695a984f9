use crate::domain::a002_collection_point::ui::create::CreatePoint;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CreatePoint />
    }
}
