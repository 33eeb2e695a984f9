use super::state::NO_SELECTION;
use super::view_model::CreatePointViewModel;
use crate::layout::header::Header;
use crate::shared::components::MapPicker;
use crate::shared::icons::icon;
use contracts::domain::a001_collection_item::aggregate::CollectionItem;
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use web_sys::HtmlInputElement;

#[component]
pub fn CreatePoint() -> impl IntoView {
    let vm = CreatePointViewModel::new();
    vm.load();

    let on_input = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        vm.input_command(&input.name(), input.value());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <div id="page-create-point">
            <Header>
                <img src="/assets/logo.svg" alt="e-coleta" />
                <a href="/" title="voltar">
                    {icon("chevron_left")}
                    "Voltar para o início"
                </a>
            </Header>

            <form on:submit=on_submit>
                <h1>"Cadastro do " <br /> "ponto de coleta"</h1>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <fieldset>
                    <legend>
                        <h2>"Dados"</h2>
                    </legend>

                    <div class="field">
                        <label for="name">"Nome do Local"</label>
                        <input type="text" name="name" id="name" on:input=on_input />
                    </div>

                    <div class="field-group">
                        <div class="field">
                            <label for="email">"E-mail"</label>
                            <input type="text" name="email" id="email" on:input=on_input />
                        </div>
                        <div class="field">
                            <label for="whatsapp">"Whatsapp"</label>
                            <input type="text" name="whatsapp" id="whatsapp" on:input=on_input />
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Endereço"</h2>
                        <span>"Selecione o endereço no mapa"</span>
                    </legend>

                    <MapPicker
                        center=Signal::derive(move || vm.state.with(|s| s.initial_position))
                        marker=Signal::derive(move || vm.state.with(|s| s.selected_position))
                        on_click=Callback::new(move |position| vm.map_click_command(position))
                    />

                    <div class="field-group">
                        <div class="field">
                            <label for="uf">"Estado (UF)"</label>
                            <select
                                name="uf"
                                id="uf"
                                on:change=move |ev| vm.select_uf_command(event_target_value(&ev))
                            >
                                <option
                                    value=NO_SELECTION
                                    selected=move || vm.state.with(|s| s.selected_uf.is_none())
                                >
                                    "Selecione uma UF"
                                </option>
                                <For
                                    each=move || vm.state.with(|s| s.ufs.clone())
                                    key=|uf| uf.clone()
                                    children=move |uf: String| {
                                        let current = uf.clone();
                                        let is_selected = move || {
                                            vm.state.with(|s| s.selected_uf.as_deref() == Some(current.as_str()))
                                        };
                                        let label = uf.clone();
                                        view! {
                                            <option value=uf selected=is_selected>{label}</option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                        <div class="field">
                            <label for="city">"Cidade"</label>
                            <select
                                name="city"
                                id="city"
                                on:change=move |ev| vm.select_city_command(event_target_value(&ev))
                            >
                                <option
                                    value=NO_SELECTION
                                    selected=move || vm.state.with(|s| s.selected_city.is_none())
                                >
                                    "Selecione uma cidade"
                                </option>
                                <For
                                    each=move || vm.state.with(|s| s.cities.clone())
                                    key=|city| city.clone()
                                    children=move |city: String| {
                                        let current = city.clone();
                                        let is_selected = move || {
                                            vm.state.with(|s| s.selected_city.as_deref() == Some(current.as_str()))
                                        };
                                        let label = city.clone();
                                        view! {
                                            <option value=city selected=is_selected>{label}</option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Itens de Coleta"</h2>
                        <span>"Selecione um ou mais itens de coleta"</span>
                    </legend>

                    <ul class="items-grid">
                        <For
                            each=move || vm.state.with(|s| s.items.clone())
                            key=|item| item.id
                            children=move |item: CollectionItem| {
                                let id = item.id;
                                let alt = item.title.clone();
                                view! {
                                    <li
                                        class=move || if vm.state.with(|s| s.is_item_selected(id)) { "selected" } else { "" }
                                        on:click=move |_| vm.toggle_item_command(id)
                                    >
                                        <img src=item.image alt=alt />
                                        <span>{item.title}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </fieldset>

                <button type="submit">"Cadastrar ponto de coleta"</button>
            </form>
        </div>
    }
}
