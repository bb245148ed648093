use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::{categories, filter_category_action};

use crate::hooks::use_budget::use_budget;

#[function_component(FilterByCategory)]
pub fn filter_by_category() -> Html {
    let budget = use_budget();

    let on_change = {
        let dispatch = budget.dispatch.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatch.emit(filter_category_action(&select.value()));
        })
    };

    html! {
        <section class="filter-section">
            <form>
                <div class="form-group filter-group">
                    <label for="filter-category">{"Filtrar gastos"}</label>
                    <select id="filter-category" onchange={on_change}>
                        <option value="" selected={budget.state.current_category.is_empty()}>
                            {"-- Todas las categorías --"}
                        </option>
                        {for categories().into_iter().map(|category| {
                            let selected = category.id == budget.state.current_category;
                            html! {
                                <option key={category.id.clone()} value={category.id.clone()} selected={selected}>
                                    {category.name}
                                </option>
                            }
                        })}
                    </select>
                </div>
            </form>
        </section>
    }
}
