use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use chrono::NaiveDate;
use shared::{categories, ExpenseFormState};

use super::date_picker::DatePicker;
use super::error_message::ErrorMessage;
use crate::hooks::use_budget::use_budget;
use crate::services::logging::Logger;

/// Heading and submit label for the current mode
fn form_labels(editing: bool) -> (&'static str, &'static str) {
    if editing {
        ("Guardar cambios", "Guardar cambios")
    } else {
        ("Nuevo gasto", "Registrar gasto")
    }
}

#[function_component(ExpenseForm)]
pub fn expense_form() -> Html {
    let budget = use_budget();
    let form = use_state(ExpenseFormState::default);

    // Load the record being edited whenever the store starts an edit
    {
        let form = form.clone();
        let state = budget.state.clone();
        use_effect_with(budget.state.editing_id.clone(), move |editing_id| {
            if let Some(id) = editing_id {
                let mut next = (*form).clone();
                next.begin_edit(&state, id);
                form.set(next);
            }
            || ()
        });
    }

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_expense_name(input.value());
            form.set(next);
        })
    };

    let on_amount_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_amount(&input.value());
            form.set(next);
        })
    };

    let on_category_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_category(select.value());
            form.set(next);
        })
    };

    let on_date_change = {
        let form = form.clone();
        Callback::from(move |date: Option<NaiveDate>| {
            let mut next = (*form).clone();
            next.set_date(date);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let dispatch = budget.dispatch.clone();
        let editing_id = budget.state.editing_id.clone();
        let remaining_budget = budget.remaining_budget;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*form).clone();
            match next.submit(editing_id.as_deref(), remaining_budget) {
                Some(action) => {
                    Logger::info_with_component("ExpenseForm", &format!("submitting {}", action.name()));
                    dispatch.emit(action);
                }
                None => {
                    if let Some(message) = next.error_message() {
                        Logger::debug_with_component("ExpenseForm", &format!("rejected: {}", message));
                    }
                }
            }
            form.set(next);
        })
    };

    let (legend, submit_label) = form_labels(budget.state.editing_id.is_some());
    let draft = &form.draft;

    html! {
        <form class="expense-form" onsubmit={on_submit}>
            <legend>{legend}</legend>

            {if let Some(error) = form.error_message() {
                html! { <ErrorMessage>{error}</ErrorMessage> }
            } else { html! {} }}

            <div class="form-group">
                <label for="expenseName">{"Nombre gasto:"}</label>
                <input
                    type="text"
                    id="expenseName"
                    name="expenseName"
                    placeholder="Añade el nombre del gasto"
                    value={draft.expense_name.clone()}
                    oninput={on_name_input}
                />
            </div>

            <div class="form-group">
                <label for="amount">{"Cantidad:"}</label>
                <input
                    type="number"
                    id="amount"
                    name="amount"
                    placeholder="Añade la cantidad del gasto"
                    step="0.01"
                    value={form.amount_input.clone()}
                    oninput={on_amount_input}
                />
            </div>

            <div class="form-group">
                <label for="category">{"Categoría:"}</label>
                <select id="category" name="category" onchange={on_category_change}>
                    <option value="" selected={draft.category.is_empty()}>{"-- Selecciona --"}</option>
                    {for categories().into_iter().map(|category| {
                        let selected = category.id == draft.category;
                        html! {
                            <option key={category.id.clone()} value={category.id.clone()} selected={selected}>
                                {category.name}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="date">{"Fecha gasto:"}</label>
                <DatePicker id={Some("date".to_string())} value={draft.date} on_change={on_date_change} />
            </div>

            <input type="submit" class="btn btn-primary" value={submit_label} />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_labels() {
        assert_eq!(form_labels(false), ("Nuevo gasto", "Registrar gasto"));
        assert_eq!(form_labels(true), ("Guardar cambios", "Guardar cambios"));
    }
}
