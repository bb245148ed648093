use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::BudgetAction;

use crate::hooks::use_budget::use_budget;
use crate::services::logging::Logger;

/// A usable budget is a finite number greater than zero
fn parse_budget(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|budget| budget.is_finite() && *budget > 0.0)
}

#[function_component(BudgetForm)]
pub fn budget_form() -> Html {
    let budget = use_budget();
    let budget_input = use_state(String::new);
    let parsed = parse_budget(&budget_input);

    let on_input = {
        let budget_input = budget_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            budget_input.set(input.value());
        })
    };

    let on_submit = {
        let dispatch = budget.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(budget) = parsed {
                Logger::info_with_component("BudgetForm", &format!("budget set to {}", budget));
                dispatch.emit(BudgetAction::AddBudget { budget });
            }
        })
    };

    html! {
        <form class="budget-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="budget">{"Definir presupuesto"}</label>
                <input
                    type="number"
                    id="budget"
                    name="budget"
                    placeholder="Define tu presupuesto"
                    value={(*budget_input).clone()}
                    oninput={on_input}
                />
            </div>
            <input
                type="submit"
                class="btn btn-primary"
                value="Definir presupuesto"
                disabled={parsed.is_none()}
            />
        </form>
    }
}
