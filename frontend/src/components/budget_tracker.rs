use yew::prelude::*;
use shared::BudgetAction;

use super::amount_display::AmountDisplay;
use crate::hooks::use_budget::use_budget;
use crate::services::logging::Logger;

#[function_component(BudgetTracker)]
pub fn budget_tracker() -> Html {
    let budget = use_budget();
    let percentage = budget.state.spent_percentage();

    let on_reset = {
        let dispatch = budget.dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            Logger::info_with_component("BudgetTracker", "resetting app");
            dispatch.emit(BudgetAction::ResetApp);
        })
    };

    html! {
        <section class="budget-tracker">
            <div class="spent-progress">
                <div class={classes!("progress-bar", (percentage >= 100.0).then(|| "over-budget"))}>
                    <div class="progress-fill" style={format!("width: {}%", percentage.min(100.0))}></div>
                </div>
                <span class="progress-label">{format!("{}% Gastado", percentage)}</span>
            </div>

            <div class="budget-amounts">
                <button type="button" class="btn btn-danger reset-button" onclick={on_reset}>
                    {"Resetear app"}
                </button>
                <AmountDisplay label={Some("Presupuesto".to_string())} amount={budget.state.budget} />
                <AmountDisplay label={Some("Disponible".to_string())} amount={budget.remaining_budget} />
                <AmountDisplay label={Some("Gastado".to_string())} amount={budget.total_expenses} />
            </div>
        </section>
    }
}
