use yew::prelude::*;
use shared::BudgetAction;

use super::expense_form::ExpenseForm;
use crate::hooks::use_budget::use_budget;

#[function_component(ExpenseModal)]
pub fn expense_modal() -> Html {
    let budget = use_budget();

    let on_open = {
        let dispatch = budget.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(BudgetAction::ShowModal))
    };

    let on_close = {
        let dispatch = budget.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(BudgetAction::CloseModal))
    };

    html! {
        <>
            <div class="add-expense">
                <button type="button" class="add-expense-button" title="Nuevo gasto" onclick={on_open}>
                    {"+"}
                </button>
            </div>

            {if budget.state.modal {
                html! {
                    <div class="modal-overlay">
                        <div class="modal">
                            <button type="button" class="modal-close" onclick={on_close}>{"✕"}</button>
                            <ExpenseForm />
                        </div>
                    </div>
                }
            } else { html! {} }}
        </>
    }
}
