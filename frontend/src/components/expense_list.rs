use yew::prelude::*;

use super::expense_detail::ExpenseDetail;
use crate::hooks::use_budget::use_budget;

#[function_component(ExpenseList)]
pub fn expense_list() -> Html {
    let budget = use_budget();
    let expenses = budget.state.filtered_expenses();

    html! {
        <section class="expense-list">
            {if expenses.is_empty() {
                html! { <p class="empty-list">{"No hay gastos"}</p> }
            } else {
                html! {
                    <>
                        <h2>{"Listado de gastos"}</h2>
                        {for expenses.into_iter().map(|expense| html! {
                            <ExpenseDetail key={expense.id.clone()} expense={expense.clone()} />
                        })}
                    </>
                }
            }}
        </section>
    }
}
