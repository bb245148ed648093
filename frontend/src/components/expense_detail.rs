use yew::prelude::*;
use shared::{find_category, format_date, BudgetAction, Expense};

use super::amount_display::AmountDisplay;
use crate::hooks::use_budget::use_budget;

#[derive(Properties, PartialEq)]
pub struct ExpenseDetailProps {
    pub expense: Expense,
}

/// Category name for a row; unknown ids fall back to the id itself
fn category_label(id: &str) -> String {
    find_category(id).map(|category| category.name).unwrap_or_else(|| id.to_string())
}

#[function_component(ExpenseDetail)]
pub fn expense_detail(props: &ExpenseDetailProps) -> Html {
    let budget = use_budget();
    let expense = &props.expense;

    let on_edit = {
        let dispatch = budget.dispatch.clone();
        let id = expense.id.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.emit(BudgetAction::GetExpenseById { id: id.clone() });
        })
    };

    let on_remove = {
        let dispatch = budget.dispatch.clone();
        let id = expense.id.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.emit(BudgetAction::RemoveExpense { id: id.clone() });
        })
    };

    html! {
        <div class="expense-detail">
            <div class="expense-info">
                <p class="expense-category">
                    {category_label(&expense.category)}
                </p>
                <p class="expense-name">{&expense.expense_name}</p>
                <p class="expense-date">{format_date(expense.date)}</p>
            </div>

            <AmountDisplay amount={expense.amount} />

            <div class="expense-actions">
                <button type="button" class="btn btn-secondary" onclick={on_edit}>{"Editar"}</button>
                <button type="button" class="btn btn-danger" onclick={on_remove}>{"Eliminar"}</button>
            </div>
        </div>
    }
}
