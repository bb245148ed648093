use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::budget_form::BudgetForm;
use components::budget_tracker::BudgetTracker;
use components::expense_list::ExpenseList;
use components::expense_modal::ExpenseModal;
use components::filter_by_category::FilterByCategory;
use hooks::use_budget::{use_budget, BudgetProvider};

/// Budget entry until a valid budget exists, then the tracker and expenses
#[function_component(BudgetPlanner)]
fn budget_planner() -> Html {
    let budget = use_budget();

    html! {
        <>
            <header class="header">
                <h1>{config::APP_TITLE}</h1>
            </header>

            <main class="container">
                <section class="budget-section">
                    {if budget.state.is_valid_budget() {
                        html! { <BudgetTracker /> }
                    } else {
                        html! { <BudgetForm /> }
                    }}
                </section>

                {if budget.state.is_valid_budget() {
                    html! {
                        <>
                            <FilterByCategory />
                            <ExpenseList />
                            <ExpenseModal />
                        </>
                    }
                } else { html! {} }}
            </main>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BudgetProvider>
            <BudgetPlanner />
        </BudgetProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
