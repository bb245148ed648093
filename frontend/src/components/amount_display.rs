use yew::prelude::*;
use shared::format_currency;

#[derive(Properties, PartialEq)]
pub struct AmountDisplayProps {
    pub amount: f64,
    #[prop_or_default]
    pub label: Option<String>,
}

/// Text shown before the amount, `"Label: "` or nothing
fn label_prefix(label: Option<&str>) -> String {
    label.map(|label| format!("{}: ", label)).unwrap_or_default()
}

#[function_component(AmountDisplay)]
pub fn amount_display(props: &AmountDisplayProps) -> Html {
    html! {
        <p class="amount-display">
            {label_prefix(props.label.as_deref())}
            <span class="amount-value">{format_currency(props.amount)}</span>
        </p>
    }
}
