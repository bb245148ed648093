use yew::prelude::*;
use web_sys::{window, Element};
use wasm_bindgen::JsCast;
use chrono::{Datelike, NaiveDate};
use shared::month_name;

use crate::services::date_utils::*;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    /// Input id, so a `<label for=..>` can point at the picker
    #[prop_or_default]
    pub id: Option<String>,
    /// Selected date, `None` when cleared
    pub value: Option<NaiveDate>,
    /// Callback when date changes
    pub on_change: Callback<Option<NaiveDate>>,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let show_calendar = use_state(|| false);
    let calendar_ref = use_node_ref();

    let display_text = match props.value {
        Some(date) => format_short_date(date),
        None => "dd/mm/aaaa".to_string(),
    };

    // Calendar opens on the selected month, or the current one
    let initial = props.value.unwrap_or_else(today);
    let calendar_month = use_state(|| initial.month());
    let calendar_year = use_state(|| initial.year());

    {
        let calendar_month = calendar_month.clone();
        let calendar_year = calendar_year.clone();
        use_effect_with(props.value, move |value| {
            if let Some(date) = value {
                calendar_month.set(date.month());
                calendar_year.set(date.year());
            }
            || ()
        });
    }

    let toggle_calendar = {
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            show_calendar.set(!*show_calendar);
        })
    };

    let on_date_select = {
        let on_change = props.on_change.clone();
        let show_calendar = show_calendar.clone();
        Callback::from(move |date: NaiveDate| {
            on_change.emit(Some(date));
            show_calendar.set(false);
        })
    };

    let on_today_click = {
        let on_date_select = on_date_select.clone();
        Callback::from(move |_: MouseEvent| on_date_select.emit(today()))
    };

    let on_clear_click = {
        let on_change = props.on_change.clone();
        let show_calendar = show_calendar.clone();
        Callback::from(move |_: MouseEvent| {
            on_change.emit(None);
            show_calendar.set(false);
        })
    };

    // Close when clicking outside the picker
    {
        let show_calendar = show_calendar.clone();
        let calendar_ref = calendar_ref.clone();
        use_effect_with(*show_calendar, move |is_open| {
            let listener = match (*is_open, window()) {
                (true, Some(window)) => Some(gloo::events::EventListener::new(&window, "click", move |e| {
                    let Some(target) = e.target() else { return };
                    let Ok(element) = target.dyn_into::<Element>() else { return };
                    if let Some(picker) = calendar_ref.cast::<Element>() {
                        if !picker.contains(Some(&element)) {
                            show_calendar.set(false);
                        }
                    }
                })),
                _ => None,
            };
            move || drop(listener)
        });
    }

    let on_prev_month = {
        let calendar_month = calendar_month.clone();
        let calendar_year = calendar_year.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = previous_month(*calendar_year, *calendar_month);
            calendar_year.set(year);
            calendar_month.set(month);
        })
    };

    let on_next_month = {
        let calendar_month = calendar_month.clone();
        let calendar_year = calendar_year.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = next_month(*calendar_year, *calendar_month);
            calendar_year.set(year);
            calendar_month.set(month);
        })
    };

    let calendar_days = generate_calendar_days(*calendar_year, *calendar_month);

    html! {
        <div class="date-picker" ref={calendar_ref}>
            <div class="date-picker-input">
                <button
                    type="button"
                    id={props.id.clone()}
                    class="date-display-button"
                    onclick={toggle_calendar}
                >
                    <span class="date-text">{display_text}</span>
                    <span class="calendar-icon">{"📅"}</span>
                </button>

                {if *show_calendar {
                    html! {
                        <div class="calendar-dropdown">
                            <div class="calendar-header">
                                <button type="button" class="nav-button" onclick={on_prev_month}>{"‹"}</button>
                                <span class="month-year">
                                    {format!("{} {}", month_name(*calendar_month), *calendar_year)}
                                </span>
                                <button type="button" class="nav-button" onclick={on_next_month}>{"›"}</button>
                            </div>

                            <div class="calendar-grid">
                                <div class="weekday-header">
                                    <span>{"Do"}</span>
                                    <span>{"Lu"}</span>
                                    <span>{"Ma"}</span>
                                    <span>{"Mi"}</span>
                                    <span>{"Ju"}</span>
                                    <span>{"Vi"}</span>
                                    <span>{"Sá"}</span>
                                </div>

                                <div class="calendar-days">
                                    {for calendar_days.iter().map(|day| {
                                        let on_date_select = on_date_select.clone();
                                        let date = day.date;
                                        let is_selected = props.value == Some(date);

                                        html! {
                                            <button
                                                type="button"
                                                class={classes!(
                                                    "calendar-day",
                                                    day.is_current_month.then(|| "current-month"),
                                                    (!day.is_current_month).then(|| "other-month"),
                                                    is_selected.then(|| "selected"),
                                                    is_today(date).then(|| "today")
                                                )}
                                                onclick={Callback::from(move |_: MouseEvent| on_date_select.emit(date))}
                                            >
                                                {date.day()}
                                            </button>
                                        }
                                    })}
                                </div>
                            </div>

                            <div class="calendar-footer">
                                <button type="button" class="today-button" onclick={on_today_click}>
                                    {"Hoy"}
                                </button>
                                <button type="button" class="clear-button" onclick={on_clear_click}>
                                    {"Borrar"}
                                </button>
                            </div>
                        </div>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq, Debug)]
struct CalendarDay {
    date: NaiveDate,
    is_current_month: bool,
}

/// Six-week grid for a month, padded with the tail of the previous month and
/// the head of the next one
fn generate_calendar_days(year: i32, month: u32) -> Vec<CalendarDay> {
    let mut days = Vec::with_capacity(42);

    let first_day_of_week = first_day_of_month(year, month);
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return days;
    };

    // Walk back to the Sunday that starts the grid
    let start = first - chrono::Duration::days(first_day_of_week as i64);
    for offset in 0..42 {
        let date = start + chrono::Duration::days(offset);
        days.push(CalendarDay {
            date,
            is_current_month: date.month() == month && date.year() == year,
        });
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_starts_on_sunday_and_has_six_weeks() {
        let days = generate_calendar_days(2024, 2);
        assert_eq!(days.len(), 42);
        // February 1st 2024 was a Thursday, so the grid starts on January 28th
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 28).unwrap());
        assert!(!days[0].is_current_month);
        assert_eq!(days[4].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(days[4].is_current_month);

        let in_month = days.iter().filter(|d| d.is_current_month).count();
        assert_eq!(in_month, 29);
    }

    #[test]
    fn test_grid_for_month_starting_on_sunday() {
        let days = generate_calendar_days(2024, 9);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        assert!(days[0].is_current_month);
    }
}
