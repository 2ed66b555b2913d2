//! Trading Agent Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use barn_core::{TradeAction, TradeExecution, TradeOrder, model::parse_amount};

use crate::api;
use crate::components::{ClearButton, ResultPanel, SubmitButton, result_view};

#[component]
pub fn TradePage() -> impl IntoView {
    let (token, set_token) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (action, set_action) = signal(TradeAction::Buy);
    let workflow = api::workflow::<TradeExecution>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let order = TradeOrder {
            token: token.get_untracked(),
            amount: parse_amount(&amount.get_untracked()),
            action: action.get_untracked(),
        };
        api::submit(workflow, order);
    };

    view! {
        <div class="container">
            <h1>"Trading Agent"</h1>
            <form on:submit=on_submit>
                <div class="field">
                    <label>"Token:"</label>
                    <input
                        type="text"
                        prop:value=move || token.get()
                        on:input=move |ev| set_token.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Amount:"</label>
                    <input
                        type="number"
                        step="any"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Action:"</label>
                    <select
                        prop:value=move || action.get().as_str()
                        on:change=move |ev| set_action.set(TradeAction::from_str(&event_target_value(&ev)))
                    >
                        <option value="buy">"Buy"</option>
                        <option value="sell">"Sell"</option>
                    </select>
                </div>
                <SubmitButton label="Execute Trade" pending=Signal::derive(move || workflow.with(|wf| wf.is_pending())) />
            </form>
            <ResultPanel result=result_view(workflow) />
            <ClearButton workflow=workflow />
        </div>
    }
}
