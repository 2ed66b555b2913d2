//! Portfolio Optimization Page

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use barn_core::{
    EntryId, OptimizationRequest, PortfolioEditor, PortfolioOptimization, model::parse_amount,
};

use crate::api;
use crate::components::{ClearButton, ResultPanel, SubmitButton, result_view};

#[component]
pub fn OptimizePage() -> impl IntoView {
    let portfolio = RwSignal::new(PortfolioEditor::new());
    let (risk_tolerance, set_risk_tolerance) = signal(0.5_f64);
    let workflow = api::workflow::<PortfolioOptimization>();

    let add_token = move |ev: MouseEvent| {
        ev.prevent_default();
        portfolio.update(|p| {
            p.add();
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = OptimizationRequest {
            portfolio: portfolio.with_untracked(PortfolioEditor::to_mapping),
            risk_tolerance: risk_tolerance.get_untracked(),
        };
        api::submit(workflow, request);
    };

    let duplicates = move || portfolio.with(PortfolioEditor::duplicate_names);

    view! {
        <div class="container">
            <h1>"Portfolio Optimization"</h1>
            <form on:submit=on_submit>
                <For
                    each=move || portfolio.with(PortfolioEditor::ids)
                    key=|id| *id
                    children=move |id| view! { <TokenRow portfolio=portfolio id=id /> }
                />
                <Show when=move || !duplicates().is_empty()>
                    <p class="warning">
                        {move || format!(
                            "Duplicate tokens: {}. Only the most recently edited value of each is submitted.",
                            duplicates().join(", "),
                        )}
                    </p>
                </Show>
                <button class="btn" on:click=add_token>"Add Token"</button>
                <div class="field">
                    <label>"Risk Tolerance (0-1):"</label>
                    <input
                        type="number"
                        min="0"
                        max="1"
                        step="0.1"
                        value="0.5"
                        on:input=move |ev| set_risk_tolerance.set(parse_amount(&event_target_value(&ev)))
                    />
                </div>
                <SubmitButton label="Optimize Portfolio" pending=Signal::derive(move || workflow.with(|wf| wf.is_pending())) />
            </form>
            <ResultPanel result=result_view(workflow) />
            <ClearButton workflow=workflow />
        </div>
    }
}

#[component]
fn TokenRow(portfolio: RwSignal<PortfolioEditor>, id: EntryId) -> impl IntoView {
    let (name, amount) = portfolio.with_untracked(|p| {
        p.get(id)
            .map(|e| (e.name.clone(), e.amount.to_string()))
            .unwrap_or_default()
    });

    view! {
        <div class="field">
            <input
                type="text"
                placeholder="Token"
                value=name
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    portfolio.update(|p| {
                        p.rename(id, raw);
                    });
                }
            />
            <input
                type="number"
                step="any"
                placeholder="Amount"
                value=amount
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    portfolio.update(|p| {
                        p.update_amount(id, &raw);
                    });
                }
            />
            <button
                class="btn btn-small"
                on:click=move |ev| {
                    ev.prevent_default();
                    portfolio.update(|p| {
                        p.remove(id);
                    });
                }
            >
                "Remove"
            </button>
        </div>
    }
}
