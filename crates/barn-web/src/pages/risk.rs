//! Risk Assessment Page

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use barn_core::{EntryId, PriceSeriesEditor, RiskAssessment};

use crate::api;
use crate::components::{ClearButton, ResultPanel, SubmitButton, result_view};

#[component]
pub fn RiskPage() -> impl IntoView {
    let series = RwSignal::new(PriceSeriesEditor::new());
    let workflow = api::workflow::<RiskAssessment>();

    let add_price = move |ev: MouseEvent| {
        ev.prevent_default();
        series.update(|s| {
            s.add();
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        api::submit(workflow, series.with_untracked(PriceSeriesEditor::values));
    };

    view! {
        <div class="container">
            <h1>"Risk Assessment"</h1>
            <form on:submit=on_submit>
                <For
                    each=move || series.with(PriceSeriesEditor::ids)
                    key=|id| *id
                    children=move |id| view! { <PriceRow series=series id=id /> }
                />
                <button class="btn" on:click=add_price>"Add Price"</button>
                <SubmitButton label="Assess Risk" pending=Signal::derive(move || workflow.with(|wf| wf.is_pending())) />
            </form>
            <ResultPanel result=result_view(workflow) />
            <ClearButton workflow=workflow />
        </div>
    }
}

#[component]
fn PriceRow(series: RwSignal<PriceSeriesEditor>, id: EntryId) -> impl IntoView {
    // Display position is looked up on every render; rows above may be removed
    let label = move || {
        let position = series.with(|s| s.position(id)).map_or(0, |i| i + 1);
        format!("Price {position}:")
    };
    let initial = series.with_untracked(|s| {
        s.get(id)
            .map(|p| p.price.to_string())
            .unwrap_or_default()
    });

    view! {
        <div class="field">
            <label>{label}</label>
            <input
                type="number"
                step="any"
                value=initial
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    series.update(|s| {
                        s.update_price(id, &raw);
                    });
                }
            />
            <button
                class="btn btn-small"
                on:click=move |ev| {
                    ev.prevent_default();
                    series.update(|s| {
                        s.remove(id);
                    });
                }
            >
                "Remove"
            </button>
        </div>
    }
}
