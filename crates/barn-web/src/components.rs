//! UI Components

use leptos::prelude::*;

use barn_core::{
    Render, Workflow, WorkflowKind,
    render::{self, View},
};

/// Top navigation bar
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <nav>
                <a href="/" class="brand">"Barn System"</a>
                <ul>
                    <li><a href="/risk-assessment">"Risk Assessment"</a></li>
                    <li><a href="/trading-agent">"Trading Agent"</a></li>
                    <li><a href="/portfolio-optimization">"Portfolio Optimization"</a></li>
                </ul>
            </nav>
        </header>
    }
}

/// Result area for a workflow: nothing while idle or pending, an error
/// banner on failure, the rendered rows on success
#[component]
pub fn ResultPanel(#[prop(into)] result: Signal<View>) -> impl IntoView {
    move || match result.get() {
        View::Hidden | View::Busy => ().into_any(),
        View::Failed(banner) => view! {
            <div class="result error" role="alert">
                <p>{banner.message}</p>
                {banner.retryable.then(|| view! { <p class="hint">"You can submit again."</p> })}
            </div>
        }
        .into_any(),
        View::Ready(block) => view! {
            <div class="result">
                <h2>{block.title}</h2>
                {block
                    .rows
                    .into_iter()
                    .map(|row| view! {
                        <p>
                            <span class="label">{row.label}": "</span>
                            <span class="value">{row.value}</span>
                        </p>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

/// Derived view of a workflow signal
pub fn result_view<K>(workflow: RwSignal<Workflow<K>>) -> Signal<View>
where
    K: WorkflowKind + 'static,
    K::Response: Render + Send + Sync + 'static,
{
    Signal::derive(move || workflow.with(|wf| render::view(wf.outcome())))
}

/// Clears a displayed result or error
#[component]
pub fn ClearButton<K>(workflow: RwSignal<Workflow<K>>) -> impl IntoView
where
    K: WorkflowKind + 'static,
    K::Response: Send + Sync + 'static,
{
    let visible = move || {
        workflow.with(|wf| wf.outcome().is_success() || wf.outcome().is_failure())
    };

    view! {
        <Show when=visible>
            <button
                type="button"
                class="btn btn-small"
                on:click=move |_| workflow.update(Workflow::reset)
            >
                "Clear"
            </button>
        </Show>
    }
}

/// Submit button that shows progress while the workflow is pending
#[component]
pub fn SubmitButton(label: &'static str, #[prop(into)] pending: Signal<bool>) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
            {move || if pending.get() { "..." } else { label }}
        </button>
    }
}
