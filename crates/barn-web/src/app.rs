//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::Header;
use crate::pages::{HomePage, OptimizePage, RiskPage, TradePage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/risk-assessment") view=RiskPage />
                    <Route path=path!("/trading-agent") view=TradePage />
                    <Route path=path!("/portfolio-optimization") view=OptimizePage />
                </Routes>
            </main>
        </Router>
    }
}
