//! Home Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container home">
            <h1>"Welcome to Barn System"</h1>
            <section class="features">
                <a href="/risk-assessment" class="feature">
                    <h2>"Risk Assessment"</h2>
                    <p>"Analyze and assess the risk of your tokens."</p>
                </a>
                <a href="/trading-agent" class="feature">
                    <h2>"Trading Agent"</h2>
                    <p>"Execute trades using the trading agent."</p>
                </a>
                <a href="/portfolio-optimization" class="feature">
                    <h2>"Portfolio Optimization"</h2>
                    <p>"Optimize your portfolio based on your risk tolerance."</p>
                </a>
            </section>
        </div>
    }
}
