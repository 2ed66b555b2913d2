//! Page Components

mod home;
mod optimize;
mod risk;
mod trade;

pub use home::HomePage;
pub use optimize::OptimizePage;
pub use risk::RiskPage;
pub use trade::TradePage;
