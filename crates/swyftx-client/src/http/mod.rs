/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod address;
pub mod auth;
pub mod chart;
pub mod client;
pub mod error;
pub mod funds;
pub mod history;
pub mod limit;
pub mod market;
pub mod order;
pub mod scope;

mod path;

pub use error::{ApiError, Result, SwyftxError};
pub use scope::RequestScope;

pub use account::AccountService;
pub use address::AddressService;
pub use auth::AuthService;
pub use chart::ChartService;
pub use client::{ClientConfig, DEFAULT_BASE_URL, RawResponse, SwyftxClient};
pub use funds::FundsService;
pub use history::HistoryService;
pub use limit::LimitService;
pub use market::MarketService;
pub use order::OrderService;
