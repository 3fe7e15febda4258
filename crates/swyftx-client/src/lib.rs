/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Swyftx client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export the client and its error surface
pub use http::{
    ApiError,
    ClientConfig,
    DEFAULT_BASE_URL,
    RawResponse,
    RequestScope,
    Result,
    SwyftxClient,
    SwyftxError,
};

// Re-export resource services
pub use http::{
    AccountService,
    AddressService,
    AuthService,
    ChartService,
    FundsService,
    HistoryService,
    LimitService,
    MarketService,
    OrderService,
};

// Re-export all types
pub use types::*;
