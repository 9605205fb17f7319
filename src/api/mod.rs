pub mod binance;
pub mod bithumb;
pub mod bybit;
pub mod client;
pub mod error;
pub mod normalize;
pub mod okx;
pub mod orchestrator;
pub mod signing;
pub mod transport;
pub mod upbit;

pub use client::{ExchangeClient, HttpMethod, RawResponse, SignedRequest, Transport};
pub use error::ApiError;
pub use orchestrator::{client_for, BalanceService};
pub use signing::{Clock, FixedClock, SystemClock};
pub use transport::HttpTransport;
