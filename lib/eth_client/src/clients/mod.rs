//! Various Ethereum client implementations.

mod http;
mod mock;

pub use self::{http::QueryClient, mock::MockEthereum};
