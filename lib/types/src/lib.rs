//! Bundler types: user operations and the fee view that pricing logic works with.

pub use bundler_basic_types::{network::Network, Address, Bytes, ChainId, H256, U256, U64};

pub use self::user_operation::{FeeView, OperationFees, UserOperation};

mod user_operation;
