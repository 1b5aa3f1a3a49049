use std::time::Duration;

use vise::{Buckets, Counter, EncodeLabelSet, EncodeLabelValue, Family, Histogram, Metrics, Unit};

pub use self::query::QueryClient;

mod decl;
mod query;

/// Kinds of Ethereum node requests sent by the bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EncodeLabelValue, EncodeLabelSet)]
#[metrics(label = "method", rename_all = "snake_case")]
enum Method {
    ChainId,
    MaxPriorityFeePerGas,
    PendingBlockBaseFee,
    GasPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EncodeLabelSet)]
struct CallLabels {
    method: Method,
    component: &'static str,
}

#[derive(Debug, Metrics)]
#[metrics(prefix = "eth_client")]
struct EthClientMetrics {
    /// Number of requests sent to the node, per method and calling component.
    call: Family<CallLabels, Counter>,
    /// Number of failed requests, per method.
    errors: Family<Method, Counter>,
    /// Latency of successful requests.
    #[metrics(buckets = Buckets::LATENCIES, unit = Unit::Seconds)]
    latency: Family<Method, Histogram<Duration>>,
}

impl EthClientMetrics {
    fn observe_call(&self, method: Method, component: &'static str) {
        self.call[&CallLabels { method, component }].inc();
    }
}

#[vise::register]
static METRICS: vise::Global<EthClientMetrics> = vise::Global::new();
