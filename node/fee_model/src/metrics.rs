use vise::{Buckets, Counter, EncodeLabelSet, EncodeLabelValue, Family, Histogram, Metrics};

/// Fee dimension priced by the reconciliation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EncodeLabelValue, EncodeLabelSet)]
#[metrics(label = "dimension", rename_all = "snake_case")]
pub(crate) enum FeeDimension {
    PriorityFee,
    MaxFee,
    GasPrice,
}

const BATCH_SIZE_BUCKETS: Buckets = Buckets::exponential(1.0..=1_024.0, 2.0);

#[derive(Debug, Metrics)]
#[metrics(prefix = "fee_model")]
pub(crate) struct FeeModelMetrics {
    /// Number of operations in priced batches.
    #[metrics(buckets = BATCH_SIZE_BUCKETS)]
    pub batch_size: Family<FeeDimension, Histogram<u64>>,
    /// Number of times the batch mean exceeded the network baseline, i.e. the batch asked for more
    /// than the network requires.
    pub batch_mean_wins: Family<FeeDimension, Counter>,
}

#[vise::register]
pub(crate) static METRICS: vise::Global<FeeModelMetrics> = vise::Global::new();
