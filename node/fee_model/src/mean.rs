use bundler_types::U256;

/// Returns the arithmetic mean of `values`, rounded down. The mean of an empty sequence is 0.
///
/// The result is exact for any number of values up to `U256::MAX` each. Since the sum of such values
/// may not fit into 256 bits, values are accumulated as quotients and remainders of division
/// by the count: `floor(sum / n) = sum(v / n) + floor(sum(v % n) / n)`. Neither accumulator
/// can overflow: the first one never exceeds the mean, and the second one is less than `n * n`.
pub fn mean<I>(values: I) -> U256
where
    I: IntoIterator<Item = U256>,
    I::IntoIter: ExactSizeIterator,
{
    let values = values.into_iter();
    let count = values.len();
    if count == 0 {
        return U256::zero();
    }

    let count = U256::from(count);
    let (quotients, remainders) =
        values.fold((U256::zero(), U256::zero()), |(quotients, remainders), value| {
            let (quotient, remainder) = value.div_mod(count);
            (quotients + quotient, remainders + remainder)
        });
    quotients + remainders / count
}
