/// (-1)^power, as the sign factor of the recurrence
pub(crate) fn minus_one_pow(power: usize) -> i64 {
    if power % 2 == 0 {
        1
    } else {
        -1
    }
}

/// n!
///
/// Exact for n <= 20; callers keep n far below that
pub(crate) fn factorial(n: usize) -> u64 {
    (2..=n as u64).product()
}
