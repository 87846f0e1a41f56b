use crate::model::Task;

/// Weighted completion of a set of tasks as a whole percentage.
///
/// Returns `round(100 * completed / total)` where both sums run over task
/// weights, with half values rounded up. A zero total yields 0. Weights are
/// summed as given, so negative weights can push the result outside 0..=100.
/// A NaN weight makes the ratio NaN, which the integer conversion turns into 0.
pub fn progress_percent<'a, I>(tasks: I) -> i64
where
    I: IntoIterator<Item = &'a Task>,
{
    let (completed, total) = tasks
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(completed, total), task| {
            let weight = task.weight_or_zero();
            if task.is_completed() {
                (completed + weight, total + weight)
            } else {
                (completed, total + weight)
            }
        });

    if total == 0.0 {
        return 0;
    }

    round_half_up(completed / total * 100.0)
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
