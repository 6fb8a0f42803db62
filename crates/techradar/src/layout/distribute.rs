//! Round-robin distribution of items across planned rows.

/// Spreads `count` items over rows with the given capacities.
///
/// Rows are visited in order, one item at a time, skipping rows that are
/// already full. Rows therefore fill evenly instead of the first row being
/// packed before the next one is touched. Distribution stops early only when
/// every row is saturated.
///
/// # Examples
///
/// ```
/// # use techradar::layout::distribute;
/// assert_eq!(distribute(7, &[2, 5, 5]), vec![2, 3, 2]);
/// assert_eq!(distribute(16, &[14, 19]), vec![8, 8]);
/// ```
pub fn distribute(count: usize, capacities: &[usize]) -> Vec<usize> {
    let mut counts = vec![0; capacities.len()];
    let mut remaining = count;

    while remaining > 0 {
        let mut placed_any = false;
        for (assigned, &capacity) in counts.iter_mut().zip(capacities) {
            if remaining == 0 {
                break;
            }
            if *assigned < capacity {
                *assigned += 1;
                remaining -= 1;
                placed_any = true;
            }
        }
        if !placed_any {
            break;
        }
    }

    counts
}
