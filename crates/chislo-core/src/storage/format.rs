use crate::stats::StatRecord;

/// Localized outcome label for a stat record.
pub fn outcome_label(success: bool) -> &'static str {
    if success { "Успех" } else { "Неудача" }
}

/// Format one stat record as a 1-indexed listing row.
pub fn format_stat_row(index: usize, record: &StatRecord) -> String {
    format!(
        "{}. {} - Число: {}, Попыток: {}, {}, Диапазон: {}",
        index,
        record.date,
        record.number,
        record.attempts,
        outcome_label(record.success),
        record.range
    )
}

/// Format the whole stats log in chronological order.
///
/// Empty input yields no rows; the caller decides how to present the
/// empty state.
pub fn format_stats(records: &[StatRecord]) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| format_stat_row(i + 1, record))
        .collect()
}
