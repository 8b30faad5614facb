use crate::domain::models::RankingEntry;

/// Highest points first. The sort is stable, so ties keep their order.
pub fn sort_descending(entries: &mut [RankingEntry]) {
    entries.sort_by(|a, b| b.points.cmp(&a.points));
}

/// Replaces the user's points if they are already on the board, appends
/// them otherwise, then restores the ordering.
pub fn insert_or_update(entries: &mut Vec<RankingEntry>, submission: RankingEntry) {
    match entries.iter_mut().find(|e| e.user == submission.user) {
        Some(existing) => existing.points = submission.points,
        None => entries.push(submission),
    }
    sort_descending(entries);
}
