use crate::domain::state::{HandRecord, RoundState};

/// Remove the most recent hand and put the round back exactly as it was
/// before that hand.
///
/// Scores are reverted by subtracting the recorded deltas; the dealer and
/// wind scalars are restored from the record's snapshot rather than by
/// running the rotation backwards. Returns `None` when there is nothing to
/// undo, in which case the state is untouched.
pub fn undo_last_hand(state: &mut RoundState) -> Option<HandRecord> {
    let record = state.history.pop()?;

    for (score, delta) in state.scores.iter_mut().zip(record.score_changes) {
        *score -= delta;
    }
    state.restore(&record.before);

    Some(record)
}
