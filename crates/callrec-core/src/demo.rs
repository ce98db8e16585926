//! Demo data for first launch, when there is no real capture yet.

use chrono::{DateTime, Duration, Utc};

use crate::error::Result;
use crate::models::{CallType, NewRecording};
use crate::store::RecordingRepository;

/// The five demo calls: two from `now`, three from a day earlier
#[must_use]
pub fn demo_recordings(now: DateTime<Utc>) -> Vec<NewRecording> {
    let yesterday = now - Duration::days(1);
    vec![
        NewRecording::new("أحمد محمد", "+966501234567", CallType::Incoming, 323, now),
        NewRecording::new("سارة علي", "+966559876543", CallType::Outgoing, 765, now),
        NewRecording::new("محمد خالد", "+966544567890", CallType::Missed, 0, yesterday),
        NewRecording::new("فاطمة أحمد", "+966563210987", CallType::Incoming, 492, yesterday),
        NewRecording::new("عبدالله سعيد", "+966505551234", CallType::Outgoing, 154, yesterday),
    ]
}

/// Add the demo calls when the store is empty.
///
/// Returns how many recordings were added (0 when the store already had data).
pub fn seed_demo_data<R: RecordingRepository + ?Sized>(
    repo: &R,
    now: DateTime<Utc>,
) -> Result<usize> {
    if !repo.list().is_empty() {
        return Ok(0);
    }

    let demos = demo_recordings(now);
    let count = demos.len();
    for recording in demos {
        repo.add(recording)?;
    }

    tracing::info!("Seeded {count} demo recordings");
    Ok(count)
}
