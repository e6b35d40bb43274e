//! Projects sampled history onto the sprint calendar.

use super::timeline::{CompressedTimeline, compress, linearize};
use crate::burndown::domain::{DayLabel, DayRecord, ScanSample, Sprint, SprintStatus, Tally};
use chrono::{FixedOffset, NaiveDate};
use tracing::debug;

/// Builds burndown chart rows from a sprint window and its samples.
///
/// Projection is pure: `today` is the only notion of the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprintProjector {
    offset: FixedOffset,
}

impl SprintProjector {
    /// Creates a projector labelling days in `offset`.
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Compresses `history` and projects it.
    #[must_use]
    pub fn project_history(
        &self,
        sprint: &Sprint,
        history: &[ScanSample],
        today: NaiveDate,
    ) -> SprintStatus {
        let compressed = compress(history, self.offset);
        self.project(sprint, history, &compressed, today)
    }

    /// Projects per-day samples onto the sprint calendar.
    ///
    /// The baseline is the first linearized sample with any points, falling
    /// back to the newest sample. Without any sample the status has no days.
    /// Days after `today`, and days without a sample, carry the previous
    /// total forward with an unknown top.
    #[must_use]
    pub fn project(
        &self,
        sprint: &Sprint,
        history: &[ScanSample],
        compressed: &CompressedTimeline<ScanSample>,
        today: NaiveDate,
    ) -> SprintStatus {
        let days = sprint.days();
        let today_index = days.iter().position(|day| *day == today);
        let mut status = SprintStatus::empty(sprint.name(), today_index);

        let Some(baseline) = self.baseline(history) else {
            debug!(sprint = sprint.name(), "no samples yet, projecting no days");
            return status;
        };

        let mut base = baseline;
        let mut bottom = 0;
        let mut previous_total = None;
        status.days.push(DayRecord::planning(baseline));

        for (index, day) in days.iter().enumerate() {
            let label = DayLabel::from_date(*day);
            let expected = ideal_remaining(base, baseline, days.len(), index + 1);
            let measured = compressed
                .get(&label)
                .filter(|_| today_index.is_some_and(|today_at| index <= today_at));

            let record = match measured {
                Some(sample) => {
                    let total = sample.total();
                    if let Some(previous) = previous_total {
                        bottom += total - previous;
                    }
                    base = total;
                    DayRecord {
                        name: label.to_string(),
                        total,
                        expected,
                        bottom,
                        top: Tally::Known(total - sample.done),
                        working_day: true,
                    }
                }
                None => DayRecord {
                    name: label.to_string(),
                    total: base,
                    expected,
                    bottom,
                    top: Tally::Unknown,
                    working_day: true,
                },
            };
            previous_total = Some(record.total);
            status.days.push(record);
        }
        status
    }

    fn baseline(&self, history: &[ScanSample]) -> Option<i64> {
        linearize(history, self.offset)
            .iter()
            .find(|sample| sample.done != 0 || sample.in_progress != 0 || sample.planned != 0)
            .or_else(|| history.last())
            .map(ScanSample::total)
    }
}

/// Remaining scope on the ideal line `day_number` days in, starting from
/// `base` and burning `baseline` evenly over `day_count` days.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the ideal line is fractional and point counts stay far below 2^52"
)]
fn ideal_remaining(base: i64, baseline: i64, day_count: usize, day_number: usize) -> f64 {
    let per_day = baseline as f64 / day_count as f64;
    base as f64 - day_number as f64 * per_day
}
