//!
//! The sweep plan.
//!

use std::ops::RangeInclusive;

use crate::configuration::RunConfiguration;

///
/// The ordered invocations of a sweep.
///
/// The configurations are produced one at a time, so the number of repetitions does not
/// affect memory usage.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// The configuration every invocation is derived from.
    base: RunConfiguration,
    /// The threads counts, outer loop.
    threads: RangeInclusive<u32>,
    /// The repetitions for each threads count, inner loop.
    times: u32,
    /// Whether the frames count was forced to 1 because of the repetitions.
    pub frames_forced: bool,
}

impl Plan {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        base: RunConfiguration,
        threads: RangeInclusive<u32>,
        times: u32,
        frames_forced: bool,
    ) -> Self {
        Self {
            base,
            threads,
            times,
            frames_forced,
        }
    }

    ///
    /// The number of invocations.
    ///
    pub fn len(&self) -> u64 {
        self.threads.clone().count() as u64 * u64::from(self.times)
    }

    ///
    /// Whether the plan has no invocations.
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// The configurations in execution order.
    ///
    /// Only the first repetition of each threads count may overwrite the results file.
    ///
    pub fn configurations(&self) -> impl Iterator<Item = RunConfiguration> + '_ {
        let base = &self.base;
        let times = self.times;
        self.threads.clone().flat_map(move |threads| {
            (0..times).map(move |repetition| {
                base.with_threads(threads)
                    .with_overwrite(base.overwrite && repetition == 0)
            })
        })
    }
}
