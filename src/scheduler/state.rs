//! Working state of a single simulation run.
//!
//! Each policy builds its own `RunState` from the immutable input, so
//! repeated or concurrent runs never share mutable data.

use log::trace;

use super::metrics;
use crate::models::{PolicyKind, Process, SimulationResult, Slice};

pub(crate) struct RunState<'a> {
    processes: &'a [Process],
    remaining: Vec<i64>,
    completion: Vec<Option<i64>>,
    first_dispatch: Vec<Option<i64>>,
    execution_order: Vec<usize>,
    slices: Vec<Slice>,
    completed: usize,
    now: i64,
}

impl<'a> RunState<'a> {
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        let n = processes.len();
        Self {
            processes,
            remaining: processes.iter().map(|p| p.service_time).collect(),
            completion: vec![None; n],
            first_dispatch: vec![None; n],
            execution_order: Vec::new(),
            slices: Vec::new(),
            completed: 0,
            now: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub(crate) fn is_finished(&self) -> bool {
        self.completed == self.processes.len()
    }

    #[inline]
    pub(crate) fn remaining(&self, i: usize) -> i64 {
        self.remaining[i]
    }

    /// Arrived and not yet complete.
    #[inline]
    pub(crate) fn is_ready(&self, i: usize) -> bool {
        self.processes[i].arrival_time <= self.now && self.remaining[i] > 0
    }

    /// Ready process with the smallest key.
    ///
    /// Scans in ascending index order; on equal keys the first one found wins.
    pub(crate) fn select_ready<K: Ord>(&self, key: impl Fn(usize) -> K) -> Option<usize> {
        (0..self.len())
            .filter(|&i| self.is_ready(i))
            .min_by_key(|&i| key(i))
    }

    /// Idles the processor until `time`. No-op if `time` is not in the future.
    pub(crate) fn wait_until(&mut self, time: i64) {
        if time > self.now {
            trace!("t={}..{}: idle", self.now, time);
            self.now = time;
        }
    }

    /// Jumps the clock to the earliest future arrival among unfinished processes.
    ///
    /// Returns `false` if no such arrival exists.
    pub(crate) fn idle_until_next_arrival(&mut self) -> bool {
        let now = self.now;
        let next = self
            .processes
            .iter()
            .zip(&self.remaining)
            .filter(|(p, rem)| **rem > 0 && p.arrival_time > now)
            .map(|(p, _)| p.arrival_time)
            .min();

        match next {
            Some(time) => {
                self.wait_until(time);
                true
            }
            None => false,
        }
    }

    /// Runs process `i` for `units` time units starting now.
    ///
    /// Appends one execution-order entry and extends the timeline. Records
    /// the completion time when the remaining service reaches zero.
    pub(crate) fn run(&mut self, i: usize, units: i64) {
        let process = self.processes[i];
        debug_assert!(units > 0 && units <= self.remaining[i]);
        debug_assert!(process.arrival_time <= self.now);

        let start = self.now;
        // Never overflows: validation bounds every end by latest arrival + total service.
        let end = start + units;

        self.first_dispatch[i].get_or_insert(start);
        self.execution_order.push(process.id);
        match self.slices.last_mut() {
            Some(last) if last.process_id == process.id && last.end == start => last.end = end,
            _ => self.slices.push(Slice::new(process.id, start, end)),
        }

        self.remaining[i] -= units;
        self.now = end;
        trace!(
            "t={start}..{end}: P{} runs, {} remaining",
            process.id,
            self.remaining[i]
        );

        if self.remaining[i] == 0 {
            self.completion[i] = Some(end);
            self.completed += 1;
            trace!("t={end}: P{} completes", process.id);
        }
    }

    /// Consumes the run and derives the result metrics.
    pub(crate) fn finish(self, policy: PolicyKind) -> SimulationResult {
        debug_assert!(
            self.is_finished(),
            "{policy}: {} of {} processes completed",
            self.completed,
            self.len()
        );

        let now = self.now;
        let completion_times = self.completion.iter().map(|c| c.unwrap_or(now)).collect();
        let first_dispatch = self.first_dispatch.iter().map(|d| d.unwrap_or(now)).collect();

        metrics::summarize(
            policy,
            self.processes,
            completion_times,
            first_dispatch,
            self.execution_order,
            self.slices,
        )
    }
}

/// Unit-granularity preemptive loop shared by SJF-P and Priority-P.
///
/// Every time unit the ready process with the smallest `key` runs for one
/// unit; the key is re-read each step, so a newly arrived process preempts
/// as soon as it ranks lower.
pub(crate) fn run_unit_steps<'a, K: Ord>(
    processes: &'a [Process],
    key: impl Fn(&RunState<'a>, usize) -> K,
) -> RunState<'a> {
    let mut state = RunState::new(processes);
    while !state.is_finished() {
        match state.select_ready(|i| key(&state, i)) {
            Some(i) => state.run(i, 1),
            None => {
                if !state.idle_until_next_arrival() {
                    break;
                }
            }
        }
    }
    state
}
