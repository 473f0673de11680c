use crate::config::{ConfigSection, CountdownConfig};
use crate::error::Result;
use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

/// The only blocking point of the countdown.
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}

/// Suspends the current thread.
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// First-in-first-out queue of the values to print.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownQueue {
    values: VecDeque<i64>,
}

impl CountdownQueue {
    /// Queues `start` down to `end` inclusive, then `end` once more.
    ///
    /// The second `end` is a known duplicate: the drain prints the terminal
    /// value twice. Callers rely on the exact sequence, so it is kept.
    pub fn filled(start: i64, end: i64) -> Self {
        let mut values: VecDeque<i64> = (end..=start).rev().collect();
        values.push_back(end);
        Self { values }
    }

    pub fn peek(&self) -> Option<i64> {
        self.values.front().copied()
    }

    pub fn poll(&mut self) -> Option<i64> {
        self.values.pop_front()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Iterator for CountdownQueue {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.poll()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownReport {
    /// Front of the queue before the drain, `None` for an empty queue.
    pub top: Option<i64>,
    pub drained: Vec<i64>,
    pub pauses: usize,
}

pub struct Countdown {
    config: CountdownConfig,
}

impl Countdown {
    /// Rejects a config that fails validation, so the queue stays bounded.
    pub fn new(config: CountdownConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Prints `Top<front>`, drops the front value, then prints every
    /// remaining value followed by a pause.
    pub fn run<W: Write, P: Pause>(&self, out: &mut W, pause: &mut P) -> Result<CountdownReport> {
        let mut queue = CountdownQueue::filled(self.config.start, self.config.end);
        log::debug!(
            "Queued {} values from {} down to {}",
            queue.len(),
            self.config.start,
            self.config.end
        );

        let top = queue.peek();
        if let Some(top) = top {
            writeln!(out, "Top{}", top)?;
        }
        queue.poll();

        let delay = self.config.delay();
        let mut report = CountdownReport {
            top,
            drained: Vec::with_capacity(queue.len()),
            pauses: 0,
        };
        for value in queue {
            writeln!(out, "{}", value)?;
            out.flush()?;
            pause.pause(delay);
            report.drained.push(value);
            report.pauses += 1;
        }

        log::info!("Countdown finished after {} values", report.drained.len());
        Ok(report)
    }
}
