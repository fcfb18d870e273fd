#![allow(dead_code)]

//! Frame-based animations run as independent tokio tasks.
//!
//! Each task stops when its animation runs out of frames, when the frame
//! receiver is dropped, or when it is cancelled, whichever comes first.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Frames buffered ahead of a slow consumer.
const FRAME_BUFFER: usize = 16;

pub trait Animation: Send + 'static {
    type Frame: Send + 'static;

    /// The next frame, or `None` once finished.
    fn next_frame(&mut self) -> Option<Self::Frame>;
}

/// Reveals a string one character per frame.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    text: String,
    shown: usize,
}

impl TypingEffect {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), shown: 0 }
    }
}

impl Animation for TypingEffect {
    type Frame = String;

    fn next_frame(&mut self) -> Option<String> {
        let total = self.text.chars().count();
        if self.shown >= total {
            return None;
        }
        self.shown += 1;
        Some(self.text.chars().take(self.shown).collect())
    }
}

/// Counts from zero up to `target` in `steps` evenly spaced frames. The last
/// frame is always exactly `target`.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    steps: u32,
    step: u32,
}

impl CounterAnimation {
    pub fn new(target: u64, steps: u32) -> Self {
        Self { target, steps: steps.max(1), step: 0 }
    }
}

impl Animation for CounterAnimation {
    type Frame = u64;

    fn next_frame(&mut self) -> Option<u64> {
        if self.step >= self.steps {
            return None;
        }
        self.step += 1;
        let value = (self.target as u128 * self.step as u128 / self.steps as u128) as u64;
        Some(value)
    }
}

pub struct AnimationTask<F> {
    pub frames: mpsc::Receiver<F>,
    handle: JoinHandle<()>,
}

impl<F> AnimationTask<F> {
    /// Stops the task. Frames already buffered can still be received.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Emits one frame per `period`, the first immediately.
pub fn spawn<A: Animation>(mut animation: A, period: Duration) -> AnimationTask<A::Frame> {
    let (tx, rx) = mpsc::channel(FRAME_BUFFER);
    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        while let Some(frame) = animation.next_frame() {
            ticker.tick().await;
            if tx.send(frame).await.is_err() {
                tracing::debug!("animation receiver dropped, stopping");
                break;
            }
        }
    });
    AnimationTask { frames: rx, handle }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect<F>(task: &mut AnimationTask<F>) -> Vec<F> {
        let mut frames = Vec::new();
        while let Some(frame) = task.frames.recv().await {
            frames.push(frame);
        }
        frames
    }

    #[test]
    fn test_typing_handles_multibyte_text() {
        let mut typing = TypingEffect::new("Été");
        assert_eq!(typing.next_frame().as_deref(), Some("É"));
        assert_eq!(typing.next_frame().as_deref(), Some("Ét"));
        assert_eq!(typing.next_frame().as_deref(), Some("Été"));
        assert_eq!(typing.next_frame(), None);
    }

    #[test]
    fn test_counter_ends_on_target() {
        let mut counter = CounterAnimation::new(10, 4);
        let frames: Vec<u64> = std::iter::from_fn(|| counter.next_frame()).collect();
        assert_eq!(frames, vec![2, 5, 7, 10]);

        let mut instant = CounterAnimation::new(42, 0);
        assert_eq!(instant.next_frame(), Some(42));
        assert_eq!(instant.next_frame(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_task_runs_to_completion() {
        let mut task = spawn(TypingEffect::new("Rust"), Duration::from_millis(80));
        let frames = collect(&mut task).await;
        assert_eq!(frames, vec!["R", "Ru", "Rus", "Rust"]);
        tokio::task::yield_now().await;
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_a_running_counter() {
        let mut task = spawn(CounterAnimation::new(1_000, 1_000), Duration::from_millis(100));
        assert_eq!(task.frames.recv().await, Some(1));
        assert_eq!(task.frames.recv().await, Some(2));

        task.cancel();
        let rest = collect(&mut task).await;
        assert!(rest.len() <= 1, "received {} frames after cancel", rest.len());
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_receiver_stops_task() {
        let task = spawn(CounterAnimation::new(100, 100), Duration::from_millis(10));
        let AnimationTask { frames, handle } = task;
        drop(frames);
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("task should stop once nobody listens")
            .expect("task should not panic");
    }
}
