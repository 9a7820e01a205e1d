use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::Sleep;

/// This extension trait allows to easily create [`SubtleTiming`] directly from
/// a [`Future`] value without having to explicitly declare it with [`SubtleTiming::new`].
pub trait SubtleTimingFutureExt: Future {
    fn subtle_timing(self, duration: Duration) -> SubtleTiming<Self>
    where
        Self: Sized;
}

impl<F: Future> SubtleTimingFutureExt for F {
    fn subtle_timing(self, duration: Duration) -> SubtleTiming<Self> {
        SubtleTiming::new(self, duration)
    }
}

/// Runs a future and holds its output until the timer has elapsed. If the
/// operation outlives the timer, the output is returned right away.
///
/// Login uses this so that response time does not tell whether the
/// username exists or the password was merely wrong.
#[pin_project]
#[derive(Debug)]
#[must_use]
pub struct SubtleTiming<F: Future> {
    #[pin]
    future: F,
    /// Output kept until the timer completes.
    result: Option<F::Output>,
    #[pin]
    sleep: Sleep,
}

impl<F: Future> SubtleTiming<F> {
    pub fn new(future: F, duration: Duration) -> Self {
        Self {
            future,
            result: None,
            sleep: tokio::time::sleep(duration),
        }
    }
}

impl<F: Future> Future for SubtleTiming<F> {
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut me = self.project();
        if me.result.is_none() {
            match me.future.poll(cx) {
                Poll::Ready(output) => *me.result = Some(output),
                Poll::Pending => return Poll::Pending,
            }
        }

        match me.sleep.as_mut().poll(cx) {
            Poll::Ready(()) => match me.result.take() {
                Some(output) => Poll::Ready(output),
                None => panic!("`SubtleTiming` polled after completion"),
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_timer() {
        let start = Instant::now();
        let value = async { 42 }.subtle_timing(Duration::from_secs(1)).await;

        assert_eq!(value, 42);
        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_operations_are_not_delayed_further() {
        let start = Instant::now();
        let value = async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            "done"
        }
        .subtle_timing(Duration::from_secs(1))
        .await;

        assert_eq!(value, "done");
        assert!(start.elapsed() < Duration::from_secs(4));
    }
}
