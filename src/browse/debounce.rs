use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Single-shot, self-cancelling timer. Scheduling again aborts the pending
/// shot; a shot that still slips through carries an old generation and is
/// rejected by [`Debouncer::fire`].
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Sends `make(generation)` on `tx` once `delay` passes without another
    /// call to `schedule` or `cancel`.
    pub fn schedule<T, F>(&mut self, tx: mpsc::Sender<T>, make: F) -> u64
    where
        T: Send + 'static,
        F: FnOnce(u64) -> T + Send + 'static,
    {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(make(generation)).await;
        }));
        generation
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Accepts a delivered shot if it is the latest one scheduled.
    pub fn fire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.pending.is_none() {
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rapid_schedules_coalesce() {
        let (tx, mut rx) = mpsc::channel::<u64>(8);
        let mut d = Debouncer::new(Duration::from_millis(30));
        d.schedule(tx.clone(), |g| g);
        d.schedule(tx.clone(), |g| g);
        let last = d.schedule(tx.clone(), |g| g);

        let got = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(got, last);
        assert!(d.fire(got));

        let more = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(more.is_err(), "only one shot expected");
    }

    #[tokio::test]
    async fn test_cancel_suppresses_shot() {
        let (tx, mut rx) = mpsc::channel::<u64>(8);
        let mut d = Debouncer::new(Duration::from_millis(20));
        d.schedule(tx, |g| g);
        d.cancel();
        let got = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(!matches!(got, Ok(Some(_))));
    }

    #[tokio::test]
    async fn test_stale_generation_rejected() {
        let (tx, _rx) = mpsc::channel::<u64>(8);
        let mut d = Debouncer::new(Duration::from_secs(60));
        let first = d.schedule(tx.clone(), |g| g);
        let second = d.schedule(tx, |g| g);
        assert!(!d.fire(first));
        assert!(d.fire(second));
        assert!(!d.fire(second));
    }
}
