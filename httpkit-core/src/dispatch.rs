use std::{
    sync::{mpsc, Arc, Mutex},
    thread,
};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Fixed-size worker pool backing the asynchronous entry points.
///
/// Dropping the pool drops the channel sender; workers drain whatever is
/// already queued and then exit. A call dispatched before the drop still
/// completes and fires its callback.
pub(crate) struct DispatchPool {
    // Handles kept so the threads stay attached to the pool's lifetime.
    // Not read directly.
    #[allow(dead_code)]
    workers: Vec<thread::JoinHandle<()>>,
    sender: Option<mpsc::Sender<Job>>,
}

impl DispatchPool {
    pub(crate) fn new(size: usize) -> Self {
        let (tx, rx) = mpsc::channel::<Job>();
        let rx = Arc::new(Mutex::new(rx));

        let mut workers = Vec::with_capacity(size);
        for i in 0..size {
            let rx = Arc::clone(&rx);
            let handle = thread::Builder::new()
                .name(format!("httpkit-dispatch-{i}"))
                .spawn(move || loop {
                    let job: Job = match rx.lock().expect("poisoned").recv() {
                        Ok(job) => job,
                        Err(_) => break,
                    };
                    job();
                })
                .expect("failed to spawn dispatch worker");
            workers.push(handle);
        }
        DispatchPool {
            workers,
            sender: Some(tx),
        }
    }

    pub(crate) fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(sender) = &self.sender {
            let _ = sender.send(Box::new(job));
        }
    }
}

impl Drop for DispatchPool {
    fn drop(&mut self) {
        // Dropping the sender ends the workers' recv() loop once the queue
        // is drained. No join: remaining jobs finish on the detached threads.
        self.sender.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn runs_every_queued_job() {
        let (tx, rx) = mpsc::channel();
        let pool = DispatchPool::new(4);

        for i in 0..8u32 {
            let tx = tx.clone();
            pool.execute(move || {
                let _ = tx.send(i);
            });
        }
        drop(tx);

        let mut received: Vec<u32> = rx.iter().collect();
        received.sort_unstable();
        assert_eq!(received, (0..8).collect::<Vec<u32>>());
    }

    #[test]
    fn queued_jobs_survive_pool_drop() {
        let (tx, rx) = mpsc::channel();
        let pool = DispatchPool::new(2);

        for i in 0..4u32 {
            let tx = tx.clone();
            pool.execute(move || {
                thread::sleep(Duration::from_millis(30));
                let _ = tx.send(i);
            });
        }
        drop(tx);
        // Dropping the pool must not cancel what is already queued.
        drop(pool);

        let received: Vec<u32> = rx.iter().collect();
        assert_eq!(received.len(), 4);
    }

    #[test]
    fn jobs_run_on_named_worker_threads() {
        let (tx, rx) = mpsc::channel();
        let pool = DispatchPool::new(1);

        pool.execute(move || {
            let on_worker = thread::current()
                .name()
                .is_some_and(|n| n.starts_with("httpkit-dispatch-"));
            let _ = tx.send(on_worker);
        });

        assert!(rx.recv_timeout(Duration::from_secs(5)).unwrap());
    }
}
