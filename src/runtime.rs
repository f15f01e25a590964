use std::{future::Future, io};

use tokio::{runtime::Runtime, task};

use crate::Result;

/// How a blocking job raced against an interrupt ended.
#[derive(Debug, PartialEq)]
pub enum Interruptible<T> {
    Completed(T),
    Interrupted,
}

/// Builds the multi-threaded runtime the binary runs on.
///
/// Callers should end it with `Runtime::shutdown_background`: a job abandoned through
/// `run_blocking_until` keeps its blocking thread busy, and dropping the runtime would
/// wait for it.
pub fn build() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
}

/// Runs `job` on the blocking pool until it finishes or `interrupt` resolves.
///
/// On interrupt the job is left running on its thread, only its result is dropped.
pub async fn run_blocking_until<T, F, S>(job: F, interrupt: S) -> Result<Interruptible<T>>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
    S: Future,
{
    let handle = task::spawn_blocking(job);

    tokio::select! {
        ret = handle => {
            let value = ret.map_err(io::Error::other)?;
            Ok(Interruptible::Completed(value))
        }
        _ = interrupt => Ok(Interruptible::Interrupted),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        future,
        thread,
        time::{Duration, Instant},
    };

    use super::*;

    #[test]
    fn finished_jobs_hand_back_their_result() {
        let rt = build().unwrap();

        let outcome = rt
            .block_on(run_blocking_until(|| 6 * 7, future::pending::<()>()))
            .unwrap();

        assert_eq!(outcome, Interruptible::Completed(42));
        rt.shutdown_background();
    }

    #[test]
    fn interrupted_job_does_not_keep_the_runtime_alive() {
        let rt = build().unwrap();
        let started = Instant::now();

        let outcome = rt
            .block_on(run_blocking_until(
                || thread::sleep(Duration::from_secs(60)),
                future::ready(()),
            ))
            .unwrap();
        assert_eq!(outcome, Interruptible::Interrupted);

        rt.shutdown_background();
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}
