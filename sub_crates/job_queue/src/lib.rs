//! A single-worker background queue.
//!
//! Jobs run off the calling thread, and their results are handed back
//! through a `JobResult` that the caller waits on from its own thread.

use std::{
    collections::VecDeque,
    sync::{mpsc, Arc, Mutex},
};

use scheduled_thread_pool::{JobHandle, ScheduledThreadPool};

type UpdateFn = Arc<dyn Fn() + Send + Sync>;

/// A job queue that uses a single thread to process jobs.
pub struct JobQueue {
    runner: ScheduledThreadPool,
    job_status: Arc<Mutex<JobStatus>>,
    update_fn: Option<UpdateFn>,
}

impl JobQueue {
    pub fn new() -> JobQueue {
        JobQueue {
            runner: ScheduledThreadPool::new(1),
            job_status: Arc::new(Mutex::new(JobStatus {
                jobs: VecDeque::new(),
                job_progress: None,
                log: VecDeque::new(),
            })),
            update_fn: None,
        }
    }

    /// Sets a function to call whenever a job finishes, e.g. to wake up
    /// whatever displays the results.  Only affects jobs added afterwards.
    pub fn set_update_fn<F>(&mut self, update_fn: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.update_fn = Some(Arc::new(update_fn));
    }

    /// Queues a job.
    ///
    /// The returned `JobResult` yields the job's return value, or nothing
    /// if the job panicked.
    pub fn add_job<T, F>(&self, name: &str, job: F) -> JobResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Mutex<JobStatus>) -> T + Send + std::panic::UnwindSafe + 'static,
    {
        let job_name = name.to_string();
        let mut job_status = self.job_status.lock().unwrap();
        let (sender, receiver) = mpsc::channel();
        let update_fn = self.update_fn.clone();

        // Add the job.
        let local_job_status = Arc::clone(&self.job_status);
        job_status.jobs.push_back(self.runner.execute(move || {
            let job_status = local_job_status;

            // Actually run the job.
            let result = match std::panic::catch_unwind(|| job(&job_status)) {
                Ok(value) => Some(value),
                Err(_) => {
                    job_status
                        .lock()
                        .unwrap()
                        .log_error(format!("ERROR: job \"{}\" panicked!", job_name));
                    None
                }
            };

            // Cleanup.
            {
                let mut job_status = job_status.lock().unwrap();
                job_status.jobs.pop_front(); // This job.
                job_status.clear_progress();
            }

            if let Some(update_fn) = update_fn {
                update_fn();
            }

            // The receiver may already be gone, which is fine.
            if let Some(value) = result {
                let _ = sender.send(value);
            }
        }));

        JobResult {
            name: name.to_string(),
            receiver: receiver,
        }
    }

    pub fn progress(&self) -> Option<(String, f32)> {
        self.job_status.lock().unwrap().job_progress.clone()
    }

    pub fn job_count(&self) -> usize {
        self.job_status.lock().unwrap().jobs.len()
    }

    pub fn log_count(&self) -> usize {
        self.job_status.lock().unwrap().log.len()
    }

    /// Index zero is the most recent entry.
    pub fn get_log(&self, index: usize) -> (String, LogLevel) {
        self.job_status.lock().unwrap().log[index].clone()
    }

    pub fn clear_log(&self) {
        self.job_status.lock().unwrap().log.clear()
    }
}

impl Default for JobQueue {
    fn default() -> JobQueue {
        JobQueue::new()
    }
}

/// The eventual result of a queued job.
pub struct JobResult<T> {
    name: String,
    receiver: mpsc::Receiver<T>,
}

impl<T> JobResult<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Blocks until the job is done.
    pub fn wait(self) -> Option<T> {
        self.receiver.recv().ok()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warning,
    Note,
}

pub struct JobStatus {
    jobs: VecDeque<JobHandle>,
    job_progress: Option<(String, f32)>,
    log: VecDeque<(String, LogLevel)>,
}

impl JobStatus {
    pub fn set_progress(&mut self, text: String, ratio: f32) {
        self.job_progress = Some((text, ratio));
    }

    pub fn clear_progress(&mut self) {
        self.job_progress = None;
    }

    pub fn log_error(&mut self, message: String) {
        log::error!("{}", message);
        self.log.push_front((message, LogLevel::Error));
    }

    pub fn log_warning(&mut self, message: String) {
        log::warn!("{}", message);
        self.log.push_front((message, LogLevel::Warning));
    }

    pub fn log_note(&mut self, message: String) {
        log::info!("{}", message);
        self.log.push_front((message, LogLevel::Note));
    }
}
