//! Where subscriber callbacks run.
//!
//! Publishing always happens on the thread that mutates the source.
//! A [`Scheduler`] decides where the *delivery* of the published value runs:
//! inline ([`ImmediateScheduler`]) or on the thread that owns a
//! [`MainLoop`] (the UI thread), fed through a [`MainQueue`] handle.

use {
    crate::view::channel::{queue_channel, QueueReceiver, QueueSender},
};

pub type Job = Box<dyn FnOnce() + Send + Sync>;

pub trait Scheduler: Send + Sync {
    fn schedule(&self, job: Job);
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn schedule(&self, job: Job) {
        job();
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                Main Queue
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/
/// Cloneable handle that posts jobs to a [`MainLoop`].
#[derive(Clone)]
pub struct MainQueue(QueueSender<Job>);

/// The consuming side, owned by the thread that is allowed to touch the UI.
pub struct MainLoop(QueueReceiver<Job>);

impl Scheduler for MainQueue {
    fn schedule(&self, job: Job) {
        self.0.send(job);
    }
}

impl MainLoop {
    /// Runs every job queued so far and returns how many ran.
    pub fn drain(&self) -> usize {
        let mut count = 0;
        // jobs may schedule further jobs, keep going until the queue is empty
        while let Some(jobs) = self.0.try_recv() {
            for job in jobs {
                job();
                count += 1;
            }
        }
        if count > 0 {
            debug!("main loop ran {} jobs", count);
        }
        count
    }

    /// Processes jobs as they arrive until every [`MainQueue`] handle is dropped.
    pub async fn run(&self) -> usize {
        let mut count = 0;
        while let Some(jobs) = self.0.recv().await {
            for job in jobs {
                job();
                count += 1;
            }
        }
        debug!("main loop finished after {} jobs", count);
        count
    }
}

pub fn main_queue() -> (MainQueue, MainLoop) {
    let (tx, rx) = queue_channel::<Job>();
    (MainQueue(tx), MainLoop(rx))
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
