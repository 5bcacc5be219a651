//! unigate Activity Logging
//!
//! Deferred append-only activity logging. Request handlers enqueue
//! entries through a cheap clonable [`ActivityLogger`]; a background
//! [`ActivityWorker`] drains the queue and writes rows. The request
//! path never waits on the insert, and a failed insert is logged but
//! never surfaced to the caller.
//!
//! ```rust,ignore
//! let (logger, worker) = activity_channel(pool.clone());
//! tokio::spawn(worker.run());
//!
//! // in a handler, after the commit:
//! logger.log(user_id, ActivityType::CreateCourse, format!("Created course: {name} ({id})"));
//! ```

pub mod logger;

pub use logger::{activity_channel, ActivityLogger, ActivityWorker};
