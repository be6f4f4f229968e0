//! Worker-thread connection to a [`Collection`].
//!
//! Same shape as a `tokio_rusqlite` connection: the collection lives on one
//! dedicated thread, callers ship closures to it over a channel and await
//! the reply. Every call carries a timeout, so a worker that cannot answer
//! in time is reported as a connectivity failure, never a hang. The worker
//! exits when the last clone of the connection is dropped.

use std::{sync::mpsc, thread, time::Duration};

use tokio::sync::oneshot;

use crate::{Error, Result, collection::Collection};

/// Budget for one round trip to the worker.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(3);

type Job = Box<dyn FnOnce(&mut Collection) + Send + 'static>;

/// Cheap-to-clone handle; clones share the worker and its collection.
#[derive(Clone)]
pub struct Connection {
  sender:  mpsc::Sender<Job>,
  timeout: Duration,
}

impl Connection {
  /// Spawn a worker owning `collection`.
  pub fn spawn(collection: Collection, timeout: Duration) -> Self {
    let (sender, receiver) = mpsc::channel::<Job>();
    thread::spawn(move || {
      let mut collection = collection;
      while let Ok(job) = receiver.recv() {
        job(&mut collection);
      }
    });
    Self { sender, timeout }
  }

  /// Run `f` against the collection on the worker thread and await its
  /// result.
  pub async fn call<F, R>(&self, f: F) -> Result<R>
  where
    F: FnOnce(&mut Collection) -> Result<R> + Send + 'static,
    R: Send + 'static,
  {
    let (tx, rx) = oneshot::channel();
    let job: Job = Box::new(move |collection| {
      let _ = tx.send(f(collection));
    });

    self
      .sender
      .send(job)
      .map_err(|_| Error::Connectivity("worker thread is gone".to_owned()))?;

    match tokio::time::timeout(self.timeout, rx).await {
      Ok(Ok(result)) => result,
      Ok(Err(_)) => {
        Err(Error::Connectivity("worker dropped the reply".to_owned()))
      }
      Err(_) => Err(Error::Connectivity(format!(
        "no reply from the store within {:?}",
        self.timeout
      ))),
    }
  }
}
