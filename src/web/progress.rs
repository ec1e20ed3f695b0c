use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use uuid::Uuid;

use portfolio::services::upload::PercentFn;

const RETENTION: Duration = Duration::from_secs(600);

/// Percentages of in-flight video uploads, polled by the dashboard.
pub struct ProgressBoard {
    uploads: Mutex<HashMap<Uuid, (u8, Instant)>>,
}

impl ProgressBoard {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, (u8, Instant)>> {
        self.uploads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers `id` at 0% and returns the callback feeding it.
    pub fn start(self: &Arc<Self>, id: Uuid) -> PercentFn {
        let now = Instant::now();
        {
            let mut uploads = self.lock();
            uploads.retain(|_, (_, touched)| now.duration_since(*touched) < RETENTION);
            uploads.insert(id, (0, now));
        }

        let board = Arc::clone(self);
        Arc::new(move |percent| board.set(id, percent))
    }

    pub fn set(&self, id: Uuid, percent: u8) {
        self.lock().insert(id, (percent, Instant::now()));
    }

    pub fn get(&self, id: Uuid) -> Option<u8> {
        self.lock().get(&id).map(|(p, _)| *p)
    }
}

impl Default for ProgressBoard {
    fn default() -> Self {
        Self::new()
    }
}
