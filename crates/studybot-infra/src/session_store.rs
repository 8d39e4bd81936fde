//! In-process session store with expiry sweeping.
//!
//! Sessions live only as long as the process, like the chat history they
//! carry. Every record has an expiry date (the session layer sets it from its
//! idle timeout); expired records are evicted when a request presents them and
//! by a periodic sweep, so abandoned sessions never accumulate.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tower_sessions::cookie::time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, ExpiredDeletion, SessionStore};

#[derive(Clone, Debug, Default)]
pub struct EphemeralSessionStore {
    records: Arc<Mutex<HashMap<Id, Record>>>,
}

impl EphemeralSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }

    /// Run [`ExpiredDeletion::delete_expired`] every `period` on a background task.
    pub fn spawn_sweeper(&self, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(e) = store.delete_expired().await {
                    tracing::warn!(error = %e, "session sweep failed");
                    continue;
                }
                let live = store.len().await;
                tracing::debug!(live, "swept expired sessions");
            }
        })
    }
}

fn is_active(record: &Record, now: OffsetDateTime) -> bool {
    record.expiry_date > now
}

#[async_trait]
impl SessionStore for EphemeralSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let mut records = self.records.lock().await;
        while records.contains_key(&record.id) {
            record.id = Id::default();
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.records.lock().await.insert(record.id, record.clone());
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let mut records = self.records.lock().await;
        if let Some(record) = records.get(session_id) {
            if is_active(record, OffsetDateTime::now_utc()) {
                return Ok(Some(record.clone()));
            }
            records.remove(session_id);
        }
        Ok(None)
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.records.lock().await.remove(session_id);
        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for EphemeralSessionStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        let now = OffsetDateTime::now_utc();
        self.records.lock().await.retain(|_, record| is_active(record, now));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_sessions::cookie::time::Duration as TimeDuration;

    fn record(expires_in: TimeDuration) -> Record {
        Record {
            id: Id::default(),
            data: Default::default(),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_create_load_delete() {
        let store = EphemeralSessionStore::new();
        let mut rec = record(TimeDuration::minutes(30));
        store.create(&mut rec).await.unwrap();

        assert!(store.load(&rec.id).await.unwrap().is_some());
        assert_eq!(store.len().await, 1);

        store.delete(&rec.id).await.unwrap();
        assert!(store.load(&rec.id).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_load_evicts_expired_record() {
        let store = EphemeralSessionStore::new();
        let mut rec = record(TimeDuration::minutes(-1));
        store.create(&mut rec).await.unwrap();
        assert_eq!(store.len().await, 1);

        assert!(store.load(&rec.id).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_expired_keeps_live_records() {
        let store = EphemeralSessionStore::new();
        for _ in 0..5 {
            store.create(&mut record(TimeDuration::minutes(-5))).await.unwrap();
        }
        let mut live = record(TimeDuration::hours(1));
        store.create(&mut live).await.unwrap();
        assert_eq!(store.len().await, 6);

        store.delete_expired().await.unwrap();

        assert_eq!(store.len().await, 1);
        assert!(store.load(&live.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_sweeper_removes_expired_records() {
        let store = EphemeralSessionStore::new();
        store.create(&mut record(TimeDuration::minutes(-1))).await.unwrap();

        let handle = store.spawn_sweeper(Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(store.is_empty().await);
        handle.abort();
    }
}
