//! In-memory record store: users, memories and their embeddings.
//!
//! Ids are positions in append-only vectors, handed out under the
//! store's write lock. That makes id generation race-free: N successful
//! creates always yield exactly the ids `1..=N`, with no duplicates and
//! no gaps, regardless of interleaving.

use chrono::Utc;
use engram_core::{Embedding, EngramError, EngramResult, MemoryRecord, RecordBackend};
use parking_lot::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    users: Vec<String>,
    memories: Vec<MemoryRecord>,
    embeddings: Vec<Embedding>,
}

/// Append-only store for users, memory records and embeddings.
///
/// One reader/writer lock guards all three containers: writes serialize
/// against each other, reads proceed concurrently with other reads.
/// Nothing is ever removed.
#[derive(Debug, Default)]
pub struct RecordStore {
    inner: RwLock<Inner>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memory records currently stored.
    pub fn memory_count(&self) -> usize {
        self.inner.read().memories.len()
    }

    /// Number of embeddings currently stored.
    pub fn embedding_count(&self) -> usize {
        self.inner.read().embeddings.len()
    }
}

impl RecordBackend for RecordStore {
    fn create_user(&self, username: &str) -> EngramResult<i64> {
        let mut inner = self.inner.write();
        inner.users.push(username.to_string());
        let id = inner.users.len() as i64;
        debug!(id, username, "user created");
        Ok(id)
    }

    fn create_memory(&self, user_id: i64, content: &str) -> EngramResult<i64> {
        let mut inner = self.inner.write();
        let id = inner.memories.len() as i64 + 1;
        inner.memories.push(MemoryRecord {
            id,
            user_id,
            content: content.to_string(),
            created_at: Utc::now(),
        });
        debug!(id, user_id, "memory created");
        Ok(id)
    }

    fn add_embedding(&self, memory_id: i64, vector: &[f32]) -> EngramResult<()> {
        let mut inner = self.inner.write();
        if memory_id < 1 || memory_id as usize > inner.memories.len() {
            return Err(EngramError::validation(format!(
                "embedding references unknown memory {memory_id}"
            )));
        }
        inner.embeddings.push(Embedding {
            memory_id,
            vector: vector.to_vec(),
        });
        Ok(())
    }

    fn get_memory(&self, id: i64) -> EngramResult<MemoryRecord> {
        let inner = self.inner.read();
        if id < 1 || id as usize > inner.memories.len() {
            return Err(EngramError::not_found("memory", id));
        }
        Ok(inner.memories[id as usize - 1].clone())
    }
}
