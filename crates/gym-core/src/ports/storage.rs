//! Durable key-value storage port
//!
//! A small string-keyed slot store that survives restarts. The wizard keeps
//! two slots in it: the serialized wizard state and the credential token.
//! Implementations are provided by the infrastructure layer.

use async_trait::async_trait;

#[async_trait]
pub trait KeyValueStoragePort: Send + Sync {
    /// Read a slot. `Ok(None)` when the slot has never been written.
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove a slot. Removing a missing slot is not an error.
    async fn remove_item(&self, key: &str) -> anyhow::Result<()>;

    /// Remove every slot.
    async fn clear(&self) -> anyhow::Result<()>;
}
