//! UI-side sync operations
//!
//! Thin async wrappers around the generic `ApiClient` that keep the global
//! state slots up to date. Mutations never patch the in-memory list: on
//! success the whole list is re-fetched, on failure the slot's error string
//! is set for the modal. Superseded fetches are not cancelled; within one
//! slot the last completion wins.

use std::sync::OnceLock;

use kadmin_core::Config;
use kadmin_store::{ApiClient, StoreResult, complete_mutation};

use crate::state::{APP_STATE, ResourceSlot};

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// Install the shared API client. Called once from `launch`; later calls are
/// ignored.
pub fn init_client(config: &Config) {
    let _ = CLIENT.set(ApiClient::new(config));
}

fn client() -> ApiClient {
    CLIENT
        .get_or_init(|| ApiClient::new(&Config::default()))
        .clone()
}

/// Re-fetch the full list for `T`, replacing the slot contents
pub async fn refresh<T: ResourceSlot>() {
    {
        let mut state = APP_STATE.write();
        T::slot_mut(&mut state).loading = true;
    }
    match client().list::<T>().await {
        Ok(items) => {
            tracing::debug!("fetched {} {}", items.len(), T::PATH);
            let mut state = APP_STATE.write();
            T::slot_mut(&mut state).finish(items);
        }
        Err(err) => {
            tracing::error!("fetch {} failed: {}", T::PATH, err);
            let mut state = APP_STATE.write();
            T::slot_mut(&mut state).fail(err.surface_message());
        }
    }
}

/// Create a record built from the create row's cells. The identity cell is
/// ignored; the server assigns one.
pub async fn create<T: ResourceSlot>(mut record: T) {
    record.set_id(None);
    finish_mutation::<T>("create", client().create(&record).await).await;
}

/// Save an edited record (identity in body)
pub async fn update<T: ResourceSlot>(record: T) {
    finish_mutation::<T>("update", client().update(&record).await).await;
}

/// Delete a record by primary-key value
pub async fn delete<T: ResourceSlot>(id: i64) {
    finish_mutation::<T>("delete", client().delete::<T>(id).await).await;
}

/// Apply the mutation epilogue to the app state: the refreshed list
/// replaces the slot on success, the surfaced error lands in the slot on
/// failure (no re-fetch happened in that case).
async fn finish_mutation<T: ResourceSlot>(verb: &str, result: StoreResult<()>) {
    match complete_mutation::<T>(&client(), result).await {
        Ok(items) => {
            tracing::debug!("{} {} ok, {} listed", verb, T::PATH, items.len());
            let mut state = APP_STATE.write();
            T::slot_mut(&mut state).finish(items);
        }
        Err(err) => {
            tracing::error!("{} {} failed: {}", verb, T::PATH, err);
            let mut state = APP_STATE.write();
            T::slot_mut(&mut state).fail(err.surface_message());
        }
    }
}
