//! Profile enrichment workflow: business rules for engineer profiles.
//!
//! On insert the service builds the prompt, calls chat, and upserts the
//! enriched record. The record is persisted only after enrichment succeeds;
//! a chat failure fails the insert as a whole and leaves the store untouched.

use std::sync::Arc;

use tracing::{debug, info};

use crate::engineers::prompts::build_recommendation_prompt;
use crate::errors::AppError;
use crate::llm_client::ChatClient;
use crate::models::engineer::{EngineerInput, EngineerRecord, EngineerRow};
use crate::store::EngineerStore;

/// Orchestrates profile CRUD and enrichment against the injected store and
/// chat client. Both collaborators are trait objects handed in at
/// construction, so tests can substitute doubles for either.
#[derive(Clone)]
pub struct EngineerService {
    store: Arc<dyn EngineerStore>,
    chat: Arc<dyn ChatClient>,
}

impl EngineerService {
    pub fn new(store: Arc<dyn EngineerStore>, chat: Arc<dyn ChatClient>) -> Self {
        Self { store, chat }
    }

    /// Creates a profile: derives the recommendation prompt from the input,
    /// calls the chat backend, and persists the enriched record.
    ///
    /// The store assigns the id. There is no partially-enriched persisted
    /// state; nothing is written when the chat call fails.
    pub async fn insert(&self, input: EngineerInput) -> Result<EngineerRow, AppError> {
        let prompt = build_recommendation_prompt(&input.name, &input.tech_stack);
        let recommendation = self.chat.chat(&prompt).await?;
        debug!("Chat response: {recommendation}");

        let row = self
            .store
            .upsert(EngineerRecord {
                id: None,
                name: input.name,
                tech_stack: input.tech_stack,
                learning_path_recommendation: recommendation,
            })
            .await?;

        info!("Inserted engineer {} with learning-path enrichment", row.id);
        Ok(row)
    }

    /// Every profile currently in the store, as an owned snapshot.
    /// Order is store-defined; empty vec when none exist.
    pub async fn get_all(&self) -> Result<Vec<EngineerRow>, AppError> {
        self.store.find_all().await
    }

    /// Fetches one profile, failing with `NotFound` for an unknown id.
    pub async fn get_by_id(&self, id: i32) -> Result<EngineerRow, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Engineer {id} not found")))
    }

    /// Copies `name` and `tech_stack` from the input onto the existing
    /// record; id and the stored recommendation are untouched. The chat
    /// backend is not re-invoked.
    pub async fn update(&self, id: i32, input: EngineerInput) -> Result<(), AppError> {
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Engineer {id} not found")))?;

        self.store
            .upsert(EngineerRecord {
                id: Some(existing.id),
                name: input.name,
                tech_stack: input.tech_stack,
                learning_path_recommendation: existing.learning_path_recommendation,
            })
            .await?;

        info!("Updated engineer {id}");
        Ok(())
    }

    /// Deletes by id. Deleting an unknown id succeeds silently.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        self.store.delete_by_id(id).await?;
        info!("Deleted engineer {id}");
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
