//! Family groups hook.

use std::sync::Arc;

use tokio::sync::watch;

use hearth_shared::{FamilyGroup, FamilyId, FamilyMember, Result, UserId};

use crate::config::Mode;
use crate::query::{QueryCache, QueryKey};
use crate::service::DataService;

pub struct FamiliesHook {
    service: Arc<DataService>,
    cache: Arc<QueryCache>,
    user_id: UserId,
}

impl FamiliesHook {
    pub fn new(service: Arc<DataService>, cache: Arc<QueryCache>, user_id: UserId) -> Self {
        Self {
            service,
            cache,
            user_id,
        }
    }

    fn key(&self) -> QueryKey {
        QueryKey::Families(self.user_id.clone())
    }

    /// Synchronous first paint straight from the store; local mode only.
    pub fn initial(&self) -> Option<Vec<FamilyGroup>> {
        match self.service.mode() {
            Mode::Local => Some(self.service.store().families_for(&self.user_id)),
            Mode::Remote => None,
        }
    }

    pub async fn families(&self) -> Result<Vec<FamilyGroup>> {
        self.cache
            .fetch(self.key(), self.service.families_for(&self.user_id))
            .await
    }

    /// The group the UI currently shows. Falls back to the user's first
    /// group when nothing is selected.
    pub async fn selected_family(&self) -> Result<Option<FamilyGroup>> {
        let families = self.families().await?;
        let selected = self.service.store().selected_family_id();
        Ok(match selected {
            Some(id) => families.iter().find(|f| f.id == id).cloned(),
            None => families.first().cloned(),
        })
    }

    pub async fn family_members(&self, family_id: &FamilyId) -> Result<Vec<FamilyMember>> {
        let families = self.families().await?;
        Ok(families
            .iter()
            .find(|f| &f.id == family_id)
            .map(|f| f.members.clone())
            .unwrap_or_default())
    }

    /// Selection is client-side state; it never leaves the device.
    pub fn select_family(&self, family_id: Option<FamilyId>) {
        self.service.store().select_family(family_id);
        self.cache.invalidate(&self.key());
    }

    pub async fn create_family(&self, name: &str) -> Result<FamilyGroup> {
        self.cache
            .mutate(
                &[self.key()],
                self.service.create_family(name, &self.user_id),
            )
            .await
    }

    pub async fn invite_member(
        &self,
        family_id: &FamilyId,
        user_id: &UserId,
    ) -> Result<FamilyMember> {
        self.cache
            .mutate(
                &[self.key()],
                self.service.invite_member(family_id, user_id),
            )
            .await
    }

    pub async fn leave_family(&self, family_id: &FamilyId) -> Result<()> {
        self.cache
            .mutate(
                &[self.key(), QueryKey::Tasks(family_id.clone())],
                self.service.leave_family(family_id, &self.user_id),
            )
            .await
    }

    pub async fn remove_member(&self, family_id: &FamilyId, user_id: &UserId) -> Result<()> {
        self.cache
            .mutate(
                &[self.key()],
                self.service.remove_member(family_id, user_id),
            )
            .await
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.cache.subscribe(self.key())
    }
}
