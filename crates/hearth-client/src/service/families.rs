//! Family group operations, both backends.

use hearth_shared::{
    CreateFamilyBody, FamilyGroup, FamilyId, FamilyMember, FamilyPatchBody, Result, UserId,
};

use crate::config::Mode;
use crate::service::DataService;

impl DataService {
    pub async fn families_for(&self, user_id: &UserId) -> Result<Vec<FamilyGroup>> {
        match self.mode() {
            Mode::Local => Ok(self.store().families_for(user_id)),
            Mode::Remote => {
                self.api()
                    .get(&format!("/families?user_id={}", user_id.as_str()))
                    .await
            }
        }
    }

    pub async fn create_family(&self, name: &str, creator_id: &UserId) -> Result<FamilyGroup> {
        match self.mode() {
            Mode::Local => self.store().create_family(name, creator_id),
            Mode::Remote => {
                let body = CreateFamilyBody {
                    name: name.to_string(),
                    created_by: creator_id.clone(),
                };
                self.api().post("/families", &body).await
            }
        }
    }

    pub async fn invite_member(
        &self,
        family_id: &FamilyId,
        user_id: &UserId,
    ) -> Result<FamilyMember> {
        match self.mode() {
            Mode::Local => self.store().invite_member(family_id, user_id),
            Mode::Remote => {
                let body = FamilyPatchBody::Invite {
                    family_id: family_id.clone(),
                    user_id: user_id.clone(),
                };
                self.api().patch("/families", &body).await
            }
        }
    }

    pub async fn leave_family(&self, family_id: &FamilyId, user_id: &UserId) -> Result<()> {
        match self.mode() {
            Mode::Local => self.store().leave_family(family_id, user_id),
            Mode::Remote => {
                let body = FamilyPatchBody::Leave {
                    family_id: family_id.clone(),
                    user_id: user_id.clone(),
                };
                let _: bool = self.api().patch("/families", &body).await?;
                Ok(())
            }
        }
    }

    /// Kicking a member uses the same wire action as leaving, issued by an
    /// admin with the member's id.
    pub async fn remove_member(&self, family_id: &FamilyId, user_id: &UserId) -> Result<()> {
        match self.mode() {
            Mode::Local => self.store().remove_member(family_id, user_id),
            Mode::Remote => {
                let body = FamilyPatchBody::Leave {
                    family_id: family_id.clone(),
                    user_id: user_id.clone(),
                };
                let _: bool = self.api().patch("/families", &body).await?;
                Ok(())
            }
        }
    }
}
