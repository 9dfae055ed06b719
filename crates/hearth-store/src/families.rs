//! Family group operations.

use chrono::Utc;

use hearth_shared::{
    DataError, FamilyGroup, FamilyId, FamilyMember, FamilyRole, MemberId, Result, UserId,
};

use crate::store::EntityStore;

impl EntityStore {
    /// Groups the user belongs to, members embedded.
    pub fn families_for(&self, user_id: &UserId) -> Vec<FamilyGroup> {
        self.lock()
            .families
            .iter()
            .filter(|f| f.member(user_id).is_some())
            .cloned()
            .collect()
    }

    pub fn selected_family_id(&self) -> Option<FamilyId> {
        self.lock().selected_family_id.clone()
    }

    pub fn select_family(&self, id: Option<FamilyId>) {
        self.lock().selected_family_id = id;
    }

    /// Create a group with the creator as its first admin member. The new
    /// group becomes the selected one.
    pub fn create_family(&self, name: &str, creator_id: &UserId) -> Result<FamilyGroup> {
        if name.trim().is_empty() {
            return Err(DataError::Validation("family name must not be empty".into()));
        }

        let mut data = self.lock();
        let creator = data
            .users
            .iter()
            .find(|u| &u.id == creator_id)
            .cloned()
            .ok_or(DataError::NotFound("user"))?;

        let family_id = FamilyId::generate();
        let family = FamilyGroup {
            id: family_id.clone(),
            name: name.trim().to_string(),
            created_by: creator_id.clone(),
            created_at: Some(Utc::now()),
            members: vec![FamilyMember {
                id: MemberId::generate(),
                family_id: family_id.clone(),
                user_id: creator_id.clone(),
                role: FamilyRole::Admin,
                joined_at: Utc::now(),
                user: Some(creator),
            }],
        };

        data.families.push(family.clone());
        data.selected_family_id = Some(family_id);
        self.persist(&data);
        Ok(family)
    }

    /// Add a user to a group as a regular member.
    pub fn invite_member(&self, family_id: &FamilyId, user_id: &UserId) -> Result<FamilyMember> {
        let mut data = self.lock();
        let user = data
            .users
            .iter()
            .find(|u| &u.id == user_id)
            .cloned()
            .ok_or(DataError::NotFound("user"))?;

        let family = data
            .families
            .iter_mut()
            .find(|f| &f.id == family_id)
            .ok_or(DataError::NotFound("family"))?;

        if family.member(user_id).is_some() {
            return Err(DataError::Conflict("user is already a member".into()));
        }

        let member = FamilyMember {
            id: MemberId::generate(),
            family_id: family_id.clone(),
            user_id: user_id.clone(),
            role: FamilyRole::Member,
            joined_at: Utc::now(),
            user: Some(user),
        };
        family.members.push(member.clone());
        self.persist(&data);
        Ok(member)
    }

    /// Remove the user's own membership.
    ///
    /// A sole remaining member who is also an admin takes the group with
    /// them: the whole group is deleted. The selected family falls back to
    /// any other group the user still belongs to.
    pub fn leave_family(&self, family_id: &FamilyId, user_id: &UserId) -> Result<()> {
        let mut data = self.lock();
        let family = data
            .families
            .iter()
            .find(|f| &f.id == family_id)
            .ok_or(DataError::NotFound("family"))?;

        if family.member(user_id).is_none() {
            return Err(DataError::NotFound("member"));
        }

        let delete_group = family.is_admin(user_id) && family.members.len() == 1;
        if delete_group {
            data.families.retain(|f| &f.id != family_id);
        } else {
            let family = data
                .families
                .iter_mut()
                .find(|f| &f.id == family_id)
                .ok_or(DataError::NotFound("family"))?;
            family.members.retain(|m| &m.user_id != user_id);
        }

        if data.selected_family_id.as_ref() == Some(family_id) {
            data.selected_family_id = data
                .families
                .iter()
                .find(|f| f.member(user_id).is_some())
                .map(|f| f.id.clone());
        }
        self.persist(&data);
        Ok(())
    }

    /// Kick a member out of a group.
    pub fn remove_member(&self, family_id: &FamilyId, user_id: &UserId) -> Result<()> {
        let mut data = self.lock();
        let family = data
            .families
            .iter_mut()
            .find(|f| &f.id == family_id)
            .ok_or(DataError::NotFound("family"))?;

        let before = family.members.len();
        family.members.retain(|m| &m.user_id != user_id);
        if family.members.len() == before {
            return Err(DataError::NotFound("member"));
        }
        self.persist(&data);
        Ok(())
    }
}
