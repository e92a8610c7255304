use super::{not_found_as_warning, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::catalog::{MemberFields, MemberUpdate};
use crate::store::{CatalogStore, StorageBackend};

pub fn add<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    fields: MemberFields,
) -> Result<CmdResult> {
    let number = store.add_member(fields)?;
    let mut result = CmdResult::default();
    if let Some(member) = store.member(number) {
        result.add_message(CmdMessage::success(format!(
            "Member '{}' added with member number {}.",
            member.full_name(),
            number
        )));
        result.affected_members.push(member.clone());
    }
    Ok(result)
}

pub fn modify<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    number: i32,
    update: MemberUpdate,
) -> Result<CmdResult> {
    match store.modify_member(number, update) {
        Ok(member) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Member number {} modified.",
                number
            )));
            result.affected_members.push(member);
            Ok(result)
        }
        Err(e) => not_found_as_warning(e),
    }
}

pub fn delete<B: StorageBackend>(store: &mut CatalogStore<B>, number: i32) -> Result<CmdResult> {
    match store.delete_member(number) {
        Ok(member) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Member '{}' removed.",
                member.full_name()
            )));
            result.affected_members.push(member);
            Ok(result)
        }
        Err(e) => not_found_as_warning(e),
    }
}

pub fn list<B: StorageBackend>(store: &CatalogStore<B>) -> Result<CmdResult> {
    let members = store.members().to_vec();
    if members.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("There are no members.")));
    }
    Ok(CmdResult::default().with_listed_members(members))
}
