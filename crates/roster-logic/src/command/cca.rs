use std::sync::Arc;

use roster_core::{
  cca::{Attendance, Cca, CcaInformation, SessionCount},
  field::{CcaName, Role},
  model::Model,
  predicate::InCca,
};

use super::{CommandResult, cca_named, person_at};
use crate::{error::CommandError, index::Index};

pub(super) fn add_cca<M: Model + ?Sized>(
  model: &mut M,
  name: &CcaName,
) -> Result<CommandResult, CommandError> {
  let cca = Cca::new(name.clone());
  if model.has_cca(&cca) {
    return Err(CommandError::DuplicateCca);
  }
  model.add_cca(cca)?;
  Ok(CommandResult::new(format!("New CCA added: {name}")))
}

pub(super) fn enrol<M: Model + ?Sized>(
  model: &mut M,
  index: Index,
  name: &CcaName,
  role: &Role,
  total_sessions: SessionCount,
) -> Result<CommandResult, CommandError> {
  let person = person_at(model, index)?;
  let cca = cca_named(model, name)?;
  if person.has_cca(&cca) {
    return Err(CommandError::AlreadyEnrolled {
      person: person.name().to_string(),
      cca:    name.to_string(),
    });
  }

  let info = CcaInformation::new(
    cca,
    role.clone(),
    Attendance::new(SessionCount::zero(), total_sessions),
  );
  let feedback = format!("Enrolled {} in {info}", person.name());
  model.set_person(&person, person.with_cca_information(info))?;
  Ok(CommandResult::new(feedback))
}

pub(super) fn delete_cca<M: Model + ?Sized>(
  model: &mut M,
  name: &CcaName,
) -> Result<CommandResult, CommandError> {
  let cca = cca_named(model, name)?;
  model.delete_cca(&cca)?;
  Ok(CommandResult::new(format!("Deleted CCA: {name}")))
}

/// Rename a CCA. Enrolments follow the new name.
pub(super) fn edit_cca<M: Model + ?Sized>(
  model: &mut M,
  name: &CcaName,
  new_name: &CcaName,
) -> Result<CommandResult, CommandError> {
  let cca = cca_named(model, name)?;
  let renamed = Cca::new(new_name.clone());
  if !cca.is_same_cca(&renamed) && model.has_cca(&renamed) {
    return Err(CommandError::DuplicateCca);
  }
  model.set_cca(&cca, renamed)?;
  Ok(CommandResult::new(format!("Edited CCA: {name} -> {new_name}")))
}

pub(super) fn attend<M: Model + ?Sized>(
  model: &mut M,
  index: Index,
  name: &CcaName,
  amount: i64,
) -> Result<CommandResult, CommandError> {
  let person = person_at(model, index)?;
  let cca = cca_named(model, name)?;
  model.record_attendance(&cca, &person, amount)?;
  Ok(CommandResult::new(format!(
    "Recorded {amount} session(s) of {name} for {}",
    person.name()
  )))
}

pub(super) fn find_cca<M: Model + ?Sized>(
  model: &mut M,
  name: &CcaName,
) -> Result<CommandResult, CommandError> {
  model.update_filtered_person_list(Arc::new(InCca::new(name.clone())));
  let shown = model.filtered_person_list().len();
  Ok(CommandResult::new(format!("{shown} persons listed!")))
}
