use crate::error::ContractError;
use crate::models::ScoreReport;
use crate::state::REPORT;
use cosmwasm_std::Deps;

pub fn report(deps: Deps) -> Result<Option<ScoreReport>, ContractError> {
  Ok(REPORT.may_load(deps.storage)?)
}
