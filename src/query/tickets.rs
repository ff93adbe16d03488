use crate::{error::ContractError, state::load_tickets};
use cosmwasm_std::Deps;

pub fn tickets(deps: Deps) -> Result<Vec<Vec<u16>>, ContractError> {
  Ok(
    load_tickets(deps.storage)?
      .iter()
      .map(|t| t.numbers())
      .collect(),
  )
}
