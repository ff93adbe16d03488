use crate::error::ContractError;
use crate::models::Config;
use crate::state::CONFIG;
use cosmwasm_std::Deps;

pub fn config(deps: Deps) -> Result<Config, ContractError> {
  Ok(CONFIG.load(deps.storage)?)
}
