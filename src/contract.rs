use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

const CONTRACT_NAME: &str = "crates.io:lotto-sim";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
  deps: DepsMut,
  _env: Env,
  _info: MessageInfo,
  msg: InstantiateMsg,
) -> Result<Response, ContractError> {
  set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
  state::initialize(deps, &msg)?;
  Ok(Response::new().add_attribute("action", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  msg: ExecuteMsg,
) -> Result<Response, ContractError> {
  match msg {
    ExecuteMsg::EnterAmount { amount } => execute::enter_amount(deps, env, info, amount),
    ExecuteMsg::IssueTickets { manual, seed } => {
      execute::issue_tickets(deps, env, info, manual, seed)
    },
    ExecuteMsg::EnterWinningDraw { numbers, bonus } => {
      execute::enter_winning_draw(deps, env, info, numbers, bonus)
    },
    ExecuteMsg::ComputeResults {} => execute::compute_results(deps, env, info),
    ExecuteMsg::Restart {} => execute::restart(deps, env, info),
  }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(
  deps: Deps,
  _env: Env,
  msg: QueryMsg,
) -> Result<Binary, ContractError> {
  let result = match msg {
    QueryMsg::Config {} => to_binary(&query::config(deps)?),
    QueryMsg::Session {} => to_binary(&query::session(deps)?),
    QueryMsg::Tickets {} => to_binary(&query::tickets(deps)?),
    QueryMsg::Report {} => to_binary(&query::report(deps)?),
    QueryMsg::ScoreTicket { numbers } => to_binary(&query::score_ticket(deps, numbers)?),
    QueryMsg::DryRun { amount, seed } => to_binary(&query::dry_run(deps, amount, seed)?),
  }?;
  Ok(result)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(
  deps: DepsMut,
  _env: Env,
  _msg: MigrateMsg,
) -> Result<Response, ContractError> {
  set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
  Ok(Response::default())
}
