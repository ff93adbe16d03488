use crate::{
  error::ContractError,
  models::SessionStatus,
  scoring::score_all,
  state::{
    load_tickets, load_winning_draw, require_status, CONFIG, REPORT, SESSION_AMOUNT,
    SESSION_STATUS,
  },
};
use cosmwasm_std::{attr, DepsMut, Env, MessageInfo, Response};

pub fn compute_results(
  deps: DepsMut,
  _env: Env,
  _info: MessageInfo,
) -> Result<Response, ContractError> {
  require_status(deps.storage, SessionStatus::WinningNumbersEntered)?;

  let config = CONFIG.load(deps.storage)?;
  let amount = SESSION_AMOUNT.load(deps.storage)?;
  let tickets = load_tickets(deps.storage)?;
  let draw = load_winning_draw(deps.storage)?;

  let report = score_all(&tickets, &draw, amount, &config)?;

  deps
    .api
    .debug(format!(">>> histogram: {:?}", report.histogram).as_str());

  REPORT.save(deps.storage, &report)?;
  SESSION_STATUS.save(deps.storage, &SessionStatus::ResultsComputed)?;

  Ok(Response::new().add_attributes(vec![
    attr("action", "compute_results"),
    attr("total_payout", report.total_payout.to_string()),
    attr("profit_rate", report.profit_rate_percent.to_string()),
  ]))
}
