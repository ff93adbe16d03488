use crate::{
  error::ContractError,
  models::SessionStatus,
  state::{require_status, CONFIG, SESSION_AMOUNT, SESSION_STATUS, SESSION_TICKET_COUNT},
  util::{count_affordable_tickets, parse_amount},
};
use cosmwasm_std::{attr, DepsMut, Env, MessageInfo, Response};

pub fn enter_amount(
  deps: DepsMut,
  _env: Env,
  _info: MessageInfo,
  amount: String,
) -> Result<Response, ContractError> {
  require_status(deps.storage, SessionStatus::Empty)?;

  let config = CONFIG.load(deps.storage)?;
  let amount = parse_amount(&amount, &config)?;
  let ticket_count = count_affordable_tickets(amount, config.price)?;

  deps.api.debug(
    format!(
      ">>> amount: {}, ticket count: {}",
      amount.u128(),
      ticket_count
    )
    .as_str(),
  );

  SESSION_AMOUNT.save(deps.storage, &amount)?;
  SESSION_TICKET_COUNT.save(deps.storage, &ticket_count)?;
  SESSION_STATUS.save(deps.storage, &SessionStatus::AmountEntered)?;

  Ok(Response::new().add_attributes(vec![
    attr("action", "enter_amount"),
    attr("amount", amount.to_string()),
    attr("ticket_count", ticket_count.to_string()),
  ]))
}
