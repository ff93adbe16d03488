use crate::{
  error::ContractError,
  models::SessionStatus,
  state::{require_status, CONFIG, SESSION_STATUS, WINNING_DRAW},
  util::record_winning_draw,
};
use cosmwasm_std::{attr, DepsMut, Env, MessageInfo, Response};

pub fn enter_winning_draw(
  deps: DepsMut,
  _env: Env,
  _info: MessageInfo,
  numbers: Vec<u16>,
  bonus: u16,
) -> Result<Response, ContractError> {
  require_status(deps.storage, SessionStatus::TicketsIssued)?;

  let config = CONFIG.load(deps.storage)?;
  let draw = record_winning_draw(&numbers, bonus, &config)?;

  deps.api.debug(
    format!(
      ">>> winning numbers: {:?}, bonus: {}",
      draw.numbers, draw.bonus
    )
    .as_str(),
  );

  WINNING_DRAW.save(deps.storage, &draw)?;
  SESSION_STATUS.save(deps.storage, &SessionStatus::WinningNumbersEntered)?;

  Ok(Response::new().add_attributes(vec![attr("action", "enter_winning_draw")]))
}
