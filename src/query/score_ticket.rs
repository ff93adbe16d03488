use crate::{
  error::ContractError,
  models::TicketScore,
  scoring,
  state::{load_winning_draw, CONFIG},
  ticket::create_manual_ticket,
};
use cosmwasm_std::Deps;

/// Score arbitrary numbers against the session's winning draw.
pub fn score_ticket(
  deps: Deps,
  numbers: Vec<u16>,
) -> Result<TicketScore, ContractError> {
  let config = CONFIG.load(deps.storage)?;
  let draw = load_winning_draw(deps.storage)?;
  let ticket = create_manual_ticket(&numbers, &config)?;
  Ok(scoring::score_ticket(&ticket, &draw, &config))
}
