use crate::{
  error::ContractError,
  models::SessionStatus,
  state::{
    build_rng, require_status, CONFIG, SESSION_STATUS, SESSION_TICKETS, SESSION_TICKET_COUNT,
  },
  ticket::generate_tickets,
};
use cosmwasm_std::{attr, DepsMut, Env, MessageInfo, Response};

pub fn issue_tickets(
  deps: DepsMut,
  env: Env,
  _info: MessageInfo,
  manual: Vec<Vec<u16>>,
  seed: Option<u32>,
) -> Result<Response, ContractError> {
  require_status(deps.storage, SessionStatus::AmountEntered)?;

  let config = CONFIG.load(deps.storage)?;
  let ticket_count = SESSION_TICKET_COUNT.load(deps.storage)?;
  let mut rng = build_rng(&env, seed);

  // Nothing is saved unless every manual ticket passes validation.
  let tickets = generate_tickets(&manual, ticket_count, &mut rng, &config)?;

  deps.api.debug(
    format!(
      ">>> issued {} tickets ({} manual)",
      tickets.len(),
      manual.len()
    )
    .as_str(),
  );

  SESSION_TICKETS.save(deps.storage, &tickets)?;
  SESSION_STATUS.save(deps.storage, &SessionStatus::TicketsIssued)?;

  Ok(Response::new().add_attributes(vec![
    attr("action", "issue_tickets"),
    attr("ticket_count", tickets.len().to_string()),
    attr("manual_count", manual.len().to_string()),
  ]))
}
