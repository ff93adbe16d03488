use crate::error::ContractError;
use crate::msg::SessionView;
use crate::state::{
  load_tickets, REPORT, SESSION_AMOUNT, SESSION_STATUS, SESSION_TICKET_COUNT, WINNING_DRAW,
};
use cosmwasm_std::Deps;

pub fn session(deps: Deps) -> Result<SessionView, ContractError> {
  Ok(SessionView {
    status: SESSION_STATUS.load(deps.storage)?,
    amount: SESSION_AMOUNT.may_load(deps.storage)?,
    ticket_count: SESSION_TICKET_COUNT.may_load(deps.storage)?,
    tickets: load_tickets(deps.storage)?
      .iter()
      .map(|t| t.numbers())
      .collect(),
    draw: WINNING_DRAW.may_load(deps.storage)?,
    report: REPORT.may_load(deps.storage)?,
  })
}
