use crate::error::ContractError;
use crate::msg::DryRunResponse;
use crate::scoring::score_all;
use crate::state::CONFIG;
use crate::ticket::{create_auto_draw, generate_tickets};
use crate::util::{count_affordable_tickets, parse_amount};
use crate::xorshift32::Xorshift32;
use cosmwasm_std::Deps;

/// Simulate a whole session from a seed: automatic tickets for the amount, an
/// automatic winning draw, and the resulting report. Storage is only read.
pub fn dry_run(
  deps: Deps,
  amount: String,
  seed: u32,
) -> Result<DryRunResponse, ContractError> {
  let config = CONFIG.load(deps.storage)?;
  let amount = parse_amount(&amount, &config)?;
  let ticket_count = count_affordable_tickets(amount, config.price)?;

  let mut rng = Xorshift32::new(seed);
  let tickets = generate_tickets(&[], ticket_count, &mut rng, &config)?;
  let draw = create_auto_draw(&mut rng, &config);
  let report = score_all(&tickets, &draw, amount, &config)?;

  Ok(DryRunResponse {
    seed,
    tickets: tickets.iter().map(|t| t.numbers()).collect(),
    draw,
    report,
  })
}
