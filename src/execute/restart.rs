use crate::{error::ContractError, state::reset_session};
use cosmwasm_std::{attr, DepsMut, Env, MessageInfo, Response};

pub fn restart(
  deps: DepsMut,
  _env: Env,
  _info: MessageInfo,
) -> Result<Response, ContractError> {
  reset_session(deps.storage)?;
  deps.api.debug(">>> session reset");
  Ok(Response::new().add_attributes(vec![attr("action", "restart")]))
}
