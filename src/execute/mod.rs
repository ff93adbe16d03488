mod compute_results;
mod enter_amount;
mod enter_winning_draw;
mod issue_tickets;
mod restart;

pub use compute_results::compute_results;
pub use enter_amount::enter_amount;
pub use enter_winning_draw::enter_winning_draw;
pub use issue_tickets::issue_tickets;
pub use restart::restart;
