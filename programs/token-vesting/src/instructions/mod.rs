pub mod create_vesting_account;
pub mod create_employee_vesting;
pub mod claim_tokens;
pub mod fund_treasury;
pub mod emit_claim_quote;

pub use create_vesting_account::*;
pub use create_employee_vesting::*;
pub use claim_tokens::*;
pub use fund_treasury::*;
pub use emit_claim_quote::*;
