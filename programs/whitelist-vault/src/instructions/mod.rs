pub mod add_to_whitelist;
pub mod balance_of;
pub mod current_owner;
pub mod deposit;
pub mod initialize;
pub mod is_paused;
pub mod is_whitelisted;
pub mod pause;
pub mod remove_from_whitelist;
pub mod transfer_ownership;
pub mod unpause;
pub mod withdraw;

pub use add_to_whitelist::*;
pub use balance_of::*;
pub use current_owner::*;
pub use deposit::*;
pub use initialize::*;
pub use is_paused::*;
pub use is_whitelisted::*;
pub use pause::*;
pub use remove_from_whitelist::*;
pub use transfer_ownership::*;
pub use unpause::*;
pub use withdraw::*;
