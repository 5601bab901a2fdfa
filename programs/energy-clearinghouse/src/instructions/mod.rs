pub mod initialize;
pub mod create_series;
pub mod update_index;
pub mod modify_position;
pub mod deposit_margin;
pub mod withdraw_margin;
pub mod mark_position;
pub mod liquidate;
pub mod get_margin_requirements;
pub mod set_margin_params;
pub mod set_insurance_fund;
pub mod set_paused;
pub mod update_authorities;


pub use initialize::*;
pub use create_series::*;
pub use update_index::*;
pub use modify_position::*;
pub use deposit_margin::*;
pub use withdraw_margin::*;
pub use mark_position::*;
pub use liquidate::*;
pub use get_margin_requirements::*;
pub use set_margin_params::*;
pub use set_insurance_fund::*;
pub use set_paused::*;
pub use update_authorities::*;
