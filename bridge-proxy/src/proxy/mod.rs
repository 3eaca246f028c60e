mod balances;
pub use balances::{asset_balance, OutputBalances};

mod convert;
pub use convert::execute_convert;

mod deploy;
pub use deploy::execute_deploy_bridge;

mod finalise;
pub use finalise::execute_finalise;

mod fund;
pub use fund::execute_fund;
