mod executor;
mod probes;

pub use executor::{run_lifecycle_hook, run_lifecycle_hook_with_executor, UnitStateOp};
pub use probes::{helper_tool_present, service_manager_present};
