mod data;
mod helpers;
mod history;
mod log;
mod plan;
mod status;

pub(crate) use data::{cmd_clear, cmd_export};
pub(crate) use history::{cmd_history, cmd_show};
pub(crate) use log::{LogArgs, cmd_activities, cmd_burn, cmd_log};
pub(crate) use plan::{cmd_chart, cmd_milestones};
pub(crate) use status::cmd_status;
