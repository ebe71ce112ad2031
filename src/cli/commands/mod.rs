//! CLI command implementations

pub mod audit;
pub mod cert;
pub mod cmm;
pub mod completions;
pub mod component;
pub mod emission;
pub mod init;
pub mod login;
pub mod question;
pub mod report;
pub mod sup;

use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::Desk;

/// Resolve the desk for a command, honoring the global --desk override
pub(crate) fn open_desk(global: &GlobalOpts) -> Result<Desk> {
    let desk = match &global.desk {
        Some(path) => Desk::discover_from(path),
        None => Desk::discover(),
    };
    desk.map_err(|e| miette::miette!("{}", e))
}
