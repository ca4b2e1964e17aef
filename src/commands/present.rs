//! Interactive sessions: `present` (presenter mode) and `edit` (editor mode).

use anyhow::Result;

use crate::commands::common::open_repository;
use crate::session::{Session, SessionMode};

pub fn execute(mode: SessionMode) -> Result<()> {
    let (root, _gateway) = open_repository()?;
    let session = Session::open(&root, mode)?;
    session.run()
}
