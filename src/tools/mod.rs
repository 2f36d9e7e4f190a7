//! Tool implementations shared by the tool server and the CLI

pub mod format;
pub mod recent;
pub mod search;
pub mod suggest;
