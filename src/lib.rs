// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod directory;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    Member, MemberDraft, MemberPayload, MembershipSummary, SeriesEntry,
};

pub use crate::core::errors::{Error, Result};

pub use crate::core::stats::{
    aggregate, CHART_PALETTE, OTHER_OCCUPATION, UNKNOWN_GENDER,
};

pub use crate::config::{ApiConfig, MemberdashConfig, DEFAULT_BASE_URL};

pub use crate::directory::{decode_member, decode_member_list, DirectoryClient};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
