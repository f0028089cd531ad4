//! CLI command implementations for memberdash operations.
//!
//! Each submodule handles one subcommand. Commands resolve their inputs
//! (directory API or local file), call into the pure core, and hand the
//! result to an output writer.
//!
//! Available commands:
//! - **dashboard**: Aggregate membership statistics into a report
//! - **list**: List every member in the directory
//! - **show**: Show one member's full record
//! - **create**: Register a new member from a JSON draft
//! - **update**: Apply a partial update to a member
//! - **delete**: Delete a member record

pub mod create;
pub mod dashboard;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

pub use create::create_member;
pub use dashboard::{run_dashboard, DashboardOptions};
pub use delete::delete_member;
pub use list::list_members;
pub use show::show_member;
pub use update::update_member;
