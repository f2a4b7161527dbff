//! Organization module

mod api;
mod commands;
mod models;

pub use commands::{
    run_orgs_command, run_orgs_create, run_orgs_delete, run_orgs_invite, run_orgs_list,
    run_orgs_remove, run_orgs_revoke, run_orgs_show,
};
pub use models::{
    DeleteOrganizationPayload, DnsZone, DnsZoneConnection, Member, MemberConnection, MemberEdge,
    MyOrganizations, Organization,
};
