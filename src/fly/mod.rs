//! Fly API client module
//!
//! This module provides functionality to interact with the Fly GraphQL API.

mod client;
mod context;
mod credentials;
pub mod organizations;
pub mod traits;

pub use client::{FlyClient, GraphQlError, GraphQlErrorExtensions};
pub use context::CommandContext;
pub use credentials::TokenResolver;
pub use organizations::{
    run_orgs_command, DeleteOrganizationPayload, DnsZone, DnsZoneConnection, Member,
    MemberConnection, MemberEdge, MyOrganizations, Organization,
};
pub use traits::OrgsApi;
