//! API seam consumed by the command handlers

use crate::error::Result;
use crate::fly::{DeleteOrganizationPayload, Organization};

/// Organization operations against the remote API
///
/// `FlyClient` is the production implementation; handlers are generic over
/// this trait so they can run against an in-memory double.
#[allow(async_fn_in_trait)]
pub trait OrgsApi {
    /// Personal organization plus every organization visible to the caller
    async fn get_current_organizations(&self) -> Result<(Organization, Vec<Organization>)>;

    /// Organization detail (DNS zones and members included)
    ///
    /// Fails with `FlyError::NotFound` when no organization has this slug.
    async fn get_organization_by_slug(&self, slug: &str) -> Result<Organization>;

    /// Create an organization with the given name
    async fn create_organization(&self, name: &str) -> Result<Organization>;

    /// Delete an organization by ID
    async fn delete_organization(&self, id: &str) -> Result<DeleteOrganizationPayload>;
}
