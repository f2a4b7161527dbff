//! Organization API operations

use log::debug;

use crate::error::{FlyError, Result};
use crate::fly::traits::OrgsApi;
use crate::fly::FlyClient;

use super::models::{
    CreateOrganizationData, CurrentOrganizationsData, DeleteOrganizationData,
    DeleteOrganizationPayload, Organization, OrganizationData,
};

const CURRENT_ORGANIZATIONS_QUERY: &str = r#"
query {
  personalOrganization {
    id
    slug
    name
    type
    viewerRole
  }
  organizations {
    nodes {
      id
      slug
      name
      type
      viewerRole
    }
  }
}
"#;

const ORGANIZATION_BY_SLUG_QUERY: &str = r#"
query($slug: String!) {
  organization(slug: $slug) {
    id
    slug
    name
    type
    viewerRole
    dnsZones {
      nodes {
        id
        domain
        createdAt
      }
    }
    members {
      edges {
        cursor
        node {
          id
          name
          email
        }
        joinedAt
        role
      }
    }
  }
}
"#;

const CREATE_ORGANIZATION_MUTATION: &str = r#"
mutation($input: CreateOrganizationInput!) {
  createOrganization(input: $input) {
    organization {
      id
      name
      slug
      type
      viewerRole
    }
  }
}
"#;

const DELETE_ORGANIZATION_MUTATION: &str = r#"
mutation($input: DeleteOrganizationInput!) {
  deleteOrganization(input: $input) {
    deletedOrganizationId
  }
}
"#;

impl OrgsApi for FlyClient {
    async fn get_current_organizations(&self) -> Result<(Organization, Vec<Organization>)> {
        debug!("Fetching current organizations");

        let data: CurrentOrganizationsData = self
            .graphql(
                CURRENT_ORGANIZATIONS_QUERY,
                serde_json::json!({}),
                "fetch organizations",
            )
            .await?;

        debug!(
            "Found personal organization '{}' and {} organizations",
            data.personal_organization.slug,
            data.organizations.nodes.len()
        );
        Ok((data.personal_organization, data.organizations.nodes))
    }

    async fn get_organization_by_slug(&self, slug: &str) -> Result<Organization> {
        debug!("Fetching organization by slug: {}", slug);

        let data: OrganizationData = self
            .graphql(
                ORGANIZATION_BY_SLUG_QUERY,
                serde_json::json!({ "slug": slug }),
                &format!("fetch organization '{}'", slug),
            )
            .await?;

        data.organization
            .ok_or_else(|| FlyError::NotFound(format!("Organization '{}' not found", slug)))
    }

    async fn create_organization(&self, name: &str) -> Result<Organization> {
        debug!("Creating organization: {}", name);

        let data: CreateOrganizationData = self
            .graphql(
                CREATE_ORGANIZATION_MUTATION,
                serde_json::json!({ "input": { "name": name } }),
                &format!("create organization '{}'", name),
            )
            .await?;

        Ok(data.create_organization.organization)
    }

    async fn delete_organization(&self, id: &str) -> Result<DeleteOrganizationPayload> {
        debug!("Deleting organization: {}", id);

        let data: DeleteOrganizationData = self
            .graphql(
                DELETE_ORGANIZATION_MUTATION,
                serde_json::json!({ "input": { "organizationId": id } }),
                &format!("delete organization '{}'", id),
            )
            .await?;

        Ok(data.delete_organization)
    }
}
