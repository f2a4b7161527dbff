//! Organization data models

use serde::{Deserialize, Serialize};

/// Organization as returned by the Fly GraphQL API
///
/// DNS zones and members are only requested by the detail query, so they
/// are optional and skipped on output when absent.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(rename = "type", default)]
    pub org_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_zones: Option<DnsZoneConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<MemberConnection>,
}

/// DNS zones attached to an organization
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct DnsZoneConnection {
    #[serde(default)]
    pub nodes: Vec<DnsZone>,
}

/// Single DNS zone
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DnsZone {
    pub id: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Organization members, role lives on the edge
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct MemberConnection {
    #[serde(default)]
    pub edges: Vec<MemberEdge>,
}

/// Membership of a user in an organization
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,
    pub node: Member,
}

/// User identity behind a membership
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Member {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Organization {
    /// Viewer role, "unknown" when the API did not report one
    pub fn viewer_role(&self) -> &str {
        self.viewer_role.as_deref().unwrap_or("unknown")
    }

    /// Number of DNS zones (0 when not fetched)
    pub fn dns_zone_count(&self) -> usize {
        self.dns_zones.as_ref().map_or(0, |z| z.nodes.len())
    }

    /// Member edges (empty when not fetched)
    pub fn member_edges(&self) -> &[MemberEdge] {
        self.members
            .as_ref()
            .map(|m| m.edges.as_slice())
            .unwrap_or_default()
    }

    /// Number of members (0 when not fetched)
    pub fn member_count(&self) -> usize {
        self.member_edges().len()
    }
}

/// Structured form of the organization list
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MyOrganizations<'a> {
    pub personal_organization: &'a Organization,
    pub organizations: &'a [Organization],
}

/// Node list wrapper used by connection fields
#[derive(Deserialize, Debug, Default)]
pub(crate) struct OrganizationConnection {
    #[serde(default)]
    pub nodes: Vec<Organization>,
}

/// `data` of the current-organizations query
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CurrentOrganizationsData {
    pub personal_organization: Organization,
    #[serde(default)]
    pub organizations: OrganizationConnection,
}

/// `data` of the organization-by-slug query
#[derive(Deserialize, Debug)]
pub(crate) struct OrganizationData {
    pub organization: Option<Organization>,
}

/// `data` of the createOrganization mutation
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrganizationData {
    pub create_organization: CreateOrganizationPayload,
}

#[derive(Deserialize, Debug)]
pub(crate) struct CreateOrganizationPayload {
    pub organization: Organization,
}

/// `data` of the deleteOrganization mutation
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteOrganizationData {
    pub delete_organization: DeleteOrganizationPayload,
}

/// Result of a deletion
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOrganizationPayload {
    pub deleted_organization_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_org() -> Organization {
        Organization {
            id: "org-1".to_string(),
            name: "Acme".to_string(),
            slug: "acme".to_string(),
            org_type: "SHARED".to_string(),
            viewer_role: Some("admin".to_string()),
            dns_zones: Some(DnsZoneConnection {
                nodes: vec![DnsZone {
                    id: "dz-1".to_string(),
                    domain: "acme.dev".to_string(),
                    created_at: None,
                }],
            }),
            members: Some(MemberConnection {
                edges: vec![
                    MemberEdge {
                        cursor: None,
                        role: "admin".to_string(),
                        joined_at: None,
                        node: Member {
                            id: "u-1".to_string(),
                            name: "Ada".to_string(),
                            email: "ada@acme.dev".to_string(),
                        },
                    },
                    MemberEdge {
                        cursor: None,
                        role: "member".to_string(),
                        joined_at: None,
                        node: Member {
                            id: "u-2".to_string(),
                            name: "Bob".to_string(),
                            email: "bob@acme.dev".to_string(),
                        },
                    },
                ],
            }),
        }
    }

    #[test]
    fn test_organization_counts() {
        let org = create_test_org();
        assert_eq!(org.dns_zone_count(), 1);
        assert_eq!(org.member_count(), 2);
        assert_eq!(org.member_edges()[1].node.email, "bob@acme.dev");
    }

    #[test]
    fn test_organization_defaults() {
        let org = Organization {
            id: "org-2".to_string(),
            ..Default::default()
        };
        assert_eq!(org.viewer_role(), "unknown");
        assert_eq!(org.dns_zone_count(), 0);
        assert_eq!(org.member_count(), 0);
        assert!(org.member_edges().is_empty());
    }

    #[test]
    fn test_organization_deserialization() {
        let json = r#"{
            "id": "org-1",
            "name": "Acme",
            "slug": "acme",
            "type": "SHARED",
            "viewerRole": "admin",
            "dnsZones": {"nodes": [{"id": "dz-1", "domain": "acme.dev", "createdAt": "2021-01-01T00:00:00Z"}]},
            "members": {"edges": [
                {"cursor": "c1", "role": "admin", "joinedAt": "2021-01-01T00:00:00Z",
                 "node": {"id": "u-1", "name": "Ada", "email": "ada@acme.dev"}}
            ]}
        }"#;

        let org: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(org.slug, "acme");
        assert_eq!(org.org_type, "SHARED");
        assert_eq!(org.viewer_role(), "admin");
        assert_eq!(org.dns_zone_count(), 1);
        assert_eq!(org.member_edges()[0].role, "admin");
        assert_eq!(org.member_edges()[0].node.name, "Ada");
    }

    #[test]
    fn test_organization_deserialization_minimal() {
        let org: Organization =
            serde_json::from_str(r#"{"id": "1", "name": "acme", "slug": "acme", "type": "team"}"#)
                .unwrap();
        assert_eq!(org.name, "acme");
        assert_eq!(org.org_type, "team");
        assert!(org.viewer_role.is_none());
        assert!(org.members.is_none());
    }

    #[test]
    fn test_serialization_uses_api_field_names() {
        let value = serde_json::to_value(create_test_org()).unwrap();
        assert_eq!(value["type"], "SHARED");
        assert_eq!(value["viewerRole"], "admin");
        assert_eq!(value["dnsZones"]["nodes"][0]["domain"], "acme.dev");
        assert_eq!(value["members"]["edges"][0]["node"]["email"], "ada@acme.dev");
    }

    #[test]
    fn test_serialization_skips_unfetched_collections() {
        let org = Organization {
            id: "1".to_string(),
            name: "acme".to_string(),
            slug: "acme".to_string(),
            org_type: "team".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&org).unwrap();
        assert!(value.get("dnsZones").is_none());
        assert!(value.get("members").is_none());
        assert!(value.get("viewerRole").is_none());
    }

    #[test]
    fn test_current_organizations_data_deserialization() {
        let json = r#"{
            "personalOrganization": {"id": "p", "name": "Personal", "slug": "personal", "type": "PERSONAL"},
            "organizations": {"nodes": [
                {"id": "p", "name": "Personal", "slug": "personal", "type": "PERSONAL"},
                {"id": "o", "name": "Acme", "slug": "acme", "type": "SHARED"}
            ]}
        }"#;
        let data: CurrentOrganizationsData = serde_json::from_str(json).unwrap();
        assert_eq!(data.personal_organization.id, "p");
        assert_eq!(data.organizations.nodes.len(), 2);
    }

    #[test]
    fn test_organization_data_null() {
        let data: OrganizationData = serde_json::from_str(r#"{"organization": null}"#).unwrap();
        assert!(data.organization.is_none());
    }

    #[test]
    fn test_my_organizations_serialization() {
        let org = create_test_org();
        let orgs = vec![create_test_org()];
        let my = MyOrganizations {
            personal_organization: &org,
            organizations: &orgs,
        };
        let value = serde_json::to_value(&my).unwrap();
        assert_eq!(value["personalOrganization"]["slug"], "acme");
        assert_eq!(value["organizations"].as_array().unwrap().len(), 1);
    }
}
