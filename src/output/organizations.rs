//! Organization output formatter

use comfy_table::{presets::NOTHING, presets::UTF8_FULL_CONDENSED, Table};
use std::io::Write;

use super::common::write_structured;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::fly::{DeleteOrganizationPayload, MyOrganizations, Organization};

/// Width of the key column in the organization detail block
const KEY_WIDTH: usize = 10;

/// Organizations in list order: personal first, then every other one once
pub fn listed_organizations<'a>(
    personal: &'a Organization,
    organizations: &'a [Organization],
) -> Vec<&'a Organization> {
    std::iter::once(personal)
        .chain(organizations.iter().filter(|o| o.id != personal.id))
        .collect()
}

/// Plain `Name Slug Type` table
fn organizations_table(orgs: &[&Organization]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Name", "Slug", "Type"]);

    for org in orgs {
        table.add_row(vec![&org.name, &org.slug, &org.org_type]);
    }
    table
}

/// Member table for the organization detail view
fn members_table(org: &Organization) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["Name", "Email", "Role"]);

    for edge in org.member_edges() {
        table.add_row(vec![&edge.node.name, &edge.node.email, &edge.role]);
    }
    table
}

/// Output the organization list
pub fn output_organization_list(
    out: &mut dyn Write,
    format: OutputFormat,
    personal: &Organization,
    organizations: &[Organization],
) -> Result<()> {
    if format.is_structured() {
        let data = MyOrganizations {
            personal_organization: personal,
            organizations,
        };
        return write_structured(out, format, &data);
    }

    let listed = listed_organizations(personal, organizations);
    writeln!(out, "{}", organizations_table(&listed))?;
    Ok(())
}

/// Output a single organization as a one-row table (or structured)
pub fn output_organization(
    out: &mut dyn Write,
    format: OutputFormat,
    org: &Organization,
) -> Result<()> {
    if format.is_structured() {
        return write_structured(out, format, org);
    }

    writeln!(out, "{}", organizations_table(&[org]))?;
    Ok(())
}

/// Output organization detail: identity, summary and members
pub fn output_organization_detail(
    out: &mut dyn Write,
    format: OutputFormat,
    org: &Organization,
) -> Result<()> {
    if format.is_structured() {
        return write_structured(out, format, org);
    }

    writeln!(out, "Organization")?;
    writeln!(out, "{:<KEY_WIDTH$}: {}", "Name", org.name)?;
    writeln!(out, "{:<KEY_WIDTH$}: {}", "Slug", org.slug)?;
    writeln!(out, "{:<KEY_WIDTH$}: {}", "Type", org.org_type)?;
    writeln!(out)?;

    writeln!(out, "Summary")?;
    writeln!(
        out,
        "You have {} permissions on this organization",
        org.viewer_role()
    )?;
    writeln!(
        out,
        "There are {} DNS zones associated with this organization",
        org.dns_zone_count()
    )?;
    writeln!(
        out,
        "There are {} members associated with this organization",
        org.member_count()
    )?;
    writeln!(out)?;

    writeln!(out, "Organization Members")?;
    writeln!(out, "{}", members_table(org))?;
    Ok(())
}

/// Output the result of a deletion
pub fn output_deleted_organization(
    out: &mut dyn Write,
    format: OutputFormat,
    slug: &str,
    payload: &DeleteOrganizationPayload,
) -> Result<()> {
    if format.is_structured() {
        return write_structured(out, format, payload);
    }

    writeln!(out, "✓ Deleted organization '{}'", slug)?;
    Ok(())
}
