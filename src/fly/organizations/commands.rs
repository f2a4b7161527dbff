//! Organization command handlers

use log::{debug, info};
use std::io::Write;

use crate::cli::{MemberArgs, OrgsCommand};
use crate::error::{FlyError, Result};
use crate::fly::context::CommandContext;
use crate::fly::traits::OrgsApi;
use crate::output::{
    output_deleted_organization, output_organization, output_organization_detail,
    output_organization_list,
};
use crate::ui::finish_spinner;

/// Dispatch an 'orgs' subcommand to its handler
pub async fn run_orgs_command<A: OrgsApi>(
    ctx: &mut CommandContext<'_, A>,
    command: &OrgsCommand,
) -> Result<()> {
    debug!("Running orgs {}", command.name());

    match command {
        OrgsCommand::List => run_orgs_list(ctx).await,
        OrgsCommand::Show(args) => run_orgs_show(ctx, &args.org).await,
        OrgsCommand::Invite(args) => run_orgs_invite(args),
        OrgsCommand::Revoke(args) => run_orgs_revoke(args),
        OrgsCommand::Remove(args) => run_orgs_remove(args),
        OrgsCommand::Create(args) => run_orgs_create(ctx, args.org.as_deref()).await,
        OrgsCommand::Delete(args) => run_orgs_delete(ctx, args.org.as_deref(), args.yes).await,
    }
}

/// Take a value from the command line or ask for it, rejecting blanks
fn required_value<A>(
    ctx: &CommandContext<'_, A>,
    value: Option<&str>,
    label: &str,
) -> Result<String> {
    let value = match value {
        Some(v) => v.to_string(),
        None => ctx.prompter.input(label)?,
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FlyError::Usage(format!("{} must not be empty", label)));
    }
    Ok(trimmed.to_string())
}

/// List the personal organization followed by all other visible ones
pub async fn run_orgs_list<A: OrgsApi>(ctx: &mut CommandContext<'_, A>) -> Result<()> {
    let spinner = ctx.spinner("Fetching organizations...");
    let result = ctx.api.get_current_organizations().await;
    finish_spinner(spinner);
    let (personal, organizations) = result?;

    debug!(
        "Personal organization '{}', {} visible organizations",
        personal.slug,
        organizations.len()
    );

    output_organization_list(ctx.out, ctx.output, &personal, &organizations)
}

/// Show organization detail by slug
pub async fn run_orgs_show<A: OrgsApi>(ctx: &mut CommandContext<'_, A>, slug: &str) -> Result<()> {
    let slug = required_value(ctx, Some(slug), "Organization slug")?;

    let spinner = ctx.spinner(&format!("Fetching organization '{}'...", slug));
    let result = ctx.api.get_organization_by_slug(&slug).await;
    finish_spinner(spinner);
    let org = result?;

    output_organization_detail(ctx.out, ctx.output, &org)
}

/// Create an organization, prompting for the name when omitted
pub async fn run_orgs_create<A: OrgsApi>(
    ctx: &mut CommandContext<'_, A>,
    name: Option<&str>,
) -> Result<()> {
    let name = required_value(ctx, name, "Organization name")?;

    let spinner = ctx.spinner(&format!("Creating organization '{}'...", name));
    let result = ctx.api.create_organization(&name).await;
    finish_spinner(spinner);
    let org = result?;

    info!("Created organization '{}' ({})", org.slug, org.id);
    output_organization(ctx.out, ctx.output, &org)
}

/// Delete an organization after confirmation
///
/// A declined confirmation is a successful no-op.
pub async fn run_orgs_delete<A: OrgsApi>(
    ctx: &mut CommandContext<'_, A>,
    slug: Option<&str>,
    yes: bool,
) -> Result<()> {
    let slug = required_value(ctx, slug, "Organization slug")?;

    let spinner = ctx.spinner(&format!("Looking up organization '{}'...", slug));
    let result = ctx.api.get_organization_by_slug(&slug).await;
    finish_spinner(spinner);
    let org = result?;

    if !yes {
        let confirmed = ctx.prompter.confirm(&format!(
            "Are you sure you want to delete the {} organization?",
            slug
        ))?;
        if !confirmed {
            info!("Deletion of organization '{}' cancelled", slug);
            if !ctx.structured() {
                writeln!(ctx.out, "Cancelled")?;
            }
            return Ok(());
        }
    }

    let spinner = ctx.spinner(&format!("Deleting organization '{}'...", slug));
    let result = ctx.api.delete_organization(&org.id).await;
    finish_spinner(spinner);
    let payload = result?;

    info!(
        "Deleted organization '{}' ({})",
        slug, payload.deleted_organization_id
    );
    output_deleted_organization(ctx.out, ctx.output, &slug, &payload)
}

/// Invite a user to an organization (not implemented)
pub fn run_orgs_invite(_args: &MemberArgs) -> Result<()> {
    Err(FlyError::NotImplemented("invite"))
}

/// Revoke an invitation (not implemented)
pub fn run_orgs_revoke(_args: &MemberArgs) -> Result<()> {
    Err(FlyError::NotImplemented("revoke"))
}

/// Remove a member from an organization (not implemented)
pub fn run_orgs_remove(_args: &MemberArgs) -> Result<()> {
    Err(FlyError::NotImplemented("remove"))
}
