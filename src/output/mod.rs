//! Output formatting module
//!
//! Handles the output formats: table, JSON, YAML

mod common;
mod organizations;

pub use common::{write_json, write_structured, write_yaml};
pub use organizations::{
    listed_organizations, output_deleted_organization, output_organization,
    output_organization_detail, output_organization_list,
};
