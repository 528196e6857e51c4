//! `routes` and `views`: the routing table and the view registry.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table};
use grandtour_core::nav::{Role, RoleGroup, ViewId, registry, router};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RouteRow {
    role: Role,
    display_name: &'static str,
    group: RoleGroup,
    home_view: ViewId,
    selectable: bool,
}

fn route_rows() -> Vec<RouteRow> {
    Role::all()
        .iter()
        .map(|role| RouteRow {
            role: *role,
            display_name: role.display_name(),
            group: role.group(),
            home_view: router::home_view(*role),
            selectable: role.is_selectable(),
        })
        .collect()
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

pub fn routes(json: bool) -> Result<()> {
    let rows = route_rows();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("serialize routes")?
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["Role", "Name", "Group", "Home view", "In login form"]);
    for row in &rows {
        table.add_row([
            row.role.as_str(),
            row.display_name,
            row.group.display_name(),
            row.home_view.as_str(),
            yes_no(row.selectable),
        ]);
    }
    println!("{table}");
    println!("Any other role string lands on `{}`.", ViewId::UnrecognizedRole);
    Ok(())
}

pub fn views(json: bool) -> Result<()> {
    if json {
        let descriptors: Vec<_> = registry::all().collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&descriptors).context("serialize views")?
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["View", "Title", "Renderer", "Props", "Signed-in only"]);
    for descriptor in registry::all() {
        let props = descriptor
            .props
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row([
            descriptor.view.as_str().to_string(),
            descriptor.title.to_string(),
            descriptor.collaborator.name().to_string(),
            props,
            yes_no(descriptor.requires_session).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
