//! Command-line front end over the configured plan store.

use std::io::Write;

use anyhow::{bail, Context};
use roxplan_designer::{EditorState, JsonFilePlanStore, PlanStore};
use roxplan_settings::Config;

use crate::{BUILD_DATE, VERSION};

pub const USAGE: &str = "\
Usage: roxplan <command> [args]

Commands:
  list              List stored plans
  show <id>         Print a plan's summary, station legend and routes
  new [name]        Create a blank plan
  duplicate <id>    Copy a plan
  delete <id>       Delete a plan
  version           Print version information";

/// Runs one command (`args` excludes the program name), writing its output
/// to `out`.
pub fn run(args: &[String], config: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    let Some(command) = args.first() else {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    };

    if command == "version" {
        writeln!(out, "roxplan {VERSION} (built {BUILD_DATE})")?;
        return Ok(());
    }

    let path = config
        .storage
        .plans_path()
        .context("No data directory available for the plan list")?;
    tracing::debug!("Using plan store at {}", path.display());
    let mut store = JsonFilePlanStore::new(path);

    match (command.as_str(), args.get(1)) {
        ("list", _) => list(&store, out),
        ("show", Some(id)) => show(&store, config, id, out),
        ("new", name) => {
            let record = store.create(name.map(String::as_str).unwrap_or(""))?;
            writeln!(out, "{}\t{}", record.id, record.name)?;
            Ok(())
        }
        ("duplicate", Some(id)) => {
            let copy = store
                .duplicate(id)
                .with_context(|| format!("Failed to duplicate plan {id}"))?;
            writeln!(out, "{}\t{}", copy.id, copy.name)?;
            Ok(())
        }
        ("delete", Some(id)) => {
            store
                .delete(id)
                .with_context(|| format!("Failed to delete plan {id}"))?;
            writeln!(out, "Deleted {id}")?;
            Ok(())
        }
        _ => bail!("Unrecognized command\n\n{USAGE}"),
    }
}

fn list(store: &dyn PlanStore, out: &mut dyn Write) -> anyhow::Result<()> {
    let plans = store.list()?;
    if plans.is_empty() {
        writeln!(out, "No plans")?;
        return Ok(());
    }
    for plan in plans {
        writeln!(
            out,
            "{}\t{}\t{}\t{} stations, {} elements, {} routes\t{}",
            plan.id,
            plan.name,
            plan.event_type,
            plan.station_count,
            plan.element_count,
            plan.route_count,
            plan.updated_at.format("%Y-%m-%d %H:%M")
        )?;
    }
    Ok(())
}

fn show(
    store: &dyn PlanStore,
    config: &Config,
    id: &str,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut editor = EditorState::with_config(config.clone());
    editor
        .open_from_store(store, id)
        .with_context(|| format!("Failed to open plan {id}"))?;

    let meta = editor.meta();
    let canvas = editor.canvas();
    writeln!(out, "{} ({})", meta.name, meta.event_type)?;
    if let Some(description) = &meta.description {
        writeln!(out, "{description}")?;
    }
    writeln!(
        out,
        "Canvas {}x{}, {} elements, {} routes",
        canvas.width,
        canvas.height,
        editor.elements().len(),
        editor.routes().len()
    )?;

    let legend = editor.station_legend();
    if !legend.is_empty() {
        writeln!(out, "\nStations:")?;
        for station in legend {
            let number = station
                .station_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(out, "  {:>3}  {}", number, station.label)?;
        }
    }

    if !editor.routes().is_empty() {
        writeln!(out, "\nRoutes:")?;
        for route in editor.routes() {
            writeln!(
                out,
                "  {:<20} {:>8.1} px, {} points",
                route.label.as_deref().unwrap_or("(unlabelled)"),
                route.length(),
                route.points.len()
            )?;
        }
    }
    Ok(())
}
