use catalog::{CatalogQuery, ContentFilter, SortOption, builtin_items};
use engine::{Session, StratumOptions};
use model::StratumTab;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "demo" => cmd_demo(),
        "catalog" => cmd_catalog(args),
        _ => Err(usage()),
    }
}

fn usage() -> String {
    [
        "usage:",
        "  stratum demo",
        "  stratum catalog [--search S] [--content map|graphs|index]",
        "                  [--sort newest|alphabetical|relevance]",
        "                  [--institution I ...] [--tag T ...]",
    ]
    .join("\n")
}

/// Seeds a session and runs a scripted gesture sequence, printing the
/// resulting workspace snapshot and its derived arrangement as JSON.
fn cmd_demo() -> Result<(), String> {
    let mut session = Session::seeded();
    let items = builtin_items();

    let urban = items
        .iter()
        .find(|i| i.title == "Urban Development Trends")
        .ok_or_else(|| "builtin catalog is missing the demo item".to_string())?;
    surface::add_from_catalog(&mut session, urban);
    session.add_stratum(StratumOptions::default());

    session.toggle_location_lock();
    let second = session.workspace().strata()[1].id;
    session.search_location("Lisbon", second);
    surface::pan(&mut session, second, 25.0, -10.0);

    let first = session.workspace().strata()[0].id;
    surface::focus(&mut session, first);
    surface::focus(&mut session, first);

    for event in session.drain_events() {
        info!(seq = event.seq, kind = event.kind, "{}", event.message);
    }

    let snapshot = serde_json::to_string_pretty(session.workspace())
        .map_err(|e| format!("serialize workspace: {e}"))?;
    println!("{snapshot}");

    let arrangement = layout::arrangement(session.workspace());
    let arrangement = serde_json::to_string_pretty(&arrangement)
        .map_err(|e| format!("serialize arrangement: {e}"))?;
    println!("{arrangement}");

    Ok(())
}

fn cmd_catalog(args: Vec<String>) -> Result<(), String> {
    let mut query = CatalogQuery::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--search" => query.search = take_value(&args, &mut i)?,
            "--content" => {
                query.content = match take_value(&args, &mut i)?.as_str() {
                    "map" => ContentFilter::Only(StratumTab::Map),
                    "graphs" => ContentFilter::Only(StratumTab::Graphs),
                    "index" => ContentFilter::Only(StratumTab::Index),
                    other => return Err(format!("unknown content kind: {other}")),
                }
            }
            "--sort" => {
                query.sort = match take_value(&args, &mut i)?.as_str() {
                    "newest" => SortOption::Newest,
                    "alphabetical" => SortOption::Alphabetical,
                    "relevance" => SortOption::Relevance,
                    other => return Err(format!("unknown sort option: {other}")),
                }
            }
            "--institution" => {
                query.institutions.insert(take_value(&args, &mut i)?);
            }
            "--tag" => {
                query.tags.insert(take_value(&args, &mut i)?);
            }
            s => return Err(format!("unknown arg: {s}\n\n{}", usage())),
        }
        i += 1;
    }

    let items = builtin_items();
    let results = catalog::run(&items, &query);
    info!(total = items.len(), matched = results.len(), "catalog query");

    let json =
        serde_json::to_string_pretty(&results).map_err(|e| format!("serialize results: {e}"))?;
    println!("{json}");
    Ok(())
}

fn take_value(args: &[String], i: &mut usize) -> Result<String, String> {
    let flag = args[*i].clone();
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}
