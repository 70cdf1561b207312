use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cover_modal::models::category::TO_BE_BUDGETED_NAME;
use cover_modal::models::CategoryId;
use cover_modal::store::{CategoryQuery, InMemoryCategories};
use cover_modal::tui::dialogs::cover::CoverProps;
use cover_modal::tui::run_demo;

#[derive(Parser)]
#[command(
    name = "cover-demo",
    version,
    about = "Cover-overspending dialog demo",
    long_about = "Opens the cover dialog over a sample budget (or category \
                  groups loaded from a JSON file) and prints the source \
                  category the user picked."
)]
struct Cli {
    /// Budget month the cover applies to (opaque token, e.g. 2024-05)
    #[arg(short, long, default_value = "2024-05")]
    month: String,

    /// Dialog title
    #[arg(short, long, default_value = "Cover Overspending")]
    title: String,

    /// ID of the category being covered, excluded from the selectable set
    #[arg(short, long)]
    exclude: Option<CategoryId>,

    /// Hide the synthetic "To Be Budgeted" entry
    #[arg(long)]
    no_to_be_budgeted: bool,

    /// Load category groups from a JSON file instead of the built-in sample
    #[arg(short, long)]
    categories: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Log to stderr so the alternate screen stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = match &cli.categories {
        Some(path) => InMemoryCategories::load(path)?,
        None => InMemoryCategories::sample(),
    };

    let chosen: Rc<RefCell<Option<CategoryId>>> = Rc::new(RefCell::new(None));
    let recorder = Rc::clone(&chosen);

    let mut props = CoverProps::new(cli.title, cli.month)
        .show_to_be_budgeted(!cli.no_to_be_budgeted)
        .on_submit(move |id| {
            *recorder.borrow_mut() = Some(id);
        });
    if let Some(id) = cli.exclude {
        props = props.exclude(id);
    }

    run_demo(&store, props)?;

    match *chosen.borrow() {
        Some(id) => {
            let name = if id.is_to_be_budgeted() {
                TO_BE_BUDGETED_NAME.to_string()
            } else {
                store
                    .grouped()?
                    .iter()
                    .flat_map(|g| g.categories.iter())
                    .find(|c| c.id == id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| "Unknown".into())
            };
            println!("Cover from: {name} ({})", id.as_uuid());
        }
        None => println!("No category chosen."),
    }

    Ok(())
}
