use photosift::adapters::{Catalog, CatalogClassifier, CatalogProvider, ChannelNavigator, ConsoleSurface};
use photosift::cli::{info_text, parse_args, CliCommand, RunOptions, USAGE};
use photosift::config::AppConfig;
use photosift::format::format_count;
use photosift::screens::{ClassificationScreen, GridViewState, PhotoGridScreen};
use photosift::view_model::{ClassificationViewModel, SearchViewModel};

use color_eyre::eyre::{eyre, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const NAV_SETTLE: Duration = Duration::from_millis(250);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, USAGE);
            std::process::exit(2);
        }
    };

    if let Some(text) = info_text(&command) {
        println!("{}", text);
        return Ok(());
    }

    match command {
        CliCommand::Run(options) => run(options).await,
        _ => Ok(()),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("photosift=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(options: RunOptions) -> Result<()> {
    let mut config = AppConfig::load(options.config.as_deref())?;
    if let Some(path) = options.catalog {
        config = config.with_catalog_path(path);
    }
    config.validate()?;

    let catalog_path = config
        .catalog_path
        .clone()
        .ok_or_else(|| eyre!("no catalog given; pass --catalog or set PHOTOSIFT_CATALOG"))?;
    let catalog = Arc::new(Catalog::load(&catalog_path)?);
    info!(photos = catalog.len(), path = %catalog_path.display(), "catalog loaded");

    let provider = Arc::new(CatalogProvider::new(catalog.clone(), config.page_size));
    let search = Arc::new(SearchViewModel::new(provider, config.fallback_title.clone()));
    let (navigator, mut selections) = ChannelNavigator::new();

    let mut grid = PhotoGridScreen::new(search.clone(), Arc::new(navigator));
    grid.appear();
    grid.set_search_active(true);

    search.search_for(&options.query, options.page).await?;
    for _ in 0..options.next {
        if !grid.next_page().await? {
            break;
        }
    }

    let state = grid.settled(NAV_SETTLE).await?;
    print_grid(&state);

    let Some(index) = options.select else {
        return Ok(());
    };

    grid.select(index)?;
    let photo = selections
        .recv()
        .await
        .ok_or_else(|| eyre!("selection was not delivered"))?;
    grid.cancel_search();
    grid.disappear();

    let classification = Arc::new(ClassificationViewModel::new(
        photo,
        CatalogClassifier::all(&catalog),
        config.result_filter(),
    ));
    match classification.classify().await {
        Ok(models) => info!(models, "classification finished"),
        Err(err) => warn!(error = %err, "classification failed"),
    }

    println!();
    let mut screen = ClassificationScreen::new(classification, Arc::new(ConsoleSurface::stdout()));
    screen.appear();
    screen.wait_for_renders(1).await?;
    screen.disappear();

    Ok(())
}

fn print_grid(state: &GridViewState) {
    println!(
        "{}  ({} results)",
        state.nav.title_text,
        format_count(state.total_results)
    );
    for (index, photo) in state.photos.iter().enumerate() {
        println!("{:>4}  {}", index, photo.id);
    }

    let mut hints = Vec::new();
    if state.nav.show_prev_page {
        hints.push("previous page available");
    }
    if state.nav.show_next_page {
        hints.push("next page available");
    }
    if !hints.is_empty() {
        println!("({})", hints.join(", "));
    }
}
