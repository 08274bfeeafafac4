use anyhow::{Context, Result, anyhow};
use catalog::LoadPhase;
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::filters::ShowingAtFilter;
use shell::{AppEvent, AppRuntime, CinemaApp, EventKind, MovieCard, ShellConfig, SlideView};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Cinema - browse a movie feed from the terminal
#[derive(Parser)]
#[command(name = "cinema")]
#[command(about = "Browse a cinema movie feed: search, screenings and top-rated carousel", long_about = None)]
struct Cli {
    /// URL of the movie feed [default: http://localhost:3000/movies.json]
    #[arg(long, env = "CINEMA_FEED_URL")]
    feed_url: Option<String>,

    /// Read the feed from a local JSON file instead (wins over --feed-url)
    #[arg(long, env = "CINEMA_FEED_FILE")]
    feed_file: Option<PathBuf>,

    /// Carousel rotation period in milliseconds
    #[arg(long, default_value = "4000")]
    interval_ms: u64,

    /// Number of movies in the carousel
    #[arg(long, default_value = "5")]
    top: usize,

    /// Slides visible side by side
    #[arg(long, default_value = "3")]
    visible: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog, optionally filtered by a search query
    List {
        /// Case-insensitive text matched against titles, genres, ratings and screenings
        #[arg(short, long)]
        query: Option<String>,

        /// Only movies whose origin cinemas include this one
        #[arg(long)]
        at: Option<String>,

        /// Print the cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the top-rated carousel
    Top {
        /// Print the slides as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one movie with its screenings expanded
    Show {
        /// Exact movie title
        #[arg(long)]
        title: String,
    },

    /// Run the carousel and print each slide as it rotates
    Watch {
        /// Stop after this many rotations
        #[arg(long, default_value = "10")]
        ticks: usize,
    },
}

impl Cli {
    fn shell_config(&self) -> ShellConfig {
        let mut config = ShellConfig::default()
            .with_rotation_interval(Duration::from_millis(self.interval_ms))
            .with_top_n(self.top)
            .with_visible_slides(self.visible);

        if let Some(url) = &self.feed_url {
            config = config.with_feed_url(url.clone());
        }
        if let Some(path) = &self.feed_file {
            config = config.with_feed_file(path.clone());
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.shell_config();

    eprintln!("Loading movies from {}...", config.feed);
    let start = Instant::now();
    let mut runtime = AppRuntime::mount(config).context("Failed to start the cinema shell")?;

    match runtime.wait_until_loaded().await {
        LoadPhase::Ready => eprintln!(
            "{} Loaded {} movies in {:?}",
            "✓".green(),
            runtime.app().store().len(),
            start.elapsed()
        ),
        _ => {
            if let Some(err) = runtime.app().store().last_error() {
                eprintln!("{} {}", "✗".red(), err);
            }
        }
    }

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List { query, at, json } => handle_list(runtime, query, at, json)?,
        Commands::Top { json } => handle_top(runtime.unmount(), json)?,
        Commands::Show { title } => handle_show(runtime, title)?,
        Commands::Watch { ticks } => handle_watch(runtime, ticks).await,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(
    mut runtime: AppRuntime,
    query: Option<String>,
    at: Option<String>,
    json: bool,
) -> Result<()> {
    if let Some(query) = query {
        runtime.dispatch(AppEvent::QueryChanged(query));
        runtime.drain();
    }
    let mut app = runtime.unmount();
    if let Some(cinema) = at {
        app = app.with_filter(ShowingAtFilter::new(cinema));
    }
    let cards = app.cards();

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if let Some(notice) = app.notice() {
        println!("{}", notice.message().yellow());
        return Ok(());
    }

    println!("{}", format!("{} movies:", cards.len()).bold().blue());
    for card in &cards {
        print_card(card);
    }
    Ok(())
}

/// Handle the 'top' command
fn handle_top(app: CinemaApp, json: bool) -> Result<()> {
    let view = app.carousel_view();
    let slides: Vec<&SlideView> = view.slides.iter().filter(|s| !s.is_wrap_copy).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&slides)?);
        return Ok(());
    }

    if slides.is_empty() {
        println!("{}", app.notice().map_or("Nothing to rank", |n| n.message()).yellow());
        return Ok(());
    }

    println!("{}", "Top rated:".bold().blue());
    for slide in slides {
        print_slide(slide);
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(mut runtime: AppRuntime, title: String) -> Result<()> {
    let has_screenings = runtime
        .app()
        .card(&title)
        .ok_or_else(|| anyhow!("No movie titled '{}'", title))?
        .toggle
        .is_some();

    if has_screenings {
        runtime.dispatch(AppEvent::ToggleScreenings(title.clone()));
        runtime.drain();
    }

    let app = runtime.unmount();
    let card = app
        .card(&title)
        .ok_or_else(|| anyhow!("No movie titled '{}'", title))?;
    print_card(&card);
    Ok(())
}

/// Handle the 'watch' command
async fn handle_watch(mut runtime: AppRuntime, ticks: usize) {
    if runtime.app().carousel().ranked().is_empty() {
        println!("{}", "No movies to rotate".yellow());
        return;
    }

    print_current(runtime.app());
    let mut seen = 0;
    while seen < ticks {
        match runtime.step().await {
            Some(EventKind::Tick) => {
                seen += 1;
                print_current(runtime.app());
            }
            Some(_) => {}
            None => break,
        }
    }
    info!("Stopped after {} rotations", seen);
    runtime.unmount();
}

fn print_current(app: &CinemaApp) {
    let view = app.carousel_view();
    if let Some(slide) = view.current() {
        print!("{} ", format!("[{}]", view.transform).dimmed());
        print_slide(slide);
    }
}

fn print_slide(slide: &SlideView) {
    println!(
        "{}. {} - {} | {} | {}",
        (slide.rank + 1).to_string().green(),
        slide.title.bold(),
        slide.rating,
        slide.duration,
        slide.genre
    );
}

fn print_card(card: &MovieCard) {
    println!();
    println!("{} ({})", card.title.bold(), card.total_rating.cyan());
    println!("{}Genre: {}", "• ".green(), card.genre);

    if card.ratings.is_empty() {
        println!("{}{}", "• ".green(), shell::view::NO_RATINGS);
    }
    for line in &card.ratings {
        println!("{}{}: {}", "• ".green(), line.reviewer, line.score);
    }

    if card.cinemas.is_empty() {
        println!("{}{}", "• ".green(), shell::view::NO_CINEMAS);
    } else {
        let names: Vec<&str> = card.cinemas.iter().map(|c| c.name.as_str()).collect();
        println!("{}Showing at: {}", "• ".green(), names.join(", "));
    }

    if let Some(trailer) = &card.trailer {
        println!("{}Trailer: {}", "• ".green(), trailer);
    }

    match (&card.toggle, &card.screenings) {
        (None, _) => println!("{}{}", "• ".green(), shell::view::NO_SCREENINGS),
        (Some(button), None) => println!("{}[{}]", "• ".green(), button.label()),
        (Some(_), Some(rows)) => {
            for row in rows {
                println!("  {}: {}", row.cinema.cyan(), row.times.join(", "));
            }
        }
    }
}
