use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use tarot_stem::api::{CardSource, StaticSource, TarotApiClient};
use tarot_stem::app::{App, Flow};
use tarot_stem::core::{logging, ApiConfig, AppConfig, DeckRng, TarotError, DEFAULT_BASE_URL};
use tarot_stem::reading::{Position, ReadingSession};
use tarot_stem::store::{CardDetail, CardStore};
use tarot_stem::views::{CardDetailView, CardGridView, ErrorBanner, ReadingView};

#[derive(Parser)]
#[command(name = "tarot-stem", version)]
#[command(about = "Major arcana paired with pioneers of science, and three-card readings")]
struct Cli {
    /// Base URL of the card API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP timeout in seconds (0 disables it)
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    /// Seed for shuffling, to repeat a reading
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Read cards from a JSON file instead of the API
    #[arg(long, global = true)]
    cards_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print every card
    List,
    /// Print one card in full
    Show { id: String },
    /// Draw a random three-card reading
    Reading,
    /// Interactive shell (default)
    Shell,
}

impl Cli {
    fn config(&self) -> AppConfig {
        let api = ApiConfig::default()
            .with_base_url(&self.base_url)
            .with_timeout_secs(self.timeout_secs);
        let config = AppConfig::default().with_api(api);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn source(&self, config: &AppConfig) -> Result<Box<dyn CardSource>, TarotError> {
        match &self.cards_file {
            Some(path) => {
                info!(path = %path.display(), "using local cards file");
                Ok(Box::new(StaticSource::from_file(path)?))
            }
            None => Ok(Box::new(TarotApiClient::new(config.api.clone())?)),
        }
    }
}

fn list(source: Box<dyn CardSource>, config: &AppConfig) -> ExitCode {
    let mut store = CardStore::new(source, DeckRng::from_seed_or_entropy(config.seed));
    store.mount();
    if let Some(message) = store.error() {
        eprintln!("{}", ErrorBanner::new(message).render());
        return ExitCode::FAILURE;
    }
    println!("{}", CardGridView::new(store.cards()).columns(4).render());
    ExitCode::SUCCESS
}

fn show(source: &dyn CardSource, id: &str) -> ExitCode {
    let detail = CardDetail::load(source, Some(id));
    match (detail.card(), detail.error()) {
        (Some(card), _) => {
            println!("{}", CardDetailView::new(card).render());
            ExitCode::SUCCESS
        }
        (None, message) => {
            eprintln!("{}", ErrorBanner::new(message.unwrap_or_default()).render());
            ExitCode::FAILURE
        }
    }
}

fn reading(source: Box<dyn CardSource>, config: &AppConfig) -> ExitCode {
    let mut store = CardStore::new(source, DeckRng::from_seed_or_entropy(config.seed));
    store.mount();
    if let Some(message) = store.error() {
        eprintln!("{}", ErrorBanner::new(message).render());
        return ExitCode::FAILURE;
    }
    if store.len() < Position::ALL.len() {
        eprintln!("A reading needs at least {} cards.", Position::ALL.len());
        return ExitCode::FAILURE;
    }

    let deck = store.shuffled_copy();
    let mut rng = store.rng_mut().fork();
    let mut session = ReadingSession::new(deck, rng.fork());
    session.start();
    session.deal();
    while !session.state().is_complete() {
        let pool = session.state().available_len().min(config.spread_limit);
        session.select_at(rng.gen_range_usize(0..pool));
    }

    println!("{}", ReadingView::new(session.phase(), session.state()).render());
    ExitCode::SUCCESS
}

fn shell(source: Box<dyn CardSource>, config: AppConfig) -> ExitCode {
    let mut app = App::new(source, config);
    app.execute(tarot_stem::app::Command::Home);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{}\n", app.render());
        print!("> ");
        if stdout.flush().is_err() {
            return ExitCode::FAILURE;
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                error!(error = %err, "reading input failed");
                return ExitCode::FAILURE;
            }
            None => return ExitCode::SUCCESS,
        };
        if app.run_line(&line) == Flow::Quit {
            return ExitCode::SUCCESS;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config();
    let source = match cli.source(&config) {
        Ok(source) => source,
        Err(err) => {
            error!(error = %err, "could not set up the card source");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match cli.cmd {
        Some(Cmd::List) => list(source, &config),
        Some(Cmd::Show { id }) => show(source.as_ref(), &id),
        Some(Cmd::Reading) => reading(source, &config),
        Some(Cmd::Shell) | None => shell(source, config),
    }
}
