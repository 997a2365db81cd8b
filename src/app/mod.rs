//! The interactive application: pages, navigation and commands.
//!
//! ## Key Types
//!
//! - `App`: owns the deck store, the current route and the reading session
//! - `Command`: one parsed line of user input
//! - `Flow`: whether the shell keeps running after a command
//!
//! Card clicks travel through the same views that draw the cards, so a
//! number typed by the user always refers to the card printed with it.

pub mod command;

use std::cell::RefCell;

use rustc_hash::FxHashSet;
use tracing::{debug, info};

pub use command::{Command, CommandError};

use crate::api::CardSource;
use crate::cards::{CardId, TarotCard};
use crate::core::config::AppConfig;
use crate::core::rng::DeckRng;
use crate::reading::{ReadingPhase, ReadingSession, SelectOutcome};
use crate::router::Route;
use crate::store::{CardDetail, CardStore};
use crate::views::{CardDetailView, CardGridView, CardSize, ErrorBanner, Layout, ReadingView};

const RETRY_HINT: &str = "Type `refresh` to try again.";

/// What the shell should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Application state behind the shell.
pub struct App<S> {
    config: AppConfig,
    store: CardStore<S>,
    route: Route,
    history: Vec<Route>,
    detail: Option<CardDetail>,
    session: Option<ReadingSession>,
    flipped: FxHashSet<CardId>,
    notice: Option<String>,
}

impl<S: CardSource> App<S> {
    /// Create the app on the home route. Nothing is fetched yet.
    #[must_use]
    pub fn new(source: S, config: AppConfig) -> Self {
        let rng = DeckRng::from_seed_or_entropy(config.seed);
        info!(seed = rng.seed(), "app created");
        Self {
            config,
            store: CardStore::new(source, rng),
            route: Route::Home,
            history: Vec::new(),
            detail: None,
            session: None,
            flipped: FxHashSet::default(),
            notice: None,
        }
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn store(&self) -> &CardStore<S> {
        &self.store
    }

    /// The reading session, once the reading page has been visited with
    /// cards loaded.
    #[must_use]
    pub fn session(&self) -> Option<&ReadingSession> {
        self.session.as_ref()
    }

    /// The loaded detail page, while on a card route.
    #[must_use]
    pub fn detail(&self) -> Option<&CardDetail> {
        self.detail.as_ref()
    }

    /// Ids turned to their scientist face on the home grid.
    #[must_use]
    pub fn flipped(&self) -> &FxHashSet<CardId> {
        &self.flipped
    }

    /// Feedback from the last command.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Go to a route and load what it needs.
    pub fn navigate(&mut self, route: Route) {
        if route != self.route {
            self.history.push(std::mem::replace(&mut self.route, route));
        }
        self.enter_route();
    }

    /// Go to a path. Unknown paths leave the route unchanged.
    pub fn open(&mut self, path: &str) -> bool {
        match Route::parse(path) {
            Some(route) => {
                self.navigate(route);
                true
            }
            None => {
                self.notice = Some(format!("There is no page at `{path}`."));
                false
            }
        }
    }

    fn enter_route(&mut self) {
        debug!(route = %self.route, "entering route");
        self.detail = None;
        match self.route.clone() {
            Route::Home => self.store.mount(),
            Route::CardDetail { id } => {
                let id = id.as_ref().map(CardId::as_str);
                self.detail = Some(CardDetail::load(self.store.source(), id));
            }
            Route::Reading => {
                self.store.mount();
                self.ensure_session();
            }
        }
    }

    fn ensure_session(&mut self) {
        if self.session.is_none() && self.store.has_cards() {
            let deck = self.store.shuffled_copy();
            let rng = self.store.rng_mut().fork();
            self.session = Some(ReadingSession::new(deck, rng));
        }
    }

    /// Parse and run one line of input. Parse errors become the notice.
    pub fn run_line(&mut self, line: &str) -> Flow {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(CommandError::Empty) => Flow::Continue,
            Err(err) => {
                self.notice = Some(err.to_string());
                Flow::Continue
            }
        }
    }

    /// Apply a command.
    pub fn execute(&mut self, command: Command) -> Flow {
        debug!(?command, "executing");
        self.notice = None;
        match command {
            Command::Home => self.navigate(Route::Home),
            Command::Open(path) => {
                self.open(&path);
            }
            Command::Card(id) => self.navigate(Route::card(id)),
            Command::Reading => self.navigate(Route::Reading),
            Command::Read => self.read_current(),
            Command::Start => self.start_reading(),
            Command::Pick(n) => self.pick(n),
            Command::Undo => self.undo(),
            Command::Shuffle => self.shuffle(),
            Command::Reset => self.reset_reading(),
            Command::Flip(n) => self.flip(n),
            Command::View(n) => self.view(n),
            Command::Back => self.back(),
            Command::Refresh => self.refresh(),
            Command::Help => self.notice = Some(Command::help_text()),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn back(&mut self) {
        match self.history.pop() {
            Some(previous) => {
                self.route = previous;
                self.enter_route();
            }
            None => self.notice = Some("Nowhere to go back to.".to_string()),
        }
    }

    fn refresh(&mut self) {
        self.store.refresh_cards();
        self.flipped.retain(|id| self.store.find_by_id(id.as_str()).is_some());
        if self.store.has_cards() {
            if self.session.is_some() {
                let deck = self.store.shuffled_copy();
                if let Some(session) = self.session.as_mut() {
                    session.replace_deck(deck);
                }
            } else if self.route == Route::Reading {
                self.ensure_session();
            }
            self.notice = Some(format!("{} cards loaded.", self.store.len()));
        }
    }

    fn home_grid(&self) -> CardGridView<'_> {
        CardGridView::new(self.store.cards())
            .flipped(&self.flipped)
            .size(CardSize::Medium)
            .loading(self.store.is_loading())
            .skeleton_count(self.config.skeleton_cards)
            .title("Explore the Cards of Knowledge")
            .subtitle("Type `view <n>` to read about a card or `flip <n>` to meet its scientist.")
            .empty_message("The cards are consulting the muses.")
    }

    /// Card under a number on the home grid, found by clicking it.
    fn click_home_card(&self, n: usize) -> Option<CardId> {
        let clicked = RefCell::new(None);
        let handler = |card: &TarotCard| *clicked.borrow_mut() = Some(card.id.clone());
        self.home_grid().on_card_click(&handler).click(n.checked_sub(1).unwrap_or(usize::MAX));
        clicked.take()
    }

    fn flip(&mut self, n: usize) {
        if self.route != Route::Home {
            self.notice = Some("Cards can be flipped on the home page.".to_string());
            return;
        }
        match self.click_home_card(n) {
            Some(id) => {
                if !self.flipped.remove(&id) {
                    self.flipped.insert(id);
                }
            }
            None => self.notice = Some(format!("There is no card {n}.")),
        }
    }

    fn view(&mut self, n: usize) {
        if self.route != Route::Home {
            self.notice = Some("Cards can be opened from the home page.".to_string());
            return;
        }
        match self.click_home_card(n) {
            Some(id) => self.navigate(Route::card(id)),
            None => self.notice = Some(format!("There is no card {n}.")),
        }
    }

    fn read_current(&mut self) {
        let Some(card) = self.detail.as_ref().and_then(CardDetail::card).cloned() else {
            self.notice = Some("Open a card first, then type `read`.".to_string());
            return;
        };
        self.navigate(Route::Reading);
        let Some(session) = self.session.as_mut() else {
            self.notice = Some("There are no cards to read.".to_string());
            return;
        };
        session.reset();
        let outcome = session.preselect(&card);
        self.notice = Some(describe(outcome, &card));
    }

    fn start_reading(&mut self) {
        if self.route != Route::Reading {
            self.navigate(Route::Reading);
        }
        let Some(session) = self.session.as_mut() else {
            self.notice = Some("There are no cards to read.".to_string());
            return;
        };
        if session.start() {
            session.deal();
        } else {
            self.notice = Some("A reading is already under way. Type `reset` to begin again.".to_string());
        }
    }

    fn reading_session(&mut self) -> Option<&mut ReadingSession> {
        if self.route != Route::Reading {
            self.notice = Some("Go to the reading page first with `reading`.".to_string());
            return None;
        }
        if self.session.is_none() {
            self.notice = Some("There are no cards to read.".to_string());
        }
        self.session.as_mut()
    }

    fn pick(&mut self, n: usize) {
        let spread_limit = self.config.spread_limit;
        let Some(session) = self.reading_session() else {
            return;
        };

        let clicked = RefCell::new(None);
        let handler = |card: &TarotCard| *clicked.borrow_mut() = Some(card.clone());
        ReadingView::new(session.phase(), session.state())
            .spread_limit(spread_limit)
            .on_card_click(&handler)
            .spread()
            .click(n.checked_sub(1).unwrap_or(usize::MAX));

        let notice = match clicked.take() {
            Some(card) => {
                let outcome = session.select_by_id(card.id.as_str());
                describe(outcome, &card)
            }
            None => match session.phase() {
                ReadingPhase::Selecting => format!("There is no card {n} in the spread."),
                ReadingPhase::Complete => describe_without_card(SelectOutcome::NoPositionLeft),
                ReadingPhase::Intro | ReadingPhase::Dealing => {
                    describe_without_card(SelectOutcome::OutOfPhase)
                }
            },
        };
        self.notice = Some(notice);
    }

    fn undo(&mut self) {
        let Some(session) = self.reading_session() else {
            return;
        };
        let notice = match session.undo() {
            Some(undone) => format!(
                "{} leaves the {} position.",
                undone.card.arcane_name,
                undone.position.label()
            ),
            None => "Nothing to undo.".to_string(),
        };
        self.notice = Some(notice);
    }

    fn shuffle(&mut self) {
        match self.route {
            Route::Home => {
                self.store.shuffle_for_reading();
            }
            _ => {
                let Some(session) = self.reading_session() else {
                    return;
                };
                if !session.shuffle() {
                    self.notice = Some("The spread can be shuffled while choosing cards.".to_string());
                }
            }
        }
    }

    fn reset_reading(&mut self) {
        if let Some(session) = self.reading_session() {
            session.reset();
            self.notice = Some("The reading was reset.".to_string());
        }
    }

    fn home_page(&self) -> String {
        let mut out = vec![
            "✦ Tarot STEM ✦".to_string(),
            "Connect with the wisdom of the pioneers of science".to_string(),
        ];
        if self.store.has_cards() {
            out.push(format!("{} cards available · ∞ possibilities", self.store.len()));
        }
        out.push(String::new());
        out.push("The Contemporary Goddesses".to_string());
        out.push("Every card pairs a traditional major arcana with a woman who changed science.".to_string());
        out.push(String::new());

        match self.store.error() {
            Some(error) => out.push(ErrorBanner::new(error).retry_hint(RETRY_HINT).render()),
            None => out.push(self.home_grid().render()),
        }
        out.join("\n")
    }

    fn detail_page(&self) -> String {
        match &self.detail {
            Some(detail) => match (detail.card(), detail.error()) {
                (Some(card), _) => format!(
                    "{}\n\nType `read` to start a reading with this card or `back` to return.",
                    CardDetailView::new(card).render()
                ),
                (None, error) => ErrorBanner::new(error.unwrap_or("Could not load the requested card."))
                    .retry_hint("Type `home` to return to the cards.")
                    .render(),
            },
            None => String::new(),
        }
    }

    fn reading_page(&self) -> String {
        if let Some(error) = self.store.error() {
            return ErrorBanner::new(error).retry_hint(RETRY_HINT).render();
        }
        match &self.session {
            Some(session) => ReadingView::new(session.phase(), session.state())
                .spread_limit(self.config.spread_limit)
                .render(),
            None => "There are no cards available for a reading.".to_string(),
        }
    }

    /// The current page inside the layout, followed by any notice.
    #[must_use]
    pub fn render(&self) -> String {
        let content = match self.route {
            Route::Home => self.home_page(),
            Route::CardDetail { .. } => self.detail_page(),
            Route::Reading => self.reading_page(),
        };
        let page = Layout::render(&self.route, &content);
        match &self.notice {
            Some(notice) => format!("{page}\n\n{notice}"),
            None => page,
        }
    }
}

fn describe(outcome: SelectOutcome, card: &TarotCard) -> String {
    match outcome {
        SelectOutcome::Assigned(position) => {
            format!("{} takes the {} position.", card.arcane_name, position.label())
        }
        SelectOutcome::AlreadySelected => format!("{} is already in the reading.", card.arcane_name),
        other => describe_without_card(other),
    }
}

fn describe_without_card(outcome: SelectOutcome) -> String {
    match outcome {
        SelectOutcome::NoPositionLeft => "All three positions are filled.".to_string(),
        SelectOutcome::OutOfPhase => "Type `start` to lay out the cards first.".to_string(),
        SelectOutcome::NotAvailable => "That card is not in the spread.".to_string(),
        SelectOutcome::Assigned(position) => format!("A card takes the {} position.", position.label()),
        SelectOutcome::AlreadySelected => "That card is already in the reading.".to_string(),
    }
}
