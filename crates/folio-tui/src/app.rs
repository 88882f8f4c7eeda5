//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! All page state lives in [`AppState`], which never touches the terminal or
//! the network directly: requests go out through a [`Dispatch`] and side
//! effects such as opening a browser come back as [`Effect`] values for the
//! shell to carry out.

use crate::{
    commands::Command,
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        about::AboutPage,
        article_list::{ArticleList, ListLayout},
        command_bar::{CommandBar, CommandBarState},
        footer::Footer,
        help::HelpPopup,
        pagination_bar::PaginationBar,
        signup_form::{SignupForm, SignupState, FORM_HEIGHT},
        tab_bar::TabBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{
    config::Config, preference::SubscriptionId, Article, Completion, Dispatch, FixedView,
    HomeView, Loader, Resolution, ThemeMode, ThemeStore, View, ViewId,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::{cell::Cell, io, rc::Rc, time::Duration};
use tokio::sync::mpsc::UnboundedReceiver;

// ---------------------------------------------------------------------------
// Page + focus types
// ---------------------------------------------------------------------------

/// One tab of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Blog,
    Projects,
    About,
    Newsletter,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Blog, Page::Projects, Page::About, Page::Newsletter];

    pub fn label(self) -> &'static str {
        match self {
            Page::Blog => "Blog",
            Page::Projects => "Projects",
            Page::About => "About",
            Page::Newsletter => "Newsletter",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Page::Blog => 0,
            Page::Projects => 1,
            Page::About => 2,
            Page::Newsletter => 3,
        }
    }

    /// 1-based number shown in the header and bound to the digit keys.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn from_number(n: usize) -> Option<Page> {
        n.checked_sub(1).and_then(|i| Page::ALL.get(i).copied())
    }

    /// The fetching view behind this page, if any.
    pub fn view(self) -> Option<ViewId> {
        match self {
            Page::Blog => Some(ViewId::Home),
            Page::Projects => Some(ViewId::Projects),
            Page::About => None,
            Page::Newsletter => Some(ViewId::Newsletter),
        }
    }

    fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    fn prev(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Article cards and paging keys.
    Content,
    /// The newsletter email field.
    Email,
    /// Vim-style `:` command line is active.
    Command,
}

/// Work the shell performs on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open an external URL in the system browser.
    OpenUrl(String),
}

/// Selected card index per fetching view.
#[derive(Debug, Default, Clone, Copy)]
struct Selection {
    home: usize,
    projects: usize,
    newsletter: usize,
}

impl Selection {
    fn get(&self, view: ViewId) -> usize {
        match view {
            ViewId::Home => self.home,
            ViewId::Projects => self.projects,
            ViewId::Newsletter => self.newsletter,
        }
    }

    fn get_mut(&mut self, view: ViewId) -> &mut usize {
        match view {
            ViewId::Home => &mut self.home,
            ViewId::Projects => &mut self.projects,
            ViewId::Newsletter => &mut self.newsletter,
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub page: Page,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub home: HomeView,
    pub projects: FixedView,
    pub newsletter: FixedView,
    selection: Selection,
    pub signup: SignupState,
    pub theme_store: Rc<ThemeStore>,
    /// Palette for the current theme mode.
    pub theme: Theme,
    /// Set by the theme store listener, consumed by [`AppState::sync_theme`].
    pending_mode: Rc<Cell<Option<ThemeMode>>>,
    subscription: Option<SubscriptionId>,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme_store: Rc<ThemeStore>) -> Self {
        let pending_mode = Rc::new(Cell::new(None));
        let subscription = {
            let pending = Rc::clone(&pending_mode);
            theme_store.subscribe(move |mode| pending.set(Some(mode)))
        };

        Self {
            page: Page::Blog,
            focus: Focus::Content,
            prev_focus: Focus::Content,
            home: HomeView::from_config(&config.home),
            projects: FixedView::projects_from_config(&config.projects),
            newsletter: FixedView::newsletter_from_config(&config.newsletter),
            selection: Selection::default(),
            signup: SignupState::default(),
            theme: Theme::for_mode(theme_store.get()),
            theme_store,
            pending_mode,
            subscription: Some(subscription),
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        }
    }

    /// Open the blog listing on `page` instead of page 1.
    pub fn starting_at(mut self, page: u32) -> Self {
        self.home = HomeView::from_config(&self.config.home).starting_at(page);
        self
    }

    /// Mount the view behind the current page.
    pub fn start(&mut self, dispatch: &dyn Dispatch) {
        tracing::info!(page = self.page.label(), "app started");
        self.mount_current(dispatch);
    }

    /// Unmount every view and drop the theme subscription. Results still in
    /// flight are ignored from here on.
    pub fn shutdown(&mut self) {
        for id in [ViewId::Home, ViewId::Projects, ViewId::Newsletter] {
            self.view_mut(id).unmount();
        }
        if let Some(id) = self.subscription.take() {
            self.theme_store.unsubscribe(id);
        }
        tracing::debug!("app shut down");
    }

    pub fn view(&self, id: ViewId) -> &dyn View {
        match id {
            ViewId::Home => &self.home,
            ViewId::Projects => &self.projects,
            ViewId::Newsletter => &self.newsletter,
        }
    }

    fn view_mut(&mut self, id: ViewId) -> &mut dyn View {
        match id {
            ViewId::Home => &mut self.home,
            ViewId::Projects => &mut self.projects,
            ViewId::Newsletter => &mut self.newsletter,
        }
    }

    pub fn selected_index(&self, id: ViewId) -> usize {
        self.selection.get(id)
    }

    /// The highlighted article on the current page.
    pub fn selected_article(&self) -> Option<&Article> {
        let id = self.page.view()?;
        self.view(id).state().articles().get(self.selection.get(id))
    }

    /// Feed a finished request to the view that issued it.
    pub fn apply(&mut self, completion: Completion) -> Resolution {
        let id = completion.view;
        let seq = completion.ticket.seq();
        let resolution = self.view_mut(id).apply(completion);
        tracing::debug!(view = %id, seq, ?resolution, "completion routed");
        if resolution == Resolution::Applied {
            *self.selection.get_mut(id) = 0;
        }
        resolution
    }

    /// Swap the palette if the theme store announced a change.
    pub fn sync_theme(&mut self) {
        if let Some(mode) = self.pending_mode.take() {
            tracing::debug!(%mode, "palette switched");
            self.theme = Theme::for_mode(mode);
        }
    }

    fn mount_current(&mut self, dispatch: &dyn Dispatch) {
        if let Some(id) = self.page.view() {
            self.view_mut(id).mount(dispatch);
        }
    }

    fn show_page(&mut self, page: Page, dispatch: &dyn Dispatch) {
        if page != self.page {
            tracing::debug!(from = self.page.label(), to = page.label(), "page switch");
        }
        self.page = page;
        self.focus = Focus::Content;
        self.mount_current(dispatch);
    }

    fn reload(&mut self, dispatch: &dyn Dispatch) {
        if let Some(id) = self.page.view() {
            tracing::debug!(view = %id, "reload");
            self.view_mut(id).remount(dispatch);
        }
    }

    fn move_selection(&mut self, direction: Direction) {
        let Some(id) = self.page.view() else { return };
        let count = self.view(id).state().articles().len();
        let selected = self.selection.get_mut(id);
        match direction {
            Direction::Up => *selected = selected.saturating_sub(1),
            Direction::Down if *selected + 1 < count => *selected += 1,
            _ => {}
        }
    }

    fn open_selected(&self) -> Option<Effect> {
        let article = self.selected_article()?;
        if article.url().is_empty() {
            tracing::debug!(id = %article.id(), "selected article has no url");
            return None;
        }
        Some(Effect::OpenUrl(article.url().to_string()))
    }

    /// Apply one event. Returns an [`Effect`] when the shell has work to do.
    pub fn handle(&mut self, event: AppEvent, dispatch: &dyn Dispatch) -> Option<Effect> {
        let effect = self.handle_event(event, dispatch);
        self.sync_theme();
        effect
    }

    fn handle_event(&mut self, event: AppEvent, dispatch: &dyn Dispatch) -> Option<Effect> {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(event, AppEvent::Help | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return None;
        }

        // Command mode intercepts all events.
        if self.focus == Focus::Command {
            match event {
                AppEvent::Quit => self.quit = true,
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    self.command_bar.clear();
                    self.focus = self.prev_focus;
                }
                AppEvent::Enter => {
                    let input = self.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            self.command_bar.clear();
                            self.focus = self.prev_focus;
                            return self.execute_command(cmd, dispatch);
                        }
                        Err(msg) if msg.is_empty() => {
                            self.command_bar.clear();
                            self.focus = self.prev_focus;
                        }
                        Err(msg) => {
                            self.command_bar.error = Some(msg);
                        }
                    }
                }
                other => self.command_bar.handle(&other),
            }
            return None;
        }

        // The email field takes every printable key.
        if self.focus == Focus::Email {
            match event {
                AppEvent::Quit => self.quit = true,
                AppEvent::Escape => {
                    tracing::debug!("focus: Email -> Content");
                    self.focus = Focus::Content;
                }
                AppEvent::NextTab => self.show_page(self.page.next(), dispatch),
                other => self.signup.handle(&other),
            }
            return None;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::Help => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::CommandMode => {
                tracing::debug!(prev_focus = ?self.focus, "entering command mode");
                self.prev_focus = self.focus;
                self.command_bar.clear();
                self.focus = Focus::Command;
            }

            AppEvent::NextTab => self.show_page(self.page.next(), dispatch),
            AppEvent::PrevTab => self.show_page(self.page.prev(), dispatch),
            AppEvent::GoTab(n) => {
                if let Some(page) = Page::from_number(n) {
                    self.show_page(page, dispatch);
                }
            }

            AppEvent::ToggleTheme => {
                self.theme_store.toggle();
            }

            AppEvent::PreviousPage if self.page == Page::Blog => {
                self.home.previous(dispatch);
            }
            AppEvent::NextPage if self.page == Page::Blog => {
                self.home.next(dispatch);
            }
            AppEvent::LastPage if self.page == Page::Blog => {
                self.home.jump_to_last(dispatch);
            }

            AppEvent::Nav(direction) => self.move_selection(direction),
            AppEvent::Open | AppEvent::Enter => return self.open_selected(),
            AppEvent::Reload => self.reload(dispatch),

            AppEvent::InputFocus if self.page == Page::Newsletter => {
                tracing::debug!("focus -> Email");
                self.focus = Focus::Email;
            }

            // Terminal resize is handled automatically by ratatui
            _ => {}
        }
        None
    }

    /// Execute a parsed [`Command`] against the application state.
    fn execute_command(&mut self, cmd: Command, dispatch: &dyn Dispatch) -> Option<Effect> {
        match cmd {
            Command::Quit => self.quit = true,
            Command::Help => self.show_help = !self.show_help,
            Command::Theme(None) => {
                self.theme_store.toggle();
            }
            Command::Theme(Some(mode)) => {
                self.theme_store.set(mode);
            }
            Command::Page(n) => {
                if !self.home.is_mounted() {
                    // Open straight on the requested page.
                    self.home = HomeView::from_config(&self.config.home).starting_at(n);
                    self.show_page(Page::Blog, dispatch);
                } else {
                    self.show_page(Page::Blog, dispatch);
                    if !self.home.jump(n, dispatch) {
                        tracing::debug!(page = n, "page command had no effect");
                    }
                }
            }
            Command::Reload => self.reload(dispatch),
            Command::Open => return self.open_selected(),
        }
        None
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Email | Focus::Command)
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    loader: Loader,
    completions: UnboundedReceiver<Completion>,
}

impl App {
    pub fn new(state: AppState, loader: Loader, completions: UnboundedReceiver<Completion>) -> Self {
        Self { state, loader, completions }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        self.state.start(&self.loader);
        let result = self.event_loop(&mut terminal);
        self.state.shutdown();

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.drain_completions();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let app_event = match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        }
                    }
                    Event::Key(_) => None,
                    other => event::to_app_event(other),
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    if let Some(effect) = self.state.handle(ev, &self.loader) {
                        carry_out(effect);
                    }
                }
            }
        }
        Ok(())
    }

    fn drain_completions(&mut self) {
        while let Ok(completion) = self.completions.try_recv() {
            self.state.apply(completion);
        }
    }
}

fn carry_out(effect: Effect) {
    match effect {
        Effect::OpenUrl(url) => {
            tracing::debug!(%url, "opening in browser");
            if let Err(e) = open::that(&url) {
                tracing::warn!(%url, error = %e, "failed to open url");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = &state.theme;
    frame.render_widget(Paragraph::new("").style(theme.background), area);

    // Vertical: header | rule | body | footer
    let [header, rule, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        TabBar::new(&state.config.site.owner, state.page, state.theme_store.get(), theme),
        header,
    );
    frame.render_widget(
        Paragraph::new("─".repeat(rule.width as usize)).style(theme.border_unfocused),
        rule,
    );
    frame.render_widget(Footer::new(&state.config.site.links, theme), footer);

    let tag_limit = state.config.ui.tag_limit;
    let content_focused = state.focus == Focus::Content;
    let mut email_area = None;

    match state.page {
        Page::Blog => {
            let [banner, list, strip] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(body);
            render_banner(frame, banner, "THE BLOG", theme);
            frame.render_widget(
                ArticleList::new(
                    state.home.state(),
                    state.selected_index(ViewId::Home),
                    content_focused,
                    theme,
                )
                .tag_limit(tag_limit),
                list,
            );
            let window = state.home.window();
            frame.render_widget(
                PaginationBar::new(&window, state.home.controls_enabled(), theme),
                strip,
            );
        }
        Page::Projects => {
            let [banner, list] =
                Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(body);
            render_banner(frame, banner, "PROJECTS", theme);
            frame.render_widget(
                ArticleList::new(
                    state.projects.state(),
                    state.selected_index(ViewId::Projects),
                    content_focused,
                    theme,
                )
                .layout(ListLayout::Projects)
                .title("List Project")
                .loading_text("Loading projects...")
                .tag_limit(tag_limit),
                list,
            );
        }
        Page::About => {
            let [banner, about] =
                Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(body);
            render_banner(frame, banner, "ABOUT", theme);
            frame.render_widget(AboutPage::new(&state.config.site, theme), about);
        }
        Page::Newsletter => {
            let [banner, form, list] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Fill(1),
            ])
            .areas(body);
            render_banner(frame, banner, "Newsletters", theme);
            let focused = state.focus == Focus::Email;
            frame.render_widget(SignupForm::new(&state.signup, focused, theme), form);
            if focused {
                email_area = Some(form);
            }
            frame.render_widget(
                ArticleList::new(
                    state.newsletter.state(),
                    state.selected_index(ViewId::Newsletter),
                    content_focused,
                    theme,
                )
                .tag_limit(tag_limit),
                list,
            );
        }
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if let Some(form) = email_area {
        let position = SignupForm::new(&state.signup, true, theme).cursor_position(form);
        frame.set_cursor_position(position);
    }
}

fn render_banner(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let line = Line::from(Span::styled(
        format!(" {title}"),
        theme.title.add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::preference::MemoryBackend;
    use folio_core::{ArticlePage, ListQuery, RequestTicket, SourceError};
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        sent: RefCell<Vec<(ViewId, RequestTicket, ListQuery)>>,
    }

    impl Dispatch for Recorder {
        fn dispatch(&self, view: ViewId, ticket: RequestTicket, query: ListQuery) {
            self.sent.borrow_mut().push((view, ticket, query));
        }
    }

    impl Recorder {
        fn last(&self) -> (ViewId, RequestTicket, ListQuery) {
            *self.sent.borrow().last().expect("nothing dispatched")
        }

        fn count(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    fn state() -> (AppState, MemoryBackend) {
        let backend = MemoryBackend::default();
        let store = ThemeStore::open(backend.clone());
        (AppState::new(Config::defaults(), store), backend)
    }

    fn records(n: u32) -> Vec<serde_json::Value> {
        (1..=n)
            .map(|i| json!({ "id": i, "title": format!("Post {i}"), "url": format!("https://dev.to/p{i}") }))
            .collect()
    }

    fn complete(s: &mut AppState, d: &Recorder, n: u32, total: Option<u64>) -> Resolution {
        let (view, ticket, _) = d.last();
        s.apply(Completion {
            view,
            ticket,
            outcome: Ok(ArticlePage { records: records(n), total_count: total }),
        })
    }

    #[test]
    fn start_mounts_the_blog_only() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.start(&d);
        assert_eq!(d.count(), 1);
        assert_eq!(d.last().0, ViewId::Home);
        assert!(!s.projects.is_mounted());
    }

    #[test]
    fn tabs_mount_views_lazily_and_once() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.start(&d);
        s.handle(AppEvent::GoTab(2), &d);
        assert_eq!(d.last(), (ViewId::Projects, d.last().1, ListQuery::fixed(6)));
        s.handle(AppEvent::GoTab(1), &d);
        s.handle(AppEvent::GoTab(2), &d);
        assert_eq!(d.count(), 2, "revisiting a tab must not refetch");

        s.handle(AppEvent::GoTab(3), &d);
        assert_eq!(s.page, Page::About);
        assert_eq!(d.count(), 2);
        s.handle(AppEvent::NextTab, &d);
        assert_eq!(d.last().2, ListQuery::fixed(3));
    }

    #[test]
    fn paging_keys_only_act_on_the_blog() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.start(&d);
        complete(&mut s, &d, 6, Some(60));

        s.handle(AppEvent::NextPage, &d);
        assert_eq!(d.last().2, ListQuery::paged(2, 6));
        complete(&mut s, &d, 6, Some(60));

        s.handle(AppEvent::GoTab(3), &d);
        let before = d.count();
        s.handle(AppEvent::NextPage, &d);
        assert_eq!(d.count(), before);
    }

    #[test]
    fn selection_moves_and_opens_url() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.start(&d);
        complete(&mut s, &d, 3, None);

        s.handle(AppEvent::Nav(Direction::Down), &d);
        s.handle(AppEvent::Nav(Direction::Down), &d);
        s.handle(AppEvent::Nav(Direction::Down), &d);
        assert_eq!(s.selected_index(ViewId::Home), 2);
        assert_eq!(
            s.handle(AppEvent::Open, &d),
            Some(Effect::OpenUrl("https://dev.to/p3".to_string()))
        );
    }

    #[test]
    fn new_batch_resets_selection() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.start(&d);
        complete(&mut s, &d, 3, Some(30));
        s.handle(AppEvent::Nav(Direction::Down), &d);
        s.handle(AppEvent::NextPage, &d);
        complete(&mut s, &d, 3, Some(30));
        assert_eq!(s.selected_index(ViewId::Home), 0);
    }

    #[test]
    fn open_without_articles_does_nothing() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.start(&d);
        assert_eq!(s.handle(AppEvent::Open, &d), None);
    }

    #[test]
    fn toggle_theme_swaps_palette_and_persists() {
        let (mut s, backend) = state();
        let d = Recorder::default();
        assert_eq!(s.theme.mode, ThemeMode::Light);
        s.handle(AppEvent::ToggleTheme, &d);
        assert_eq!(s.theme.mode, ThemeMode::Dark);
        assert_eq!(backend.stored(), Some(ThemeMode::Dark));
    }

    #[test]
    fn theme_command_sets_mode() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.handle(AppEvent::CommandMode, &d);
        for c in "theme dark".chars() {
            s.handle(AppEvent::Char(c), &d);
        }
        s.handle(AppEvent::Enter, &d);
        assert_eq!(s.focus, Focus::Content);
        assert_eq!(s.theme_store.get(), ThemeMode::Dark);
        assert_eq!(s.theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn bad_command_keeps_bar_open_with_error() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.handle(AppEvent::CommandMode, &d);
        s.handle(AppEvent::Char('x'), &d);
        s.handle(AppEvent::Enter, &d);
        assert_eq!(s.focus, Focus::Command);
        assert!(s.command_bar.error.is_some());
    }

    #[test]
    fn page_command_jumps_the_blog() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.start(&d);
        complete(&mut s, &d, 6, Some(60));
        s.handle(AppEvent::GoTab(3), &d);

        let result = s.execute_command(Command::Page(4), &d);
        assert_eq!(result, None);
        assert_eq!(s.page, Page::Blog);
        assert_eq!(d.last().2, ListQuery::paged(4, 6));
    }

    #[test]
    fn page_command_before_first_visit_opens_on_that_page() {
        let (mut s, _) = state();
        s.page = Page::About;
        let d = Recorder::default();
        s.start(&d);
        assert_eq!(d.count(), 0);
        s.execute_command(Command::Page(7), &d);
        assert_eq!(d.last().2, ListQuery::paged(7, 6));
    }

    #[test]
    fn reload_remounts_current_view() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.start(&d);
        let (_, first, _) = d.last();
        s.handle(AppEvent::Reload, &d);
        assert_eq!(d.count(), 2);
        let stale = s.apply(Completion {
            view: ViewId::Home,
            ticket: first,
            outcome: Err(SourceError::Status { status: 500 }),
        });
        assert_eq!(stale, Resolution::Stale);
    }

    #[test]
    fn shutdown_drops_late_results() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.start(&d);
        s.shutdown();
        assert_eq!(complete(&mut s, &d, 3, None), Resolution::Unmounted);
        assert_eq!(s.theme_store.listener_count(), 0);
    }

    #[test]
    fn email_field_captures_keys() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.handle(AppEvent::InputFocus, &d);
        assert_eq!(s.focus, Focus::Content, "only the newsletter page has a field");

        s.handle(AppEvent::GoTab(4), &d);
        s.handle(AppEvent::InputFocus, &d);
        assert_eq!(s.focus, Focus::Email);
        for c in "a@b.io".chars() {
            s.handle(AppEvent::Char(c), &d);
        }
        s.handle(AppEvent::Enter, &d);
        assert!(s.signup.subscribed);
        assert!(s.signup.email.is_empty());
        s.handle(AppEvent::Escape, &d);
        assert_eq!(s.focus, Focus::Content);
    }

    #[test]
    fn help_popup_swallows_events() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.handle(AppEvent::Help, &d);
        s.handle(AppEvent::GoTab(2), &d);
        assert_eq!(s.page, Page::Blog);
        s.handle(AppEvent::Escape, &d);
        assert!(!s.show_help);
    }

    #[test]
    fn draws_every_page_without_panicking() {
        let (mut s, _) = state();
        let d = Recorder::default();
        s.start(&d);
        complete(&mut s, &d, 6, Some(100));
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        for n in 1..=4 {
            s.handle(AppEvent::GoTab(n), &d);
            terminal.draw(|f| draw(f, &s)).unwrap();
        }
        s.handle(AppEvent::Help, &d);
        terminal.draw(|f| draw(f, &s)).unwrap();
    }
}
