mod styled;

use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ferriscord_config::{Config, Limits};
use ferriscord_format::{
    LengthStatus, Message, MessageLimits, io,
    render::{self, html, plain},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    io::{Read, Stdout, stdout},
    path::PathBuf,
    process,
};

/// Reaction the `r` key toggles.
const QUICK_REACTION: &str = ferriscord_format::message::QUICK_REACTIONS[0];
/// Reacting identity when no config file names the current user.
const ANONYMOUS_USER: &str = "anonymous";
const PREVIEW_CHARS: usize = 48;

struct App {
    messages: Vec<Message>,
    list_state: ListState,
    current_user: String,
    limits: MessageLimits,
}

impl App {
    fn new(messages: Vec<Message>, current_user: String, limits: MessageLimits) -> Self {
        let mut list_state = ListState::default();
        if !messages.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            messages,
            list_state,
            current_user,
            limits,
        }
    }

    fn selected(&self) -> Option<&Message> {
        self.list_state
            .selected()
            .and_then(|i| self.messages.get(i))
    }

    fn next_message(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.messages.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_message(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.messages.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn toggle_reaction(&mut self) {
        if let Some(index) = self.list_state.selected()
            && let Some(message) = self.messages.get_mut(index)
        {
            let reacted = message.reactions.toggle(QUICK_REACTION, &self.current_user);
            log::debug!(
                "{} {} {QUICK_REACTION} on {}",
                self.current_user,
                if reacted { "added" } else { "removed" },
                message.id
            );
        }
    }

    fn status_line(&self) -> Line<'static> {
        let Some(message) = self.selected() else {
            return Line::from("No messages");
        };

        let length = match self.limits.check(&message.content) {
            LengthStatus::Ok => Span::raw(format!("{} chars", message.content.chars().count())),
            LengthStatus::NearLimit { remaining } => Span::styled(
                format!("{remaining} chars left"),
                Style::default().fg(Color::Yellow),
            ),
            LengthStatus::OverLimit { excess } => Span::styled(
                format!("{excess} chars over limit"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        let mut spans = vec![length];
        for reaction in message.reactions.iter() {
            let style = if reaction.has_reacted(&self.current_user) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{} {}", reaction.emoji, reaction.count()),
                style,
            ));
        }
        Line::from(spans)
    }
}

enum RenderFormat {
    Html,
    Plain,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("ferriscord-cli");

    match args.get(1).map(String::as_str) {
        Some("render") => {
            let format = match args.get(2).map(String::as_str) {
                None | Some("html") => RenderFormat::Html,
                Some("plain") => RenderFormat::Plain,
                Some(other) => bail!("unknown render format '{other}' (expected html or plain)"),
            };
            render_stdin(format)
        }
        Some("init") => {
            let (Some(messages_path), Some(current_user)) = (args.get(2), args.get(3)) else {
                eprintln!("Usage: {program} init <messages.json> <user-id>");
                process::exit(1);
            };
            let config = Config {
                messages_path: PathBuf::from(messages_path),
                current_user: current_user.clone(),
                limits: Limits::default(),
            };
            config.save()?;
            println!("Wrote {}", Config::config_path().display());
            Ok(())
        }
        Some("-h") | Some("--help") => {
            print_usage(program);
            Ok(())
        }
        _ if args.len() > 2 => {
            print_usage(program);
            process::exit(1);
        }
        path => run_viewer(program, path.map(PathBuf::from)),
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [messages.json]");
    eprintln!("       {program} render [html|plain] < message.txt");
    eprintln!("       {program} init <messages.json> <user-id>");
}

/// Loads the config file, reporting but tolerating a broken one.
fn load_config() -> Option<Config> {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring config file: {e}");
            None
        }
    }
}

fn limits_from(config: Option<&Config>) -> MessageLimits {
    config
        .map(|c| MessageLimits::from(c.limits))
        .unwrap_or_default()
}

/// Reads one message body from stdin and prints it rendered.
fn render_stdin(format: RenderFormat) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read message from stdin")?;
    // A terminating newline belongs to the pipe, not the message
    let body = input.strip_suffix('\n').unwrap_or(input.as_str());

    let config = load_config();
    match limits_from(config.as_ref()).check(body) {
        LengthStatus::OverLimit { excess } => {
            log::warn!("message is {excess} character(s) over the limit")
        }
        LengthStatus::NearLimit { remaining } => {
            log::info!("message is within {remaining} character(s) of the limit")
        }
        LengthStatus::Ok => {}
    }

    let units = render::render(&ferriscord_format::segment(body));
    match format {
        RenderFormat::Html => println!("{}", html::to_html(&units)),
        RenderFormat::Plain => println!("{}", plain::to_plain(&units)),
    }
    Ok(())
}

fn run_viewer(program: &str, cli_path: Option<PathBuf>) -> Result<()> {
    let config_path = Config::config_path();
    let config = load_config();

    let messages_path = match (cli_path, config.as_ref()) {
        (Some(path), _) => path,
        (None, Some(config)) => config.messages_path.clone(),
        (None, None) => {
            eprintln!("Error: No messages file provided and no config file found");
            eprintln!("Usage: {program} <messages.json>");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    let messages = match io::load_messages(&messages_path) {
        Ok(messages) => messages,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let current_user = config
        .as_ref()
        .map(|c| c.current_user.clone())
        .unwrap_or_else(|| ANONYMOUS_USER.to_string());
    let mut app = App::new(messages, current_user, limits_from(config.as_ref()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_message(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_message(),
                KeyCode::Char('r') => app.toggle_reaction(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
        .split(rows[0]);

    // Message list panel
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let units = render::render(&message.segments());
            let author_style = if message.is_own(&app.current_user) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("[{}] ", message.author.initials()), author_style),
                    Span::styled(message.author.username.clone(), author_style),
                    Span::styled(
                        format!("  {}", message.time_label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(format!("  {}", plain::preview(&units, PREVIEW_CHARS))),
            ])
        })
        .collect();

    let message_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(message_list, chunks[0], &mut app.list_state);

    // Formatted message panel
    let (title, body) = match app.selected() {
        Some(message) => {
            let edited = if message.is_edited() { " (edited)" } else { "" };
            (
                format!("{} · {}{edited}", message.author.username, message.time_label()),
                styled::message_lines(&render::render(&message.segments())),
            )
        }
        None => (
            "Message".to_string(),
            vec![Line::from("No messages yet. Start the conversation!")],
        ),
    };

    let content = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    f.render_widget(Paragraph::new(app.status_line()), rows[1]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw(format!("r: React {QUICK_REACTION}")),
    ]);
    f.render_widget(Paragraph::new(help_text), rows[2]);
}
