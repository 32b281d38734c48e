use anyhow::{bail, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::models::{
    ChannelKind, FileKind, NewUser, Role, StatDraft, StatTile, TileColor, Visibility,
};
use api::{ApiClient, TokenStore};

use evpark::config::Config;
use evpark::views::calendar::{CalendarPage, EventForm};
use evpark::views::chat::ChatPanel;
use evpark::views::cohorts::{CohortBoard, CohortForm};
use evpark::views::leads::{LeadForm, LeadsBoard};
use evpark::views::profile::ProfilePage;
use evpark::views::ListState;
use evpark::{auth, defaults, render};

#[derive(Parser)]
#[command(name = "evpark")]
#[command(about = "EdVenture Park dashboard client - cohorts, campus leads, chat, calendar")]
#[command(version)]
struct Cli {
    /// Server URL (overrides config)
    #[arg(long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login with email and password
    Login {
        email: String,
        password: String,
        /// Login tab: team or campus_lead
        #[arg(long, default_value = "team")]
        tab: Role,
    },
    /// Create an account
    Register {
        email: String,
        name: String,
        password: String,
        #[arg(long, default_value = "team")]
        role: Role,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        college: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show the current session
    Whoami,
    /// Cohort dashboard
    Cohorts {
        #[command(subcommand)]
        action: CohortAction,
    },
    /// Campus-lead monitor
    Leads {
        #[command(subcommand)]
        action: LeadAction,
    },
    /// Chat panel
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// Event calendar
    Calendar {
        #[command(subcommand)]
        action: CalendarAction,
    },
    /// Profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Stat tiles
    Stats {
        #[command(subcommand)]
        action: StatsAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum CohortAction {
    /// List cohorts with overview stats
    List,
    /// Add a cohort
    Add {
        name: String,
        program: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        #[arg(long, default_value_t = 0)]
        participants: u32,
        #[arg(long)]
        description: Option<String>,
    },
    /// Show one cohort's milestone detail
    Show { id: String },
}

#[derive(Subcommand)]
enum LeadAction {
    /// List campus leads with distribution stats
    List,
    /// Add a campus lead
    Add {
        name: String,
        college: String,
        location: String,
    },
}

#[derive(Subcommand)]
enum ChatAction {
    /// List channels
    Channels {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show a channel's transcript
    History { channel: String },
    /// Send a message
    Send {
        channel: String,
        text: String,
        /// Message id to reply to
        #[arg(long)]
        reply: Option<String>,
        /// Attachment file name
        #[arg(long)]
        file: Option<String>,
        /// Attachment kind: image, file, voice
        #[arg(long, default_value = "file")]
        file_kind: String,
    },
    /// Toggle a message's star
    Star { channel: String, message: String },
    /// Delete a message
    Rm { channel: String, message: String },
    /// Create a channel
    NewChannel {
        name: String,
        /// team, campus_leads, or general
        #[arg(long, default_value = "general")]
        kind: String,
    },
}

#[derive(Subcommand)]
enum CalendarAction {
    /// Show a month's grid and events
    Show {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Add an event
    Add {
        title: String,
        #[arg(long, default_value = "")]
        program: String,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "bg-cyan-400")]
        color: String,
        /// everyone, team, or private
        #[arg(long, default_value = "everyone")]
        visibility: String,
        #[arg(long)]
        location: Option<String>,
    },
    /// Edit an event
    Edit {
        id: String,
        title: String,
        #[arg(long, default_value = "")]
        program: String,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "bg-cyan-400")]
        color: String,
        #[arg(long, default_value = "everyone")]
        visibility: String,
        #[arg(long)]
        location: Option<String>,
    },
    /// Delete an event
    Rm { id: String },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the profile
    Show,
    /// Edit profile fields
    Edit {
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        add_skill: Vec<String>,
        #[arg(long)]
        remove_skill: Vec<String>,
        #[arg(long)]
        add_achievement: Vec<String>,
    },
}

#[derive(Subcommand)]
enum StatsAction {
    /// Show a category's stat tiles
    Show { category: String },
    /// Replace a category's tiles. Each tile is Label=Value[:Icon[:Color]]
    Set {
        category: String,
        tiles: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set a configuration value
    Set {
        /// Configuration key (server)
        key: String,
        value: String,
    },
    /// Get a configuration value
    Get { key: String },
    /// Show all configuration
    Show,
    /// Get the config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "evpark=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::load().unwrap_or_default();
    let server = config.server_url(cli.server);
    let api = ApiClient::new(server, TokenStore::open(TokenStore::default_path()?));

    match cli.command {
        Commands::Config { action } => return handle_config_command(action),
        Commands::Login {
            email,
            password,
            tab,
        } => {
            let session = auth::login(&api, &email, &password, tab).await?;
            println!(
                "\x1b[1;32m✅ Logged in\x1b[0m as {} ({})",
                session.user.name, session.user.role
            );
        }
        Commands::Register {
            email,
            name,
            password,
            role,
            phone,
            location,
            college,
            department,
        } => {
            let session = auth::register(
                &api,
                &NewUser {
                    email,
                    name,
                    role,
                    password,
                    phone,
                    location,
                    college,
                    department,
                },
            )
            .await?;
            println!(
                "\x1b[1;32m✅ Account created\x1b[0m for {} ({})",
                session.user.name, session.user.role
            );
        }
        Commands::Logout => {
            auth::logout(&api)?;
            println!("\x1b[32m✅ Logged out\x1b[0m");
        }
        Commands::Whoami => match auth::whoami(&api).await? {
            Some(user) => {
                println!("\x1b[32m✓ Logged in\x1b[0m as {} ({})", user.name, user.role);
                println!("Server: {}", api.base_url());
            }
            None => {
                println!("\x1b[33m✗ Not logged in\x1b[0m");
                println!("Run '\x1b[1mevpark login <email> <password>\x1b[0m' to authenticate");
            }
        },
        Commands::Cohorts { action } => {
            let mut board = CohortBoard::new();
            board.load(&api).await;
            match action {
                CohortAction::List => print!("{}", board.render()),
                CohortAction::Add {
                    name,
                    program,
                    start,
                    end,
                    participants,
                    description,
                } => {
                    board
                        .add_cohort(
                            &api,
                            CohortForm {
                                name,
                                program,
                                start_date: start,
                                end_date: end,
                                participants,
                                description,
                            },
                        )
                        .await;
                    print!("{}", board.render());
                }
                CohortAction::Show { id } => match board.render_detail(&id) {
                    Some(detail) => print!("{detail}"),
                    None => bail!("No cohort with id {id}"),
                },
            }
        }
        Commands::Leads { action } => {
            let role = viewer_role(&api).await;
            let mut board = LeadsBoard::new(role);
            board.load(&api).await;
            match action {
                LeadAction::List => println!("{}", board.render()),
                LeadAction::Add {
                    name,
                    college,
                    location,
                } => {
                    board
                        .add_lead(
                            &api,
                            LeadForm {
                                name,
                                college,
                                location,
                            },
                        )
                        .await;
                    println!("{}", board.render());
                }
            }
        }
        Commands::Chat { action } => {
            let role = viewer_role(&api).await;
            let mut panel = ChatPanel::new(role);
            match action {
                ChatAction::Channels { search } => {
                    panel.load_channels(&api).await;
                    panel.search = search;
                    print!("{}", panel.render_channels());
                }
                ChatAction::History { channel } => {
                    panel.open(&api, &channel).await;
                    print!("{}", panel.render_messages(Local::now().date_naive()));
                }
                ChatAction::Send {
                    channel,
                    text,
                    reply,
                    file,
                    file_kind,
                } => {
                    panel.open(&api, &channel).await;
                    let attachment = match file {
                        Some(name) => Some((name, parse_file_kind(&file_kind)?)),
                        None => None,
                    };
                    panel.send(&api, &text, reply.as_deref(), attachment).await;
                    print!("{}", panel.render_messages(Local::now().date_naive()));
                }
                ChatAction::Star { channel, message } => {
                    panel.open(&api, &channel).await;
                    panel.toggle_star(&api, &message).await;
                    print!("{}", panel.render_messages(Local::now().date_naive()));
                }
                ChatAction::Rm { channel, message } => {
                    panel.open(&api, &channel).await;
                    panel.delete_message(&api, &message).await;
                    print!("{}", panel.render_messages(Local::now().date_naive()));
                }
                ChatAction::NewChannel { name, kind } => {
                    panel.load_channels(&api).await;
                    panel
                        .create_channel(&api, &name, parse_channel_kind(&kind)?)
                        .await;
                    print!("{}", panel.render_channels());
                }
            }
        }
        Commands::Calendar { action } => {
            let role = viewer_role(&api).await;
            let mut page = CalendarPage::new(role);
            page.load(&api).await;
            match action {
                CalendarAction::Show { month } => {
                    let (year, month) = parse_month(month.as_deref())?;
                    print!("{}", page.render_month(year, month));
                }
                CalendarAction::Add {
                    title,
                    program,
                    date,
                    time,
                    description,
                    color,
                    visibility,
                    location,
                } => {
                    page.add_event(
                        &api,
                        EventForm {
                            title,
                            program,
                            date,
                            time,
                            description,
                            color,
                            visibility: parse_visibility(&visibility)?,
                            location,
                        },
                    )
                    .await;
                    print!("{}", page.render_month(date.year(), date.month()));
                }
                CalendarAction::Edit {
                    id,
                    title,
                    program,
                    date,
                    time,
                    description,
                    color,
                    visibility,
                    location,
                } => {
                    page.update_event(
                        &api,
                        &id,
                        EventForm {
                            title,
                            program,
                            date,
                            time,
                            description,
                            color,
                            visibility: parse_visibility(&visibility)?,
                            location,
                        },
                    )
                    .await;
                    print!("{}", page.render_month(date.year(), date.month()));
                }
                CalendarAction::Rm { id } => {
                    page.remove_event(&api, &id).await;
                    let today = Local::now().date_naive();
                    print!("{}", page.render_month(today.year(), today.month()));
                }
            }
        }
        Commands::Profile { action } => {
            let role = viewer_role(&api).await;
            let mut page = ProfilePage::new(role);
            page.load(&api).await;
            match action {
                ProfileAction::Show => print!("{}", page.render()),
                ProfileAction::Edit {
                    bio,
                    phone,
                    location,
                    add_skill,
                    remove_skill,
                    add_achievement,
                } => {
                    page.edit(&api, |p| {
                        if let Some(bio) = bio {
                            p.bio = Some(bio);
                        }
                        if let Some(phone) = phone {
                            p.phone = Some(phone);
                        }
                        if let Some(location) = location {
                            p.location = Some(location);
                        }
                        for skill in add_skill {
                            if !p.skills.contains(&skill) {
                                p.skills.push(skill);
                            }
                        }
                        p.skills.retain(|s| !remove_skill.contains(s));
                        p.achievements.extend(add_achievement);
                    })
                    .await;
                    print!("{}", page.render());
                }
            }
        }
        Commands::Stats { action } => match action {
            StatsAction::Show { category } => {
                let mut stats = ListState::new();
                stats.begin_load();
                stats.finish_load(api.stats(&category).await, stats_fallback(&category));
                print!("{}", render_stats(&stats));
            }
            StatsAction::Set { category, tiles } => {
                if tiles.is_empty() {
                    bail!("Provide at least one tile as Label=Value[:Icon[:Color]]");
                }
                let drafts = tiles
                    .iter()
                    .map(|spec| parse_tile(spec))
                    .collect::<Result<Vec<_>>>()?;

                let mut stats = ListState::new();
                stats.begin_load();
                stats.finish_load(api.stats(&category).await, stats_fallback(&category));

                let proposed = drafts.iter().cloned().map(StatDraft::into_tile).collect();
                stats.apply_replace(api.update_stats(&category, &drafts).await, proposed);
                print!("{}", render_stats(&stats));
            }
        },
    }

    Ok(())
}

fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load().unwrap_or_default();
            match key.as_str() {
                "server" => config.server = Some(value),
                _ => bail!("Unknown config key: {key} (expected: server)"),
            }
            config.save()?;
            println!("✅ Configuration saved");
        }
        ConfigAction::Get { key } => {
            let config = Config::load().unwrap_or_default();
            match key.as_str() {
                "server" => println!("{}", config.server.as_deref().unwrap_or("(not set)")),
                _ => bail!("Unknown config key: {key} (expected: server)"),
            }
        }
        ConfigAction::Show => {
            let config = Config::load().unwrap_or_default();
            println!("server: {}", config.server_url(None));
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
        }
    }
    Ok(())
}

/// The screens render differently per role; resolve it from the session,
/// defaulting to team when nobody is logged in.
async fn viewer_role(api: &ApiClient) -> Role {
    match auth::whoami(api).await {
        Ok(Some(user)) => user.role,
        _ => Role::Team,
    }
}

fn stats_fallback(category: &str) -> Vec<StatTile> {
    match category {
        "cohort" => defaults::cohort_stats(),
        "campus_lead" => defaults::lead_stats(),
        _ => Vec::new(),
    }
}

fn render_stats(stats: &ListState<StatTile>) -> String {
    let mut out = String::new();
    for tracked in stats.items() {
        let tile = &tracked.record;
        out.push_str(&format!(
            "  {} {}: {}{}\n",
            tile.icon.glyph(),
            render::paint(tile.color.ansi(), &tile.label),
            tile.value,
            render::unconfirmed_marker(tracked.server_confirmed),
        ));
    }
    out
}

fn parse_channel_kind(s: &str) -> Result<ChannelKind> {
    match s {
        "team" => Ok(ChannelKind::Team),
        "campus_leads" => Ok(ChannelKind::CampusLeads),
        "general" => Ok(ChannelKind::General),
        other => bail!("Unknown channel kind: {other} (expected team, campus_leads, general)"),
    }
}

fn parse_visibility(s: &str) -> Result<Visibility> {
    match s {
        "everyone" => Ok(Visibility::Everyone),
        "team" => Ok(Visibility::Team),
        "private" => Ok(Visibility::Private),
        other => bail!("Unknown visibility: {other} (expected everyone, team, private)"),
    }
}

fn parse_file_kind(s: &str) -> Result<FileKind> {
    match s {
        "image" => Ok(FileKind::Image),
        "file" => Ok(FileKind::File),
        "voice" => Ok(FileKind::Voice),
        other => bail!("Unknown file kind: {other} (expected image, file, voice)"),
    }
}

/// "YYYY-MM" into (year, month); defaults to the current month.
fn parse_month(spec: Option<&str>) -> Result<(i32, u32)> {
    match spec {
        None => {
            let today = Local::now().date_naive();
            Ok((today.year(), today.month()))
        }
        Some(spec) => {
            let (year, month) = spec
                .split_once('-')
                .ok_or_else(|| anyhow::anyhow!("Expected YYYY-MM, got {spec}"))?;
            let year: i32 = year.parse()?;
            let month: u32 = month.parse()?;
            if !(1..=12).contains(&month) {
                bail!("Month out of range: {month}");
            }
            Ok((year, month))
        }
    }
}

/// Tile spec: `Label=Value[:Icon[:Color]]`. Color accepts the short names
/// from the manage-stats dialog (cyan, lime, purple, orange, pink, blue).
fn parse_tile(spec: &str) -> Result<StatDraft> {
    let (label, rest) = spec
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected Label=Value[:Icon[:Color]], got {spec}"))?;

    let mut parts = rest.splitn(3, ':');
    let value = parts.next().unwrap_or_default();
    let icon = parts.next().unwrap_or("Users");
    let color = parts.next().unwrap_or("cyan");

    Ok(StatDraft {
        label: label.to_string(),
        value: value.to_string(),
        icon: api::models::Icon::from(icon.to_string()),
        color: parse_color(color),
    })
}

fn parse_color(s: &str) -> TileColor {
    match s {
        "cyan" => TileColor::Cyan,
        "lime" => TileColor::Lime,
        "purple" => TileColor::Purple,
        "orange" => TileColor::Orange,
        "pink" => TileColor::Pink,
        "blue" => TileColor::Blue,
        other => TileColor::from(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::Icon;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month(Some("2025-10")).unwrap(), (2025, 10));
        assert!(parse_month(Some("2025-13")).is_err());
        assert!(parse_month(Some("october")).is_err());
    }

    #[test]
    fn test_parse_tile_full_spec() {
        let draft = parse_tile("Completion Rate=78%:Target:purple").unwrap();
        assert_eq!(draft.label, "Completion Rate");
        assert_eq!(draft.value, "78%");
        assert_eq!(draft.icon, Icon::Target);
        assert_eq!(draft.color, TileColor::Purple);
    }

    #[test]
    fn test_parse_tile_defaults() {
        let draft = parse_tile("Active Cohorts=3").unwrap();
        assert_eq!(draft.icon, Icon::Users);
        assert_eq!(draft.color, TileColor::Cyan);
        assert!(parse_tile("no-equals-sign").is_err());
    }

    #[test]
    fn test_parse_color_accepts_wire_token() {
        assert_eq!(parse_color("lime"), TileColor::Lime);
        assert_eq!(parse_color("text-lime-600"), TileColor::Lime);
    }
}
