use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Users & sessions
// ============================================================================

/// Account role. The backend stores these as snake_case strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Team,
    CampusLead,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Team => write!(f, "team"),
            Role::CampusLead => write!(f, "campus_lead"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "team" => Ok(Role::Team),
            "campus_lead" => Ok(Role::CampusLead),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub joined_date: Option<String>,
}

/// Login/register response: an opaque bearer credential plus the user it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

// ============================================================================
// Cohorts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    pub id: String,
    pub name: String,
    pub program: String,
    /// Free text; conventionally "Active" or "Planning".
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub participants: u32,
    /// 0-100.
    pub progress: u8,
    /// Ordered milestone names; `completed_milestones` counts from the front.
    pub milestones: Vec<String>,
    pub completed_milestones: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCohort {
    pub name: String,
    pub program: String,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub participants: u32,
    pub progress: u8,
    pub milestones: Vec<String>,
    pub completed_milestones: u32,
    #[serde(default)]
    pub description: Option<String>,
}

// ============================================================================
// Campus leads
// ============================================================================

/// Lead status; stored as display strings ("Active"/"Inactive") by the
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusLead {
    pub id: String,
    pub name: String,
    pub college: String,
    pub location: String,
    pub status: LeadStatus,
    pub events_organized: u32,
    pub students_reached: u32,
    pub performance: String,
    /// Display string ("2 hours ago", "Just joined").
    pub last_activity: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCampusLead {
    pub name: String,
    pub college: String,
    pub location: String,
    pub status: LeadStatus,
    pub events_organized: u32,
    pub students_reached: u32,
    pub performance: String,
    pub last_activity: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

// ============================================================================
// Stat tiles
// ============================================================================

/// The fixed icon set stat tiles draw from. Wire form is the original
/// PascalCase name; anything unrecognized is preserved as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Icon {
    Users,
    TrendingUp,
    Target,
    Award,
    Calendar,
    MapPin,
    Building,
    Star,
    Other(String),
}

impl From<String> for Icon {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Users" => Icon::Users,
            "TrendingUp" => Icon::TrendingUp,
            "Target" => Icon::Target,
            "Award" => Icon::Award,
            "Calendar" => Icon::Calendar,
            "MapPin" => Icon::MapPin,
            "Building" => Icon::Building,
            "Star" => Icon::Star,
            _ => Icon::Other(s),
        }
    }
}

impl Icon {
    pub fn wire(&self) -> &str {
        match self {
            Icon::Users => "Users",
            Icon::TrendingUp => "TrendingUp",
            Icon::Target => "Target",
            Icon::Award => "Award",
            Icon::Calendar => "Calendar",
            Icon::MapPin => "MapPin",
            Icon::Building => "Building",
            Icon::Star => "Star",
            Icon::Other(name) => name,
        }
    }

    /// Terminal glyph for the icon. Total mapping with a default arm.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Users => "👥",
            Icon::TrendingUp => "📈",
            Icon::Target => "🎯",
            Icon::Award => "🏆",
            Icon::Calendar => "📅",
            Icon::MapPin => "📍",
            Icon::Building => "🏢",
            Icon::Star => "⭐",
            Icon::Other(_) => "•",
        }
    }
}

impl Serialize for Icon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire())
    }
}

/// Tile color. Wire form is the original CSS utility token
/// (`text-cyan-600`, ...); unrecognized tokens are preserved as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TileColor {
    Cyan,
    Lime,
    Purple,
    Orange,
    Pink,
    Blue,
    Other(String),
}

impl From<String> for TileColor {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text-cyan-600" => TileColor::Cyan,
            "text-lime-600" => TileColor::Lime,
            "text-purple-600" => TileColor::Purple,
            "text-orange-600" => TileColor::Orange,
            "text-pink-600" => TileColor::Pink,
            "text-blue-600" => TileColor::Blue,
            _ => TileColor::Other(s),
        }
    }
}

impl TileColor {
    pub fn wire(&self) -> &str {
        match self {
            TileColor::Cyan => "text-cyan-600",
            TileColor::Lime => "text-lime-600",
            TileColor::Purple => "text-purple-600",
            TileColor::Orange => "text-orange-600",
            TileColor::Pink => "text-pink-600",
            TileColor::Blue => "text-blue-600",
            TileColor::Other(token) => token,
        }
    }

    /// ANSI color code for terminal rendering. Total mapping with a
    /// default arm.
    pub fn ansi(&self) -> &'static str {
        match self {
            TileColor::Cyan => "36",
            TileColor::Lime => "32",
            TileColor::Purple => "35",
            TileColor::Orange => "33",
            TileColor::Pink => "95",
            TileColor::Blue => "34",
            TileColor::Other(_) => "37",
        }
    }
}

impl Serialize for TileColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatTile {
    /// Absent until the server assigns one.
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    /// Display string, not necessarily numeric ("78%", "15 leads").
    pub value: String,
    pub icon: Icon,
    pub color: TileColor,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatDraft {
    pub label: String,
    pub value: String,
    pub icon: Icon,
    pub color: TileColor,
}

impl StatDraft {
    /// The tile this draft proposes, before the server has assigned an id.
    pub fn into_tile(self) -> StatTile {
        StatTile {
            id: None,
            label: self.label,
            value: self.value,
            icon: self.icon,
            color: self.color,
            category: None,
        }
    }
}

/// Whole-list replace payload for `PUT /api/stats/{category}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsUpdate {
    pub stats: Vec<StatDraft>,
}

// ============================================================================
// Channels & messages
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Team,
    CampusLeads,
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    #[serde(default)]
    pub unread: u32,
    #[serde(default)]
    pub last_message: String,
    #[serde(default)]
    pub last_message_time: String,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub typing: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChannel {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    File,
    Voice,
}

/// Snippet of the message being replied to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyRef {
    pub id: String,
    pub sender: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub channel_id: String,
    pub sender: String,
    pub role: Role,
    pub content: String,
    /// Display timestamp ("10:30 AM").
    pub timestamp: String,
    /// 24h clock ("10:30").
    pub time: String,
    /// Calendar day ("2025-10-22").
    pub date: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<FileKind>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub reply_to: Option<ReplyRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub channel_id: String,
    pub sender: String,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<FileKind>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub reply_to_id: Option<String>,
}

// ============================================================================
// Calendar events
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Everyone,
    Team,
    Private,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub program: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// CSS background token as the backend stores it ("bg-cyan-400").
    pub color: String,
    #[serde(default)]
    pub text_color: Option<String>,
    pub visibility: Visibility,
    #[serde(default)]
    pub created_by: Option<Role>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub attendees: Option<u32>,
    /// Number of consecutive days the event occupies.
    #[serde(default)]
    pub span: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub program: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
    #[serde(default)]
    pub text_color: Option<String>,
    pub visibility: Visibility,
    #[serde(default)]
    pub created_by: Option<Role>,
    #[serde(default)]
    pub location: Option<String>,
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Free-text title ("Program Manager", "Campus Lead").
    pub role: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub joined_date: Option<String>,
}
