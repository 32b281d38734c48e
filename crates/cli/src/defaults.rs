//! Fallback datasets, one function per resource.
//!
//! When a fetch fails the screen substitutes these instead of rendering
//! empty. They mirror the seed data the backend ships with, so a working
//! and a broken backend look alike at first glance; the difference shows
//! only in the logs and the unconfirmed markers.

use chrono::NaiveDate;

use api::models::{
    CalendarEvent, CampusLead, Channel, ChannelKind, Cohort, FileKind, Icon, LeadStatus, Message,
    Profile, ReplyRef, Role, StatTile, TileColor, Visibility,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn cohort(
    id: &str,
    name: &str,
    program: &str,
    status: &str,
    start: NaiveDate,
    end: NaiveDate,
    participants: u32,
    progress: u8,
    milestones: &[&str],
    completed: u32,
) -> Cohort {
    Cohort {
        id: id.to_string(),
        name: name.to_string(),
        program: program.to_string(),
        status: status.to_string(),
        start_date: start,
        end_date: end,
        participants,
        progress,
        milestones: milestones.iter().map(|m| m.to_string()).collect(),
        completed_milestones: completed,
        description: None,
        created_at: None,
    }
}

pub fn cohorts() -> Vec<Cohort> {
    vec![
        cohort(
            "1",
            "EVP A25",
            "Pre-Incubation",
            "Active",
            date(2025, 1, 15),
            date(2025, 4, 30),
            45,
            65,
            &["Ideation", "Prototyping", "Market Research", "Pitch Preparation"],
            2,
        ),
        cohort(
            "2",
            "EdAstra Batch 6",
            "Innovation Challenge",
            "Active",
            date(2025, 2, 1),
            date(2025, 5, 15),
            32,
            40,
            &["Team Formation", "Problem Identification", "Solution Design", "Demo Day"],
            1,
        ),
        cohort(
            "3",
            "Tentative Sprint",
            "Advanced Incubation",
            "Planning",
            date(2025, 3, 1),
            date(2025, 6, 30),
            28,
            15,
            &["Onboarding", "Mentor Matching", "Development", "Launch"],
            0,
        ),
    ]
}

fn tile(label: &str, value: &str, icon: Icon, color: TileColor) -> StatTile {
    StatTile {
        id: None,
        label: label.to_string(),
        value: value.to_string(),
        icon,
        color,
        category: None,
    }
}

pub fn cohort_stats() -> Vec<StatTile> {
    vec![
        tile("Total Participants", "105", Icon::Users, TileColor::Cyan),
        tile("Active Cohorts", "3", Icon::TrendingUp, TileColor::Lime),
        tile("Completion Rate", "78%", Icon::Target, TileColor::Purple),
        tile("Success Stories", "24", Icon::Award, TileColor::Orange),
    ]
}

pub fn lead_stats() -> Vec<StatTile> {
    vec![
        tile("Telangana", "15 leads", Icon::MapPin, TileColor::Cyan),
        tile("Maharashtra", "12 leads", Icon::MapPin, TileColor::Lime),
        tile("Tamil Nadu", "10 leads", Icon::MapPin, TileColor::Purple),
        tile("Karnataka", "8 leads", Icon::MapPin, TileColor::Orange),
    ]
}

fn lead(
    id: &str,
    name: &str,
    college: &str,
    location: &str,
    status: LeadStatus,
    events: u32,
    students: u32,
    last_activity: &str,
    performance: &str,
) -> CampusLead {
    CampusLead {
        id: id.to_string(),
        name: name.to_string(),
        college: college.to_string(),
        location: location.to_string(),
        status,
        events_organized: events,
        students_reached: students,
        performance: performance.to_string(),
        last_activity: last_activity.to_string(),
        user_id: None,
    }
}

pub fn campus_leads() -> Vec<CampusLead> {
    vec![
        lead(
            "1",
            "Priya Sharma",
            "MS Degree College",
            "Hyderabad, Telangana",
            LeadStatus::Active,
            12,
            245,
            "2 hours ago",
            "Excellent",
        ),
        lead(
            "2",
            "Rahul Verma",
            "IIT Bombay",
            "Mumbai, Maharashtra",
            LeadStatus::Active,
            18,
            320,
            "5 hours ago",
            "Excellent",
        ),
        lead(
            "3",
            "Ananya Reddy",
            "NIT Warangal",
            "Warangal, Telangana",
            LeadStatus::Active,
            9,
            180,
            "1 day ago",
            "Good",
        ),
        lead(
            "4",
            "Karthik Menon",
            "VIT Chennai",
            "Chennai, Tamil Nadu",
            LeadStatus::Active,
            15,
            290,
            "3 hours ago",
            "Excellent",
        ),
        lead(
            "5",
            "Sneha Patel",
            "BITS Pilani",
            "Pilani, Rajasthan",
            LeadStatus::Inactive,
            6,
            125,
            "1 week ago",
            "Average",
        ),
    ]
}

fn channel(
    id: &str,
    name: &str,
    kind: ChannelKind,
    unread: u32,
    last_message: &str,
    last_message_time: &str,
    online: bool,
) -> Channel {
    Channel {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        unread,
        last_message: last_message.to_string(),
        last_message_time: last_message_time.to_string(),
        online,
        typing: false,
        created_at: None,
    }
}

pub fn channels() -> Vec<Channel> {
    vec![
        channel(
            "1",
            "Team Announcements",
            ChannelKind::Team,
            3,
            "New cohort starting next month",
            "10:30 AM",
            true,
        ),
        channel(
            "2",
            "Campus Leads - Telangana",
            ChannelKind::CampusLeads,
            5,
            "Info session scheduled",
            "11:45 AM",
            true,
        ),
        channel(
            "3",
            "Campus Leads - Maharashtra",
            ChannelKind::CampusLeads,
            0,
            "Great turnout today!",
            "Yesterday",
            false,
        ),
        channel(
            "4",
            "EVP A25 Coordinators",
            ChannelKind::General,
            2,
            "Interview dates confirmed",
            "9:15 AM",
            true,
        ),
        channel(
            "5",
            "EdAstra Team",
            ChannelKind::Team,
            1,
            "Workshop materials ready",
            "2 days ago",
            false,
        ),
    ]
}

fn message(
    id: &str,
    channel_id: &str,
    sender: &str,
    role: Role,
    content: &str,
    timestamp: &str,
    time: &str,
    date: &str,
    read: bool,
) -> Message {
    Message {
        id: id.to_string(),
        channel_id: channel_id.to_string(),
        sender: sender.to_string(),
        role,
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        time: time.to_string(),
        date: date.to_string(),
        read,
        starred: false,
        file_name: None,
        file_type: None,
        file_url: None,
        reply_to: None,
    }
}

/// The Telangana channel's seed transcript.
pub fn messages(channel_id: &str) -> Vec<Message> {
    let mut transcript = vec![
        message(
            "1",
            channel_id,
            "Sarah",
            Role::Team,
            "Hi everyone! We have confirmed the dates for the EVP A25 preliminary interviews.",
            "10:30 AM",
            "10:30",
            "2025-10-22",
            true,
        ),
        message(
            "2",
            channel_id,
            "Priya",
            Role::CampusLead,
            "That's great! We have around 30 students interested from our campus.",
            "10:35 AM",
            "10:35",
            "2025-10-22",
            true,
        ),
        message(
            "3",
            channel_id,
            "Rahul",
            Role::CampusLead,
            "We organized an info session yesterday. Got excellent response with 45+ registrations!",
            "10:42 AM",
            "10:42",
            "2025-10-22",
            true,
        ),
        message(
            "4",
            channel_id,
            "Michael",
            Role::Team,
            "Fantastic work! Make sure all students complete the application form by October 20th.",
            "11:15 AM",
            "11:15",
            "2025-10-22",
            true,
        ),
        message(
            "5",
            channel_id,
            "Ananya",
            Role::CampusLead,
            "Can we get the pitch workshop materials? Students are asking for preparation resources.",
            "11:30 AM",
            "11:30",
            "2025-10-22",
            false,
        ),
        message(
            "6",
            channel_id,
            "You",
            Role::Team,
            "I'll share the materials in a few minutes.",
            "11:32 AM",
            "11:32",
            "2025-10-22",
            true,
        ),
    ];

    transcript[2].starred = true;
    transcript[4].file_name = Some("Workshop_Guide.pdf".to_string());
    transcript[4].file_type = Some(FileKind::File);
    transcript[5].reply_to = Some(ReplyRef {
        id: "5".to_string(),
        sender: "Ananya".to_string(),
        content: "Can we get the pitch workshop materials?".to_string(),
    });

    transcript
}

fn event(
    id: &str,
    title: &str,
    program: &str,
    day: u32,
    color: &str,
    time: &str,
    visibility: Visibility,
) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        program: program.to_string(),
        date: date(2025, 10, day),
        time: Some(time.to_string()),
        description: None,
        color: color.to_string(),
        text_color: Some("text-black".to_string()),
        visibility,
        created_by: None,
        location: None,
        attendees: None,
        span: None,
    }
}

/// The October 2025 program schedule.
pub fn events() -> Vec<CalendarEvent> {
    let mut events = vec![
        event("1", "Pitch Workshop", "EdAstra", 18, "bg-lime-400", "10:00 AM", Visibility::Everyone),
        event("2", "Prelim Interviews", "EVP A25", 18, "bg-cyan-400", "2:00 PM", Visibility::Everyone),
        event("3", "Pitch Workshop", "EdAstra", 19, "bg-lime-400", "10:00 AM", Visibility::Everyone),
        event("4", "Info Session", "MS Degree College", 21, "bg-pink-300", "11:00 AM", Visibility::Everyone),
        event("5", "Info Session", "MS Degree College", 22, "bg-pink-300", "11:00 AM", Visibility::Everyone),
        event("6", "Info Session", "MS Degree College", 23, "bg-pink-300", "11:00 AM", Visibility::Everyone),
        event("7", "Main interviews - EVP A25", "", 21, "bg-cyan-500", "9:00 AM", Visibility::Team),
        event("8", "EdTalk", "Tentative", 25, "bg-purple-400", "4:00 PM", Visibility::Everyone),
        event("9", "EVP A25 Cohort Announcement", "", 25, "bg-cyan-400", "6:00 PM", Visibility::Everyone),
        event("10", "Demo Day!!!!!!!", "EdAstra", 26, "bg-yellow-400", "2:00 PM", Visibility::Everyone),
    ];

    events[6].text_color = Some("text-white".to_string());
    events[6].span = Some(3);
    events[6].created_by = Some(Role::Team);

    events
}

pub fn team_profile() -> Profile {
    Profile {
        name: "Sarah Johnson".to_string(),
        email: "sarah.johnson@edventurepark.com".to_string(),
        phone: Some("+91 98765 43210".to_string()),
        role: "Program Manager".to_string(),
        location: Some("Hyderabad, Telangana".to_string()),
        college: None,
        department: Some("Operations".to_string()),
        bio: Some(
            "Passionate about fostering innovation and entrepreneurship in students. \
             With 5+ years of experience in incubation programs, I help aspiring \
             entrepreneurs turn their ideas into successful ventures."
                .to_string(),
        ),
        skills: [
            "Program Management",
            "Mentorship",
            "Event Planning",
            "Community Building",
            "Public Speaking",
            "Strategic Planning",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        achievements: [
            "Managed 12+ cohorts",
            "Mentored 200+ students",
            "Organized 50+ events",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        joined_date: Some("2023-05-15".to_string()),
    }
}

pub fn campus_lead_profile() -> Profile {
    Profile {
        name: "Priya Sharma".to_string(),
        email: "priya.sharma@college.edu".to_string(),
        phone: Some("+91 98765 12345".to_string()),
        role: "Campus Lead".to_string(),
        location: Some("Hyderabad, Telangana".to_string()),
        college: Some("MS Degree College".to_string()),
        department: None,
        bio: Some(
            "Computer Science student passionate about building a vibrant startup \
             ecosystem on campus. Leading initiatives to connect students with \
             entrepreneurship opportunities."
                .to_string(),
        ),
        skills: [
            "Event Management",
            "Social Media Marketing",
            "Student Engagement",
            "Public Relations",
            "Content Creation",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        achievements: [
            "Organized 12 events",
            "Reached 245 students",
            "Built active community of 100+ members",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        joined_date: Some("2024-08-20".to_string()),
    }
}

pub fn profile_for(role: Role) -> Profile {
    match role {
        Role::Team => team_profile(),
        Role::CampusLead => campus_lead_profile(),
    }
}
