use shared::domain::{Activity, ActivityCatalog};

use crate::store::{BoardState, MessageKind, TransientMessage};

/// Renders the whole board from the store. Pure: no fetching, no mutation,
/// same state in, same page out.
pub fn render_board(state: &BoardState) -> String {
    let listing = match &state.catalog_error {
        Some(fallback) => format!("<p class=\"load-error\">{}</p>", html_escape(fallback)),
        None => state
            .catalog
            .iter()
            .map(|(name, activity)| render_activity_card(name, activity, state.is_expanded(name)))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    let content = format!(
        r#"<h2>Extracurricular Activities</h2>
{message}
<div id="activities-list">
{listing}
</div>
{signup}
<form method="post" action="/reload" class="reload">
    <button type="submit">Refresh activities</button>
</form>"#,
        message = render_message(state.message.visible()),
        listing = listing,
        signup = render_signup_form(&state.catalog),
    );

    build_page("Activities", &content)
}

/// The page shown before a removal goes out. Nothing is sent until the
/// form on this page is submitted.
pub fn render_confirm_removal(activity: &str, email: &str) -> String {
    let content = format!(
        r#"<div class="confirm-card">
    <p>Remove {email} from {activity}?</p>
    <form method="post" action="/remove">
        <input type="hidden" name="activity" value="{activity}">
        <input type="hidden" name="email" value="{email}">
        <button type="submit" class="danger">Remove</button>
    </form>
    <a href="/">Cancel</a>
</div>"#,
        activity = html_escape(activity),
        email = html_escape(email),
    );

    build_page("Confirm removal", &content)
}

fn render_message(message: Option<&TransientMessage>) -> String {
    let Some(message) = message else {
        return String::new();
    };
    let class = match message.kind {
        MessageKind::Success => "success",
        MessageKind::Error => "error",
    };
    format!(
        r#"<div id="message" class="{class}">{text}</div>"#,
        class = class,
        text = html_escape(&message.text),
    )
}

fn render_activity_card(name: &str, activity: &Activity, expanded: bool) -> String {
    let toggle_label = format!(
        "{} participants ({})",
        if expanded { "Hide" } else { "Show" },
        activity.participants.len()
    );
    let participants = if expanded {
        render_participants(name, activity)
    } else {
        String::new()
    };

    format!(
        r#"<div class="activity-card">
    <h4>{name}</h4>
    <p>{description}</p>
    <p><strong>Schedule:</strong> {schedule}</p>
    <p><strong>Availability:</strong> {spots} spots left</p>
    <div class="participants-section">
        <form method="post" action="/toggle">
            <input type="hidden" name="activity" value="{name}">
            <button type="submit" class="toggle-participants">{toggle_label}</button>
        </form>
        {participants}
    </div>
</div>"#,
        name = html_escape(name),
        description = html_escape(&activity.description),
        schedule = html_escape(&activity.schedule),
        spots = activity.spots_left(),
        toggle_label = html_escape(&toggle_label),
        participants = participants,
    )
}

fn render_participants(name: &str, activity: &Activity) -> String {
    if activity.participants.is_empty() {
        return r#"<p class="no-participants">No participants yet</p>"#.to_string();
    }

    let mut items = String::new();
    for email in &activity.participants {
        items.push_str(&format!(
            r#"<span class="participant-item">
    <span class="participant-pill">{email}</span>
    <form method="get" action="/remove">
        <input type="hidden" name="activity" value="{name}">
        <input type="hidden" name="email" value="{email}">
        <button type="submit" class="remove-participant" title="Remove participant">&times;</button>
    </form>
</span>
"#,
            name = html_escape(name),
            email = html_escape(email),
        ));
    }

    format!(r#"<div class="participants">{items}</div>"#)
}

fn render_signup_form(catalog: &ActivityCatalog) -> String {
    let options: String = catalog
        .keys()
        .map(|name| {
            let name = html_escape(name);
            format!(r#"<option value="{name}">{name}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<div class="signup-card">
    <h3>Sign Up for an Activity</h3>
    <form method="post" action="/signup">
        <label for="email">Student Email</label>
        <input type="email" id="email" name="email" required placeholder="your-email@mergington.edu">
        <label for="activity">Select Activity</label>
        <select id="activity" name="activity" required>
            <option value="">-- Select an activity --</option>
            {options}
        </select>
        <button type="submit">Sign Up</button>
    </form>
</div>"#
    )
}

// --- Helpers ---

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Mergington High School</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 0; background: #f4f6f8; color: #1f2430; }}
.header {{ background: #1a3c6e; color: #fff; padding: 16px 24px; }}
.header h1 {{ margin: 0; font-size: 1.4rem; }}
.container {{ max-width: 840px; margin: 0 auto; padding: 24px; }}
.activity-card, .signup-card, .confirm-card {{ background: #fff; border-radius: 8px; padding: 16px; margin-bottom: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.12); }}
.activity-card h4 {{ margin-top: 0; }}
#message {{ padding: 10px 14px; border-radius: 6px; margin-bottom: 16px; }}
#message.success {{ background: #e3f6e6; color: #1d6b2a; }}
#message.error {{ background: #fbe4e4; color: #8f2020; }}
#message.hidden {{ display: none; }}
.participant-item {{ display: inline-flex; align-items: center; margin: 2px 6px 2px 0; }}
.participant-pill {{ background: #e8eef7; border-radius: 12px; padding: 2px 10px; }}
.remove-participant {{ border: none; background: none; color: #8f2020; cursor: pointer; font-size: 1rem; }}
.toggle-participants {{ border: none; background: none; color: #1a3c6e; cursor: pointer; padding: 0; }}
.no-participants {{ color: #667; font-style: italic; }}
.load-error {{ color: #8f2020; }}
.reload button {{ margin-top: 8px; }}
label {{ display: block; margin-top: 10px; }}
input, select {{ width: 100%; padding: 6px 8px; margin-top: 4px; box-sizing: border-box; }}
.signup-card button, .confirm-card button {{ margin-top: 12px; padding: 8px 16px; }}
.danger {{ background: #8f2020; color: #fff; border: none; border-radius: 4px; }}
</style>
</head>
<body>
<div class="header"><h1>Mergington High School</h1></div>
<div class="container">
{content}
</div>
<script>
const banner = document.getElementById('message');
if (banner) setTimeout(() => banner.classList.add('hidden'), 5000);
</script>
</body>
</html>"#,
        title = html_escape(title),
        content = content,
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
