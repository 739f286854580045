use chrono::{TimeZone, Utc};
use dealdesk_domain::{Deal, ReminderKind, User};

fn format_due_date(due_date: i64) -> String {
    match Utc.timestamp_millis_opt(due_date).single() {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => due_date.to_string(),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One line summary of what is coming up on the `Deal`
pub fn notification_body(kind: ReminderKind, deal: &Deal, due_date: i64) -> String {
    let due = format_due_date(due_date);
    match kind {
        ReminderKind::PaymentDue => {
            format!("A payment for \"{}\" is due on {}.", deal.title, due)
        }
        ReminderKind::DeliverableDue => {
            format!("A deliverable for \"{}\" is due on {}.", deal.title, due)
        }
        ReminderKind::PublishDate => {
            format!("Content for \"{}\" is scheduled to publish on {}.", deal.title, due)
        }
    }
}

pub fn email_html(kind: ReminderKind, deal: &Deal, recipient: &User, due_date: i64) -> String {
    let action = match kind {
        ReminderKind::PaymentDue => "Make sure the invoice has been sent and follow up with the brand if needed.",
        ReminderKind::DeliverableDue => "Check in with the creator so the deliverable is ready on time.",
        ReminderKind::PublishDate => "Confirm the content is approved and ready to go live.",
    };
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
        <h2 style="color: #111827;">{subject}</h2>
        <p>Hi {name},</p>
        <p>{body}</p>
        <p>{action}</p>
        <p style="color: #6b7280; margin-top: 20px;">You are receiving this because you own this Dealdesk workspace.</p>
        </div>"#,
        subject = kind.email_subject(),
        name = escape_html(&recipient.name),
        body = escape_html(&notification_body(kind, deal, due_date)),
        action = action,
    )
}
