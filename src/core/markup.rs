// Pure HTML builders over the content tables. Kept free of `web_sys` so the
// generated markup can be asserted in host tests; the wasm side only injects
// the strings into containers.

use super::content::{
    self, Track, AWARDS, CONTACT_CARDS, GUIDELINE_SECTIONS, HOME_HIGHLIGHTS, TIMELINE_PHASES,
    TRACKS,
};

const FALLBACK_RGB: (u8, u8, u8) = (51, 130, 141);

fn rgb(color: &str) -> (u8, u8, u8) {
    content::hex_to_rgb(color).unwrap_or(FALLBACK_RGB)
}

pub fn home_html() -> String {
    let highlights: String = HOME_HIGHLIGHTS
        .iter()
        .map(|item| format!(r#"<div class="highlight-card">{item}</div>"#))
        .collect();
    format!(
        concat!(
            r#"<div class="hero">"#,
            r#"<h1 class="hero-title">{title}</h1>"#,
            r#"<p class="hero-subtitle">{subtitle}</p>"#,
            r#"<p class="hero-organizers">{organizers}</p>"#,
            r#"</div>"#,
            r#"<div class="highlights-grid">{highlights}</div>"#
        ),
        title = content::SITE_TITLE,
        subtitle = content::SITE_SUBTITLE,
        organizers = content::ORGANIZERS,
        highlights = highlights,
    )
}

pub fn track_card_html(track: &Track) -> String {
    let (r, g, b) = rgb(track.color);
    let plural = if track.problems.len() == 1 { "" } else { "s" };
    format!(
        concat!(
            r#"<div class="track-card" id="track-card-{id}">"#,
            r#"<div class="track-header">"#,
            r#"<div class="track-icon" style="background: rgba({r}, {g}, {b}, 0.1); color: {color};">{icon}</div>"#,
            r#"<div><h3 class="track-title">{title}</h3>"#,
            r#"<p class="track-subtitle">{subtitle}</p></div>"#,
            r#"</div>"#,
            r#"<p class="track-description">{description}</p>"#,
            r#"<div class="track-problems"><div class="problem-count">{count} Problem{plural}</div></div>"#,
            r#"</div>"#
        ),
        id = track.id,
        r = r,
        g = g,
        b = b,
        color = track.color,
        icon = track.icon,
        title = track.title,
        subtitle = track.subtitle,
        description = track.description,
        count = track.problems.len(),
        plural = plural,
    )
}

pub fn tracks_grid_html() -> String {
    TRACKS.iter().map(track_card_html).collect()
}

pub fn track_modal_html(track: &Track) -> String {
    let (r, g, b) = rgb(track.color);
    let mut problems = String::new();
    for (i, problem) in track.problems.iter().enumerate() {
        let mut details = String::new();
        for (label, value) in problem.details {
            details.push_str(&format!(
                "<p><strong>{}:</strong> {}</p>",
                label.to_uppercase(),
                value
            ));
        }
        problems.push_str(&format!(
            concat!(
                r#"<div class="problem-item" style="background: rgba({r}, {g}, {b}, 0.05); border-left: 4px solid {color};">"#,
                r#"<h4 style="color: {color};">{n}. {title}</h4>"#,
                r#"<p>{description}</p>{details}</div>"#
            ),
            r = r,
            g = g,
            b = b,
            color = track.color,
            n = i + 1,
            title = problem.title,
            description = problem.description,
            details = details,
        ));
    }
    format!(
        concat!(
            r#"<div class="problem-modal-content">"#,
            r#"<div class="problem-modal-header">"#,
            r#"<h2 class="problem-modal-title" style="color: {color};">{icon} {title}</h2>"#,
            r#"<button class="problem-modal-close" id="modal-close">&times;</button>"#,
            r#"</div>"#,
            r#"<div class="problem-modal-body">"#,
            r#"<p class="problem-modal-intro">{description}</p>"#,
            r#"<h3>Problem Statements</h3>{problems}"#,
            r#"</div></div>"#
        ),
        color = track.color,
        icon = track.icon,
        title = track.title,
        description = track.description,
        problems = problems,
    )
}

pub fn registration_modal_html() -> String {
    format!(
        concat!(
            r#"<div class="problem-modal-content registration-modal">"#,
            r#"<div class="problem-modal-header">"#,
            r#"<h2 class="problem-modal-title">Registration Opens Soon!</h2>"#,
            r#"<button class="problem-modal-close" id="modal-close">&times;</button>"#,
            r#"</div>"#,
            r#"<div class="problem-modal-body">"#,
            r#"<p>Get ready for the most exciting signal processing challenge! "#,
            r#"Registration for the {title} will open during the specified dates.</p>"#,
            r#"<h3>Important Dates</h3>"#,
            r#"<div class="date-card"><strong>Registration Period:</strong><br><span>{registration}</span></div>"#,
            r#"<div class="date-card"><strong>Grand Demo Day:</strong><br><span>{demo}</span></div>"#,
            r#"</div></div>"#
        ),
        title = content::SITE_TITLE,
        registration = content::REGISTRATION_DATES,
        demo = content::GRAND_DEMO_DATES,
    )
}

pub fn timeline_html() -> String {
    let mut out = String::new();
    for phase in TIMELINE_PHASES {
        let mut details = String::new();
        if !phase.tasks.is_empty() {
            details.push_str(&list_block("Tasks:", phase.tasks));
        }
        if !phase.evaluation.is_empty() {
            details.push_str(&list_block("Evaluation Criteria:", phase.evaluation));
        }
        if !phase.rounds.is_empty() {
            details.push_str(r#"<div class="timeline-details"><h4>Competition Rounds:</h4>"#);
            for round in phase.rounds {
                details.push_str(&format!(
                    r#"<div class="timeline-round"><strong>{}</strong> - {}<br><span>{}</span></div>"#,
                    round.round, round.time, round.description
                ));
            }
            details.push_str("</div>");
        }
        let location = phase
            .location
            .map(|l| format!(r#"<div class="timeline-location">{l}</div>"#))
            .unwrap_or_default();
        out.push_str(&format!(
            concat!(
                r#"<div class="timeline-item"><div class="timeline-dot"></div>"#,
                r#"<div class="timeline-content">"#,
                r#"<h3 class="timeline-phase">{phase}</h3>"#,
                r#"<div class="timeline-dates">{dates}</div>{location}"#,
                r#"<p class="timeline-description">{description}</p>{details}"#,
                r#"</div></div>"#
            ),
            phase = phase.phase,
            dates = phase.dates,
            location = location,
            description = phase.description,
            details = details,
        ));
    }
    out
}

fn list_block(title: &str, items: &[&str]) -> String {
    let lis: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
    format!(r#"<div class="timeline-details"><h4>{title}</h4><ul>{lis}</ul></div>"#)
}

pub fn guidelines_html() -> String {
    let mut out = String::new();
    for section in GUIDELINE_SECTIONS {
        let items: String = section
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                format!(
                    r#"<div class="guideline-item"><strong>{}.</strong> {}</div>"#,
                    i + 1,
                    item
                )
            })
            .collect();
        out.push_str(&format!(
            concat!(
                r#"<div class="guidelines-section"><h2>{title}</h2>"#,
                r#"<div class="guidelines-list">{items}</div></div>"#
            ),
            title = section.title,
            items = items,
        ));
    }
    let awards: String = AWARDS
        .iter()
        .map(|award| {
            format!(
                r#"<div class="award-card"><h4>{}</h4><p>{}</p><strong>{}</strong></div>"#,
                award.title, award.description, award.prize
            )
        })
        .collect();
    out.push_str(&format!(
        concat!(
            r#"<div class="guidelines-section"><h2>Awards &amp; Recognition</h2>"#,
            r#"<div class="awards-grid">{awards}</div></div>"#
        ),
        awards = awards,
    ));
    out
}

pub fn contact_html() -> String {
    let cards: String = CONTACT_CARDS
        .iter()
        .map(|card| {
            let items: String = card
                .items
                .iter()
                .map(|(label, value)| {
                    format!(
                        r#"<div class="contact-item"><strong>{label}:</strong> {value}</div>"#
                    )
                })
                .collect();
            format!(
                concat!(
                    r#"<div class="contact-card"><h3>{title}</h3>"#,
                    r#"<div class="contact-info">{items}</div></div>"#
                ),
                title = card.title,
                items = items,
            )
        })
        .collect();
    format!(r#"<div class="contact-grid">{cards}</div>"#)
}
