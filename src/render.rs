//! Renders portfolio content into document rows and their geometry.
//!
//! The whole page is rendered up front as a flat list of pre-wrapped rows so
//! that scrolling is a plain row offset. While rendering, each section's row
//! band is recorded into a [`DocumentLayout`]; that layout is the geometry
//! the scroll-spy probes, so it is rebuilt whenever the wrap width changes
//! and can never drift from what is on screen. The copyright footer is
//! rendered after the last section without a band of its own, so scrolling
//! past the final section leaves the active id untouched.

use crate::content::{Certificate, Education, Engagement, Experience, Portfolio};
use crate::geometry::DocumentLayout;
use crate::section::SectionRegistry;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use textwrap::wrap;

/// Pre-wrapped document rows plus the section geometry they imply.
pub struct RenderedDocument {
    /// Every row of the page, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// Row band of each registered section.
    pub layout: DocumentLayout,
}

/// Renders the full page at the given wrap width.
#[must_use]
pub fn render(
    portfolio: &Portfolio,
    registry: &SectionRegistry,
    width: usize,
) -> RenderedDocument {
    let width = width.max(24);
    let mut lines = Vec::new();
    let mut layout = DocumentLayout::new();

    for descriptor in registry {
        let section = match descriptor.id.as_str() {
            "hero" => render_hero(portfolio, width),
            "about" => render_about(portfolio, &descriptor.label, width),
            "education" => render_education(portfolio, &descriptor.label, width),
            "experience" => render_experience(portfolio, &descriptor.label, width),
            "skills" => render_skills(portfolio, &descriptor.label, width),
            "activities" => {
                render_engagements(&portfolio.activities, &descriptor.label, width)
            }
            "volunteer" => render_engagements(&portfolio.volunteer, &descriptor.label, width),
            "certificates" => render_certificates(portfolio, &descriptor.label, width),
            "contact" => render_contact(portfolio, &descriptor.label, width),
            _ => Vec::new(),
        };
        if section.is_empty() {
            // Unknown or empty section: registered but absent from the
            // layout, so the spy skips it instead of matching a zero band.
            continue;
        }
        layout.push_band(&descriptor.id, section.len());
        lines.extend(section);
    }

    lines.push(Line::from(Span::styled(
        format!("© 2025 {}. Tous droits réservés.", portfolio.profile.name),
        Style::default().fg(Color::DarkGray),
    )));

    RenderedDocument { lines, layout }
}

fn heading(label: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            label.to_uppercase(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "─".repeat(24),
            Style::default().fg(Color::Blue),
        )),
        Line::default(),
    ]
}

fn paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), style)))
        .collect()
}

fn meta_line(period: &str, location: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("{period} · {location}"),
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_hero(portfolio: &Portfolio, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(), Line::default()];
    lines.push(Line::from(Span::styled(
        portfolio.profile.name.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    for headline in &portfolio.profile.headline {
        lines.extend(paragraph(headline, width, Style::default().fg(Color::Gray)));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "▼ Défiler pour découvrir",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::default());
    lines.push(Line::default());
    lines
}

fn render_about(portfolio: &Portfolio, label: &str, width: usize) -> Vec<Line<'static>> {
    let about = &portfolio.about;
    let mut lines = heading(label);
    lines.extend(paragraph(&about.summary, width, Style::default()));
    lines.push(Line::default());
    lines.push(meta_line(&about.availability, &about.location));
    for (name, value) in [
        ("Email", &about.email),
        ("Tél", &about.phone),
        ("LinkedIn", &about.linkedin),
    ] {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{name}: "),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(value.clone()),
        ]));
    }
    lines.push(Line::default());
    lines
}

fn render_education(portfolio: &Portfolio, label: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading(label);
    for Education {
        school,
        degree,
        period,
        location,
        note,
    } in &portfolio.education
    {
        lines.push(Line::from(Span::styled(
            school.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(paragraph(degree, width, Style::default()));
        lines.push(meta_line(period, location));
        if let Some(note) = note {
            lines.push(Line::from(Span::styled(
                note.clone(),
                Style::default().fg(Color::Green),
            )));
        }
        lines.push(Line::default());
    }
    lines
}

fn render_experience(portfolio: &Portfolio, label: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading(label);
    for Experience {
        company,
        position,
        period,
        location,
        description,
    } in &portfolio.experience
    {
        lines.push(Line::from(Span::styled(
            company.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            position.clone(),
            Style::default().fg(Color::Blue),
        )));
        lines.push(meta_line(period, location));
        lines.extend(paragraph(description, width, Style::default()));
        lines.push(Line::default());
    }
    lines
}

fn render_skills(portfolio: &Portfolio, label: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading(label);
    for category in &portfolio.skills {
        lines.push(Line::from(Span::styled(
            category.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(paragraph(
            &category.skills.join(" · "),
            width,
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::default());
    }
    lines
}

fn render_engagements(
    engagements: &[Engagement],
    label: &str,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = heading(label);
    for Engagement {
        organization,
        position,
        period,
        location,
        description,
    } in engagements
    {
        lines.push(Line::from(Span::styled(
            organization.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            position.clone(),
            Style::default().fg(Color::Green),
        )));
        lines.push(meta_line(period, location));
        lines.extend(paragraph(description, width, Style::default()));
        lines.push(Line::default());
    }
    lines
}

fn render_certificates(portfolio: &Portfolio, label: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading(label);
    for Certificate {
        title,
        issuer,
        date,
        description,
        credential_id,
    } in &portfolio.certificates
    {
        lines.push(Line::from(Span::styled(
            title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled(issuer.clone(), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" · {date} · ID: {credential_id}"),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.extend(paragraph(description, width, Style::default()));
        lines.push(Line::default());
    }
    lines
}

fn render_contact(portfolio: &Portfolio, label: &str, width: usize) -> Vec<Line<'static>> {
    let contact = &portfolio.contact;
    let mut lines = heading(label);
    lines.extend(paragraph(&contact.pitch, width, Style::default()));
    lines.push(Line::default());
    for (name, value) in [
        ("Email", &contact.email),
        ("Téléphone", &contact.phone),
        ("LinkedIn", &contact.linkedin),
    ] {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{name}: "),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(value.clone()),
        ]));
    }
    lines.push(Line::default());
    lines
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
