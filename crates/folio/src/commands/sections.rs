//! Handlers for the static portfolio sections.

use tabled::Tabled;

use folio_core::Portfolio;
use folio_core::model::{About, Certification, Hero, Resume, Skills};

use crate::error::CliError;
use crate::output::{self, RenderOpts, heading};

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct CertificationRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Issuer")]
    issuer: String,
    #[tabled(rename = "Issued")]
    date: String,
    #[tabled(rename = "Expires")]
    expiry: String,
    #[tabled(rename = "Credential")]
    credential: String,
}

impl From<&Certification> for CertificationRow {
    fn from(c: &Certification) -> Self {
        Self {
            name: c.name.clone(),
            issuer: c.issuer.clone(),
            date: util::or_dash(Some(&c.date)),
            expiry: util::or_dash(c.expiry.as_deref()),
            credential: util::or_dash(
                c.credential_url
                    .as_deref()
                    .or(c.verification_url.as_deref()),
            ),
        }
    }
}

// ── Detail views ────────────────────────────────────────────────────

fn hero_detail(h: &Hero, color: bool) -> String {
    let mut lines = vec![heading(&h.name, color), h.title.clone()];
    if !h.tagline.is_empty() {
        lines.push(format!("\n{}", h.tagline));
    }
    if !h.intro.is_empty() {
        lines.push(format!("\n{}", h.intro));
    }
    lines.join("\n")
}

fn about_detail(a: &About, color: bool) -> String {
    let mut lines = vec![a.bio.clone()];

    if !a.education.is_empty() {
        lines.push(format!("\n{}", heading("Education", color)));
        for e in &a.education {
            lines.push(format!(
                "  {} - {} ({})",
                e.degree,
                util::or_dash(Some(&e.institution)),
                year_label(&e.year)
            ));
        }
    }

    if !a.experience.is_empty() {
        lines.push(format!("\n{}", heading("Experience", color)));
        for x in &a.experience {
            lines.push(format!(
                "  {} at {} ({})",
                x.title,
                util::or_dash(Some(&x.company)),
                util::or_dash(Some(&x.duration))
            ));
        }
    }

    let interests = [
        ("Full stack", a.interests.full_stack.as_str()),
        ("Cloud computing", a.interests.cloud_computing.as_str()),
        ("Cybersecurity", a.interests.cybersecurity.as_str()),
    ];
    if interests.iter().any(|(_, v)| !v.is_empty()) {
        lines.push(format!("\n{}", heading("Interests", color)));
        for (label, value) in interests.iter().filter(|(_, v)| !v.is_empty()) {
            lines.push(format!("  {label}: {value}"));
        }
    }

    if !a.goals.is_empty() {
        lines.push(format!("\n{}", heading("Goals", color)));
        lines.push(format!("  {}", a.goals));
    }
    lines.join("\n")
}

fn skills_detail(s: &Skills, color: bool) -> String {
    let mut lines = Vec::new();
    for (label, items) in s.technical.groups() {
        if items.is_empty() {
            continue;
        }
        lines.push(format!("{:<22} {}", format!("{label}:"), items.join(", ")));
    }
    if !s.soft.is_empty() {
        lines.push(format!("\n{}", heading("Soft skills", color)));
        for soft in &s.soft {
            if soft.description.is_empty() {
                lines.push(format!("  {}", soft.name));
            } else {
                lines.push(format!("  {}: {}", soft.name, soft.description));
            }
        }
    }
    lines.join("\n")
}

fn resume_detail(r: &Resume, color: bool) -> String {
    let mut lines = vec![r.summary.clone()];

    if !r.experience.is_empty() {
        lines.push(format!("\n{}", heading("Experience", color)));
        for x in &r.experience {
            lines.push(format!(
                "  {} at {} ({})",
                x.title,
                util::or_dash(Some(&x.company)),
                util::or_dash(Some(&x.duration))
            ));
            lines.extend(x.responsibilities.iter().map(|item| format!("    - {item}")));
        }
    }

    if !r.education.is_empty() {
        lines.push(format!("\n{}", heading("Education", color)));
        for e in &r.education {
            lines.push(format!(
                "  {} - {} ({})",
                e.degree,
                util::or_dash(Some(&e.institution)),
                year_label(&e.year)
            ));
        }
    }

    if !r.skills.is_empty() {
        lines.push(format!("\n{}", heading("Skills", color)));
        lines.push(format!("  {}", r.skills.join(", ")));
    }
    if let Some(ref pdf) = r.pdf_url {
        lines.push(format!("\nPDF: {pdf}"));
    }
    lines.join("\n")
}

/// Graduation year as sent: a number, a range string, or nothing.
fn year_label(year: &serde_json::Value) -> String {
    match year {
        serde_json::Value::Null => "-".into(),
        other => util::display_id(other),
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn hero(portfolio: &Portfolio, opts: RenderOpts) -> Result<(), CliError> {
    let hero = portfolio.hero().await?;
    let out = output::render_single(
        opts.format,
        &hero,
        |h| hero_detail(h, opts.color),
        |h| h.name.clone(),
    );
    output::print_output(&out, opts.quiet);
    Ok(())
}

pub async fn about(portfolio: &Portfolio, opts: RenderOpts) -> Result<(), CliError> {
    let about = portfolio.about().await?;
    let out = output::render_single(
        opts.format,
        &about,
        |a| about_detail(a, opts.color),
        |a| a.bio.clone(),
    );
    output::print_output(&out, opts.quiet);
    Ok(())
}

pub async fn skills(portfolio: &Portfolio, opts: RenderOpts) -> Result<(), CliError> {
    let skills = portfolio.skills().await?;
    let out = output::render_single(
        opts.format,
        &skills,
        |s| skills_detail(s, opts.color),
        |s| {
            s.technical
                .groups()
                .iter()
                .flat_map(|(_, items)| items.iter().cloned())
                .collect::<Vec<_>>()
                .join("\n")
        },
    );
    output::print_output(&out, opts.quiet);
    Ok(())
}

pub async fn resume(portfolio: &Portfolio, opts: RenderOpts) -> Result<(), CliError> {
    let resume = portfolio.resume().await?;
    let out = output::render_single(
        opts.format,
        &resume,
        |r| resume_detail(r, opts.color),
        |r| r.pdf_url.clone().unwrap_or_default(),
    );
    output::print_output(&out, opts.quiet);
    Ok(())
}

/// Certifications, or the legacy certificates endpoint when `legacy`.
pub async fn certifications(
    portfolio: &Portfolio,
    opts: RenderOpts,
    legacy: bool,
) -> Result<(), CliError> {
    let certs = if legacy {
        portfolio.certificates().await?
    } else {
        portfolio.certifications().await?
    };
    let out = output::render_list(
        opts.format,
        &certs,
        |c| CertificationRow::from(c),
        |c| c.name.clone(),
    );
    output::print_output(&out, opts.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn skills_detail_skips_empty_groups() {
        let skills: Skills = serde_json::from_value(json!({
            "technical": { "languages": ["Rust", "Go"], "cloud": ["AWS"] },
            "soft": [{ "name": "Communication" }]
        }))
        .unwrap();
        let out = skills_detail(&skills, false);
        assert!(out.contains("Programming Languages: Rust, Go"));
        assert!(out.contains("Cloud Computing:"));
        assert!(!out.contains("DevOps Tools"));
        assert!(out.contains("  Communication"));
    }

    #[test]
    fn education_year_accepts_number_or_range() {
        assert_eq!(year_label(&json!(2020)), "2020");
        assert_eq!(year_label(&json!("2016-2020")), "2016-2020");
        assert_eq!(year_label(&serde_json::Value::Null), "-");
    }

    #[test]
    fn certification_row_prefers_credential_url() {
        let cert: Certification = serde_json::from_value(json!({
            "id": 1, "name": "CKA", "issuer": "CNCF",
            "verificationUrl": "https://verify.example/1"
        }))
        .unwrap();
        let row = CertificationRow::from(&cert);
        assert_eq!(row.credential, "https://verify.example/1");
        assert_eq!(row.expiry, "-");
    }
}
