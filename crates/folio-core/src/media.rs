// ── Media URL normalization ──
//
// Image and certificate links in the portfolio data are often Google Drive
// share links, which cannot be embedded directly. These helpers rewrite them
// to the embeddable preview form and reject anything malformed. `None`
// plays the role of "no usable URL".

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;
use url::Url;

const DRIVE_HOST: &str = "drive.google.com";
const DRIVE_ID_LEN: std::ops::RangeInclusive<usize> = 25..=75;

static DRIVE_FILE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/d/([a-zA-Z0-9_-]+)(?:/|$)").expect("invalid Drive file id pattern")
});

/// File id of a Drive link, query string ignored. `None` when the link has
/// no id or the id has an implausible length.
fn drive_file_id(url: &str) -> Option<&str> {
    let clean = url.split('?').next().unwrap_or_default().trim();
    let id = DRIVE_FILE_ID.captures(clean)?.get(1)?.as_str();
    DRIVE_ID_LEN.contains(&id.len()).then_some(id)
}

fn drive_preview(id: &str) -> String {
    format!("https://{DRIVE_HOST}/file/d/{id}/preview")
}

fn is_drive(url: &str) -> bool {
    url.contains(DRIVE_HOST)
}

/// Embeddable form of an image link.
///
/// Drive links become `https://drive.google.com/file/d/<id>/preview`; other
/// well-formed URLs come back unchanged; empty, malformed, or id-less Drive
/// links give `None`.
pub fn direct_image_url(url: &str) -> Option<String> {
    if url.is_empty() {
        warn!("no URL provided");
        return None;
    }

    if is_drive(url) {
        return match drive_file_id(url) {
            Some(id) => Some(drive_preview(id)),
            None => {
                warn!(url, "could not extract a valid Drive file id");
                None
            }
        };
    }

    match Url::parse(url) {
        Ok(_) => Some(url.to_owned()),
        Err(e) => {
            warn!(url, error = %e, "invalid URL");
            None
        }
    }
}

/// Whether `url` would survive [`direct_image_url`].
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    if is_drive(url) {
        return drive_file_id(url).is_some();
    }
    Url::parse(url).is_ok()
}

/// URL suitable for an embedded frame: the Drive preview form for Drive
/// links, the validated URL otherwise.
pub fn secure_url(url: &str) -> Option<String> {
    let direct = direct_image_url(url)?;
    if is_drive(url) && !url.ends_with("/preview") {
        return drive_file_id(url).map(drive_preview);
    }
    Some(direct)
}
