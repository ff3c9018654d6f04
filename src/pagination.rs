//! Page size and page number are never stored: they are read back out of the
//! fetch URL every time they are needed.

use leptos::logging::warn;
use url::Url;

use crate::config::{LIMIT_PARAM, OFFSET_PARAM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Raw `limit` parameter, `"0"` when absent.
    pub page_size: String,
    pub page_number: i64,
}

pub fn derive_view(url: &str) -> PageView {
    let parsed = Url::parse(url).ok();
    let param = |name: &str| {
        parsed
            .as_ref()
            .and_then(|url| url.query_pairs().find(|(key, _)| key == name))
            .map(|(_, value)| value.into_owned())
            .unwrap_or_else(|| "0".to_string())
    };
    let limit = param(LIMIT_PARAM);
    let offset = param(OFFSET_PARAM);

    PageView {
        page_number: page_number(to_number(&offset), to_number(&limit)),
        page_size: limit,
    }
}

/// ceil(offset / limit), or 0 whenever that is not a finite non-zero number.
pub fn page_number(offset: f64, limit: f64) -> i64 {
    let page = (offset / limit).ceil();
    if page.is_finite() && page != 0.0 {
        page as i64
    } else {
        0
    }
}

/// Copy of `url` with its `limit` parameter replaced by `page_size`.
///
/// Follows `URLSearchParams.set`: the first `limit` takes the new value, later
/// duplicates are dropped, and a missing one is appended. An unparsable URL is
/// returned unchanged.
pub fn with_page_size(url: &str, page_size: &str) -> String {
    let mut parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("[PAGE] Cannot set page size on {:?}: {}", url, err);
            return url.to_string();
        }
    };

    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .into_owned()
        .filter_map(|(key, value)| match (key == LIMIT_PARAM, replaced) {
            (false, _) => Some((key, value)),
            (true, false) => {
                replaced = true;
                Some((key, page_size.to_string()))
            }
            (true, true) => None,
        })
        .collect();
    if !replaced {
        pairs.push((LIMIT_PARAM.to_string(), page_size.to_string()));
    }

    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.into()
}

// Lenient numeric read: blank is zero, garbage is NaN.
fn to_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
