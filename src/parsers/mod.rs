pub mod html;
pub mod text;

use crate::error::DetectorResult;
use crate::signals::RawPage;

/// Formats a page snapshot can arrive in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A rendered HTML document
    Html,
    /// A JSON record following the host input contract
    Json,
}

impl InputFormat {
    /// Guess the input format from a file name or path
    pub fn from_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".json") {
            ::log::debug!("Treating {} as a JSON page record", path);
            InputFormat::Json
        } else {
            ::log::debug!("Treating {} as an HTML document", path);
            InputFormat::Html
        }
    }
}

/// Parses content in the given format into a raw page record.
///
/// `url` is only used for HTML input; JSON records carry their own URL, but
/// it fills in the URL when the record has none.
pub fn parse(content: &str, format: InputFormat, url: &str) -> DetectorResult<RawPage> {
    match format {
        InputFormat::Html => Ok(html::extract(content, url)),
        InputFormat::Json => {
            let mut raw: RawPage = serde_json::from_str(content)?;
            if raw.url.as_deref().is_none_or(str::is_empty) && !url.is_empty() {
                raw.url = Some(url.to_string());
            }
            Ok(raw)
        }
    }
}
