use std::sync::OnceLock;

use dioxus::logger::tracing::warn;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

/// Files the shell injects into the document head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Asset {
    MainCss,
    /// Generated by the Tailwind CLI from `tailwind.css`; may be absent in dev builds.
    TailwindCss,
    Favicon,
}

impl Asset {
    fn file(self) -> &'static str {
        match self {
            Asset::MainCss => "main.css",
            Asset::TailwindCss => "tailwind.css",
            Asset::Favicon => "favicon.svg",
        }
    }

    fn mime(self) -> &'static str {
        match self {
            Asset::MainCss | Asset::TailwindCss => "text/css",
            Asset::Favicon => "image/svg+xml",
        }
    }

    fn bytes(self) -> Option<Vec<u8>> {
        let found = EmbeddedAssets::get(self.file()).map(|file| file.data.into_owned());
        if found.is_none() {
            warn!("Embedded asset {} not found", self.file());
        }
        found
    }

    fn text(self) -> String {
        self.bytes()
            .and_then(|bytes| match String::from_utf8(bytes) {
                Ok(text) => Some(text),
                Err(_) => {
                    warn!("Embedded asset {} is not valid UTF-8; skipping", self.file());
                    None
                }
            })
            .unwrap_or_default()
    }

    fn data_uri(self) -> String {
        self.bytes()
            .map(|bytes| format!("data:{};base64,{}", self.mime(), encode_base64(&bytes)))
            .unwrap_or_default()
    }
}

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| Asset::MainCss.text())
}

/// Empty when the stylesheet was never generated.
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS.get_or_init(|| Asset::TailwindCss.text())
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI.get_or_init(|| Asset::Favicon.data_uri())
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity((input.len() + 2) / 3 * 4);

    for chunk in input.chunks(3) {
        let mut buf = [0u8; 3];
        buf[..chunk.len()].copy_from_slice(chunk);
        let triple = u32::from(buf[0]) << 16 | u32::from(buf[1]) << 8 | u32::from(buf[2]);

        for slot in 0..4 {
            if slot <= chunk.len() {
                let index = (triple >> (18 - 6 * slot)) & 0x3f;
                output.push(TABLE[index as usize] as char);
            } else {
                output.push('=');
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_pads_short_chunks() {
        assert_eq!(encode_base64(b""), "");
        assert_eq!(encode_base64(b"f"), "Zg==");
        assert_eq!(encode_base64(b"fo"), "Zm8=");
        assert_eq!(encode_base64(b"foo"), "Zm9v");
        assert_eq!(encode_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn bundled_assets_load() {
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
        assert!(main_css().contains(".progress-track"));
    }

    #[test]
    fn stylesheets_share_a_mime_type() {
        assert_eq!(Asset::MainCss.mime(), Asset::TailwindCss.mime());
        assert_eq!(Asset::Favicon.file(), "favicon.svg");
    }
}
