//! Camera barcode scanning through the ZXing browser library.
//!
//! The library is loaded by the host page. [`BarcodeScanner`] starts it through
//! `document::eval` on mount, receives decoded texts over the eval channel and
//! stops the camera on unmount.

use dioxus::prelude::*;

pub const ZXING_BROWSER_JS: &str =
    "https://unpkg.com/@zxing/browser@0.1.5/umd/zxing-browser.min.js";

const VIDEO_ELEMENT_ID: &str = "isbn-scanner-video";

// The handle is registered before the camera permission prompt resolves, so a
// stop issued while the prompt is open still shuts the stream down afterwards.
const START_SCANNER_JS: &str = r#"
    if (typeof ZXingBrowser === "undefined") {
        console.warn("ZXing browser library is not loaded");
        return;
    }
    const scan = { stopped: false, controls: null };
    window.__bookshelfScanner = scan;
    const reader = new ZXingBrowser.BrowserMultiFormatReader();
    const controls = await reader.decodeFromVideoDevice(
        undefined,
        "isbn-scanner-video",
        (result) => {
            if (result && !scan.stopped) {
                dioxus.send(result.getText());
            }
        }
    );
    if (scan.stopped) {
        controls.stop();
    } else {
        scan.controls = controls;
    }
"#;

const STOP_SCANNER_JS: &str = r#"
    const scan = window.__bookshelfScanner;
    if (scan) {
        scan.stopped = true;
        if (scan.controls) {
            scan.controls.stop();
        }
        window.__bookshelfScanner = null;
    }
"#;

/// Barcode symbologies used on books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanFormat {
    Ean13,
    Ean8,
}

impl ScanFormat {
    pub fn detect(text: &str) -> Option<Self> {
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match text.len() {
            13 => Some(ScanFormat::Ean13),
            8 => Some(ScanFormat::Ean8),
            _ => None,
        }
    }
}

/// Keep only EAN-13 and EAN-8 codes.
pub fn accept_scan(text: &str) -> Option<String> {
    let text = text.trim();
    ScanFormat::detect(text).map(|_| text.to_string())
}

/// Live camera preview that reports each accepted barcode.
#[component]
pub fn BarcodeScanner(on_scan: EventHandler<String>) -> Element {
    use_future(move || async move {
        let mut eval = document::eval(START_SCANNER_JS);
        loop {
            match eval.recv::<String>().await {
                Ok(text) => match accept_scan(&text) {
                    Some(code) => on_scan.call(code),
                    None => tracing::debug!("Ignoring barcode {text:?}"),
                },
                Err(e) => {
                    tracing::warn!("Barcode scanner stopped: {e:?}");
                    break;
                }
            }
        }
    });

    use_drop(|| {
        let _ = document::eval(STOP_SCANNER_JS);
    });

    rsx! {
        video {
            id: VIDEO_ELEMENT_ID,
            class: "scanner-video",
            "autoplay": "true",
            "muted": "true",
            "playsinline": "true",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_formats() {
        assert_eq!(ScanFormat::detect("9780441172719"), Some(ScanFormat::Ean13));
        assert_eq!(ScanFormat::detect("96385074"), Some(ScanFormat::Ean8));
        assert_eq!(ScanFormat::detect("978044117271"), None);
        assert_eq!(ScanFormat::detect("97804411727X9"), None);
    }

    #[test]
    fn test_stop_reaches_a_scanner_still_starting() {
        let (before, after) = START_SCANNER_JS
            .split_once("await reader.decodeFromVideoDevice")
            .unwrap();
        // Registered before waiting on the camera, checked again once it is granted
        assert!(before.contains("window.__bookshelfScanner = scan;"));
        assert!(after.contains("if (scan.stopped) {\n        controls.stop();"));
        assert!(after.contains("!scan.stopped"));
        assert!(STOP_SCANNER_JS.contains("scan.stopped = true;"));
    }

    #[test]
    fn test_accept_scan() {
        assert_eq!(accept_scan(" 9780441172719\n").as_deref(), Some("9780441172719"));
        assert!(accept_scan("https://example.com").is_none());
        assert!(accept_scan("").is_none());
    }
}
