//! Conditional GA4 snippet rendering.

use crate::probe::NavigationProbe;
use beacon_kernel::domain::constants::{GTAG_SCRIPT_URL, LIVEWIRE_NAVIGATED_EVENT};
use beacon_kernel::security::escape::escape_attribute;
use std::fmt::Write;

/// Renders the GA4 tracking snippet for one configured measurement ID.
///
/// The renderer is bound to its measurement ID and probe at construction and
/// holds no other state, so a single instance can serve any number of
/// concurrent callers. Output is final HTML; callers inject it verbatim and
/// must not escape it again.
#[derive(Debug)]
pub struct SnippetRenderer {
    measurement_id: Option<String>,
    probe: Box<dyn NavigationProbe>,
}

impl SnippetRenderer {
    /// Create a renderer for the given measurement ID and navigation probe.
    #[must_use]
    pub fn new(measurement_id: Option<String>, probe: Box<dyn NavigationProbe>) -> Self {
        Self { measurement_id, probe }
    }

    /// Render the tracking markup, or an empty string when unconfigured.
    ///
    /// An absent or whitespace-only measurement ID renders nothing: a host
    /// without tracking configured (development, test) must get a clean page,
    /// never placeholder markup. Every occurrence of the ID in the output is
    /// attribute-escaped.
    ///
    /// The automatic first page view is disabled (`send_page_view: false`) so
    /// the host controls when the first view fires. When the probe reports a
    /// soft-navigation client shell, a listener re-fires the config call on
    /// every client-side route change to make up for it.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(id) = self.measurement_id.as_deref().map(str::trim).filter(|id| !id.is_empty())
        else {
            return String::new();
        };

        let id = escape_attribute(id);

        let mut html = format!(
            "<script async src=\"{GTAG_SCRIPT_URL}?id={id}\"></script>\n\
             <script>\n    \
                 window.dataLayer = window.dataLayer || [];\n    \
                 function gtag(){{dataLayer.push(arguments);}}\n    \
                 gtag('js', new Date());\n    \
                 gtag('config', \"{id}\", {{ send_page_view: false }});\n\
             </script>\n"
        );

        if self.probe.is_present() {
            // write! to a String cannot fail.
            let _ = write!(
                html,
                "<script>\n    \
                     document.addEventListener('{LIVEWIRE_NAVIGATED_EVENT}', function () {{\n        \
                         gtag('config', \"{id}\", {{ send_page_view: false }});\n    \
                     }});\n\
                 </script>\n"
            );
        }

        html
    }
}
