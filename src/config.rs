use crate::constants::WINDOW_FRACTION;

/// How the drawing surface picks its size.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasSizing {
    /// A fraction of the window, refit on resize.
    HalfWindow,
    Fixed { width: f64, height: f64 },
    /// Match the bounding box of the host element with this id.
    Container(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub sizing: CanvasSizing,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { sizing: CanvasSizing::HalfWindow }
    }
}

fn parse_dimension(raw: Option<String>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

impl DisplayConfig {
    /// Build from query-string style lookups: `container`, then `width` + `height`.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(id) = get("container").map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
            return Self { sizing: CanvasSizing::Container(id) };
        }
        match (parse_dimension(get("width")), parse_dimension(get("height"))) {
            (Some(width), Some(height)) => Self { sizing: CanvasSizing::Fixed { width, height } },
            _ => Self::default(),
        }
    }

    /// Read overrides from the page URL, e.g. `?container=quiz-host`.
    pub fn from_location() -> Self {
        let params = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok());
        match params {
            Some(params) => Self::from_lookup(|key| params.get(key)),
            None => Self::default(),
        }
    }

    pub fn container_id(&self) -> Option<&str> {
        match &self.sizing {
            CanvasSizing::Container(id) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Surface size given the current window size and, if present, the
    /// container's box. A missing or collapsed container falls back to the
    /// window-fraction size.
    pub fn resolve_size(&self, window: (f64, f64), container: Option<(f64, f64)>) -> (f64, f64) {
        let from_window = (window.0 * WINDOW_FRACTION, window.1 * WINDOW_FRACTION);
        match &self.sizing {
            CanvasSizing::HalfWindow => from_window,
            CanvasSizing::Fixed { width, height } => (*width, *height),
            CanvasSizing::Container(_) => match container {
                Some((w, h)) if w > 0.0 && h > 0.0 => (w, h),
                _ => from_window,
            },
        }
    }
}
