//! Animation and scroll math shared by the components.
//!
//! Kept free of DOM types so it can be exercised without a browser.

/// Offset above the viewport top at which a section counts as active.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
/// Scroll distance after which the navbar gets its solid background.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

/// Pose an element starts from before it is revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealFrom {
    /// Fades in while rising into place.
    #[default]
    Below,
    Left,
    Right,
    /// Fades in while growing from 80%.
    Scale,
    /// Plain fade.
    Fade,
}

impl RevealFrom {
    fn hidden(self) -> &'static str {
        match self {
            Self::Below => "opacity-0 translate-y-8",
            Self::Left => "opacity-0 -translate-x-6",
            Self::Right => "opacity-0 translate-x-5",
            Self::Scale => "opacity-0 scale-80",
            Self::Fade => "opacity-0",
        }
    }
}

const SHOWN: &str = "opacity-100 translate-x-0 translate-y-0 scale-100";

pub fn reveal_class(in_view: bool, from: RevealFrom) -> String {
    let pose = if in_view { SHOWN } else { from.hidden() };
    format!("transition-all duration-700 ease-out {pose}")
}

/// Delay for the `index`th item of a staggered group.
pub fn stagger_ms(base: u32, index: usize, step: u32) -> u32 {
    base + step * index as u32
}

/// Splits a stat such as `1+` into the number to count up to and the
/// suffix kept verbatim. Stats without digits are not animated.
pub fn parse_stat(value: &str) -> Option<(u32, String)> {
    let digits = value
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();
    let suffix = value
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect::<String>();
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => Some((n, suffix)),
        _ => None,
    }
}

/// Counter value after `frame` of `frames` ticks on an ease-out cubic curve.
pub fn ease_out_value(target: u32, frame: u32, frames: u32) -> u32 {
    if frames == 0 || frame >= frames {
        return target;
    }
    let t = frame as f64 / frames as f64;
    let eased = 1.0 - (1.0 - t).powi(3);
    (eased * target as f64).round() as u32
}

/// Page scroll position as a percentage of the scrollable height.
pub fn scroll_progress(scroll_y: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let scrollable = doc_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// The last section, in page order, whose top has scrolled within
/// [`ACTIVE_SECTION_OFFSET`] of the viewport top. `tops` pairs each section
/// id with its bounding-rect top, `None` when the element is missing.
pub fn active_section<'a>(tops: &[(&'a str, Option<f64>)]) -> Option<&'a str> {
    tops.iter()
        .rev()
        .find(|(_, top)| top.is_some_and(|t| t <= ACTIVE_SECTION_OFFSET))
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class() {
        let hidden = reveal_class(false, RevealFrom::Below);
        assert!(hidden.contains("opacity-0"));
        assert!(hidden.contains("translate-y-8"));

        let shown = reveal_class(true, RevealFrom::Below);
        assert!(shown.contains("opacity-100"));
        assert!(!shown.contains("opacity-0"));
        assert!(shown.starts_with("transition-all"));
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_ms(300, 0, 100), 300);
        assert_eq!(stagger_ms(300, 4, 100), 700);
        assert_eq!(stagger_ms(0, 2, 150), 300);
    }

    #[test]
    fn test_parse_stat() {
        assert_eq!(parse_stat("1+"), Some((1, "+".to_string())));
        assert_eq!(parse_stat("3"), Some((3, String::new())));
        assert_eq!(parse_stat("US"), None);
        assert_eq!(parse_stat("0"), None);
    }

    #[test]
    fn test_ease_out_value() {
        assert_eq!(ease_out_value(10, 0, 60), 0);
        assert_eq!(ease_out_value(10, 60, 60), 10);
        assert_eq!(ease_out_value(10, 90, 60), 10);
        assert_eq!(ease_out_value(7, 3, 0), 7);

        // ease-out front-loads progress
        assert!(ease_out_value(100, 30, 60) > 50);

        let mut last = 0;
        for frame in 0..=60 {
            let v = ease_out_value(100, frame, 60);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
        // overscroll
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
        // page shorter than the viewport
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_active_section() {
        let tops = [
            ("home", Some(-900.0)),
            ("about", Some(40.0)),
            ("skills", Some(700.0)),
        ];
        assert_eq!(active_section(&tops), Some("about"));

        let tops = [("home", Some(0.0)), ("about", None), ("skills", Some(100.0))];
        assert_eq!(active_section(&tops), Some("skills"));

        let tops = [("home", Some(150.0)), ("about", Some(900.0))];
        assert_eq!(active_section(&tops), None);
    }
}
