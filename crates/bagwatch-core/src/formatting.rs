//! Alert message text.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::domain::NotificationEvent;

const PICKUP_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p %Z";

/// Render the Telegram message body for one alert, pickup times in the
/// machine-local timezone.
pub fn alert_text(event: &NotificationEvent) -> String {
    alert_text_in(event, &Local)
}

/// Same as [`alert_text`] with an explicit timezone (deterministic in tests).
pub fn alert_text_in<Tz>(event: &NotificationEvent, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut lines = vec![format!("Shop: {}", event.display_name)];

    if let Some(window) = &event.pickup {
        lines.push(format!(
            "Pickup time: {}/{}",
            render_instant(window.start, tz),
            render_instant(window.end, tz)
        ));
    }

    let n = event.items_available;
    let noun = if n == 1 { "bag" } else { "bags" };
    lines.push(format!("{n} {noun} available"));

    lines.join("\n")
}

fn render_instant<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant.with_timezone(tz).format(PICKUP_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, PickupWindow};
    use chrono::FixedOffset;

    fn event(available: u32, pickup: Option<PickupWindow>) -> NotificationEvent {
        NotificationEvent {
            item_id: ItemId("1".to_string()),
            display_name: "Corner Bakery".to_string(),
            items_available: available,
            pickup,
            location: None,
        }
    }

    fn window() -> PickupWindow {
        PickupWindow {
            start: Utc.with_ymd_and_hms(2026, 3, 14, 17, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 3, 14, 19, 30, 0).unwrap(),
        }
    }

    #[test]
    fn renders_shop_pickup_and_count() {
        let text = alert_text_in(&event(3, Some(window())), &Utc);
        assert_eq!(
            text,
            "Shop: Corner Bakery\n\
             Pickup time: 2026-03-14 05:00 PM UTC/2026-03-14 07:30 PM UTC\n\
             3 bags available"
        );
    }

    #[test]
    fn pickup_line_omitted_when_window_unknown() {
        let text = alert_text_in(&event(2, None), &Utc);
        assert_eq!(text, "Shop: Corner Bakery\n2 bags available");
    }

    #[test]
    fn single_bag_is_singular() {
        let text = alert_text_in(&event(1, None), &Utc);
        assert!(text.ends_with("1 bag available"));
    }

    #[test]
    fn pickup_times_follow_the_given_offset() {
        let mdt = FixedOffset::west_opt(6 * 3600).unwrap();
        let text = alert_text_in(&event(1, Some(window())), &mdt);
        assert!(text.contains("2026-03-14 11:00 AM"));
        assert!(text.contains("2026-03-14 01:30 PM"));
    }
}
