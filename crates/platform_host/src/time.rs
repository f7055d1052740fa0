//! Time helpers shared by the clock surfaces (top bar, lock screen, mobile status bar).

/// Wall-clock reading in the host's local time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalClock {
    /// Full year.
    pub year: u32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Day of week, 0 = Sunday.
    pub weekday: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
}

impl LocalClock {
    /// Reads the local clock. Native builds report the unix epoch.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                weekday: 4,
                hour: 0,
                minute: 0,
            }
        }
    }

    /// Formats as `HH:MM` on a 24-hour clock.
    pub fn hh_mm_24h(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Formats as `h:MM AM` on a 12-hour clock.
    pub fn h_mm_12h(self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour}:{:02} {suffix}", self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> LocalClock {
        LocalClock {
            year: 2024,
            month: 5,
            day: 17,
            weekday: 5,
            hour,
            minute,
        }
    }

    #[test]
    fn twelve_hour_format_handles_midnight_and_noon() {
        assert_eq!(at(0, 5).h_mm_12h(), "12:05 AM");
        assert_eq!(at(12, 0).h_mm_12h(), "12:00 PM");
        assert_eq!(at(23, 59).h_mm_12h(), "11:59 PM");
    }

    #[test]
    fn twenty_four_hour_format_pads() {
        assert_eq!(at(7, 3).hh_mm_24h(), "07:03");
    }
}
