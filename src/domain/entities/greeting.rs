//
// Copyright (c) 2026 Nathan Fiedler
//
use std::fmt;

///
/// Salutation shown on the greeting page, chosen by the hour of the day.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    ///
    /// Select the greeting for the given hour (0 through 23).
    ///
    /// Hours before noon are morning, hours before 18:00 are afternoon, and
    /// everything else is evening, including any value above 23.
    ///
    pub fn for_hour(hour: u32) -> Self {
        if hour < 12 {
            Greeting::Morning
        } else if hour < 18 {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        }
    }

    /// Return the text to be displayed for this greeting.
    pub fn as_str(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Evening => "Good Evening",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_hour_morning() {
        for hour in 0..12 {
            assert_eq!(Greeting::for_hour(hour), Greeting::Morning, "hour: {}", hour);
        }
    }

    #[test]
    fn test_for_hour_afternoon() {
        for hour in 12..18 {
            assert_eq!(
                Greeting::for_hour(hour),
                Greeting::Afternoon,
                "hour: {}",
                hour
            );
        }
    }

    #[test]
    fn test_for_hour_evening() {
        for hour in 18..24 {
            assert_eq!(Greeting::for_hour(hour), Greeting::Evening, "hour: {}", hour);
        }
        // out of range values fall through to evening
        assert_eq!(Greeting::for_hour(24), Greeting::Evening);
        assert_eq!(Greeting::for_hour(u32::MAX), Greeting::Evening);
    }

    #[test]
    fn test_greeting_text() {
        assert_eq!(Greeting::Morning.as_str(), "Good Morning");
        assert_eq!(Greeting::Afternoon.as_str(), "Good Afternoon");
        assert_eq!(Greeting::Evening.to_string(), "Good Evening");
    }
}
